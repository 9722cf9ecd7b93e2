use docroot::http::resolve::resolve_path;
use std::path::{Path, PathBuf};

#[test]
fn test_root_uri_maps_to_index() {
    assert_eq!(resolve_path(Path::new("./www"), b"/"), PathBuf::from("./www/index.html"));
}

#[test]
fn test_uri_is_appended_to_root() {
    assert_eq!(
        resolve_path(Path::new("./www"), b"/docs/page.html"),
        PathBuf::from("./www/docs/page.html")
    );
    assert_eq!(
        resolve_path(Path::new("/srv/site"), b"/a.html"),
        PathBuf::from("/srv/site/a.html")
    );
}

#[test]
fn test_only_bare_slash_is_substituted() {
    assert_eq!(resolve_path(Path::new("./www"), b"/docs/"), PathBuf::from("./www/docs/"));
    assert_eq!(resolve_path(Path::new("./www"), b"//"), PathBuf::from("./www//"));
}

#[test]
fn test_resolved_path_keeps_root_prefix() {
    for uri in [&b"/"[..], b"/x", b"/a/b/c", b"/../secret"] {
        let path = resolve_path(Path::new("./www"), uri);
        assert!(path.to_string_lossy().starts_with("./www/"));
    }
}

#[test]
fn test_dot_segments_are_not_normalized() {
    assert_eq!(
        resolve_path(Path::new("./www"), b"/../secret"),
        PathBuf::from("./www/../secret")
    );
}

#[test]
fn test_non_utf8_uri_bytes_are_kept() {
    use std::os::unix::ffi::OsStrExt;

    let path = resolve_path(Path::new("./www"), b"/\xff.html");
    assert_eq!(path.as_os_str().as_bytes(), b"./www/\xff.html");
}
