use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

pub const INDEX_URI: &[u8] = b"/index.html";

/// Appends `uri` to `root`, serving `/index.html` for a bare `/`.
///
/// This is plain concatenation: `Path::join` would discard the root for an
/// absolute URI. The URI bytes are used as-is, with no `..` normalization
/// and no decoding.
pub fn resolve_path(root: &Path, uri: &[u8]) -> PathBuf {
    let uri = if uri == b"/" { INDEX_URI } else { uri };

    let mut joined = OsString::from(root.as_os_str());
    joined.push(OsStr::from_bytes(uri));
    PathBuf::from(joined)
}
