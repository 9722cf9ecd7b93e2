#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use docroot::config::Config;

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Fresh, empty directory under the system temp dir.
pub fn tempdir(tag: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    p.push(format!("docroot-{}-{}-{}", tag, std::process::id(), n));
    let _ = std::fs::remove_dir_all(&p);
    std::fs::create_dir_all(&p).unwrap();
    p
}

/// Document root holding `index.html` and `about.html`.
pub fn site(tag: &str) -> PathBuf {
    let root = tempdir(tag);
    std::fs::write(root.join("index.html"), INDEX).unwrap();
    std::fs::write(root.join("about.html"), ABOUT).unwrap();
    root
}

pub fn config_for(root: &Path) -> Config {
    let mut cfg = Config::default();
    cfg.server.listen_addr = "127.0.0.1:0".to_string();
    cfg.static_files.root = root.to_path_buf();
    cfg
}

pub const INDEX: &[u8] = b"<html><body><h1>Home</h1></body></html>\n";
pub const ABOUT: &[u8] = b"<html><body><p>About us</p></body></html>\n";
