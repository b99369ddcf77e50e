//! Test helpers for writing catalog and criteria fixtures to disk.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Catalog with a strong birthday match, a weak match and a pending listing.
pub(super) const SAMPLE_CATALOG: &str = r#"[
  {
    "id": "ring",
    "name": "Silver ring",
    "price": 1000.0,
    "tags": ["jewelry", "handmade"],
    "instantDeliveryEligible": true,
    "status": "approved"
  },
  {
    "id": "socks",
    "price": 1000.0,
    "status": "approved"
  },
  {
    "id": "frame",
    "price": 1000.0,
    "tags": ["jewelry"],
    "status": "pending"
  },
  {
    "id": "kettle",
    "price": 2000.0,
    "status": "approved"
  }
]"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture");
}

/// Temporary directory exposed as a UTF-8 root.
#[derive(Debug)]
pub(super) struct Workspace {
    _tmp: TempDir,
    pub(super) root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self { _tmp: tmp, root }
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}
