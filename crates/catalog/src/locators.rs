use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use ignore::WalkBuilder;
use tracing::debug;
use waymark_core::{Error, LOCATOR_EXT, LocatorSource, Result};

use crate::ScanError;

/// Filesystem-backed locator source.
///
/// Discovery is eager (keys collected up front, sorted lexicographically so
/// iteration order is deterministic for a given tree); payload reads are
/// deferred until the sign builder asks for them.
#[derive(Debug)]
pub struct FsLocatorSource {
  keys: Vec<String>,
  paths: HashMap<String, PathBuf>,
}

impl FsLocatorSource {
  /// Collect every `.loc` file directly under `dir`.
  pub fn scan_dir(dir: &Path) -> std::result::Result<Self, ScanError> {
    let mut keys = Vec::new();
    let mut paths = HashMap::new();

    let walker = WalkBuilder::new(dir).max_depth(Some(1)).standard_filters(false).build();

    for entry in walker {
      let entry = entry?;
      if entry.file_type().is_none_or(|ft| ft.is_dir()) {
        continue;
      }

      let path = entry.path();
      let relative = path.strip_prefix(dir).unwrap_or(path);
      let Some(key) = relative.to_str() else {
        return Err(ScanError::NonUtf8Path(path.to_path_buf()));
      };
      if !key.ends_with(LOCATOR_EXT) {
        continue;
      }

      keys.push(key.to_string());
      paths.insert(key.to_string(), path.to_path_buf());
    }

    keys.sort();
    debug!(dir = %dir.display(), locators = keys.len(), "locator source scanned");
    Ok(Self { keys, paths })
  }
}

#[async_trait]
impl LocatorSource for FsLocatorSource {
  fn keys(&self) -> &[String] {
    &self.keys
  }

  async fn load(&self, key: &str) -> Result<String> {
    let path = self.paths.get(key).ok_or_else(|| Error::AssetRead {
      key: key.to_string(),
      source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such locator"),
    })?;

    tokio::fs::read_to_string(path).await.map_err(|source| Error::AssetRead {
      key: key.to_string(),
      source,
    })
  }
}
