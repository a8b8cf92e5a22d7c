//! Asset discovery for the sign derivation pipeline.
//!
//! Walks an assets directory once, eagerly for images (the classifier needs
//! every format up front) and lazily for locator payloads (read one at a
//! time during the build pass). Keys are paths relative to the scanned root
//! so that a locator key minus its extension is exactly its image's catalog
//! key.

pub mod images;
pub mod locators;

pub use images::scan_images;
pub use locators::FsLocatorSource;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),
  #[error("Walk error: {0}")]
  Walk(#[from] ignore::Error),
  #[error("Non-UTF-8 asset path: {}", .0.display())]
  NonUtf8Path(std::path::PathBuf),
}
