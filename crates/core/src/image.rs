use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Encoded format of a catalog image, detected from its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
  Png,
  Jpeg,
}

impl ImageFormat {
  pub fn from_extension(ext: &str) -> Option<Self> {
    match ext.to_ascii_lowercase().as_str() {
      "png" => Some(ImageFormat::Png),
      "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
      _ => None,
    }
  }

  /// Only PNG carries an alpha channel; transparency decides the overlay
  /// branch of classification.
  pub fn supports_transparency(&self) -> bool {
    matches!(self, ImageFormat::Png)
  }
}

/// Catalog record for one image asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMeta {
  /// Stable catalog key: the image path relative to the scanned root, with
  /// the extension stripped. Locator keys resolve to this by convention
  /// (same base name).
  pub reference: String,
  /// Original file name including extension, e.g. "black.jpg".
  pub file_name: String,
  pub format: ImageFormat,
}

/// Read-only map from extensionless asset key to image metadata.
///
/// Constructed once by the caller before a derivation pass and never
/// mutated during one.
#[derive(Debug, Clone, Default)]
pub struct ImageCatalog {
  entries: HashMap<String, ImageMeta>,
}

impl ImageCatalog {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, key: impl Into<String>, meta: ImageMeta) {
    self.entries.insert(key.into(), meta);
  }

  pub fn get(&self, key: &str) -> Option<&ImageMeta> {
    self.entries.get(key)
  }

  /// Find an entry by its original file name, e.g. "black.jpg".
  pub fn find_by_basename(&self, basename: &str) -> Option<&ImageMeta> {
    self.entries.values().find(|meta| meta.file_name == basename)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&String, &ImageMeta)> {
    self.entries.iter()
  }
}
