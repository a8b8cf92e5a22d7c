//! Sign derivation pass.

use std::path::Path;

use tracing::{debug, trace};
use waymark_core::{ImageCatalog, LOCATOR_EXT, LocatorSource, Result, Sign};

use crate::classify::classify;

/// Build the full sign list from a locator source and an image catalog.
///
/// Entries are loaded and classified one at a time, in the source's key
/// order, and the output keeps that order. The first failure aborts the
/// pass; callers never observe a partial list.
pub async fn build_signs(locators: &dyn LocatorSource, catalog: &ImageCatalog) -> Result<Vec<Sign>> {
  let keys = locators.keys();
  debug!(locators = keys.len(), images = catalog.len(), "building signs");

  let mut signs = Vec::with_capacity(keys.len());
  for key in keys {
    let location_payload = locators.load(key).await?;

    let image_reference = key.strip_suffix(LOCATOR_EXT).unwrap_or(key).to_string();
    let display_name = display_name(key);
    let group = classify(catalog, &image_reference, &display_name)?;
    trace!(key = %key, group = ?group, "locator classified");

    signs.push(Sign {
      location_payload,
      display_name,
      image_reference,
      group,
    });
  }

  debug!(signs = signs.len(), "signs built");
  Ok(signs)
}

/// Derive the human-readable name from a locator key: base name, extension
/// stripped, underscore tokens word-cased and joined with spaces.
fn display_name(key: &str) -> String {
  let base = Path::new(key).file_name().and_then(|name| name.to_str()).unwrap_or(key);
  let stem = base.strip_suffix(LOCATOR_EXT).unwrap_or(base);

  stem.split('_').map(capitalize).collect::<Vec<_>>().join(" ")
}

fn capitalize(word: &str) -> String {
  let mut chars = word.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}
