use std::collections::HashMap;

use waymark_core::{ImageCatalog, ImageMeta, SignGroup};

/// Resolve the background image for each overlay group.
///
/// Light overlays render on the black background and dark overlays on the
/// white one, so the slots cross over: `black.jpg` fills `OverlayLight` and
/// `white.jpg` fills `OverlayDark`. A missing background leaves its slot
/// absent rather than failing.
pub fn background_signs(catalog: &ImageCatalog) -> HashMap<SignGroup, ImageMeta> {
  let mut slots = HashMap::new();

  if let Some(meta) = catalog.find_by_basename("black.jpg") {
    slots.insert(SignGroup::OverlayLight, meta.clone());
  }
  if let Some(meta) = catalog.find_by_basename("white.jpg") {
    slots.insert(SignGroup::OverlayDark, meta.clone());
  }

  slots
}
