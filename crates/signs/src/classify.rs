//! Display-name classification.
//!
//! A sign's group falls out of its image format and a few filename
//! conventions. The rules are checked in a fixed order and the first match
//! wins; reordering them changes the result (a transparent image named
//! "black something" must become an overlay, not a course marker).

use std::sync::LazyLock;

use regex::Regex;
use waymark_core::{Error, ImageCatalog, Result, SignGroup};

/// Name ends with the word "black", any case.
static ENDS_BLACK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)black$").unwrap());
/// "black" plus exactly one whitespace plus one non-whitespace word.
static BLACK_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^black\s\S+$").unwrap());
static WHITE_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^white\s\S+$").unwrap());
/// Trailing color token, anchored to end of string.
static TRAILING_COLOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(white|green|blue|red|black)$").unwrap());

/// Classify one sign by its image reference and display name.
///
/// The only fallible step is resolving `image_reference` against the
/// catalog; the overlay branch inspects the image format, so a dangling
/// reference must fail rather than default.
pub fn classify(catalog: &ImageCatalog, image_reference: &str, display_name: &str) -> Result<SignGroup> {
  let image = catalog.get(image_reference).ok_or_else(|| Error::Lookup {
    reference: image_reference.to_string(),
  })?;

  if image.format.supports_transparency() {
    if ENDS_BLACK.is_match(display_name) {
      return Ok(SignGroup::OverlayDark);
    }
    return Ok(SignGroup::OverlayLight);
  }

  if BLACK_START.is_match(display_name) {
    return Ok(SignGroup::BlackStartCpFinish);
  }
  if WHITE_START.is_match(display_name) {
    return Ok(SignGroup::WhiteStartCpFinish);
  }

  if let Some(caps) = TRAILING_COLOR.captures(display_name)
    && let Some(group) = SignGroup::from_color_token(&caps[1])
  {
    return Ok(group);
  }

  Ok(SignGroup::Default)
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;
  use waymark_core::{ImageFormat, ImageMeta};

  use super::*;

  fn catalog() -> ImageCatalog {
    let mut catalog = ImageCatalog::new();
    for (key, file_name, format) in [
      ("overlay", "overlay.png", ImageFormat::Png),
      ("plain", "plain.jpg", ImageFormat::Jpeg),
    ] {
      catalog.insert(
        key,
        ImageMeta {
          reference: key.to_string(),
          file_name: file_name.to_string(),
          format,
        },
      );
    }
    catalog
  }

  #[test]
  fn test_transparent_image_is_overlay() {
    let catalog = catalog();
    assert_eq!(classify(&catalog, "overlay", "Black").unwrap(), SignGroup::OverlayDark);
    assert_eq!(
      classify(&catalog, "overlay", "Finish Line Black").unwrap(),
      SignGroup::OverlayDark
    );
    assert_eq!(classify(&catalog, "overlay", "Finish").unwrap(), SignGroup::OverlayLight);
    // Overlay check comes before the course-marker patterns.
    assert_eq!(classify(&catalog, "overlay", "Black Cp1").unwrap(), SignGroup::OverlayLight);
  }

  #[test]
  fn test_course_marker_patterns() {
    let catalog = catalog();
    assert_eq!(
      classify(&catalog, "plain", "Black Cp1").unwrap(),
      SignGroup::BlackStartCpFinish
    );
    assert_eq!(
      classify(&catalog, "plain", "White Cp2").unwrap(),
      SignGroup::WhiteStartCpFinish
    );
    assert_eq!(
      classify(&catalog, "plain", "black finish").unwrap(),
      SignGroup::BlackStartCpFinish
    );
  }

  #[test]
  fn test_marker_pattern_requires_single_separator() {
    let catalog = catalog();
    // No separator: falls through to the trailing-color rule instead.
    assert_eq!(classify(&catalog, "plain", "BlackCp1").unwrap(), SignGroup::Default);
    // Two words after the color: not a marker, and the color is not trailing.
    assert_eq!(classify(&catalog, "plain", "Black Cp 1").unwrap(), SignGroup::Default);
    // Nothing after the separator.
    assert_eq!(classify(&catalog, "plain", "Black ").unwrap(), SignGroup::Default);
  }

  #[test]
  fn test_trailing_color() {
    let catalog = catalog();
    assert_eq!(classify(&catalog, "plain", "Route Red").unwrap(), SignGroup::Red);
    assert_eq!(classify(&catalog, "plain", "route GREEN").unwrap(), SignGroup::Green);
    assert_eq!(classify(&catalog, "plain", "Water Blue").unwrap(), SignGroup::Blue);
    assert_eq!(classify(&catalog, "plain", "Black").unwrap(), SignGroup::Black);
    // Color word mid-name does not count.
    assert_eq!(classify(&catalog, "plain", "Red Route").unwrap(), SignGroup::Default);
  }

  #[test]
  fn test_default_fallback() {
    let catalog = catalog();
    assert_eq!(classify(&catalog, "plain", "Finish").unwrap(), SignGroup::Default);
    assert_eq!(classify(&catalog, "plain", "").unwrap(), SignGroup::Default);
  }

  #[test]
  fn test_unresolvable_reference_fails() {
    let catalog = catalog();
    let err = classify(&catalog, "missing", "Finish").unwrap_err();
    assert!(matches!(err, Error::Lookup { ref reference } if reference == "missing"));
  }
}
