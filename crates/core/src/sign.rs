use serde::{Deserialize, Serialize};

/// A classified asset pair: one locator file plus its image, ready for the
/// rendering layer.
///
/// Signs are built once per derivation pass and never mutated; they have no
/// identity beyond their fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sign {
  /// Raw content of the locator file. The format is owned by whoever wrote
  /// the file; it is carried through as an opaque blob.
  pub location_payload: String,
  /// Word-cased name derived from the locator file's base name,
  /// e.g. `finish_line_black.loc` -> "Finish Line Black".
  pub display_name: String,
  /// Catalog key of the paired image (locator key with the `.loc` extension
  /// stripped).
  pub image_reference: String,
  pub group: SignGroup,
}

/// Semantic classification of a sign, derived from its image format and
/// display name. Routes rendering behavior downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignGroup {
  Default,
  /// Transparent image meant to sit on the dark background.
  OverlayLight,
  /// Transparent image whose name ends in "black"; sits on the light
  /// background.
  OverlayDark,
  /// "Black <control>" names: start, checkpoint and finish markers of the
  /// black course.
  BlackStartCpFinish,
  /// "White <control>" names: start, checkpoint and finish markers of the
  /// white course.
  WhiteStartCpFinish,
  White,
  Green,
  Blue,
  Red,
  Black,
}

impl SignGroup {
  /// True for the two groups backed by transparency-capable images.
  pub fn is_overlay(&self) -> bool {
    matches!(self, SignGroup::OverlayLight | SignGroup::OverlayDark)
  }

  /// Map a color token to its variant. Exhaustive over the recognized
  /// colors; anything else is `None`.
  pub fn from_color_token(token: &str) -> Option<Self> {
    match token.to_ascii_lowercase().as_str() {
      "white" => Some(SignGroup::White),
      "green" => Some(SignGroup::Green),
      "blue" => Some(SignGroup::Blue),
      "red" => Some(SignGroup::Red),
      "black" => Some(SignGroup::Black),
      _ => None,
    }
  }
}
