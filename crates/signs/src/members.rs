use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use waymark_core::{Sign, SignGroup};

/// The word "name" plus exactly one whitespace character at the start.
static NAME_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^name\s").unwrap());

/// Collect member names from the sign list.
///
/// A member sign is an `OverlayLight` sign named "Name <member>"; the part
/// after the first whitespace character is the member. Set semantics:
/// duplicates collapse, iteration order is unspecified.
pub fn extract_members(signs: &[Sign]) -> HashSet<String> {
  let mut members = HashSet::new();

  for sign in signs {
    if sign.group != SignGroup::OverlayLight || !NAME_PREFIX.is_match(&sign.display_name) {
      continue;
    }
    if let Some((_, member)) = sign.display_name.split_once(char::is_whitespace) {
      members.insert(member.to_string());
    }
  }

  debug!(signs = signs.len(), members = members.len(), "members extracted");
  members
}
