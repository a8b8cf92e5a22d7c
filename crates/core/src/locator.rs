//! Locator payload sources.
//!
//! A locator is a sidecar file (fixed `.loc` extension) whose content is the
//! opaque location payload of a sign. Sources hand out keys in a fixed
//! iteration order; the sign builder consumes them sequentially and the
//! output order must follow the key order, so implementations must keep it
//! stable across calls.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{Error, Result};

/// Locator file extension, including the separator.
pub const LOCATOR_EXT: &str = ".loc";

/// Supplies locator keys and lazily loads each payload.
#[async_trait]
pub trait LocatorSource: Send + Sync {
  /// All locator keys, in source iteration order.
  fn keys(&self) -> &[String];

  /// Load the raw payload for one key.
  async fn load(&self, key: &str) -> Result<String>;
}

/// In-memory locator source preserving insertion order.
#[derive(Debug, Default)]
pub struct MemoryLocatorSource {
  keys: Vec<String>,
  payloads: HashMap<String, String>,
}

impl MemoryLocatorSource {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, key: impl Into<String>, payload: impl Into<String>) {
    let key = key.into();
    if !self.payloads.contains_key(&key) {
      self.keys.push(key.clone());
    }
    self.payloads.insert(key, payload.into());
  }
}

#[async_trait]
impl LocatorSource for MemoryLocatorSource {
  fn keys(&self) -> &[String] {
    &self.keys
  }

  async fn load(&self, key: &str) -> Result<String> {
    self.payloads.get(key).cloned().ok_or_else(|| Error::AssetRead {
      key: key.to_string(),
      source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such locator"),
    })
  }
}
