use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  /// A sign's image reference has no entry in the image catalog.
  #[error("image reference not in catalog: {reference}")]
  Lookup { reference: String },

  /// A locator payload could not be loaded from its source.
  #[error("failed to read locator {key}: {source}")]
  AssetRead {
    key: String,
    #[source]
    source: std::io::Error,
  },
}

pub type Result<T> = std::result::Result<T, Error>;
