pub mod error;
pub mod image;
pub mod locator;
pub mod sign;

pub use error::{Error, Result};
pub use image::{ImageCatalog, ImageFormat, ImageMeta};
pub use locator::{LOCATOR_EXT, LocatorSource, MemoryLocatorSource};
pub use sign::{Sign, SignGroup};
