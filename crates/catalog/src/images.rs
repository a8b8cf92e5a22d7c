use std::path::Path;

use ignore::WalkBuilder;
use tracing::{debug, trace};
use waymark_core::{ImageCatalog, ImageFormat, ImageMeta};

use crate::ScanError;

/// Walk `dir` and build the image catalog.
///
/// Assets live flat in the directory, so the walk does not descend into
/// subdirectories. Files whose extension is not a recognized image format
/// are skipped. Each image is keyed by its extensionless path relative to
/// `dir`; that key doubles as the entry's stable reference.
pub fn scan_images(dir: &Path) -> Result<ImageCatalog, ScanError> {
  let mut catalog = ImageCatalog::new();

  let walker = WalkBuilder::new(dir).max_depth(Some(1)).standard_filters(false).build();

  for entry in walker {
    let entry = entry?;
    if entry.file_type().is_none_or(|ft| ft.is_dir()) {
      continue;
    }

    let path = entry.path();
    let Some(format) = path
      .extension()
      .and_then(|ext| ext.to_str())
      .and_then(ImageFormat::from_extension)
    else {
      trace!(path = %path.display(), "not an image, skipping");
      continue;
    };

    let relative = path.strip_prefix(dir).unwrap_or(path);
    let key = relative
      .with_extension("")
      .to_str()
      .map(str::to_string)
      .ok_or_else(|| ScanError::NonUtf8Path(path.to_path_buf()))?;
    let file_name = relative
      .file_name()
      .and_then(|name| name.to_str())
      .ok_or_else(|| ScanError::NonUtf8Path(path.to_path_buf()))?
      .to_string();

    trace!(key = %key, format = ?format, "image found");
    catalog.insert(
      key.clone(),
      ImageMeta {
        reference: key,
        file_name,
        format,
      },
    );
  }

  debug!(dir = %dir.display(), images = catalog.len(), "image catalog scanned");
  Ok(catalog)
}
