//! Bitmap export.
//!
//! Pixmaps are stored premultiplied; export converts to straight-alpha sRGBA8
//! and encodes with the `image` crate.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::render::{Pixmap, PixmapExt};

/// Error returned by [`save_png`].
#[derive(Debug)]
pub enum ExportError {
    /// The output file could not be created or written.
    Io { path: PathBuf, source: std::io::Error },
    /// The encoder rejected the image.
    Encode { path: PathBuf, source: image::ImageError },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io { path, source } => {
                write!(f, "export error: cannot write {}: {source}", path.display())
            }
            ExportError::Encode { path, source } => {
                write!(f, "export error: cannot encode {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io { source, .. } => Some(source),
            ExportError::Encode { source, .. } => Some(source),
        }
    }
}

/// Writes a pixmap to `path` as PNG.
///
/// The file is created (or truncated) before encoding and closed on return.
pub fn save_png(pixmap: &Pixmap, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    let io_err = |source| ExportError::Io { path: path.to_path_buf(), source };
    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);

    PngEncoder::new(&mut out)
        .write_image(&pixmap.to_rgba8(), pixmap.width(), pixmap.height(), ExtendedColorType::Rgba8)
        .map_err(|source| ExportError::Encode { path: path.to_path_buf(), source })?;
    out.flush().map_err(io_err)?;

    log::debug!("wrote {}x{} PNG to {}", pixmap.width(), pixmap.height(), path.display());
    Ok(())
}
