use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to encode ico entry: {0}")]
    IcoEncode(#[source] io::Error),

    #[error("cannot allocate a {0}x{0} canvas")]
    CanvasAllocation(u32),

    #[error("ico entries must be 1..=256 px, got {0}")]
    UnsupportedIconSize(u32),
}

impl IconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        IconError::Io { path: path.into(), source }
    }
}
