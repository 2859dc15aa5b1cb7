use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrmpackError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Unknown channel '{0}' (expected R, G, B or A)")]
    UnknownChannel(String),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("Channel dimensions differ: {expected_w}x{expected_h} vs {got_w}x{got_h}")]
    ChannelSizeMismatch {
        expected_w: u32,
        expected_h: u32,
        got_w: u32,
        got_h: u32,
    },
}

pub type Result<T> = std::result::Result<T, OrmpackError>;
