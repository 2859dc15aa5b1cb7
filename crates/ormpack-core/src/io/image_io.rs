use std::fmt;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use std::str::FromStr;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::codecs::tga::TgaEncoder;
use image::{RgbImage, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::error::{OrmpackError, Result};

/// Output image container format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Tga,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Tga => "tga",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = OrmpackError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "tga" => Ok(Self::Tga),
            other => Err(OrmpackError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Encoder settings shared by all outputs of a job.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SaveOptions {
    pub format: OutputFormat,
    /// Run-length encode TGA output. Ignored for PNG.
    pub tga_rle: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Png,
            tga_rle: true,
        }
    }
}

/// Decode any supported image file into an RGBA8 buffer.
pub fn open_rgba(path: &Path) -> Result<RgbaImage> {
    Ok(image::open(path)?.to_rgba8())
}

fn writer_for(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(BufWriter::new(File::create(path)?))
}

/// Save an RGB image, creating parent directories as needed.
pub fn save_rgb(img: &RgbImage, path: &Path, opts: &SaveOptions) -> Result<()> {
    let writer = writer_for(path)?;
    match opts.format {
        OutputFormat::Png => {
            let encoder =
                PngEncoder::new_with_quality(writer, CompressionType::Best, FilterType::Adaptive);
            img.write_with_encoder(encoder)?;
        }
        OutputFormat::Tga => {
            let mut encoder = TgaEncoder::new(writer);
            if !opts.tga_rle {
                encoder = encoder.disable_rle();
            }
            img.write_with_encoder(encoder)?;
        }
    }
    Ok(())
}

/// Save an RGBA image, creating parent directories as needed.
pub fn save_rgba(img: &RgbaImage, path: &Path, opts: &SaveOptions) -> Result<()> {
    let writer = writer_for(path)?;
    match opts.format {
        OutputFormat::Png => {
            let encoder =
                PngEncoder::new_with_quality(writer, CompressionType::Best, FilterType::Adaptive);
            img.write_with_encoder(encoder)?;
        }
        OutputFormat::Tga => {
            let mut encoder = TgaEncoder::new(writer);
            if !opts.tga_rle {
                encoder = encoder.disable_rle();
            }
            img.write_with_encoder(encoder)?;
        }
    }
    Ok(())
}
