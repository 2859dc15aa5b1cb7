use std::fmt;
use std::str::FromStr;

use image::{imageops, GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::error::{OrmpackError, Result};

/// One plane of an RGBA8 image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    R,
    G,
    B,
    A,
}

impl Channel {
    /// Byte offset of this plane within an RGBA pixel.
    pub fn index(self) -> usize {
        match self {
            Self::R => 0,
            Self::G => 1,
            Self::B => 2,
            Self::A => 3,
        }
    }
}

impl FromStr for Channel {
    type Err = OrmpackError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "R" => Ok(Self::R),
            "G" => Ok(Self::G),
            "B" => Ok(Self::B),
            "A" => Ok(Self::A),
            other => Err(OrmpackError::UnknownChannel(other.to_string())),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::R => write!(f, "R"),
            Self::G => write!(f, "G"),
            Self::B => write!(f, "B"),
            Self::A => write!(f, "A"),
        }
    }
}

/// Extract a single plane of an RGBA image as grayscale.
pub fn extract_channel(img: &RgbaImage, channel: Channel) -> GrayImage {
    let idx = channel.index();
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        Luma([img.get_pixel(x, y).0[idx]])
    })
}

/// Invert an 8-bit grayscale image (v -> 255 - v).
pub fn invert(img: &GrayImage) -> GrayImage {
    let mut out = img.clone();
    imageops::invert(&mut out);
    out
}

/// Resample a grayscale image to the given dimensions with Lanczos3.
/// Returns a plain clone when the dimensions already match.
pub fn resize_to(img: &GrayImage, width: u32, height: u32) -> GrayImage {
    if img.dimensions() == (width, height) {
        return img.clone();
    }
    imageops::resize(img, width, height, imageops::FilterType::Lanczos3)
}

/// Merge three grayscale planes into one RGB image.
/// All planes must share the same dimensions.
pub fn merge_rgb(r: &GrayImage, g: &GrayImage, b: &GrayImage) -> Result<RgbImage> {
    let (w, h) = r.dimensions();
    for plane in [g, b] {
        let (pw, ph) = plane.dimensions();
        if (pw, ph) != (w, h) {
            return Err(OrmpackError::ChannelSizeMismatch {
                expected_w: w,
                expected_h: h,
                got_w: pw,
                got_h: ph,
            });
        }
    }
    Ok(RgbImage::from_fn(w, h, |x, y| {
        Rgb([
            r.get_pixel(x, y).0[0],
            g.get_pixel(x, y).0[0],
            b.get_pixel(x, y).0[0],
        ])
    }))
}

/// Drop the alpha plane of an RGBA image.
pub fn strip_alpha(img: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(img.width(), img.height(), |x, y| {
        let Rgba([r, g, b, _]) = *img.get_pixel(x, y);
        Rgb([r, g, b])
    })
}

/// Append a fully opaque alpha plane to an RGB image.
pub fn with_opaque_alpha(img: &RgbImage) -> RgbaImage {
    RgbaImage::from_fn(img.width(), img.height(), |x, y| {
        let Rgb([r, g, b]) = *img.get_pixel(x, y);
        Rgba([r, g, b, u8::MAX])
    })
}
