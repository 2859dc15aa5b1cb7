use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::io::image_io::SaveOptions;

/// Which source plane feeds each ingredient of the ORM pack.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ChannelMap {
    /// Smoothness plane in the `_CS` map.
    pub smoothness: Channel,
    /// Ambient occlusion plane in the `_NAM` map.
    pub ao: Channel,
    /// Metallic plane in the `_NAM` map.
    pub metallic: Channel,
}

impl Default for ChannelMap {
    fn default() -> Self {
        Self {
            smoothness: Channel::A,
            ao: Channel::A,
            metallic: Channel::B,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JobConfig {
    /// Folder scanned for `*_CS` / `*_NAM` pairs.
    pub input: PathBuf,
    /// Folder the C/N/ORM triplets are written to.
    pub output: PathBuf,
    /// Convert smoothness to roughness (255 - v) before packing.
    #[serde(default = "default_true")]
    pub invert_smoothness: bool,
    /// Write the ORM map as RGB instead of RGBA with opaque alpha.
    #[serde(default = "default_true")]
    pub drop_orm_alpha: bool,
    #[serde(default)]
    pub channels: ChannelMap,
    #[serde(default)]
    pub save: SaveOptions,
}

fn default_true() -> bool {
    true
}
