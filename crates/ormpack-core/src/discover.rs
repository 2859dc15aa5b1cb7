use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{OrmpackError, Result};

/// Filename suffix tag carried by a recognized input map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SuffixTag {
    /// `*_CS` — color map with smoothness packed in one channel.
    ColorSmooth,
    /// `*_NAM` — normal map with AO and metallic packed alongside.
    NormalAoMetal,
}

impl SuffixTag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ColorSmooth => "CS",
            Self::NormalAoMetal => "NAM",
        }
    }
}

/// Split a file's stem into (prefix, tag) if it ends in a recognized suffix.
pub fn split_suffix(path: &Path) -> Option<(String, SuffixTag)> {
    let stem = path.file_stem()?.to_str()?;
    if let Some(prefix) = stem.strip_suffix("_CS") {
        return Some((prefix.to_string(), SuffixTag::ColorSmooth));
    }
    if let Some(prefix) = stem.strip_suffix("_NAM") {
        return Some((prefix.to_string(), SuffixTag::NormalAoMetal));
    }
    None
}

/// A complete CS/NAM input pair sharing one filename prefix.
#[derive(Clone, Debug)]
pub struct TexturePair {
    pub prefix: String,
    pub color_smooth: PathBuf,
    pub normal_ao_metal: PathBuf,
}

/// Scan a folder for complete CS/NAM pairs.
///
/// Non-files and unrecognized names are skipped; prefixes missing either
/// tag are dropped. Pairs come back sorted case-insensitively by prefix.
pub fn find_pairs(folder: &Path) -> Result<Vec<TexturePair>> {
    if !folder.is_dir() {
        return Err(OrmpackError::NotADirectory(folder.to_path_buf()));
    }

    let mut by_prefix: HashMap<String, (Option<PathBuf>, Option<PathBuf>)> = HashMap::new();
    for entry in std::fs::read_dir(folder)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some((prefix, tag)) = split_suffix(&path) else {
            continue;
        };
        let slot = by_prefix.entry(prefix).or_default();
        match tag {
            SuffixTag::ColorSmooth => slot.0 = Some(path),
            SuffixTag::NormalAoMetal => slot.1 = Some(path),
        }
    }

    let mut pairs: Vec<TexturePair> = by_prefix
        .into_iter()
        .filter_map(|(prefix, slots)| match slots {
            (Some(color_smooth), Some(normal_ao_metal)) => Some(TexturePair {
                prefix,
                color_smooth,
                normal_ao_metal,
            }),
            _ => None,
        })
        .collect();
    pairs.sort_by_key(|p| p.prefix.to_lowercase());

    debug!(count = pairs.len(), folder = %folder.display(), "Discovered texture pairs");
    Ok(pairs)
}
