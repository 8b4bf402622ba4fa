//! Decoded preview pixels for the selected file.

use crate::error::{CoreError, Result};
use image::GenericImageView;
use std::fs;
use std::path::Path;

/// Decoded, downscaled RGBA8 pixels of the selected file.
#[derive(Clone, PartialEq, Eq)]
pub struct Preview {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for Preview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preview")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Preview {
    /// Decodes `bytes`, shrinking so the longest side is at most `max_side`.
    pub fn decode(bytes: &[u8], max_side: u32) -> Result<Self> {
        let img = image::load_from_memory(bytes)?;
        let (w, h) = img.dimensions();
        let img = if w > max_side || h > max_side {
            img.thumbnail(max_side, max_side)
        } else {
            img
        };
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self {
            width,
            height,
            rgba: rgba.into_raw(),
        })
    }

    pub fn load(path: &Path, max_side: u32) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::decode(&bytes, max_side)
    }
}
