//! Icon generation.
//!
//! - [`fit`]: draw rectangle math for the `fill`, `contain` and `cover` policies
//! - [`render`]: rasterizes a source image into square PNG icons

pub mod fit;
pub mod render;

use indexmap::IndexMap;
use thiserror::Error;

use crate::consts::icon_file_name;

pub use fit::{DrawRect, FitError, FitMode, compute_draw_rect};
pub use render::{decode_source, render_icon, render_icon_set};

/// Image used when the configuration supplies no source image.
pub const DEFAULT_SOURCE_IMAGE: &[u8] = include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/res/sample_icon.png"));

/// Errors that can occur while generating icons.
#[derive(Debug, Error)]
pub enum IconError {
  #[error(transparent)]
  Fit(#[from] FitError),

  #[error("unsupported image format: {0}")]
  UnsupportedImageFormat(#[source] image::ImageError),

  #[error("failed to encode PNG: {0}")]
  Encode(#[source] image::ImageError),

  #[error("icon render task failed: {0}")]
  Task(#[from] tokio::task::JoinError),
}

/// Encoded PNG icons keyed by file name (`icon-<size>.png`), in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconSet {
  icons: IndexMap<String, Vec<u8>>,
}

impl IconSet {
  /// Store the PNG for `size`, replacing any previous icon of that size.
  pub fn insert(&mut self, size: u32, png: Vec<u8>) {
    self.icons.insert(icon_file_name(size), png);
  }

  pub fn get(&self, file_name: &str) -> Option<&[u8]> {
    self.icons.get(file_name).map(Vec::as_slice)
  }

  pub fn file_names(&self) -> impl Iterator<Item = &str> {
    self.icons.keys().map(String::as_str)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
    self.icons.iter().map(|(name, png)| (name.as_str(), png.as_slice()))
  }

  pub fn len(&self) -> usize {
    self.icons.len()
  }

  pub fn is_empty(&self) -> bool {
    self.icons.is_empty()
  }
}
