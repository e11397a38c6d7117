//! Rasterization of a source image into square PNG icons.

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;

use image::codecs::png::PngEncoder;
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use tokio::task::JoinSet;
use tracing::{debug, info};

use super::fit::{DrawRect, FitMode, compute_draw_rect};
use super::{DEFAULT_SOURCE_IMAGE, IconError, IconSet};

/// One axis of the part of the source that reaches the box, and where it lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
  src_start: u32,
  src_len: u32,
  /// May be negative; pixels outside the box are clipped when drawn.
  dst_start: i64,
  dst_len: u32,
}

/// Map one axis of the draw rectangle onto the source pixels that are visible in `[0, size)`.
///
/// The source range is widened to whole pixels and scaled at the draw rectangle's
/// own scale, so the overhang lands outside the box instead of squashing the
/// visible part. The drawn span is never narrower than one pixel.
fn visible_span(offset: f64, extent: f64, size: u32, source: u32) -> Span {
  let size_f = f64::from(size);
  let source_f = f64::from(source);
  let scale = extent / source_f;
  let to_source = source_f / extent;

  let visible_start = offset.max(0.0);
  let visible_end = (offset + extent).min(size_f);

  let src_start = ((visible_start - offset) * to_source).floor().clamp(0.0, source_f - 1.0);
  let src_end = ((visible_end - offset) * to_source).ceil().clamp(src_start + 1.0, source_f);
  let src_len = src_end - src_start;

  let dst_len = (src_len * scale).round().max(1.0);
  let dst_start = (offset + src_start * scale).round().min(size_f - 1.0);

  Span {
    src_start: src_start as u32,
    src_len: src_len as u32,
    dst_start: dst_start as i64,
    dst_len: dst_len as u32,
  }
}

/// Decode a source image into RGBA pixels.
///
/// # Errors
///
/// Returns [`IconError::UnsupportedImageFormat`] if the bytes are not a decodable image.
pub fn decode_source(bytes: &[u8]) -> Result<RgbaImage, IconError> {
  let image = image::load_from_memory(bytes).map_err(IconError::UnsupportedImageFormat)?;
  debug!(width = image.width(), height = image.height(), "decoded source image");
  Ok(image.to_rgba8())
}

fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>, IconError> {
  let mut buf = Cursor::new(Vec::new());
  PngEncoder::new(&mut buf)
    .write_image(canvas.as_raw(), canvas.width(), canvas.height(), ExtendedColorType::Rgba8)
    .map_err(IconError::Encode)?;
  Ok(buf.into_inner())
}

/// Draw `source` into a fresh transparent `size`×`size` surface and encode it as PNG.
pub fn render_icon(source: &RgbaImage, size: u32, mode: FitMode) -> Result<Vec<u8>, IconError> {
  let (sw, sh) = source.dimensions();
  let rect: DrawRect = compute_draw_rect(f64::from(sw), f64::from(sh), f64::from(size), f64::from(size), mode)?;

  let x = visible_span(rect.offset_x, rect.width, size, sw);
  let y = visible_span(rect.offset_y, rect.height, size, sh);

  let visible = imageops::crop_imm(source, x.src_start, y.src_start, x.src_len, y.src_len).to_image();
  let scaled = imageops::resize(&visible, x.dst_len, y.dst_len, FilterType::Lanczos3);

  let mut canvas = RgbaImage::new(size, size);
  imageops::replace(&mut canvas, &scaled, x.dst_start, y.dst_start);

  debug!(size, mode = %mode, ?rect, "rendered icon");
  encode_png(&canvas)
}

/// Render one PNG per requested size.
///
/// When `source` is `None` the bundled default image is used. The source is
/// decoded once and each size is rendered on the blocking pool; the result is
/// keyed `icon-<size>.png` in the order the sizes were requested.
///
/// # Errors
///
/// - [`IconError::UnsupportedImageFormat`] if the supplied image cannot be decoded
/// - [`IconError::Fit`] if a requested size is zero
pub async fn render_icon_set(source: Option<&[u8]>, mode: FitMode, sizes: &[u32]) -> Result<IconSet, IconError> {
  let bytes = match source {
    Some(bytes) => bytes.to_vec(),
    None => {
      debug!("no source image supplied, using bundled default");
      DEFAULT_SOURCE_IMAGE.to_vec()
    }
  };

  let image = tokio::task::spawn_blocking(move || decode_source(&bytes)).await??;
  let image = Arc::new(image);

  let mut join_set = JoinSet::new();
  for &size in sizes {
    let image = Arc::clone(&image);
    join_set.spawn_blocking(move || render_icon(&image, size, mode).map(|png| (size, png)));
  }

  let mut rendered = HashMap::with_capacity(sizes.len());
  while let Some(joined) = join_set.join_next().await {
    let (size, png) = joined??;
    rendered.insert(size, png);
  }

  let mut icons = IconSet::default();
  for &size in sizes {
    if let Some(png) = rendered.remove(&size) {
      icons.insert(size, png);
    }
  }

  info!(count = icons.len(), mode = %mode, "rendered icon set");
  Ok(icons)
}
