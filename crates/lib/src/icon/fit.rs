//! Draw rectangle computation for fitting a source image into a target box.
//!
//! Pure geometry over `f64`. The rectangle is expressed in target-box
//! coordinates and may extend past the box (cover mode); clipping is left to
//! the renderer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a source image is fitted into a target box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
  /// Stretch to the exact box, ignoring aspect ratio.
  #[default]
  Fill,
  /// Scale to fit entirely inside the box, centered, preserving aspect ratio.
  Contain,
  /// Scale to cover the whole box, centered, preserving aspect ratio. Overflow is clipped.
  Cover,
}

impl FitMode {
  pub const ALL: [FitMode; 3] = [FitMode::Fill, FitMode::Contain, FitMode::Cover];

  pub fn as_str(self) -> &'static str {
    match self {
      FitMode::Fill => "fill",
      FitMode::Contain => "contain",
      FitMode::Cover => "cover",
    }
  }
}

impl fmt::Display for FitMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for FitMode {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "fill" => Ok(FitMode::Fill),
      "contain" => Ok(FitMode::Contain),
      "cover" => Ok(FitMode::Cover),
      other => Err(format!("unknown fit mode '{}' (expected fill, contain or cover)", other)),
    }
  }
}

/// Errors from draw rectangle computation.
#[derive(Debug, Error, PartialEq)]
pub enum FitError {
  #[error("invalid {axis}: {value} (dimensions must be finite and greater than zero)")]
  InvalidDimension { axis: &'static str, value: f64 },
}

/// Where and how large to draw the source inside the target box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
  pub offset_x: f64,
  pub offset_y: f64,
  pub width: f64,
  pub height: f64,
}

impl DrawRect {
  pub fn right(&self) -> f64 {
    self.offset_x + self.width
  }

  pub fn bottom(&self) -> f64 {
    self.offset_y + self.height
  }
}

fn check_dimension(axis: &'static str, value: f64) -> Result<f64, FitError> {
  if value.is_finite() && value > 0.0 {
    Ok(value)
  } else {
    Err(FitError::InvalidDimension { axis, value })
  }
}

/// Compute the draw rectangle for a source of the given size in a target box.
///
/// # Errors
///
/// Returns [`FitError::InvalidDimension`] if any dimension is zero, negative or non-finite.
pub fn compute_draw_rect(
  source_width: f64,
  source_height: f64,
  target_width: f64,
  target_height: f64,
  mode: FitMode,
) -> Result<DrawRect, FitError> {
  let sw = check_dimension("source width", source_width)?;
  let sh = check_dimension("source height", source_height)?;
  let tw = check_dimension("target width", target_width)?;
  let th = check_dimension("target height", target_height)?;

  let target_ratio = tw / th;
  let source_ratio = sw / sh;
  let source_wider = source_ratio > target_ratio;

  let rect = match mode {
    FitMode::Fill => DrawRect {
      offset_x: 0.0,
      offset_y: 0.0,
      width: tw,
      height: th,
    },
    FitMode::Contain if source_wider => {
      let height = tw / source_ratio;
      DrawRect {
        offset_x: 0.0,
        offset_y: (th - height) / 2.0,
        width: tw,
        height,
      }
    }
    FitMode::Contain => {
      let width = th * source_ratio;
      DrawRect {
        offset_x: (tw - width) / 2.0,
        offset_y: 0.0,
        width,
        height: th,
      }
    }
    FitMode::Cover if source_wider => {
      let width = th * source_ratio;
      DrawRect {
        offset_x: (tw - width) / 2.0,
        offset_y: 0.0,
        width,
        height: th,
      }
    }
    FitMode::Cover => {
      let height = tw / source_ratio;
      DrawRect {
        offset_x: 0.0,
        offset_y: (th - height) / 2.0,
        width: tw,
        height,
      }
    }
  };

  Ok(rect)
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  const EPS: f64 = 1e-6;

  fn rect(sw: f64, sh: f64, tw: f64, th: f64, mode: FitMode) -> DrawRect {
    compute_draw_rect(sw, sh, tw, th, mode).unwrap()
  }

  #[test]
  fn contain_wide_source_into_square() {
    let r = rect(200.0, 100.0, 128.0, 128.0, FitMode::Contain);
    assert_eq!(r.width, 128.0);
    assert_eq!(r.height, 64.0);
    assert_eq!(r.offset_x, 0.0);
    assert_eq!(r.offset_y, 32.0);
  }

  #[test]
  fn contain_tall_source_into_square() {
    let r = rect(100.0, 200.0, 128.0, 128.0, FitMode::Contain);
    assert_eq!(r.width, 64.0);
    assert_eq!(r.height, 128.0);
    assert_eq!(r.offset_x, 32.0);
    assert_eq!(r.offset_y, 0.0);
  }

  #[test]
  fn cover_wide_source_overflows_horizontally() {
    let r = rect(200.0, 100.0, 128.0, 128.0, FitMode::Cover);
    assert_eq!(r.width, 256.0);
    assert_eq!(r.height, 128.0);
    assert_eq!(r.offset_x, -64.0);
    assert_eq!(r.offset_y, 0.0);
  }

  #[test]
  fn cover_tall_source_overflows_vertically() {
    let r = rect(100.0, 400.0, 32.0, 32.0, FitMode::Cover);
    assert_eq!(r.width, 32.0);
    assert_eq!(r.height, 128.0);
    assert_eq!(r.offset_x, 0.0);
    assert_eq!(r.offset_y, -48.0);
  }

  #[test]
  fn same_ratio_is_identical_across_modes() {
    for mode in FitMode::ALL {
      let r = rect(512.0, 512.0, 48.0, 48.0, mode);
      assert_eq!(
        r,
        DrawRect {
          offset_x: 0.0,
          offset_y: 0.0,
          width: 48.0,
          height: 48.0
        },
        "mode {}",
        mode
      );
    }
  }

  #[test]
  fn rejects_invalid_dimensions() {
    let cases = [
      (0.0, 10.0, 10.0, 10.0),
      (10.0, -1.0, 10.0, 10.0),
      (10.0, 10.0, f64::NAN, 10.0),
      (10.0, 10.0, 10.0, f64::INFINITY),
    ];
    for (sw, sh, tw, th) in cases {
      let err = compute_draw_rect(sw, sh, tw, th, FitMode::Contain).unwrap_err();
      assert!(matches!(err, FitError::InvalidDimension { .. }));
    }
  }

  #[test]
  fn invalid_dimension_names_the_axis() {
    let err = compute_draw_rect(10.0, 10.0, 0.0, 10.0, FitMode::Fill).unwrap_err();
    assert!(err.to_string().contains("target width"));
  }

  #[test]
  fn fit_mode_parses_case_insensitively() {
    assert_eq!("Cover".parse::<FitMode>().unwrap(), FitMode::Cover);
    assert_eq!(" contain ".parse::<FitMode>().unwrap(), FitMode::Contain);
    assert!("stretch".parse::<FitMode>().is_err());
  }

  #[test]
  fn fit_mode_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&FitMode::Contain).unwrap(), "\"contain\"");
    let mode: FitMode = serde_json::from_str("\"cover\"").unwrap();
    assert_eq!(mode, FitMode::Cover);
  }

  fn dimension() -> impl Strategy<Value = f64> {
    1.0f64..4096.0
  }

  proptest! {
    #[test]
    fn fill_always_matches_target(sw in dimension(), sh in dimension(), tw in dimension(), th in dimension()) {
      let r = rect(sw, sh, tw, th, FitMode::Fill);
      prop_assert_eq!(r, DrawRect { offset_x: 0.0, offset_y: 0.0, width: tw, height: th });
    }

    #[test]
    fn contain_stays_inside_and_keeps_ratio(sw in dimension(), sh in dimension(), tw in dimension(), th in dimension()) {
      let r = rect(sw, sh, tw, th, FitMode::Contain);
      let tol = EPS * tw.max(th);
      prop_assert!(r.offset_x >= -tol);
      prop_assert!(r.offset_y >= -tol);
      prop_assert!(r.right() <= tw + tol);
      prop_assert!(r.bottom() <= th + tol);
      prop_assert!(((r.width / r.height) - (sw / sh)).abs() <= EPS * (sw / sh));
    }

    #[test]
    fn cover_fills_box_and_keeps_ratio(sw in dimension(), sh in dimension(), tw in dimension(), th in dimension()) {
      let r = rect(sw, sh, tw, th, FitMode::Cover);
      let tol = EPS * tw.max(th);
      prop_assert!(r.offset_x <= tol);
      prop_assert!(r.offset_y <= tol);
      prop_assert!(r.right() >= tw - tol);
      prop_assert!(r.bottom() >= th - tol);
      prop_assert!(r.width >= tw - tol && r.height >= th - tol);
      prop_assert!(((r.width / r.height) - (sw / sh)).abs() <= EPS * (sw / sh));
    }
  }
}
