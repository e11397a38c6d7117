//! Implementation of the `extforge icons` command.
//!
//! Renders the icon set to a directory so the fit can be checked before export.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, warn};

use extforge_lib::consts::ICON_SIZES;
use extforge_lib::icon::{IconSet, render_icon_set};
use extforge_lib::{FitMode, load_config};

use crate::output::{format_bytes, print_entry, print_success, print_warning};

const PARTIAL_EXTENSION: &str = "png.partial";

fn discard(paths: &[PathBuf]) {
  for path in paths {
    if let Err(err) = fs::remove_file(path) {
      warn!(path = %path.display(), error = %err, "failed to remove staged icon");
    }
  }
}

/// Write every icon into `out_dir`, or none of them.
///
/// Each target is checked first, then every PNG is staged next to its target
/// and only renamed into place once all of them were written.
fn write_icons(out_dir: &Path, icons: &IconSet) -> Result<Vec<PathBuf>> {
  let targets: Vec<PathBuf> = icons.file_names().map(|name| out_dir.join(name)).collect();

  if let Some(blocked) = targets.iter().find(|path| path.is_dir()) {
    bail!("Cannot write {}: a directory is in the way", blocked.display());
  }

  let mut staged = Vec::with_capacity(targets.len());
  for (target, (_, png)) in targets.iter().zip(icons.iter()) {
    let partial = target.with_extension(PARTIAL_EXTENSION);
    if let Err(err) = fs::write(&partial, png) {
      discard(&staged);
      return Err(err).with_context(|| format!("Failed to write {}", partial.display()));
    }
    staged.push(partial);
  }

  for (i, (partial, target)) in staged.iter().zip(&targets).enumerate() {
    if let Err(err) = fs::rename(partial, target) {
      discard(&staged[i..]);
      return Err(err).with_context(|| format!("Failed to write {}", target.display()));
    }
  }

  Ok(targets)
}

/// Render every icon size into `out_dir`.
pub fn cmd_icons(config_path: &str, out_dir: &str, fit: Option<FitMode>) -> Result<()> {
  let config = load_config(Path::new(config_path))
    .context("Failed to load configuration")?
    .config;

  if !config.icon_enabled {
    print_warning(&format!("Icons are disabled in {}; nothing to render.", config_path));
    return Ok(());
  }

  let mode = fit.unwrap_or(config.fit_mode);
  debug!(mode = %mode, "rendering icon previews");

  let rt = super::runtime()?;
  let icons = rt
    .block_on(render_icon_set(config.source_image.as_deref(), mode, &ICON_SIZES))
    .context("Failed to render icons")?;

  let out_dir = Path::new(out_dir);
  fs::create_dir_all(out_dir).with_context(|| format!("Failed to create {}", out_dir.display()))?;

  let written = write_icons(out_dir, &icons)?;

  print_success(&format!("Rendered {} icons ({})", icons.len(), mode));
  for (path, (_, png)) in written.iter().zip(icons.iter()) {
    print_entry(&format!("{} ({})", path.display(), format_bytes(png.len() as u64)));
  }

  Ok(())
}
