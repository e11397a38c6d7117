//! Implementation of the `extforge build` command.
//!
//! Exports the configured project as `<slug>.zip`. The archive is built fully
//! in memory first, so a failed export never leaves a file behind.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use extforge_lib::project::archive_file_name;
use extforge_lib::{export_project, load_config};

use crate::output::{OutputFormat, format_bytes, print_entry, print_info, print_json, print_stat, print_success};
use crate::prompts::confirm_overwrite;

#[derive(Serialize)]
struct BuildSummary<'a> {
  archive: String,
  bytes: usize,
  entries: &'a [String],
}

/// Final path component of the suggested archive name.
///
/// The name is derived from the extension name, which may contain `/` or
/// `..`; only the last component is kept so the archive stays in `--out-dir`.
fn archive_name(file_name: &str) -> PathBuf {
  match Path::new(file_name).file_name() {
    Some(name) => PathBuf::from(name),
    None => PathBuf::from(archive_file_name("")),
  }
}

/// Execute the build command.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded, the export fails, or the
/// archive cannot be written.
pub fn cmd_build(config: &str, out_dir: &str, force: bool, format: OutputFormat) -> Result<()> {
  let loaded = load_config(Path::new(config)).context("Failed to load configuration")?;

  let rt = super::runtime()?;
  let exported = rt
    .block_on(export_project(&loaded.config, &loaded.templates))
    .context("Export failed")?;

  let out_dir = Path::new(out_dir);
  fs::create_dir_all(out_dir).with_context(|| format!("Failed to create {}", out_dir.display()))?;

  let dest = out_dir.join(archive_name(&exported.file_name));
  if !confirm_overwrite(&dest, force)? {
    print_info("Aborted, existing archive left unchanged.");
    return Ok(());
  }

  fs::write(&dest, &exported.bytes).with_context(|| format!("Failed to write {}", dest.display()))?;
  info!(path = %dest.display(), bytes = exported.bytes.len(), "archive written");

  if format.is_json() {
    return print_json(&BuildSummary {
      archive: dest.display().to_string(),
      bytes: exported.bytes.len(),
      entries: &exported.paths,
    });
  }

  print_success(&format!("Exported {} v{}", exported.manifest.name, exported.manifest.version));
  for path in &exported.paths {
    print_entry(path);
  }
  println!();
  print_stat("Archive", &dest.display().to_string());
  print_stat("Size", &format_bytes(exported.bytes.len() as u64));

  Ok(())
}
