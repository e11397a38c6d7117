//! Implementation of the `extforge manifest` command.

use std::path::Path;

use anyhow::{Context, Result};

use extforge_lib::{build_manifest, load_config};

/// Print the manifest.json the given config would produce.
pub fn cmd_manifest(config: &str) -> Result<()> {
  let loaded = load_config(Path::new(config)).context("Failed to load configuration")?;
  let manifest = build_manifest(&loaded.config);
  let json = manifest.to_json().context("Failed to serialize manifest")?;
  println!("{}", json);
  Ok(())
}
