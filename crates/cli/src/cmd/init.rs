//! Implementation of the `extforge init` command.
//!
//! Scaffolds a starter `extension.json` and a popup template the user can edit.

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use extforge_lib::init::{InitOptions, init};

use crate::output::symbols;

/// Execute the init command.
///
/// # Errors
///
/// Returns an error if the files already exist or cannot be written.
pub fn cmd_init(path: &str) -> Result<()> {
  let options = InitOptions {
    project_path: Path::new(path).to_path_buf(),
  };

  let result = init(&options).context("Failed to initialize project")?;

  println!(
    "{} {}",
    symbols::SUCCESS.green(),
    "Initialized extension project!".green().bold()
  );
  println!();
  println!(
    "  {} Project directory: {}",
    symbols::INFO.cyan(),
    result.project_dir.display()
  );
  println!(
    "  {} Configuration:     {}",
    symbols::INFO.cyan(),
    result.config_file.display()
  );
  println!(
    "  {} Popup template:    {}",
    symbols::INFO.cyan(),
    result.popup_template.display()
  );
  println!();
  println!("{}", "Next steps:".bold());
  println!(
    "  1. Edit {} to describe your extension",
    result.config_file.display().to_string().cyan()
  );
  println!(
    "  2. Run: {}",
    format!("extforge build {}", result.config_file.display()).cyan()
  );

  Ok(())
}
