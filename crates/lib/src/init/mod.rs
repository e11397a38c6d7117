//! Scaffold a new extension project directory.
//!
//! This module provides the core logic for the `extforge init` command, which
//! creates:
//! - `extension.json` with a starter configuration
//! - `res/default.html`, a copy of the bundled popup template to customize

use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::config::ConfigFile;
use crate::consts::{CONFIG_FILE_NAME, POPUP_TEMPLATE_FILE};
use crate::project::DEFAULT_POPUP_HTML;

/// Name of the templates directory created next to the config file.
pub const TEMPLATES_DIR_NAME: &str = "res";

/// Errors that can occur during initialization.
#[derive(Debug, Error)]
pub enum InitError {
  #[error("file already exists: {}", path.display())]
  PathExists { path: PathBuf },

  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: std::io::Error },

  #[error("failed to write file {}: {source}", path.display())]
  WriteFile { path: PathBuf, source: std::io::Error },

  #[error("failed to serialize starter config: {0}")]
  Serialize(#[from] serde_json::Error),
}

/// Options for initializing a project directory.
pub struct InitOptions {
  /// Directory to create the project in
  pub project_path: PathBuf,
}

/// Result of a successful initialization.
#[derive(Debug)]
pub struct InitResult {
  pub project_dir: PathBuf,
  /// Path to created extension.json
  pub config_file: PathBuf,
  /// Path to created popup template
  pub popup_template: PathBuf,
}

/// Initialize a new extension project directory.
///
/// # Errors
///
/// Returns an error if:
/// - `extension.json` or `res/default.html` already exist
/// - Directory creation fails
/// - File writing fails
pub fn init(options: &InitOptions) -> Result<InitResult, InitError> {
  let project_dir = options.project_path.clone();
  let config_file = project_dir.join(CONFIG_FILE_NAME);
  let templates_dir = project_dir.join(TEMPLATES_DIR_NAME);
  let popup_template = templates_dir.join(POPUP_TEMPLATE_FILE);

  // Check for existing files
  for path in [&config_file, &popup_template] {
    if path.exists() {
      return Err(InitError::PathExists { path: path.clone() });
    }
  }

  fs::create_dir_all(&templates_dir).map_err(|source| InitError::CreateDir {
    path: templates_dir.clone(),
    source,
  })?;

  let starter = serde_json::to_string_pretty(&ConfigFile::starter(TEMPLATES_DIR_NAME))?;
  fs::write(&config_file, format!("{}\n", starter)).map_err(|source| InitError::WriteFile {
    path: config_file.clone(),
    source,
  })?;

  fs::write(&popup_template, DEFAULT_POPUP_HTML).map_err(|source| InitError::WriteFile {
    path: popup_template.clone(),
    source,
  })?;

  debug!(path = %project_dir.display(), "initialized project");

  Ok(InitResult {
    project_dir,
    config_file,
    popup_template,
  })
}
