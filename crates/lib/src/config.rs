//! Extension configuration.
//!
//! [`ExtensionConfig`] is the immutable snapshot of what the user asked for.
//! It is usually loaded from an `extension.json` file via [`load_config`],
//! whose keys all default so that a `{}` file is a valid configuration.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::consts::ALL_HOSTS_PATTERN;
use crate::icon::FitMode;
use crate::project::TemplateSource;

/// Errors that can occur while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config {}: {source}", path.display())]
  Read { path: PathBuf, source: std::io::Error },

  #[error("failed to parse config {}: {source}", path.display())]
  Parse { path: PathBuf, source: serde_json::Error },

  #[error("failed to read source image {}: {source}", path.display())]
  ReadImage { path: PathBuf, source: std::io::Error },
}

/// Everything needed to generate one extension project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionConfig {
  pub name: String,
  pub version: String,
  pub description: String,
  pub include_background: bool,
  pub include_content_script: bool,
  /// Checked permission keys. Order is irrelevant; the manifest uses the candidate order.
  pub permissions: BTreeSet<String>,
  /// Whether to request access to every host.
  pub all_hosts: bool,
  /// Comma-separated extra host patterns.
  pub custom_hosts: String,
  pub icon_enabled: bool,
  pub fit_mode: FitMode,
  /// Raw bytes of the user's icon source. `None` selects the bundled image.
  pub source_image: Option<Vec<u8>>,
}

impl ExtensionConfig {
  /// Host permissions in manifest order: the all-hosts pattern first (if
  /// requested), then each trimmed, non-empty custom pattern left to right.
  ///
  /// Duplicates are kept.
  pub fn host_permissions(&self) -> Vec<String> {
    let mut hosts = Vec::new();

    if self.all_hosts {
      hosts.push(ALL_HOSTS_PATTERN.to_string());
    }

    hosts.extend(
      self
        .custom_hosts
        .split(',')
        .map(str::trim)
        .filter(|host| !host.is_empty())
        .map(String::from),
    );

    hosts
  }
}

/// On-disk shape of `extension.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
  pub name: String,
  pub version: String,
  pub description: String,
  pub include_background: bool,
  pub include_content_script: bool,
  pub permissions: Vec<String>,
  pub all_hosts: bool,
  pub custom_hosts: String,
  pub icon_enabled: bool,
  pub fit_mode: FitMode,
  /// Icon source image, relative to the config file.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub source_image: Option<PathBuf>,
  /// Directory containing a `default.html` popup template, relative to the config file.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub templates_dir: Option<PathBuf>,
}

impl ConfigFile {
  /// Configuration written by `init`.
  pub fn starter(templates_dir: &str) -> Self {
    Self {
      name: "My Extension".to_string(),
      version: "0.1.0".to_string(),
      description: "A new browser extension".to_string(),
      include_background: true,
      permissions: vec!["storage".to_string()],
      icon_enabled: true,
      fit_mode: FitMode::Contain,
      templates_dir: Some(PathBuf::from(templates_dir)),
      ..Self::default()
    }
  }

  /// Resolve paths against `base_dir` and read the source image into memory.
  pub fn resolve(self, base_dir: &Path) -> Result<LoadedConfig, ConfigError> {
    let source_image = match &self.source_image {
      Some(relative) => {
        let path = base_dir.join(relative);
        let bytes = fs::read(&path).map_err(|source| ConfigError::ReadImage { path, source })?;
        Some(bytes)
      }
      None => None,
    };

    let templates = match &self.templates_dir {
      Some(dir) => TemplateSource::Directory(base_dir.join(dir)),
      None => TemplateSource::Embedded,
    };

    let config = ExtensionConfig {
      name: self.name,
      version: self.version,
      description: self.description,
      include_background: self.include_background,
      include_content_script: self.include_content_script,
      permissions: self.permissions.into_iter().collect(),
      all_hosts: self.all_hosts,
      custom_hosts: self.custom_hosts,
      icon_enabled: self.icon_enabled,
      fit_mode: self.fit_mode,
      source_image,
    };

    Ok(LoadedConfig { config, templates })
  }
}

/// A configuration file resolved into a record plus its template location.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
  pub config: ExtensionConfig,
  pub templates: TemplateSource,
}

/// Load and resolve a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if it names a
/// source image that cannot be read.
pub fn load_config(path: &Path) -> Result<LoadedConfig, ConfigError> {
  let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
    path: path.to_path_buf(),
    source,
  })?;

  let file: ConfigFile = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
    path: path.to_path_buf(),
    source,
  })?;

  let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
  debug!(path = %path.display(), base_dir = %base_dir.display(), "loaded config file");
  file.resolve(base_dir)
}
