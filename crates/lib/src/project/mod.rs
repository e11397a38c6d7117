//! Project assembly and export.
//!
//! The assembler lays out every file of the generated extension:
//!
//! | Path                            | When                        |
//! |---------------------------------|-----------------------------|
//! | `manifest.json`                 | always                      |
//! | `ui/popup.html`, `.css`, `.js`  | always                      |
//! | `background/service-worker.js`  | `include_background`        |
//! | `content/content-script.js`     | `include_content_script`    |
//! | `assets/icon-<size>.png`        | `icon_enabled`              |
//!
//! [`export_project`] runs the whole pipeline: it loads the popup template
//! and renders the icons concurrently, waits for both, and only then writes
//! the archive. Any failure aborts the export without producing an archive.

mod archive;
mod templates;

use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};

use crate::config::ExtensionConfig;
use crate::consts::{
  ASSETS_DIR, CONTENT_SCRIPT_PATH, DEFAULT_ARCHIVE_STEM, ICON_SIZES, MANIFEST_PATH, POPUP_CSS_PATH, POPUP_HTML_PATH,
  POPUP_JS_PATH, SERVICE_WORKER_PATH,
};
use crate::icon::{IconError, IconSet, render_icon_set};
use crate::manifest::{Manifest, build_manifest};

pub use archive::{Archive, ArchiveEntry};
pub use templates::{
  CONTENT_SCRIPT_JS, DEFAULT_POPUP_HTML, POPUP_CSS, POPUP_JS, SERVICE_WORKER_JS, TemplateSource,
};

/// Errors that can occur while assembling or exporting a project.
#[derive(Debug, Error)]
pub enum ProjectError {
  #[error("popup template unavailable at {}: {source}", path.display())]
  TemplateUnavailable { path: PathBuf, source: std::io::Error },

  #[error("icon generation failed: {0}")]
  Icon(#[from] IconError),

  #[error("failed to serialize manifest: {0}")]
  Manifest(#[from] serde_json::Error),

  #[error("archive error: {0}")]
  Archive(#[from] zip::result::ZipError),

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),
}

/// A finished export, ready to be written or downloaded.
#[derive(Debug, Clone)]
pub struct ExportedProject {
  /// Suggested download name, e.g. `my-extension.zip`.
  pub file_name: String,
  pub manifest: Manifest,
  /// Archive paths in the order they were written.
  pub paths: Vec<String>,
  /// The zip archive.
  pub bytes: Vec<u8>,
}

/// Archive file name for an extension name.
///
/// Lower-cases and trims the name and joins whitespace-separated words with
/// `-`. Falls back to `extension.zip` when nothing is left.
pub fn archive_file_name(name: &str) -> String {
  let slug = name.trim().to_lowercase().split_whitespace().collect::<Vec<_>>().join("-");
  if slug.is_empty() {
    format!("{}.zip", DEFAULT_ARCHIVE_STEM)
  } else {
    format!("{}.zip", slug)
  }
}

/// Lay out the project files.
///
/// Icons are only included when the configuration enables them.
pub fn assemble(
  config: &ExtensionConfig,
  manifest: &Manifest,
  icons: &IconSet,
  popup_html: &str,
) -> Result<Archive, ProjectError> {
  let mut archive = Archive::default();

  archive.add(MANIFEST_PATH, manifest.to_json()?);
  archive.add(POPUP_HTML_PATH, popup_html);
  archive.add(POPUP_CSS_PATH, POPUP_CSS);
  archive.add(POPUP_JS_PATH, POPUP_JS);

  if config.include_background {
    archive.add(SERVICE_WORKER_PATH, SERVICE_WORKER_JS);
  }

  if config.include_content_script {
    archive.add(CONTENT_SCRIPT_PATH, CONTENT_SCRIPT_JS);
  }

  if config.icon_enabled {
    for (file_name, png) in icons.iter() {
      archive.add(format!("{}/{}", ASSETS_DIR, file_name), png);
    }
  }

  debug!(entries = archive.len(), "assembled project");
  Ok(archive)
}

/// Load the popup template and write the project as a zip archive.
///
/// # Errors
///
/// Returns [`ProjectError::TemplateUnavailable`] if the template cannot be loaded.
pub async fn build_archive(
  config: &ExtensionConfig,
  manifest: &Manifest,
  icons: &IconSet,
  templates: &TemplateSource,
) -> Result<Vec<u8>, ProjectError> {
  let popup_html = templates.load_popup_html().await?;
  assemble(config, manifest, icons, &popup_html)?.to_zip()
}

async fn render_configured_icons(config: &ExtensionConfig) -> Result<IconSet, ProjectError> {
  if !config.icon_enabled {
    return Ok(IconSet::default());
  }
  let icons = render_icon_set(config.source_image.as_deref(), config.fit_mode, &ICON_SIZES).await?;
  Ok(icons)
}

/// Generate the complete project for a configuration.
///
/// # Errors
///
/// Fails if the template cannot be loaded, the source image cannot be decoded,
/// or the archive cannot be written. No partial result is returned.
pub async fn export_project(config: &ExtensionConfig, templates: &TemplateSource) -> Result<ExportedProject, ProjectError> {
  let manifest = build_manifest(config);

  let (popup_html, icons) = tokio::try_join!(templates.load_popup_html(), render_configured_icons(config))?;

  let archive = assemble(config, &manifest, &icons, &popup_html)?;
  let bytes = archive.to_zip()?;
  let file_name = archive_file_name(&config.name);

  info!(
    file = %file_name,
    entries = archive.len(),
    bytes = bytes.len(),
    "exported project"
  );

  Ok(ExportedProject {
    file_name,
    manifest,
    paths: archive.paths().map(String::from).collect(),
    bytes,
  })
}
