//! Static project files and the popup template source.

use std::path::PathBuf;

use tracing::debug;

use super::ProjectError;
use crate::consts::POPUP_TEMPLATE_FILE;

/// Popup page bundled with the generator.
pub const DEFAULT_POPUP_HTML: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/res/default.html"));

pub const POPUP_CSS: &str = "/* default popup css */\n";
pub const POPUP_JS: &str = "// default popup js\n";
pub const SERVICE_WORKER_JS: &str = "// default service worker\n";
pub const CONTENT_SCRIPT_JS: &str = "// default content script\n";

/// Where the popup HTML template comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
  /// The template compiled into the binary.
  #[default]
  Embedded,
  /// A directory containing `default.html`.
  Directory(PathBuf),
}

impl TemplateSource {
  /// Load the popup HTML.
  ///
  /// # Errors
  ///
  /// Returns [`ProjectError::TemplateUnavailable`] if the template file cannot be read.
  pub async fn load_popup_html(&self) -> Result<String, ProjectError> {
    match self {
      TemplateSource::Embedded => Ok(DEFAULT_POPUP_HTML.to_string()),
      TemplateSource::Directory(dir) => {
        let path = dir.join(POPUP_TEMPLATE_FILE);
        debug!(path = %path.display(), "loading popup template");
        tokio::fs::read_to_string(&path)
          .await
          .map_err(|source| ProjectError::TemplateUnavailable { path, source })
      }
    }
  }
}
