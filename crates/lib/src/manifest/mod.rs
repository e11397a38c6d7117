//! Extension manifest generation.
//!
//! [`build_manifest`] maps an [`ExtensionConfig`] onto a [`Manifest`]. It is a
//! pure function: the same configuration always yields the same document and
//! therefore the same JSON text.

mod permissions;
mod types;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ExtensionConfig;
use crate::consts::{
  ACTION_ICON_SIZES, DEFAULT_NAME, DEFAULT_VERSION, MANIFEST_ICON_SIZES, MANIFEST_VERSION, POPUP_HTML_PATH,
  SERVICE_WORKER_PATH, icon_asset_path,
};

pub use permissions::{PERMISSION_CANDIDATES, is_candidate};
pub use types::*;

/// Indent used for `manifest.json`.
const JSON_INDENT: &[u8] = b"    ";

impl Manifest {
  /// Serialize as pretty-printed JSON with a four-space indent.
  pub fn to_json(&self) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    self.serialize(&mut serializer)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
  }

  pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(json)
  }
}

fn or_default(value: &str, default: &str) -> String {
  if value.is_empty() {
    default.to_string()
  } else {
    value.to_string()
  }
}

fn icon_map(sizes: &[u32]) -> IconMap {
  sizes
    .iter()
    .map(|&size| (size.to_string(), icon_asset_path(size)))
    .collect()
}

/// Checked permissions filtered through [`PERMISSION_CANDIDATES`], in candidate order.
fn select_permissions(config: &ExtensionConfig) -> Vec<String> {
  for key in config.permissions.iter().filter(|key| !is_candidate(key)) {
    warn!(permission = %key, "ignoring unknown permission");
  }

  PERMISSION_CANDIDATES
    .iter()
    .filter(|candidate| config.permissions.contains(**candidate))
    .map(|candidate| candidate.to_string())
    .collect()
}

/// Build the manifest document for a configuration.
///
/// Empty `name` and `version` fall back to `"My Extension"` and `"0.1.0"`.
/// `background` is present only when a service worker is requested, and
/// `icons` / `action.default_icon` only when icons are enabled.
pub fn build_manifest(config: &ExtensionConfig) -> Manifest {
  let manifest = Manifest {
    manifest_version: MANIFEST_VERSION,
    name: or_default(&config.name, DEFAULT_NAME),
    version: or_default(&config.version, DEFAULT_VERSION),
    description: config.description.clone(),
    permissions: select_permissions(config),
    host_permissions: config.host_permissions(),
    action: Action {
      default_popup: POPUP_HTML_PATH.to_string(),
      default_icon: config.icon_enabled.then(|| icon_map(&ACTION_ICON_SIZES)),
    },
    background: config.include_background.then(|| Background {
      service_worker: SERVICE_WORKER_PATH.to_string(),
      kind: WorkerKind::Module,
    }),
    icons: config.icon_enabled.then(|| icon_map(&MANIFEST_ICON_SIZES)),
  };

  debug!(
    name = %manifest.name,
    permissions = manifest.permissions.len(),
    host_permissions = manifest.host_permissions.len(),
    "built manifest"
  );

  manifest
}
