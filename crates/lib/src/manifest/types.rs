//! Manifest document types.
//!
//! Field order matches the order keys appear in the generated `manifest.json`.
//! Optional sections are omitted entirely rather than written as `null`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Icon size (as a string key) to asset path.
pub type IconMap = IndexMap<String, String>;

/// A version 3 extension manifest.
///
/// # Example
///
/// ```json
/// {
///     "manifest_version": 3,
///     "name": "My Extension",
///     "version": "0.1.0",
///     "description": "",
///     "permissions": ["storage"],
///     "host_permissions": [],
///     "action": { "default_popup": "ui/popup.html" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
  pub manifest_version: u32,
  pub name: String,
  pub version: String,
  pub description: String,
  pub permissions: Vec<String>,
  pub host_permissions: Vec<String>,
  pub action: Action,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub background: Option<Background>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub icons: Option<IconMap>,
}

/// The toolbar action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
  pub default_popup: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub default_icon: Option<IconMap>,
}

/// Background service worker registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
  pub service_worker: String,
  #[serde(rename = "type")]
  pub kind: WorkerKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerKind {
  Module,
}
