//! Permissions offered to the user, in the order they appear in the manifest.

/// Candidate permission keys in canonical order.
pub const PERMISSION_CANDIDATES: &[&str] = &[
  "storage",
  "tabs",
  "activeTab",
  "scripting",
  "contextMenus",
  "notifications",
  "alarms",
  "cookies",
  "downloads",
  "history",
  "bookmarks",
  "webNavigation",
  "webRequest",
  "declarativeNetRequest",
  "identity",
];

pub fn is_candidate(key: &str) -> bool {
  PERMISSION_CANDIDATES.contains(&key)
}
