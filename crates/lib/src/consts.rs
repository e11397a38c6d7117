//! Fixed values shared across the generator.

/// Manifest schema version written to every generated `manifest.json`.
pub const MANIFEST_VERSION: u32 = 3;

/// Fallback extension name when the configured name is empty.
pub const DEFAULT_NAME: &str = "My Extension";

/// Fallback extension version when the configured version is empty.
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Archive base name used when the extension name slugifies to nothing.
pub const DEFAULT_ARCHIVE_STEM: &str = "extension";

/// Host pattern matching every scheme and host.
pub const ALL_HOSTS_PATTERN: &str = "*://*/*";

/// Square icon sizes generated for every project.
pub const ICON_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Icon sizes referenced from the manifest `icons` key.
pub const MANIFEST_ICON_SIZES: [u32; 3] = [16, 48, 128];

/// Icon sizes referenced from the manifest `action.default_icon` key.
pub const ACTION_ICON_SIZES: [u32; 2] = [16, 32];

pub const POPUP_HTML_PATH: &str = "ui/popup.html";
pub const POPUP_CSS_PATH: &str = "ui/popup.css";
pub const POPUP_JS_PATH: &str = "ui/popup.js";
pub const SERVICE_WORKER_PATH: &str = "background/service-worker.js";
pub const CONTENT_SCRIPT_PATH: &str = "content/content-script.js";
pub const MANIFEST_PATH: &str = "manifest.json";
pub const ASSETS_DIR: &str = "assets";

/// Default config file name looked up by the CLI.
pub const CONFIG_FILE_NAME: &str = "extension.json";

/// File name of the popup template inside a templates directory.
pub const POPUP_TEMPLATE_FILE: &str = "default.html";

/// File name of an icon of the given size, e.g. `icon-16.png`.
pub fn icon_file_name(size: u32) -> String {
  format!("icon-{}.png", size)
}

/// Archive path of an icon of the given size, e.g. `assets/icon-16.png`.
pub fn icon_asset_path(size: u32) -> String {
  format!("{}/{}", ASSETS_DIR, icon_file_name(size))
}
