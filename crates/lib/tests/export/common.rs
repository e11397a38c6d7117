//! Shared helpers for export tests.

use std::io::Cursor;

use extforge_lib::ExtensionConfig;
use extforge_lib::project::Archive;
use image::{ImageFormat, Rgba, RgbaImage};

/// Encode a solid-colour PNG of the given size.
pub fn solid_png(width: u32, height: u32) -> Vec<u8> {
  let image = RgbaImage::from_pixel(width, height, Rgba([30, 144, 255, 255]));
  let mut buf = Cursor::new(Vec::new());
  image.write_to(&mut buf, ImageFormat::Png).unwrap();
  buf.into_inner()
}

/// Decode a PNG and return its dimensions.
pub fn png_dimensions(bytes: &[u8]) -> (u32, u32) {
  let image = image::load_from_memory_with_format(bytes, ImageFormat::Png).unwrap();
  (image.width(), image.height())
}

/// Unpack an exported zip.
pub fn unzip(bytes: &[u8]) -> Archive {
  Archive::from_zip(bytes).unwrap()
}

/// A configuration with every optional part switched on.
pub fn full_config() -> ExtensionConfig {
  ExtensionConfig {
    name: "Tab Tamer".to_string(),
    version: "1.2.3".to_string(),
    description: "Keeps tabs in line".to_string(),
    include_background: true,
    include_content_script: true,
    permissions: ["tabs", "storage"].into_iter().map(String::from).collect(),
    all_hosts: true,
    custom_hosts: "https://example.com/*".to_string(),
    icon_enabled: true,
    ..Default::default()
  }
}
