//! Archive layout and icon output.

use std::fs;

use extforge_lib::icon::{FitMode, compute_draw_rect};
use extforge_lib::project::{ProjectError, build_archive};
use extforge_lib::{ExtensionConfig, TemplateSource, build_manifest, export_project};
use tempfile::TempDir;

use super::common::{full_config, png_dimensions, solid_png, unzip};

#[tokio::test]
async fn default_icons_cover_every_size() {
  let config = ExtensionConfig {
    icon_enabled: true,
    ..Default::default()
  };

  let exported = export_project(&config, &TemplateSource::Embedded).await.unwrap();
  let archive = unzip(&exported.bytes);

  let assets: Vec<&str> = archive.paths().filter(|p| p.starts_with("assets/")).collect();
  assert_eq!(
    assets,
    [
      "assets/icon-16.png",
      "assets/icon-32.png",
      "assets/icon-48.png",
      "assets/icon-128.png"
    ]
  );
  for (path, size) in assets.iter().zip([16, 32, 48, 128]) {
    assert_eq!(png_dimensions(archive.get(path).unwrap()), (size, size));
  }
}

#[test]
fn contain_rect_for_wide_source() {
  let rect = compute_draw_rect(200.0, 100.0, 128.0, 128.0, FitMode::Contain).unwrap();
  assert_eq!((rect.offset_x, rect.offset_y, rect.width, rect.height), (0.0, 32.0, 128.0, 64.0));
}

#[tokio::test]
async fn full_project_layout() {
  let mut config = full_config();
  config.source_image = Some(solid_png(200, 100));
  config.fit_mode = FitMode::Cover;

  let exported = export_project(&config, &TemplateSource::Embedded).await.unwrap();
  assert_eq!(exported.file_name, "tab-tamer.zip");

  let archive = unzip(&exported.bytes);
  let paths: Vec<&str> = archive.paths().collect();
  assert_eq!(paths, exported.paths);
  assert_eq!(
    paths,
    [
      "manifest.json",
      "ui/popup.html",
      "ui/popup.css",
      "ui/popup.js",
      "background/service-worker.js",
      "content/content-script.js",
      "assets/icon-16.png",
      "assets/icon-32.png",
      "assets/icon-48.png",
      "assets/icon-128.png",
    ]
  );
  assert_eq!(archive.get("background/service-worker.js"), Some(&b"// default service worker\n"[..]));
  assert_eq!(archive.get("content/content-script.js"), Some(&b"// default content script\n"[..]));
}

#[tokio::test]
async fn export_is_deterministic() {
  let mut config = full_config();
  config.source_image = Some(solid_png(64, 64));

  let a = export_project(&config, &TemplateSource::Embedded).await.unwrap();
  let b = export_project(&config, &TemplateSource::Embedded).await.unwrap();
  assert_eq!(a.bytes, b.bytes);
}

#[tokio::test]
async fn custom_template_is_used() {
  let temp = TempDir::new().unwrap();
  fs::write(temp.path().join("default.html"), "<h1>custom popup</h1>").unwrap();

  let config = ExtensionConfig::default();
  let bytes = build_archive(
    &config,
    &build_manifest(&config),
    &Default::default(),
    &TemplateSource::Directory(temp.path().to_path_buf()),
  )
  .await
  .unwrap();

  assert_eq!(unzip(&bytes).get("ui/popup.html"), Some(&b"<h1>custom popup</h1>"[..]));
}

#[tokio::test]
async fn missing_template_aborts_export() {
  let temp = TempDir::new().unwrap();
  let err = export_project(&full_config(), &TemplateSource::Directory(temp.path().to_path_buf()))
    .await
    .unwrap_err();
  assert!(matches!(err, ProjectError::TemplateUnavailable { .. }));
}

#[tokio::test]
async fn undecodable_user_image_is_not_replaced() {
  let mut config = full_config();
  config.source_image = Some(b"GIF89a but not really".to_vec());

  let err = export_project(&config, &TemplateSource::Embedded).await.unwrap_err();
  assert!(matches!(err, ProjectError::Icon(_)), "unexpected error: {}", err);
}
