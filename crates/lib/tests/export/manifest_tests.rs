//! Manifest content as seen through an exported archive.

use extforge_lib::{ExtensionConfig, Manifest, TemplateSource, build_manifest, export_project};
use serde_json::{Value, json};

use super::common::{full_config, unzip};

fn manifest_value(config: &ExtensionConfig) -> Value {
  serde_json::from_str(&build_manifest(config).to_json().unwrap()).unwrap()
}

#[test]
fn blank_config_has_required_fields_only() {
  let config = ExtensionConfig::default();
  let value = manifest_value(&config);

  assert_eq!(value["name"], "My Extension");
  assert_eq!(value["version"], "0.1.0");
  assert_eq!(value["permissions"], json!([]));
  assert_eq!(value["host_permissions"], json!([]));
  assert!(value.get("background").is_none());
  assert!(value.get("icons").is_none());
  assert!(value["action"].get("default_icon").is_none());
}

#[test]
fn background_entry_when_requested() {
  let config = ExtensionConfig {
    include_background: true,
    ..Default::default()
  };
  assert_eq!(
    manifest_value(&config)["background"],
    json!({ "service_worker": "background/service-worker.js", "type": "module" })
  );
}

#[test]
fn host_patterns_from_flag_and_custom_list() {
  let config = ExtensionConfig {
    all_hosts: true,
    custom_hosts: " a.com, , b.com ".to_string(),
    ..Default::default()
  };
  assert_eq!(manifest_value(&config)["host_permissions"], json!(["*://*/*", "a.com", "b.com"]));
}

#[test]
fn required_fields_present_for_every_toggle_combination() {
  for bits in 0u8..16 {
    let config = ExtensionConfig {
      include_background: bits & 1 != 0,
      include_content_script: bits & 2 != 0,
      icon_enabled: bits & 4 != 0,
      all_hosts: bits & 8 != 0,
      ..Default::default()
    };
    let value = manifest_value(&config);
    for key in ["manifest_version", "name", "version", "description", "action"] {
      assert!(value.get(key).is_some(), "missing {} for combination {:04b}", key, bits);
    }
    assert_eq!(value["manifest_version"], 3);
    assert_eq!(value.get("background").is_some(), config.include_background);
    assert_eq!(value.get("icons").is_some(), config.icon_enabled);
  }
}

#[tokio::test]
async fn archived_manifest_matches_builder_output() {
  let config = full_config();
  let exported = export_project(&config, &TemplateSource::Embedded).await.unwrap();
  let archive = unzip(&exported.bytes);

  let text = std::str::from_utf8(archive.get("manifest.json").unwrap()).unwrap();
  assert_eq!(text, build_manifest(&config).to_json().unwrap());
  assert_eq!(Manifest::from_json(text).unwrap(), exported.manifest);
}
