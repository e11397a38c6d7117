//! extforge-lib: Browser extension skeleton generation
//!
//! This crate turns an [`ExtensionConfig`] into a ready-to-unzip extension project:
//! - `manifest`: the version 3 `manifest.json` document
//! - `icon`: fits a source image into the standard icon sizes and encodes PNGs
//! - `project`: lays out the project files and writes the zip archive
//! - `init`: scaffolds a config file and popup template to start from

pub mod config;
pub mod consts;
pub mod icon;
pub mod init;
pub mod manifest;
pub mod project;

pub use config::{ConfigError, ExtensionConfig, LoadedConfig, load_config};
pub use icon::FitMode;
pub use manifest::{Manifest, build_manifest};
pub use project::{ExportedProject, ProjectError, TemplateSource, export_project};
