mod build;
mod icons;
mod init;
mod manifest;

use anyhow::{Context, Result};

pub use build::cmd_build;
pub use icons::cmd_icons;
pub use init::cmd_init;
pub use manifest::cmd_manifest;

/// Runtime for commands that drive the async export pipeline.
fn runtime() -> Result<tokio::runtime::Runtime> {
  tokio::runtime::Runtime::new().context("Failed to create async runtime")
}
