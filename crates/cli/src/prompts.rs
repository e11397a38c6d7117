//! Interactive confirmation for destructive file writes.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use anyhow::{Result, bail};

/// Ask whether `path` may be overwritten. `force` answers yes without asking.
///
/// Fails instead of prompting when stdin or stderr is not a terminal.
pub fn confirm_overwrite(path: &Path, force: bool) -> Result<bool> {
  if force || !path.exists() {
    return Ok(true);
  }

  if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
    bail!(
      "{} already exists. Use --force to overwrite it in non-interactive mode.",
      path.display()
    );
  }

  write!(io::stderr(), "{} already exists. Overwrite? [y/N] ", path.display())?;
  io::stderr().flush()?;

  let mut input = String::new();
  io::stdin().read_line(&mut input)?;

  Ok(matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
