//! In-memory project archive.
//!
//! An [`Archive`] is an ordered list of `(path, contents)` entries. Entries are
//! written to the zip in insertion order with a fixed timestamp, so the same
//! entries always produce the same bytes.

use std::io::{Cursor, Read, Write};

use zip::DateTime;
use zip::write::SimpleFileOptions;

use super::ProjectError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
  pub path: String,
  pub contents: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Archive {
  entries: Vec<ArchiveEntry>,
}

impl Archive {
  pub fn add(&mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) {
    self.entries.push(ArchiveEntry {
      path: path.into(),
      contents: contents.into(),
    });
  }

  pub fn entries(&self) -> &[ArchiveEntry] {
    &self.entries
  }

  pub fn paths(&self) -> impl Iterator<Item = &str> {
    self.entries.iter().map(|entry| entry.path.as_str())
  }

  pub fn get(&self, path: &str) -> Option<&[u8]> {
    self
      .entries
      .iter()
      .find(|entry| entry.path == path)
      .map(|entry| entry.contents.as_slice())
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Serialize to a deflated zip archive.
  pub fn to_zip(&self) -> Result<Vec<u8>, ProjectError> {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
      .compression_method(zip::CompressionMethod::Deflated)
      .last_modified_time(DateTime::default())
      .unix_permissions(0o644);

    for entry in &self.entries {
      zip.start_file(entry.path.as_str(), options)?;
      zip.write_all(&entry.contents)?;
    }

    Ok(zip.finish()?.into_inner())
  }

  /// Read every file entry of a zip archive, in archive order.
  pub fn from_zip(bytes: &[u8]) -> Result<Self, ProjectError> {
    let mut zip = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut archive = Archive::default();

    for i in 0..zip.len() {
      let mut file = zip.by_index(i)?;
      if file.is_dir() {
        continue;
      }
      let mut contents = Vec::with_capacity(file.size() as usize);
      file.read_to_end(&mut contents)?;
      archive.add(file.name(), contents);
    }

    Ok(archive)
  }
}
