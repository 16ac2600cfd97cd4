//! Output management module
//!
//! Writes the curated dataset, replacing whatever was there before.

use crate::dataset::{encode_entries, WordEntry};
use crate::error::{CurateError, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write curated entries to `path`, returning the number of bytes written
///
/// The whole document is encoded before the file is opened, so an encoding
/// failure leaves the previous dataset untouched.
pub fn write_dataset(path: &Path, entries: &[WordEntry]) -> Result<u64> {
    let bytes = encode_entries(entries).map_err(CurateError::Serialize)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_output_dir(parent).map_err(|e| CurateError::write(parent, e))?;
    }

    let file = open_truncated(path).map_err(|e| CurateError::write(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .and_then(|_| writer.flush())
        .map_err(|e| CurateError::write(path, e))?;

    log::debug!("Wrote {} bytes to {:?}", bytes.len(), path);
    Ok(bytes.len() as u64)
}

fn open_truncated(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

/// Ensure output directory exists
pub fn ensure_output_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
