//! Filesystem adapter for ledger reading and output preparation.
//!
//! Reads the raw sales ledger with an ordered encoding fallback and hands
//! back bare data lines (header and blank lines already dropped). Also
//! prepares the output directory for the report writers.

use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::constants::SUPPORTED_ENCODINGS;
use crate::{Error, Result};

/// Read the sales ledger and return its data lines.
///
/// The file is decoded attempting utf-8, latin-1 and cp1252 in order, using
/// the first encoding that decodes without error. The header line and blank
/// lines are dropped; remaining lines are trimmed.
pub fn read_sales_lines(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    let bytes = fs::read(path)
        .map_err(|e| Error::io(format!("failed to read '{}'", path.display()), e))?;
    let content = decode_ledger_bytes(&bytes, path)?;

    let lines: Vec<String> = content
        .lines()
        .skip(1) // header line
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    info!(
        "Read {} data lines from '{}' ({} bytes)",
        lines.len(),
        path.display(),
        bytes.len()
    );
    Ok(lines)
}

/// Decode raw ledger bytes, attempting encodings in fixed order.
///
/// Strict UTF-8 is tried first; the single-byte fallbacks map every byte
/// sequence, so in practice the chain terminates at latin-1. The order is
/// still honored so the decode used is deterministic.
fn decode_ledger_bytes(bytes: &[u8], path: &Path) -> Result<String> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        debug!("Decoded '{}' as utf-8", path.display());
        return Ok(text.to_string());
    }

    let (text, _, had_errors) = encoding_rs::ISO_8859_15.decode(bytes);
    if !had_errors {
        debug!("Decoded '{}' as latin-1", path.display());
        return Ok(text.into_owned());
    }

    let (text, _, had_errors) = encoding_rs::WINDOWS_1252.decode(bytes);
    if !had_errors {
        debug!("Decoded '{}' as cp1252", path.display());
        return Ok(text.into_owned());
    }

    Err(Error::encoding(
        path.display().to_string(),
        SUPPORTED_ENCODINGS,
    ))
}

/// Create the output directory if it does not already exist.
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .map_err(|e| Error::io(format!("failed to create '{}'", path.display()), e))
}
