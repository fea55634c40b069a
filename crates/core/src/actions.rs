//! File-level actions for a front end: load, encode and decode.
//!
//! These are the only functions in the crate that touch the file system. Each
//! takes explicit paths and buffers; nothing is remembered between calls.

use crate::code::CodeTable;
use crate::codec::{analyze, compress_analyzed, decompress, Analysis};
use crate::error::{Error, Result};
use crate::format::{deserialize, serialize};
use crate::metrics::CompressionStats;
use std::fs;
use std::path::Path;

/// Read a file to compress.
///
/// # Errors
/// - `Error::Io` if the file cannot be read
/// - `Error::EmptyInput` if the file is empty
pub fn load(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path)?;
    if bytes.is_empty() {
        log::warn!("{} is empty", path.display());
        return Err(Error::EmptyInput);
    }
    log::info!("loaded {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// Compress `bytes` and write the container to `destination`.
///
/// Nothing is written if compression fails.
pub fn encode(bytes: &[u8], destination: &Path) -> Result<CompressionStats> {
    let (stats, _) = encode_with_analysis(bytes, destination)?;
    Ok(stats)
}

/// Like [`encode`], also returning the frequencies and codes that were used.
pub fn encode_with_analysis(
    bytes: &[u8],
    destination: &Path,
) -> Result<(CompressionStats, Analysis)> {
    let mut stats = CompressionStats::new();

    let analysis = analyze(bytes)?;
    let file = compress_analyzed(bytes, &analysis)?;
    let container = serialize(&file);
    fs::write(destination, &container)?;

    stats.original_bytes = bytes.len() as u64;
    stats.container_bytes = container.len() as u64;
    stats.payload_bytes = file.payload().len() as u64;
    stats.record_table(file.code_table());
    stats.complete();

    log::info!(
        "wrote {} bytes to {}",
        container.len(),
        destination.display()
    );
    Ok((stats, analysis))
}

/// Read the container at `source`, decompress it and write the result to
/// `destination`.
///
/// Nothing is written if the container cannot be parsed or decoded.
pub fn decode(source: &Path, destination: &Path) -> Result<CompressionStats> {
    let (stats, _) = decode_with_table(source, destination)?;
    Ok(stats)
}

/// Like [`decode`], also returning the code table stored in the container.
pub fn decode_with_table(
    source: &Path,
    destination: &Path,
) -> Result<(CompressionStats, CodeTable)> {
    let mut stats = CompressionStats::new();

    let container = fs::read(source)?;
    let file = deserialize(&container)?;
    let output = decompress(&file)?;
    fs::write(destination, &output)?;

    stats.original_bytes = output.len() as u64;
    stats.container_bytes = container.len() as u64;
    stats.payload_bytes = file.payload().len() as u64;
    stats.record_table(file.code_table());
    stats.complete();

    log::info!(
        "restored {} bytes to {}",
        output.len(),
        destination.display()
    );
    Ok((stats, file.code_table().clone()))
}
