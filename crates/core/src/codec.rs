//! Compression pipeline.
//!
//! `compress` runs frequency counting, tree construction, code assignment and
//! packing. `decompress` unpacks with the stored code table, bounded by the
//! stored original length. Both are pure: the same input always gives the
//! same output, and nothing is kept between calls.

use crate::code::CodeTable;
use crate::error::{FormatError, Result};
use crate::frequency::FrequencyTable;
use crate::packing::{pack, unpack};
use crate::tree::HuffmanTree;

/// The persisted unit: code table, original length and packed bitstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFile {
    code_table: CodeTable,
    original_length: u64,
    payload: Vec<u8>,
}

impl EncodedFile {
    pub fn new(code_table: CodeTable, original_length: u64, payload: Vec<u8>) -> Self {
        Self {
            code_table,
            original_length,
            payload,
        }
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.code_table
    }

    /// Number of bytes in the uncompressed input.
    pub fn original_length(&self) -> u64 {
        self.original_length
    }

    /// Packed bitstream bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

/// Everything the pipeline learns about an input before packing it.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub frequencies: FrequencyTable,
    pub code_table: CodeTable,
    /// Bits in the packed stream, excluding padding.
    pub encoded_bits: u64,
}

/// Count, build and assign codes for `bytes` without packing.
///
/// # Errors
/// Returns `Error::EmptyInput` if `bytes` is empty.
pub fn analyze(bytes: &[u8]) -> Result<Analysis> {
    let frequencies = FrequencyTable::count(bytes)?;
    let tree = HuffmanTree::build(&frequencies);
    let code_table = CodeTable::assign(&tree);
    let encoded_bits = code_table.encoded_bit_len(&frequencies);

    Ok(Analysis {
        frequencies,
        code_table,
        encoded_bits,
    })
}

/// Compress `bytes` into an [`EncodedFile`].
///
/// # Errors
/// Returns `Error::EmptyInput` if `bytes` is empty.
pub fn compress(bytes: &[u8]) -> Result<EncodedFile> {
    let analysis = analyze(bytes)?;
    compress_analyzed(bytes, &analysis)
}

/// Pack `bytes` with the codes from an earlier [`analyze`] of the same input.
///
/// # Errors
/// Returns `StreamError::MissingCode` if `analysis` came from other bytes.
pub fn compress_analyzed(bytes: &[u8], analysis: &Analysis) -> Result<EncodedFile> {
    let packed = pack(bytes, &analysis.code_table)?;
    debug_assert_eq!(packed.bit_len as u64, analysis.encoded_bits);

    log::info!(
        "compressed {} bytes to {} payload bytes ({} symbols, longest code {} bits)",
        bytes.len(),
        packed.bytes.len(),
        analysis.code_table.len(),
        analysis.code_table.max_code_len()
    );

    Ok(EncodedFile::new(
        analysis.code_table.clone(),
        bytes.len() as u64,
        packed.bytes,
    ))
}

/// Restore the original bytes from an [`EncodedFile`].
///
/// # Errors
/// - `FormatError::LengthOverflow` if the original length does not fit `usize`
/// - `Error::MalformedStream` if the payload does not decode under the table
pub fn decompress(file: &EncodedFile) -> Result<Vec<u8>> {
    let original_length = usize::try_from(file.original_length)
        .map_err(|_| FormatError::LengthOverflow(file.original_length))?;

    let output = unpack(&file.payload, &file.code_table, original_length)?;
    log::info!(
        "decompressed {} payload bytes to {} bytes",
        file.payload.len(),
        output.len()
    );
    Ok(output)
}
