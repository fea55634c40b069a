//! Error types for huffpack.
//!
//! All operations return structured errors rather than panicking. Every
//! failure is deterministic for a given input, so nothing here is retryable.

use thiserror::Error;

/// Top-level error type for all operations in the library.
///
/// Each variant corresponds to a specific failure domain:
/// - Empty input: there is nothing to build a code from
/// - I/O: reading or writing files
/// - Format: the container structure is corrupt or truncated
/// - Malformed stream: the packed bits do not decode under the code table
#[derive(Debug, Error)]
pub enum Error {
    /// No bytes to compress
    #[error("empty input: nothing to compress")]
    EmptyInput,

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Corrupt or truncated container (bad code table, invalid lengths)
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// Packed bits do not resolve to codes before the declared length
    #[error("malformed stream: {0}")]
    MalformedStream(#[from] StreamError),
}

/// Container structure errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// Invalid magic number at the start of the container
    #[error("invalid magic number: expected {expected:?}, got {actual:?}")]
    InvalidMagic { expected: [u8; 4], actual: [u8; 4] },

    /// Container written by a format version we do not understand
    #[error("unsupported format version {0}")]
    UnsupportedVersion(u8),

    /// A section ends before its declared size
    #[error("truncated {section}: need {required} bytes, got {actual}")]
    Truncated {
        section: &'static str,
        required: usize,
        actual: usize,
    },

    /// Pad bits after a stored code are not zero
    #[error("code for symbol {symbol} has non-zero padding bits")]
    NonZeroPadding { symbol: u8 },

    /// No symbol has a code
    #[error("code table has no entries")]
    EmptyCodeTable,

    /// One stored code is a prefix of another
    #[error("code for symbol {first} is a prefix of the code for symbol {second}")]
    NotPrefixFree { first: u8, second: u8 },

    /// Original length of zero (compress never produces one)
    #[error("original length is zero")]
    ZeroLength,

    /// A length field does not fit in memory on this platform
    #[error("length field {0} does not fit in usize")]
    LengthOverflow(u64),

    /// More symbols declared than the payload has bits for
    #[error("original length {original} exceeds the {payload_bits} payload bits")]
    LengthMismatch { original: u64, payload_bits: u64 },

    /// Extra bytes after the checksum
    #[error("{count} trailing bytes after checksum")]
    TrailingBytes { count: usize },

    /// CRC validation failed, indicating data corruption
    #[error("CRC mismatch: expected {expected:#010x}, got {actual:#010x}")]
    Crc { expected: u32, actual: u32 },
}

/// Packed bitstream errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StreamError {
    /// The bits read since the last symbol are not a prefix of any code
    #[error("invalid huffman code at bit position {position}")]
    InvalidCode { position: usize },

    /// Bits ran out before the declared number of symbols was decoded
    #[error("stream ended at bit {position} after {decoded} of {expected} symbols")]
    UnexpectedEnd {
        position: usize,
        decoded: usize,
        expected: usize,
    },

    /// Input byte has no code in the table used for packing
    #[error("byte {symbol} has no code in the table")]
    MissingCode { symbol: u8 },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
