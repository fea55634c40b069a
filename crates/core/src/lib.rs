//! huffpack-core: static byte-oriented Huffman compression
//!
//! This library compresses a byte buffer with a single static Huffman pass and
//! stores the result in a self-describing container.
//!
//! # Architecture
//!
//! Modules, leaves first:
//! - `frequency`: per-byte occurrence counts
//! - `tree`: Huffman tree built in an arena with a fixed tie-break
//! - `code`: prefix-free code assignment and code tables
//! - `bitio`: low-level bit reading/writing
//! - `packing`: code concatenation into bytes and length-bounded decoding
//! - `codec`: the compress/decompress pipeline
//! - `format`: container serialization with a CRC32 trailer
//! - `actions`: load/encode/decode on files
//! - `metrics`: per-action statistics
//!
//! # Example
//!
//! ```
//! use huffpack_core::{codec, format};
//!
//! let file = codec::compress(b"aaabbc")?;
//! let bytes = format::serialize(&file);
//! let restored = codec::decompress(&format::deserialize(&bytes)?)?;
//! assert_eq!(restored, b"aaabbc");
//! # Ok::<(), huffpack_core::Error>(())
//! ```

pub mod actions;
pub mod bitio;
pub mod code;
pub mod codec;
pub mod error;
pub mod format;
pub mod frequency;
pub mod metrics;
pub mod packing;
pub mod tree;

// Re-export commonly used types
pub use code::{Code, CodeTable};
pub use codec::{analyze, compress, compress_analyzed, decompress, Analysis, EncodedFile};
pub use error::{Error, FormatError, Result, StreamError};
pub use frequency::FrequencyTable;
pub use metrics::CompressionStats;
pub use tree::HuffmanTree;
