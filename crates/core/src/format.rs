//! Container serialization and parsing.
//!
//! The container stores everything needed to decode: the code table, the
//! original length and the packed bitstream, followed by a CRC32.
//!
//! # Container Format
//!
//! ```text
//! +------------------+
//! | Magic (4 bytes)  |  0x48 0x55 0x46 0x50 ("HUFP")
//! +------------------+
//! | version (1)      |  0x01
//! +------------------+
//! | code table       |  256 entries in symbol order 0..=255:
//! | (variable)       |    len (1)   code length in bits, 0 = absent
//! |                  |    bits      ceil(len/8) bytes, MSB-first, zero-padded
//! +------------------+
//! | original_len (8) |  u64 little-endian
//! +------------------+
//! | payload_len (8)  |  u64 little-endian
//! +------------------+
//! | payload          |  Packed bitstream (payload_len bytes)
//! | (variable)       |
//! +------------------+
//! | crc32 (4)        |  u32 checksum of every preceding byte
//! +------------------+
//! ```
//!
//! A code is at most 255 bits long, so its length always fits the one-byte
//! length field.

use crate::bitio::{BitReader, BitWriter};
use crate::code::{Code, CodeTable};
use crate::codec::EncodedFile;
use crate::error::{FormatError, Result};
use crate::frequency::SYMBOL_COUNT;
use std::io::{Read, Write};

/// Magic number for containers: "HUFP"
pub const MAGIC: [u8; 4] = *b"HUFP";

/// Current container version
pub const VERSION: u8 = 1;

/// Bytes before the code table (magic + version)
const PREAMBLE_SIZE: usize = 5;

/// Bytes of the two length fields after the code table
const LENGTHS_SIZE: usize = 16;

/// Bytes of the CRC trailer
const CRC_SIZE: usize = 4;

/// Serialize an encoded file into container bytes.
pub fn serialize(file: &EncodedFile) -> Vec<u8> {
    let table = file.code_table();
    let table_size: usize = (0..=255u8)
        .map(|s| 1 + table.get(s).map_or(0, |c| c.len().div_ceil(8)))
        .sum();
    let total_size =
        PREAMBLE_SIZE + table_size + LENGTHS_SIZE + file.payload().len() + CRC_SIZE;

    let mut out = Vec::with_capacity(total_size);
    out.extend_from_slice(&MAGIC);
    out.push(VERSION);

    for symbol in 0..=255u8 {
        match table.get(symbol) {
            Some(code) => {
                out.push(code.len() as u8);
                let mut writer = BitWriter::with_bit_capacity(code.len());
                writer.write_code(code);
                out.extend_from_slice(&writer.finish());
            }
            None => out.push(0),
        }
    }

    out.extend_from_slice(&file.original_length().to_le_bytes());
    out.extend_from_slice(&(file.payload().len() as u64).to_le_bytes());
    out.extend_from_slice(file.payload());

    let crc32 = crc32fast::hash(&out);
    out.extend_from_slice(&crc32.to_le_bytes());

    log::debug!(
        "serialized container: {} bytes (table {}, payload {})",
        out.len(),
        table_size,
        file.payload().len()
    );
    out
}

/// Parse container bytes into an encoded file.
///
/// # Errors
/// - `FormatError::InvalidMagic` / `UnsupportedVersion` for foreign data
/// - `FormatError::Truncated` if any section is cut short
/// - `FormatError::NonZeroPadding`, `EmptyCodeTable` or `NotPrefixFree` for
///   an inconsistent code table
/// - `FormatError::ZeroLength` / `LengthOverflow` for invalid length fields
/// - `FormatError::LengthMismatch` if the payload is too short for the
///   declared number of symbols
/// - `FormatError::TrailingBytes` if data follows the checksum
/// - `FormatError::Crc` if the checksum does not match
pub fn deserialize(bytes: &[u8]) -> Result<EncodedFile> {
    let mut cursor = Cursor::new(bytes);

    let magic: [u8; 4] = cursor.take_array("magic")?;
    if magic != MAGIC {
        return Err(FormatError::InvalidMagic {
            expected: MAGIC,
            actual: magic,
        }
        .into());
    }

    let [version] = cursor.take_array::<1>("version")?;
    if version != VERSION {
        return Err(FormatError::UnsupportedVersion(version).into());
    }

    let mut entries = Vec::new();
    for symbol in 0..SYMBOL_COUNT {
        let symbol = symbol as u8;
        let [len] = cursor.take_array::<1>("code table")?;
        if len == 0 {
            continue;
        }
        let len = len as usize;
        let packed = cursor.take(len.div_ceil(8), "code table")?;

        let mut reader = BitReader::new(packed);
        let code = reader.read_code(len).ok_or(FormatError::Truncated {
            section: "code table",
            required: len.div_ceil(8),
            actual: packed.len(),
        })?;
        while let Some(bit) = reader.read_bit() {
            if bit {
                return Err(FormatError::NonZeroPadding { symbol }.into());
            }
        }
        entries.push((symbol, code));
    }

    let original_length = u64::from_le_bytes(cursor.take_array("original length")?);
    if original_length == 0 {
        return Err(FormatError::ZeroLength.into());
    }
    usize::try_from(original_length).map_err(|_| FormatError::LengthOverflow(original_length))?;

    let payload_len = u64::from_le_bytes(cursor.take_array("payload length")?);
    let payload_len =
        usize::try_from(payload_len).map_err(|_| FormatError::LengthOverflow(payload_len))?;
    let payload = cursor.take(payload_len, "payload")?.to_vec();

    // Every code is at least one bit long.
    let payload_bits = (payload_len as u64).saturating_mul(8);
    if original_length > payload_bits {
        return Err(FormatError::LengthMismatch {
            original: original_length,
            payload_bits,
        }
        .into());
    }

    let covered = cursor.position();
    let expected = u32::from_le_bytes(cursor.take_array("checksum")?);
    if cursor.remaining() > 0 {
        return Err(FormatError::TrailingBytes {
            count: cursor.remaining(),
        }
        .into());
    }

    let actual = crc32fast::hash(&bytes[..covered]);
    if actual != expected {
        log::warn!("container checksum mismatch");
        return Err(FormatError::Crc { expected, actual }.into());
    }

    let code_table = CodeTable::from_codes(entries)?;
    Ok(EncodedFile::new(code_table, original_length, payload))
}

/// Serialize into any writer.
pub fn write_to<W: Write>(writer: &mut W, file: &EncodedFile) -> Result<()> {
    writer.write_all(&serialize(file))?;
    writer.flush()?;
    Ok(())
}

/// Read a whole container from any reader and parse it.
pub fn read_from<R: Read>(reader: &mut R) -> Result<EncodedFile> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    deserialize(&bytes)
}

/// Bounds-checked slice reader that reports which section ran short.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn position(&self) -> usize {
        self.pos
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn take(&mut self, n: usize, section: &'static str) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(FormatError::Truncated {
                section,
                required: n,
                actual: self.remaining(),
            }
            .into());
        }
        let slice = &self.bytes[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn take_array<const N: usize>(&mut self, section: &'static str) -> Result<[u8; N]> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.take(N, section)?);
        Ok(array)
    }
}
