//! Packing input bytes into a Huffman bitstream and back.
//!
//! Packing concatenates the code of every input byte, in input order, MSB
//! first, and pads the final byte with zeros.
//!
//! Unpacking resolves codes left to right with a decode trie built from the
//! code table. Since the table is prefix-free, the first code that matches is
//! the only one that can. Decoding stops after exactly `original_length`
//! symbols: pad bits can spell a valid short code (e.g. `0`), so running out of
//! bits is never used as the stop condition.

use crate::bitio::{BitReader, BitWriter};
use crate::code::CodeTable;
use crate::error::{Result, StreamError};

/// Packed bitstream bytes and the number of meaningful bits in them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBits {
    pub bytes: Vec<u8>,
    pub bit_len: usize,
}

impl PackedBits {
    /// Number of zero bits appended to reach a byte boundary.
    pub fn padding_bits(&self) -> usize {
        self.bytes.len() * 8 - self.bit_len
    }
}

/// Encode `data` with `table`.
///
/// # Errors
/// Returns `StreamError::MissingCode` if a byte of `data` has no code.
pub fn pack(data: &[u8], table: &CodeTable) -> Result<PackedBits> {
    let mut writer = BitWriter::new();
    for &byte in data {
        let code = table
            .get(byte)
            .ok_or(StreamError::MissingCode { symbol: byte })?;
        writer.write_code(code);
    }

    let bit_len = writer.bit_len();
    let bytes = writer.finish();
    log::debug!(
        "packed {} bytes into {} bits ({} bytes)",
        data.len(),
        bit_len,
        bytes.len()
    );
    Ok(PackedBits { bytes, bit_len })
}

/// Decode exactly `original_length` symbols from `packed`.
///
/// # Errors
/// - `StreamError::InvalidCode` if the bits stop matching any code
/// - `StreamError::UnexpectedEnd` if the bits run out first
pub fn unpack(packed: &[u8], table: &CodeTable, original_length: usize) -> Result<Vec<u8>> {
    let trie = DecodeTrie::from_table(table);
    let root = trie.root();

    let mut reader = BitReader::new(packed);
    // Every code is at least one bit long.
    let mut output = Vec::with_capacity(original_length.min(packed.len().saturating_mul(8)));

    while output.len() < original_length {
        let start = reader.position();
        let mut node = root;
        let symbol = loop {
            let bit = reader.read_bit().ok_or(StreamError::UnexpectedEnd {
                position: reader.position(),
                decoded: output.len(),
                expected: original_length,
            })?;
            match trie.step(node, bit) {
                Step::Symbol(symbol) => break symbol,
                Step::Inner(next) => node = next,
                Step::Dead => return Err(StreamError::InvalidCode { position: start }.into()),
            }
        };
        output.push(symbol);
    }

    log::debug!(
        "unpacked {} symbols, {} trailing bits ignored",
        output.len(),
        reader.bits_remaining()
    );
    Ok(output)
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Empty,
    Inner(usize),
    Symbol(u8),
}

enum Step {
    Symbol(u8),
    Inner(usize),
    Dead,
}

/// Binary trie over the codes of a table.
///
/// Node 0 is the root. Each node holds one slot per bit value. The trie is
/// built once per decode and only read afterwards.
struct DecodeTrie {
    nodes: Vec<[Slot; 2]>,
}

impl DecodeTrie {
    fn from_table(table: &CodeTable) -> Self {
        let mut nodes = vec![[Slot::Empty; 2]];

        for (symbol, code) in table.iter() {
            let mut node = 0;
            let last = code.len().saturating_sub(1);
            for (i, bit) in code.bits().enumerate() {
                let b = bit as usize;
                if i == last {
                    nodes[node][b] = Slot::Symbol(symbol);
                    break;
                }
                node = match nodes[node][b] {
                    Slot::Inner(next) => next,
                    // CodeTable guarantees prefix-freeness, so a symbol slot
                    // is never on the path of another code.
                    Slot::Empty | Slot::Symbol(_) => {
                        let next = nodes.len();
                        nodes.push([Slot::Empty; 2]);
                        nodes[node][b] = Slot::Inner(next);
                        next
                    }
                };
            }
        }

        Self { nodes }
    }

    fn root(&self) -> usize {
        0
    }

    fn step(&self, node: usize, bit: bool) -> Step {
        match self.nodes[node][bit as usize] {
            Slot::Empty => Step::Dead,
            Slot::Inner(next) => Step::Inner(next),
            Slot::Symbol(symbol) => Step::Symbol(symbol),
        }
    }
}
