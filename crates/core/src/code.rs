//! Prefix-free code assignment.
//!
//! Codes are derived from a [`HuffmanTree`] by a depth-first walk: going left
//! appends `0`, going right appends `1`. A tree made of a single leaf gets
//! the one-bit code `0`.

use crate::error::{FormatError, Result};
use crate::frequency::{FrequencyTable, SYMBOL_COUNT};
use crate::tree::{HuffmanTree, NodeKind};
use std::fmt;
use std::str::FromStr;

/// A bit-string, first bit first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// True if `self` is a prefix of `other` (a code is a prefix of itself).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Error returned when parsing a code from text that is not made of `0`/`1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCodeError {
    pub found: char,
}

impl fmt::Display for ParseCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid bit character {:?}", self.found)
    }
}

impl std::error::Error for ParseCodeError {}

impl FromStr for Code {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(ParseCodeError { found }),
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(Code::from_bits)
    }
}

/// Code for every present symbol.
///
/// # Invariants
/// - Only symbols with a non-zero frequency have an entry
/// - Every code is 1..=255 bits long
/// - No code is a prefix of another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Option<Code>>,
}

impl CodeTable {
    /// Walk the tree and record the path to every leaf.
    pub fn assign(tree: &HuffmanTree) -> Self {
        let mut codes = vec![None; SYMBOL_COUNT];

        let root = tree.root();
        if let NodeKind::Leaf { symbol } = tree.node(root).kind {
            codes[symbol as usize] = Some(Code::from_bits(vec![false]));
            log::debug!("single-symbol input: byte {} gets code 0", symbol);
            return Self { codes };
        }

        let mut stack = vec![(root, Code::new())];
        while let Some((id, prefix)) = stack.pop() {
            match tree.node(id).kind {
                NodeKind::Leaf { symbol } => {
                    log::trace!("byte {:3} -> {}", symbol, prefix);
                    codes[symbol as usize] = Some(prefix);
                }
                NodeKind::Internal { left, right } => {
                    let mut right_code = prefix.clone();
                    right_code.push(true);
                    let mut left_code = prefix;
                    left_code.push(false);
                    stack.push((right, right_code));
                    stack.push((left, left_code));
                }
            }
        }

        Self { codes }
    }

    /// Build a table from explicit entries, checking it is usable for decoding.
    ///
    /// # Errors
    /// - `FormatError::EmptyCodeTable` if there are no entries
    /// - `FormatError::NotPrefixFree` if one code is a prefix of another
    ///   (this includes duplicates and empty codes)
    pub fn from_codes<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u8, Code)>,
    {
        let mut codes = vec![None; SYMBOL_COUNT];
        for (symbol, code) in entries {
            codes[symbol as usize] = Some(code);
        }

        let table = Self { codes };
        if table.is_empty() {
            return Err(FormatError::EmptyCodeTable.into());
        }
        if let Some((first, second)) = table.find_prefix_conflict() {
            return Err(FormatError::NotPrefixFree { first, second }.into());
        }
        Ok(table)
    }

    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes[symbol as usize].as_ref()
    }

    /// Assigned entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.as_ref().map(|c| (symbol as u8, c)))
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn max_code_len(&self) -> usize {
        self.iter().map(|(_, c)| c.len()).max().unwrap_or(0)
    }

    pub fn is_prefix_free(&self) -> bool {
        self.find_prefix_conflict().is_none()
    }

    /// Total bits needed to encode an input with these frequencies.
    pub fn encoded_bit_len(&self, freqs: &FrequencyTable) -> u64 {
        self.iter()
            .map(|(symbol, code)| freqs.get(symbol) * code.len() as u64)
            .sum()
    }

    /// First pair `(a, b)` where `a`'s code is a prefix of `b`'s.
    fn find_prefix_conflict(&self) -> Option<(u8, u8)> {
        // After sorting, a prefix sorts directly before something it prefixes.
        let mut sorted: Vec<(u8, &Code)> = self.iter().collect();
        sorted.sort_by(|a, b| a.1.bits.cmp(&b.1.bits));

        if let Some(&(symbol, _)) = sorted.iter().find(|(_, c)| c.is_empty()) {
            return Some((symbol, symbol));
        }

        sorted
            .windows(2)
            .find(|pair| pair[0].1.is_prefix_of(pair[1].1))
            .map(|pair| (pair[0].0, pair[1].0))
    }
}
