//! Per-byte frequency counting.
//!
//! The table has a fixed 256 slots, one per byte value. A zero count means the
//! symbol does not occur in the input.

use crate::error::{Error, Result};

/// Number of distinct byte symbols.
pub const SYMBOL_COUNT: usize = 256;

/// Occurrence counts for every byte value.
///
/// # Invariants
/// - At least one count is non-zero (empty input is rejected)
/// - `total()` equals the length of the counted input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; SYMBOL_COUNT],
}

impl FrequencyTable {
    /// Count every byte of `bytes` in a single pass.
    ///
    /// # Errors
    /// Returns `Error::EmptyInput` if `bytes` is empty.
    pub fn count(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut counts = [0u64; SYMBOL_COUNT];
        for &byte in bytes {
            counts[byte as usize] += 1;
        }

        let table = Self { counts };
        log::debug!(
            "counted {} bytes, {} distinct symbols",
            bytes.len(),
            table.distinct_symbols()
        );
        Ok(table)
    }

    /// Build a table from precomputed counts.
    ///
    /// # Errors
    /// Returns `Error::EmptyInput` if every count is zero.
    pub fn from_counts(counts: [u64; SYMBOL_COUNT]) -> Result<Self> {
        if counts.iter().all(|&c| c == 0) {
            return Err(Error::EmptyInput);
        }
        Ok(Self { counts })
    }

    /// Count for one symbol (0 if absent).
    pub fn get(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of symbols with a non-zero count.
    pub fn distinct_symbols(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Present symbols and their counts, in ascending symbol order.
    pub fn iter_present(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(symbol, &c)| (symbol as u8, c))
    }

    pub fn as_slice(&self) -> &[u64; SYMBOL_COUNT] {
        &self.counts
    }
}
