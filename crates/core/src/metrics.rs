//! Statistics for one encode or decode action.
//!
//! Tracks byte counts, code table shape and timing so the front end can show
//! how well an input compressed.

use crate::code::CodeTable;
use std::time::{Duration, Instant};

/// Counters for a single encode or decode.
#[derive(Debug, Clone)]
pub struct CompressionStats {
    // === Timing ===
    /// When the action started
    pub start_time: Instant,

    /// When the action ended (set on completion)
    pub end_time: Option<Instant>,

    // === Sizes ===
    /// Uncompressed bytes (input of encode, output of decode)
    pub original_bytes: u64,

    /// Container bytes (output of encode, input of decode)
    pub container_bytes: u64,

    /// Packed bitstream bytes inside the container
    pub payload_bytes: u64,

    // === Code table ===
    /// Symbols with a code
    pub distinct_symbols: usize,

    /// Longest code in bits
    pub max_code_len: usize,
}

impl CompressionStats {
    /// Create new stats with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            original_bytes: 0,
            container_bytes: 0,
            payload_bytes: 0,
            distinct_symbols: 0,
            max_code_len: 0,
        }
    }

    /// Record the shape of the code table used.
    pub fn record_table(&mut self, table: &CodeTable) {
        self.distinct_symbols = table.len();
        self.max_code_len = table.max_code_len();
    }

    /// Mark the action as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Container size relative to the original (container / original).
    ///
    /// Returns 0.0 if nothing was processed.
    pub fn compression_ratio(&self) -> f64 {
        if self.original_bytes == 0 {
            0.0
        } else {
            self.container_bytes as f64 / self.original_bytes as f64
        }
    }

    /// Average payload bits spent per original byte (padding included).
    pub fn bits_per_symbol(&self) -> f64 {
        if self.original_bytes == 0 {
            0.0
        } else {
            (self.payload_bytes * 8) as f64 / self.original_bytes as f64
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Summary ===");
        println!("Original:  {} bytes", self.original_bytes);
        println!("Container: {} bytes", self.container_bytes);
        println!("Payload:   {} bytes", self.payload_bytes);
        println!("Ratio: {:.1}%", self.compression_ratio() * 100.0);
        println!("Bits per symbol: {:.3}", self.bits_per_symbol());
        println!(
            "Symbols: {} (longest code {} bits)",
            self.distinct_symbols, self.max_code_len
        );
        println!("Duration: {} ms", self.duration().as_millis());
    }

    /// Export stats as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "duration_ms={}\n\
             original_bytes={}\n\
             container_bytes={}\n\
             payload_bytes={}\n\
             compression_ratio={:.4}\n\
             bits_per_symbol={:.4}\n\
             distinct_symbols={}\n\
             max_code_len={}\n",
            self.duration().as_millis(),
            self.original_bytes,
            self.container_bytes,
            self.payload_bytes,
            self.compression_ratio(),
            self.bits_per_symbol(),
            self.distinct_symbols,
            self.max_code_len,
        )
    }
}

impl Default for CompressionStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_creation() {
        let stats = CompressionStats::new();
        assert!(stats.end_time.is_none());
        assert_eq!(stats.compression_ratio(), 0.0);
        assert_eq!(stats.bits_per_symbol(), 0.0);
    }

    #[test]
    fn test_ratios() {
        let mut stats = CompressionStats::new();
        stats.original_bytes = 1000;
        stats.container_bytes = 750;
        stats.payload_bytes = 500;

        assert_eq!(stats.compression_ratio(), 0.75);
        assert_eq!(stats.bits_per_symbol(), 4.0);
    }

    #[test]
    fn test_record_table() {
        let table = crate::codec::analyze(b"aaabbc").unwrap().code_table;
        let mut stats = CompressionStats::new();
        stats.record_table(&table);
        assert_eq!(stats.distinct_symbols, 3);
        assert_eq!(stats.max_code_len, 2);
    }

    #[test]
    fn test_complete_freezes_duration() {
        let mut stats = CompressionStats::new();
        stats.complete();
        let first = stats.duration();
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(stats.duration(), first);
    }

    #[test]
    fn test_export_text() {
        let mut stats = CompressionStats::new();
        stats.original_bytes = 1000;
        stats.container_bytes = 400;
        stats.distinct_symbols = 10;

        let text = stats.export_text();
        assert!(text.contains("original_bytes=1000"));
        assert!(text.contains("container_bytes=400"));
        assert!(text.contains("compression_ratio=0.4000"));
        assert!(text.contains("distinct_symbols=10"));
    }
}
