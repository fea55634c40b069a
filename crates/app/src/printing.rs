//! Symbol table output.
//!
//! One row per byte value with its printable form, frequency and code.

use huffpack_core::{CodeTable, FrequencyTable};

/// Printable ASCII is shown as-is; everything else as "N/A".
pub fn display_char(byte: u8) -> String {
    if (32..=126).contains(&byte) {
        (byte as char).to_string()
    } else {
        "N/A".to_string()
    }
}

/// One row of the symbol table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub byte: u8,
    pub character: String,
    pub frequency: Option<u64>,
    pub encoding: Option<String>,
}

/// Build table rows from whatever the current action knows.
///
/// `frequencies` is absent when decoding (the container stores codes only).
pub fn rows(
    frequencies: Option<&FrequencyTable>,
    codes: Option<&CodeTable>,
    show_all: bool,
) -> Vec<Row> {
    (0..=255u8)
        .map(|byte| Row {
            byte,
            character: display_char(byte),
            frequency: frequencies.map(|f| f.get(byte)),
            encoding: codes.and_then(|c| c.get(byte)).map(|code| code.to_string()),
        })
        .filter(|row| show_all || row.frequency.unwrap_or(0) > 0 || row.encoding.is_some())
        .collect()
}

/// Print the Byte / Character / Frequency / Encoding table.
pub fn print_table(rows: &[Row]) {
    println!(
        "{:>5}  {:>9}  {:>10}  {}",
        "Byte", "Character", "Frequency", "Encoding"
    );
    println!("{}", "-".repeat(40));
    for row in rows {
        let frequency = row
            .frequency
            .map_or_else(|| "-".to_string(), |f| f.to_string());
        let encoding = row.encoding.as_deref().unwrap_or("N/A");
        println!(
            "{:>5}  {:>9}  {:>10}  {}",
            row.byte, row.character, frequency, encoding
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_char() {
        assert_eq!(display_char(b'a'), "a");
        assert_eq!(display_char(b' '), " ");
        assert_eq!(display_char(b'~'), "~");
        assert_eq!(display_char(b'\n'), "N/A");
        assert_eq!(display_char(0x7F), "N/A");
        assert_eq!(display_char(0xFF), "N/A");
    }

    #[test]
    fn test_rows_present_only() {
        let analysis = huffpack_core::analyze(b"aaabbc").unwrap();
        let rows = rows(
            Some(&analysis.frequencies),
            Some(&analysis.code_table),
            false,
        );
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].byte, b'a');
        assert_eq!(rows[0].frequency, Some(3));
        assert_eq!(rows[0].encoding.as_deref(), Some("0"));
        assert_eq!(rows[2].encoding.as_deref(), Some("10"));
    }

    #[test]
    fn test_rows_all() {
        let analysis = huffpack_core::analyze(b"x").unwrap();
        let rows = rows(Some(&analysis.frequencies), None, true);
        assert_eq!(rows.len(), 256);
        assert!(rows.iter().all(|r| r.encoding.is_none()));
    }

    #[test]
    fn test_rows_codes_only() {
        let analysis = huffpack_core::analyze(b"abab").unwrap();
        let rows = rows(None, Some(&analysis.code_table), false);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.frequency.is_none()));
    }
}
