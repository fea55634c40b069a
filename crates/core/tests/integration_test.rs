//! Integration tests for the full huffpack pipeline.
//!
//! These tests verify end-to-end behavior: input -> compress -> serialize ->
//! deserialize -> decompress, with verification that output matches input,
//! plus the structural properties of the generated codes.

mod common;

use common::{generate_sample_data, generate_skewed_data};
use huffpack_core::{
    actions,
    codec::{analyze, compress, decompress, EncodedFile},
    format::{deserialize, serialize},
    CodeTable, Error, FormatError, FrequencyTable, HuffmanTree,
};

/// Compress, serialize, parse and decompress.
fn full_round_trip(data: &[u8]) -> Vec<u8> {
    let file = compress(data).expect("compression failed");
    let bytes = serialize(&file);
    let parsed = deserialize(&bytes).expect("parsing failed");
    decompress(&parsed).expect("decompression failed")
}

/// Cost of an optimal prefix code, computed by merging sorted weights.
///
/// The Huffman cost equals the sum of every merged weight.
fn optimal_cost(freqs: &FrequencyTable) -> u64 {
    let mut weights: Vec<u64> = freqs.iter_present().map(|(_, c)| c).collect();
    let mut cost = 0;
    while weights.len() > 1 {
        weights.sort_unstable_by(|a, b| b.cmp(a));
        let a = weights.pop().unwrap();
        let b = weights.pop().unwrap();
        cost += a + b;
        weights.push(a + b);
    }
    cost
}

fn assert_prefix_free(table: &CodeTable) {
    let codes: Vec<_> = table.iter().collect();
    for (i, (sa, a)) in codes.iter().enumerate() {
        for (sb, b) in codes.iter().skip(i + 1) {
            assert!(
                !a.is_prefix_of(b) && !b.is_prefix_of(a),
                "codes for {sa} ({a}) and {sb} ({b}) overlap"
            );
        }
    }
}

#[test]
fn test_round_trip_text() {
    let input_data = b"hello world! this is a test of the full pipeline with some repetition: aaaaaaaaaa bbbbbbbbbb cccccccccc";
    assert_eq!(full_round_trip(input_data), input_data);
}

#[test]
fn test_round_trip_generated_inputs() {
    for seed in 0..20 {
        let size = 1 + (seed as usize * 997) % 20_000;
        let input_data = generate_sample_data(seed, size);
        assert_eq!(
            full_round_trip(&input_data),
            input_data,
            "seed {seed} size {size}"
        );
    }
}

#[test]
fn test_round_trip_tiny_inputs() {
    for len in 1..=16usize {
        let input_data: Vec<u8> = (0..len).map(|i| (i * 37 % 5) as u8).collect();
        assert_eq!(full_round_trip(&input_data), input_data);
    }
}

/// Test with all symbols present (full 256-byte alphabet).
#[test]
fn test_all_symbols() {
    let input_data: Vec<u8> = (0..=255).collect();
    let file = compress(&input_data).unwrap();

    assert_eq!(file.code_table().len(), 256);
    // Equal frequencies over 256 symbols give a balanced 8-bit code.
    assert!(file.code_table().iter().all(|(_, c)| c.len() == 8));
    assert_eq!(full_round_trip(&input_data), input_data);
}

#[test]
fn test_frequency_conservation() {
    for seed in 100..110 {
        let input_data = generate_sample_data(seed, 5_000);
        let freqs = FrequencyTable::count(&input_data).unwrap();
        assert_eq!(freqs.total(), input_data.len() as u64);
        assert_eq!(HuffmanTree::build(&freqs).weight(), input_data.len() as u64);
    }
}

#[test]
fn test_prefix_free_codes() {
    for seed in 0..10 {
        let input_data = generate_skewed_data(seed, 4_000, 200);
        let analysis = analyze(&input_data).unwrap();
        assert_prefix_free(&analysis.code_table);
        assert!(analysis.code_table.is_prefix_free());
    }
}

#[test]
fn test_optimal_cost() {
    for seed in 0..10 {
        let input_data = generate_skewed_data(seed, 10_000, 64);
        let analysis = analyze(&input_data).unwrap();
        if analysis.frequencies.distinct_symbols() < 2 {
            continue;
        }
        assert_eq!(
            analysis.encoded_bits,
            optimal_cost(&analysis.frequencies),
            "seed {seed}"
        );
    }

    let worked = analyze(b"aaabbc").unwrap();
    assert_eq!(worked.encoded_bits, 9);
    assert_eq!(optimal_cost(&worked.frequencies), 9);
}

#[test]
fn test_degenerate_input() {
    let input_data = vec![0x41u8; 1000];
    let freqs = FrequencyTable::count(&input_data).unwrap();
    let tree = HuffmanTree::build(&freqs);
    assert_eq!(tree.leaf_count(), 1);

    let file = compress(&input_data).unwrap();
    assert_eq!(file.code_table().get(0x41).map(|c| c.len()), Some(1));

    let output = full_round_trip(&input_data);
    assert_eq!(output.len(), 1000);
    assert!(output.iter().all(|&b| b == 0x41));
}

/// Pad bits that spell a valid code must not produce extra symbols.
#[test]
fn test_padding_safety() {
    // "aaabbc": a = "0", 9 bits, 7 zero pad bits that each read as 'a'.
    let file = compress(b"aaabbc").unwrap();
    assert_eq!(file.code_table().get(b'a').unwrap().to_string(), "0");
    assert_eq!(file.payload().len(), 2);
    assert_eq!(decompress(&file).unwrap(), b"aaabbc");

    for len in 1..=15usize {
        let input_data = vec![b'z'; len];
        assert_eq!(full_round_trip(&input_data), input_data);
    }
}

#[test]
fn test_empty_input_rejected() {
    assert!(matches!(compress(b""), Err(Error::EmptyInput)));
}

#[test]
fn test_truncated_code_table_is_format_error() {
    let bytes = serialize(&compress(&generate_sample_data(7, 2_000)).unwrap());
    for cut in (0..200).step_by(13) {
        assert!(matches!(
            deserialize(&bytes[..cut]),
            Err(Error::Format(FormatError::Truncated { .. }))
        ));
    }
}

/// Test CRC detection of corruption anywhere after the code table.
#[test]
fn test_crc_corruption_detection() {
    let input_data = b"test data for crc validation";
    let mut bytes = serialize(&compress(input_data).unwrap());

    let len = bytes.len();
    bytes[len - 6] ^= 0xFF;

    assert!(matches!(
        deserialize(&bytes),
        Err(Error::Format(FormatError::Crc { .. }))
    ));
}

/// A forged length field must be rejected before any decoding starts.
#[test]
fn test_oversized_length_field_rejected() {
    let file = compress(b"aaabbc").unwrap();
    let forged = EncodedFile::new(
        file.code_table().clone(),
        u64::MAX >> 1,
        file.payload().to_vec(),
    );
    let bytes = serialize(&forged);
    assert!(matches!(deserialize(&bytes), Err(Error::Format(_))));

    // Unchecked files handed straight to decompress fail without allocating.
    assert!(matches!(
        decompress(&forged),
        Err(Error::MalformedStream(_))
    ));

    let dir = tempfile::tempdir().unwrap();
    let packed = dir.path().join("forged.huf");
    let output = dir.path().join("forged.out");
    std::fs::write(&packed, &bytes).unwrap();
    assert!(matches!(
        actions::decode(&packed, &output),
        Err(Error::Format(FormatError::LengthMismatch { .. }))
    ));
    assert!(!output.exists());
}

#[test]
fn test_file_actions() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sample.bin");
    let packed = dir.path().join("sample.huf");
    let output = dir.path().join("sample.out");

    let input_data = generate_sample_data(42, 50_000);
    std::fs::write(&input, &input_data).unwrap();

    let bytes = actions::load(&input).unwrap();
    let enc = actions::encode(&bytes, &packed).unwrap();
    let dec = actions::decode(&packed, &output).unwrap();

    assert_eq!(enc.original_bytes, dec.original_bytes);
    assert_eq!(std::fs::read(&output).unwrap(), input_data);
}
