//! Seeded sample data for tests.
//!
//! Generated data mixes sections with very different symbol distributions:
//! - runs of one byte (a single dominant symbol)
//! - text-like data over a small alphabet
//! - short repeating patterns
//! - uniformly random bytes (close to incompressible)

#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate `size_bytes` of mixed-distribution data from `seed`.
pub fn generate_sample_data(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes);

    let mut remaining = size_bytes;
    while remaining > 0 {
        let chunk_size = remaining.min(rng.gen_range(64..=4096));

        match rng.gen_range(0..10u8) {
            // 30% runs of the same byte
            0..=2 => {
                let byte_value: u8 = rng.gen();
                data.extend(std::iter::repeat(byte_value).take(chunk_size));
            }

            // 30% limited alphabet, text-like
            3..=5 => {
                let alphabet = b"abcdefghijklmnopqrstuvwxyz .!,\n";
                for _ in 0..chunk_size {
                    data.push(alphabet[rng.gen_range(0..alphabet.len())]);
                }
            }

            // 20% repeating patterns
            6..=7 => {
                let pattern = generate_pattern(&mut rng);
                data.extend(pattern.iter().cycle().take(chunk_size));
            }

            // 20% random bytes
            _ => {
                for _ in 0..chunk_size {
                    data.push(rng.gen());
                }
            }
        }

        remaining -= chunk_size;
    }

    data
}

/// Random bytes drawn from a skewed distribution over `alphabet_size` symbols.
pub fn generate_skewed_data(seed: u64, size_bytes: usize, alphabet_size: u16) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..size_bytes)
        .map(|_| {
            // Squaring a uniform sample biases toward low symbols.
            let r: f64 = rng.gen();
            ((r * r) * alphabet_size as f64) as u8
        })
        .collect()
}

fn generate_pattern(rng: &mut ChaCha8Rng) -> Vec<u8> {
    let pattern_len = rng.gen_range(4..=32);
    (0..pattern_len).map(|_| rng.gen()).collect()
}
