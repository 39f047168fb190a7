//! Shared helpers for building alignment fixtures in integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

/// Number of leading gap columns in synthetic alignments
pub const LEADING_GAPS: usize = 25;

const BASES: &[u8; 4] = b"ACGT";

/// An in-memory alignment used to produce differently encoded inputs
#[derive(Debug, Clone)]
pub struct SyntheticAlignment {
    pub names: Vec<String>,
    pub sequences: Vec<Vec<u8>>,
}

impl SyntheticAlignment {
    /// Build `samples` sequences of `length` columns.
    ///
    /// The first sequence starts with [`LEADING_GAPS`] gaps followed by
    /// pseudo-random bases; every other sequence copies it, except that
    /// sample 1 differs at every column in `variant_columns` and later samples
    /// differ at some of them. Every fifth sample is lowercased outside the
    /// variant columns, which must not create extra SNPs.
    pub fn new(samples: usize, length: usize, variant_columns: &[usize]) -> Self {
        assert!(samples >= 2);

        let mut state: u64 = 0x5eed;
        let mut reference = vec![b'-'; LEADING_GAPS.min(length)];
        while reference.len() < length {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            reference.push(BASES[((state >> 33) % 4) as usize]);
        }

        let mut names = vec!["reference".to_string()];
        let mut sequences = vec![reference.clone()];

        for sample in 1..samples {
            let mut sequence = reference.clone();
            if sample % 5 == 0 {
                for (column, base) in sequence.iter_mut().enumerate() {
                    if !variant_columns.contains(&column) {
                        *base = base.to_ascii_lowercase();
                    }
                }
            }
            for &column in variant_columns {
                if sample == 1 || (sample + column) % 4 == 0 {
                    sequence[column] = substitute(reference[column], sample);
                }
            }
            names.push(format!("sample_{sample}"));
            sequences.push(sequence);
        }

        Self { names, sequences }
    }

    /// Encode as FASTA, wrapping sequence lines at `width` characters
    /// (`None` writes each sequence on one line).
    pub fn to_fasta(&self, width: Option<usize>) -> Vec<u8> {
        let mut out = Vec::new();
        for (name, sequence) in self.names.iter().zip(&self.sequences) {
            out.extend_from_slice(format!(">{name}\n").as_bytes());
            match width {
                Some(width) => {
                    for line in sequence.chunks(width) {
                        out.extend_from_slice(line);
                        out.push(b'\n');
                    }
                }
                None => {
                    out.extend_from_slice(sequence);
                    out.push(b'\n');
                }
            }
        }
        out
    }

    /// Swap two samples (never the reference)
    pub fn swap_samples(&mut self, a: usize, b: usize) {
        assert!(a > 0 && b > 0);
        self.names.swap(a, b);
        self.sequences.swap(a, b);
    }
}

/// A base different from `reference`, chosen by `sample`
fn substitute(reference: u8, sample: usize) -> u8 {
    let index = BASES
        .iter()
        .position(|&b| b == reference.to_ascii_uppercase())
        .unwrap_or(0);
    BASES[(index + 1 + sample % 3) % 4]
}

pub fn gzip(bytes: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes).unwrap();
    encoder.finish().unwrap()
}

/// Write `bytes` to `dir/name` and return the path
pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

/// Path of a file under `tests/data`
pub fn data_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}
