//! # snp-sites
//!
//! Find single-nucleotide polymorphism (SNP) sites in a multiple sequence
//! alignment.
//!
//! The first sequence of the alignment is the reference. Every column where
//! at least one sample carries a different base is a SNP site. A single scan
//! of the alignment is projected into three outputs:
//!
//! - a **VCF** with one row per site and a haploid genotype per sample
//! - a **PHYLIP** file of the full alignment
//! - a **FASTA alignment of the SNP columns only**, for downstream tree building
//!
//! ## Features
//!
//! - **Wrapping independent**: sequences may span any number of lines
//! - **Transparent compression**: gzip and bgzip input detected from content
//! - **Length validation**: every sequence must match the first one's length
//! - **Parallel scan**: disjoint column ranges on the rayon pool, identical results
//!
//! ## Example
//!
//! ```rust
//! use snp_sites::{parse_alignment, ReferenceSequence, SnpDetector, SnpSitesOutput};
//!
//! let input = b">reference\nACGTACGT\n>sample_1\nACGTACGT\n>sample_2\nACGAACGT\n";
//! let alignment = parse_alignment(&input[..]).unwrap();
//! let reference = ReferenceSequence::build(&alignment).unwrap();
//!
//! let records = SnpDetector::new().detect(&reference, &alignment).unwrap();
//! assert_eq!(records.len(), 1);
//!
//! let output = SnpSitesOutput::new(&alignment, &records).unwrap();
//! let mut snp_alignment = Vec::new();
//! output.write_snp_alignment(&mut snp_alignment).unwrap();
//! assert_eq!(snp_alignment, b">reference\nT\n>sample_1\nT\n>sample_2\nA\n");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Alignment, sequence and reference types
//! - [`parsing`]: FASTA alignment reader
//! - [`detection`]: SNP detector and records
//! - [`output`]: VCF, PHYLIP and SNP alignment writers
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod detection;
pub mod output;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::alignment::{Alignment, AlignmentError, Sequence};
pub use crate::core::reference::ReferenceSequence;
pub use crate::core::types::{AmbiguityMode, PhylipNameStyle};
pub use detection::{DetectionConfig, Genotype, SnpDetector, SnpRecord, SnpSites};
pub use output::{OutputConfig, OutputError, OutputFormats, OutputKind, SnpSitesOutput};
pub use parsing::fasta::{parse_alignment, parse_alignment_file, ParseError};
