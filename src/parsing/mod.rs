//! Parsers for alignment input.
//!
//! - **FASTA alignments**: `>`-headed records, sequences wrapped at any width,
//!   plain or gzip/bgzip compressed
//!
//! ## Example
//!
//! ```rust,no_run
//! use snp_sites::parsing::fasta::{parse_alignment, parse_alignment_file};
//! use std::path::Path;
//!
//! // Parse from a file (compression is detected from the content)
//! let alignment = parse_alignment_file(Path::new("alignment.aln.gz")).unwrap();
//!
//! // Or from any buffered reader
//! let alignment = parse_alignment(&b">a\nACGT\n>b\nACGA\n"[..]).unwrap();
//! assert_eq!(alignment.sample_count(), 2);
//! ```

pub mod fasta;
