//! SNP site detection.
//!
//! - [`SnpDetector`]: scans every alignment column against the reference
//! - [`SnpSites`]: the variant columns found by one scan
//! - [`SnpRecord`]: reference base, alternates and per-sample genotypes of one site
//!
//! ## Example
//!
//! ```rust
//! use snp_sites::core::alignment::{Alignment, Sequence};
//! use snp_sites::core::reference::ReferenceSequence;
//! use snp_sites::detection::SnpDetector;
//!
//! let alignment = Alignment::from_sequences(vec![
//!     Sequence::new("reference", "ACGT"),
//!     Sequence::new("sample", "ACCT"),
//! ])
//! .unwrap();
//! let reference = ReferenceSequence::build(&alignment).unwrap();
//!
//! let sites = SnpDetector::new().scan(&reference, &alignment).unwrap();
//! assert_eq!(sites.positions().collect::<Vec<_>>(), vec![3]);
//!
//! let records = sites.records(&reference, &alignment).unwrap();
//! assert_eq!(records[0].alternates, b"C".to_vec());
//! ```

pub mod engine;
pub mod record;

pub use engine::{DetectionConfig, SnpDetector, SnpSites};
pub use record::{Genotype, SnpRecord};
