//! Core data types for SNP site detection.
//!
//! - [`Sequence`] and [`Alignment`]: validated, equal-length rows in input order
//! - [`ReferenceSequence`]: the baseline (first) sequence variants are called against
//! - [`AmbiguityMode`], [`PhylipNameStyle`]: comparison and layout options
//!
//! ## Base comparison
//!
//! | Reference | Sample | Literal | Unknown |
//! |-----------|--------|---------|---------|
//! | A         | a      | same    | same    |
//! | A         | C      | variant | variant |
//! | A         | -      | variant | same    |
//! | A         | N      | variant | same    |
//! | -         | -      | same    | same    |
//!
//! [`Sequence`]: alignment::Sequence
//! [`Alignment`]: alignment::Alignment
//! [`ReferenceSequence`]: reference::ReferenceSequence
//! [`AmbiguityMode`]: types::AmbiguityMode
//! [`PhylipNameStyle`]: types::PhylipNameStyle

pub mod alignment;
pub mod reference;
pub mod types;
