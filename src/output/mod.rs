//! Writers for detected SNP sites.
//!
//! One detection run feeds three independent renderings:
//!
//! | Format        | Conventional name        | Content                                  |
//! |---------------|--------------------------|------------------------------------------|
//! | VCF           | `<input>.vcf`            | One row per SNP with per-sample genotype |
//! | PHYLIP        | `<input>.phylip`         | Full sequences, padded sample names      |
//! | SNP alignment | `<input>.snp_sites.aln`  | FASTA of the SNP columns only            |
//!
//! All writers take an injected [`std::io::Write`] sink; choosing file names
//! is left to the caller.

use std::io::Write;

use thiserror::Error;

use crate::core::alignment::{Alignment, AlignmentError};
use crate::core::types::PhylipNameStyle;
use crate::detection::SnpRecord;
use crate::utils::validation::{PHYLIP_SUFFIX, SNP_ALIGNMENT_SUFFIX, VCF_SUFFIX};

pub mod phylip;
pub mod snp_alignment;
pub mod vcf;

pub use phylip::write_phylip;
pub use snp_alignment::write_snp_alignment;
pub use vcf::write_vcf;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("SNP at position {position} has {found} samples, expected {expected}")]
    SampleCountMismatch {
        position: usize,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Alignment(#[from] AlignmentError),
}

/// One of the output renderings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    Vcf,
    Phylip,
    SnpAlignment,
}

impl OutputKind {
    /// Suffix appended to the output prefix
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Vcf => VCF_SUFFIX,
            Self::Phylip => PHYLIP_SUFFIX,
            Self::SnpAlignment => SNP_ALIGNMENT_SUFFIX,
        }
    }
}

impl std::fmt::Display for OutputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vcf => write!(f, "VCF"),
            Self::Phylip => write!(f, "PHYLIP"),
            Self::SnpAlignment => write!(f, "SNP alignment"),
        }
    }
}

/// Which renderings to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputFormats {
    pub vcf: bool,
    pub phylip: bool,
    pub snp_alignment: bool,
}

impl Default for OutputFormats {
    fn default() -> Self {
        Self::all()
    }
}

impl OutputFormats {
    #[must_use]
    pub fn all() -> Self {
        Self {
            vcf: true,
            phylip: true,
            snp_alignment: true,
        }
    }

    /// Selected formats, in the fixed order VCF, PHYLIP, SNP alignment
    #[must_use]
    pub fn selected(&self) -> Vec<OutputKind> {
        [
            (self.vcf, OutputKind::Vcf),
            (self.phylip, OutputKind::Phylip),
            (self.snp_alignment, OutputKind::SnpAlignment),
        ]
        .into_iter()
        .filter_map(|(enabled, kind)| enabled.then_some(kind))
        .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.vcf || self.phylip || self.snp_alignment)
    }
}

/// Output options
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    pub formats: OutputFormats,
    pub phylip_names: PhylipNameStyle,
}

/// The inputs every writer projects from: the validated alignment, the SNP
/// records of one detection run, and the sample names in header order.
#[derive(Debug, Clone)]
pub struct SnpSitesOutput<'a> {
    alignment: &'a Alignment,
    records: &'a [SnpRecord],
    sample_names: Vec<&'a str>,
}

impl<'a> SnpSitesOutput<'a> {
    /// Bundle an alignment with its SNP records.
    ///
    /// # Errors
    ///
    /// Returns `OutputError::Alignment` if the records were built for a
    /// different number of samples than the alignment holds.
    pub fn new(alignment: &'a Alignment, records: &'a [SnpRecord]) -> Result<Self, OutputError> {
        let expected = records
            .first()
            .map_or(alignment.sample_count(), |record| record.bases.len());
        let sample_names = alignment.sample_names_checked(expected)?;

        Ok(Self {
            alignment,
            records,
            sample_names,
        })
    }

    /// Render one output format into `writer`
    ///
    /// # Errors
    ///
    /// Propagates the error of the selected writer.
    pub fn write<W: Write>(
        &self,
        kind: OutputKind,
        writer: &mut W,
        config: &OutputConfig,
    ) -> Result<(), OutputError> {
        match kind {
            OutputKind::Vcf => self.write_vcf(writer),
            OutputKind::Phylip => self.write_phylip(writer, config.phylip_names),
            OutputKind::SnpAlignment => self.write_snp_alignment(writer),
        }
    }

    /// # Errors
    ///
    /// See [`write_vcf`].
    pub fn write_vcf<W: Write>(&self, writer: &mut W) -> Result<(), OutputError> {
        write_vcf(
            writer,
            self.alignment.genome_length(),
            &self.sample_names,
            self.records,
        )
    }

    /// # Errors
    ///
    /// See [`write_phylip`].
    pub fn write_phylip<W: Write>(
        &self,
        writer: &mut W,
        style: PhylipNameStyle,
    ) -> Result<(), OutputError> {
        write_phylip(writer, self.alignment, &self.sample_names, style)
    }

    /// # Errors
    ///
    /// See [`write_snp_alignment`].
    pub fn write_snp_alignment<W: Write>(&self, writer: &mut W) -> Result<(), OutputError> {
        write_snp_alignment(writer, &self.sample_names, self.records)
    }
}
