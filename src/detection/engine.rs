use std::ops::Range;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::core::alignment::{Alignment, AlignmentError};
use crate::core::reference::ReferenceSequence;
use crate::core::types::AmbiguityMode;
use crate::detection::record::SnpRecord;

/// Default number of columns handed to one worker in a parallel scan
pub const DEFAULT_CHUNK_SIZE: usize = 1 << 16;

/// Configuration for the SNP detector
#[derive(Debug, Clone)]
pub struct DetectionConfig {
    /// How gaps and ambiguity codes are compared against the reference
    pub ambiguity: AmbiguityMode,
    /// Scan disjoint column ranges on the rayon thread pool
    pub parallel: bool,
    /// Columns per range when scanning in parallel
    pub chunk_size: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            ambiguity: AmbiguityMode::default(),
            parallel: false,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Columns found to vary, the result of a single scan.
///
/// The SNP count and the full [`SnpRecord`]s are both projections of this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnpSites {
    /// 0-based variant columns, strictly ascending
    columns: Vec<usize>,
    /// Genome length of the scanned alignment
    genome_length: usize,
    ambiguity: AmbiguityMode,
}

impl SnpSites {
    /// Number of SNP columns
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// 0-based variant columns in ascending order
    #[must_use]
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// 1-based variant positions in ascending order
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.columns.iter().map(|c| c + 1)
    }

    /// Build the record of every SNP column, in ascending position order.
    ///
    /// Only the variant columns of `alignment` are read.
    ///
    /// # Errors
    ///
    /// Returns `AlignmentError::LengthMismatch` if `reference` or `alignment`
    /// is not as long as the alignment that was scanned.
    pub fn records(
        &self,
        reference: &ReferenceSequence,
        alignment: &Alignment,
    ) -> Result<Vec<SnpRecord>, AlignmentError> {
        self.check_dimensions(reference, alignment)?;
        Ok(self
            .columns
            .iter()
            .map(|&column| self.record_at(column, reference, alignment))
            .collect())
    }

    /// Parallel variant of [`SnpSites::records`]; output order is identical.
    ///
    /// # Errors
    ///
    /// See [`SnpSites::records`].
    pub fn par_records(
        &self,
        reference: &ReferenceSequence,
        alignment: &Alignment,
    ) -> Result<Vec<SnpRecord>, AlignmentError> {
        self.check_dimensions(reference, alignment)?;
        Ok(self
            .columns
            .par_iter()
            .map(|&column| self.record_at(column, reference, alignment))
            .collect())
    }

    fn check_dimensions(
        &self,
        reference: &ReferenceSequence,
        alignment: &Alignment,
    ) -> Result<(), AlignmentError> {
        if reference.len() != self.genome_length {
            return Err(AlignmentError::LengthMismatch {
                name: reference.name.clone(),
                expected: self.genome_length,
                found: reference.len(),
            });
        }
        if let Some(sequence) = alignment
            .sequences()
            .iter()
            .find(|sequence| sequence.len() != self.genome_length)
        {
            return Err(AlignmentError::LengthMismatch {
                name: sequence.name.clone(),
                expected: self.genome_length,
                found: sequence.len(),
            });
        }
        Ok(())
    }

    fn record_at(
        &self,
        column: usize,
        reference: &ReferenceSequence,
        alignment: &Alignment,
    ) -> SnpRecord {
        let bases = alignment
            .sequences()
            .iter()
            .map(|sequence| sequence.bases[column])
            .collect();

        SnpRecord::from_column(
            column,
            reference.bases()[column],
            bases,
            self.ambiguity,
        )
    }
}

/// Column-wise SNP detector.
///
/// A column is a SNP when at least one sample's base differs from the
/// reference base under the configured [`AmbiguityMode`]. Every column is
/// independent, so the scan can be split into column ranges and run in
/// parallel; the merged result is always in ascending column order.
#[derive(Debug, Clone, Default)]
pub struct SnpDetector {
    config: DetectionConfig,
}

impl SnpDetector {
    /// Create a detector with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with custom configuration
    #[must_use]
    pub fn with_config(config: DetectionConfig) -> Self {
        Self { config }
    }

    /// Scan every column of `alignment` against `reference`.
    ///
    /// Runs in O(genome length x samples) time with one flag per column of
    /// extra memory.
    ///
    /// # Errors
    ///
    /// Returns `AlignmentError::LengthMismatch` if the reference length differs
    /// from the alignment's genome length.
    pub fn scan(
        &self,
        reference: &ReferenceSequence,
        alignment: &Alignment,
    ) -> Result<SnpSites, AlignmentError> {
        if reference.len() != alignment.genome_length() {
            return Err(AlignmentError::LengthMismatch {
                name: reference.name.clone(),
                expected: alignment.genome_length(),
                found: reference.len(),
            });
        }

        let genome_length = alignment.genome_length();
        let columns = if self.config.parallel {
            let chunk_size = self.config.chunk_size.max(1);
            debug!(
                "Scanning {} columns in ranges of {} on {} threads",
                genome_length,
                chunk_size,
                rayon::current_num_threads()
            );

            let ranges: Vec<Range<usize>> = (0..genome_length)
                .step_by(chunk_size)
                .map(|start| start..(start + chunk_size).min(genome_length))
                .collect();

            ranges
                .into_par_iter()
                .map(|range| self.scan_range(reference, alignment, range))
                .collect::<Vec<_>>()
                .into_iter()
                .flatten()
                .collect()
        } else {
            debug!("Scanning {} columns serially", genome_length);
            self.scan_range(reference, alignment, 0..genome_length)
        };

        info!(
            "Found {} SNP sites in {} columns",
            columns.len(),
            genome_length
        );

        Ok(SnpSites {
            columns,
            genome_length,
            ambiguity: self.config.ambiguity,
        })
    }

    /// Count the SNP columns
    ///
    /// # Errors
    ///
    /// See [`SnpDetector::scan`].
    pub fn count(
        &self,
        reference: &ReferenceSequence,
        alignment: &Alignment,
    ) -> Result<usize, AlignmentError> {
        Ok(self.scan(reference, alignment)?.len())
    }

    /// Scan and build the full ordered list of SNP records
    ///
    /// # Errors
    ///
    /// See [`SnpDetector::scan`].
    pub fn detect(
        &self,
        reference: &ReferenceSequence,
        alignment: &Alignment,
    ) -> Result<Vec<SnpRecord>, AlignmentError> {
        let sites = self.scan(reference, alignment)?;
        if self.config.parallel {
            sites.par_records(reference, alignment)
        } else {
            sites.records(reference, alignment)
        }
    }

    /// Variant columns within `range`, ascending.
    ///
    /// Walks each sequence along the range rather than each column down the
    /// samples, so reads stay contiguous in memory.
    fn scan_range(
        &self,
        reference: &ReferenceSequence,
        alignment: &Alignment,
        range: Range<usize>,
    ) -> Vec<usize> {
        let ambiguity = self.config.ambiguity;
        let reference = &reference.bases()[range.clone()];
        let mut variant = vec![false; reference.len()];

        for sequence in alignment.sequences() {
            let bases = &sequence.bases[range.clone()];
            for (flag, (&r, &b)) in variant.iter_mut().zip(reference.iter().zip(bases)) {
                *flag |= ambiguity.differs(r, b);
            }
        }

        variant
            .into_iter()
            .enumerate()
            .filter_map(|(offset, is_variant)| is_variant.then_some(range.start + offset))
            .collect()
    }
}
