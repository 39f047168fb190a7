use thiserror::Error;

/// Errors raised while assembling or querying an alignment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignmentError {
    #[error("No sequences found in alignment")]
    EmptyInput,

    #[error(
        "Sequence '{name}' has length {found}, expected {expected} (all sequences must be the same length)"
    )]
    LengthMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("Expected {expected} sample names but the alignment has {found} sequences")]
    SampleCountMismatch { expected: usize, found: usize },
}

/// A single named row of the alignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    /// Identifier taken from the header line
    pub name: String,

    /// Residues with line terminators removed, as they appeared in the input
    pub bases: Vec<u8>,
}

impl Sequence {
    pub fn new(name: impl Into<String>, bases: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bases: bases.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

/// An ordered set of equal-length sequences.
///
/// The first sequence pushed fixes the genome length; every later sequence
/// must match it. Order is the order of the headers in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alignment {
    sequences: Vec<Sequence>,
    genome_length: usize,
}

impl Alignment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an alignment from already-parsed sequences.
    ///
    /// # Errors
    ///
    /// Returns `AlignmentError::EmptyInput` if `sequences` is empty, or
    /// `AlignmentError::LengthMismatch` for the first sequence whose length
    /// differs from the first one's.
    pub fn from_sequences(sequences: Vec<Sequence>) -> Result<Self, AlignmentError> {
        if sequences.is_empty() {
            return Err(AlignmentError::EmptyInput);
        }

        let mut alignment = Self {
            sequences: Vec::with_capacity(sequences.len()),
            genome_length: 0,
        };
        for sequence in sequences {
            alignment.push(sequence)?;
        }
        Ok(alignment)
    }

    /// Append a sequence, checking it against the established genome length.
    ///
    /// # Errors
    ///
    /// Returns `AlignmentError::LengthMismatch` if this is not the first
    /// sequence and its length differs from the genome length.
    pub fn push(&mut self, sequence: Sequence) -> Result<(), AlignmentError> {
        if self.sequences.is_empty() {
            self.genome_length = sequence.len();
        } else if sequence.len() != self.genome_length {
            let found = sequence.len();
            return Err(AlignmentError::LengthMismatch {
                name: sequence.name,
                expected: self.genome_length,
                found,
            });
        }

        self.sequences.push(sequence);
        Ok(())
    }

    /// Number of columns; the length of every sequence
    #[must_use]
    pub fn genome_length(&self) -> usize {
        self.genome_length
    }

    /// Number of sequences (samples), the reference included
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.sequences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    #[must_use]
    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    /// The first sequence, which the reference is derived from
    #[must_use]
    pub fn first(&self) -> Option<&Sequence> {
        self.sequences.first()
    }

    /// Sample identifiers in header order.
    ///
    /// Names are returned exactly as parsed: no renaming, deduplication or
    /// truncation happens here.
    #[must_use]
    pub fn sample_names(&self) -> Vec<&str> {
        self.sequences.iter().map(|s| s.name.as_str()).collect()
    }

    /// Sample identifiers, checked against the number of names the caller
    /// expects to lay out.
    ///
    /// # Errors
    ///
    /// Returns `AlignmentError::SampleCountMismatch` if `expected` differs from
    /// the number of sequences.
    pub fn sample_names_checked(&self, expected: usize) -> Result<Vec<&str>, AlignmentError> {
        if expected != self.sample_count() {
            return Err(AlignmentError::SampleCountMismatch {
                expected,
                found: self.sample_count(),
            });
        }
        Ok(self.sample_names())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_sets_genome_length() {
        let mut alignment = Alignment::new();
        assert!(alignment.is_empty());

        alignment.push(Sequence::new("a", "ACGT")).unwrap();
        alignment.push(Sequence::new("b", "ACGA")).unwrap();

        assert_eq!(alignment.genome_length(), 4);
        assert_eq!(alignment.sample_count(), 2);
        assert_eq!(alignment.first().unwrap().name, "a");
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let mut alignment = Alignment::new();
        alignment.push(Sequence::new("a", "ACGT")).unwrap();

        let err = alignment.push(Sequence::new("b", "ACG")).unwrap_err();
        assert_eq!(
            err,
            AlignmentError::LengthMismatch {
                name: "b".to_string(),
                expected: 4,
                found: 3,
            }
        );
        // The rejected sequence is not kept
        assert_eq!(alignment.sample_count(), 1);
    }

    #[test]
    fn test_from_sequences_empty() {
        assert_eq!(
            Alignment::from_sequences(Vec::new()).unwrap_err(),
            AlignmentError::EmptyInput
        );
    }

    #[test]
    fn test_sample_names_keep_order_and_duplicates() {
        let alignment = Alignment::from_sequences(vec![
            Sequence::new("zeta", "AC"),
            Sequence::new("alpha", "AC"),
            Sequence::new("zeta", "AG"),
        ])
        .unwrap();

        assert_eq!(alignment.sample_names(), vec!["zeta", "alpha", "zeta"]);
    }

    #[test]
    fn test_sample_names_checked() {
        let alignment =
            Alignment::from_sequences(vec![Sequence::new("a", "A"), Sequence::new("b", "C")])
                .unwrap();

        assert_eq!(alignment.sample_names_checked(2).unwrap(), vec!["a", "b"]);
        assert_eq!(
            alignment.sample_names_checked(3).unwrap_err(),
            AlignmentError::SampleCountMismatch {
                expected: 3,
                found: 2
            }
        );
    }
}
