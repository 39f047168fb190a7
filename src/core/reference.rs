use crate::core::alignment::{Alignment, AlignmentError};

/// The baseline sequence variants are called against.
///
/// Built once per alignment from its first sequence and never modified
/// afterwards; the length always equals the alignment's genome length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSequence {
    /// Name of the sequence the reference was taken from
    pub name: String,

    bases: Vec<u8>,
}

impl ReferenceSequence {
    /// Take the first sequence of `alignment` as the reference.
    ///
    /// No transformation is applied beyond the line concatenation the reader
    /// already performed.
    ///
    /// # Errors
    ///
    /// Returns `AlignmentError::EmptyInput` if the alignment has no sequences.
    pub fn build(alignment: &Alignment) -> Result<Self, AlignmentError> {
        let first = alignment.first().ok_or(AlignmentError::EmptyInput)?;

        Ok(Self {
            name: first.name.clone(),
            bases: first.bases.clone(),
        })
    }

    #[must_use]
    pub fn bases(&self) -> &[u8] {
        &self.bases
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
