use crate::core::types::{normalize_base, AmbiguityMode};

/// Genotype of one sample at a SNP site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Genotype {
    /// Same base as the reference
    Reference,
    /// 1-based index into the site's alternate bases
    Alternate(usize),
    /// Base cannot be called (non-ACGT under [`AmbiguityMode::Unknown`])
    Unknown,
}

impl std::fmt::Display for Genotype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reference => write!(f, "0"),
            Self::Alternate(index) => write!(f, "{index}"),
            Self::Unknown => write!(f, "."),
        }
    }
}

/// A variant column of the alignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnpRecord {
    /// 1-based column
    pub position: usize,

    /// Reference base (canonical bases uppercased)
    pub reference: u8,

    /// Distinct alternate bases, in order of first occurrence across samples
    pub alternates: Vec<u8>,

    /// Base of every sample at this column, as it appears in the alignment
    pub bases: Vec<u8>,

    /// Genotype of every sample, in sample order
    pub genotypes: Vec<Genotype>,
}

impl SnpRecord {
    /// Build the record for one column from the reference base and the
    /// column's bases in sample order.
    pub fn from_column(
        column: usize,
        reference: u8,
        bases: Vec<u8>,
        ambiguity: AmbiguityMode,
    ) -> Self {
        let reference_base = normalize_base(reference);
        let mut alternates: Vec<u8> = Vec::new();

        let genotypes = bases
            .iter()
            .map(|&base| {
                if !ambiguity.is_callable(base) {
                    Genotype::Unknown
                } else if ambiguity.differs(reference_base, base) {
                    let alternate = normalize_base(base);
                    let existing = alternates.iter().position(|&a| a == alternate);
                    let index = if let Some(index) = existing {
                        index
                    } else {
                        alternates.push(alternate);
                        alternates.len() - 1
                    };
                    Genotype::Alternate(index + 1)
                } else {
                    Genotype::Reference
                }
            })
            .collect();

        Self {
            position: column + 1,
            reference: reference_base,
            alternates,
            bases,
            genotypes,
        }
    }

    /// Alternate bases as a comma-separated string
    #[must_use]
    pub fn alternates_string(&self) -> String {
        self.alternates
            .iter()
            .map(|&b| char::from(b).to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_column_orders_alternates_by_first_occurrence() {
        let record = SnpRecord::from_column(
            4,
            b'A',
            b"AGTgAa".to_vec(),
            AmbiguityMode::Literal,
        );

        assert_eq!(record.position, 5);
        assert_eq!(record.reference, b'A');
        assert_eq!(record.alternates, b"GT".to_vec());
        assert_eq!(
            record.genotypes,
            vec![
                Genotype::Reference,
                Genotype::Alternate(1),
                Genotype::Alternate(2),
                Genotype::Alternate(1),
                Genotype::Reference,
                Genotype::Reference,
            ]
        );
        assert_eq!(record.alternates_string(), "G,T");
        // Raw bases are preserved for the SNP alignment
        assert_eq!(record.bases, b"AGTgAa".to_vec());
    }

    #[test]
    fn test_from_column_lowercase_reference() {
        let record = SnpRecord::from_column(0, b'c', b"cCt".to_vec(), AmbiguityMode::Literal);
        assert_eq!(record.reference, b'C');
        assert_eq!(record.alternates, b"T".to_vec());
    }

    #[test]
    fn test_from_column_gap_is_literal_alternate() {
        let record = SnpRecord::from_column(0, b'T', b"T-".to_vec(), AmbiguityMode::Literal);
        assert_eq!(record.alternates, b"-".to_vec());
        assert_eq!(record.genotypes[1], Genotype::Alternate(1));
    }

    #[test]
    fn test_from_column_unknown_mode() {
        let record = SnpRecord::from_column(0, b'T', b"TN-C".to_vec(), AmbiguityMode::Unknown);
        assert_eq!(record.alternates, b"C".to_vec());
        assert_eq!(
            record.genotypes,
            vec![
                Genotype::Reference,
                Genotype::Unknown,
                Genotype::Unknown,
                Genotype::Alternate(1),
            ]
        );
    }

    #[test]
    fn test_genotype_display() {
        assert_eq!(Genotype::Reference.to_string(), "0");
        assert_eq!(Genotype::Alternate(2).to_string(), "2");
        assert_eq!(Genotype::Unknown.to_string(), ".");
    }
}
