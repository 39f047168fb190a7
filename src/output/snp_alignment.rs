//! FASTA alignment restricted to the SNP columns.
//!
//! Every sample keeps its header; its sequence is the sample's base at each
//! SNP position, in ascending position order. The bases come from the
//! records themselves, so the original sequences are not read again.

use std::io::Write;

use crate::detection::SnpRecord;
use crate::output::OutputError;

/// Write one `>name` record per sample holding only its SNP-column bases.
///
/// # Errors
///
/// Returns `OutputError::Io` if writing fails, or
/// `OutputError::SampleCountMismatch` if a record does not carry one base
/// per sample name.
pub fn write_snp_alignment<W: Write>(
    writer: &mut W,
    sample_names: &[&str],
    records: &[SnpRecord],
) -> Result<(), OutputError> {
    if let Some(record) = records.iter().find(|r| r.bases.len() != sample_names.len()) {
        return Err(OutputError::SampleCountMismatch {
            position: record.position,
            expected: sample_names.len(),
            found: record.bases.len(),
        });
    }

    let mut row = Vec::with_capacity(records.len());
    for (sample, name) in sample_names.iter().enumerate() {
        row.clear();
        row.extend(records.iter().map(|record| record.bases[sample]));

        writeln!(writer, ">{name}")?;
        writer.write_all(&row)?;
        writeln!(writer)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::AmbiguityMode;

    #[test]
    fn test_write_snp_alignment() {
        let records = vec![
            SnpRecord::from_column(1, b'C', b"CcT".to_vec(), AmbiguityMode::Literal),
            SnpRecord::from_column(5, b'A', b"A-A".to_vec(), AmbiguityMode::Literal),
        ];

        let mut buf = Vec::new();
        write_snp_alignment(&mut buf, &["ref", "s1", "s2"], &records).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            ">ref\nCA\n>s1\nc-\n>s2\nTA\n"
        );
    }

    #[test]
    fn test_write_snp_alignment_without_snps() {
        let mut buf = Vec::new();
        write_snp_alignment(&mut buf, &["a", "b"], &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), ">a\n\n>b\n\n");
    }

    #[test]
    fn test_write_snp_alignment_mismatch() {
        let records = vec![SnpRecord::from_column(
            0,
            b'A',
            b"AT".to_vec(),
            AmbiguityMode::Literal,
        )];
        let mut buf = Vec::new();
        let err = write_snp_alignment(&mut buf, &["a", "b", "c"], &records).unwrap_err();
        assert!(matches!(
            err,
            OutputError::SampleCountMismatch {
                expected: 3,
                found: 2,
                ..
            }
        ));
    }
}
