//! VCF writer for SNP sites.
//!
//! The alignment is treated as a single contig named `1`. Each SNP becomes
//! one haploid `GT` row; sample columns follow the alignment order.
//!
//! ```text
//! ##fileformat=VCFv4.1
//! ##contig=<ID=1,length=8>
//! ##FORMAT=<ID=GT,Number=1,Type=String,Description="Genotype">
//! #CHROM  POS  ID  REF  ALT  QUAL  FILTER  INFO  FORMAT  s1  s2  s3
//! 1       4    .   T    A    .     .       .     GT      0   0   1
//! ```

use std::io::Write;

use crate::detection::SnpRecord;
use crate::output::OutputError;

pub const FILE_FORMAT: &str = "VCFv4.1";

/// Name of the single contig all positions refer to
pub const CONTIG_NAME: &str = "1";

const HEADER_COLUMNS: [&str; 9] = [
    "#CHROM", "POS", "ID", "REF", "ALT", "QUAL", "FILTER", "INFO", "FORMAT",
];

/// Write the VCF header and one row per SNP record.
///
/// # Errors
///
/// Returns `OutputError::Io` if writing fails, or
/// `OutputError::SampleCountMismatch` if a record does not carry one
/// genotype per sample name.
pub fn write_vcf<W: Write>(
    writer: &mut W,
    genome_length: usize,
    sample_names: &[&str],
    records: &[SnpRecord],
) -> Result<(), OutputError> {
    writeln!(writer, "##fileformat={FILE_FORMAT}")?;
    writeln!(writer, "##contig=<ID={CONTIG_NAME},length={genome_length}>")?;
    writeln!(
        writer,
        "##FORMAT=<ID=GT,Number=1,Type=String,Description=\"Genotype\">"
    )?;

    write!(writer, "{}", HEADER_COLUMNS.join("\t"))?;
    for name in sample_names {
        write!(writer, "\t{name}")?;
    }
    writeln!(writer)?;

    for record in records {
        if record.genotypes.len() != sample_names.len() {
            return Err(OutputError::SampleCountMismatch {
                position: record.position,
                expected: sample_names.len(),
                found: record.genotypes.len(),
            });
        }

        write!(
            writer,
            "{CONTIG_NAME}\t{}\t.\t{}\t{}\t.\t.\t.\tGT",
            record.position,
            char::from(record.reference),
            record.alternates_string(),
        )?;
        for genotype in &record.genotypes {
            write!(writer, "\t{genotype}")?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::AmbiguityMode;

    fn render(genome_length: usize, names: &[&str], records: &[SnpRecord]) -> String {
        let mut buf = Vec::new();
        write_vcf(&mut buf, genome_length, names, records).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_vcf() {
        let records = vec![
            SnpRecord::from_column(3, b'T', b"TTA".to_vec(), AmbiguityMode::Literal),
            SnpRecord::from_column(6, b'g', b"gCa".to_vec(), AmbiguityMode::Literal),
        ];

        let vcf = render(8, &["s1", "s2", "s3"], &records);
        let expected = "##fileformat=VCFv4.1\n\
            ##contig=<ID=1,length=8>\n\
            ##FORMAT=<ID=GT,Number=1,Type=String,Description=\"Genotype\">\n\
            #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\ts1\ts2\ts3\n\
            1\t4\t.\tT\tA\t.\t.\t.\tGT\t0\t0\t1\n\
            1\t7\t.\tG\tC,A\t.\t.\t.\tGT\t0\t1\t2\n";
        assert_eq!(vcf, expected);
    }

    #[test]
    fn test_write_vcf_no_records() {
        let vcf = render(5, &["a", "b"], &[]);
        assert!(vcf.ends_with("FORMAT\ta\tb\n"));
        assert_eq!(vcf.lines().count(), 4);
    }

    #[test]
    fn test_write_vcf_unknown_genotype() {
        let records = vec![SnpRecord::from_column(
            0,
            b'A',
            b"ANC".to_vec(),
            AmbiguityMode::Unknown,
        )];
        let vcf = render(1, &["a", "b", "c"], &records);
        assert!(vcf.ends_with("1\t1\t.\tA\tC\t.\t.\t.\tGT\t0\t.\t1\n"));
    }

    #[test]
    fn test_write_vcf_sample_mismatch() {
        let records = vec![SnpRecord::from_column(
            0,
            b'A',
            b"AC".to_vec(),
            AmbiguityMode::Literal,
        )];
        let mut buf = Vec::new();
        let err = write_vcf(&mut buf, 1, &["only_one"], &records).unwrap_err();
        assert!(matches!(
            err,
            OutputError::SampleCountMismatch {
                position: 1,
                expected: 1,
                found: 2
            }
        ));
    }
}
