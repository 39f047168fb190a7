//! Sequential PHYLIP writer.
//!
//! The first line holds the sample count and genome length; each following
//! line is a sample name followed by its full, unmodified sequence.

use std::io::Write;

use crate::core::alignment::Alignment;
use crate::core::types::PhylipNameStyle;
use crate::output::OutputError;
use crate::utils::validation::phylip_name;

/// Write `alignment` in sequential PHYLIP format.
///
/// # Errors
///
/// Returns `OutputError::Io` if writing fails, or `OutputError::Alignment`
/// if `sample_names` does not have one entry per sequence.
pub fn write_phylip<W: Write>(
    writer: &mut W,
    alignment: &Alignment,
    sample_names: &[&str],
    style: PhylipNameStyle,
) -> Result<(), OutputError> {
    alignment.sample_names_checked(sample_names.len())?;

    writeln!(
        writer,
        "{} {}",
        alignment.sample_count(),
        alignment.genome_length()
    )?;

    for (name, sequence) in sample_names.iter().zip(alignment.sequences()) {
        match style {
            PhylipNameStyle::Strict => write!(writer, "{}", phylip_name(name))?,
            PhylipNameStyle::Relaxed => write!(writer, "{name} ")?,
        }
        writer.write_all(&sequence.bases)?;
        writeln!(writer)?;
    }

    Ok(())
}
