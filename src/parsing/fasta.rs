//! Reader for FASTA-style multiple sequence alignments using noodles.
//!
//! Each record is a `>` header line carrying the sample identifier, followed
//! by one or more lines of residues. Lines are concatenated with their
//! terminators (`\n` or `\r\n`) removed, so the same alignment wrapped at any
//! width parses to the same sequences.
//!
//! Compressed input is detected from the gzip magic bytes rather than the
//! file extension, so `.aln`, `.aln.gz`, bgzip output and piped gzip data
//! are all read the same way.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use flate2::bufread::MultiGzDecoder;
use noodles::fasta;
use thiserror::Error;
use tracing::{debug, info};

use crate::core::alignment::{Alignment, AlignmentError, Sequence};
use crate::utils::validation::{check_sequence_limit, MAX_SEQUENCES};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid alignment format: {0}")]
    InvalidFormat(String),

    #[error(transparent)]
    Alignment(#[from] AlignmentError),

    #[error("Too many sequences: {0} exceeds maximum allowed ({MAX_SEQUENCES})")]
    TooManySequences(usize),
}

impl ParseError {
    /// Malformed headers and sequences whose length disagrees with the
    /// genome length
    #[must_use]
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidFormat(_) | Self::Alignment(AlignmentError::LengthMismatch { .. })
        )
    }

    /// No header line was found in the input
    #[must_use]
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::Alignment(AlignmentError::EmptyInput))
    }
}

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Check whether a stream prefix is the gzip magic
#[must_use]
pub fn is_gzipped(prefix: &[u8]) -> bool {
    prefix.starts_with(&GZIP_MAGIC)
}

/// Parse an alignment file, decompressing it first if it is gzipped.
///
/// The file handle is owned by this call and closed before it returns,
/// whether parsing succeeded or not.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened or read (this
/// includes truncated or corrupt compressed data), `ParseError::InvalidFormat`
/// for malformed headers, or `ParseError::Alignment` if the input holds no
/// records or the sequences differ in length.
pub fn parse_alignment_file(path: &Path) -> Result<Alignment, ParseError> {
    let file = File::open(path)?;
    debug!("Reading alignment from {}", path.display());
    parse_alignment(BufReader::new(file))
}

/// Parse an alignment from any buffered byte stream.
///
/// # Errors
///
/// See [`parse_alignment_file`].
pub fn parse_alignment<R: BufRead>(mut reader: R) -> Result<Alignment, ParseError> {
    // A pipe may hand over fewer bytes than the magic per read
    let mut prefix = Vec::with_capacity(GZIP_MAGIC.len());
    reader
        .by_ref()
        .take(GZIP_MAGIC.len() as u64)
        .read_to_end(&mut prefix)?;
    let compressed = is_gzipped(&prefix);
    let reader = io::Cursor::new(prefix).chain(reader);

    let alignment = if compressed {
        debug!("Input is gzip compressed");
        let decoder = MultiGzDecoder::new(reader);
        read_records(BufReader::new(decoder))?
    } else {
        read_records(reader)?
    };

    info!(
        "Parsed alignment: {} sequences x {} bases",
        alignment.sample_count(),
        alignment.genome_length()
    );

    Ok(alignment)
}

/// Read every record from an uncompressed stream into a validated alignment
fn read_records<R: BufRead>(inner: R) -> Result<Alignment, ParseError> {
    let mut reader = fasta::io::Reader::new(inner);
    let mut alignment = Alignment::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if read_line(reader.get_mut(), &mut buf)? == 0 {
            break;
        }

        let line = std::str::from_utf8(&buf).map_err(|e| {
            ParseError::InvalidFormat(format!(
                "Header line '{}' is not valid UTF-8: {e}",
                truncate_for_display(&String::from_utf8_lossy(&buf))
            ))
        })?;

        // Blank lines ahead of the first header carry nothing
        if alignment.is_empty() && line.trim().is_empty() {
            continue;
        }

        let definition: fasta::record::Definition = line.parse().map_err(|e| {
            if alignment.is_empty() && !line.starts_with('>') {
                ParseError::InvalidFormat(format!(
                    "Expected a '>' header line before sequence data, found '{}'",
                    truncate_for_display(line)
                ))
            } else {
                ParseError::InvalidFormat(format!(
                    "Invalid header line '{}': {e}",
                    truncate_for_display(line)
                ))
            }
        })?;

        // Check sequence limit for DOS protection
        if check_sequence_limit(alignment.sample_count()).is_some() {
            return Err(ParseError::TooManySequences(alignment.sample_count()));
        }

        let mut bases = Vec::with_capacity(alignment.genome_length());
        reader.read_sequence(&mut bases)?;

        let name = String::from_utf8_lossy(definition.name()).into_owned();
        alignment.push(Sequence::new(name, bases))?;
    }

    if alignment.is_empty() {
        return Err(AlignmentError::EmptyInput.into());
    }

    Ok(alignment)
}

/// Read one line without its `\n` or `\r\n` terminator
fn read_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<usize> {
    let n = reader.read_until(b'\n', buf)?;
    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }
    Ok(n)
}

fn truncate_for_display(line: &str) -> String {
    const MAX_CHARS: usize = 40;
    if line.chars().count() > MAX_CHARS {
        let head: String = line.chars().take(MAX_CHARS).collect();
        format!("{head}...")
    } else {
        line.to_string()
    }
}
