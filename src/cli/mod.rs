//! Command-line interface for snp-sites.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **call**: Detect SNP sites and write VCF, PHYLIP and SNP-only alignments
//! - **count**: Report genome length, sample count and number of SNP sites
//!
//! ## Usage
//!
//! ```text
//! # Write alignment.aln.vcf, alignment.aln.phylip and alignment.aln.snp_sites.aln
//! snp-sites call alignment.aln
//!
//! # Gzipped input, custom prefix, VCF only
//! snp-sites call alignment.aln.gz -o results/run1 --vcf
//!
//! # Pipe from another tool
//! zcat alignment.aln.gz | snp-sites count -
//!
//! # JSON summary for scripting
//! snp-sites --format json count alignment.aln
//! ```

use std::io::BufReader;
use std::path::Path;

use clap::{Parser, Subcommand};

use crate::core::alignment::Alignment;
use crate::parsing::fasta::{parse_alignment, parse_alignment_file, ParseError};

pub mod call;
pub mod count;

#[derive(Parser)]
#[command(name = "snp-sites")]
#[command(version)]
#[command(about = "Find SNP sites in a multi-FASTA alignment")]
#[command(
    long_about = "snp-sites scans a multiple sequence alignment column by column and reports every column where a sample differs from the first (reference) sequence.\n\nOne run produces:\n- a VCF with per-sample genotypes\n- a PHYLIP file of the full alignment\n- a FASTA alignment of the SNP columns only"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for reports
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect SNP sites and write VCF, PHYLIP and SNP alignment files
    Call(call::CallArgs),

    /// Count SNP sites without writing any files
    Count(count::CountArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Read an alignment from a path, or from stdin when the path is `-`
pub(crate) fn read_input(path: &Path) -> Result<Alignment, ParseError> {
    if path == Path::new("-") {
        parse_alignment(BufReader::new(std::io::stdin().lock()))
    } else {
        parse_alignment_file(path)
    }
}

/// Size the global rayon pool. Returns whether the scan should run in parallel.
pub(crate) fn configure_threads(threads: Option<usize>) -> anyhow::Result<bool> {
    if let Some(n) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| anyhow::anyhow!("Failed to configure thread pool: {e}"))?;
    }

    Ok(rayon::current_num_threads() > 1)
}
