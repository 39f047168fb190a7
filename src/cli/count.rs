use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use crate::cli::{configure_threads, read_input, OutputFormat};
use crate::core::alignment::Alignment;
use crate::core::reference::ReferenceSequence;
use crate::core::types::AmbiguityMode;
use crate::detection::{DetectionConfig, SnpDetector, SnpSites};

#[derive(Args)]
pub struct CountArgs {
    /// Input alignment (FASTA, optionally gzip compressed)
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Also list the 1-based SNP positions
    #[arg(long)]
    pub positions: bool,

    /// Treat gaps and ambiguity codes as unknown rather than comparing them literally
    #[arg(long)]
    pub ambiguous_as_unknown: bool,

    /// Number of worker threads (defaults to all cores)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub threads: Option<u32>,
}

/// Summary of one detection run
#[derive(Debug, Clone, Serialize)]
pub struct SnpSummary {
    pub input: String,
    pub reference: String,
    pub sample_count: usize,
    pub genome_length: usize,
    pub snp_count: usize,
    pub ambiguity: AmbiguityMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<usize>>,
}

impl SnpSummary {
    pub fn new(
        input: &Path,
        alignment: &Alignment,
        reference: &ReferenceSequence,
        sites: &SnpSites,
        ambiguity: AmbiguityMode,
    ) -> Self {
        Self {
            input: input.display().to_string(),
            reference: reference.name.clone(),
            sample_count: alignment.sample_count(),
            genome_length: alignment.genome_length(),
            snp_count: sites.len(),
            ambiguity,
            positions: None,
        }
    }

    #[must_use]
    pub fn with_positions(mut self, sites: &SnpSites) -> Self {
        self.positions = Some(sites.positions().collect());
        self
    }
}

pub fn run(args: CountArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let parallel = configure_threads(args.threads.map(|n| n as usize))?;
    let ambiguity = if args.ambiguous_as_unknown {
        AmbiguityMode::Unknown
    } else {
        AmbiguityMode::Literal
    };

    let alignment = read_input(&args.input)?;
    let reference = ReferenceSequence::build(&alignment)?;

    if verbose {
        eprintln!(
            "Input: {} sequences x {} bases (reference: {})",
            alignment.sample_count(),
            alignment.genome_length(),
            reference.name
        );
    }

    let detector = SnpDetector::with_config(DetectionConfig {
        ambiguity,
        parallel,
        ..DetectionConfig::default()
    });
    let sites = detector.scan(&reference, &alignment)?;

    let mut summary = SnpSummary::new(&args.input, &alignment, &reference, &sites, ambiguity);
    if args.positions {
        summary = summary.with_positions(&sites);
    }

    print_summary(&summary, format)
}

pub(crate) fn print_summary(summary: &SnpSummary, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print_text_summary(summary),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(summary)?),
        OutputFormat::Tsv => print_tsv_summary(summary),
    }
    Ok(())
}

fn print_text_summary(summary: &SnpSummary) {
    println!("SNP Sites");
    println!("{}", "=".repeat(60));
    println!("\nInput: {}", summary.input);
    println!("  Reference: {}", summary.reference);
    println!("  Samples: {}", summary.sample_count);
    println!("  Genome length: {}", summary.genome_length);
    println!("  Ambiguity handling: {}", summary.ambiguity);
    println!("\nSNP sites: {}", summary.snp_count);

    if let Some(positions) = &summary.positions {
        let joined = positions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        println!("  Positions: {joined}");
    }
}

fn print_tsv_summary(summary: &SnpSummary) {
    println!("input\treference\tsample_count\tgenome_length\tsnp_count");
    println!(
        "{}\t{}\t{}\t{}\t{}",
        summary.input,
        summary.reference,
        summary.sample_count,
        summary.genome_length,
        summary.snp_count,
    );
}
