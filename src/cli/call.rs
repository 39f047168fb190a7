use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::cli::count::{print_summary, SnpSummary};
use crate::cli::{configure_threads, read_input, OutputFormat};
use crate::core::reference::ReferenceSequence;
use crate::core::types::{AmbiguityMode, PhylipNameStyle};
use crate::detection::{DetectionConfig, SnpDetector};
use crate::output::{OutputConfig, OutputFormats, SnpSitesOutput};
use crate::utils::validation::{default_output_prefix, path_with_suffix};

#[derive(Args)]
pub struct CallArgs {
    /// Input alignment (FASTA, optionally gzip compressed)
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output prefix; suffixes .vcf, .phylip and .snp_sites.aln are appended
    /// (defaults to the input file name in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the VCF file
    #[arg(long)]
    pub vcf: bool,

    /// Write the PHYLIP file
    #[arg(long)]
    pub phylip: bool,

    /// Write the SNP-only FASTA alignment
    #[arg(long)]
    pub aln: bool,

    /// Treat gaps and ambiguity codes as unknown rather than comparing them literally
    #[arg(long)]
    pub ambiguous_as_unknown: bool,

    /// Write full sample names in PHYLIP output instead of 10-character names
    #[arg(long)]
    pub relaxed_phylip: bool,

    /// Number of worker threads (defaults to all cores)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub threads: Option<u32>,
}

impl CallArgs {
    /// Selected formats; all three when no format flag is given
    fn formats(&self) -> OutputFormats {
        if self.vcf || self.phylip || self.aln {
            OutputFormats {
                vcf: self.vcf,
                phylip: self.phylip,
                snp_alignment: self.aln,
            }
        } else {
            OutputFormats::all()
        }
    }

    fn ambiguity(&self) -> AmbiguityMode {
        if self.ambiguous_as_unknown {
            AmbiguityMode::Unknown
        } else {
            AmbiguityMode::Literal
        }
    }
}

pub fn run(args: CallArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let parallel = configure_threads(args.threads.map(|n| n as usize))?;
    let ambiguity = args.ambiguity();
    let config = OutputConfig {
        formats: args.formats(),
        phylip_names: if args.relaxed_phylip {
            PhylipNameStyle::Relaxed
        } else {
            PhylipNameStyle::Strict
        },
    };

    // Everything is parsed and validated before any output is opened
    let alignment = read_input(&args.input)
        .with_context(|| format!("Failed to read alignment {}", args.input.display()))?;
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
    let records = if parallel {
        sites.par_records(&reference, &alignment)?
    } else {
        sites.records(&reference, &alignment)?
    };

    let output = SnpSitesOutput::new(&alignment, &records)?;
    let prefix = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_prefix(&args.input));
    let written = write_files(&output, &config, &prefix)?;

    if verbose {
        for path in &written {
            eprintln!("Wrote {}", path.display());
        }
    }

    let summary = SnpSummary::new(&args.input, &alignment, &reference, &sites, ambiguity);
    print_summary(&summary, format)
}

/// Render every selected format into a temporary file next to its final
/// path, then move them all into place.
///
/// Nothing is renamed until every rendering succeeded, and if a rename fails
/// the outputs already moved into place are removed again, so a failed run
/// never leaves partial output behind.
fn write_files(
    output: &SnpSitesOutput<'_>,
    config: &OutputConfig,
    prefix: &Path,
) -> anyhow::Result<Vec<PathBuf>> {
    let directory = match prefix.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = Vec::new();
    for kind in config.formats.selected() {
        let path = path_with_suffix(prefix, kind.suffix());
        let mut temp = NamedTempFile::new_in(directory).with_context(|| {
            format!("Failed to create temporary file in {}", directory.display())
        })?;

        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            output
                .write(kind, &mut writer, config)
                .with_context(|| format!("Failed to write {kind} output"))?;
            writer.flush()?;
        }

        debug!("Rendered {} output for {}", kind, path.display());
        staged.push((temp, path));
    }

    let mut written = Vec::with_capacity(staged.len());
    for (temp, path) in staged {
        if let Err(err) = temp.persist(&path) {
            remove_outputs(&written);
            return Err(anyhow::Error::new(err)
                .context(format!("Failed to write {}", path.display())));
        }
        info!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}

fn remove_outputs(paths: &[PathBuf]) {
    for path in paths {
        match std::fs::remove_file(path) {
            Ok(()) => debug!("Removed {}", path.display()),
            Err(e) => warn!("Failed to remove {}: {e}", path.display()),
        }
    }
}
