// SPDX-License-Identifier: MIT

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::{info, warn};

use clap::Parser;

use crate::errors::StretchTrimError;
use crate::seq::fasta::scan_fasta_file;
use crate::trim::{trim_record, TrimReport, DEFAULT_STRETCH};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// Input FASTA file
    #[arg(short = 'i', long = "input")]
    input: String,

    /// Output file (the log line goes to <OUTPUT>.log)
    #[arg(short = 'o', long = "output")]
    output: String,

    /// Sequence name used in the output header and the log
    #[arg(short = 'n', long = "seqname", default_value = "sequence")]
    seqname: String,

    /// Length of the trailing stretch to remove
    #[arg(short = 's', long = "stretch", default_value_t = DEFAULT_STRETCH)]
    stretch: usize,
}

/// Scans `input`, applies the trim policy, and writes the reformatted FASTA
/// to `output` and the summary line to `output`.log, overwriting both. With
/// more than one scaffold a warning is printed to standard output and the
/// sequence goes through untrimmed; that is not an error.
pub fn process_file(
    input: &Path,
    output: &Path,
    seqname: &str,
    stretch: usize,
) -> Result<TrimReport, StretchTrimError> {
    let record = scan_fasta_file(input)?;
    info!(
        "Read {}: {} scaffolds, {} residues",
        input.display(),
        record.scaffolds,
        record.sequence.chars().count()
    );

    let out = trim_record(record, seqname, stretch);
    if out.report.scaffolds > 1 {
        println!(
            "WARNING FOUND {} SCAFFOLDS in {}",
            out.report.scaffolds, seqname
        );
        warn!(
            "{} scaffolds in {}, sequence left untrimmed",
            out.report.scaffolds, seqname
        );
    }

    let mut fasta_out = File::create(output)?;
    fasta_out.write_all(out.fasta.as_bytes())?;
    fasta_out.flush()?;

    let log_path = log_path_for(output);
    let mut log_out = File::create(&log_path)?;
    log_out.write_all(out.log_line.as_bytes())?;
    log_out.flush()?;

    info!("Wrote {} and {}", output.display(), log_path.display());
    Ok(out.report)
}

// The log path appends ".log" to the full output name, extension included
// (out.fa -> out.fa.log).
fn log_path_for(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_os_string();
    name.push(".log");
    PathBuf::from(name)
}

pub fn run() -> Result<(), StretchTrimError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    let report = process_file(
        Path::new(&cli.input),
        Path::new(&cli.output),
        &cli.seqname,
        cli.stretch,
    )?;
    info!(
        "Done: {} scaffolds, final size {}",
        report.scaffolds, report.seqsize
    );
    Ok(())
}
