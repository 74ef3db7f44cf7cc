// SPDX-License-Identifier: MIT

use crate::seq::record::ScanRecord;

pub const DEFAULT_STRETCH: usize = 127;

/// Output FASTA line width, as emitted by most assembly tooling.
pub const WRAP_WIDTH: usize = 60;

#[derive(Debug)]
pub struct TrimReport {
    pub scaffolds: usize,
    pub seqsize: usize,
    pub trimmed: bool,
}

/// Both output artifacts as plain strings; writing them anywhere is the
/// caller's business.
#[derive(Debug)]
pub struct TrimOutput {
    pub fasta: String,
    pub log_line: String,
    pub report: TrimReport,
}

/// Applies the trim policy to a scanned record and formats the two outputs.
///
/// The trailing `stretch` characters are removed only when at most one
/// scaffold was seen; with several scaffolds the sequence is passed through
/// untouched (the caller is expected to warn). A sequence no longer than the
/// stretch trims down to the empty string; that is accepted behavior, not an
/// error.
pub fn trim_record(record: ScanRecord, seqname: &str, stretch: usize) -> TrimOutput {
    let ScanRecord {
        scaffolds,
        mut sequence,
    } = record;

    let trimmed = scaffolds <= 1;
    if trimmed {
        drop_trailing_chars(&mut sequence, stretch);
    }

    let seqsize = sequence.chars().count();
    let fasta = format!(">{},{}\n{}", seqname, seqsize, wrap(&sequence, WRAP_WIDTH));
    let log_line = format!("{}\t{}\t{}\n", seqname, scaffolds, seqsize);

    TrimOutput {
        fasta,
        log_line,
        report: TrimReport {
            scaffolds,
            seqsize,
            trimmed,
        },
    }
}

// Sizes are measured in characters, not bytes, so the cut must land on a char
// boundary.
fn drop_trailing_chars(sequence: &mut String, n: usize) {
    let total = sequence.chars().count();
    let keep = total.saturating_sub(n);
    if keep == 0 {
        sequence.clear();
    } else if let Some((cut, _)) = sequence.char_indices().nth(keep) {
        sequence.truncate(cut);
    }
}

/// Greedy fixed-width wrapping: a newline before every `width`-th character,
/// no word-boundary awareness (this is a residue string, not prose), and no
/// trailing newline.
pub fn wrap(seq: &str, width: usize) -> String {
    let width = width.max(1);
    let mut out = String::with_capacity(seq.len() + seq.len() / width);
    for (i, c) in seq.chars().enumerate() {
        if i > 0 && i % width == 0 {
            out.push('\n');
        }
        out.push(c);
    }
    out
}
