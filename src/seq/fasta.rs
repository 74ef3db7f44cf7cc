// SPDX-License-Identifier: MIT

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::seq::record::ScanRecord;

/// Scans FASTA text in a single forward pass: lines whose first character is
/// '>' are counted as scaffolds, every other line is appended to the sequence
/// with trailing whitespace stripped. There is no notion of a malformed line;
/// anything that is not a header is sequence data, empty lines included.
pub fn scan_fasta<R: BufRead>(reader: R) -> Result<ScanRecord, io::Error> {
    let mut scaffolds = 0;
    let mut sequence = String::new();

    for line in reader.lines() {
        let l: String = line?;
        if l.starts_with('>') {
            scaffolds += 1;
        } else {
            sequence.push_str(l.trim_end());
        }
    }
    Ok(ScanRecord {
        scaffolds,
        sequence,
    })
}

pub fn scan_fasta_file<P: AsRef<Path>>(path: P) -> Result<ScanRecord, io::Error> {
    let file = File::open(path)?;
    scan_fasta(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    #[test]
    fn test_scan_single_scaffold() {
        let rec = scan_fasta_file("data/single.fa").expect("Test file not found");
        assert_eq!(rec.scaffolds, 1);
        assert_eq!(
            rec.sequence,
            concat!(
                "GAATTCCTGCAGGCATGCAAGCTTGGCACTGGCCGTCGTTTTACAACGTCGTGACTGG",
                "GAAAACCCTGGCGTTACCCAACTTAATCGCCTTGCAGCACATCCCCCTTTCGCCAGCT",
                "GGCGTAATAGCGAAGAGG"
            )
        );
    }

    #[test]
    fn test_scan_multi_scaffold() {
        let rec = scan_fasta_file("data/multi.fa").expect("Test file not found");
        assert_eq!(rec.scaffolds, 3);
        assert_eq!(rec.sequence, "TTGCCGCGATTCCCGGCGATTACCGCAA");
    }

    #[test]
    fn test_scan_short() {
        let rec = scan_fasta_file("data/short.fa").expect("Test file not found");
        assert_eq!(rec.scaffolds, 1);
        assert_eq!(rec.sequence, "ACGTACGT");
    }

    #[test]
    fn test_headers_only_count() {
        let rec = scan_fasta(Cursor::new(">a\n>b\n")).unwrap();
        assert_eq!(rec.scaffolds, 2);
        assert_eq!(rec.sequence, "");
    }

    #[test]
    fn test_trailing_whitespace_stripped() {
        let rec = scan_fasta(Cursor::new(">s\nACGT  \nTTGG\t\n")).unwrap();
        assert_eq!(rec.sequence, "ACGTTTGG");
    }

    #[test]
    fn test_blank_lines_are_sequence_data() {
        // ...but blank lines contribute nothing after stripping.
        let rec = scan_fasta(Cursor::new(">s\nAC\n\nGT\n")).unwrap();
        assert_eq!(rec.scaffolds, 1);
        assert_eq!(rec.sequence, "ACGT");
    }

    #[test]
    fn test_empty_input() {
        let rec = scan_fasta(Cursor::new("")).unwrap();
        assert_eq!(rec.scaffolds, 0);
        assert_eq!(rec.sequence, "");
    }
}
