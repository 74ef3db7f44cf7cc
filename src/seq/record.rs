// SPDX-License-Identifier: MIT

// What a single pass over an assembly FASTA file yields: the number of header
// lines seen, and every non-header line concatenated in file order. Individual
// records are not kept apart - the trimmer only ever works on one sequence.

#[derive(Debug)]
pub struct ScanRecord {
    pub scaffolds: usize,
    pub sequence: String,
}
