//! Per-sequence composition and motif scanning.

use super::{Params, gc_count};

/// Counts non-overlapping occurrences of `motif` in `seq`.
/// Scanning goes left to right; after a match at position `p`, search continues from `p + motif.len()`.
///
/// Motif must be non-empty.
pub fn count_motif(seq: &[u8], motif: &[u8]) -> u32 {
    let m = motif.len();
    assert!(m > 0, "Cannot count occurrences of an empty motif");
    let first = motif[0];
    let mut count = 0;
    let mut i = 0;
    while i + m <= seq.len() {
        // Skip quickly to the next possible motif start.
        match seq[i..=seq.len() - m].iter().position(|&nt| nt == first) {
            Some(shift) => i += shift,
            None => break,
        }
        if &seq[i..i + m] == motif {
            count += 1;
            i += m;
        } else {
            i += 1;
        }
    }
    count
}

/// Number of GC nucleotides and motif occurrences in a single sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeqSummary {
    pub gc_count: u32,
    pub motif_count: u32,
}

/// Scans the sequence once for base composition and once for the motif.
pub fn analyze(seq: &[u8], params: &Params) -> SeqSummary {
    SeqSummary {
        gc_count: gc_count(seq),
        motif_count: count_motif(seq, &params.motif),
    }
}
