//! Synthesizing and analyzing many sequences, aggregating the results.

use std::{
    cmp::max,
    fmt,
    time::Instant,
};
use crate::{
    err::{Error, validate_param},
    algo::comma::CommaWrite,
    ext::{self, rand::Lcg},
    seq::{self, Params, SeqSummary},
};

/// Reference number of sequences.
pub const SEQUENCE_COUNT: u32 = 100_000;
/// Reference sequence length.
pub const SEQUENCE_LENGTH: u32 = 1000;
/// Initial generator state.
pub const SEED: u32 = 0;

/// Running sums over all processed sequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunTotals {
    total_gc: u64,
    total_motif: u64,
    count: u64,
    length: u32,
}

impl RunTotals {
    /// Creates empty totals for sequences of length `length`.
    pub fn new(length: u32) -> Self {
        Self {
            total_gc: 0,
            total_motif: 0,
            count: 0,
            length,
        }
    }

    /// Adds summary of one more sequence.
    pub fn add(&mut self, summary: SeqSummary) {
        debug_assert!(summary.gc_count <= self.length, "GC count {} exceeds sequence length {}",
            summary.gc_count, self.length);
        self.total_gc += u64::from(summary.gc_count);
        self.total_motif += u64::from(summary.motif_count);
        self.count += 1;
        debug_assert!(self.total_gc <= self.count * u64::from(self.length));
    }

    /// Number of processed sequences.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn total_gc(&self) -> u64 {
        self.total_gc
    }

    pub fn total_motif(&self) -> u64 {
        self.total_motif
    }

    /// Calculates average GC-content and average motif frequency.
    /// Fails if no sequences were processed or if sequences are empty.
    pub fn report(&self, params: &Params) -> Result<Report, Error> {
        validate_param!(self.count > 0, "Cannot calculate averages over zero sequences");
        validate_param!(self.length > 0, "Cannot calculate GC-content of empty sequences");
        Ok(Report {
            count: self.count,
            length: self.length,
            motif: params.motif_str().into_owned(),
            gc_content: self.total_gc as f64 / (self.count as f64 * f64::from(self.length)),
            motif_frequency: self.total_motif as f64 / self.count as f64,
        })
    }
}

/// Final averages of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub count: u64,
    pub length: u32,
    pub motif: String,
    /// Fraction of G/C nucleotides, between 0 and 1.
    pub gc_content: f64,
    /// Average number of motif occurrences per sequence.
    pub motif_frequency: f64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Processed {} sequences of length {}", self.count, self.length)?;
        writeln!(f, "Average GC content: {:.4}", self.gc_content)?;
        writeln!(f, "Average {} frequency: {:.4}", self.motif, self.motif_frequency)
    }
}

/// Runs synthesis and analysis with default alphabet and motif.
pub fn run(count: u32, length: u32) -> Result<Report, Error> {
    run_with(&Params::default(), count, length)
}

/// Synthesizes `count` sequences of length `length`, starting from generator state `SEED`,
/// and averages their GC-content and motif frequency.
pub fn run_with(params: &Params, count: u32, length: u32) -> Result<Report, Error> {
    validate_param!(count > 0, "Sequence count must be positive");
    validate_param!(length > 0, "Sequence length must be positive");
    params.validate()?;

    log::info!("Processing {} sequences of length {}", count.comma_string(), length.comma_string());
    let timer = Instant::now();
    let mut rng = Lcg::new(SEED);
    let mut totals = RunTotals::new(length);
    let mut buf = Vec::with_capacity(length as usize);
    let log_step = max(count / 10, 1);
    for i in 1..=count {
        seq::synth::synthesize_into(&params.alphabet, length, &mut rng, &mut buf);
        totals.add(seq::analyze(&buf, params));
        if i % log_step == 0 {
            log::debug!("    [{:>3}%] {} sequences, {} motif occurrences", 100 * u64::from(i) / u64::from(count),
                i.comma_string(), totals.total_motif().comma_string());
        }
    }
    log::info!("Finished in {}", ext::fmt::Duration(timer.elapsed()));
    totals.report(params)
}
