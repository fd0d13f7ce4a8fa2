//! Seeded batches of random walks
//!
//! Every trial builds a board from its own seed, so a report can be
//! reproduced trial by trial. Floyd and Brent answer each walk independently
//! and are cross-checked against the bit-set reference.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use super::GridWalk;
use crate::detect::{CycleDetector, DetectorConfig, Strategy};
use crate::materialize;
use crate::sequence::Multipass;

/// Survey parameters
#[derive(Debug, Clone)]
pub struct SurveyConfig {
    /// Side length of each square board
    pub board_size: usize,

    /// Number of boards to walk
    pub trials: u64,

    /// Seed of the first trial; trial `i` uses `seed + i`
    pub seed: u64,

    /// Advance budget per detection run
    pub advance_limit: Option<usize>,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            trials: 1000,
            seed: 0,
            advance_limit: None,
        }
    }
}

impl SurveyConfig {
    /// Set the board side length
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Set the number of trials
    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    /// Set the first seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Bound each detection run
    pub fn with_advance_limit(mut self, limit: usize) -> Self {
        self.advance_limit = Some(limit);
        self
    }
}

/// Aggregated survey results
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct SurveyReport {
    /// Boards walked
    pub trials: u64,

    /// Walks that left the board
    pub halted: u64,

    /// Walks that loop forever
    pub cycled: u64,

    /// Seeds on which a detector disagreed with the reference
    pub disagreements: Vec<u64>,

    /// Advances spent by Floyd across all trials
    pub floyd_advances: u64,

    /// Advances spent by Brent across all trials
    pub brent_advances: u64,

    /// Most positions visited by a halting walk
    pub longest_halting_walk: usize,
}

impl SurveyReport {
    /// Whether every detector agreed with the reference on every trial
    pub fn consistent(&self) -> bool {
        self.disagreements.is_empty()
    }
}

/// Walk `config.trials` random boards and tally the verdicts
pub fn run_survey(config: &SurveyConfig) -> crate::Result<SurveyReport> {
    let floyd = CycleDetector::new(DetectorConfig {
        strategy: Strategy::Floyd,
        advance_limit: config.advance_limit,
    });
    let brent = CycleDetector::new(DetectorConfig {
        strategy: Strategy::Brent,
        advance_limit: config.advance_limit,
    });

    info!(
        board_size = config.board_size,
        trials = config.trials,
        seed = config.seed,
        "starting survey"
    );

    let mut report = SurveyReport::default();
    for trial in 0..config.trials {
        let seed = config.seed.wrapping_add(trial);
        let mut rng = StdRng::seed_from_u64(seed);
        let walk = GridWalk::random(config.board_size, &mut rng)?;

        let positions = walk.positions();
        let by_floyd = floyd.run_multipass(&positions, |a, b| a == b)?;
        let by_brent = brent.run_single_pass(positions.cursor(), |a, b| a == b)?;
        let halts = walk.halts_reference();

        report.trials += 1;
        report.floyd_advances += by_floyd.advances as u64;
        report.brent_advances += by_brent.advances as u64;

        if by_floyd.found() == halts || by_brent.found() == halts {
            warn!(
                seed,
                floyd = by_floyd.found(),
                brent = by_brent.found(),
                reference_halts = halts,
                "detector disagreement"
            );
            report.disagreements.push(seed);
        }

        if halts {
            report.halted += 1;
            let visited = materialize::count(positions.cursor());
            report.longest_halting_walk = report.longest_halting_walk.max(visited);
        } else {
            report.cycled += 1;
        }
        debug!(seed, halts, fingerprint = %walk.board().fingerprint(), "trial done");
    }

    info!(
        halted = report.halted,
        cycled = report.cycled,
        disagreements = report.disagreements.len(),
        "survey finished"
    );
    Ok(report)
}
