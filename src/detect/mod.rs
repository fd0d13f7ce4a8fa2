//! Constant-space cycle detection
//!
//! Two strategies decide whether a sequence ever repeats a value:
//!
//! - **Floyd** (tortoise and hare): two cursors at different speeds over a
//!   [`Multipass`] sequence.
//! - **Brent** (teleporting turtle): one cursor and a doubling leash, so any
//!   [`Cursor`] will do.
//!
//! Both keep O(1) values in memory regardless of sequence or cycle length.
//! Values are compared through an injected equality predicate. A predicate
//! that disagrees with real domain equality silently yields wrong verdicts.
//!
//! Detection assumes each value determines its successor (a position on a
//! fixed board, an iterated function). Under that assumption one repeated
//! value implies the sequence cycles forever from there.
//!
//! State machine: `Scanning -> Found` on a match, `Scanning -> Exhausted` when
//! the source completes first. Both end states are terminal.

mod brent;
mod floyd;
mod locate;

pub use brent::brent;
pub use floyd::floyd;
pub use locate::{locate, CycleSpan};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::sequence::{AnySequence, Capability, Cursor, Multipass, Step};

/// Cycle detection algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum Strategy {
    /// Tortoise and hare; needs a multipass sequence
    Floyd,

    /// Teleporting turtle; needs only a single cursor
    #[default]
    Brent,
}

impl Strategy {
    /// Every strategy, in a fixed order
    pub const ALL: [Strategy; 2] = [Strategy::Floyd, Strategy::Brent];

    /// Capability the strategy needs from its input
    pub fn requires(&self) -> Capability {
        match self {
            Strategy::Floyd => Capability::Multipass,
            Strategy::Brent => Capability::SinglePass,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Floyd => f.write_str("floyd"),
            Strategy::Brent => f.write_str("brent"),
        }
    }
}

impl FromStr for Strategy {
    type Err = DetectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "floyd" => Ok(Strategy::Floyd),
            "brent" => Ok(Strategy::Brent),
            other => Err(DetectError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Errors raised by the configurable detector
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectError {
    /// A strategy was handed a sequence lacking the capability it needs
    #[error("{strategy} detection requires a multipass sequence, got a {capability} one")]
    RequiresMultipass {
        /// Strategy that was requested
        strategy: Strategy,
        /// Capability the sequence actually has
        capability: Capability,
    },

    /// The configured advance budget ran out before a verdict
    #[error("no verdict after {advances} advances (limit {limit})")]
    AdvanceLimit {
        /// Configured limit
        limit: usize,
        /// Advances performed
        advances: usize,
    },

    /// Strategy name could not be parsed
    #[error("unknown strategy '{0}' (expected 'floyd' or 'brent')")]
    UnknownStrategy(String),
}

/// Detector state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum DetectorState {
    /// No verdict yet
    Scanning,

    /// Two positions of the sequence compared equal
    Found,

    /// The sequence completed without a match
    Exhausted,
}

impl DetectorState {
    /// Whether this is an end state
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DetectorState::Scanning)
    }
}

/// Outcome and cost of one detection run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Detection {
    /// Final state (`Scanning` only when an advance limit interrupted the run)
    pub state: DetectorState,

    /// Total cursor advances across all cursors
    pub advances: usize,

    /// Predicate invocations
    pub comparisons: usize,

    /// Cycle length, when the strategy measures it (Brent)
    pub cycle_length: Option<usize>,
}

impl Detection {
    /// Whether a cycle was found
    pub fn found(&self) -> bool {
        self.state == DetectorState::Found
    }
}

/// Bookkeeping shared by both strategies
///
/// Pulls values through an optional advance budget and tracks the state
/// machine. Once the budget is spent `pull` yields nothing and the state stays
/// `Scanning`.
#[derive(Debug)]
pub(crate) struct Scan {
    state: DetectorState,
    advances: usize,
    comparisons: usize,
    cycle_length: Option<usize>,
    limit: Option<usize>,
}

impl Scan {
    pub(crate) fn new(limit: Option<usize>) -> Self {
        Self {
            state: DetectorState::Scanning,
            advances: 0,
            comparisons: 0,
            cycle_length: None,
            limit,
        }
    }

    /// Advance `cursor` once, or return `None` on completion or budget exhaustion
    pub(crate) fn pull<C: Cursor>(&mut self, cursor: &mut C) -> Option<C::Item> {
        if self.limit.is_some_and(|limit| self.advances >= limit) {
            return None;
        }
        self.advances += 1;
        match cursor.advance() {
            Step::Yielded(value) => Some(value),
            Step::Done => {
                self.state = DetectorState::Exhausted;
                None
            }
        }
    }

    /// Compare two values, moving to `Found` on a match
    pub(crate) fn compare<T, E>(&mut self, equals: &mut E, a: &T, b: &T) -> bool
    where
        E: FnMut(&T, &T) -> bool,
    {
        self.comparisons += 1;
        let matched = equals(a, b);
        if matched {
            self.state = DetectorState::Found;
        }
        matched
    }

    pub(crate) fn set_cycle_length(&mut self, length: usize) {
        self.cycle_length = Some(length);
    }

    pub(crate) fn finish(self) -> Detection {
        Detection {
            state: self.state,
            advances: self.advances,
            comparisons: self.comparisons,
            cycle_length: self.cycle_length,
        }
    }
}

/// Detector configuration
#[derive(Debug, Clone, Default)]
pub struct DetectorConfig {
    /// Strategy to run
    pub strategy: Strategy,

    /// Stop with an error after this many advances (default: unlimited)
    pub advance_limit: Option<usize>,
}

impl DetectorConfig {
    /// Configuration for a given strategy, without a limit
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            advance_limit: None,
        }
    }

    /// Set the strategy
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Bound the number of advances
    pub fn with_advance_limit(mut self, limit: usize) -> Self {
        self.advance_limit = Some(limit);
        self
    }
}

/// Configurable cycle detector
///
/// Dispatches to the configured strategy and turns an interrupted scan into
/// [`DetectError::AdvanceLimit`] instead of running forever on an infinite
/// aperiodic sequence.
#[derive(Debug, Clone, Default)]
pub struct CycleDetector {
    config: DetectorConfig,
}

impl CycleDetector {
    /// Create a detector
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Run on a multipass sequence; every strategy applies
    pub fn run_multipass<M, E>(&self, sequence: &M, equals: E) -> Result<Detection, DetectError>
    where
        M: Multipass + ?Sized,
        E: FnMut(&M::Item, &M::Item) -> bool,
    {
        let detection = match self.config.strategy {
            Strategy::Floyd => floyd::run(sequence, equals, self.config.advance_limit),
            Strategy::Brent => brent::run(sequence.cursor(), equals, self.config.advance_limit),
        };
        self.verdict(detection)
    }

    /// Run on a single-pass sequence; Floyd is rejected
    pub fn run_single_pass<C, E>(&self, cursor: C, equals: E) -> Result<Detection, DetectError>
    where
        C: Cursor,
        E: FnMut(&C::Item, &C::Item) -> bool,
    {
        match self.config.strategy {
            Strategy::Floyd => Err(DetectError::RequiresMultipass {
                strategy: Strategy::Floyd,
                capability: Capability::SinglePass,
            }),
            Strategy::Brent => {
                let detection = brent::run(cursor, equals, self.config.advance_limit);
                self.verdict(detection)
            }
        }
    }

    /// Run on a runtime-tagged sequence
    pub fn run<'a, T: 'a, E>(
        &self,
        sequence: &mut AnySequence<'a, T>,
        equals: E,
    ) -> Result<Detection, DetectError>
    where
        E: FnMut(&T, &T) -> bool,
    {
        if let Some(replay) = sequence.as_multipass() {
            return self.run_multipass(&replay, equals);
        }
        self.run_single_pass(sequence.cursor(), equals)
    }

    fn verdict(&self, detection: Detection) -> Result<Detection, DetectError> {
        debug!(
            strategy = %self.config.strategy,
            state = ?detection.state,
            advances = detection.advances,
            comparisons = detection.comparisons,
            "detection finished"
        );
        match (detection.state, self.config.advance_limit) {
            (DetectorState::Scanning, Some(limit)) => Err(DetectError::AdvanceLimit {
                limit,
                advances: detection.advances,
            }),
            _ => Ok(detection),
        }
    }
}

/// Decide whether `sequence` ever repeats a value under `equals`
///
/// Floyd over a single-pass sequence is rejected with
/// [`DetectError::RequiresMultipass`]. Diverges on an infinite sequence that
/// never repeats; use [`CycleDetector`] with an advance limit to bound it.
pub fn detect_cycle<'a, T: 'a, E>(
    sequence: &mut AnySequence<'a, T>,
    equals: E,
    strategy: Strategy,
) -> Result<bool, DetectError>
where
    E: FnMut(&T, &T) -> bool,
{
    CycleDetector::new(DetectorConfig::new(strategy))
        .run(sequence, equals)
        .map(|detection| detection.found())
}

/// [`detect_cycle`] with `PartialEq` as the equality predicate
pub fn detect_cycle_eq<'a, T: PartialEq + 'a>(
    sequence: &mut AnySequence<'a, T>,
    strategy: Strategy,
) -> Result<bool, DetectError> {
    detect_cycle(sequence, |a, b| a == b, strategy)
}
