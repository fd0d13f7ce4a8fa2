//! # Lazy sequences with constant-space cycle detection
//!
//! Pull-based sequences, combinators over them, and two O(1)-memory cycle
//! detectors, validated on arrow-grid walks.
//!
//! ## Core Pieces
//!
//! 1. **Sequences**: a [`Cursor`] yields one value per `advance`; a
//!    [`Multipass`] sequence hands out independent cursors replaying from the
//!    origin, a single-pass one *is* its cursor
//! 2. **Combinators**: `map`, `filter`, `take`, `drop_first`, `until`,
//!    `stateful_map`, `zip`; wrapping never changes capability
//! 3. **Materializer**: [`collect`] drains a bounded sequence
//! 4. **Cycle detection**: Floyd (needs multipass) and Brent (any cursor)
//! 5. **Grid walks**: halting of a token walk on an arrow board
//!
//! ## Usage Example
//!
//! ```
//! use lazycycle::{detect_cycle_eq, AnySequence, Strategy};
//! use lazycycle::sequence::{from_iter, from_vec};
//!
//! let mut finite = AnySequence::multipass(from_vec(vec![1, 2, 3, 4, 5]));
//! assert_eq!(detect_cycle_eq(&mut finite, Strategy::Floyd), Ok(false));
//!
//! let mut bounce = AnySequence::single_pass(from_iter([0u8, 1, 0, 1, 0, 1]));
//! assert_eq!(detect_cycle_eq(&mut bounce, Strategy::Brent), Ok(true));
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod combinator; // Lazy combinators and extension traits
pub mod detect; // Floyd, Brent, cycle location
pub mod grid; // Arrow-grid walk harness
pub mod materialize; // Eager collection
pub mod sequence; // Cursor / Multipass protocol and sources

// Re-exports for convenience
pub use combinator::{CursorExt, MultipassExt};
pub use detect::{
    brent, detect_cycle, detect_cycle_eq, floyd, locate, CycleDetector, CycleSpan, DetectError,
    Detection, DetectorConfig, DetectorState, Strategy,
};
pub use grid::{Board, Direction, GridError, GridWalk, Position};
pub use materialize::collect;
pub use sequence::{AnySequence, Capability, Cursor, Multipass, SinglePass, Step};

use thiserror::Error;

/// Crate-level error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Board or walk construction failed
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Cycle detection could not reach a verdict
    #[error(transparent)]
    Detect(#[from] DetectError),
}

/// Result type for crate operations
pub type Result<T> = std::result::Result<T, Error>;
