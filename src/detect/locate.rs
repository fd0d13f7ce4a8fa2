//! Locating the cycle: where it starts and how long it is
//!
//! Brent's run measures λ. Two fresh cursors are then started λ apart and
//! stepped together; the first index at which they agree is μ, the start of
//! the cycle. Memory stays O(1); this needs a multipass sequence.

use tracing::debug;

use super::brent;
use crate::sequence::{Cursor, Multipass, Step};

/// Position and length of a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct CycleSpan {
    /// Index of the first value that belongs to the cycle (μ)
    pub start: usize,

    /// Cycle length (λ)
    pub length: usize,
}

/// Find where `sequence` starts cycling, or `None` if it completes
pub fn locate<M, E>(sequence: &M, mut equals: E) -> Option<CycleSpan>
where
    M: Multipass + ?Sized,
    E: FnMut(&M::Item, &M::Item) -> bool,
{
    let length = brent(sequence.cursor(), &mut equals).cycle_length?;

    let mut trail = sequence.cursor();
    let mut lead = sequence.cursor();
    for _ in 0..length {
        if lead.advance().is_done() {
            return None;
        }
    }

    let mut start = 0;
    loop {
        match (trail.advance(), lead.advance()) {
            (Step::Yielded(a), Step::Yielded(b)) => {
                if equals(&a, &b) {
                    debug!(start, length, "cycle located");
                    return Some(CycleSpan { start, length });
                }
                start += 1;
            }
            _ => return None,
        }
    }
}
