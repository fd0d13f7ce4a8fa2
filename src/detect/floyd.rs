//! Floyd's tortoise and hare
//!
//! Stepping convention: tortoise and hare both start by reading x0. Each
//! round the hare takes two single steps and is compared with the tortoise
//! after each of them; then the tortoise takes one step. Round `i` therefore
//! compares x_{i-1} with x_{2i-1} and with x_{2i}. Indices never coincide, and
//! for a cycle of length λ entered at μ some round compares two indices that
//! are both at least μ and a multiple of λ apart.

use tracing::trace;

use super::{Detection, Scan};
use crate::sequence::Multipass;

/// Detect a repeated value with two independent cursors over `sequence`
///
/// Returns `Found` on the first match and `Exhausted` once the hare completes.
/// Diverges on an infinite sequence that never repeats.
pub fn floyd<M, E>(sequence: &M, equals: E) -> Detection
where
    M: Multipass + ?Sized,
    E: FnMut(&M::Item, &M::Item) -> bool,
{
    run(sequence, equals, None)
}

pub(super) fn run<M, E>(sequence: &M, mut equals: E, limit: Option<usize>) -> Detection
where
    M: Multipass + ?Sized,
    E: FnMut(&M::Item, &M::Item) -> bool,
{
    let mut scan = Scan::new(limit);
    let mut tortoise = sequence.cursor();
    let mut hare = sequence.cursor();

    let Some(mut slow) = scan.pull(&mut tortoise) else {
        return scan.finish();
    };
    // Hare starts level with the tortoise at x0
    if scan.pull(&mut hare).is_none() {
        return scan.finish();
    }

    let mut round = 0usize;
    loop {
        round += 1;
        for _ in 0..2 {
            let Some(fast) = scan.pull(&mut hare) else {
                trace!(round, "hare completed");
                return scan.finish();
            };
            if scan.compare(&mut equals, &slow, &fast) {
                trace!(round, "hare met tortoise");
                return scan.finish();
            }
        }
        match scan.pull(&mut tortoise) {
            Some(value) => slow = value,
            None => return scan.finish(),
        }
    }
}
