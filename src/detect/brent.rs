//! Brent's teleporting turtle
//!
//! One cursor, one remembered checkpoint. The cursor walks up to `leash`
//! steps away from the checkpoint, comparing each value with it; if nothing
//! matches, the checkpoint teleports to the cursor and the leash doubles.
//! Once the leash is at least λ and the checkpoint sits inside the cycle, the
//! walk meets the checkpoint again after exactly λ steps, so the distance at
//! the match is the cycle length.

use tracing::trace;

use super::{Detection, Scan};
use crate::sequence::Cursor;

/// Detect a repeated value using a single cursor
///
/// Pass `&mut cursor` to keep the cursor afterwards. On `Found`, the
/// detection carries the cycle length. Diverges on an infinite sequence that
/// never repeats.
pub fn brent<C, E>(cursor: C, equals: E) -> Detection
where
    C: Cursor,
    E: FnMut(&C::Item, &C::Item) -> bool,
{
    run(cursor, equals, None)
}

pub(super) fn run<C, E>(mut cursor: C, mut equals: E, limit: Option<usize>) -> Detection
where
    C: Cursor,
    E: FnMut(&C::Item, &C::Item) -> bool,
{
    let mut scan = Scan::new(limit);
    let Some(mut checkpoint) = scan.pull(&mut cursor) else {
        return scan.finish();
    };

    let mut leash = 1usize;
    loop {
        let mut distance = 0;
        while distance < leash {
            let Some(value) = scan.pull(&mut cursor) else {
                return scan.finish();
            };
            distance += 1;
            if scan.compare(&mut equals, &checkpoint, &value) {
                trace!(leash, distance, "turtle met checkpoint");
                scan.set_cycle_length(distance);
                return scan.finish();
            }
            if distance == leash {
                checkpoint = value;
            }
        }
        leash = leash.saturating_mul(2);
        trace!(leash, "checkpoint teleported");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::DetectorState;
    use crate::sequence::{from_iter, successors, Multipass, Step};

    #[test]
    fn test_acyclic_list() {
        let detection = brent(from_iter(1..=5), |a, b| a == b);
        assert_eq!(detection.state, DetectorState::Exhausted);
        assert_eq!(detection.cycle_length, None);
    }

    #[test]
    fn test_measures_cycle_length() {
        for period in [1u32, 2, 3, 7, 64, 65, 1000] {
            // tail of 5, then a cycle of `period`
            let seq = successors(Some(0u32), move |n| {
                Some(if *n == 4 + period { 5 } else { n + 1 })
            });
            let detection = brent(seq.cursor(), |a, b| a == b);
            assert!(detection.found(), "period {period}");
            assert_eq!(detection.cycle_length, Some(period as usize));
        }
    }

    #[test]
    fn test_borrowed_cursor_keeps_position() {
        let mut cursor = from_iter(vec![1, 2, 3, 4, 4, 9]);
        let detection = brent(&mut cursor, |a, b| a == b);
        assert!(detection.found());
        // the match consumed the second 4; the rest is still there
        assert_eq!(cursor.advance(), Step::Yielded(9));
    }
}
