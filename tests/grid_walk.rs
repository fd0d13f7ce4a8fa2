use std::collections::HashSet;

use blake3::hash;
use proptest::prelude::*;
use lazycycle::grid::{run_survey, SurveyConfig};
use lazycycle::materialize::count;
use lazycycle::{GridWalk, Multipass, Strategy};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn walk_for(size: usize, seed: u64) -> GridWalk {
    let mut rng = StdRng::seed_from_u64(seed);
    GridWalk::random(size, &mut rng).expect("non-empty board")
}

proptest! {
    #[test]
    fn floyd_and_brent_agree(size in 1usize..12, seed in any::<u64>()) {
        let walk = walk_for(size, seed);
        let floyd = walk.halts(Strategy::Floyd);
        let brent = walk.halts(Strategy::Brent);
        prop_assert_eq!(floyd, brent, "seed {}", seed);
        prop_assert_eq!(floyd, walk.halts_reference(), "seed {}", seed);
    }

    #[test]
    fn halting_walks_respect_pigeonhole_bound(size in 1usize..12, seed in any::<u64>()) {
        let walk = walk_for(size, seed);
        if walk.halts(Strategy::Brent) {
            let visited = count(walk.positions().cursor());
            prop_assert!(visited <= size * size, "{} positions on a {}x{} board", visited, size, size);
        }
    }

    #[test]
    fn brent_cycle_length_fits_on_board(size in 1usize..12, seed in any::<u64>()) {
        let walk = walk_for(size, seed);
        let detection = walk.detect(Strategy::Brent);
        if let Some(length) = detection.cycle_length {
            prop_assert!(length >= 2, "a token never stays put");
            prop_assert!(length <= size * size);
        }
    }
}

#[test]
fn random_boards_are_reproducible() {
    let mut fingerprints = HashSet::new();
    for _ in 0..5 {
        let walk = walk_for(10, 99);
        let rendered = format!("{}{}", walk.board(), walk.start());
        fingerprints.insert(hash(rendered.as_bytes()));
        assert_eq!(walk.board().fingerprint(), walk_for(10, 99).board().fingerprint());
    }
    assert_eq!(fingerprints.len(), 1, "boards diverged across runs");
}

#[test]
fn survey_reports_match_across_runs() {
    let config = SurveyConfig::default().with_board_size(6).with_trials(300).with_seed(2024);
    let first = run_survey(&config).expect("survey runs");
    let second = run_survey(&config).expect("survey runs");
    assert_eq!(first, second);
    assert!(first.consistent());
    assert!(first.halted > 0 && first.cycled > 0);
}
