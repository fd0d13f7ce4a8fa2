//! Walk a few hand-made and random boards and print the verdicts.
//!
//! Run with `RUST_LOG=debug` to see the detector events.

use lazycycle::combinator::CursorExt;
use lazycycle::detect::locate;
use lazycycle::{Board, GridWalk, Multipass, Position, Strategy};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn report(name: &str, walk: &GridWalk) {
    println!("== {name} (start {})", walk.start());
    print!("{}", walk.board());

    let first: Vec<String> = walk
        .positions()
        .cursor()
        .take(8)
        .map(|position| position.to_string())
        .collect_vec();
    println!("first moves: {}", first.join(" -> "));

    for strategy in Strategy::ALL {
        let detection = walk.detect(strategy);
        println!(
            "{strategy:>5}: {} after {} advances, {} comparisons",
            if detection.found() { "cycles" } else { "halts" },
            detection.advances,
            detection.comparisons
        );
    }
    if let Some(span) = locate(&walk.positions(), |a, b| a == b) {
        println!("cycle enters at step {} and repeats every {}", span.start, span.length);
    }
    println!();
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let straight = GridWalk::new(Board::parse(">>>\n>>>\n>>>")?, Position::new(0, 0))?;
    report("straight line", &straight);

    let bounce = GridWalk::new(Board::parse("><\nvv")?, Position::new(0, 0))?;
    report("bounce", &bounce);

    let spiral = GridWalk::new(Board::parse(">>v\n^<v\n^<<")?, Position::new(1, 1))?;
    report("spiral", &spiral);

    let mut rng = StdRng::seed_from_u64(7);
    for round in 0..3 {
        let walk = GridWalk::random(6, &mut rng)?;
        report(&format!("random #{round}"), &walk);
    }

    Ok(())
}
