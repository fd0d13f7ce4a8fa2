use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lazycycle::combinator::CursorExt;
use lazycycle::detect::locate;
use lazycycle::grid::{run_survey, SurveyConfig};
use lazycycle::{Board, GridWalk, Multipass, Position, Strategy};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lazycycle", about = "Constant-space cycle detection on arrow-grid walks")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Walk one board and report whether the token escapes.
    Walk {
        /// Side length of a random board.
        #[arg(long, default_value_t = 8)]
        size: usize,
        /// Seed for the random board and start.
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Load the board from a text file instead (one row of `^>v<` per line).
        #[arg(long)]
        board: Option<PathBuf>,
        /// Start position as `x,y` (required with --board).
        #[arg(long)]
        start: Option<Position>,
        /// Run only this strategy (default: both).
        #[arg(long)]
        strategy: Option<Strategy>,
        /// Print at most this many positions.
        #[arg(long, default_value_t = 16)]
        show: usize,
    },
    /// Walk many seeded random boards and cross-check the detectors.
    Survey {
        /// Side length of each board.
        #[arg(long, default_value_t = 8)]
        size: usize,
        /// Number of boards.
        #[arg(long, default_value_t = 1000)]
        trials: u64,
        /// Seed of the first board.
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Advance budget per detection run.
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Walk {
            size,
            seed,
            board,
            start,
            strategy,
            show,
        } => run_walk(size, seed, board, start, strategy, show)?,
        Commands::Survey {
            size,
            trials,
            seed,
            limit,
        } => {
            let mut config = SurveyConfig::default()
                .with_board_size(size)
                .with_trials(trials)
                .with_seed(seed);
            config.advance_limit = limit;
            run_survey_command(&config)?
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_walk(
    size: usize,
    seed: u64,
    board_path: Option<PathBuf>,
    start: Option<Position>,
    strategy: Option<Strategy>,
    show: usize,
) -> Result<()> {
    let walk = match board_path {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("failed to read board from {}", path.display()))?;
            let board: Board = text
                .parse()
                .with_context(|| format!("failed to parse board in {}", path.display()))?;
            let start = start.context("--start is required with --board")?;
            GridWalk::new(board, start).context("invalid start position")?
        }
        None => {
            let mut rng = StdRng::seed_from_u64(seed);
            let walk = GridWalk::random(size, &mut rng).context("failed to build random board")?;
            match start {
                Some(start) => GridWalk::new(walk.board().clone(), start)
                    .context("invalid start position")?,
                None => walk,
            }
        }
    };

    print!("{}", walk.board());
    println!("fingerprint\t{}", walk.board().fingerprint());
    println!("start\t{}", walk.start());

    let shown: Vec<String> = walk
        .positions()
        .cursor()
        .take(show)
        .map(|position| position.to_string())
        .collect_vec();
    println!("positions\t{}", shown.join(" "));

    let strategies = match strategy {
        Some(strategy) => vec![strategy],
        None => Strategy::ALL.to_vec(),
    };
    for strategy in strategies {
        let detection = walk.detect(strategy);
        println!(
            "{}\t{}\tadvances={}\tcomparisons={}",
            strategy,
            if detection.found() { "cycles" } else { "halts" },
            detection.advances,
            detection.comparisons
        );
    }

    if let Some(span) = locate(&walk.positions(), |a, b| a == b) {
        println!("cycle\tstart={}\tlength={}", span.start, span.length);
    }

    Ok(())
}

fn run_survey_command(config: &SurveyConfig) -> Result<()> {
    let report = run_survey(config).context("survey failed")?;

    println!("trials\t{}", report.trials);
    println!("halted\t{}", report.halted);
    println!("cycled\t{}", report.cycled);
    println!("floyd_advances\t{}", report.floyd_advances);
    println!("brent_advances\t{}", report.brent_advances);
    println!("longest_halting_walk\t{}", report.longest_halting_walk);

    if !report.consistent() {
        anyhow::bail!(
            "detectors disagreed with the reference on seeds {:?}",
            report.disagreements
        );
    }
    println!("consistent\ttrue");
    Ok(())
}
