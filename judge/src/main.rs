use std::path::PathBuf;

use clap::Parser;
use judge::{play_game, RandomStrategy, Recorder, Strategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Names of the four players, in seating order
    #[arg(
        long,
        num_args(4),
        value_delimiter = ' ',
        default_values_t = ["North".to_string(), "East".to_string(), "South".to_string(), "West".to_string()]
    )]
    names: Vec<String>,

    /// How many games to play
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// First team to reach this many points wins a game
    #[arg(short, long, default_value_t = euchre::WINNING_SCORE)]
    points_to_win: u32,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Record each game's round summaries as a JSON file into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    // One independently seeded strategy per seat
    let mut strategies: [Box<dyn Strategy>; 4] = [
        Box::new(RandomStrategy {
            rng: StdRng::seed_from_u64(rng.gen()),
        }),
        Box::new(RandomStrategy {
            rng: StdRng::seed_from_u64(rng.gen()),
        }),
        Box::new(RandomStrategy {
            rng: StdRng::seed_from_u64(rng.gen()),
        }),
        Box::new(RandomStrategy {
            rng: StdRng::seed_from_u64(rng.gen()),
        }),
    ];

    let mut wins = [0usize; 2];
    for game_idx in 0..args.num_games {
        let result = play_game(
            &mut rng,
            args.names.clone(),
            &mut strategies,
            &mut recorder,
            args.points_to_win,
        )?;
        wins[result.winning_team.index()] += 1;
        info!(
            game_idx,
            winner = %result.winning_team,
            rounds = result.rounds_played,
            score = ?result.final_score,
            "game finished"
        );
    }

    eprintln!(
        "End result over {} games:\n- {} wins by {} & {}\n- {} wins by {} & {}",
        args.num_games, wins[0], args.names[0], args.names[2], wins[1], args.names[1], args.names[3]
    );

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
