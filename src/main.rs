//! Word Ladder - CLI
//!
//! Console word ladder game plus solver, suggestion, graph and benchmark tools.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use log::{LevelFilter, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use word_ladder::{
    commands::{
        graph_for_pair, inspect_word, run_benchmark, run_play, solve_pair, suggest_pairs,
    },
    core::{Difficulty, Word, WordIndex},
    game::GameSession,
    output::{
        print_benchmark_result, print_graph, print_neighbor_report, print_solve_result,
        print_suggestions,
    },
    solver::Algorithm,
    wordlists::{default_index, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Word ladder game and solver using A*, greedy and uniform-cost search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line (default: embedded list)
    #[arg(short, long, global = true)]
    dict: Option<PathBuf>,

    /// Seed for reproducible suggestions and banned words
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the console (default)
    Play {
        #[arg(short = 'D', long, value_enum, default_value_t)]
        difficulty: Difficulty,

        /// Start word (suggested if omitted)
        #[arg(requires = "target")]
        start: Option<String>,

        /// Target word
        target: Option<String>,
    },

    /// Suggest start/target pairs for a difficulty
    Suggest {
        #[arg(short = 'D', long, value_enum, default_value_t)]
        difficulty: Difficulty,

        #[arg(short = 'n', long, default_value = "5")]
        count: usize,
    },

    /// Find ladders between two words
    Solve {
        start: String,
        target: String,

        /// Run one algorithm instead of all three
        #[arg(short, long, value_enum)]
        algorithm: Option<Algorithm>,
    },

    /// List a word's one-letter neighbors
    Neighbors { word: String },

    /// Print graph data around the ladders between two words
    Graph { start: String, target: String },

    /// Compare the algorithms on suggested pairs
    Benchmark {
        #[arg(short = 'D', long, value_enum, default_value_t)]
        difficulty: Difficulty,

        /// Number of pairs to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env().init();
}

fn load_index(dict: Option<&Path>) -> Result<WordIndex> {
    let index = match dict {
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to read dictionary {}", path.display()))?;
            WordIndex::from_words(words)?
        }
        None => default_index()?,
    };
    info!("Dictionary ready with {} words", index.len());
    Ok(index)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let index = load_index(cli.dict.as_deref())?;
    let mut rng = make_rng(cli.seed);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        difficulty: Difficulty::default(),
        start: None,
        target: None,
    });

    match command {
        Commands::Play {
            difficulty,
            start,
            target,
        } => {
            let mut session = GameSession::with_rng(index, rng);
            run_play(&mut session, difficulty, start.zip(target)).map_err(|e| anyhow!(e))
        }
        Commands::Suggest { difficulty, count } => {
            let pairs = suggest_pairs(&index, difficulty, count, &mut rng);
            print_suggestions(difficulty, &pairs);
            Ok(())
        }
        Commands::Solve {
            start,
            target,
            algorithm,
        } => {
            let result = solve_pair(&index, &start, &target, algorithm)?;
            print_solve_result(&result);
            Ok(())
        }
        Commands::Neighbors { word } => {
            let report = inspect_word(&index, &word)?;
            print_neighbor_report(&report);
            Ok(())
        }
        Commands::Graph { start, target } => {
            let graph = graph_for_pair(&index, &start, &target)?;
            print_graph(&graph);
            Ok(())
        }
        Commands::Benchmark { difficulty, count } => {
            run_benchmark_command(&index, difficulty, count, &mut rng);
            Ok(())
        }
    }
}

fn run_benchmark_command(index: &WordIndex, difficulty: Difficulty, count: usize, rng: &mut StdRng) {
    println!("Suggesting {count} {difficulty} pairs...");
    let pairs: Vec<(Word, Word)> = suggest_pairs(index, difficulty, count, rng)
        .into_iter()
        .map(|pair| (pair.start, pair.target))
        .collect();
    if pairs.len() < count {
        println!("Only {} pairs could be suggested", pairs.len());
    }

    let result = run_benchmark(index, &pairs, true);
    print_benchmark_result(&result);
}
