#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use assembly_endgame::{
    loader::{load_roster, load_word_list},
    prelude::*,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play interactively in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Word list file, one word per line")]
        words: Option<PathBuf>,
        #[arg(long, help = "Roster file, a JSON array of {name, backgroundColor, color}")]
        roster: Option<PathBuf>,
        #[arg(long, help = "Disable ANSI colors")]
        no_color: bool,
        #[arg(long, help = "Do not suggest letters")]
        no_hints: bool,
    },
    /// Let the AI play a number of rounds.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 10)]
        rounds: usize,
        #[arg(long, help = "Word list file, one word per line")]
        words: Option<PathBuf>,
        #[arg(long, help = "Roster file, a JSON array of {name, backgroundColor, color}")]
        roster: Option<PathBuf>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn load_sources(
    words: Option<PathBuf>,
    roster: Option<PathBuf>,
) -> anyhow::Result<(WordList, Roster)> {
    let words = match words {
        Some(path) => load_word_list(&path)?,
        None => WordList::builtin(),
    };
    let roster = match roster {
        Some(path) => load_roster(&path)?,
        None => Roster::standard(),
    };
    Ok((words, roster))
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            words,
            roster,
            no_color,
            no_hints,
        } => {
            let (words, roster) = load_sources(words, roster)?;
            let mut rng = make_rng(seed);
            let mut player = CliPlayer::new(&words)
                .with_color(!no_color)
                .with_hints(!no_hints);
            let mut session = Session::new(Box::new(words), roster, &mut rng)
                .map_err(|e| anyhow::anyhow!(e))?;
            loop {
                let status = session
                    .play_round(&mut player, &mut rng)
                    .map_err(|e| anyhow::anyhow!(e))?;
                if status == GameStatus::Playing {
                    println!("Goodbye!");
                    break;
                }
                if !player.ask_new_game(&session) {
                    break;
                }
                session.new_game(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
            }
        }
        Commands::Auto {
            seed,
            rounds,
            words,
            roster,
        } => {
            let (words, roster) = load_sources(words, roster)?;
            let mut rng = make_rng(seed);
            let mut ai = AiPlayer::new(&words);
            let mut session = Session::new(Box::new(words), roster, &mut rng)
                .map_err(|e| anyhow::anyhow!(e))?;
            let mut wins = 0usize;
            for round in 1..=rounds {
                if round > 1 {
                    session.new_game(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
                }
                let status = session
                    .play_round(&mut ai, &mut rng)
                    .map_err(|e| anyhow::anyhow!(e))?;
                if status == GameStatus::Won {
                    wins += 1;
                }
                let engine = session.engine();
                let guessed: String = engine.guessed_letters().iter().collect();
                println!(
                    "Round {:>3}: {:<5} {:<14} wrong {}/{}  guesses {}",
                    round,
                    format!("{:?}", status),
                    engine.word(),
                    engine.wrong_guess_count(),
                    engine.max_wrong_guesses(),
                    guessed
                );
            }
            println!("Won {} of {} rounds", wins, rounds);
        }
    }
    Ok(())
}
