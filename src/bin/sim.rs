use assembly_endgame::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
struct RoundRecord {
    #[serde(flatten)]
    state: GameState,
    status: GameStatus,
    wrong_guesses: usize,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <rounds>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let rounds: usize = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let words = WordList::builtin();
    let mut ai = AiPlayer::new(&words);
    let mut session = Session::new(Box::new(words), Roster::standard(), &mut rng)
        .map_err(|e| anyhow::anyhow!(e))?;

    let mut games = Vec::with_capacity(rounds);
    for round in 0..rounds {
        if round > 0 {
            session.new_game(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
        }
        let status = session
            .play_round(&mut ai, &mut rng)
            .map_err(|e| anyhow::anyhow!(e))?;
        games.push(RoundRecord {
            state: session.engine().state(),
            status,
            wrong_guesses: session.engine().wrong_guess_count(),
        });
    }

    let wins = games.iter().filter(|g| g.status == GameStatus::Won).count();
    let losses = games.iter().filter(|g| g.status == GameStatus::Lost).count();
    let average_wrong = if games.is_empty() {
        0.0
    } else {
        games.iter().map(|g| g.wrong_guesses).sum::<usize>() as f64 / games.len() as f64
    };

    let result = json!({
        "rounds": rounds,
        "wins": wins,
        "losses": losses,
        "average_wrong_guesses": average_wrong,
        "games": games,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
