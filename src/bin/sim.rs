use broadside::{init_logging, play_automated, Winner};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = match args.get(2) {
        Some(n) => n.parse()?,
        None => 1,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut summaries = Vec::with_capacity(games);
    for _ in 0..games {
        summaries.push(play_automated(&mut rng)?);
    }

    let player_wins = summaries
        .iter()
        .filter(|s| s.winner == Winner::Player)
        .count();
    let total_rounds: usize = summaries.iter().map(|s| s.rounds).sum();
    let average_rounds = if games == 0 {
        0.0
    } else {
        total_rounds as f64 / games as f64
    };

    let result = json!({
        "seed": seed,
        "games": games,
        "player_wins": player_wins,
        "opponent_wins": games - player_wins,
        "average_rounds": average_rounds,
        "results": summaries,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
