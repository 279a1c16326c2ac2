//! Monty Hall Binary
//!
//! Plays a batch of rounds and reports how often staying and switching win.
//!
//! Options: --rounds, --seed, --json, --quiet

use clap::Parser;
use colored::Colorize;
use montyhall::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser)]
#[command(author, version, about = "Estimate Monty Hall win rates by simulation", long_about = None)]
struct Args {
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_ROUNDS as u64,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Rounds to play"
    )]
    rounds: u64,
    #[arg(short, long, help = "Seed for a reproducible run")]
    seed: Option<u64>,
    #[arg(long, help = "Print the summary as JSON")]
    json: bool,
    #[arg(short, long, help = "Only log warnings")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(match args.quiet {
        true => ::log::LevelFilter::Warn,
        false => ::log::LevelFilter::Info,
    })?;
    let seed = args.seed.unwrap_or_else(rand::random);
    ::log::info!("seeding with {}", seed);
    let rounds = usize::try_from(args.rounds)?;
    let ref mut rng = SmallRng::seed_from_u64(seed);
    let summary = batch::simulate(rng, rounds)?.summary();
    match args.json {
        true => println!("{}", serde_json::to_string_pretty(&report(&summary, rounds, seed))?),
        false => println!("{}", highlight(&summary)),
    }
    Ok(())
}

fn report(summary: &Summary, rounds: usize, seed: u64) -> serde_json::Value {
    let proportions = Strategy::all()
        .iter()
        .map(|s| {
            let row = Outcome::all()
                .iter()
                .map(|o| (o.to_string(), serde_json::json!(hundredths(summary.rate(*s, *o)))))
                .collect::<serde_json::Map<_, _>>();
            (s.to_string(), serde_json::Value::Object(row))
        })
        .collect::<serde_json::Map<_, _>>();
    serde_json::json!({
        "rounds": rounds,
        "seed": seed,
        "counts": summary,
        "proportions": proportions,
    })
}

/// json numbers are f64, so round there or the f32 error resurfaces
fn hundredths(p: Probability) -> f64 {
    let scale = 10f64.powi(PRECISION);
    (p as f64 * scale).round() / scale
}

/// table with the stronger strategy's row in green
fn highlight(summary: &Summary) -> String {
    let best = Strategy::all()
        .iter()
        .copied()
        .max_by(|a, b| {
            summary
                .rate(*a, Outcome::Win)
                .total_cmp(&summary.rate(*b, Outcome::Win))
        })
        .unwrap_or(Strategy::Switch)
        .to_string();
    summary
        .to_string()
        .lines()
        .map(|line| match line.split_whitespace().next() {
            Some(head) if head == best => line.green().bold().to_string(),
            _ => line.to_string(),
        })
        .collect::<Vec<String>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(stay: (usize, usize), switch: (usize, usize)) -> Summary {
        Summary {
            stay: Tally {
                lose: stay.0,
                win: stay.1,
            },
            switch: Tally {
                lose: switch.0,
                win: switch.1,
            },
        }
    }

    #[test]
    fn json_proportions_have_two_places() {
        let json = report(&tally((71, 29), (29, 71)), 100, 1);
        assert!(json["proportions"]["stay"]["win"] == serde_json::json!(0.29));
        assert!(json["proportions"]["stay"]["lose"] == serde_json::json!(0.71));
        assert!(json["proportions"]["switch"]["win"] == serde_json::json!(0.71));
        assert!(json["counts"]["switch"]["win"] == serde_json::json!(71));
        assert!(json["rounds"] == serde_json::json!(100));
    }

    #[test]
    fn json_rounds_thirds() {
        let json = report(&tally((2, 1), (1, 2)), 3, 0);
        assert!(json["proportions"]["stay"]["win"] == serde_json::json!(0.33));
        assert!(json["proportions"]["switch"]["win"] == serde_json::json!(0.67));
    }

    #[test]
    fn rejects_zero_rounds() {
        assert!(Args::try_parse_from(["montyhall", "--rounds", "0"]).is_err());
        assert!(Args::try_parse_from(["montyhall", "--rounds", "-3"]).is_err());
        let args = Args::try_parse_from(["montyhall", "--rounds", "7"]).unwrap();
        assert!(args.rounds == 7);
        let args = Args::try_parse_from(["montyhall"]).unwrap();
        assert!(args.rounds == DEFAULT_ROUNDS as u64);
    }

    #[test]
    fn highlights_only_the_stronger_row() {
        colored::control::set_override(true);
        let table = highlight(&tally((2, 1), (1, 2)));
        let lines = table.lines().collect::<Vec<_>>();
        assert!(lines.len() == 4);
        assert!(!lines[2].contains('\u{1b}'));
        assert!(lines[3].contains('\u{1b}'));
    }
}
