pub mod results;
pub mod rounds;
pub mod summary;

use crate::Error;
use crate::Outcome;
use crate::Result;
use crate::Strategy;
use rand::Rng;
use results::ResultSet;
use rounds::Rounds;

/// Play `n` rounds into a ResultSet without printing anything.
pub fn simulate<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Result<ResultSet> {
    if n == 0 {
        return Err(Error::NoRounds);
    }
    log::info!("playing {} rounds", n);
    let mut set = ResultSet::with_rounds(n);
    for round in Rounds::from(rng).take(n) {
        let round = round?;
        log::trace!("{}", round);
        set.push(&round);
    }
    let summary = set.summary();
    log::debug!("contingency\n{}", summary);
    log::info!(
        "stay wins {:.4}, switch wins {:.4}",
        summary.rate(Strategy::Stay, Outcome::Win),
        summary.rate(Strategy::Switch, Outcome::Win),
    );
    Ok(set)
}

/// Play `n` rounds and print the row-wise proportions table to stdout.
pub fn play_n_games<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Result<ResultSet> {
    let set = simulate(rng, n)?;
    println!("{}", set.summary());
    Ok(set)
}
