//! Monty Hall simulation.
//!
//! One round assigns a prize and two decoys to three doors, lets the player
//! pick, has the host open a decoy door, and scores both the stay and the
//! switch strategy against that same round. Batches of rounds estimate the
//! win rate of each strategy.
pub mod batch;
pub mod doors;
pub mod error;
pub mod play;

pub use batch::play_n_games;
pub use batch::results::ResultSet;
pub use batch::rounds::Rounds;
pub use batch::simulate;
pub use batch::summary::Summary;
pub use batch::summary::Tally;
pub use doors::door::Door;
pub use doors::door::select_door;
pub use doors::game::Game;
pub use doors::game::create_game;
pub use doors::label::Label;
pub use error::Error;
pub use error::Result;
pub use play::host::open_goat_door;
pub use play::outcome::Outcome;
pub use play::outcome::determine_winner;
pub use play::round::Round;
pub use play::round::RoundResult;
pub use play::round::play_game;
pub use play::strategy::Strategy;
pub use play::strategy::change_door;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Win rates and row-wise proportions.
pub type Probability = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation from an injected source.
pub trait Arbitrary {
    /// Draw a uniformly random instance from `rng`.
    fn random<R: rand::Rng + ?Sized>(rng: &mut R) -> Self;
}

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Number of doors on stage.
pub const DOORS: usize = 3;
/// Rounds played when no count is given.
pub const DEFAULT_ROUNDS: usize = 100;
/// Decimal places kept in the printed proportions table.
pub const PRECISION: i32 = 2;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr, leaving stdout to the report.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}
