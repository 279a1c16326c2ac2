use crate::Door;
use crate::Game;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Lose,
    Win,
}

impl Outcome {
    pub const fn all() -> &'static [Self] {
        &[Self::Lose, Self::Win]
    }
    pub const fn won(&self) -> bool {
        matches!(self, Self::Win)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Lose => write!(f, "lose"),
            Self::Win => write!(f, "win"),
        }
    }
}

/// Win exactly when the final door hides the prize.
pub fn determine_winner(last: Door, game: &Game) -> Outcome {
    if game[last].is_prize() {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
