use crate::Label;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure is a caller handing in something the game can never produce.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("door {0} is not one of 1, 2, 3")]
    DoorOutOfRange(usize),
    #[error("game needs exactly 3 doors, got {0}")]
    DoorCount(usize),
    #[error("game needs exactly one prize, got {0:?}")]
    PrizeCount(Vec<Label>),
    #[error("host cannot reveal the player's own door {0}")]
    RevealedPick(usize),
    #[error("round count must be positive")]
    NoRounds,
}
