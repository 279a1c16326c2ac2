use crate::Door;
use crate::Error;
use crate::Result;

/// What the contestant does once a decoy has been shown.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Stay,
    Switch,
}

impl Strategy {
    pub const fn all() -> &'static [Self] {
        &[Self::Stay, Self::Switch]
    }
    pub const fn stays(&self) -> bool {
        matches!(self, Self::Stay)
    }
    /// final door under this strategy
    pub fn apply(&self, revealed: Door, original: Door) -> Result<Door> {
        change_door(self.stays(), revealed, original)
    }
}

impl From<bool> for Strategy {
    fn from(stay: bool) -> Self {
        if stay { Self::Stay } else { Self::Switch }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Stay => write!(f, "stay"),
            Self::Switch => write!(f, "switch"),
        }
    }
}

/// Final door after the reveal: the original pick when staying, otherwise
/// the one door that is neither picked nor open.
pub fn change_door(stay: bool, revealed: Door, original: Door) -> Result<Door> {
    let last = original
        .third(&revealed)
        .ok_or(Error::RevealedPick(original.into()))?;
    match stay {
        true => Ok(original),
        false => Ok(last),
    }
}
