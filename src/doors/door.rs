use crate::Arbitrary;
use crate::Error;
use rand::Rng;

/// One of the three doors, numbered from 1 as the contestant sees them.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(into = "u8")]
pub enum Door {
    One = 1,
    Two = 2,
    Three = 3,
}

impl Door {
    pub const fn all() -> &'static [Self] {
        &[Self::One, Self::Two, Self::Three]
    }
    /// zero-based slot in a Game
    pub const fn index(&self) -> usize {
        *self as usize - 1
    }
    /// the only door that is neither `self` nor `other`, if they differ
    pub const fn third(&self, other: &Self) -> Option<Self> {
        match (self, other) {
            (Self::One, Self::Two) | (Self::Two, Self::One) => Some(Self::Three),
            (Self::One, Self::Three) | (Self::Three, Self::One) => Some(Self::Two),
            (Self::Two, Self::Three) | (Self::Three, Self::Two) => Some(Self::One),
            _ => None,
        }
    }
}

impl TryFrom<usize> for Door {
    type Error = Error;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            _ => Err(Error::DoorOutOfRange(n)),
        }
    }
}
impl TryFrom<u8> for Door {
    type Error = Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::try_from(n as usize)
    }
}
impl From<Door> for u8 {
    fn from(door: Door) -> u8 {
        door as u8
    }
}
impl From<Door> for usize {
    fn from(door: Door) -> usize {
        door as usize
    }
}

impl std::fmt::Display for Door {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

impl Arbitrary for Door {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.random_range(1..=3u8) {
            1 => Self::One,
            2 => Self::Two,
            _ => Self::Three,
        }
    }
}

/// The contestant's first pick, uniform over the three doors.
pub fn select_door<R: Rng + ?Sized>(rng: &mut R) -> Door {
    Door::random(rng)
}
