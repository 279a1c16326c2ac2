use super::door::Door;
use super::label::Label;
use crate::Arbitrary;
use crate::DOORS;
use crate::Error;
use rand::Rng;

/// Labels behind the three doors. Exactly one prize, fixed once dealt.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
pub struct Game {
    labels: [Label; DOORS],
    prize: Door,
}

impl Game {
    pub fn labels(&self) -> &[Label; DOORS] {
        &self.labels
    }
    pub fn label(&self, door: Door) -> Label {
        self.labels[door.index()]
    }
    pub fn prize(&self) -> Door {
        self.prize
    }
    /// doors hiding a decoy, in door order
    pub fn decoys(&self) -> [Door; DOORS - 1] {
        match self.prize {
            Door::One => [Door::Two, Door::Three],
            Door::Two => [Door::One, Door::Three],
            Door::Three => [Door::One, Door::Two],
        }
    }
}

impl std::ops::Index<Door> for Game {
    type Output = Label;
    fn index(&self, door: Door) -> &Self::Output {
        &self.labels[door.index()]
    }
}

/// the prize behind `prize`, decoys everywhere else
impl From<Door> for Game {
    fn from(prize: Door) -> Self {
        let mut labels = [Label::Decoy; DOORS];
        labels[prize.index()] = Label::Prize;
        Self { labels, prize }
    }
}
impl TryFrom<[Label; DOORS]> for Game {
    type Error = Error;
    fn try_from(labels: [Label; DOORS]) -> Result<Self, Self::Error> {
        let mut prizes = Door::all()
            .iter()
            .copied()
            .filter(|door| labels[door.index()].is_prize());
        match (prizes.next(), prizes.next()) {
            (Some(prize), None) => Ok(Self { labels, prize }),
            _ => Err(Error::PrizeCount(labels.to_vec())),
        }
    }
}
impl TryFrom<&[Label]> for Game {
    type Error = Error;
    fn try_from(labels: &[Label]) -> Result<Self, Self::Error> {
        <[Label; DOORS]>::try_from(labels)
            .map_err(|_| Error::DoorCount(labels.len()))
            .and_then(Self::try_from)
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let [a, b, c] = self.labels;
        write!(f, "[{} {} {}]", a, b, c)
    }
}

/// {prize, decoy, decoy} has three distinct arrangements, one per prize door,
/// so a uniform prize door is a uniform permutation.
impl Arbitrary for Game {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from(Door::random(rng))
    }
}

/// Deal a fresh stage: one prize and two decoys in uniformly random order.
pub fn create_game<R: Rng + ?Sized>(rng: &mut R) -> Game {
    Game::random(rng)
}
