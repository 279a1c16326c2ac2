use super::host::open_goat_door;
use super::outcome::Outcome;
use super::outcome::determine_winner;
use super::strategy::Strategy;
use crate::Arbitrary;
use crate::Door;
use crate::Game;
use crate::Result;
use rand::Rng;

/// How one strategy fared in one round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
pub struct RoundResult {
    pub strategy: Strategy,
    pub outcome: Outcome,
}

impl From<(Strategy, Outcome)> for RoundResult {
    fn from((strategy, outcome): (Strategy, Outcome)) -> Self {
        Self { strategy, outcome }
    }
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<6} {}", self.strategy, self.outcome)
    }
}

/// A complete round. Both strategies are scored against the same
/// stage, pick and reveal, so they differ only in the final decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Round {
    game: Game,
    pick: Door,
    open: Door,
    results: [RoundResult; 2],
}

impl Round {
    /// deal, pick, reveal, then decide both ways
    pub fn play<R: Rng + ?Sized>(rng: &mut R) -> Result<Self> {
        let game = Game::random(rng);
        let pick = Door::random(rng);
        let open = open_goat_door(rng, &game, pick);
        Self::try_from((game, pick, open))
    }
    pub fn game(&self) -> &Game {
        &self.game
    }
    pub fn pick(&self) -> Door {
        self.pick
    }
    pub fn open(&self) -> Door {
        self.open
    }
    /// stay first, then switch
    pub fn results(&self) -> [RoundResult; 2] {
        self.results
    }
    pub fn outcome(&self, strategy: Strategy) -> Outcome {
        match strategy {
            Strategy::Stay => self.results[0].outcome,
            Strategy::Switch => self.results[1].outcome,
        }
    }
}

/// score a stage whose pick and reveal are already fixed
impl TryFrom<(Game, Door, Door)> for Round {
    type Error = crate::Error;
    fn try_from((game, pick, open): (Game, Door, Door)) -> Result<Self> {
        let score = |strategy: Strategy| -> Result<RoundResult> {
            let last = strategy.apply(open, pick)?;
            Ok(RoundResult::from((strategy, determine_winner(last, &game))))
        };
        Ok(Self {
            game,
            pick,
            open,
            results: [score(Strategy::Stay)?, score(Strategy::Switch)?],
        })
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} pick {} open {} -> stay {} switch {}",
            self.game,
            self.pick,
            self.open,
            self.outcome(Strategy::Stay),
            self.outcome(Strategy::Switch),
        )
    }
}

/// Play one round and report the stay result followed by the switch result.
pub fn play_game<R: Rng + ?Sized>(rng: &mut R) -> Result<[RoundResult; 2]> {
    Round::play(rng).map(|round| round.results())
}
