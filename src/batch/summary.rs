use crate::Outcome;
use crate::PRECISION;
use crate::Probability;
use crate::RoundResult;
use crate::Strategy;

/// Win/lose tally for one strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct Tally {
    pub lose: usize,
    pub win: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.lose + self.win
    }
    pub fn count(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Lose => self.lose,
            Outcome::Win => self.win,
        }
    }
    /// share of this row's plays that ended in `outcome`; zero for an empty row
    pub fn rate(&self, outcome: Outcome) -> Probability {
        match self.total() {
            0 => 0.,
            n => self.count(outcome) as Probability / n as Probability,
        }
    }
}

/// Strategy × outcome contingency table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct Summary {
    pub stay: Tally,
    pub switch: Tally,
}

impl Summary {
    pub fn row(&self, strategy: Strategy) -> &Tally {
        match strategy {
            Strategy::Stay => &self.stay,
            Strategy::Switch => &self.switch,
        }
    }
    fn row_mut(&mut self, strategy: Strategy) -> &mut Tally {
        match strategy {
            Strategy::Stay => &mut self.stay,
            Strategy::Switch => &mut self.switch,
        }
    }
    pub fn add(&mut self, result: &RoundResult) {
        let row = self.row_mut(result.strategy);
        match result.outcome {
            Outcome::Lose => row.lose += 1,
            Outcome::Win => row.win += 1,
        }
    }
    pub fn count(&self, strategy: Strategy, outcome: Outcome) -> usize {
        self.row(strategy).count(outcome)
    }
    pub fn rate(&self, strategy: Strategy, outcome: Outcome) -> Probability {
        self.row(strategy).rate(outcome)
    }
    /// row-wise proportion as printed in the table
    pub fn rounded(&self, strategy: Strategy, outcome: Outcome) -> Probability {
        let scale = (10 as Probability).powi(PRECISION);
        (self.rate(strategy, outcome) * scale).round() / scale
    }
}

impl<'a> FromIterator<&'a RoundResult> for Summary {
    fn from_iter<I: IntoIterator<Item = &'a RoundResult>>(iter: I) -> Self {
        let mut summary = Self::default();
        for result in iter {
            summary.add(result);
        }
        summary
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let width = PRECISION as usize;
        writeln!(f, "{:<10}{}", "", "outcome")?;
        write!(f, "{:<10}", "strategy")?;
        for outcome in Outcome::all() {
            write!(f, "{:<6}", outcome.to_string())?;
        }
        for strategy in Strategy::all() {
            writeln!(f)?;
            write!(f, "  {:<8}", strategy.to_string())?;
            for outcome in Outcome::all() {
                write!(f, "{:<6.*}", width, self.rounded(*strategy, *outcome))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(stay: (usize, usize), switch: (usize, usize)) -> Summary {
        let mut results = Vec::new();
        for (strategy, (lose, win)) in [(Strategy::Stay, stay), (Strategy::Switch, switch)] {
            results.extend(std::iter::repeat_n(RoundResult::from((strategy, Outcome::Lose)), lose));
            results.extend(std::iter::repeat_n(RoundResult::from((strategy, Outcome::Win)), win));
        }
        results.iter().collect()
    }

    #[test]
    fn counts_by_row() {
        let summary = tally((2, 1), (1, 2));
        assert!(summary.count(Strategy::Stay, Outcome::Lose) == 2);
        assert!(summary.count(Strategy::Switch, Outcome::Win) == 2);
        assert!(summary.row(Strategy::Stay).total() == 3);
    }

    #[test]
    fn rows_sum_to_one() {
        let summary = tally((7, 4), (3, 9));
        for strategy in Strategy::all() {
            let sum = Outcome::all()
                .iter()
                .map(|o| summary.rate(*strategy, *o))
                .sum::<Probability>();
            assert!((sum - 1.).abs() < 1e-6);
        }
    }

    #[test]
    fn rounds_to_two_places() {
        let summary = tally((2, 1), (1, 2));
        assert!(summary.rounded(Strategy::Stay, Outcome::Lose) == 0.67);
        assert!(summary.rounded(Strategy::Stay, Outcome::Win) == 0.33);
        assert!(summary.rounded(Strategy::Switch, Outcome::Win) == 0.67);
    }

    #[test]
    fn empty_rows_rate_zero() {
        let summary = Summary::default();
        assert!(summary.rate(Strategy::Stay, Outcome::Win) == 0.);
    }

    #[test]
    fn prints_table() {
        let table = tally((2, 1), (1, 2)).to_string();
        let lines = table.lines().collect::<Vec<_>>();
        assert!(lines.len() == 4);
        assert!(lines[0].trim() == "outcome");
        assert!(lines[1].split_whitespace().collect::<Vec<_>>() == ["strategy", "lose", "win"]);
        assert!(lines[2].split_whitespace().collect::<Vec<_>>() == ["stay", "0.67", "0.33"]);
        assert!(lines[3].split_whitespace().collect::<Vec<_>>() == ["switch", "0.33", "0.67"]);
    }
}
