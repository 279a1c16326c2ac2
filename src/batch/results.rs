use super::summary::Summary;
use crate::Round;
use crate::RoundResult;

/// Every result of a batch, two per round, in the order played.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ResultSet(Vec<RoundResult>);

impl ResultSet {
    pub fn with_rounds(n: usize) -> Self {
        Self(Vec::with_capacity(2 * n))
    }
    pub fn push(&mut self, round: &Round) {
        self.0.extend(round.results());
    }
    pub fn results(&self) -> &[RoundResult] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn rounds(&self) -> usize {
        self.0.len() / 2
    }
    pub fn summary(&self) -> Summary {
        self.0.iter().collect()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a RoundResult;
    type IntoIter = std::slice::Iter<'a, RoundResult>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<ResultSet> for Vec<RoundResult> {
    fn from(set: ResultSet) -> Self {
        set.0
    }
}
