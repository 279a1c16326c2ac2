use crate::Result;
use crate::Round;
use rand::Rng;

/// Endless stream of independent rounds drawn from one random source.
pub struct Rounds<'r, R: Rng + ?Sized>(&'r mut R);

impl<'r, R: Rng + ?Sized> From<&'r mut R> for Rounds<'r, R> {
    fn from(rng: &'r mut R) -> Self {
        Self(rng)
    }
}

impl<R: Rng + ?Sized> Iterator for Rounds<'_, R> {
    type Item = Result<Round>;
    fn next(&mut self) -> Option<Self::Item> {
        Some(Round::play(&mut *self.0))
    }
}
