use crate::Door;
use crate::Game;
use rand::Rng;

/// The host opens a decoy door the player did not pick.
///
/// Holding the prize leaves two decoys to choose from, and the host picks
/// one of them at random. Holding a decoy leaves exactly one, so the reveal
/// is forced and consumes no randomness.
pub fn open_goat_door<R: Rng + ?Sized>(rng: &mut R, game: &Game, pick: Door) -> Door {
    let [a, b] = game.decoys();
    if pick == game.prize() {
        if rng.random_bool(0.5) { a } else { b }
    } else if pick == a {
        b
    } else {
        a
    }
}
