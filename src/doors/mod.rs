pub mod door;
pub mod game;
pub mod label;
