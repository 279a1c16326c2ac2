pub mod host;
pub mod outcome;
pub mod round;
pub mod strategy;
