//! Puzzle solutions, one module per event year.

pub mod y2015;
pub mod y2016;
