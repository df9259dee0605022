//! Section renderers for the shoe listing page.

mod card;
mod grid;

pub use card::*;
pub use grid::*;
