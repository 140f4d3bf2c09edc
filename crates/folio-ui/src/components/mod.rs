//! Reusable UI components

mod button;
mod filter_bar;

pub use button::*;
pub use filter_bar::*;
