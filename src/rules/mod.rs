//! Game rules for generalized tic-tac-toe
//!
//! - Win detection along rows, columns and both diagonal directions
//! - Terminal state classification (win, draw, in progress)

pub mod outcome;
pub mod win;

// Re-exports for convenient access
pub use outcome::{outcome, Outcome};
pub use win::{find_winning_line, has_won};
