//! Running score tallies across rounds
//!
//! Owned by the front-end and passed into each round; points are keyed by
//! participant name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Points awarded at the end of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub win_points: u32,
    pub draw_points: u32,
}

impl ScoringRules {
    /// Terminal game: 3 for a win, 1 each for a tie
    pub const TERMINAL: ScoringRules = ScoringRules {
        win_points: 3,
        draw_points: 1,
    };

    /// Windowed game: 3 for a win, 2 each for a tie
    pub const WINDOW: ScoringRules = ScoringRules {
        win_points: 3,
        draw_points: 2,
    };
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::TERMINAL
    }
}

/// Points per participant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    rules: ScoringRules,
    points: BTreeMap<String, u32>,
}

impl Scoreboard {
    /// Scoreboard listing `participants` at zero points
    pub fn new<I, S>(rules: ScoringRules, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rules,
            points: participants.into_iter().map(|p| (p.into(), 0)).collect(),
        }
    }

    /// Points for `participant`, 0 if never seen
    pub fn points(&self, participant: &str) -> u32 {
        self.points.get(participant).copied().unwrap_or(0)
    }

    pub fn record_win(&mut self, winner: &str) {
        *self.points.entry(winner.to_owned()).or_insert(0) += self.rules.win_points;
    }

    /// Award draw points to each participant of the round
    pub fn record_draw(&mut self, participants: &[&str]) {
        for participant in participants {
            *self.points.entry((*participant).to_owned()).or_insert(0) += self.rules.draw_points;
        }
    }

    /// Participants and points, ordered by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.points.iter().map(|(name, &points)| (name.as_str(), points))
    }
}
