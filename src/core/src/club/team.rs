use crate::club::PlayerCollection;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

/// Rating triple in [1, 100], fixed for the whole season.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TeamRatings {
    pub attack: u8,
    pub midfield: u8,
    pub defense: u8,
}

impl TeamRatings {
    /// Blended strength used by the match engine: attack and midfield
    /// dominate, defense contributes the remaining fifth.
    pub fn power(&self) -> f64 {
        self.attack as f64 * 0.4 + self.midfield as f64 * 0.4 + self.defense as f64 * 0.2
    }
}

/// Derived season summary. Always recomputed from the fixture set by the
/// league table, never patched in place.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TeamStatistics {
    pub played: u8,
    pub win: u8,
    pub draft: u8,
    pub lost: u8,
    pub goal_scored: i32,
    pub goal_concerned: i32,
    pub points: u8,
}

impl TeamStatistics {
    pub fn goal_difference(&self) -> i32 {
        self.goal_scored - self.goal_concerned
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub slug: String,
    pub color: String,

    pub ratings: TeamRatings,
    pub players: PlayerCollection,
    pub statistics: TeamStatistics,
}

impl Team {
    pub fn new(
        id: u32,
        name: String,
        slug: String,
        color: String,
        ratings: TeamRatings,
        players: PlayerCollection,
    ) -> Self {
        Team {
            id,
            name,
            slug,
            color,
            ratings,
            players,
            statistics: TeamStatistics::default(),
        }
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.name, self.slug)
    }
}
