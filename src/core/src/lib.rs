pub mod simulator;
pub use simulator::*;

pub mod club;
pub mod league;
pub mod r#match;

pub mod shared;
pub mod utils;

// Re-export club items
pub use club::{
    Player, PlayerCollection, PlayerPositionType, PlayerStatistics, Team, TeamRatings,
    TeamStatistics,
};

// Re-export league items
pub use league::{
    League, LeagueTable, LeagueTableRow, NewsCollection, NewsItem, NewsItemType, RoundResult,
    Schedule, ScheduleItem, ScheduleItemResult, ScheduleTour,
};

// Re-export match items
pub use r#match::{GoalAttribution, GoalDetail, MatchEngine, MatchResult, Score, TeamScore};

pub use shared::FullName;
pub use utils::*;
