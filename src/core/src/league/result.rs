use crate::r#match::MatchResult;

/// What a single "simulate round" invocation produced.
pub struct RoundResult {
    pub league_id: u32,
    pub round: u8,
    pub match_results: Vec<MatchResult>,

    /// Set when this invocation fired the halfway event.
    pub half_season_leader: Option<u32>,
    /// Set when this invocation crowned the champion.
    pub champion: Option<u32>,
}

impl RoundResult {
    pub fn empty(league_id: u32, round: u8) -> Self {
        RoundResult {
            league_id,
            round,
            match_results: Vec::new(),
            half_season_leader: None,
            champion: None,
        }
    }

    pub fn with_match_results(league_id: u32, round: u8, match_results: Vec<MatchResult>) -> Self {
        RoundResult {
            league_id,
            round,
            match_results,
            half_season_leader: None,
            champion: None,
        }
    }

    pub fn has_match_results(&self) -> bool {
        !self.match_results.is_empty()
    }
}
