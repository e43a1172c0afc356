use crate::club::PlayerCollection;
use serde::Serialize;

/// One goal as attributed to roster members.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GoalDetail {
    pub player_id: u32,
    pub assist_player_id: Option<u32>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TeamScore {
    pub team_id: u32,
    goals: u8,
}

impl TeamScore {
    pub fn new(team_id: u32, goals: u8) -> Self {
        TeamScore { team_id, goals }
    }

    #[inline]
    pub fn get(&self) -> u8 {
        self.goals
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Score {
    pub home_team: TeamScore,
    pub away_team: TeamScore,
    details: Vec<GoalDetail>,
}

impl Score {
    pub fn new(home_team: TeamScore, away_team: TeamScore, details: Vec<GoalDetail>) -> Self {
        Score {
            home_team,
            away_team,
            details,
        }
    }

    pub fn detail(&self) -> &[GoalDetail] {
        &self.details
    }

    pub fn is_draw(&self) -> bool {
        self.home_team.get() == self.away_team.get()
    }

    pub fn winner_id(&self) -> Option<u32> {
        if self.home_team.get() > self.away_team.get() {
            Some(self.home_team.team_id)
        } else if self.away_team.get() > self.home_team.get() {
            Some(self.away_team.team_id)
        } else {
            None
        }
    }
}

/// Outcome of a single fixture. Carries the fresh roster snapshots so the
/// caller replaces the team rosters instead of mutating them in place.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub id: String,
    pub round: u8,
    pub score: Score,

    pub home_squad: PlayerCollection,
    pub away_squad: PlayerCollection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winner_is_none_on_draw() {
        let score = Score::new(TeamScore::new(1, 2), TeamScore::new(2, 2), Vec::new());

        assert!(score.is_draw());
        assert_eq!(score.winner_id(), None);
    }

    #[test]
    fn winner_follows_goals() {
        let score = Score::new(TeamScore::new(1, 0), TeamScore::new(2, 3), Vec::new());

        assert_eq!(score.winner_id(), Some(2));
    }
}
