use crate::club::{Player, Team};
use crate::league::{League, RoundResult};
use rand::rngs::StdRng;

/// The whole in-memory league state: one league, its teams and the master
/// random source. Owned by a single controller; there is exactly one writer.
#[derive(Debug)]
pub struct SimulatorData {
    pub league: League,
    pub teams: Vec<Team>,
    pub rng: StdRng,
}

impl SimulatorData {
    pub fn new(league: League, teams: Vec<Team>, rng: StdRng) -> Self {
        SimulatorData { league, teams, rng }
    }

    pub fn team(&self, team_id: u32) -> Option<&Team> {
        self.teams.iter().find(|team| team.id == team_id)
    }

    pub fn player(&self, player_id: u32) -> Option<&Player> {
        self.teams
            .iter()
            .flat_map(|team| team.players.players())
            .find(|player| player.id == player_id)
    }
}

pub struct LeagueSimulator;

impl LeagueSimulator {
    /// Advances the season by one round. Serialization is the caller's
    /// concern: the state is behind a single writer.
    pub fn simulate_round(data: &mut SimulatorData) -> RoundResult {
        let SimulatorData { league, teams, rng } = data;

        league.simulate_round(teams, rng)
    }
}
