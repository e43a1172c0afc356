use crate::club::TeamStatistics;
use crate::league::Schedule;
use itertools::Itertools;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Default, Clone, Serialize)]
pub struct LeagueTable {
    pub rows: Vec<LeagueTableRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeagueTableRow {
    pub team_id: u32,
    pub played: u8,
    pub win: u8,
    pub draft: u8,
    pub lost: u8,
    pub goal_scored: i32,
    pub goal_concerned: i32,
    pub points: u8,
}

impl LeagueTableRow {
    fn new(team_id: u32) -> Self {
        LeagueTableRow {
            team_id,
            played: 0,
            win: 0,
            draft: 0,
            lost: 0,
            goal_scored: 0,
            goal_concerned: 0,
            points: 0,
        }
    }

    pub fn goal_difference(&self) -> i32 {
        self.goal_scored - self.goal_concerned
    }
}

impl From<&LeagueTableRow> for TeamStatistics {
    fn from(row: &LeagueTableRow) -> Self {
        TeamStatistics {
            played: row.played,
            win: row.win,
            draft: row.draft,
            lost: row.lost,
            goal_scored: row.goal_scored,
            goal_concerned: row.goal_concerned,
            points: row.points,
        }
    }
}

impl LeagueTable {
    /// Recomputes every row from the played fixtures. The table is always
    /// derived in full so it cannot drift from the schedule; calling this
    /// twice on the same schedule yields an identical table.
    pub fn from_schedule(team_ids: &[u32], schedule: &Schedule) -> LeagueTable {
        let rows: Vec<LeagueTableRow> = team_ids
            .iter()
            .map(|&team_id| Self::row_for_team(team_id, schedule))
            .sorted_by(Self::compare_rows)
            .collect();

        LeagueTable { rows }
    }

    fn row_for_team(team_id: u32, schedule: &Schedule) -> LeagueTableRow {
        let mut row = LeagueTableRow::new(team_id);

        for item in schedule.played_items_for_team(team_id) {
            let Some(result) = &item.result else {
                continue;
            };

            let is_home = item.home_team_id == team_id;

            let (goals_for, goals_against) = if is_home {
                (result.home_goals, result.away_goals)
            } else {
                (result.away_goals, result.home_goals)
            };

            row.played += 1;
            row.goal_scored += goals_for as i32;
            row.goal_concerned += goals_against as i32;

            match goals_for.cmp(&goals_against) {
                Ordering::Greater => row.win += 1,
                Ordering::Equal => row.draft += 1,
                Ordering::Less => row.lost += 1,
            }
        }

        row.points = 3 * row.win + row.draft;

        row
    }

    /// Ranking: points, then goal difference, then goals scored.
    fn compare_rows(a: &LeagueTableRow, b: &LeagueTableRow) -> Ordering {
        b.points
            .cmp(&a.points)
            .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
            .then_with(|| b.goal_scored.cmp(&a.goal_scored))
    }

    pub fn get(&self) -> &[LeagueTableRow] {
        &self.rows
    }

    pub fn leader(&self) -> Option<&LeagueTableRow> {
        self.rows.first()
    }

    pub fn row(&self, team_id: u32) -> Option<&LeagueTableRow> {
        self.rows.iter().find(|row| row.team_id == team_id)
    }
}
