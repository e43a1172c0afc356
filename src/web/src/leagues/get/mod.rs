pub mod routes;

use crate::common::default_handler::CSS_VERSION;
use crate::{ApiError, ApiResult, GameAppData};
use askama::Template;
use axum::extract::State;
use axum::response::IntoResponse;
use nova_core::{GoalDetail, SimulatorData, Team};
use itertools::Itertools;

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "leagues/get/index.html")]
pub struct LeagueGetTemplate {
    pub css_version: &'static str,
    pub title: String,
    pub current_round: u8,
    pub total_rounds: u8,
    pub display_round: u8,
    pub round_status: String,
    pub season_finished: bool,
    pub half_season_leader: String,
    pub champion: String,
    pub champion_summary: String,
    pub table_rows: Vec<LeagueTableRow>,
    pub fixtures: Vec<FixtureItem>,
    pub top_scorers: Vec<LeaguePlayerStatItem>,
    pub top_assisters: Vec<LeaguePlayerStatItem>,
    pub news: Vec<NewsFeedItem>,
}

pub struct LeagueTableRow {
    pub position: usize,
    pub team_name: String,
    pub team_color: String,
    pub played: u8,
    pub win: u8,
    pub draft: u8,
    pub lost: u8,
    pub goal_scored: i32,
    pub goal_concerned: i32,
    pub goal_difference: i32,
    pub points: u8,
}

pub struct FixtureItem {
    pub match_id: String,
    pub home_team_name: String,
    pub home_team_color: String,
    pub away_team_name: String,
    pub away_team_color: String,
    pub played: bool,
    pub home_goals: u8,
    pub away_goals: u8,
    pub home_scorers: String,
    pub away_scorers: String,
    pub commentary: String,
}

pub struct LeaguePlayerStatItem {
    pub player_name: String,
    pub team_name: String,
    pub position: &'static str,
    pub played: u16,
    pub stat_value: u16,
}

pub struct NewsFeedItem {
    pub round: u8,
    pub headline: String,
    pub body: String,
    pub published: String,
}

pub async fn league_get_action(
    State(state): State<GameAppData>,
) -> ApiResult<impl IntoResponse> {
    let guard = state.data.read().await;

    let simulator_data = guard
        .as_ref()
        .ok_or_else(|| ApiError::InternalError(String::from("league state not loaded")))?;

    let league = &simulator_data.league;

    let table_rows: Vec<LeagueTableRow> = league
        .table
        .get()
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let team = simulator_data.team(row.team_id);
            LeagueTableRow {
                position: idx + 1,
                team_name: team.map(|t| t.name.clone()).unwrap_or_default(),
                team_color: team.map(|t| t.color.clone()).unwrap_or_default(),
                played: row.played,
                win: row.win,
                draft: row.draft,
                lost: row.lost,
                goal_scored: row.goal_scored,
                goal_concerned: row.goal_concerned,
                goal_difference: row.goal_difference(),
                points: row.points,
            }
        })
        .collect();

    // a finished season keeps showing its final round
    let display_round = if league.is_season_finished() {
        league.total_rounds()
    } else {
        league.current_round
    };

    let fixtures: Vec<FixtureItem> = league
        .schedule
        .items_for_round(display_round)
        .iter()
        .map(|item| {
            let home = simulator_data.team(item.home_team_id);
            let away = simulator_data.team(item.away_team_id);

            let (home_goals, away_goals, home_scorers, away_scorers) = match &item.result {
                Some(result) => (
                    result.home_goals,
                    result.away_goals,
                    scorer_line(simulator_data, &result.details, home),
                    scorer_line(simulator_data, &result.details, away),
                ),
                None => (0, 0, String::new(), String::new()),
            };

            FixtureItem {
                match_id: item.id.clone(),
                home_team_name: home.map(|t| t.name.clone()).unwrap_or_default(),
                home_team_color: home.map(|t| t.color.clone()).unwrap_or_default(),
                away_team_name: away.map(|t| t.name.clone()).unwrap_or_default(),
                away_team_color: away.map(|t| t.color.clone()).unwrap_or_default(),
                played: item.is_played(),
                home_goals,
                away_goals,
                home_scorers,
                away_scorers,
                commentary: item.commentary.clone().unwrap_or_default(),
            }
        })
        .collect();

    let round_status = if league.is_season_finished() {
        String::from("SEASON END")
    } else if fixtures.iter().any(|fixture| fixture.played) {
        String::from("COMPLETED")
    } else {
        String::from("UPCOMING")
    };

    let top_scorers = top_players(simulator_data, |player| player.statistics.goals);
    let top_assisters = top_players(simulator_data, |player| player.statistics.assists);

    let news: Vec<NewsFeedItem> = league
        .news
        .items()
        .iter()
        .rev()
        .map(|item| NewsFeedItem {
            round: item.round,
            headline: item.headline.clone(),
            body: item.body.clone(),
            published: item.published.format("%d.%m.%Y %H:%M").to_string(),
        })
        .collect();

    let half_season_leader = league
        .half_season_leader
        .and_then(|team_id| simulator_data.team(team_id))
        .map(|team| team.name.clone())
        .unwrap_or_default();

    let (champion, champion_summary) = match league.champion.and_then(|id| simulator_data.team(id))
    {
        Some(team) => (
            team.name.clone(),
            format!(
                "{} Points • {} Wins • {} Goals",
                team.statistics.points, team.statistics.win, team.statistics.goal_scored
            ),
        ),
        None => (String::new(), String::new()),
    };

    Ok(LeagueGetTemplate {
        css_version: CSS_VERSION,
        title: league.name.clone(),
        current_round: league.current_round,
        total_rounds: league.total_rounds(),
        display_round,
        round_status,
        season_finished: league.is_season_finished(),
        half_season_leader,
        champion,
        champion_summary,
        table_rows,
        fixtures,
        top_scorers,
        top_assisters,
        news,
    })
}

/// "Kai Storm x2, Leo Frost" for the goals one side scored in a fixture.
fn scorer_line(
    simulator_data: &SimulatorData,
    details: &[GoalDetail],
    team: Option<&Team>,
) -> String {
    let Some(team) = team else {
        return String::new();
    };

    let mut counts: Vec<(u32, u32)> = Vec::new();

    for detail in details {
        if team.players.contains(detail.player_id) {
            match counts.iter_mut().find(|(id, _)| *id == detail.player_id) {
                Some((_, count)) => *count += 1,
                None => counts.push((detail.player_id, 1)),
            }
        }
    }

    counts
        .iter()
        .map(|(player_id, count)| {
            let name = simulator_data
                .player(*player_id)
                .map(|player| player.full_name.to_string())
                .unwrap_or_else(|| String::from("Unknown"));

            if *count > 1 {
                format!("{} x{}", name, count)
            } else {
                name
            }
        })
        .join(", ")
}

fn top_players<F>(simulator_data: &SimulatorData, stat: F) -> Vec<LeaguePlayerStatItem>
where
    F: Fn(&nova_core::Player) -> u16,
{
    simulator_data
        .teams
        .iter()
        .flat_map(|team| {
            team.players
                .players()
                .iter()
                .map(move |player| (team.name.as_str(), player))
        })
        .filter(|(_, player)| stat(player) > 0)
        .sorted_by(|(_, a), (_, b)| stat(b).cmp(&stat(a)))
        .take(10)
        .map(|(team_name, player)| LeaguePlayerStatItem {
            player_name: player.full_name.to_string(),
            team_name: team_name.to_string(),
            position: player.position.short_name(),
            played: player.statistics.played,
            stat_value: stat(player),
        })
        .collect()
}
