use crate::GameAppData;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use nova_core::{LeagueSimulator, NewsItem, RoundResult, SimulatorData};
use log::error;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct GameProcessResponse {
    pub round: u8,
    pub simulated: bool,
    pub season_finished: bool,
}

/// The "simulate round" trigger. The write lock is held for the duration of
/// the synchronous simulation and released before the narrative request —
/// the only suspension point — so a slow model never blocks readers.
pub async fn game_process_action(State(state): State<GameAppData>) -> impl IntoResponse {
    let data = Arc::clone(&state.data);

    let simulator_data_guard = data.write_owned().await;

    let simulated = tokio::task::spawn_blocking(move || {
        let mut guard = simulator_data_guard;
        let simulator_data = guard.as_mut().unwrap();

        let result = LeagueSimulator::simulate_round(simulator_data);
        let summary = RoundSummary::collect(simulator_data, &result);

        (result, summary)
    })
    .await;

    let (result, summary) = match simulated {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("round simulation task failed: {}", e);
            return (StatusCode::BAD_REQUEST, Json(None::<GameProcessResponse>));
        }
    };

    if result.has_match_results() {
        append_round_recap(&state, &result, &summary).await;
    }

    let response = GameProcessResponse {
        round: result.round,
        simulated: result.has_match_results(),
        season_finished: summary.season_finished,
    };

    (StatusCode::OK, Json(Some(response)))
}

/// Requests the recap from the narrative provider (best effort, bounded
/// time, guaranteed fallback) and appends it to the news feed under a fresh
/// write lock. Exactly one recap item exists per simulated round.
async fn append_round_recap(state: &GameAppData, result: &RoundResult, summary: &RoundSummary) {
    let recap = state
        .narrator
        .round_recap(result.round, &summary.result_lines)
        .await;

    let mut guard = state.data.write().await;

    if let Some(simulator_data) = guard.as_mut() {
        let news_id = format!("news-{}", result.round);

        if !simulator_data.league.news.contains(&news_id) {
            simulator_data.league.news.add(NewsItem::league_update(
                news_id,
                result.round,
                recap.headline,
                recap.body,
            ));
        }
    }
}

/// Everything the narrative prompt needs, captured while the state is
/// still locked.
struct RoundSummary {
    result_lines: Vec<String>,
    season_finished: bool,
}

impl RoundSummary {
    fn collect(simulator_data: &SimulatorData, result: &RoundResult) -> Self {
        let result_lines = result
            .match_results
            .iter()
            .map(|match_result| {
                let home = simulator_data
                    .team(match_result.score.home_team.team_id)
                    .map(|team| team.name.as_str())
                    .unwrap_or("Unknown");
                let away = simulator_data
                    .team(match_result.score.away_team.team_id)
                    .map(|team| team.name.as_str())
                    .unwrap_or("Unknown");

                format!(
                    "{} {} - {} {}",
                    home,
                    match_result.score.home_team.get(),
                    match_result.score.away_team.get(),
                    away
                )
            })
            .collect();

        RoundSummary {
            result_lines,
            season_finished: simulator_data.league.is_season_finished(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::GameAppData;
    use crate::news::Narrator;
    use nova_core::{
        FullName, League, Player, PlayerCollection, PlayerPositionType, Schedule, SimulatorData,
        Team, TeamRatings,
    };
    use ollama_rs::Ollama;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::RwLock;

    fn roster(team_id: u32) -> PlayerCollection {
        use PlayerPositionType::*;

        let template = [
            Goalkeeper, Defender, Defender, Defender, Defender, Midfielder, Midfielder, Midfielder,
            Midfielder, Forward, Forward, Goalkeeper, Defender, Midfielder, Forward,
        ];

        PlayerCollection::new(
            template
                .iter()
                .enumerate()
                .map(|(idx, &position)| {
                    Player::new(
                        team_id * 100 + idx as u32,
                        FullName::new(format!("First{}", idx), format!("Last{}", idx)),
                        position,
                    )
                })
                .collect(),
        )
    }

    /// Two-team league behind an unreachable narrative provider: the single
    /// attempt fails fast and every request resolves to its fallback.
    pub(crate) fn app_data() -> GameAppData {
        let mut teams: Vec<Team> = (1..=2)
            .map(|id| {
                Team::new(
                    id,
                    format!("Team {}", id),
                    format!("team-{}", id),
                    String::from("#ffffff"),
                    TeamRatings {
                        attack: 80,
                        midfield: 75,
                        defense: 70,
                    },
                    roster(id),
                )
            })
            .collect();

        let mut league = League::new(
            1,
            String::from("Test League"),
            String::from("test-league"),
            Schedule::generate(&[1, 2]),
        );
        league.refresh_table(&mut teams);

        let narrator = Narrator::new(
            Ollama::new(String::from("http://127.0.0.1"), 59998),
            Some(String::from("test-model")),
            Duration::from_millis(300),
        );

        GameAppData {
            data: Arc::new(RwLock::new(Some(SimulatorData::new(
                league,
                teams,
                StdRng::seed_from_u64(1),
            )))),
            narrator: Arc::new(narrator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::app_data;
    use super::*;

    #[tokio::test]
    async fn failed_narrative_provider_does_not_block_round_progression() {
        let state = app_data();

        game_process_action(State(state.clone())).await;

        let guard = state.data.read().await;
        let simulator_data = guard.as_ref().unwrap();

        // fixtures are played and the round advanced despite the provider failure
        assert!(
            simulator_data
                .league
                .schedule
                .items_for_round(1)
                .iter()
                .all(|item| item.is_played())
        );
        assert_eq!(simulator_data.league.current_round, 2);

        // the fallback recap was appended exactly once
        let fallbacks: Vec<_> = simulator_data
            .league
            .news
            .items()
            .iter()
            .filter(|item| item.headline == "Round 1 Concluded")
            .collect();
        assert_eq!(fallbacks.len(), 1);
    }

    #[tokio::test]
    async fn finished_season_requests_no_recap() {
        let state = app_data();

        // two teams make a two-round season
        game_process_action(State(state.clone())).await;
        game_process_action(State(state.clone())).await;

        let news_count = {
            let guard = state.data.read().await;
            guard.as_ref().unwrap().league.news.len()
        };

        // a third trigger is a no-op: no simulation, no extra news
        game_process_action(State(state.clone())).await;

        let guard = state.data.read().await;
        let simulator_data = guard.as_ref().unwrap();

        assert_eq!(simulator_data.league.current_round, 2);
        assert!(simulator_data.league.is_season_finished());
        assert_eq!(simulator_data.league.news.len(), news_count);
    }
}
