use crate::news::CommentaryRequest;
use crate::{ApiError, ApiResult, GameAppData};
use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct MatchCommentaryRequest {
    pub match_id: String,
}

#[derive(Serialize)]
pub struct MatchCommentaryResponse {
    pub match_id: String,
    pub commentary: String,
}

/// Lazy, cached commentary for a played fixture: the provider is asked at
/// most once per fixture, and whatever comes back (text or fallback) is
/// stored and served from then on.
pub async fn match_commentary_action(
    State(state): State<GameAppData>,
    Path(route_params): Path<MatchCommentaryRequest>,
) -> ApiResult<Json<MatchCommentaryResponse>> {
    let request = {
        let guard = state.data.read().await;

        let simulator_data = guard
            .as_ref()
            .ok_or_else(|| ApiError::InternalError(String::from("league state not loaded")))?;

        let item = simulator_data
            .league
            .schedule
            .item(&route_params.match_id)
            .ok_or_else(|| {
                ApiError::NotFound(format!("match {} not found", route_params.match_id))
            })?;

        if let Some(commentary) = &item.commentary {
            return Ok(Json(MatchCommentaryResponse {
                match_id: route_params.match_id,
                commentary: commentary.clone(),
            }));
        }

        let result = item.result.as_ref().ok_or_else(|| {
            ApiError::BadRequest(format!(
                "match {} has not been played yet",
                route_params.match_id
            ))
        })?;

        let home = simulator_data.team(item.home_team_id).ok_or_else(|| {
            ApiError::InternalError(format!("team {} not found", item.home_team_id))
        })?;
        let away = simulator_data.team(item.away_team_id).ok_or_else(|| {
            ApiError::InternalError(format!("team {} not found", item.away_team_id))
        })?;

        CommentaryRequest {
            home_name: home.name.clone(),
            away_name: away.name.clone(),
            home_goals: result.home_goals,
            away_goals: result.away_goals,
            home_attack: home.ratings.attack,
            home_defense: home.ratings.defense,
            away_attack: away.ratings.attack,
            away_defense: away.ratings.defense,
        }
    };

    // the lock is not held across the provider call
    let commentary = state.narrator.match_commentary(&request).await;

    let mut guard = state.data.write().await;

    let simulator_data = guard
        .as_mut()
        .ok_or_else(|| ApiError::InternalError(String::from("league state not loaded")))?;

    simulator_data
        .league
        .schedule
        .fill_commentary(&route_params.match_id, commentary);

    // read back what actually stuck: on a concurrent request the first
    // writer wins and both callers see the same text
    let stored = simulator_data
        .league
        .schedule
        .item(&route_params.match_id)
        .and_then(|item| item.commentary.clone())
        .ok_or_else(|| ApiError::InternalError(String::from("commentary was not stored")))?;

    Ok(Json(MatchCommentaryResponse {
        match_id: route_params.match_id,
        commentary: stored,
    }))
}
