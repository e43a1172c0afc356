use crate::GameAppData;
use crate::r#match::commentary::match_commentary_action;
use axum::Router;
use axum::routing::get;

pub fn match_routes() -> Router<GameAppData> {
    Router::new().route(
        "/api/matches/{match_id}/commentary",
        get(match_commentary_action),
    )
}
