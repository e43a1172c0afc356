pub mod process;

use crate::GameAppData;
use axum::Router;
use axum::routing::post;

pub fn game_routes() -> Router<GameAppData> {
    Router::new().route("/game/process", post(process::game_process_action))
}
