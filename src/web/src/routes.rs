use crate::GameAppData;
use crate::common::default_handler::default_handler;
use crate::game::game_routes;
use crate::leagues::league_routes;
use crate::r#match::routes::match_routes;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<GameAppData> {
        Router::<GameAppData>::new()
            .merge(league_routes())
            .merge(game_routes())
            .merge(match_routes())
            .fallback(default_handler)
    }
}
