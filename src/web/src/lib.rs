mod common;
mod error;
mod game;
mod leagues;
mod r#match;
pub mod news;
mod routes;

pub use error::{ApiError, ApiResult};
pub use news::Narrator;

use crate::routes::ServerRoutes;
use axum::response::IntoResponse;
use nova_core::SimulatorData;
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct LeagueServer {
    data: GameAppData,
}

impl LeagueServer {
    pub fn new(data: GameAppData) -> Self {
        LeagueServer { data }
    }

    pub async fn run(&self) {
        let app = ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        (
                            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                            "Internal server error - handler panicked".to_string(),
                        )
                            .into_response()
                    })),
            )
            .with_state(self.data.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], 18000));

        let listener = match TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) => {
                error!("Failed to bind to address {}: {}", addr, e);
                panic!("Cannot start server without binding to port");
            }
        };

        info!("listen at: http://localhost:18000");

        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
            error!("Server stopped unexpectedly, but not crashing the process");
        }
    }
}

pub struct GameAppData {
    pub data: Arc<RwLock<Option<SimulatorData>>>,
    pub narrator: Arc<Narrator>,
}

impl Clone for GameAppData {
    fn clone(&self) -> Self {
        GameAppData {
            data: Arc::clone(&self.data),
            narrator: Arc::clone(&self.narrator),
        }
    }
}
