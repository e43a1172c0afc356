use nova_core::utils::TimeEstimation;
use database::{DatabaseGenerator, DatabaseLoader};
use env_logger::Env;
use log::info;
use std::env;
use std::sync::Arc;
use tokio::sync::RwLock;
use web::{GameAppData, LeagueServer, Narrator};

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() {
    color_eyre::install().unwrap();

    env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();

    let seed = env::var("SEED").ok().and_then(|value| value.parse::<u64>().ok());

    if let Some(seed) = seed {
        info!("running with fixed seed: {}", seed);
    }

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);

    info!("database loaded: {} ms", estimated);

    let game_data = DatabaseGenerator::generate(&database, seed);

    let data = GameAppData {
        data: Arc::new(RwLock::new(Some(game_data))),
        narrator: Arc::new(Narrator::from_env()),
    };

    LeagueServer::new(data).run().await;
}
