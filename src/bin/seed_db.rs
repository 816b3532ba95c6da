use log::{error, info};
use service::{config::Config, logging::Logger};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let config = Config::new();
    Logger::init_logger(&config as &Config);

    info!(
        "Seeding the Marquee database [{}] with sample accounts and a catalog...",
        config.database_url()
    );

    let db = match service::init_database(&config).await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    let app_state = service::AppState::new(config, &db);

    entity_api::seed_database(app_state.db_conn_ref()).await;

    info!("Seeding finished; log in as admin@marquee.local or demo@marquee.local");
}
