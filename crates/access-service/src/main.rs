use std::sync::Arc;

use carecore_core::telemetry;
use tracing::info;

use access_service::authz::AdminHeaderAuthorizer;
use access_service::config::Config;
use access_service::store::RedisEventStore;
use access_service::{AppState, app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    let _guard = telemetry::init_tracing(&config.observability_config(), "access-service")?;

    let redis_config = config.redis_config();
    let redis_client = redis::Client::open(redis_config.url.as_str())?;

    let state = AppState {
        event_store: Arc::new(RedisEventStore::new(redis_client)),
        authorizer: Arc::new(AdminHeaderAuthorizer::default()),
    };

    let app = app(state);

    let addr = config.server_addr();
    info!("Starting access-service on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
