use std::process::ExitCode;

use access_server::config::{AppConfig, StopSource};
use access_server::feed::{FeedClient, FeedConfig};
use access_server::logging;
use access_server::store::StopStore;
use access_server::web::{AppState, create_router};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init("info");

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    // Load stops once (fail fast if unavailable)
    let store = match &config.stops {
        StopSource::File(path) => StopStore::from_json_file(path)?,
        StopSource::Feed(url) => {
            let feed = FeedConfig::new(url.clone()).with_timeout(config.feed_timeout_secs);
            StopStore::fetch(&FeedClient::new(feed)?).await?
        }
    };
    info!(count = store.len(), "stop store ready");

    match config.stop_radius_km {
        Some(km) => info!(km, "nearby-stops query limited by distance"),
        None => info!("nearby-stops query returns all accessible stops"),
    }

    let state = AppState::new(store, config.stop_radius_km);
    let app = create_router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("accessible stop finder listening on http://{addr}");
    info!("  GET /health            - Health check");
    info!("  GET /stops?lat=&lon=   - Accessible stops near a point");
    info!("  GET /stop/{{stop_id}}    - Look up a stop by id");

    axum::serve(listener, app).await?;
    Ok(())
}
