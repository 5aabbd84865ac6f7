use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod config;
mod routes;

use config::{Secrets, ServerConfig};
use riftbot::{Bot, Services, StaticDataHandle};
use riftbot_upstream::{ChampionGgClient, RiotClient, StaticDataClient, TwitchClient};

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub bot: Arc<Bot>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "riftbot=info,riftbot_upstream=info,tower_http=info".into()),
        )
        .init();

    tracing::info!("Riftbot initializing...");

    let config = ServerConfig::load()?;
    let secrets = Secrets::from_env()?;

    if config.users.is_empty() {
        tracing::warn!("Profile map is empty - every command will be ignored");
    }

    let riot = Arc::new(RiotClient::new(secrets.riot_api_key.clone()));
    let builds = Arc::new(ChampionGgClient::new(secrets.championgg_api_key));
    let streams = Arc::new(TwitchClient::new(secrets.twitch_client_id));

    let services = Services {
        summoner: riot.clone(),
        ranked: riot.clone(),
        mastery: riot.clone(),
        matches: riot,
        builds,
        streams,
    };

    // Catalogs fill in the background; until they do, formatters fall back
    // to raw IDs rather than holding up startup.
    let statics = StaticDataHandle::default();
    let catalog_client = StaticDataClient::new(secrets.riot_api_key);
    {
        let statics = statics.clone();
        tokio::spawn(async move {
            statics.bootstrap(&catalog_client).await;
        });
    }

    let bot = Arc::new(Bot::new(services, statics, config.users));
    let state = AppState { bot };

    let router = Router::new()
        .route("/health", get(health_check))
        .merge(routes::commands::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(%port, "Riftbot ready");

    axum::serve(listener, router).await?;
    Ok(())
}
