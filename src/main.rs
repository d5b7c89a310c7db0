// src/main.rs

use chat_relay::{app, config::Config, ChatState};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// The main entry point for our application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = config.socket_addr()?;
    let app = app(ChatState::new());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Chat relay listening on http://{} (websocket at /ws)", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
