use clap::Parser;
use lunch_roulette_backend::config::Config;
use lunch_roulette_backend::{create_router, initialize_backend};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lunch_roulette_backend=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();

    let app_state = initialize_backend(&config.database_url).await?;
    let app = create_router(app_state, &config)?;

    info!("Starting server on {}", config.bind);
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("Listening on {}", config.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
