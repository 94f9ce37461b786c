use std::net::SocketAddr;
use kingdom_api::{app, app_config::Config, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kingdom_api=debug,kingdom_order=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!("Starting Kingdom storefront API on port {}", config.server.port);

    let app_state = AppState::from_config(&config)?;
    tracing::info!(
        "Catalog ready: {} bots, {} add-ons, {} bundles in {}",
        app_state.catalogs.items.len(),
        app_state.catalogs.add_ons.len(),
        app_state.catalogs.bundles.len(),
        app_state.catalogs.currency
    );

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
