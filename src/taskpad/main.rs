use clap::Parser;
use taskpad::config::ServerConfig;
use taskpad::server::{build_router, AppState};
use taskpad::store::TodoStore;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod args;
use args::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "taskpad=debug,tower_http=debug"
    } else {
        "taskpad=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()
        .with_host(cli.host)
        .with_port(cli.port);

    let state = AppState::new(TodoStore::seeded());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    info!(addr = %listener.local_addr()?, "taskpad listening");
    axum::serve(listener, app).await?;

    Ok(())
}
