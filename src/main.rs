use clap::Parser;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uiform::cli::Cli;
use uiform::config::Settings;

/// RUST_LOG wins over the configured level
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // One-shot commands run without server settings
    if cli.is_one_shot() {
        init_tracing("info");
        let mut stdout = std::io::stdout().lock();
        return uiform::commands::run_one_shot(&cli, &mut stdout);
    }

    // Load configuration
    let settings = Settings::new_with_cli(&cli)?;
    init_tracing(&settings.logging.level);

    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Starting uiform on {}:{}", host, port);

    let settings = Arc::new(RwLock::new(settings));
    let app = uiform::create_app(settings);

    // Start server
    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
