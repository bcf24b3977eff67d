use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pmp_dashboard::{router, AppState};
use pmp_core::constants::{FIXTURE_FILE_ENV, LISTEN_ADDR_ENV};
use pmp_core::{Dashboard, DashboardConfig, Fixtures};

/// Main entry point for the PMP dashboard
///
/// Builds the dashboard content once (fixtures, then the recommendation matcher) and serves the
/// page over HTTP until the process is stopped.
///
/// # Environment Variables
/// - `PMP_ADDR`: listen address (default: "127.0.0.1:8501")
/// - `PMP_FIXTURE_FILE`: YAML file replacing the built-in patient and vitals fixtures
/// - `RUST_LOG`: tracing filter (default directive: "pmp=info")
///
/// # Errors
/// Returns an error if:
/// - the configuration is invalid,
/// - the fixture file cannot be read or parsed,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("pmp=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = DashboardConfig::from_env_values(
        std::env::var(LISTEN_ADDR_ENV).ok(),
        std::env::var(FIXTURE_FILE_ENV).ok(),
    )?;

    let fixtures = Fixtures::resolve(cfg.fixture_file())?;
    let state = AppState::new(Dashboard::new(fixtures));

    tracing::info!("++ Starting PMP dashboard on http://{}", cfg.listen_addr());

    let listener = tokio::net::TcpListener::bind(cfg.listen_addr()).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
