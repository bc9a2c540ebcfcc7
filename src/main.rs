use anyhow::Result;
use tracing_subscriber::EnvFilter;

use linkcut::config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(&config);
    config.print_summary();

    linkcut::server::run(config).await
}

/// Initializes the tracing subscriber from the loaded configuration.
///
/// `RUST_LOG` takes priority over the configured level when set.
fn init_tracing(config: &config::Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
