use anyhow::Result;
use text_classifier::{config, server};
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

fn init_tracing(level: &str) -> Result<()> {
    level.parse::<LevelFilter>().map_err(|_| {
        anyhow::anyhow!(
            "Unknown log level '{}', expected one of: error, warn, info, debug, trace",
            level
        )
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .json()
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // No subscriber yet, so configuration problems go to stderr
    let config = config::load().await.unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_tracing(&config.server.logs.level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    info!(
        "Text classifier starting in {} mode (log level {})",
        config.model.env, config.server.logs.level
    );

    if let Err(e) = server::run(config).await {
        if e.is_fatal() {
            error!("Startup aborted: {}", e);
        } else {
            error!("Server stopped: {}", e);
        }
        std::process::exit(1);
    }

    Ok(())
}
