//! Pokedex CLI - An interactive explorer for the PokeAPI catalog
//!
//! Wires configuration, the cached repository and the prompt loop together.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_cli::repl::{self, Session};
use pokedex_cli::{Config, PokeApi};

/// Main entry point for the Pokedex explorer.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber (stderr, so it stays out of the prompt)
/// 2. Load configuration from environment variables
/// 3. Build the cache, which starts its reaper, and the repository
/// 4. Run the prompt loop until `exit` or end of input
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn", can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_cli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: base_url={}, cache_interval={}s, page_size={}",
        config.base_url, config.cache_interval, config.page_size
    );

    // The reaper is never joined; it is abandoned when the process exits
    let api = PokeApi::from_config(&config);
    let mut session = Session::new(api, config.page_size);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    repl::run(&mut session, stdin, &mut stdout)
        .await
        .context("prompt loop failed")?;

    info!("Pokedex closed");
    Ok(())
}
