use crate::config::Config;
use crate::presentation::renderers::ConsoleRenderer;
use crate::types::LogLevel;
use anyhow::{Context, Result, bail};
use shoplist_store::Database;
use std::path::Path;

/// Write `config.toml` pinning the database to an absolute path, and create
/// the database file if it does not exist yet.
pub fn handle(
    config_path: &Path,
    db_path: &Path,
    log_level: LogLevel,
    force: bool,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Config already exists: {} (use --force to overwrite)",
            config_path.display()
        );
    }

    let database = std::path::absolute(db_path)
        .with_context(|| format!("Failed to resolve database path: {}", db_path.display()))?;

    Database::open(&database)
        .with_context(|| format!("Failed to open database: {}", database.display()))?
        .close()?;

    let config = Config {
        database: Some(database),
        log_level: Some(log_level),
    };
    config.save_to(config_path)?;
    tracing::info!(path = %config_path.display(), "wrote config");

    let mut out = std::io::stdout().lock();
    renderer.render_outcome(
        &mut out,
        &format!("Wrote {}", config_path.display()),
        &config,
    )
}
