use super::args::{Cli, Commands};
use super::handlers;
use crate::config::{CONFIG_FILE_NAME, Config, resolve_workspace_path};
use crate::logging;
use crate::presentation::ListPresenter;
use crate::presentation::renderers::ConsoleRenderer;
use crate::types::{LogLevel, OutputFormat};
use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use shoplist_store::Database;
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let config_path = data_dir.join(CONFIG_FILE_NAME);
    let config = Config::load_from(&config_path)?;

    let command = cli.command.unwrap_or(Commands::Tui);
    let log_level = cli.log_level.or(config.log_level).unwrap_or(LogLevel::Info);

    match logging::init(&data_dir, log_level) {
        Ok(log_path) => tracing::debug!(path = %log_path.display(), "logging initialized"),
        // The terminal UI draws over stderr, so stay quiet there
        Err(e) if !matches!(command, Commands::Tui) => {
            eprintln!("Warning: logging disabled: {:#}", e);
        }
        Err(_) => {}
    }

    let db_path = config.database_path(cli.db.as_deref());
    let color = cli.format == OutputFormat::Plain && std::io::stdout().is_terminal();
    let renderer = ConsoleRenderer::new(cli.format == OutputFormat::Json, color);

    match command {
        Commands::Init { force } => {
            handlers::init::handle(&config_path, &db_path, log_level, force, &renderer)
        }

        Commands::Tui => {
            let presenter = open_presenter(&db_path)?;
            close_presenter(handlers::tui::handle(presenter)?)
        }

        Commands::List { all } => {
            let mut presenter = open_presenter(&db_path)?;
            handlers::list::handle(&mut presenter, all, &renderer)?;
            close_presenter(presenter)
        }

        Commands::Add {
            description,
            quantity,
            barcode,
        } => {
            let mut presenter = open_presenter(&db_path)?;
            handlers::item::add(
                &mut presenter,
                &description,
                &quantity,
                barcode.as_deref().unwrap_or(""),
                &renderer,
            )?;
            close_presenter(presenter)
        }

        Commands::Toggle { id } => {
            let mut presenter = open_presenter(&db_path)?;
            handlers::item::toggle(&mut presenter, id, &renderer)?;
            close_presenter(presenter)
        }

        Commands::Delete { id } => {
            let mut presenter = open_presenter(&db_path)?;
            handlers::item::delete(&mut presenter, id, &renderer)?;
            close_presenter(presenter)
        }

        Commands::Set { id, field, value } => {
            let mut presenter = open_presenter(&db_path)?;
            handlers::item::set(&mut presenter, id, &field, &value, &renderer)?;
            close_presenter(presenter)
        }
    }
}

fn open_presenter(db_path: &Path) -> Result<ListPresenter> {
    tracing::info!(db = %db_path.display(), "opening shopping list");
    let db = Database::open(db_path)
        .with_context(|| format!("Failed to open database: {}", db_path.display()))?;
    Ok(ListPresenter::new(db)?)
}

fn close_presenter(presenter: ListPresenter) -> Result<()> {
    presenter.close()?;
    tracing::info!("shopping list closed");
    Ok(())
}
