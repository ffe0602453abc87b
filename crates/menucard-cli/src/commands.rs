use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::logging;
use anyhow::Result;
use menucard_runtime::{Config, DishIdGenerator, MenuStore, resolve_config_path};

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_file.as_deref(), cli.log_level)?;

    let config_path = resolve_config_path(cli.config.as_deref())?;
    tracing::debug!(event = "cli.config.resolved", path = %config_path.display());

    match cli.command {
        None => {
            let config = Config::load_from(&config_path)?;
            handlers::tui::handle(&config, MenuStore::new(), DishIdGenerator::new())
        }

        Some(Commands::Demo) => {
            let config = Config::load_from(&config_path)?;
            handlers::demo::handle(&config)
        }

        Some(Commands::Config { command }) => match command {
            ConfigCommand::Path => handlers::config::handle_path(&config_path),
            ConfigCommand::Show => handlers::config::handle_show(&config_path, cli.format),
            ConfigCommand::Init { force } => {
                handlers::config::handle_init(&config_path, force, cli.format)
            }
        },
    }
}
