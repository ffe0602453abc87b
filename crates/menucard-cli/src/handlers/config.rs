use std::path::Path;

use anyhow::Result;
use menucard_runtime::Config;

use crate::presentation::presenters::present_config;
use crate::presentation::view_models::{CommandResultViewModel, Guidance, StatusBadge};
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;

pub fn handle_path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

pub fn handle_show(config_path: &Path, format: OutputFormat) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let view_model = present_config(config_path, &config);

    let mut result = CommandResultViewModel::new(view_model);
    if !config_path.exists() {
        result = result
            .with_badge(StatusBadge::info("No config file, using defaults"))
            .with_suggestion(
                Guidance::new("Write the defaults to disk").with_command("menucard config init"),
            );
    }

    ConsoleRenderer::new(format == OutputFormat::Json).render(result)
}

pub fn handle_init(config_path: &Path, force: bool, format: OutputFormat) -> Result<()> {
    let config = Config::init_at(config_path, force)?;
    tracing::info!(
        event = "cli.config.initialized",
        path = %config_path.display(),
        force,
        "Config written"
    );

    let result = CommandResultViewModel::new(present_config(config_path, &config))
        .with_badge(StatusBadge::success("Config file written"));

    ConsoleRenderer::new(format == OutputFormat::Json).render(result)
}
