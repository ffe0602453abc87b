use anyhow::Result;
use menucard_runtime::{Config, DishIdGenerator, MenuStore};

use crate::presentation::TuiRenderer;
use crate::presentation::views::tui::TabContainer;

pub fn handle(config: &Config, store: MenuStore, ids: DishIdGenerator) -> Result<()> {
    let container = TabContainer::new(config.display.clone(), store, ids);
    let renderer = TuiRenderer::new(container, config.ui.tick_rate());

    let container = renderer.run()?;
    tracing::debug!(
        event = "cli.tui.exited",
        dishes = container.store().len(),
        "Session ended; menu discarded"
    );

    Ok(())
}
