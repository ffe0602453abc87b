//! TUI Renderer
//!
//! Runs the terminal event loop around a `TabContainer`.
//!
//! ## Design:
//! - The container owns the data and the component state
//! - The renderer owns the terminal: raw mode, alternate screen, cleanup
//! - Each pass draws, waits up to one tick for input, then routes the key

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::presentation::views::tui::TabContainer;

pub struct TuiRenderer {
    container: TabContainer,
    tick_rate: Duration,
}

impl TuiRenderer {
    pub fn new(container: TabContainer, tick_rate: Duration) -> Self {
        Self {
            container,
            tick_rate,
        }
    }

    /// Take over the terminal until the user quits
    ///
    /// The terminal is restored before the loop's result is returned, so an
    /// error inside the loop still leaves the shell usable.
    pub fn run(mut self) -> Result<TabContainer> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        tracing::info!(
            event = "cli.tui.started",
            dishes = self.container.store().len(),
            tick_ms = self.tick_rate.as_millis() as u64,
            "TUI started"
        );

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        tracing::info!(
            event = "cli.tui.stopped",
            dishes = self.container.store().len(),
            ok = result.is_ok(),
            "TUI stopped"
        );

        result.map(|_| self.container)
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        while !self.container.should_quit() {
            terminal.draw(|f| self.container.render(f))?;

            // Resize and other events only trigger the redraw at the top of the loop
            if event::poll(self.tick_rate)?
                && let Event::Key(key) = event::read()?
            {
                self.container.handle_input(key);
            }
        }

        Ok(())
    }
}
