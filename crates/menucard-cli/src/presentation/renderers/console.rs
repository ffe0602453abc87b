use std::io::{self, Write};

use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, CreateView};

pub struct ConsoleRenderer {
    json_mode: bool,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            color: io::stdout().is_terminal(),
        }
    }

    /// Write the result to `out` instead of stdout
    pub fn render_to<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
        W: Write,
    {
        if self.json_mode {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            if self.color {
                writeln!(out, "{} {}", badge.icon(), badge.label.bold())?;
            } else {
                writeln!(out, "{} {}", badge.icon(), badge.label)?;
            }
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view())?;

        if !result.suggestions.is_empty() {
            if self.color {
                writeln!(out, "\n{}", "Tips:".yellow().bold())?;
            } else {
                writeln!(out, "\nTips:")?;
            }
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if self.color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, &result)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{ConfigViewModel, Guidance, StatusBadge};

    fn sample() -> CommandResultViewModel<ConfigViewModel> {
        CommandResultViewModel::new(ConfigViewModel {
            path: "/tmp/menucard/config.toml".to_string(),
            exists: false,
            title: "Tonight's Dining Selection".to_string(),
            currency_label: "R".to_string(),
            tick_rate_ms: 250,
        })
        .with_badge(StatusBadge::info("Using defaults"))
        .with_suggestion(Guidance::new("Create a config file").with_command("menucard config init"))
    }

    #[test]
    fn test_plain_output_without_color() {
        let renderer = ConsoleRenderer {
            json_mode: false,
            color: false,
        };
        let mut out = Vec::new();
        renderer.render_to(&mut out, &sample()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Using defaults"));
        assert!(text.contains("Tonight's Dining Selection"));
        assert!(text.contains("  • Create a config file: menucard config init"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_json_output_is_parseable() {
        let renderer = ConsoleRenderer {
            json_mode: true,
            color: false,
        };
        let mut out = Vec::new();
        renderer.render_to(&mut out, &sample()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["content"]["currency_label"], "R");
        assert_eq!(value["badge"]["level"], "info");
        assert_eq!(value["suggestions"][0]["command"], "menucard config init");
    }
}
