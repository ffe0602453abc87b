use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "menucard")]
#[command(about = "Browse and add restaurant menu items in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to $MENUCARD_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Write JSON logs to this file (defaults to $MENUCARD_LOG; off when unset)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the menu with a few sample dishes already added
    Demo,

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved config file path
    Path,

    /// Print the effective configuration
    Show,

    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
