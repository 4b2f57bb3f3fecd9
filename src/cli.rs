use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::app::App;
use crate::config::Settings;

#[derive(Parser)]
#[command(name = "ghstreak")]
#[command(about = "GitHub contribution calendar, streaks, and repositories in the terminal")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug)]
pub struct CommonArgs {
    #[arg(long, short = 'u', global = true, help = "GitHub username")]
    pub user: Option<String>,

    #[arg(long, global = true, help = "GitHub token (defaults to $GITHUB_TOKEN)")]
    pub token: Option<String>,

    #[arg(long, global = true, help = "Path to config file (default: ./ghstreak.toml)")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Path to cache directory")]
    pub cache: Option<PathBuf>,

    #[arg(long, global = true, help = "Never call the GitHub API")]
    pub offline: bool,

    #[arg(long, global = true, help = "Read the contribution calendar from a saved JSON file")]
    pub calendar_file: Option<PathBuf>,

    #[arg(long, global = true, help = "Treat this date (YYYY-MM-DD) as today")]
    pub today: Option<String>,

    #[arg(long, global = true, help = "Reuse cached calendars younger than this (e.g. 30m, 2h)")]
    pub max_age: Option<String>,

    #[arg(long, global = true, help = "Seed for the simulated fallback calendar")]
    pub seed: Option<u64>,

    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase log verbosity")]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Current streak, longest streak, and total contributions
    Streak {
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    /// One-year contribution grid
    Calendar {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output one day per line as NDJSON")]
        ndjson: bool,

        #[arg(long = "interactive", alias = "tui", alias = "ui", help = "Enable interactive terminal UI")]
        interactive: bool,
    },
    /// Public repositories, most recently updated first
    Repos {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Only repositories in this language")]
        language: Option<String>,
    },
    /// Public profile summary
    Profile {
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    /// Manage the local calendar cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Subcommand, Clone, Copy)]
pub enum CacheAction {
    /// Drop the cached calendar for the user
    Clear,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::logging::init(self.common.verbose);

        let settings = Settings::resolve(&self.common).context("Failed to resolve settings")?;
        let mut app = App::new(settings).context("Failed to initialize")?;

        match self.command {
            Commands::Streak { json } => crate::streak::exec(&mut app, json),
            Commands::Calendar { json, ndjson, interactive } => {
                if interactive {
                    crate::tui::run(&mut app)
                } else {
                    crate::calendar::exec(&mut app, json, ndjson)
                }
            }
            Commands::Repos { json, language } => crate::repos::exec(&app, json, language),
            Commands::Profile { json } => crate::profile::exec(&app, json),
            Commands::Cache { action } => match action {
                CacheAction::Clear => crate::cache::exec_clear(&mut app),
            },
        }
    }
}
