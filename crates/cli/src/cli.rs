use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{generate_command, init_command, locate_command};

#[derive(Parser, Debug)]
#[command(name = "pycharm-workspace")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register the project interpreter in PyCharm and write the .idea directory
    #[command(visible_alias = "g")]
    Generate {
        /// Properties file (JSON or TOML). Defaults to pycharm-workspace.json
        /// or pycharm-workspace.toml in the current directory
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Set a property, overriding the properties file (e.g. -D dir_target=build)
        #[arg(short = 'D', long = "define", value_name = "KEY=VALUE")]
        defines: Vec<String>,

        /// Directory searched for PyCharm configuration (defaults to the home directory)
        #[arg(long)]
        home: Option<PathBuf>,
    },
    /// Write a starter properties file for a project
    Init {
        /// Project directory (defaults to current directory)
        #[arg(long)]
        cwd: Option<PathBuf>,

        /// Overwrite an existing properties file
        #[arg(short, long)]
        force: bool,
    },
    /// Print the PyCharm config-options directory that would be used
    Locate {
        /// PyCharm main version prefix
        #[arg(long, default_value = "2019")]
        pycharm_version: String,

        /// Directory searched for PyCharm configuration (defaults to the home directory)
        #[arg(long)]
        home: Option<PathBuf>,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        tracing::debug!("Executing {:?}", self);
        match self {
            Commands::Generate {
                config,
                defines,
                home,
            } => generate_command(config.as_deref(), &defines, home.as_deref()),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
            Commands::Locate {
                pycharm_version,
                home,
            } => locate_command(&pycharm_version, home.as_deref()),
        }
    }
}
