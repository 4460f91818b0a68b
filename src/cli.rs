//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use buildbox::output::OutputConfig;

use crate::commands;

/// Buildbox - scaffold and drive disposable build-tool test fixtures
#[derive(Parser, Debug)]
#[command(name = "buildbox")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Materialize a fixture tree without invoking the build tool
    Scaffold(commands::scaffold::ScaffoldArgs),

    /// Scaffold a fixture and invoke the build tool against it
    Run(commands::run::RunArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let output = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            Commands::Scaffold(args) => commands::scaffold::execute(args, &output),
            Commands::Run(args) => commands::run::execute(args, &output),
        }
    }
}
