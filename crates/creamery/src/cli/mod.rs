//! Command-line interface for creamery.
//!
//! This module provides the CLI structure for the `creamery` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logging::Verbosity;

pub use commands::{
    BudgetCommand, CalcCommand, ConfigCommand, OutputFormat, RecipeArgs, RecipesCommand,
    StatusCommand,
};

/// creamery - Recipes, a calculator and a budget for making ice cream
///
/// Run without a command to open the interactive menu.
#[derive(Debug, Parser)]
#[command(name = "creamery")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute (defaults to `menu`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the interactive menu
    Menu,

    /// Press calculator keys and print the display
    Calc(CalcCommand),

    /// Track expenses and income
    #[command(subcommand)]
    Budget(BudgetCommand),

    /// Manage the recipe catalog
    #[command(subcommand)]
    Recipes(RecipesCommand),

    /// Show database location and record counts
    Status(StatusCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }

    /// The command to run, `menu` when none was given.
    #[must_use]
    pub fn command_or_menu(self) -> Command {
        self.command.unwrap_or(Command::Menu)
    }
}
