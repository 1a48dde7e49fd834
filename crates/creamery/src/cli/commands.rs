//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};

use crate::expense::EntryKind;
use crate::recipe::{parse_date, RecipeFields, RecipePatch};

/// Calculator command arguments.
#[derive(Debug, Args)]
pub struct CalcCommand {
    /// Keys to press, e.g. `7 x 8 =` or `12*3=`
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub keys: Vec<String>,

    /// Print the full calculator state as JSON
    #[arg(short, long)]
    pub json: bool,
}

impl CalcCommand {
    /// The keys joined back into one line for the tokenizer.
    #[must_use]
    pub fn line(&self) -> String {
        self.keys.join(" ")
    }
}

/// Budget commands.
#[derive(Debug, Subcommand)]
pub enum BudgetCommand {
    /// Record an expense (or income with --income)
    Add {
        /// What the money was for
        name: String,

        /// Amount, e.g. 4.50 or $4.50
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Record money received instead of money spent
        #[arg(short, long)]
        income: bool,
    },

    /// List transactions, newest first
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "plain")]
        format: OutputFormat,
    },

    /// Show the running balance
    Total {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Delete one transaction
    Delete {
        /// Transaction id
        id: i64,
    },

    /// Delete every transaction
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

impl BudgetCommand {
    /// Expense or income for an `add` command.
    #[must_use]
    pub fn entry_kind(income: bool) -> EntryKind {
        EntryKind::from_is_expense(!income)
    }
}

/// Recipe field options shared by `add` and `edit`.
#[derive(Debug, Default, Args)]
pub struct RecipeArgs {
    /// Ingredients, free text
    #[arg(long)]
    pub ingredients: Option<String>,

    /// Last day the recipe was made (YYYY-MM-DD)
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date_arg)]
    pub last_made: Option<NaiveDate>,

    /// Link to a tutorial
    #[arg(long)]
    pub link: Option<String>,

    /// Free-text notes
    #[arg(long)]
    pub notes: Option<String>,
}

fn parse_date_arg(text: &str) -> Result<NaiveDate, String> {
    parse_date(text).map_err(|e| e.to_string())
}

impl RecipeArgs {
    /// Fields for a new recipe; unset options stay empty, date defaults to today.
    #[must_use]
    pub fn into_fields(self, name: String) -> RecipeFields {
        let mut fields = RecipeFields::named(name);
        if let Some(ingredients) = self.ingredients {
            fields = fields.with_ingredients(ingredients);
        }
        if let Some(last_made) = self.last_made {
            fields = fields.with_last_made(last_made);
        }
        if let Some(link) = self.link {
            fields = fields.with_tutorial_link(link);
        }
        if let Some(notes) = self.notes {
            fields = fields.with_notes(notes);
        }
        fields
    }

    /// An edit touching only the options that were given.
    #[must_use]
    pub fn into_patch(self, name: Option<String>) -> RecipePatch {
        RecipePatch {
            name,
            ingredients: self.ingredients,
            last_made: self.last_made,
            tutorial_link: self.link,
            notes: self.notes,
        }
    }
}

/// Recipe commands.
#[derive(Debug, Subcommand)]
pub enum RecipesCommand {
    /// Add a recipe
    Add {
        /// Recipe name
        name: String,

        #[command(flatten)]
        fields: RecipeArgs,
    },

    /// Change fields of a recipe
    Edit {
        /// Recipe id
        id: i64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        fields: RecipeArgs,
    },

    /// Delete a recipe
    Delete {
        /// Recipe id
        id: i64,
    },

    /// List recipes, newest first
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "plain")]
        format: OutputFormat,
    },

    /// Find recipes whose name contains the query
    Search {
        /// Text to look for, case-insensitive
        query: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "plain")]
        format: OutputFormat,
    },

    /// Show every field of a recipe
    Show {
        /// Recipe id
        id: i64,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// Formatted table
    Table,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }

    #[test]
    fn test_calc_line_joins_keys() {
        let cmd = CalcCommand {
            keys: vec!["7".to_string(), "x".to_string(), "8".to_string(), "=".to_string()],
            json: false,
        };
        assert_eq!(cmd.line(), "7 x 8 =");
    }

    #[test]
    fn test_entry_kind_from_income_flag() {
        assert_eq!(BudgetCommand::entry_kind(false), EntryKind::Expense);
        assert_eq!(BudgetCommand::entry_kind(true), EntryKind::Income);
    }

    #[test]
    fn test_recipe_args_into_fields() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let args = RecipeArgs {
            ingredients: Some("cream".to_string()),
            last_made: Some(date),
            link: None,
            notes: None,
        };
        let fields = args.into_fields("Plain".to_string());
        assert_eq!(fields.name, "Plain");
        assert_eq!(fields.ingredients, "cream");
        assert_eq!(fields.last_made, date);
        assert_eq!(fields.tutorial_link, "");
    }

    #[test]
    fn test_recipe_args_into_patch() {
        let args = RecipeArgs {
            notes: Some("softer".to_string()),
            ..RecipeArgs::default()
        };
        let patch = args.into_patch(None);
        assert_eq!(patch.notes.as_deref(), Some("softer"));
        assert!(patch.name.is_none());
        assert!(patch.last_made.is_none());

        assert!(RecipeArgs::default().into_patch(None).is_empty());
    }

    #[test]
    fn test_parse_date_arg() {
        assert!(parse_date_arg("2025-02-30").is_err());
        assert!(parse_date_arg("2025-02-28").is_ok());
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
