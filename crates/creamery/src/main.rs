//! `creamery` - CLI for the ice-cream toolbox
//!
//! Runs the interactive menu, or one budget, recipe or calculator action per
//! invocation.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;

use creamery::calculator::{tokenize, Calculator};
use creamery::cli::{
    BudgetCommand, CalcCommand, Cli, Command, ConfigCommand, OutputFormat, RecipesCommand,
};
use creamery::render;
use creamery::shell::Shell;
use creamery::{init_logging, Catalog, Config, Ledger, Storage};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    let config_path = cli.config.clone();
    let command = cli.command_or_menu();

    // These must work even when the configuration is broken
    match &command {
        Command::Config(ConfigCommand::Path) => {
            let path = config_path.unwrap_or_else(Config::default_config_path);
            println!("{}", path.display());
            return Ok(());
        }
        Command::Config(ConfigCommand::Validate { file }) => {
            return handle_validate(file.clone().or(config_path));
        }
        _ => {}
    }

    let config = Config::load_from(config_path).context("failed to load configuration")?;

    match command {
        Command::Menu => handle_menu(&config),
        Command::Budget(budget_cmd) => handle_budget(&config, budget_cmd),
        Command::Recipes(recipes_cmd) => handle_recipes(&config, recipes_cmd),
        Command::Status(status_cmd) => handle_status(&config, status_cmd.json),
        Command::Config(config_cmd) => handle_config(&config, &config_cmd),
        Command::Calc(calc_cmd) => handle_calc(&calc_cmd),
    }
}

fn open_storage(config: &Config) -> anyhow::Result<Storage> {
    let path = config.database_path();
    Storage::open(&path).with_context(|| format!("failed to open database {}", path.display()))
}

fn handle_menu(config: &Config) -> anyhow::Result<()> {
    let storage = open_storage(config)?;
    let stdin = io::stdin();
    let mut shell = Shell::new(&storage, config, stdin.lock(), io::stdout().lock());
    shell.run()?;
    Ok(())
}

fn handle_calc(cmd: &CalcCommand) -> anyhow::Result<()> {
    let mut calc = Calculator::new();
    for token in tokenize(&cmd.line())? {
        calc.handle_input(token);
    }

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&calc)?);
    } else {
        println!("{}", calc.display());
    }
    Ok(())
}

fn handle_budget(config: &Config, cmd: BudgetCommand) -> anyhow::Result<()> {
    let storage = open_storage(config)?;
    let ledger = Ledger::new(&storage);
    let symbol = &config.budget.currency_symbol;
    let mut out = io::stdout().lock();

    match cmd {
        BudgetCommand::Add {
            name,
            amount,
            income,
        } => {
            let expense = ledger.add_text(&name, &amount, BudgetCommand::entry_kind(income))?;
            writeln!(out, "{}", render::expense_line(&expense, symbol))?;
            render::write_balance(&mut out, &ledger.balance()?, false, symbol)?;
        }
        BudgetCommand::List { format } => {
            let expenses = ledger.list()?;
            render::write_expenses(&mut out, &expenses, format, symbol)?;
            if format != OutputFormat::Json {
                let balance = creamery::ledger::Balance::of(&expenses);
                writeln!(out, "{}", render::balance_line(&balance, symbol))?;
            }
        }
        BudgetCommand::Total { json } => {
            render::write_balance(&mut out, &ledger.balance()?, json, symbol)?;
        }
        BudgetCommand::Delete { id } => {
            ledger.delete_one(id)?;
            writeln!(out, "Deleted transaction #{id}")?;
            render::write_balance(&mut out, &ledger.balance()?, false, symbol)?;
        }
        BudgetCommand::Clear { yes } => {
            if config.budget.confirm_clear && !yes {
                let count = ledger.list()?.len();
                writeln!(out, "This will delete all {count} transactions.")?;
                writeln!(out, "Use --yes to confirm.")?;
            } else {
                let removed = ledger.delete_all()?;
                writeln!(out, "Deleted {removed} transactions.")?;
            }
        }
    }
    Ok(())
}

fn handle_recipes(config: &Config, cmd: RecipesCommand) -> anyhow::Result<()> {
    let storage = open_storage(config)?;
    let catalog = Catalog::new(&storage);
    let date_format = &config.recipes.date_format;
    let mut out = io::stdout().lock();

    match cmd {
        RecipesCommand::Add { name, fields } => {
            let recipe = catalog.add(fields.into_fields(name))?;
            writeln!(out, "Added recipe #{}", recipe.id.unwrap_or_default())?;
        }
        RecipesCommand::Edit { id, name, fields } => {
            let patch = fields.into_patch(name);
            if patch.is_empty() {
                writeln!(out, "Nothing to change. Pass at least one field option.")?;
                return Ok(());
            }
            let recipe = catalog.edit(id, patch)?;
            render::write_recipe_detail(&mut out, &recipe, false, date_format)?;
        }
        RecipesCommand::Delete { id } => {
            catalog.delete(id)?;
            writeln!(out, "Deleted recipe #{id}")?;
        }
        RecipesCommand::List { format } => {
            render::write_recipes(&mut out, &catalog.list()?, format, date_format)?;
        }
        RecipesCommand::Search { query, format } => {
            render::write_recipes(&mut out, &catalog.search(&query)?, format, date_format)?;
        }
        RecipesCommand::Show { id, json } => {
            render::write_recipe_detail(&mut out, &catalog.get(id)?, json, date_format)?;
        }
    }
    Ok(())
}

fn handle_status(config: &Config, json: bool) -> anyhow::Result<()> {
    let storage = open_storage(config)?;
    let stats = storage.stats()?;
    let balance = Ledger::new(&storage).balance()?;
    let symbol = &config.budget.currency_symbol;

    if json {
        let status = serde_json::json!({
            "database_path": storage.path(),
            "stats": stats,
            "balance": balance.total,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("creamery status");
        println!("---------------");
        println!("Database:      {}", storage.path().display());
        println!("Size:          {} bytes", stats.db_size_bytes);
        println!("Recipes:       {}", stats.recipe_count);
        println!("Transactions:  {}", stats.expense_count);
        println!("Balance:       {}", render::format_money(balance.total, symbol));
    }
    Ok(())
}

fn handle_validate(file: Option<std::path::PathBuf>) -> anyhow::Result<()> {
    let path = file.unwrap_or_else(Config::default_config_path);
    println!("Validating configuration: {}", path.display());
    Config::load_from(Some(path)).context("configuration is invalid")?;
    println!("Configuration is valid.");
    Ok(())
}

fn handle_config(config: &Config, cmd: &ConfigCommand) -> anyhow::Result<()> {
    if let ConfigCommand::Show { json: true } = cmd {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    println!("Current Configuration");
    println!("=====================");
    println!();
    println!("[Storage]");
    println!("  Database path:      {}", config.database_path().display());
    println!();
    println!("[Budget]");
    println!("  Currency symbol:    {}", config.budget.currency_symbol);
    println!("  Confirm clear:      {}", config.budget.confirm_clear);
    println!();
    println!("[Recipes]");
    println!("  Date format:        {}", config.recipes.date_format);
    println!();
    println!("[Shell]");
    println!("  Prompt:             {:?}", config.shell.prompt);
    Ok(())
}
