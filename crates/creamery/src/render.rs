//! Text rendering shared by the command line and the interactive shell.

use std::fmt::Write as _;
use std::io::Write;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::expense::Expense;
use crate::ledger::Balance;
use crate::recipe::{Recipe, DATE_INPUT_FORMAT};

/// Format an amount with two decimals, a leading minus for negatives.
///
/// `-4.5` renders as `-$4.50`, `95.5` as `$95.50`.
#[must_use]
pub fn format_money(amount: Decimal, symbol: &str) -> String {
    let sign = if is_negative(amount) { "-" } else { "" };
    format!("{sign}{symbol}{:.2}", amount.abs().round_dp(2))
}

/// Like [`format_money`] but positive amounts get a `+`.
#[must_use]
pub fn format_signed_money(amount: Decimal, symbol: &str) -> String {
    let sign = if is_negative(amount) { "-" } else { "+" };
    format!("{sign}{symbol}{:.2}", amount.abs().round_dp(2))
}

fn is_negative(amount: Decimal) -> bool {
    amount.is_sign_negative() && !amount.round_dp(2).is_zero()
}

/// Format a date with a strftime pattern, falling back to `YYYY-MM-DD` if
/// the pattern is rejected.
#[must_use]
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.format(DATE_INPUT_FORMAT).to_string();
    }
    out
}

fn id_label(id: Option<i64>) -> String {
    id.map_or_else(|| "-".to_string(), |id| id.to_string())
}

/// One transaction as a single line.
#[must_use]
pub fn expense_line(expense: &Expense, symbol: &str) -> String {
    format!(
        "#{} {} {}",
        id_label(expense.id),
        expense.name,
        format_signed_money(expense.cost, symbol)
    )
}

/// The balance line shown under the transaction list.
#[must_use]
pub fn balance_line(balance: &Balance, symbol: &str) -> String {
    format!("Balance: {}", format_money(balance.total, symbol))
}

/// Write transactions in the requested format.
///
/// # Errors
///
/// Returns an error if writing or JSON encoding fails.
pub fn write_expenses<W: Write>(
    out: &mut W,
    expenses: &[Expense],
    format: OutputFormat,
    symbol: &str,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, &expenses)?,
        OutputFormat::Plain => {
            if expenses.is_empty() {
                writeln!(out, "No transactions yet.")?;
            }
            for expense in expenses {
                writeln!(out, "{}", expense_line(expense, symbol))?;
            }
        }
        OutputFormat::Table => {
            writeln!(out, "{:>5}  {:<30}  {:>12}  {:<10}", "ID", "NAME", "AMOUNT", "DATE")?;
            for expense in expenses {
                writeln!(
                    out,
                    "{:>5}  {:<30}  {:>12}  {:<10}",
                    id_label(expense.id),
                    truncate(&expense.name, 30),
                    format_signed_money(expense.cost, symbol),
                    expense.created_at.format(DATE_INPUT_FORMAT),
                )?;
            }
        }
    }
    Ok(())
}

/// Write the balance, as plain text or JSON.
///
/// # Errors
///
/// Returns an error if writing or JSON encoding fails.
pub fn write_balance<W: Write>(out: &mut W, balance: &Balance, json: bool, symbol: &str) -> Result<()> {
    if json {
        #[derive(Serialize)]
        struct BalanceJson<'a> {
            total: Decimal,
            formatted: String,
            transactions: usize,
            in_the_green: bool,
            currency_symbol: &'a str,
        }

        write_json(
            out,
            &BalanceJson {
                total: balance.total,
                formatted: format_money(balance.total, symbol),
                transactions: balance.transactions,
                in_the_green: balance.is_in_the_green(),
                currency_symbol: symbol,
            },
        )
    } else {
        writeln!(out, "{}", balance_line(balance, symbol))?;
        Ok(())
    }
}

/// Write recipes in the requested format.
///
/// # Errors
///
/// Returns an error if writing or JSON encoding fails.
pub fn write_recipes<W: Write>(
    out: &mut W,
    recipes: &[Recipe],
    format: OutputFormat,
    date_format: &str,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, &recipes)?,
        OutputFormat::Plain => {
            if recipes.is_empty() {
                writeln!(out, "No recipes found.")?;
            }
            for recipe in recipes {
                writeln!(
                    out,
                    "#{} {} (last made {})",
                    id_label(recipe.id),
                    recipe.name,
                    format_date(recipe.last_made, date_format)
                )?;
            }
        }
        OutputFormat::Table => {
            writeln!(out, "{:>5}  {:<30}  {:<16}  {:<5}", "ID", "NAME", "LAST MADE", "LINK")?;
            for recipe in recipes {
                writeln!(
                    out,
                    "{:>5}  {:<30}  {:<16}  {:<5}",
                    id_label(recipe.id),
                    truncate(&recipe.name, 30),
                    format_date(recipe.last_made, date_format),
                    if recipe.tutorial_url().is_some() { "yes" } else { "" },
                )?;
            }
        }
    }
    Ok(())
}

/// Write every field of one recipe.
///
/// # Errors
///
/// Returns an error if writing or JSON encoding fails.
pub fn write_recipe_detail<W: Write>(
    out: &mut W,
    recipe: &Recipe,
    json: bool,
    date_format: &str,
) -> Result<()> {
    if json {
        return write_json(out, recipe);
    }

    writeln!(out, "{}", recipe.name)?;
    writeln!(out, "{}", "=".repeat(recipe.name.chars().count().max(1)))?;
    writeln!(out, "Last made:   {}", format_date(recipe.last_made, date_format))?;
    match recipe.tutorial_url() {
        Some(url) => writeln!(out, "Tutorial:    {url}")?,
        None if !recipe.tutorial_link.trim().is_empty() => {
            writeln!(out, "Tutorial:    {} (not a link)", recipe.tutorial_link.trim())?;
        }
        None => {}
    }
    writeln!(out)?;
    writeln!(out, "Ingredients:")?;
    write_block(out, &recipe.ingredients)?;
    writeln!(out)?;
    writeln!(out, "Notes:")?;
    write_block(out, &recipe.notes)?;
    Ok(())
}

fn write_block<W: Write>(out: &mut W, text: &str) -> Result<()> {
    if text.trim().is_empty() {
        writeln!(out, "  (none)")?;
    }
    for line in text.lines() {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    short.push('…');
    short
}
