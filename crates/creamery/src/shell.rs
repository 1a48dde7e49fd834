//! Interactive navigation shell.
//!
//! A line-oriented front end over any [`BufRead`] and [`Write`]: a menu of
//! tools, and one screen per tool. Every screen gets the store and the
//! configuration from the [`Shell`] that runs it and hands control back with
//! a [`Flow`]. Screens never hold state between visits; whatever they show
//! is read from the store after each change.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::calculator::{tokenize, Calculator};
use crate::catalog::Catalog;
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::expense::EntryKind;
use crate::ledger::Ledger;
use crate::recipe::{parse_date, RecipeFields, RecipePatch};
use crate::render;
use crate::storage::{ExpenseStore, RecipeStore};

const TITLE: &str = "Let's Make Some Ice Cream!";
const SUBTITLE: &str = "Pick a tool to get started";
const CLEAR_ANSWER: &str = "-";

/// What to do when a screen is dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Return to the menu.
    Back,
    /// Leave the program.
    Quit,
}

/// The tools reachable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Recipe catalog.
    Recipes,
    /// Integer calculator.
    Calculator,
    /// Expense ledger.
    Budget,
}

impl Tool {
    /// Menu order.
    pub const ALL: [Tool; 3] = [Tool::Recipes, Tool::Calculator, Tool::Budget];

    /// Menu label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Recipes => "Recipes",
            Self::Calculator => "Calculator",
            Self::Budget => "Budget",
        }
    }

    /// Resolve a menu choice typed as a number or a name.
    #[must_use]
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim().to_lowercase().as_str() {
            "1" | "recipes" | "recipe" | "r" => Some(Self::Recipes),
            "2" | "calculator" | "calc" | "c" => Some(Self::Calculator),
            "3" | "budget" | "b" => Some(Self::Budget),
            _ => None,
        }
    }
}

/// Split off the first word of `line`, returning it and the trimmed rest.
fn split_word(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    }
}

fn parse_id(text: &str) -> Option<i64> {
    text.trim().trim_start_matches('#').parse().ok()
}

/// Interpret an edit prompt reply: blank keeps the field, `-` empties it.
fn edit_answer(reply: &str) -> Option<String> {
    match reply.trim() {
        "" => None,
        CLEAR_ANSWER => Some(String::new()),
        other => Some(other.to_string()),
    }
}

fn is_quit(line: &str) -> bool {
    matches!(line, "q" | "quit" | "exit")
}

/// The interactive shell.
#[derive(Debug)]
pub struct Shell<'a, S: ?Sized, R, W> {
    store: &'a S,
    config: &'a Config,
    input: R,
    output: W,
}

impl<'a, S, R, W> Shell<'a, S, R, W>
where
    S: ExpenseStore + RecipeStore + ?Sized,
    R: BufRead,
    W: Write,
{
    /// Create a shell over a store, configuration and I/O handles.
    pub fn new(store: &'a S, config: &'a Config, input: R, output: W) -> Self {
        Self {
            store,
            config,
            input,
            output,
        }
    }

    /// Give back the output handle.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Show the menu until the user quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading, writing or the store fails. Mistakes in
    /// user input are reported on the output and do not end the loop.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };
            let choice = line.trim();
            if choice.is_empty() {
                continue;
            }
            if is_quit(&choice.to_lowercase()) {
                break;
            }

            let Some(tool) = Tool::parse(choice) else {
                writeln!(self.output, "Unknown choice: {choice}")?;
                continue;
            };
            debug!(tool = tool.label(), "Opening screen");

            let flow = match tool {
                Tool::Recipes => self.recipes_screen()?,
                Tool::Calculator => self.calculator_screen()?,
                Tool::Budget => self.budget_screen()?,
            };
            if flow == Flow::Quit {
                break;
            }
        }
        writeln!(self.output, "Bye!")?;
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{TITLE}")?;
        writeln!(self.output, "{SUBTITLE}")?;
        writeln!(self.output)?;
        for (index, tool) in Tool::ALL.iter().enumerate() {
            writeln!(self.output, "  {}. {}", index + 1, tool.label())?;
        }
        writeln!(self.output, "  q. Quit")?;
        Ok(())
    }

    /// Print the prompt and read one line. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        write!(self.output, "{}", self.config.shell.prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Ask for one field. `None` at end of input.
    fn ask(&mut self, label: &str, current: Option<&str>) -> Result<Option<String>> {
        match current {
            Some(value) if !value.is_empty() => writeln!(self.output, "{label} [{value}]:")?,
            _ => writeln!(self.output, "{label}:")?,
        }
        self.read_line()
    }

    /// Report a user mistake and keep going; anything else is fatal.
    fn recover(&mut self, result: Result<()>) -> Result<()> {
        match result {
            Err(err) if err.is_user_error() => {
                writeln!(self.output, "Error: {err}")?;
                Ok(())
            }
            other => other,
        }
    }

    /// The calculator screen. Each line is a sequence of keys.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn calculator_screen(&mut self) -> Result<Flow> {
        let mut calc = Calculator::new();
        writeln!(self.output, "Calculator (keys: 0-9 + - x / = AC del; `back` returns)")?;
        writeln!(self.output, "{}", calc.display())?;

        loop {
            let Some(line) = self.read_line()? else {
                return Ok(Flow::Quit);
            };
            let line = line.trim();
            match line {
                "" => continue,
                "back" => return Ok(Flow::Back),
                _ if is_quit(line) => return Ok(Flow::Quit),
                _ => {}
            }

            match tokenize(line) {
                Ok(tokens) => {
                    for token in tokens {
                        calc.handle_input(token);
                    }
                    writeln!(self.output, "{}", calc.display())?;
                }
                Err(err) => writeln!(self.output, "Error: {err}")?,
            }
        }
    }

    /// The budget screen.
    ///
    /// # Errors
    ///
    /// Returns an error if reading, writing or the store fails.
    pub fn budget_screen(&mut self) -> Result<Flow> {
        writeln!(self.output, "Budget")?;
        self.show_budget()?;

        loop {
            let Some(line) = self.read_line()? else {
                return Ok(Flow::Quit);
            };
            let (command, rest) = split_word(&line);
            let result = match command {
                "" => continue,
                "back" => return Ok(Flow::Back),
                c if is_quit(c) => return Ok(Flow::Quit),
                "help" => self.budget_help(),
                "list" => self.show_budget(),
                "total" => self.show_total(),
                "add" => self.budget_add(rest),
                "delete" => self.budget_delete(rest),
                "clear" => self.budget_clear(),
                other => {
                    writeln!(self.output, "Unknown command: {other} (try `help`)")?;
                    Ok(())
                }
            };
            self.recover(result)?;
        }
    }

    fn budget_help(&mut self) -> Result<()> {
        writeln!(self.output, "  add expense|income <amount> <name>")?;
        writeln!(self.output, "  list | total | delete <id> | clear | back")?;
        Ok(())
    }

    fn show_budget(&mut self) -> Result<()> {
        let ledger = Ledger::new(self.store);
        let expenses = ledger.list()?;
        let symbol = &self.config.budget.currency_symbol;
        render::write_expenses(&mut self.output, &expenses, OutputFormat::Plain, symbol)?;
        let balance = crate::ledger::Balance::of(&expenses);
        writeln!(self.output, "{}", render::balance_line(&balance, symbol))?;
        Ok(())
    }

    fn show_total(&mut self) -> Result<()> {
        let balance = Ledger::new(self.store).balance()?;
        let symbol = &self.config.budget.currency_symbol;
        writeln!(self.output, "{}", render::balance_line(&balance, symbol))?;
        Ok(())
    }

    fn budget_add(&mut self, args: &str) -> Result<()> {
        let (kind_word, rest) = split_word(args);
        let (amount, name) = split_word(rest);
        let Some(kind) = EntryKind::parse(kind_word) else {
            writeln!(self.output, "Usage: add expense|income <amount> <name>")?;
            return Ok(());
        };
        if amount.is_empty() {
            writeln!(self.output, "Usage: add expense|income <amount> <name>")?;
            return Ok(());
        }

        Ledger::new(self.store).add_text(name, amount, kind)?;
        self.show_budget()
    }

    fn budget_delete(&mut self, args: &str) -> Result<()> {
        let Some(id) = parse_id(args) else {
            writeln!(self.output, "Usage: delete <id>")?;
            return Ok(());
        };
        Ledger::new(self.store).delete_one(id)?;
        self.show_budget()
    }

    fn budget_clear(&mut self) -> Result<()> {
        let ledger = Ledger::new(self.store);
        if self.config.budget.confirm_clear {
            let count = ledger.list()?.len();
            writeln!(self.output, "Delete all {count} transactions? [y/N]")?;
            let answer = self.read_line()?.unwrap_or_default();
            if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
                writeln!(self.output, "Kept everything.")?;
                return Ok(());
            }
        }
        let removed = ledger.delete_all()?;
        writeln!(self.output, "Deleted {removed} transactions.")?;
        self.show_budget()
    }

    /// The recipes screen.
    ///
    /// # Errors
    ///
    /// Returns an error if reading, writing or the store fails.
    pub fn recipes_screen(&mut self) -> Result<Flow> {
        writeln!(self.output, "Recipes")?;
        self.show_recipes("")?;

        loop {
            let Some(line) = self.read_line()? else {
                return Ok(Flow::Quit);
            };
            let (command, rest) = split_word(&line);
            let result = match command {
                "" => continue,
                "back" => return Ok(Flow::Back),
                c if is_quit(c) => return Ok(Flow::Quit),
                "help" => self.recipes_help(),
                "list" => self.show_recipes(""),
                "search" => self.show_recipes(rest),
                "show" => self.recipe_show(rest),
                "add" => match self.recipe_add() {
                    Ok(Flow::Quit) => return Ok(Flow::Quit),
                    other => other.map(|_| ()),
                },
                "edit" => match self.recipe_edit(rest) {
                    Ok(Flow::Quit) => return Ok(Flow::Quit),
                    other => other.map(|_| ()),
                },
                "delete" => self.recipe_delete(rest),
                other => {
                    writeln!(self.output, "Unknown command: {other} (try `help`)")?;
                    Ok(())
                }
            };
            self.recover(result)?;
        }
    }

    fn recipes_help(&mut self) -> Result<()> {
        writeln!(self.output, "  list | search <text> | show <id>")?;
        writeln!(self.output, "  add | edit <id> | delete <id> | back")?;
        Ok(())
    }

    fn show_recipes(&mut self, query: &str) -> Result<()> {
        let recipes = Catalog::new(self.store).search(query)?;
        render::write_recipes(
            &mut self.output,
            &recipes,
            OutputFormat::Plain,
            &self.config.recipes.date_format,
        )
    }

    fn recipe_show(&mut self, args: &str) -> Result<()> {
        let Some(id) = parse_id(args) else {
            writeln!(self.output, "Usage: show <id>")?;
            return Ok(());
        };
        let recipe = Catalog::new(self.store).get(id)?;
        render::write_recipe_detail(&mut self.output, &recipe, false, &self.config.recipes.date_format)
    }

    fn recipe_add(&mut self) -> Result<Flow> {
        let Some(name) = self.ask("Name", None)? else {
            return Ok(Flow::Quit);
        };
        let Some(ingredients) = self.ask("Ingredients", None)? else {
            return Ok(Flow::Quit);
        };
        let Some(last_made) = self.ask("Last made (YYYY-MM-DD, blank for today)", None)? else {
            return Ok(Flow::Quit);
        };
        let Some(link) = self.ask("Tutorial link", None)? else {
            return Ok(Flow::Quit);
        };
        let Some(notes) = self.ask("Notes", None)? else {
            return Ok(Flow::Quit);
        };

        let mut fields = RecipeFields::named(name)
            .with_ingredients(ingredients.trim())
            .with_tutorial_link(link.trim())
            .with_notes(notes.trim());
        if !last_made.trim().is_empty() {
            fields = fields.with_last_made(parse_date(&last_made)?);
        }

        let recipe = Catalog::new(self.store).add(fields)?;
        writeln!(self.output, "Added recipe #{}", recipe.id.unwrap_or_default())?;
        self.show_recipes("")?;
        Ok(Flow::Back)
    }

    fn recipe_edit(&mut self, args: &str) -> Result<Flow> {
        let Some(id) = parse_id(args) else {
            writeln!(self.output, "Usage: edit <id>")?;
            return Ok(Flow::Back);
        };
        let catalog = Catalog::new(self.store);
        let current = catalog.get(id)?;
        writeln!(
            self.output,
            "Editing #{id}. Leave a field blank to keep it, or enter {CLEAR_ANSWER} to clear it."
        )?;

        let last_made = current.last_made.format(crate::recipe::DATE_INPUT_FORMAT).to_string();
        let answers = [
            ("Name", current.name.as_str()),
            ("Ingredients", current.ingredients.as_str()),
            ("Last made (YYYY-MM-DD)", last_made.as_str()),
            ("Tutorial link", current.tutorial_link.as_str()),
            ("Notes", current.notes.as_str()),
        ];
        let mut replies = Vec::with_capacity(answers.len());
        for (label, value) in answers {
            let Some(reply) = self.ask(label, Some(value))? else {
                return Ok(Flow::Quit);
            };
            replies.push(edit_answer(&reply));
        }

        let [name, ingredients, last_made, tutorial_link, notes]: [Option<String>; 5] =
            replies.try_into().map_err(|_| Error::internal("edit prompts out of step"))?;
        let patch = RecipePatch {
            name,
            ingredients,
            last_made: last_made.as_deref().map(parse_date).transpose()?,
            tutorial_link,
            notes,
        };

        if patch.is_empty() {
            writeln!(self.output, "Nothing changed.")?;
            return Ok(Flow::Back);
        }
        catalog.edit(id, patch)?;
        writeln!(self.output, "Updated recipe #{id}")?;
        self.recipe_show(&id.to_string())?;
        Ok(Flow::Back)
    }

    fn recipe_delete(&mut self, args: &str) -> Result<()> {
        let Some(id) = parse_id(args) else {
            writeln!(self.output, "Usage: delete <id>")?;
            return Ok(());
        };
        Catalog::new(self.store).delete(id)?;
        writeln!(self.output, "Deleted recipe #{id}")?;
        self.show_recipes("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;
    use rust_decimal_macros::dec;

    fn run_shell(storage: &Storage, config: &Config, input: &str) -> String {
        let mut shell = Shell::new(storage, config, input.as_bytes(), Vec::new());
        shell.run().unwrap();
        String::from_utf8(shell.into_output()).unwrap()
    }

    #[test]
    fn test_menu_and_quit() {
        let storage = Storage::open_in_memory().unwrap();
        let output = run_shell(&storage, &Config::default(), "q\n");

        assert!(output.contains("Let's Make Some Ice Cream!"));
        assert!(output.contains("Pick a tool to get started"));
        assert!(output.contains("1. Recipes"));
        assert!(output.contains("2. Calculator"));
        assert!(output.contains("3. Budget"));
        assert!(output.ends_with("Bye!\n"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let storage = Storage::open_in_memory().unwrap();
        let output = run_shell(&storage, &Config::default(), "");
        assert!(output.ends_with("Bye!\n"));
    }

    #[test]
    fn test_unknown_menu_choice() {
        let storage = Storage::open_in_memory().unwrap();
        let output = run_shell(&storage, &Config::default(), "9\nq\n");
        assert!(output.contains("Unknown choice: 9"));
    }

    #[test]
    fn test_calculator_screen() {
        let storage = Storage::open_in_memory().unwrap();
        let output = run_shell(&storage, &Config::default(), "2\n7 x 8 =\n=\n9/0=\nback\nq\n");

        assert!(output.contains("56\n"));
        assert!(output.contains("392\n"));
        assert!(output.contains("Error\n"));
    }

    #[test]
    fn test_calculator_unknown_key() {
        let storage = Storage::open_in_memory().unwrap();
        let output = run_shell(&storage, &Config::default(), "calculator\n7 ? 2\nq\n");
        assert!(output.contains("unknown calculator key '?'"));
    }

    #[test]
    fn test_budget_add_and_total() {
        let storage = Storage::open_in_memory().unwrap();
        let output = run_shell(
            &storage,
            &Config::default(),
            "3\nadd expense 4.50 Coffee\nadd income 100 Paycheck\ntotal\nback\nq\n",
        );

        assert!(output.contains("Coffee -$4.50"));
        assert!(output.contains("Paycheck +$100.00"));
        assert!(output.contains("Balance: $95.50"));
        assert_eq!(Ledger::new(&storage).total().unwrap(), dec!(95.5));
    }

    #[test]
    fn test_budget_blank_name_is_reported() {
        let storage = Storage::open_in_memory().unwrap();
        let output = run_shell(&storage, &Config::default(), "budget\nadd expense 3\nq\n");
        assert!(output.contains("Error: name must not be empty"));
        assert!(Ledger::new(&storage).list().unwrap().is_empty());
    }

    #[test]
    fn test_budget_delete_missing() {
        let storage = Storage::open_in_memory().unwrap();
        let output = run_shell(&storage, &Config::default(), "budget\ndelete 12\nq\n");
        assert!(output.contains("Error: expense 12 not found"));
    }

    #[test]
    fn test_budget_clear_needs_confirmation() {
        let storage = Storage::open_in_memory().unwrap();
        Ledger::new(&storage)
            .add("Cones", dec!(5), EntryKind::Expense)
            .unwrap();

        let output = run_shell(&storage, &Config::default(), "3\nclear\nn\nq\n");
        assert!(output.contains("Delete all 1 transactions? [y/N]"));
        assert!(output.contains("Kept everything."));
        assert_eq!(Ledger::new(&storage).list().unwrap().len(), 1);

        run_shell(&storage, &Config::default(), "3\nclear\ny\nq\n");
        assert!(Ledger::new(&storage).list().unwrap().is_empty());
    }

    #[test]
    fn test_budget_clear_without_confirmation() {
        let storage = Storage::open_in_memory().unwrap();
        Ledger::new(&storage)
            .add("Cones", dec!(5), EntryKind::Expense)
            .unwrap();
        let mut config = Config::default();
        config.budget.confirm_clear = false;

        let output = run_shell(&storage, &config, "3\nclear\nq\n");
        assert!(output.contains("Deleted 1 transactions."));
    }

    #[test]
    fn test_recipes_add_search_and_show() {
        let storage = Storage::open_in_memory().unwrap();
        let input = "1\nadd\nVanilla Swirl\ncream, vanilla\n2025-03-05\n\n\n\
                     add\nMint Chip\nmint\n\nhttps://example.com/mint\nextra chips\n\
                     search mint\nshow 2\nq\n";
        let output = run_shell(&storage, &Config::default(), input);

        assert!(output.contains("Added recipe #1"));
        assert!(output.contains("Added recipe #2"));
        assert!(output.contains("#1 Vanilla Swirl (last made Mar 5, 2025)"));
        assert!(output.contains("Tutorial:    https://example.com/mint"));
        assert!(output.contains("  extra chips"));
        assert_eq!(Catalog::new(&storage).search("mint").unwrap().len(), 1);
    }

    #[test]
    fn test_recipes_edit_keeps_blank_fields() {
        let storage = Storage::open_in_memory().unwrap();
        let id = Catalog::new(&storage)
            .add(RecipeFields::named("Lemon").with_notes("zest first"))
            .unwrap()
            .id
            .unwrap();

        let input = format!("1\nedit {id}\nLemon Sorbet\n\n\n\n\nq\n");
        let output = run_shell(&storage, &Config::default(), &input);

        assert!(output.contains("Notes [zest first]:"));
        let recipe = Catalog::new(&storage).get(id).unwrap();
        assert_eq!(recipe.name, "Lemon Sorbet");
        assert_eq!(recipe.notes, "zest first");
    }

    #[test]
    fn test_recipes_edit_dash_clears_field() {
        let storage = Storage::open_in_memory().unwrap();
        let id = Catalog::new(&storage)
            .add(
                RecipeFields::named("Lemon")
                    .with_tutorial_link("https://example.com/lemon")
                    .with_notes("zest first"),
            )
            .unwrap()
            .id
            .unwrap();

        let input = format!("1\nedit {id}\n\n\n\n-\n -\nq\n");
        let output = run_shell(&storage, &Config::default(), &input);

        assert!(output.contains("Updated recipe"));
        let recipe = Catalog::new(&storage).get(id).unwrap();
        assert_eq!(recipe.name, "Lemon");
        assert_eq!(recipe.tutorial_link, "");
        assert_eq!(recipe.notes, "");
    }

    #[test]
    fn test_recipes_edit_cannot_clear_name() {
        let storage = Storage::open_in_memory().unwrap();
        let id = Catalog::new(&storage)
            .add(RecipeFields::named("Lemon"))
            .unwrap()
            .id
            .unwrap();

        let input = format!("1\nedit {id}\n-\n\n\n\n\nq\n");
        let output = run_shell(&storage, &Config::default(), &input);
        assert!(output.contains("Error:"));
        assert_eq!(Catalog::new(&storage).get(id).unwrap().name, "Lemon");
    }

    #[test]
    fn test_edit_answer() {
        assert_eq!(edit_answer("  "), None);
        assert_eq!(edit_answer("-"), Some(String::new()));
        assert_eq!(edit_answer(" Mango "), Some("Mango".to_string()));
    }

    #[test]
    fn test_budget_skips_undecodable_rows() {
        let storage = Storage::open_in_memory().unwrap();
        Ledger::new(&storage).add("Tips", dec!(5), EntryKind::Income).unwrap();
        storage
            .conn
            .execute(
                "INSERT INTO expenses (name, cost, created_at) VALUES ('Smudged', 'lots', '2025-03-05T00:00:00.000000Z')",
                [],
            )
            .unwrap();

        let output = run_shell(&storage, &Config::default(), "3\nadd income 1 More\nq\n");
        assert!(output.contains("Balance: $6.00"));
        assert!(!output.contains("Smudged"));
        assert!(output.ends_with("Bye!\n"));
    }

    #[test]
    fn test_recipes_bad_date_is_reported() {
        let storage = Storage::open_in_memory().unwrap();
        let output = run_shell(&storage, &Config::default(), "1\nadd\nPeach\n\nsoon\n\n\nq\n");
        assert!(output.contains("Error: invalid date"));
        assert!(Catalog::new(&storage).list().unwrap().is_empty());
    }

    #[test]
    fn test_recipes_delete() {
        let storage = Storage::open_in_memory().unwrap();
        let id = Catalog::new(&storage)
            .add(RecipeFields::named("Rocky Road"))
            .unwrap()
            .id
            .unwrap();

        let output = run_shell(&storage, &Config::default(), &format!("1\ndelete {id}\nq\n"));
        assert!(output.contains(&format!("Deleted recipe #{id}")));
        assert!(output.contains("No recipes found."));
    }

    #[test]
    fn test_back_returns_to_menu() {
        let storage = Storage::open_in_memory().unwrap();
        let output = run_shell(&storage, &Config::default(), "1\nback\n2\nback\nq\n");
        assert_eq!(output.matches("Pick a tool to get started").count(), 3);
    }

    #[test]
    fn test_quit_from_screen() {
        let storage = Storage::open_in_memory().unwrap();
        let output = run_shell(&storage, &Config::default(), "3\nquit\n");
        assert_eq!(output.matches("Pick a tool to get started").count(), 1);
        assert!(output.ends_with("Bye!\n"));
    }

    #[test]
    fn test_tool_parse() {
        assert_eq!(Tool::parse("1"), Some(Tool::Recipes));
        assert_eq!(Tool::parse(" Calculator "), Some(Tool::Calculator));
        assert_eq!(Tool::parse("BUDGET"), Some(Tool::Budget));
        assert_eq!(Tool::parse("4"), None);
    }

    #[test]
    fn test_split_word() {
        assert_eq!(split_word("add expense 4 Waffle cones"), ("add", "expense 4 Waffle cones"));
        assert_eq!(split_word("  list  "), ("list", ""));
        assert_eq!(split_word(""), ("", ""));
    }
}
