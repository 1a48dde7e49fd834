//! `creamery` - Recipes, a calculator and a budget for making ice cream
//!
//! This library provides the three tools behind the `creamery` binary: an
//! integer [`calculator`], an expense [`ledger`] and a recipe [`catalog`],
//! both persisted in `SQLite` through [`storage`], plus the interactive
//! [`shell`] that puts them behind one menu.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod calculator;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod expense;
pub mod ledger;
pub mod logging;
pub mod recipe;
pub mod render;
pub mod shell;
pub mod storage;

pub use calculator::{Calculator, Token};
pub use catalog::Catalog;
pub use config::Config;
pub use error::{Error, Result};
pub use expense::{EntryKind, Expense};
pub use ledger::{Balance, Ledger};
pub use logging::init_logging;
pub use recipe::{Recipe, RecipeFields, RecipePatch};
pub use storage::{ExpenseStore, RecipeStore, Storage, StorageStats};
