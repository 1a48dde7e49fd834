//! Recipe catalog.
//!
//! [`Catalog`] wraps a [`RecipeStore`]. Edits are read-modify-write: the
//! stored recipe is loaded, the patch is applied to that copy, and the copy
//! is written back with an explicit update.

use tracing::info;

use crate::error::{Error, Result};
use crate::recipe::{Recipe, RecipeFields, RecipePatch};
use crate::storage::RecipeStore;

/// Recipe operations over an injected store.
#[derive(Debug)]
pub struct Catalog<'a, S: RecipeStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: RecipeStore + ?Sized> Catalog<'a, S> {
    /// Create a catalog backed by `store`.
    #[must_use]
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Add a recipe.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] for a blank name, or a storage error.
    pub fn add(&self, mut fields: RecipeFields) -> Result<Recipe> {
        fields.name = required_name(&fields.name)?;

        let mut recipe = Recipe::new(fields);
        let id = self.store.insert_recipe(&recipe)?;
        recipe.id = Some(id);

        info!(id, name = %recipe.name, "Added recipe");
        Ok(recipe)
    }

    /// Look up one recipe.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no recipe has this id.
    pub fn get(&self, id: i64) -> Result<Recipe> {
        self.store
            .get_recipe(id)?
            .ok_or_else(|| Error::recipe_not_found(id))
    }

    /// Change some fields of a stored recipe and return the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown id and
    /// [`Error::EmptyField`] if the patch blanks the name.
    pub fn edit(&self, id: i64, mut patch: RecipePatch) -> Result<Recipe> {
        if let Some(name) = patch.name.as_deref() {
            patch.name = Some(required_name(name)?);
        }

        let mut recipe = self.get(id)?;
        recipe.apply(patch);
        if !self.store.update_recipe(&recipe)? {
            return Err(Error::recipe_not_found(id));
        }

        info!(id, "Updated recipe");
        Ok(recipe)
    }

    /// Delete a recipe.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no recipe has this id.
    pub fn delete(&self, id: i64) -> Result<()> {
        if !self.store.delete_recipe(id)? {
            return Err(Error::recipe_not_found(id));
        }
        info!(id, "Deleted recipe");
        Ok(())
    }

    /// All recipes, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn list(&self) -> Result<Vec<Recipe>> {
        self.store.recipes()
    }

    /// Recipes whose name contains `query`, ignoring case, newest first.
    /// A blank query returns everything.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn search(&self, query: &str) -> Result<Vec<Recipe>> {
        let query = query.trim();
        let recipes = self.list()?;
        if query.is_empty() {
            return Ok(recipes);
        }

        let needle = query.to_lowercase();
        Ok(recipes
            .into_iter()
            .filter(|recipe| recipe.name_contains(&needle))
            .collect())
    }
}

fn required_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::EmptyField { field: "name" });
    }
    Ok(name.to_string())
}
