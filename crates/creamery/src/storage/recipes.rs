//! [`RecipeStore`] for [`Storage`].

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension};
use tracing::debug;

use super::{decode_timestamp, decoded, encode_timestamp, RecipeStore, Storage};
use crate::error::{Error, Result};
use crate::recipe::{Recipe, DATE_INPUT_FORMAT};

const TABLE: &str = "recipes";
const SELECT_RECIPES: &str =
    "SELECT id, name, ingredients, last_made, tutorial_link, notes, created_at FROM recipes";

impl Storage {
    fn row_to_recipe(row: &rusqlite::Row) -> rusqlite::Result<Option<Recipe>> {
        let id: i64 = row.get(0)?;
        let last_made_str: String = row.get(3)?;
        let created_at_str: String = row.get(6)?;

        let last_made = NaiveDate::parse_from_str(&last_made_str, DATE_INPUT_FORMAT);
        let Some(last_made) = decoded(TABLE, id, "last_made", last_made) else {
            return Ok(None);
        };
        let Some(created_at) = decoded(TABLE, id, "created_at", decode_timestamp(&created_at_str))
        else {
            return Ok(None);
        };

        Ok(Some(Recipe {
            id: Some(id),
            name: row.get(1)?,
            ingredients: row.get(2)?,
            last_made,
            tutorial_link: row.get(4)?,
            notes: row.get(5)?,
            created_at,
        }))
    }
}

impl RecipeStore for Storage {
    fn insert_recipe(&self, recipe: &Recipe) -> Result<i64> {
        self.conn.execute(
            r"
            INSERT INTO recipes (name, ingredients, last_made, tutorial_link, notes, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ",
            params![
                recipe.name,
                recipe.ingredients,
                recipe.last_made.format(DATE_INPUT_FORMAT).to_string(),
                recipe.tutorial_link,
                recipe.notes,
                encode_timestamp(&recipe.created_at),
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!("Inserted recipe with id {}", id);
        Ok(id)
    }

    fn get_recipe(&self, id: i64) -> Result<Option<Recipe>> {
        let recipe = self
            .conn
            .query_row(
                &format!("{SELECT_RECIPES} WHERE id = ?1"),
                [id],
                Self::row_to_recipe,
            )
            .optional()?;
        Ok(recipe.flatten())
    }

    fn recipes(&self) -> Result<Vec<Recipe>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_RECIPES} ORDER BY created_at DESC, id DESC"))?;
        let recipes = stmt
            .query_map([], Self::row_to_recipe)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(recipes.into_iter().flatten().collect())
    }

    fn update_recipe(&self, recipe: &Recipe) -> Result<bool> {
        let id = recipe
            .id
            .ok_or_else(|| Error::internal("cannot update a recipe that was never stored"))?;

        let affected = self.conn.execute(
            r"
            UPDATE recipes
            SET name = ?1, ingredients = ?2, last_made = ?3, tutorial_link = ?4, notes = ?5
            WHERE id = ?6
            ",
            params![
                recipe.name,
                recipe.ingredients,
                recipe.last_made.format(DATE_INPUT_FORMAT).to_string(),
                recipe.tutorial_link,
                recipe.notes,
                id,
            ],
        )?;
        debug!("Updated recipe {} ({} rows)", id, affected);
        Ok(affected > 0)
    }

    fn delete_recipe(&self, id: i64) -> Result<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM recipes WHERE id = ?1", [id])?;
        Ok(affected > 0)
    }
}
