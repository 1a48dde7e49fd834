//! Recipe records.
//!
//! A [`Recipe`] is mostly free text. [`RecipeFields`] carries the editable
//! part for new recipes and [`RecipePatch`] describes an edit, where every
//! field is optional and absent fields keep their stored value.

use std::sync::OnceLock;

use chrono::{DateTime, Local, NaiveDate, SubsecRound, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Accepted shape of a tutorial link.
const TUTORIAL_LINK_PATTERN: &str = r"^https?://[^\s/$.?#][^\s]*$";

/// Date format used on the command line and in storage.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

fn tutorial_link_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(TUTORIAL_LINK_PATTERN).expect("Invalid regex pattern"))
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if the text is not a calendar date.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, DATE_INPUT_FORMAT).map_err(|_| Error::InvalidDate(text.to_string()))
}

/// Today's date in the local time zone.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// A stored recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Identifier assigned by the store; `None` before insertion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Recipe name. Never blank once stored.
    pub name: String,

    /// Ingredients, free text.
    pub ingredients: String,

    /// The last day this recipe was made.
    pub last_made: NaiveDate,

    /// Link to a video or write-up, possibly empty.
    pub tutorial_link: String,

    /// Free-text notes.
    pub notes: String,

    /// When the recipe was added.
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Create an unsaved recipe stamped with the current time.
    #[must_use]
    pub fn new(fields: RecipeFields) -> Self {
        Self {
            id: None,
            name: fields.name,
            ingredients: fields.ingredients,
            last_made: fields.last_made,
            tutorial_link: fields.tutorial_link,
            notes: fields.notes,
            created_at: Utc::now().trunc_subsecs(6),
        }
    }

    /// The tutorial link, if it is a usable `http(s)` URL.
    #[must_use]
    pub fn tutorial_url(&self) -> Option<&str> {
        let link = self.tutorial_link.trim();
        tutorial_link_regex().is_match(link).then_some(link)
    }

    /// Case-insensitive substring match on the name.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }

    /// Apply an edit in place.
    pub fn apply(&mut self, patch: RecipePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(ingredients) = patch.ingredients {
            self.ingredients = ingredients;
        }
        if let Some(last_made) = patch.last_made {
            self.last_made = last_made;
        }
        if let Some(tutorial_link) = patch.tutorial_link {
            self.tutorial_link = tutorial_link;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }
}

/// The user-editable fields of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeFields {
    /// Recipe name.
    pub name: String,
    /// Ingredients, free text.
    pub ingredients: String,
    /// The last day this recipe was made.
    pub last_made: NaiveDate,
    /// Link to a tutorial, possibly empty.
    pub tutorial_link: String,
    /// Free-text notes.
    pub notes: String,
}

impl RecipeFields {
    /// Fields for a recipe with only a name, last made today.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: String::new(),
            last_made: today(),
            tutorial_link: String::new(),
            notes: String::new(),
        }
    }

    /// Set the ingredients.
    #[must_use]
    pub fn with_ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = ingredients.into();
        self
    }

    /// Set the last-made date.
    #[must_use]
    pub fn with_last_made(mut self, last_made: NaiveDate) -> Self {
        self.last_made = last_made;
        self
    }

    /// Set the tutorial link.
    #[must_use]
    pub fn with_tutorial_link(mut self, link: impl Into<String>) -> Self {
        self.tutorial_link = link.into();
        self
    }

    /// Set the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// A partial update to a recipe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipePatch {
    /// New name.
    pub name: Option<String>,
    /// New ingredients.
    pub ingredients: Option<String>,
    /// New last-made date.
    pub last_made: Option<NaiveDate>,
    /// New tutorial link.
    pub tutorial_link: Option<String>,
    /// New notes.
    pub notes: Option<String>,
}

impl RecipePatch {
    /// Whether the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl From<RecipeFields> for RecipePatch {
    fn from(fields: RecipeFields) -> Self {
        Self {
            name: Some(fields.name),
            ingredients: Some(fields.ingredients),
            last_made: Some(fields.last_made),
            tutorial_link: Some(fields.tutorial_link),
            notes: Some(fields.notes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_recipe_from_fields() {
        let fields = RecipeFields::named("Mint Chip")
            .with_ingredients("cream, mint, chocolate")
            .with_last_made(date(2025, 3, 5))
            .with_notes("less sugar");
        let recipe = Recipe::new(fields);

        assert!(recipe.id.is_none());
        assert_eq!(recipe.name, "Mint Chip");
        assert_eq!(recipe.ingredients, "cream, mint, chocolate");
        assert_eq!(recipe.last_made, date(2025, 3, 5));
        assert_eq!(recipe.tutorial_link, "");
        assert_eq!(recipe.notes, "less sugar");
    }

    #[test]
    fn test_named_defaults_to_today() {
        let fields = RecipeFields::named("Plain");
        assert_eq!(fields.last_made, today());
        assert!(fields.ingredients.is_empty());
    }

    #[test]
    fn test_name_contains_is_case_insensitive() {
        let recipe = Recipe::new(RecipeFields::named("Vanilla Swirl"));
        assert!(recipe.name_contains("swirl"));
        assert!(recipe.name_contains("vanilla s"));
        assert!(!recipe.name_contains("mint"));
    }

    #[test]
    fn test_tutorial_url() {
        let mut recipe = Recipe::new(RecipeFields::named("Sorbet"));
        assert_eq!(recipe.tutorial_url(), None);

        recipe.tutorial_link = "https://example.com/sorbet".to_string();
        assert_eq!(recipe.tutorial_url(), Some("https://example.com/sorbet"));

        recipe.tutorial_link = "watch the video".to_string();
        assert_eq!(recipe.tutorial_url(), None);
    }

    #[test]
    fn test_apply_patch_keeps_missing_fields() {
        let mut recipe = Recipe::new(
            RecipeFields::named("Mango")
                .with_ingredients("mango")
                .with_notes("ripe only"),
        );
        let patch = RecipePatch {
            ingredients: Some("mango, lime".to_string()),
            ..RecipePatch::default()
        };
        recipe.apply(patch);

        assert_eq!(recipe.name, "Mango");
        assert_eq!(recipe.ingredients, "mango, lime");
        assert_eq!(recipe.notes, "ripe only");
    }

    #[test]
    fn test_patch_from_fields_replaces_everything() {
        let mut recipe = Recipe::new(RecipeFields::named("Old").with_notes("old notes"));
        let fields = RecipeFields::named("New").with_last_made(date(2024, 12, 1));
        recipe.apply(fields.into());

        assert_eq!(recipe.name, "New");
        assert_eq!(recipe.notes, "");
        assert_eq!(recipe.last_made, date(2024, 12, 1));
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(RecipePatch::default().is_empty());
        let patch = RecipePatch {
            notes: Some(String::new()),
            ..RecipePatch::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-03-05").unwrap(), date(2025, 3, 5));
        assert_eq!(parse_date(" 2025-03-05 ").unwrap(), date(2025, 3, 5));
        let err = parse_date("March 5").unwrap_err();
        assert!(matches!(err, Error::InvalidDate(_)));
    }
}
