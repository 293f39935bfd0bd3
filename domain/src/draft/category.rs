//! Category value object
//!
//! A blog post belongs to one of five subject classifications. Until the user
//! picks one, the draft carries [`Category::Unset`], which is displayed and
//! persisted as the placeholder string `"Category"`.

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Blog subject classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Placeholder shown before a selection is made.
    #[default]
    Unset,
    Technology,
    Health,
    Education,
    Travel,
    Finance,
}

impl Category {
    /// The placeholder spelling of [`Category::Unset`].
    pub const PLACEHOLDER: &'static str = "Category";

    /// Every value a draft can hold, placeholder first.
    pub const ALL: [Category; 6] = [
        Category::Unset,
        Category::Technology,
        Category::Health,
        Category::Education,
        Category::Travel,
        Category::Finance,
    ];

    /// Get the persisted/display spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Unset => Self::PLACEHOLDER,
            Category::Technology => "Technology",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Travel => "Travel",
            Category::Finance => "Finance",
        }
    }

    /// Categories a user may pick (everything except the placeholder).
    pub fn selectable() -> impl Iterator<Item = Category> {
        Self::ALL.into_iter().filter(Category::is_selectable)
    }

    pub fn is_selectable(&self) -> bool {
        !matches!(self, Category::Unset)
    }

    /// Parse user input as a selection.
    ///
    /// Unlike [`FromStr`](std::str::FromStr), this refuses the placeholder,
    /// which is a disabled option in the category picker.
    pub fn parse_selection(s: &str) -> Result<Self, DomainError> {
        let category: Category = s.parse()?;
        if category.is_selectable() {
            Ok(category)
        } else {
            Err(DomainError::PlaceholderCategory)
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DomainError::InvalidCategory(s.to_string()))
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
