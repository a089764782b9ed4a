use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CharterError;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Charter zone tier. A covers the primary investment hubs, C the emerging
/// regions with the most generous rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CharterCategory {
    A,
    B,
    C,
}

impl CharterCategory {
    pub const ALL: [CharterCategory; 3] = [CharterCategory::A, CharterCategory::B, CharterCategory::C];

    pub fn as_str(&self) -> &'static str {
        match self {
            CharterCategory::A => "A",
            CharterCategory::B => "B",
            CharterCategory::C => "C",
        }
    }
}

impl fmt::Display for CharterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharterCategory {
    type Err = CharterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(CharterCategory::A),
            "B" => Ok(CharterCategory::B),
            "C" => Ok(CharterCategory::C),
            other => Err(CharterError::InvalidInput {
                field: "charter_category".into(),
                reason: format!("unknown category '{}', expected A, B or C", other),
            }),
        }
    }
}

/// One value per charter category, serialised as `{"A": .., "B": .., "C": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTable<T> {
    #[serde(rename = "A")]
    pub a: T,
    #[serde(rename = "B")]
    pub b: T,
    #[serde(rename = "C")]
    pub c: T,
}

impl<T> CategoryTable<T> {
    pub fn new(a: T, b: T, c: T) -> Self {
        CategoryTable { a, b, c }
    }

    pub fn get(&self, category: CharterCategory) -> &T {
        match category {
            CharterCategory::A => &self.a,
            CharterCategory::B => &self.b,
            CharterCategory::C => &self.c,
        }
    }

    /// Iterate in category order A, B, C.
    pub fn iter(&self) -> impl Iterator<Item = (CharterCategory, &T)> {
        CharterCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}
