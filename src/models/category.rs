//! Expense category model
//!
//! Categories are a closed set matching the tracker's fixed selection list.
//! The enum declaration order is the display and grouping order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A fixed expense category
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Bills,
    Entertainment,
    #[default]
    Other,
}

impl Category {
    /// All categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Transport,
            Self::Shopping,
            Self::Bills,
            Self::Entertainment,
            Self::Other,
        ]
    }

    /// Get the canonical name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    /// Parse a category name, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "transport" => Ok(Self::Transport),
            "shopping" => Ok(Self::Shopping),
            "bills" => Ok(Self::Bills),
            "entertainment" => Ok(Self::Entertainment),
            "other" => Ok(Self::Other),
            _ => Err(CategoryParseError::Unknown(s.to_string())),
        }
    }
}

/// Error type for category parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Unknown(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryParseError::Unknown(s) => write!(
                f,
                "Unknown category '{}' (expected one of: Food, Transport, Shopping, Bills, Entertainment, Other)",
                s
            ),
        }
    }
}

impl std::error::Error for CategoryParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_in_display_order() {
        let all = Category::all();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], Category::Food);
        assert_eq!(all[5], Category::Other);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("TRANSPORT".parse::<Category>().unwrap(), Category::Transport);
        assert_eq!(" bills ".parse::<Category>().unwrap(), Category::Bills);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Groceries".parse::<Category>().unwrap_err();
        assert!(matches!(err, CategoryParseError::Unknown(_)));
        assert!(err.to_string().contains("Groceries"));
    }

    #[test]
    fn test_display_round_trip() {
        for cat in Category::all() {
            let parsed: Category = cat.to_string().parse().unwrap();
            assert_eq!(*cat, parsed);
        }
    }

    #[test]
    fn test_ordering_follows_declaration() {
        assert!(Category::Food < Category::Transport);
        assert!(Category::Entertainment < Category::Other);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Category::Food).unwrap();
        assert_eq!(json, "\"Food\"");
        let parsed: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Category::Food);
    }
}
