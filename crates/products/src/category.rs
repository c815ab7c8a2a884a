use serde::{Deserialize, Serialize};

/// Wildcard category id: matches every product.
pub const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        self.id == ALL
    }
}

/// Which products a listing shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact category id match.
    Only(String),
}

impl CategoryFilter {
    /// `"all"` and the empty string select everything; any other id is taken
    /// literally, so an unknown id simply matches nothing.
    pub fn parse(id: &str) -> Self {
        if id.is_empty() || id == ALL {
            Self::All
        } else {
            Self::Only(id.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(id) => id == category,
        }
    }
}
