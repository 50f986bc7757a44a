use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::types::{CategoryId, CategoryName};

/// Named grouping tag applied to guides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Data required to create a new [`Category`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: CategoryName,
}

/// Partial update merged into an existing [`Category`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryUpdate {
    pub name: Option<CategoryName>,
}

impl Category {
    /// Creates a category with a fresh identifier.
    pub fn new(data: NewCategory) -> Self {
        Self {
            id: CategoryId::generate(),
            name: data.name,
            extra: Map::new(),
        }
    }

    /// Merges a partial update into this category.
    pub fn apply(&mut self, updates: CategoryUpdate) {
        if let Some(name) = updates.name {
            self.name = name;
        }
    }
}
