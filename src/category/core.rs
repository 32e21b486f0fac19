//! Defines the category model and the session-wide category cache.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::ResourceId;

/// A named grouping for transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// The ID the backend assigned to the category.
    pub id: ResourceId,
    /// The display name.
    pub name: String,
}

/// The fields for creating a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCategory {
    /// The display name.
    pub name: String,
}

/// The categories fetched from the backend, shared by every request.
///
/// The cache is only replaced by a full page load, there is no other
/// invalidation.
#[derive(Debug, Clone, Default)]
pub struct CategoryCache {
    categories: Arc<RwLock<Vec<Category>>>,
}

impl CategoryCache {
    /// Replace the cached categories.
    pub fn replace(&self, categories: Vec<Category>) {
        match self.categories.write() {
            Ok(mut cached) => *cached = categories,
            Err(error) => tracing::error!("could not acquire category cache lock: {error}"),
        }
    }

    /// A copy of the cached categories.
    pub fn snapshot(&self) -> Vec<Category> {
        self.categories
            .read()
            .map(|categories| categories.clone())
            .inspect_err(|error| tracing::error!("could not acquire category cache lock: {error}"))
            .unwrap_or_default()
    }
}

/// Get the display name for `category_id`.
///
/// Falls back to the raw ID when no category matches.
pub fn category_name_by_id(categories: &[Category], category_id: &ResourceId) -> String {
    categories
        .iter()
        .find(|category| category.id.matches(category_id))
        .map(|category| category.name.clone())
        .unwrap_or_else(|| category_id.to_string())
}
