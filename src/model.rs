//! Book entity and request payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A row in the `books` table. The id is database-generated and immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub page_count: i32,
    pub category: String,
    pub author: String,
}

/// Creation payload. Missing fields take the storage defaults (empty / 0).
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub page_count: i32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub author: String,
}

/// Partial update payload; only supplied fields are written.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPatch {
    pub name: Option<String>,
    pub page_count: Option<i32>,
    pub category: Option<String>,
    pub author: Option<String>,
}

impl BookPatch {
    /// Overwrite the supplied fields of `book` in place.
    pub fn apply(&self, book: &mut Book) {
        if let Some(name) = &self.name {
            book.name = name.clone();
        }
        if let Some(page_count) = self.page_count {
            book.page_count = page_count;
        }
        if let Some(category) = &self.category {
            book.category = category.clone();
        }
        if let Some(author) = &self.author {
            book.author = author.clone();
        }
    }
}
