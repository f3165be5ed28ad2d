//! The `Book` entity and its request shapes.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// A stored book row.
///
/// Also the update payload: an update replaces every mutable field of the row
/// identified by `id`, so an absent field is written as `NULL`. An absent or
/// `null` id reads as `0`, which saves as a new row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Book {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
}

/// Create payload. Carries no identifier; the store assigns one.
///
/// Absent or `null` fields read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct NewBook {
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub publisher: String,
}

impl Book {
    pub fn from_new(id: i64, new_book: &NewBook) -> Self {
        Self {
            id,
            author: Some(new_book.author.clone()),
            title: Some(new_book.title.clone()),
            publisher: Some(new_book.publisher.clone()),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
