//! Input DTOs for the book adapter.

/// Fields for a new book row; the id is assigned by the storage engine.
#[derive(Debug, Clone)]
pub struct BookCreate {
    pub title: String,
    pub author: String,
    pub year: Option<i32>,
}

/// Full-replace update: title, author and year are all overwritten.
/// An omitted year clears the column to NULL; this is not a partial patch.
#[derive(Debug, Clone)]
pub struct BookUpdate {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: Option<i32>,
}

/// Conjunctive equality filter; `None` fields are not filtered on.
#[derive(Debug, Clone, Default)]
pub struct BookSearch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
}
