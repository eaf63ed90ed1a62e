//! Book repository functions for the domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::books_sea as books_adapter;
use crate::adapters::books_sea::{BookCreate, BookSearch, BookUpdate};
use crate::entities::books;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Book domain model.
///
/// Converted from the database model (`books::Model`) when rows are loaded
/// through repos functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: Option<i32>,
}

impl From<books::Model> for Book {
    // Deliberately field-by-field so entity/domain drift fails to compile.
    fn from(model: books::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            author: model.author,
            year: model.year,
        }
    }
}

pub async fn create_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: BookCreate,
) -> Result<Book, DomainError> {
    let model = books_adapter::create_book(conn, dto).await?;
    Ok(Book::from(model))
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Book>, DomainError> {
    let models = books_adapter::find_all(conn).await?;
    Ok(models.into_iter().map(Book::from).collect())
}

pub async fn search<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: BookSearch,
) -> Result<Vec<Book>, DomainError> {
    let models = books_adapter::search(conn, filter).await?;
    Ok(models.into_iter().map(Book::from).collect())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
) -> Result<Option<Book>, DomainError> {
    let model = books_adapter::find_by_id(conn, book_id).await?;
    Ok(model.map(Book::from))
}

/// Full-replace update. The absent-id sentinel from the adapter becomes a
/// domain-level not-found; the boundary translates it to 404.
pub async fn update_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: BookUpdate,
) -> Result<Book, DomainError> {
    let book_id = dto.id;
    match books_adapter::update_book(conn, dto).await? {
        Some(model) => Ok(Book::from(model)),
        None => Err(DomainError::not_found(
            NotFoundKind::Book,
            format!("Book with ID {book_id} not found"),
        )),
    }
}

pub async fn delete_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
) -> Result<(), DomainError> {
    if books_adapter::delete_book(conn, book_id).await? {
        Ok(())
    } else {
        Err(DomainError::not_found(
            NotFoundKind::Book,
            format!("Book with ID {book_id} not found"),
        ))
    }
}
