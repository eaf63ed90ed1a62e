//! SeaORM adapter for the book repository - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set,
};

use crate::entities::books;

pub mod dto;

pub use dto::{BookCreate, BookSearch, BookUpdate};

// Adapter functions return DbErr; the repos layer maps to DomainError via From<DbErr>.

pub async fn create_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: BookCreate,
) -> Result<books::Model, sea_orm::DbErr> {
    let book_active = books::ActiveModel {
        id: NotSet,
        title: Set(dto.title),
        author: Set(dto.author),
        year: Set(dto.year),
    };

    // insert flushes the row and returns it with the engine-assigned id
    book_active.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
) -> Result<Option<books::Model>, sea_orm::DbErr> {
    books::Entity::find_by_id(book_id).one(conn).await
}

/// All rows. Insertion order is not promised.
pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<books::Model>, sea_orm::DbErr> {
    books::Entity::find().all(conn).await
}

/// Conjunctive equality search over title/author/year.
///
/// Filters are applied for whichever fields are `Some`; with none set this is
/// identical to `find_all`. Exact match only, no substring semantics.
pub async fn search<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: BookSearch,
) -> Result<Vec<books::Model>, sea_orm::DbErr> {
    let mut query = books::Entity::find();
    if let Some(title) = filter.title {
        query = query.filter(books::Column::Title.eq(title));
    }
    if let Some(author) = filter.author {
        query = query.filter(books::Column::Author.eq(author));
    }
    if let Some(year) = filter.year {
        query = query.filter(books::Column::Year.eq(year));
    }
    query.all(conn).await
}

/// Full-replace update of title/author/year. Returns `None` (with no side
/// effects) when the id does not exist.
pub async fn update_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: BookUpdate,
) -> Result<Option<books::Model>, sea_orm::DbErr> {
    let Some(existing) = books::Entity::find_by_id(dto.id).one(conn).await? else {
        return Ok(None);
    };

    let mut book_active: books::ActiveModel = existing.into();
    book_active.title = Set(dto.title);
    book_active.author = Set(dto.author);
    // Unconditionally overwritten: an absent year clears the column
    book_active.year = Set(dto.year);

    let updated = book_active.update(conn).await?;
    Ok(Some(updated))
}

/// Delete by id. Returns `false` when no row was removed.
pub async fn delete_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
) -> Result<bool, sea_orm::DbErr> {
    let result = books::Entity::delete_by_id(book_id).exec(conn).await?;
    Ok(result.rows_affected > 0)
}
