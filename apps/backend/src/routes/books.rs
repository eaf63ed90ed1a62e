//! Book CRUD routes.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::adapters::books_sea::{BookCreate, BookSearch, BookUpdate};
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::extractors::validated_json::ValidatedJson;
use crate::repos::books as books_repo;
use crate::repos::books::Book;
use crate::state::app_state::AppState;

/// Request body for create and update; the id is never client-supplied.
#[derive(Debug, Deserialize)]
pub struct BookPayload {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub year: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: Option<i32>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            year: book.year,
        }
    }
}

/// Boundary validation: title/author must be non-empty before anything
/// reaches the repository layer.
fn validate_payload(payload: &BookPayload) -> Result<(), DomainError> {
    if payload.title.trim().is_empty() {
        return Err(DomainError::validation("title must not be empty"));
    }
    if payload.author.trim().is_empty() {
        return Err(DomainError::validation("author must not be empty"));
    }
    Ok(())
}

/// POST /books
///
/// Creates a book and returns it with the engine-assigned id. Year is
/// optional and persists as NULL when omitted.
async fn create_book(
    http_req: HttpRequest,
    payload: ValidatedJson<BookPayload>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let body = payload.into_inner();
    validate_payload(&body)?;

    let created = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            Ok(books_repo::create_book(
                txn,
                BookCreate {
                    title: body.title,
                    author: body.author,
                    year: body.year,
                },
            )
            .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(BookResponse::from(created)))
}

/// GET /books
async fn list_books(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let books = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(books_repo::find_all(txn).await?) })
    })
    .await?;

    let response: Vec<BookResponse> = books.into_iter().map(BookResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
}

/// GET /books/search?title=&author=&year=
///
/// All parameters optional; with none given this behaves like `GET /books`.
/// Blank values count as absent, so `?title=` does not filter on title.
async fn search_books(
    http_req: HttpRequest,
    query: web::Query<SearchQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let filter = BookSearch {
        title: query.title.filter(|t| !t.is_empty()),
        author: query.author.filter(|a| !a.is_empty()),
        year: query.year,
    };

    let books = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(books_repo::search(txn, filter).await?) })
    })
    .await?;

    let response: Vec<BookResponse> = books.into_iter().map(BookResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// PUT /books/{book_id}
///
/// Full replace of title/author/year; omitting year clears it to NULL.
/// 404 when the id does not exist.
async fn update_book(
    http_req: HttpRequest,
    path: web::Path<i64>,
    payload: ValidatedJson<BookPayload>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let book_id = path.into_inner();
    let body = payload.into_inner();
    validate_payload(&body)?;

    let updated = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            Ok(books_repo::update_book(
                txn,
                BookUpdate {
                    id: book_id,
                    title: body.title,
                    author: body.author,
                    year: body.year,
                },
            )
            .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(BookResponse::from(updated)))
}

/// DELETE /books/{book_id}
///
/// 204 with empty body on success; 404 when the id does not exist.
async fn delete_book(
    http_req: HttpRequest,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let book_id = path.into_inner();

    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(books_repo::delete_book(txn, book_id).await?) })
    })
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/books")
            .route(web::post().to(create_book))
            .route(web::get().to(list_books)),
    );
    // registered before /books/{book_id} so "search" is not parsed as an id
    cfg.service(web::resource("/books/search").route(web::get().to(search_books)));
    cfg.service(
        web::resource("/books/{book_id}")
            .route(web::put().to(update_book))
            .route(web::delete().to(delete_book)),
    );
}
