//! Unit-of-work tests for `with_txn`.
//!
//! Covers the owned-transaction path (commit on Ok, rollback on Err) and the
//! caller-supplied SharedTxn path (no commit or rollback inside the wrapper).

mod support;

use std::sync::Arc;

use actix_web::{test, HttpMessage};
use book_api::adapters::books_sea::{self, BookCreate};
use book_api::db::require_db;
use book_api::db::txn::{with_txn, SharedTxn};
use book_api::error::AppError;
use book_api::state::app_state::AppState;
use sea_orm::TransactionTrait;

fn dune() -> BookCreate {
    BookCreate {
        title: "Dune".to_string(),
        author: "Herbert".to_string(),
        year: Some(1965),
    }
}

#[actix_web::test]
async fn owned_txn_commits_on_ok() {
    let state = support::test_state().await;

    let created = with_txn(None, &state, |txn| {
        Box::pin(async move { Ok(books_sea::create_book(txn, dune()).await?) })
    })
    .await
    .unwrap();

    // visible outside the (now committed) transaction
    let conn = require_db(&state).unwrap();
    let all = books_sea::find_all(conn).await.unwrap();
    assert_eq!(all, vec![created]);
}

#[actix_web::test]
async fn owned_txn_rolls_back_on_err_and_preserves_error() {
    let state = support::test_state().await;

    let result: Result<(), AppError> = with_txn(None, &state, |txn| {
        Box::pin(async move {
            books_sea::create_book(txn, dune()).await?;
            // fail after the write; the insert must not survive
            Err(AppError::internal("boom".to_string()))
        })
    })
    .await;

    assert!(matches!(result, Err(AppError::Internal { .. })));

    let conn = require_db(&state).unwrap();
    let all = books_sea::find_all(conn).await.unwrap();
    assert!(all.is_empty(), "rolled-back insert must not be visible");
}

#[actix_web::test]
async fn shared_txn_is_caller_owned() {
    let conn = support::test_db().await;

    // State without a database: if with_txn tried to open its own
    // transaction this would fail, proving the shared path is used.
    let state = AppState::without_db();

    let txn = conn.begin().await.unwrap();
    let shared = SharedTxn(Arc::new(txn));

    let req = test::TestRequest::default().to_http_request();
    req.extensions_mut().insert(shared.clone());
    assert_eq!(shared.strong_count(), 2, "request extensions hold a handle");

    with_txn(Some(&req), &state, |txn| {
        Box::pin(async move {
            books_sea::create_book(txn, dune()).await?;
            Ok(())
        })
    })
    .await
    .unwrap();

    // wrapper did not commit: rolling back discards the insert
    drop(req);
    assert_eq!(shared.strong_count(), 1, "only the test handle remains");
    shared.rollback().await.unwrap();

    let all = books_sea::find_all(&conn).await.unwrap();
    assert!(all.is_empty(), "caller rollback must discard the insert");
}

#[actix_web::test]
async fn without_db_and_without_shared_txn_fails() {
    let state = AppState::without_db();

    let result: Result<(), AppError> = with_txn(None, &state, |_txn| {
        Box::pin(async move { Ok(()) })
    })
    .await;

    assert!(matches!(result, Err(AppError::DbUnavailable { .. })));
}
