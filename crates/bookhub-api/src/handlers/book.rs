//! Book catalogue handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use bookhub_entity::book::Book;
use bookhub_entity::book::model::{CreateBook, UpdateBook};

use crate::dto;
use crate::dto::request::{CreateBookRequest, UpdateBookRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/books
pub async fn list_books(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Book>>>, ApiError> {
    let books = state.book_service.list_books().await?;
    Ok(Json(ApiResponse::ok(books)))
}

/// GET /api/books/user/{user_id}
pub async fn list_user_books(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Book>>>, ApiError> {
    let books = state.book_service.list_user_books(user_id).await?;
    Ok(Json(ApiResponse::ok(books)))
}

/// GET /api/books/{id}
pub async fn get_book(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Book>>, ApiError> {
    let book = state.book_service.get_book(id).await?;
    Ok(Json(ApiResponse::ok(book)))
}

/// POST /api/books
pub async fn create_book(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateBookRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Book>>), ApiError> {
    dto::validate(&req)?;

    let book = state
        .book_service
        .create_book(CreateBook {
            title: req.title,
            author: req.author,
            publisher: req.publisher,
            published_date: req.published_date,
            page_count: req.page_count,
            language: req.language,
            user_id: auth.claims.sub,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(book))))
}

/// PATCH /api/books/{id}
pub async fn update_book(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateBookRequest>,
) -> Result<Json<ApiResponse<Book>>, ApiError> {
    let book = state
        .book_service
        .update_book(
            id,
            UpdateBook {
                title: req.title,
                author: req.author,
                publisher: req.publisher,
                page_count: req.page_count,
                language: req.language,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(book)))
}

/// DELETE /api/books/{id}
pub async fn delete_book(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.book_service.delete_book(id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Book deleted".to_string(),
    })))
}
