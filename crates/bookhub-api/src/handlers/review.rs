//! Review handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use bookhub_entity::review::Review;
use bookhub_service::review::NewReview;

use crate::dto;
use crate::dto::request::CreateReviewRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/reviews/{book_id}
pub async fn list_book_reviews(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(book_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Review>>>, ApiError> {
    let reviews = state.review_service.list_for_book(book_id).await?;
    Ok(Json(ApiResponse::ok(reviews)))
}

/// POST /api/reviews/books/{book_id}
pub async fn create_review(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(book_id): Path<Uuid>,
    Json(req): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Review>>), ApiError> {
    dto::validate(&req)?;

    let review = state
        .review_service
        .create_review(
            auth.claims.sub,
            book_id,
            NewReview {
                rating: req.rating,
                review_text: req.review_text,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(review))))
}

/// DELETE /api/reviews/{id}
pub async fn delete_review(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .review_service
        .delete_review(id, auth.claims.sub, auth.claims.role)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Review deleted".to_string(),
    })))
}
