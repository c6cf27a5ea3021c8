//! Review operations against catalogue books.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use bookhub_core::error::AppError;
use bookhub_database::repositories::book::BookRepository;
use bookhub_database::repositories::review::ReviewRepository;
use bookhub_entity::review::Review;
use bookhub_entity::review::model::CreateReview;
use bookhub_entity::user::UserRole;

/// Handles review operations.
#[derive(Debug, Clone)]
pub struct ReviewService {
    /// Review repository.
    review_repo: Arc<ReviewRepository>,
    /// Book repository, for existence checks.
    book_repo: Arc<BookRepository>,
}

/// Data for posting a new review.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NewReview {
    /// Star rating, 1 through 5.
    pub rating: i32,
    /// Optional free-form review body.
    pub review_text: Option<String>,
}

impl ReviewService {
    /// Creates a new review service.
    pub fn new(review_repo: Arc<ReviewRepository>, book_repo: Arc<BookRepository>) -> Self {
        Self {
            review_repo,
            book_repo,
        }
    }

    /// Lists reviews for a book, newest first.
    pub async fn list_for_book(&self, book_id: Uuid) -> Result<Vec<Review>, AppError> {
        self.require_book(book_id).await?;
        self.review_repo.find_by_book(book_id).await
    }

    /// Posts a review against an existing book.
    pub async fn create_review(
        &self,
        user_id: Uuid,
        book_id: Uuid,
        data: NewReview,
    ) -> Result<Review, AppError> {
        if !(1..=5).contains(&data.rating) {
            return Err(AppError::validation("Rating must be between 1 and 5"));
        }
        self.require_book(book_id).await?;

        let review = self
            .review_repo
            .create(&CreateReview {
                rating: data.rating,
                review_text: data.review_text,
                book_id,
                user_id,
            })
            .await?;

        info!(review_id = %review.id, book_id = %book_id, "Review posted");
        Ok(review)
    }

    /// Deletes a review.
    ///
    /// Only the review's author or an admin may delete it.
    pub async fn delete_review(
        &self,
        review_id: Uuid,
        user_id: Uuid,
        role: UserRole,
    ) -> Result<(), AppError> {
        let review = self
            .review_repo
            .find_by_id(review_id)
            .await?
            .ok_or_else(|| AppError::not_found("Review not found"))?;

        if review.user_id != user_id && !role.is_admin() {
            return Err(AppError::insufficient_permission(
                "Only the review's author may delete it",
            ));
        }

        self.review_repo.delete(review_id).await?;
        info!(review_id = %review_id, "Review deleted");
        Ok(())
    }

    async fn require_book(&self, book_id: Uuid) -> Result<(), AppError> {
        if self.book_repo.find_by_id(book_id).await?.is_none() {
            return Err(AppError::not_found("Book not found"));
        }
        Ok(())
    }
}
