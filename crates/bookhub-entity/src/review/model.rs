//! Review entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user's review of a book.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    /// Unique review identifier.
    pub id: Uuid,
    /// Star rating, 1 through 5.
    pub rating: i32,
    /// Free-text review body.
    pub review_text: Option<String>,
    /// The reviewed book.
    pub book_id: Uuid,
    /// The reviewing user.
    pub user_id: Uuid,
    /// When the review was created.
    pub created_at: DateTime<Utc>,
    /// When the review was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new review.
#[derive(Debug, Clone)]
pub struct CreateReview {
    /// Star rating, 1 through 5.
    pub rating: i32,
    /// Free-text review body.
    pub review_text: Option<String>,
    /// The reviewed book.
    pub book_id: Uuid,
    /// The reviewing user.
    pub user_id: Uuid,
}
