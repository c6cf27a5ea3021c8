//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Username.
    #[validate(length(min = 3, max = 100))]
    pub username: String,
    /// Given name.
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    /// Email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create book request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBookRequest {
    /// Title.
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    /// Author name.
    #[validate(length(min = 1, max = 255))]
    pub author: String,
    /// Publisher name.
    #[validate(length(min = 1, max = 255))]
    pub publisher: String,
    /// Publication date.
    pub published_date: NaiveDate,
    /// Number of pages.
    #[validate(range(min = 1))]
    pub page_count: i32,
    /// Language the book is written in.
    #[validate(length(min = 1, max = 64))]
    pub language: String,
}

/// Update book request. Absent fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookRequest {
    /// New title.
    pub title: Option<String>,
    /// New author name.
    pub author: Option<String>,
    /// New publisher name.
    pub publisher: Option<String>,
    /// New page count.
    pub page_count: Option<i32>,
    /// New language.
    pub language: Option<String>,
}

/// Create review request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReviewRequest {
    /// Star rating, 1 through 5.
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    /// Optional free-form review body.
    pub review_text: Option<String>,
}
