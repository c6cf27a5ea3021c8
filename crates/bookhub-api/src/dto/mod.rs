//! Request and response DTOs.

pub mod request;
pub mod response;

use bookhub_core::error::AppError;
use validator::Validate;

/// Runs derive-based validation and maps failures to a validation error.
pub fn validate<T: Validate>(dto: &T) -> Result<(), AppError> {
    dto.validate()
        .map_err(|e| AppError::validation(e.to_string()))
}
