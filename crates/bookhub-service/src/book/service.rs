//! Book catalogue operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use bookhub_core::error::AppError;
use bookhub_database::repositories::book::BookRepository;
use bookhub_entity::book::Book;
use bookhub_entity::book::model::{CreateBook, UpdateBook};

/// Handles book catalogue operations.
#[derive(Debug, Clone)]
pub struct BookService {
    /// Book repository.
    book_repo: Arc<BookRepository>,
}

impl BookService {
    /// Creates a new book service.
    pub fn new(book_repo: Arc<BookRepository>) -> Self {
        Self { book_repo }
    }

    /// Lists the whole catalogue, newest first.
    pub async fn list_books(&self) -> Result<Vec<Book>, AppError> {
        self.book_repo.find_all().await
    }

    /// Lists books submitted by a given user, newest first.
    pub async fn list_user_books(&self, user_id: Uuid) -> Result<Vec<Book>, AppError> {
        self.book_repo.find_by_user(user_id).await
    }

    /// Fetches a single book.
    pub async fn get_book(&self, id: Uuid) -> Result<Book, AppError> {
        self.book_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Book not found"))
    }

    /// Adds a book to the catalogue, recording the submitting user.
    pub async fn create_book(&self, data: CreateBook) -> Result<Book, AppError> {
        let book = self.book_repo.create(&data).await?;
        info!(book_id = %book.id, "Book created");
        Ok(book)
    }

    /// Updates a book's fields.
    pub async fn update_book(&self, id: Uuid, data: UpdateBook) -> Result<Book, AppError> {
        self.book_repo
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("Book not found"))
    }

    /// Removes a book from the catalogue.
    pub async fn delete_book(&self, id: Uuid) -> Result<(), AppError> {
        if !self.book_repo.delete(id).await? {
            return Err(AppError::not_found("Book not found"));
        }
        info!(book_id = %id, "Book deleted");
        Ok(())
    }
}
