use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Book not found: {id}")]
    BookNotFound { id: i64 },

    #[error("Author not found: {id}")]
    AuthorNotFound { id: i64 },

    #[error("Cannot order by '{field}'")]
    UnknownOrderingField { field: String },

    #[error("Invalid page: {message}")]
    InvalidPage { message: String },

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn book_not_found(id: i64) -> Self {
        Self::BookNotFound { id }
    }

    pub fn author_not_found(id: i64) -> Self {
        Self::AuthorNotFound { id }
    }

    pub fn unknown_ordering_field(field: impl Into<String>) -> Self {
        Self::UnknownOrderingField {
            field: field.into(),
        }
    }

    pub fn invalid_page(message: impl Into<String>) -> Self {
        Self::InvalidPage {
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
