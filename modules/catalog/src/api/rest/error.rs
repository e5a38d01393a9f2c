use axum::http::StatusCode;
use restkit::{Problem, ProblemResponse, ValidationError};

use crate::domain::error::DomainError;

/// Helper to create a ProblemResponse with less boilerplate
pub fn from_parts(
    status: StatusCode,
    code: &str,
    title: &str,
    detail: impl Into<String>,
    instance: &str,
) -> ProblemResponse {
    Problem::new(status, title, detail)
        .with_type(format!("https://errors.bookshelf.dev/{}", code))
        .with_code(code)
        .with_instance(instance)
        .into()
}

/// Map domain error to RFC 9457 ProblemResponse
pub fn map_domain_error(e: &DomainError, instance: &str) -> ProblemResponse {
    match e {
        DomainError::BookNotFound { id } => from_parts(
            StatusCode::NOT_FOUND,
            "CATALOG_BOOK_NOT_FOUND",
            "Book not found",
            format!("Book with id {} was not found", id),
            instance,
        ),
        DomainError::AuthorNotFound { id } => from_parts(
            StatusCode::NOT_FOUND,
            "CATALOG_AUTHOR_NOT_FOUND",
            "Author not found",
            format!("Author with id {} was not found", id),
            instance,
        ),
        DomainError::UnknownOrderingField { field } => from_parts(
            StatusCode::BAD_REQUEST,
            "CATALOG_ORDERING_INVALID",
            "Invalid ordering field",
            format!("'{}' is not an orderable field", field),
            instance,
        ),
        // The paginator owns the page parameter: anything it cannot resolve
        // to an existing page is a 404.
        DomainError::InvalidPage { message } => from_parts(
            StatusCode::NOT_FOUND,
            "CATALOG_PAGE_INVALID",
            "Invalid page",
            message.clone(),
            instance,
        ),
        DomainError::Validation { field, message } => {
            let ProblemResponse(problem) = from_parts(
                StatusCode::BAD_REQUEST,
                "CATALOG_VALIDATION",
                "Validation error",
                format!("{}: {}", field, message),
                instance,
            );
            ProblemResponse(problem.with_errors(vec![ValidationError {
                detail: message.clone(),
                pointer: format!("/{}", field),
            }]))
        }
        DomainError::Database { .. } => {
            // Log the internal error details but don't expose them to the client
            tracing::error!(error = ?e, "Database error occurred");
            from_parts(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_DB",
                "Internal error",
                "An internal database error occurred",
                instance,
            )
        }
    }
}
