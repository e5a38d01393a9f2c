use std::sync::Arc;

use axum::{
    routing::get,
    Extension, Router,
};
use restkit::AuthState;

use crate::api::rest::handlers;
use crate::domain::service::Service;

/// Build the catalog router. The service and auth state ride as extensions
/// so handlers and the `RequireAuth` extractor can reach them.
pub fn router(service: Arc<Service>, auth: Arc<AuthState>) -> Router {
    Router::new()
        .route(
            "/books",
            get(handlers::list_books).post(handlers::create_book),
        )
        .route(
            "/books/{id}",
            get(handlers::get_book)
                .put(handlers::replace_book)
                .patch(handlers::patch_book)
                .delete(handlers::delete_book),
        )
        .route(
            "/authors",
            get(handlers::list_authors).post(handlers::create_author),
        )
        .route(
            "/authors/{id}",
            get(handlers::get_author)
                .put(handlers::replace_author)
                .patch(handlers::patch_author)
                .delete(handlers::delete_author),
        )
        .layer(Extension(service))
        .layer(Extension(auth))
}
