use axum::Json;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Book Catalog API",
        description = "CRUD REST API for a book catalog with filtering, search, ordering and pagination",
        version = "0.1.0"
    ),
    paths(
        catalog::api::rest::handlers::list_books,
        catalog::api::rest::handlers::get_book,
        catalog::api::rest::handlers::create_book,
        catalog::api::rest::handlers::replace_book,
        catalog::api::rest::handlers::patch_book,
        catalog::api::rest::handlers::delete_book,
        catalog::api::rest::handlers::list_authors,
        catalog::api::rest::handlers::get_author,
        catalog::api::rest::handlers::create_author,
        catalog::api::rest::handlers::replace_author,
        catalog::api::rest::handlers::patch_author,
        catalog::api::rest::handlers::delete_author,
    ),
    components(schemas(
        catalog::api::rest::dto::BookDto,
        catalog::api::rest::dto::CreateBookReq,
        catalog::api::rest::dto::ReplaceBookReq,
        catalog::api::rest::dto::PatchBookReq,
        catalog::api::rest::dto::AuthorDto,
        catalog::api::rest::dto::CreateAuthorReq,
        catalog::api::rest::dto::ReplaceAuthorReq,
        catalog::api::rest::dto::PatchAuthorReq,
        restkit::Problem,
        restkit::ValidationError,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "books", description = "Book catalog operations"),
        (name = "authors", description = "Author operations")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
