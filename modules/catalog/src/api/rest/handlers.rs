use std::sync::Arc;

use axum::{
    extract::{OriginalUri, Path},
    http::StatusCode,
    response::Json,
    Extension,
};
use restkit::{Page, ProblemResponse, RequireAuth, ValidJson, ValidQuery};
use tracing::info;

use crate::api::rest::dto::{
    AuthorDto, BookDto, CreateAuthorReq, CreateBookReq, ListAuthorsQuery, ListBooksQuery,
    PatchAuthorReq, PatchBookReq, ReplaceAuthorReq, ReplaceBookReq,
};
use crate::api::rest::error::map_domain_error;
use crate::domain::service::Service;

// --- books ---

/// List books through the filter → search → order → paginate pipeline.
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(
        ("title" = Option<String>, Query, description = "Substring match on title (case-insensitive)"),
        ("author_name" = Option<String>, Query, description = "Substring match on author name (case-insensitive)"),
        ("author" = Option<i64>, Query, description = "Exact author id"),
        ("publication_year" = Option<i32>, Query, description = "Exact publication year"),
        ("publication_year_min" = Option<i32>, Query, description = "Minimum publication year (inclusive)"),
        ("publication_year_max" = Option<i32>, Query, description = "Maximum publication year (inclusive)"),
        ("search" = Option<String>, Query, description = "Substring search across title and author name"),
        ("ordering" = Option<String>, Query, description = "title | publication_year | author__name | id, '-' prefix for descending"),
        ("page" = Option<u64>, Query, description = "1-indexed page number")
    ),
    responses(
        (status = 200, description = "One page of books"),
        (status = 400, description = "Unknown ordering field", body = restkit::Problem),
        (status = 404, description = "Page out of range", body = restkit::Problem)
    )
)]
pub async fn list_books(
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    ValidQuery(query): ValidQuery<ListBooksQuery>,
) -> Result<Json<Page<BookDto>>, ProblemResponse> {
    let slice = svc
        .list_books(query.into_params())
        .await
        .map_err(|e| map_domain_error(&e, uri.path()))?;
    let page = Page::from_slice(slice.count, slice.items, &slice.page, &uri)
        .map_items(BookDto::from);
    Ok(Json(page))
}

/// Get a specific book by id.
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book found", body = BookDto),
        (status = 404, description = "Not found", body = restkit::Problem)
    )
)]
pub async fn get_book(
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
) -> Result<Json<BookDto>, ProblemResponse> {
    let book = svc
        .get_book(id)
        .await
        .map_err(|e| map_domain_error(&e, uri.path()))?;
    Ok(Json(book.into()))
}

/// Create a book. Requires an authenticated caller.
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBookReq,
    responses(
        (status = 201, description = "Created book", body = BookDto),
        (status = 400, description = "Validation error", body = restkit::Problem),
        (status = 401, description = "Unauthorized", body = restkit::Problem)
    ),
    security(("bearerAuth" = []))
)]
pub async fn create_book(
    auth: RequireAuth,
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    ValidJson(req): ValidJson<CreateBookReq>,
) -> Result<(StatusCode, Json<BookDto>), ProblemResponse> {
    info!(subject = %auth.subject, "creating book");
    let book = svc
        .create_book(req.into())
        .await
        .map_err(|e| map_domain_error(&e, uri.path()))?;
    Ok((StatusCode::CREATED, Json(book.into())))
}

/// Replace a book (full update; all fields required).
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book id")),
    request_body = ReplaceBookReq,
    responses(
        (status = 200, description = "Updated book", body = BookDto),
        (status = 400, description = "Validation error", body = restkit::Problem),
        (status = 401, description = "Unauthorized", body = restkit::Problem),
        (status = 404, description = "Not found", body = restkit::Problem)
    ),
    security(("bearerAuth" = []))
)]
pub async fn replace_book(
    auth: RequireAuth,
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
    ValidJson(req): ValidJson<ReplaceBookReq>,
) -> Result<Json<BookDto>, ProblemResponse> {
    info!(subject = %auth.subject, book_id = id, "replacing book");
    let book = svc
        .update_book(id, req.into())
        .await
        .map_err(|e| map_domain_error(&e, uri.path()))?;
    Ok(Json(book.into()))
}

/// Update a book (partial; only supplied fields change).
#[utoipa::path(
    patch,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book id")),
    request_body = PatchBookReq,
    responses(
        (status = 200, description = "Updated book", body = BookDto),
        (status = 400, description = "Validation error", body = restkit::Problem),
        (status = 401, description = "Unauthorized", body = restkit::Problem),
        (status = 404, description = "Not found", body = restkit::Problem)
    ),
    security(("bearerAuth" = []))
)]
pub async fn patch_book(
    auth: RequireAuth,
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
    ValidJson(req): ValidJson<PatchBookReq>,
) -> Result<Json<BookDto>, ProblemResponse> {
    info!(subject = %auth.subject, book_id = id, "patching book");
    let book = svc
        .update_book(id, req.into())
        .await
        .map_err(|e| map_domain_error(&e, uri.path()))?;
    Ok(Json(book.into()))
}

/// Delete a book by id.
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 401, description = "Unauthorized", body = restkit::Problem),
        (status = 404, description = "Not found", body = restkit::Problem)
    ),
    security(("bearerAuth" = []))
)]
pub async fn delete_book(
    auth: RequireAuth,
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
) -> Result<StatusCode, ProblemResponse> {
    info!(subject = %auth.subject, book_id = id, "deleting book");
    svc.delete_book(id)
        .await
        .map_err(|e| map_domain_error(&e, uri.path()))?;
    Ok(StatusCode::NO_CONTENT)
}

// --- authors ---

/// List authors (name filter, search, ordering, pagination).
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    params(
        ("name" = Option<String>, Query, description = "Substring match on name (case-insensitive)"),
        ("search" = Option<String>, Query, description = "Substring search on name"),
        ("ordering" = Option<String>, Query, description = "name | id, '-' prefix for descending"),
        ("page" = Option<u64>, Query, description = "1-indexed page number")
    ),
    responses(
        (status = 200, description = "One page of authors"),
        (status = 400, description = "Unknown ordering field", body = restkit::Problem),
        (status = 404, description = "Page out of range", body = restkit::Problem)
    )
)]
pub async fn list_authors(
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    ValidQuery(query): ValidQuery<ListAuthorsQuery>,
) -> Result<Json<Page<AuthorDto>>, ProblemResponse> {
    let slice = svc
        .list_authors(query.into_params())
        .await
        .map_err(|e| map_domain_error(&e, uri.path()))?;
    let page = Page::from_slice(slice.count, slice.items, &slice.page, &uri)
        .map_items(AuthorDto::from);
    Ok(Json(page))
}

/// Get a specific author by id.
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author id")),
    responses(
        (status = 200, description = "Author found", body = AuthorDto),
        (status = 404, description = "Not found", body = restkit::Problem)
    )
)]
pub async fn get_author(
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
) -> Result<Json<AuthorDto>, ProblemResponse> {
    let author = svc
        .get_author(id)
        .await
        .map_err(|e| map_domain_error(&e, uri.path()))?;
    Ok(Json(author.into()))
}

/// Create an author. Requires an authenticated caller.
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = CreateAuthorReq,
    responses(
        (status = 201, description = "Created author", body = AuthorDto),
        (status = 400, description = "Validation error", body = restkit::Problem),
        (status = 401, description = "Unauthorized", body = restkit::Problem)
    ),
    security(("bearerAuth" = []))
)]
pub async fn create_author(
    auth: RequireAuth,
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    ValidJson(req): ValidJson<CreateAuthorReq>,
) -> Result<(StatusCode, Json<AuthorDto>), ProblemResponse> {
    info!(subject = %auth.subject, "creating author");
    let author = svc
        .create_author(req.into())
        .await
        .map_err(|e| map_domain_error(&e, uri.path()))?;
    Ok((StatusCode::CREATED, Json(author.into())))
}

/// Replace an author (full update).
#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author id")),
    request_body = ReplaceAuthorReq,
    responses(
        (status = 200, description = "Updated author", body = AuthorDto),
        (status = 400, description = "Validation error", body = restkit::Problem),
        (status = 401, description = "Unauthorized", body = restkit::Problem),
        (status = 404, description = "Not found", body = restkit::Problem)
    ),
    security(("bearerAuth" = []))
)]
pub async fn replace_author(
    auth: RequireAuth,
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
    ValidJson(req): ValidJson<ReplaceAuthorReq>,
) -> Result<Json<AuthorDto>, ProblemResponse> {
    info!(subject = %auth.subject, author_id = id, "replacing author");
    let author = svc
        .update_author(id, req.into())
        .await
        .map_err(|e| map_domain_error(&e, uri.path()))?;
    Ok(Json(author.into()))
}

/// Update an author (partial).
#[utoipa::path(
    patch,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author id")),
    request_body = PatchAuthorReq,
    responses(
        (status = 200, description = "Updated author", body = AuthorDto),
        (status = 400, description = "Validation error", body = restkit::Problem),
        (status = 401, description = "Unauthorized", body = restkit::Problem),
        (status = 404, description = "Not found", body = restkit::Problem)
    ),
    security(("bearerAuth" = []))
)]
pub async fn patch_author(
    auth: RequireAuth,
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
    ValidJson(req): ValidJson<PatchAuthorReq>,
) -> Result<Json<AuthorDto>, ProblemResponse> {
    info!(subject = %auth.subject, author_id = id, "patching author");
    let author = svc
        .update_author(id, req.into())
        .await
        .map_err(|e| map_domain_error(&e, uri.path()))?;
    Ok(Json(author.into()))
}

/// Delete an author and, by cascade, all of their books.
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author id")),
    responses(
        (status = 204, description = "Author and their books deleted"),
        (status = 401, description = "Unauthorized", body = restkit::Problem),
        (status = 404, description = "Not found", body = restkit::Problem)
    ),
    security(("bearerAuth" = []))
)]
pub async fn delete_author(
    auth: RequireAuth,
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
) -> Result<StatusCode, ProblemResponse> {
    info!(subject = %auth.subject, author_id = id, "deleting author");
    svc.delete_author(id)
        .await
        .map_err(|e| map_domain_error(&e, uri.path()))?;
    Ok(StatusCode::NO_CONTENT)
}
