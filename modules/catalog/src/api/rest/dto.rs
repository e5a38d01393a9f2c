use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::contract::{Author, AuthorPatch, Book, BookPatch, NewAuthor, NewBook};
use crate::domain::query::ListParams;

/// REST DTO for book representation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub publication_year: i32,
    pub author_id: i64,
}

/// REST DTO for creating a book. `author` is the author's id.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBookReq {
    pub title: String,
    pub publication_year: i32,
    pub author: i64,
}

/// REST DTO for full book replacement (PUT). All fields are required;
/// an incomplete body is rejected at deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReplaceBookReq {
    pub title: String,
    pub publication_year: i32,
    pub author: i64,
}

/// REST DTO for partial book update (PATCH)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
pub struct PatchBookReq {
    pub title: Option<String>,
    pub publication_year: Option<i32>,
    pub author: Option<i64>,
}

/// REST DTO for author representation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorDto {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateAuthorReq {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReplaceAuthorReq {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
pub struct PatchAuthorReq {
    pub name: Option<String>,
}

/// Raw book-list query parameters. Everything is optional and arrives as a
/// string: filter values are coerced (tolerantly) by the storage layer,
/// `ordering` and `page` are validated (strictly) by the service.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ListBooksQuery {
    pub title: Option<String>,
    pub author_name: Option<String>,
    pub author: Option<String>,
    pub publication_year: Option<String>,
    pub publication_year_min: Option<String>,
    pub publication_year_max: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
    pub page: Option<String>,
}

impl ListBooksQuery {
    pub fn into_params(self) -> ListParams {
        let mut filters = Vec::new();
        let mut push = |name: &str, value: Option<String>| {
            if let Some(v) = value {
                filters.push((name.to_string(), v));
            }
        };
        push("title", self.title);
        push("author_name", self.author_name);
        push("author", self.author);
        push("publication_year", self.publication_year);
        push("publication_year_min", self.publication_year_min);
        push("publication_year_max", self.publication_year_max);
        ListParams {
            filters,
            search: self.search,
            ordering: self.ordering,
            page: self.page,
        }
    }
}

/// Raw author-list query parameters.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ListAuthorsQuery {
    pub name: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
    pub page: Option<String>,
}

impl ListAuthorsQuery {
    pub fn into_params(self) -> ListParams {
        let mut filters = Vec::new();
        if let Some(v) = self.name {
            filters.push(("name".to_string(), v));
        }
        ListParams {
            filters,
            search: self.search,
            ordering: self.ordering,
            page: self.page,
        }
    }
}

// Conversion implementations between REST DTOs and contract models

impl From<Book> for BookDto {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            publication_year: book.publication_year,
            author_id: book.author_id,
        }
    }
}

impl From<CreateBookReq> for NewBook {
    fn from(req: CreateBookReq) -> Self {
        Self {
            title: req.title,
            publication_year: req.publication_year,
            author_id: req.author,
        }
    }
}

impl From<ReplaceBookReq> for BookPatch {
    fn from(req: ReplaceBookReq) -> Self {
        Self {
            title: Some(req.title),
            publication_year: Some(req.publication_year),
            author_id: Some(req.author),
        }
    }
}

impl From<PatchBookReq> for BookPatch {
    fn from(req: PatchBookReq) -> Self {
        Self {
            title: req.title,
            publication_year: req.publication_year,
            author_id: req.author,
        }
    }
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            id: author.id,
            name: author.name,
        }
    }
}

impl From<CreateAuthorReq> for NewAuthor {
    fn from(req: CreateAuthorReq) -> Self {
        Self { name: req.name }
    }
}

impl From<ReplaceAuthorReq> for AuthorPatch {
    fn from(req: ReplaceAuthorReq) -> Self {
        Self {
            name: Some(req.name),
        }
    }
}

impl From<PatchAuthorReq> for AuthorPatch {
    fn from(req: PatchAuthorReq) -> Self {
        Self { name: req.name }
    }
}
