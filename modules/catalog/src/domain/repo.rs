use async_trait::async_trait;

use crate::contract::{Author, Book, NewAuthor, NewBook};
use crate::domain::query::{AuthorListQuery, BookListQuery};

/// Port for the domain layer: persistence operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait BooksRepository: Send + Sync {
    /// Load a book by id.
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Book>>;
    /// Run the filter/search/order/slice pipeline.
    ///
    /// Returns the pre-slice match count plus the requested page of rows.
    async fn list_page(&self, query: &BookListQuery) -> anyhow::Result<(u64, Vec<Book>)>;
    /// Insert and return the stored row (id is store-assigned).
    async fn insert(&self, new: NewBook) -> anyhow::Result<Book>;
    /// Persist a fully-formed book by primary key.
    async fn update(&self, book: &Book) -> anyhow::Result<()>;
    /// Delete by id. Returns true if a row was deleted.
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}

#[async_trait]
pub trait AuthorsRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Author>>;
    /// Check that an author row exists (FK validation on book writes).
    async fn exists(&self, id: i64) -> anyhow::Result<bool>;
    async fn list_page(&self, query: &AuthorListQuery) -> anyhow::Result<(u64, Vec<Author>)>;
    async fn insert(&self, new: NewAuthor) -> anyhow::Result<Author>;
    async fn update(&self, author: &Author) -> anyhow::Result<()>;
    /// Delete the author and all of their books in one transaction.
    /// Returns true if the author row was deleted.
    async fn delete_cascade(&self, id: i64) -> anyhow::Result<bool>;
}
