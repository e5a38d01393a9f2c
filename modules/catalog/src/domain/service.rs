use std::sync::Arc;

use chrono::{Datelike, Utc};
use restkit::PageRequest;
use tracing::{debug, info, instrument};

use crate::config::CatalogConfig;
use crate::contract::{Author, AuthorPatch, Book, BookPatch, NewAuthor, NewBook};
use crate::domain::error::DomainError;
use crate::domain::query::{
    AuthorListQuery, BookListQuery, ListParams, ListSlice, Ordering, DEFAULT_AUTHOR_ORDERING,
    DEFAULT_BOOK_ORDERING,
};
use crate::domain::repo::{AuthorsRepository, BooksRepository};

/// Domain service with the catalog's business rules.
/// Depends only on the repository ports, not on infra types.
#[derive(Clone)]
pub struct Service {
    books: Arc<dyn BooksRepository>,
    authors: Arc<dyn AuthorsRepository>,
    config: CatalogConfig,
}

impl Service {
    pub fn new(
        books: Arc<dyn BooksRepository>,
        authors: Arc<dyn AuthorsRepository>,
        config: CatalogConfig,
    ) -> Self {
        Self {
            books,
            authors,
            config,
        }
    }

    // --- books: read path ---

    /// Resolve the list pipeline: filter → search → order → paginate.
    ///
    /// Ordering and page number are validated here (strict); filter values
    /// are passed through raw and coerced tolerantly in storage.
    #[instrument(name = "catalog.service.list_books", skip(self, params))]
    pub async fn list_books(&self, params: ListParams) -> Result<ListSlice<Book>, DomainError> {
        let ordering = Ordering::parse_or(params.ordering.as_deref(), DEFAULT_BOOK_ORDERING)?;
        let page = PageRequest::parse(params.page.as_deref(), self.config.page_size)
            .map_err(|e| DomainError::invalid_page(e.to_string()))?;

        let query = BookListQuery {
            filters: params.filters,
            search: params.search,
            ordering,
            page,
        };
        let (count, items) = self
            .books
            .list_page(&query)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        page.ensure_in_range(count)
            .map_err(|e| DomainError::invalid_page(e.to_string()))?;

        debug!(count, returned = items.len(), "resolved book list page");
        Ok(ListSlice { count, items, page })
    }

    #[instrument(name = "catalog.service.get_book", skip(self), fields(book_id = %id))]
    pub async fn get_book(&self, id: i64) -> Result<Book, DomainError> {
        self.books
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::book_not_found(id))
    }

    // --- books: write path ---

    #[instrument(name = "catalog.service.create_book", skip(self, new), fields(title = %new.title))]
    pub async fn create_book(&self, new: NewBook) -> Result<Book, DomainError> {
        self.validate_title(&new.title)?;
        self.validate_publication_year(new.publication_year)?;
        self.validate_author_ref(new.author_id).await?;

        let book = self
            .books
            .insert(new)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        info!(book_id = book.id, "created book");
        Ok(book)
    }

    /// Shared by PUT (patch with every field set) and PATCH (subset).
    #[instrument(name = "catalog.service.update_book", skip(self, patch), fields(book_id = %id))]
    pub async fn update_book(&self, id: i64, patch: BookPatch) -> Result<Book, DomainError> {
        let mut current = self.get_book(id).await?;

        if let Some(title) = patch.title {
            self.validate_title(&title)?;
            current.title = title;
        }
        if let Some(year) = patch.publication_year {
            self.validate_publication_year(year)?;
            current.publication_year = year;
        }
        if let Some(author_id) = patch.author_id {
            self.validate_author_ref(author_id).await?;
            current.author_id = author_id;
        }

        self.books
            .update(&current)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        info!("updated book");
        Ok(current)
    }

    #[instrument(name = "catalog.service.delete_book", skip(self), fields(book_id = %id))]
    pub async fn delete_book(&self, id: i64) -> Result<(), DomainError> {
        let deleted = self
            .books
            .delete(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        if !deleted {
            return Err(DomainError::book_not_found(id));
        }
        info!("deleted book");
        Ok(())
    }

    // --- authors ---

    #[instrument(name = "catalog.service.list_authors", skip(self, params))]
    pub async fn list_authors(
        &self,
        params: ListParams,
    ) -> Result<ListSlice<Author>, DomainError> {
        let ordering = Ordering::parse_or(params.ordering.as_deref(), DEFAULT_AUTHOR_ORDERING)?;
        let page = PageRequest::parse(params.page.as_deref(), self.config.page_size)
            .map_err(|e| DomainError::invalid_page(e.to_string()))?;

        let query = AuthorListQuery {
            filters: params.filters,
            search: params.search,
            ordering,
            page,
        };
        let (count, items) = self
            .authors
            .list_page(&query)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        page.ensure_in_range(count)
            .map_err(|e| DomainError::invalid_page(e.to_string()))?;
        Ok(ListSlice { count, items, page })
    }

    #[instrument(name = "catalog.service.get_author", skip(self), fields(author_id = %id))]
    pub async fn get_author(&self, id: i64) -> Result<Author, DomainError> {
        self.authors
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::author_not_found(id))
    }

    #[instrument(name = "catalog.service.create_author", skip(self, new), fields(name = %new.name))]
    pub async fn create_author(&self, new: NewAuthor) -> Result<Author, DomainError> {
        self.validate_name(&new.name)?;
        let author = self
            .authors
            .insert(new)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        info!(author_id = author.id, "created author");
        Ok(author)
    }

    #[instrument(name = "catalog.service.update_author", skip(self, patch), fields(author_id = %id))]
    pub async fn update_author(
        &self,
        id: i64,
        patch: AuthorPatch,
    ) -> Result<Author, DomainError> {
        let mut current = self.get_author(id).await?;
        if let Some(name) = patch.name {
            self.validate_name(&name)?;
            current.name = name;
        }
        self.authors
            .update(&current)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        info!("updated author");
        Ok(current)
    }

    /// Deleting an author removes all of their books as well.
    #[instrument(name = "catalog.service.delete_author", skip(self), fields(author_id = %id))]
    pub async fn delete_author(&self, id: i64) -> Result<(), DomainError> {
        let deleted = self
            .authors
            .delete_cascade(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        if !deleted {
            return Err(DomainError::author_not_found(id));
        }
        info!("deleted author and their books");
        Ok(())
    }

    // --- validation helpers ---

    fn validate_title(&self, title: &str) -> Result<(), DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::validation("title", "Title cannot be empty"));
        }
        Ok(())
    }

    fn validate_name(&self, name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("name", "Name cannot be empty"));
        }
        Ok(())
    }

    /// The one field-level rule the catalog enforces: no future years.
    /// There is no lower bound.
    fn validate_publication_year(&self, year: i32) -> Result<(), DomainError> {
        let current_year = Utc::now().year();
        if year > current_year {
            return Err(DomainError::validation(
                "publication_year",
                format!(
                    "Publication year cannot be in the future. Current year is {current_year}."
                ),
            ));
        }
        Ok(())
    }

    async fn validate_author_ref(&self, author_id: i64) -> Result<(), DomainError> {
        let exists = self
            .authors
            .exists(author_id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        if !exists {
            return Err(DomainError::validation(
                "author",
                format!("Author {author_id} does not exist"),
            ));
        }
        Ok(())
    }
}
