//! SeaORM-backed adapters for the domain repository ports.
//!
//! Book list queries always join `authors`: the `author_name` filter, the
//! search stage, and `author__name` ordering all reference the joined
//! column, and the join is harmless otherwise (every book has an author).

use anyhow::Context;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QuerySelect, Set, TransactionTrait,
};

use crate::contract::{Author, Book, NewAuthor, NewBook};
use crate::domain::query::{AuthorListQuery, BookListQuery};
use crate::domain::repo::{AuthorsRepository, BooksRepository};
use crate::infra::storage::entity::{authors, books};
use crate::infra::storage::query::{
    apply_author_order, apply_book_order, apply_filters, author_search, book_search,
    with_search, AUTHOR_FILTERS, BOOK_FILTERS,
};

#[derive(Clone)]
pub struct SeaOrmBooksRepository {
    db: DatabaseConnection,
}

impl SeaOrmBooksRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BooksRepository for SeaOrmBooksRepository {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Book>> {
        let found = books::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find book by id failed")?;
        Ok(found.map(Into::into))
    }

    async fn list_page(&self, query: &BookListQuery) -> anyhow::Result<(u64, Vec<Book>)> {
        let cond = with_search(
            apply_filters(BOOK_FILTERS, &query.filters),
            query.search.as_deref(),
            book_search,
        );
        let base = books::Entity::find()
            .inner_join(authors::Entity)
            .filter(cond);

        let count = base
            .clone()
            .count(&self.db)
            .await
            .context("count books failed")?;
        let rows = apply_book_order(base, query.ordering)
            .limit(query.page.limit())
            .offset(query.page.offset())
            .all(&self.db)
            .await
            .context("list books failed")?;

        Ok((count, rows.into_iter().map(Into::into).collect()))
    }

    async fn insert(&self, new: NewBook) -> anyhow::Result<Book> {
        let model = books::ActiveModel {
            title: Set(new.title),
            publication_year: Set(new.publication_year),
            author_id: Set(new.author_id),
            ..Default::default()
        };
        let stored = model
            .insert(&self.db)
            .await
            .context("insert book failed")?;
        Ok(stored.into())
    }

    async fn update(&self, book: &Book) -> anyhow::Result<()> {
        let model = books::ActiveModel {
            id: Set(book.id),
            title: Set(book.title.clone()),
            publication_year: Set(book.publication_year),
            author_id: Set(book.author_id),
        };
        model
            .update(&self.db)
            .await
            .context("update book failed")?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let res = books::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete book failed")?;
        Ok(res.rows_affected > 0)
    }
}

#[derive(Clone)]
pub struct SeaOrmAuthorsRepository {
    db: DatabaseConnection,
}

impl SeaOrmAuthorsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuthorsRepository for SeaOrmAuthorsRepository {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Author>> {
        let found = authors::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find author by id failed")?;
        Ok(found.map(Into::into))
    }

    async fn exists(&self, id: i64) -> anyhow::Result<bool> {
        let count = authors::Entity::find()
            .filter(authors::Column::Id.eq(id))
            .count(&self.db)
            .await
            .context("author exists check failed")?;
        Ok(count > 0)
    }

    async fn list_page(&self, query: &AuthorListQuery) -> anyhow::Result<(u64, Vec<Author>)> {
        let cond = with_search(
            apply_filters(AUTHOR_FILTERS, &query.filters),
            query.search.as_deref(),
            author_search,
        );
        let base = authors::Entity::find().filter(cond);

        let count = base
            .clone()
            .count(&self.db)
            .await
            .context("count authors failed")?;
        let rows = apply_author_order(base, query.ordering)
            .limit(query.page.limit())
            .offset(query.page.offset())
            .all(&self.db)
            .await
            .context("list authors failed")?;

        Ok((count, rows.into_iter().map(Into::into).collect()))
    }

    async fn insert(&self, new: NewAuthor) -> anyhow::Result<Author> {
        let model = authors::ActiveModel {
            name: Set(new.name),
            ..Default::default()
        };
        let stored = model
            .insert(&self.db)
            .await
            .context("insert author failed")?;
        Ok(stored.into())
    }

    async fn update(&self, author: &Author) -> anyhow::Result<()> {
        let model = authors::ActiveModel {
            id: Set(author.id),
            name: Set(author.name.clone()),
        };
        model
            .update(&self.db)
            .await
            .context("update author failed")?;
        Ok(())
    }

    async fn delete_cascade(&self, id: i64) -> anyhow::Result<bool> {
        // The schema declares ON DELETE CASCADE as well; deleting the books
        // explicitly in the same transaction keeps the behavior independent
        // of the SQLite foreign_keys pragma.
        let txn = self
            .db
            .begin()
            .await
            .context("begin cascade delete failed")?;
        books::Entity::delete_many()
            .filter(books::Column::AuthorId.eq(id))
            .exec(&txn)
            .await
            .context("delete author's books failed")?;
        let res = authors::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .context("delete author failed")?;
        txn.commit().await.context("commit cascade delete failed")?;
        Ok(res.rows_affected > 0)
    }
}
