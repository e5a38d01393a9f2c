//! Database entity → contract model conversions.

use crate::contract::{Author, Book};
use crate::infra::storage::entity::{authors, books};

impl From<authors::Model> for Author {
    fn from(entity: authors::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

impl From<books::Model> for Book {
    fn from(entity: books::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            publication_year: entity.publication_year,
            author_id: entity.author_id,
        }
    }
}
