pub mod model;

pub use model::{Author, AuthorPatch, Book, BookPatch, NewAuthor, NewBook};
