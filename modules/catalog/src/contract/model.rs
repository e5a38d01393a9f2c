/// Pure author model (no serde, no ORM types).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: i64,
    pub name: String,
}

/// Data for creating a new author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: String,
}

/// Partial update data for an author
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthorPatch {
    pub name: Option<String>,
}

/// Pure book model. `author_id` references exactly one author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub publication_year: i32,
    pub author_id: i64,
}

/// Data for creating a new book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub publication_year: i32,
    pub author_id: i64,
}

/// Partial update data for a book
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookPatch {
    pub title: Option<String>,
    pub publication_year: Option<i32>,
    pub author_id: Option<i64>,
}
