//! List-query model for the resolution pipeline.
//!
//! Filter parameters stay raw (name/value strings) until the storage layer
//! compiles them; a malformed value is dropped there, never surfaced.
//! Ordering is the opposite: the field name is checked against a closed
//! allow-list here and an unknown name is a hard error. The asymmetry is
//! intentional and load-bearing for API compatibility.

use restkit::PageRequest;

use crate::domain::error::DomainError;

/// Sort direction. A leading `-` on the `ordering` value means descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// A field name vocabulary for the `ordering` parameter.
pub trait OrderField: Sized + Copy {
    /// Resolve a bare field name (prefix already stripped). `None` means
    /// the name is not in the allow-list.
    fn from_name(name: &str) -> Option<Self>;
}

/// Orderable fields of the book list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookOrderField {
    Title,
    PublicationYear,
    /// Joined author name; the public parameter value is `author__name`.
    AuthorName,
    Id,
}

impl OrderField for BookOrderField {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Self::Title),
            "publication_year" => Some(Self::PublicationYear),
            "author__name" => Some(Self::AuthorName),
            "id" => Some(Self::Id),
            _ => None,
        }
    }
}

/// Orderable fields of the author list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorOrderField {
    Name,
    Id,
}

impl OrderField for AuthorOrderField {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "id" => Some(Self::Id),
            _ => None,
        }
    }
}

/// A resolved `ordering` parameter: one allow-listed field plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ordering<F> {
    pub field: F,
    pub dir: Direction,
}

impl<F: OrderField> Ordering<F> {
    /// Parse a raw `ordering` value. Unknown field names are rejected, not
    /// ignored; `default` applies when the parameter is absent or blank.
    pub fn parse_or(raw: Option<&str>, default: Self) -> Result<Self, DomainError> {
        let raw = match raw.map(str::trim) {
            None | Some("") => return Ok(default),
            Some(s) => s,
        };
        let (name, dir) = match raw.strip_prefix('-') {
            Some(rest) => (rest, Direction::Desc),
            None => (raw, Direction::Asc),
        };
        let field =
            F::from_name(name).ok_or_else(|| DomainError::unknown_ordering_field(raw))?;
        Ok(Self { field, dir })
    }
}

/// Default book ordering: newest first.
pub const DEFAULT_BOOK_ORDERING: Ordering<BookOrderField> = Ordering {
    field: BookOrderField::PublicationYear,
    dir: Direction::Desc,
};

/// Default author ordering: by name, ascending.
pub const DEFAULT_AUTHOR_ORDERING: Ordering<AuthorOrderField> = Ordering {
    field: AuthorOrderField::Name,
    dir: Direction::Asc,
};

/// Raw list parameters as they arrived on the query string.
///
/// `filters` keeps recognized filter parameters as (name, value) pairs in
/// arrival order; coercion and predicate construction happen in storage.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub filters: Vec<(String, String)>,
    pub search: Option<String>,
    pub ordering: Option<String>,
    pub page: Option<String>,
}

/// Fully resolved book-list query handed to the repository.
#[derive(Debug, Clone)]
pub struct BookListQuery {
    pub filters: Vec<(String, String)>,
    pub search: Option<String>,
    pub ordering: Ordering<BookOrderField>,
    pub page: PageRequest,
}

/// Fully resolved author-list query handed to the repository.
#[derive(Debug, Clone)]
pub struct AuthorListQuery {
    pub filters: Vec<(String, String)>,
    pub search: Option<String>,
    pub ordering: Ordering<AuthorOrderField>,
    pub page: PageRequest,
}

/// One page of list results together with the request that produced it.
#[derive(Debug, Clone)]
pub struct ListSlice<T> {
    pub count: u64,
    pub items: Vec<T>,
    pub page: PageRequest,
}
