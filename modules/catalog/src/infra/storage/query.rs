//! Query-parameter → SQL compiler for the list pipeline.
//!
//! The Field Filter Stage is an explicit, ordered table of bindings
//! `{ name, apply }`: each binding owns the coercion of its raw value and
//! contributes one predicate to an AND chain. A value that fails coercion
//! leaves the condition untouched (the parameter is dropped, the request
//! proceeds). The Search Stage ORs a case-insensitive containment predicate
//! across the configured fields and ANDs the result with the filters.
//!
//! All columns are table-qualified because book queries join `authors`
//! for the `author_name` filter and `author__name` ordering.

use sea_orm::sea_query::{Condition, Expr, Func, IntoColumnRef, LikeExpr, Order, SimpleExpr};
use sea_orm::{QueryOrder, Select};

use crate::domain::query::{AuthorOrderField, BookOrderField, Direction, Ordering};
use crate::infra::storage::entity::{authors, books};

/// One recognized filter parameter: its query-string name and the predicate
/// builder applied when the parameter is present.
pub struct FilterBinding {
    pub name: &'static str,
    pub apply: fn(Condition, &str) -> Condition,
}

/// Book-list filter vocabulary, in documentation order.
pub const BOOK_FILTERS: &[FilterBinding] = &[
    FilterBinding {
        name: "title",
        apply: by_title,
    },
    FilterBinding {
        name: "author_name",
        apply: by_author_name,
    },
    FilterBinding {
        name: "author",
        apply: by_author_id,
    },
    FilterBinding {
        name: "publication_year",
        apply: by_year,
    },
    FilterBinding {
        name: "publication_year_min",
        apply: by_year_min,
    },
    FilterBinding {
        name: "publication_year_max",
        apply: by_year_max,
    },
];

/// Author-list filter vocabulary.
pub const AUTHOR_FILTERS: &[FilterBinding] = &[FilterBinding {
    name: "name",
    apply: by_name,
}];

/// Fold the supplied raw parameters through the binding table (AND chain).
/// Parameters not in the table are ignored; bindings without a supplied
/// value contribute nothing.
pub fn apply_filters(bindings: &[FilterBinding], params: &[(String, String)]) -> Condition {
    let mut cond = Condition::all();
    for binding in bindings {
        if let Some((_, value)) = params.iter().find(|(name, _)| name == binding.name) {
            cond = (binding.apply)(cond, value);
        }
    }
    cond
}

/// OR of case-insensitive containment over the book search fields
/// (title, joined author name).
pub fn book_search(term: &str) -> Condition {
    Condition::any()
        .add(contains_ci((books::Entity, books::Column::Title), term))
        .add(contains_ci((authors::Entity, authors::Column::Name), term))
}

/// Author search matches the name field only.
pub fn author_search(term: &str) -> Condition {
    Condition::any().add(contains_ci((authors::Entity, authors::Column::Name), term))
}

/// AND the search predicate onto `cond` when a non-empty term is present.
pub fn with_search(
    cond: Condition,
    search: Option<&str>,
    build: fn(&str) -> Condition,
) -> Condition {
    match search.map(str::trim) {
        Some(term) if !term.is_empty() => cond.add(build(term)),
        _ => cond,
    }
}

pub fn apply_book_order(
    sel: Select<books::Entity>,
    ordering: Ordering<BookOrderField>,
) -> Select<books::Entity> {
    let ord = order_direction(ordering.dir);
    match ordering.field {
        BookOrderField::Title => sel.order_by(books::Column::Title, ord),
        BookOrderField::PublicationYear => sel.order_by(books::Column::PublicationYear, ord),
        BookOrderField::AuthorName => sel.order_by(authors::Column::Name, ord),
        BookOrderField::Id => sel.order_by(books::Column::Id, ord),
    }
}

pub fn apply_author_order(
    sel: Select<authors::Entity>,
    ordering: Ordering<AuthorOrderField>,
) -> Select<authors::Entity> {
    let ord = order_direction(ordering.dir);
    match ordering.field {
        AuthorOrderField::Name => sel.order_by(authors::Column::Name, ord),
        AuthorOrderField::Id => sel.order_by(authors::Column::Id, ord),
    }
}

fn order_direction(dir: Direction) -> Order {
    match dir {
        Direction::Asc => Order::Asc,
        Direction::Desc => Order::Desc,
    }
}

// --- predicate builders ---

fn by_title(cond: Condition, value: &str) -> Condition {
    cond.add(contains_ci((books::Entity, books::Column::Title), value))
}

fn by_author_name(cond: Condition, value: &str) -> Condition {
    cond.add(contains_ci((authors::Entity, authors::Column::Name), value))
}

fn by_name(cond: Condition, value: &str) -> Condition {
    cond.add(contains_ci((authors::Entity, authors::Column::Name), value))
}

fn by_author_id(cond: Condition, value: &str) -> Condition {
    match value.trim().parse::<i64>() {
        Ok(id) => cond.add(Expr::col((books::Entity, books::Column::AuthorId)).eq(id)),
        Err(_) => cond,
    }
}

fn by_year(cond: Condition, value: &str) -> Condition {
    match value.trim().parse::<i32>() {
        Ok(year) => {
            cond.add(Expr::col((books::Entity, books::Column::PublicationYear)).eq(year))
        }
        Err(_) => cond,
    }
}

fn by_year_min(cond: Condition, value: &str) -> Condition {
    match value.trim().parse::<i32>() {
        Ok(year) => {
            cond.add(Expr::col((books::Entity, books::Column::PublicationYear)).gte(year))
        }
        Err(_) => cond,
    }
}

fn by_year_max(cond: Condition, value: &str) -> Condition {
    match value.trim().parse::<i32>() {
        Ok(year) => {
            cond.add(Expr::col((books::Entity, books::Column::PublicationYear)).lte(year))
        }
        Err(_) => cond,
    }
}

/// `LOWER(col) LIKE '%value%' ESCAPE '\'`, with LIKE metacharacters in the
/// user value escaped so they match literally.
fn contains_ci<C: IntoColumnRef>(col: C, value: &str) -> SimpleExpr {
    let pattern = format!("%{}%", like_escape(&value.to_lowercase()));
    Expr::expr(Func::lower(Expr::col(col))).like(LikeExpr::new(pattern).escape('\\'))
}

fn like_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '%' | '_' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            c => out.push(c),
        }
    }
    out
}
