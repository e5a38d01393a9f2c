//! Book catalog module: Author/Book entities behind a REST API.
//!
//! Layering follows the usual module shape:
//! - `contract` — plain domain models exposed to other layers.
//! - `domain` — business rules: validation, the list-query model
//!   (filter/search/order/page), and the repository ports.
//! - `infra` — SeaORM entities, migrations, and repository adapters,
//!   including the query-parameter → SQL condition compiler.
//! - `api` — REST DTOs, axum handlers and routes, error mapping.

pub mod api;
pub mod config;
pub mod contract;
pub mod domain;
pub mod infra;
