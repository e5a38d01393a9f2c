//! Cross-cutting REST plumbing shared by HTTP modules: RFC 9457 problem
//! responses, page-number pagination envelopes, and bearer-token identity
//! extraction.

pub mod auth;
pub mod json;
pub mod page;
pub mod problem;
pub mod query;

pub use auth::{AuthState, Identity, RequireAuth};
pub use json::ValidJson;
pub use page::{InvalidPage, Page, PageRequest};
pub use query::ValidQuery;
pub use problem::{
    bad_request, internal_error, not_found, unauthorized, Problem, ProblemResponse,
    ValidationError, APPLICATION_PROBLEM_JSON,
};
