//! Bearer-token identity resolution.
//!
//! The authentication boundary is deliberately thin: a static set of tokens
//! (from configuration) maps to caller subjects. Each request resolves to
//! either [`Identity::Anonymous`] or [`Identity::Authenticated`] before any
//! handler logic runs; write handlers demand [`RequireAuth`] as their first
//! extractor so a 401 is produced before validation or storage access.

use std::collections::HashMap;
use std::sync::Arc;

use axum::http::{header::AUTHORIZATION, request::Parts};
use axum::{extract::FromRequestParts, http::HeaderMap};

use crate::problem::{internal_error, unauthorized, ProblemResponse};

/// Token → subject lookup table, shared via `Extension<Arc<AuthState>>`.
#[derive(Debug, Default, Clone)]
pub struct AuthState {
    tokens: HashMap<String, String>,
}

impl AuthState {
    pub fn new(tokens: HashMap<String, String>) -> Self {
        Self { tokens }
    }

    /// Resolve request headers to an identity. Anything other than a
    /// well-formed `Authorization: Bearer <known-token>` is anonymous.
    pub fn resolve(&self, headers: &HeaderMap) -> Identity {
        let token = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim);
        match token.and_then(|t| self.tokens.get(t)) {
            Some(subject) => Identity::Authenticated {
                subject: subject.clone(),
            },
            None => Identity::Anonymous,
        }
    }
}

/// The caller identity a request resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Anonymous,
    Authenticated { subject: String },
}

/// Extractor that rejects anonymous callers with a 401 problem.
#[derive(Debug, Clone)]
pub struct RequireAuth {
    pub subject: String,
}

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = ProblemResponse;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl core::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let auth = parts
                .extensions
                .get::<Arc<AuthState>>()
                .ok_or_else(|| internal_error("authentication state is not configured"))?;
            match auth.resolve(&parts.headers) {
                Identity::Authenticated { subject } => Ok(RequireAuth { subject }),
                Identity::Anonymous => {
                    Err(unauthorized("Authentication credentials were not provided"))
                }
            }
        }
    }
}
