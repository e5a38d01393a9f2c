//! Query-string extractor whose rejection is a problem response.
//!
//! Axum's stock `Query` rejection renders plain text; wrapping it keeps the
//! error contract uniform: an undeserializable query string (e.g. a
//! duplicated scalar key) is a 400 `application/problem+json`.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::problem::{bad_request, ProblemResponse};

#[derive(Debug, Clone)]
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ProblemResponse;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl core::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match Query::<T>::from_request_parts(parts, state).await {
                Ok(Query(value)) => Ok(ValidQuery(value)),
                Err(rejection) => Err(bad_request(rejection.body_text())),
            }
        }
    }
}
