//! JSON body extractor whose rejection is a problem response.
//!
//! Axum's stock `Json` rejection renders plain text (and 422 for data
//! errors); wrapping it keeps the error contract uniform: malformed or
//! incomplete bodies are a 400 `application/problem+json`.

use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::problem::{bad_request, ProblemResponse};

#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ProblemResponse;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl core::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match axum::Json::<T>::from_request(req, state).await {
                Ok(axum::Json(value)) => Ok(ValidJson(value)),
                Err(rejection) => Err(bad_request(rejection.body_text())),
            }
        }
    }
}
