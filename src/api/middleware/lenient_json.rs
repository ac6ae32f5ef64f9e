//! JSON body extractor that never rejects.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use std::convert::Infallible;

/// Like [`Json`], but a missing, non-JSON or malformed body yields
/// `T::default()` instead of a 4xx rejection.
///
/// Used by `POST /log`, which records a visit for every request.
#[derive(Debug, Clone, Default)]
pub struct LenientJson<T>(pub T);

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(%rejection, "Unreadable JSON body, using defaults");
                Ok(Self(T::default()))
            }
        }
    }
}
