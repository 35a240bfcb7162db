//! JSON body extractor that reports failures through [`AppError`].

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON extractor whose rejection is an [`AppError`].
///
/// Axum's own `Json` answers a malformed body with a 4xx and a plain-text
/// message. Here the body is only checked for shape, and a body that does
/// not fit is logged and answered like any other failure.
///
/// # Example
///
/// ```rust,ignore
/// use user_api::api::extractors::JsonBody;
/// use user_api::domain::CreateUser;
///
/// async fn create_user(JsonBody(payload): JsonBody<CreateUser>) {
///     // payload has the expected shape
/// }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(value))
    }
}
