use crate::domain::requests::validation::collect_messages;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use shared::errors::HttpError;
use validator::Validate;

/// JSON body extractor that also runs `validator` rules. Every rejection is
/// a 400 with the collected field messages.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(json_value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::Validation(vec![rejection.body_text()]))?;

        json_value
            .validate()
            .map_err(|validation_errors| {
                HttpError::Validation(collect_messages(&validation_errors))
            })?;

        Ok(Self(json_value))
    }
}
