use crate::{Error, error};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::Validate;

/// Query-string counterpart of `ValidatedJson`: deserializes the query
/// parameters and validates them, covering the `limit` bounds on the list
/// endpoints.
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let query = axum::extract::Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|_| error::QUERY_SYNTAX_ERROR)?;

        query
            .validate()
            .map_err(|errors| error::QUERY_VALIDATION_FAILED.with_details(json!(errors)))?;

        Ok(ValidatedQuery(query.0))
    }
}
