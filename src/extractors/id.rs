//! Extract the `{id}` path segment as a base-10 integer.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Professor id taken from the path. Non-integer segments are rejected before any store call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProfessorId(pub i32);

impl ProfessorId {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        raw.parse::<i32>()
            .map(ProfessorId)
            .map_err(|_| AppError::InvalidId(raw.to_string()))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ProfessorId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::Decode(e.body_text()))?;
        ProfessorId::parse(&raw)
    }
}
