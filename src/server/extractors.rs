//! Custom extractors for the HTTP server.

use std::convert::Infallible;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        request::Parts,
    },
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Serialization format of a request or response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WireFormat {
    #[default]
    Json,
    MsgPack,
}

impl WireFormat {
    /// Format named by a `Content-Type` or `Accept` header value
    fn from_header(value: &str) -> Option<Self> {
        let value = value.to_ascii_lowercase();
        if value.contains("msgpack") {
            Some(Self::MsgPack)
        } else if value.is_empty() || value.contains("json") || value.contains("*/*") {
            Some(Self::Json)
        } else {
            None
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::MsgPack => "application/msgpack",
        }
    }
}

/// Response format requested through the `Accept` header.
///
/// Clients naming `msgpack` get `MessagePack`; everyone else gets JSON.
#[async_trait]
impl<S> FromRequestParts<S> for WireFormat
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let accept = parts
            .headers
            .get(ACCEPT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        Ok(match WireFormat::from_header(accept) {
            Some(Self::MsgPack) => Self::MsgPack,
            _ => Self::Json,
        })
    }
}

/// Extractor for JSON or `MessagePack` request bodies.
///
/// The body format follows `Content-Type`: `application/msgpack` and
/// `application/x-msgpack` are decoded as `MessagePack`, JSON or a missing
/// content type as JSON.
pub struct Payload<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let format = WireFormat::from_header(&content_type).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Invalid content type: expected application/json or application/msgpack, got {content_type}"
            ))
        })?;

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read request body: {e}")))?;

        if bytes.is_empty() {
            return Err(AppError::BadRequest("Request body is empty".to_string()));
        }

        match format {
            WireFormat::Json => serde_json::from_slice(&bytes)
                .map(Payload)
                .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}"))),
            WireFormat::MsgPack => rmp_serde::from_slice(&bytes)
                .map(Payload)
                .map_err(|e| AppError::BadRequest(format!("Invalid MessagePack body: {e}"))),
        }
    }
}

/// Query string extractor whose rejection is a JSON [`AppError`]
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid query string: {e}")))?;
        Ok(QueryParams(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_header() {
        assert_eq!(WireFormat::from_header(""), Some(WireFormat::Json));
        assert_eq!(
            WireFormat::from_header("application/json; charset=utf-8"),
            Some(WireFormat::Json)
        );
        assert_eq!(
            WireFormat::from_header("application/msgpack"),
            Some(WireFormat::MsgPack)
        );
        assert_eq!(
            WireFormat::from_header("application/x-msgpack"),
            Some(WireFormat::MsgPack)
        );
        assert_eq!(WireFormat::from_header("*/*"), Some(WireFormat::Json));
        assert_eq!(WireFormat::from_header("text/plain"), None);
    }

    #[test]
    fn test_content_types() {
        assert_eq!(WireFormat::Json.content_type(), "application/json");
        assert_eq!(WireFormat::MsgPack.content_type(), "application/msgpack");
    }
}
