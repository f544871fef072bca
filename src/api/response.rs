//! Handler responses and their encoding into the gateway's wire shape.

use aws_lambda_events::apigw::ApiGatewayProxyResponse;
use aws_lambda_events::encodings::Body;
use http::header::{self, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

use crate::errors::AdapterError;

pub const APPLICATION_JSON: &str = "application/json";

/// What a handler returns. The body is already serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub status_code: i64,
    pub body: String,
    pub headers: Option<HashMap<String, String>>,
}

impl Response {
    #[must_use]
    pub fn new(status_code: i64) -> Self {
        Self {
            status_code,
            ..Self::default()
        }
    }

    /// Serializes `body` as the JSON response body.
    ///
    /// # Errors
    ///
    /// Returns `AdapterError::Encode` if `body` cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(status_code: i64, body: &T) -> Result<Self, AdapterError> {
        let body = serde_json::to_string(body).map_err(AdapterError::Encode)?;
        Ok(Self::new(status_code).with_body(body))
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Encodes the response for API Gateway.
    ///
    /// Status and body are copied as-is. `Content-Type` is always
    /// `application/json`, replacing any value the handler set under any
    /// spelling of that name. The body is never base64-encoded. Headers whose
    /// name or value is not valid HTTP are dropped with a warning.
    #[must_use]
    pub fn into_proxy_response(self) -> ApiGatewayProxyResponse {
        let mut headers = HeaderMap::new();
        for (name, value) in self.headers.unwrap_or_default() {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(&value),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => warn!(header = %name, "Dropping invalid response header"),
            }
        }
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));

        let mut response = ApiGatewayProxyResponse::default();
        response.status_code = self.status_code;
        response.headers = headers;
        response.body = Some(Body::Text(self.body));
        response.is_base64_encoded = false;
        response
    }
}

impl From<Response> for ApiGatewayProxyResponse {
    fn from(response: Response) -> Self {
        response.into_proxy_response()
    }
}
