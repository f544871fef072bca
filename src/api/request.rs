//! The decoded request handed to a handler.

use aws_lambda_events::apigw::ApiGatewayProxyRequest;

use super::binding::Slot;
use crate::errors::AdapterError;

/// One invocation's view of the inbound event, with every bound field decoded.
///
/// Unbound fields are `()`.
pub struct Request<'e, B: Slot, H: Slot, P: Slot> {
    body: B::Value,
    headers: H::Value,
    path_parameters: P::Value,
    event: &'e ApiGatewayProxyRequest,
}

impl<'e, B: Slot, H: Slot, P: Slot> Request<'e, B, H, P> {
    /// Decodes body, headers and path parameters, in that order, stopping at
    /// the first failure.
    ///
    /// # Errors
    ///
    /// Returns the `AdapterError` variant naming the field that failed.
    pub fn from_event(event: &'e ApiGatewayProxyRequest) -> Result<Self, AdapterError> {
        // An absent body reads as empty text
        let body = B::decode_body(event.body.as_deref().unwrap_or(""))
            .map_err(AdapterError::Body)?;
        let headers = H::decode_headers(&event.headers).map_err(AdapterError::Headers)?;
        let path_parameters =
            P::decode_map(&event.path_parameters).map_err(AdapterError::PathParameters)?;

        Ok(Self {
            body,
            headers,
            path_parameters,
            event,
        })
    }

    pub fn body(&self) -> &B::Value {
        &self.body
    }

    pub fn headers(&self) -> &H::Value {
        &self.headers
    }

    pub fn path_parameters(&self) -> &P::Value {
        &self.path_parameters
    }

    /// The raw inbound event, for fields no binding covers.
    pub fn event(&self) -> &'e ApiGatewayProxyRequest {
        self.event
    }

    pub fn into_parts(self) -> (B::Value, H::Value, P::Value) {
        (self.body, self.headers, self.path_parameters)
    }
}
