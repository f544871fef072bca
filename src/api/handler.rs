//! Adapter pipeline - decodes the inbound event, runs the handler once, and
//! encodes its response.
//!
//! This module handles:
//! - Decoding the bound fields (body, then headers, then path parameters)
//! - Invoking the user handler with the decoded request
//! - Encoding the handler's response with a forced JSON content type
//! - Registering the pipeline with the Lambda runtime

use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use lambda_runtime::{Error, LambdaEvent, service_fn};
use std::marker::PhantomData;
use tracing::{debug, error, info};

use super::binding::Slot;
use super::request::Request;
use super::response::Response;
use crate::errors::AdapterError;

/// A handler bound to its configuration, ready to take gateway events.
///
/// Holds no per-invocation state, so one instance serves any number of
/// invocations.
pub struct ApiHandler<B, H, P, F> {
    handler: F,
    _slots: PhantomData<fn() -> (B, H, P)>,
}

impl<B, H, P, F> ApiHandler<B, H, P, F>
where
    B: Slot,
    H: Slot,
    P: Slot,
    F: Fn(Request<'_, B, H, P>) -> Response,
{
    pub(crate) fn new(handler: F) -> Self {
        Self {
            handler,
            _slots: PhantomData,
        }
    }

    /// Runs the pipeline for one event.
    ///
    /// # Errors
    ///
    /// Returns the decode error if any bound field fails to decode. The
    /// handler is not called in that case and no response is produced.
    pub fn invoke(
        &self,
        event: &ApiGatewayProxyRequest,
    ) -> Result<ApiGatewayProxyResponse, AdapterError> {
        let request: Request<'_, B, H, P> = Request::from_event(event).inspect_err(|e| {
            error!("Aborting invocation: {}", e);
        })?;
        debug!("Request fields decoded");

        let response = (self.handler)(request);
        info!(status_code = response.status_code, "Handler returned");

        Ok(response.into_proxy_response())
    }

    /// Lambda entry for one invocation.
    ///
    /// # Errors
    ///
    /// Decode failures are returned to the runtime, which reports the
    /// invocation as failed.
    #[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
    pub async fn call(
        &self,
        event: LambdaEvent<ApiGatewayProxyRequest>,
    ) -> Result<ApiGatewayProxyResponse, Error> {
        #[cfg(feature = "debug-logs")]
        info!("API Gateway event: {:?}", event.payload);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            method = %event.payload.http_method,
            path = event.payload.path.as_deref().unwrap_or(""),
            "API Gateway event received"
        );

        self.invoke(&event.payload).map_err(Error::from)
    }
}

/// Serves `handler` on the Lambda runtime until the runtime shuts down.
///
/// # Errors
///
/// Returns the runtime's error if the Lambda runtime API fails.
pub async fn run<B, H, P, F>(handler: ApiHandler<B, H, P, F>) -> Result<(), Error>
where
    B: Slot,
    H: Slot,
    P: Slot,
    F: Fn(Request<'_, B, H, P>) -> Response,
{
    let handler = &handler;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<ApiGatewayProxyRequest>| {
        handler.call(event)
    }))
    .await
}
