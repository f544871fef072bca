//! api-base - typed request binding for AWS Lambda functions behind API Gateway.
//!
//! A handler declares which parts of the proxy event it wants decoded (the
//! JSON body, the header map, the path parameters) and into which types. The
//! adapter decodes them, calls the handler once, and turns its response into
//! an API Gateway proxy response with a JSON content type.
//!
//! # Architecture
//!
//! The crate uses:
//! - `lambda_runtime` for the invocation loop
//! - `aws_lambda_events` for the API Gateway proxy event types
//! - serde / `serde_json` for decoding bound fields
//! - tracing for structured logs
//!
//! # Example
//!
//! ```no_run
//! use api_base::{Api, Response};
//! use api_base::core::config::AppConfig;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Pet {
//!     name: String,
//! }
//!
//! #[derive(Deserialize)]
//! struct PetPath {
//!     id: String,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lambda_runtime::Error> {
//!     api_base::setup_logging(&AppConfig::from_env()?);
//!
//!     let handler = Api::new()
//!         .with_body::<Pet>()
//!         .with_path_parameters::<PetPath>()
//!         .run(|req| {
//!             let body = format!("{{\"id\":\"{}\",\"name\":\"{}\"}}", req.path_parameters().id, req.body().name);
//!             Response::new(201).with_body(body)
//!         });
//!
//!     api_base::run(handler).await
//! }
//! ```

pub mod api;
pub mod core;
pub mod errors;

pub use api::{
    Api, ApiHandler, ApiOption, Bound, Request, Response, Slot, Unbound, run, with_body,
    with_headers, with_path_parameters,
};
pub use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
pub use aws_lambda_events::encodings::Body;
pub use errors::AdapterError;

use crate::core::config::{AppConfig, LogFormat};

/// Configure structured logging for AWS Lambda environments.
///
/// JSON output suits `CloudWatch` Logs; `LOG_FORMAT=text` gives plain lines
/// for local runs. Calling it again after a subscriber is installed is a
/// no-op.
///
/// # Example
///
/// ```
/// api_base::setup_logging(&api_base::core::config::AppConfig::default());
/// ```
pub fn setup_logging(config: &AppConfig) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    // try_init fails only when a global subscriber already exists
    let _ = match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
    };
}
