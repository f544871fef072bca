//! Request binding and the adapter pipeline

pub mod binding;
pub mod fields;
pub mod handler;
pub mod request;
pub mod response;

// Re-export the builder and pipeline types for convenience
pub use binding::{
    Api, ApiOption, Bound, Slot, Unbound, with_body, with_headers, with_path_parameters,
};
pub use handler::{ApiHandler, run};
pub use request::Request;
pub use response::{APPLICATION_JSON, Response};
