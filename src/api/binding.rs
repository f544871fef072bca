//! Binding configuration: which request fields get decoded, and into what.
//!
//! Each of the three fields (body, headers, path parameters) sits in a slot
//! that is either [`Unbound`] or [`Bound<T>`]. The slot is part of the `Api`
//! type, so a bound shape is checked by the compiler and the configuration
//! itself never holds decoded data.
//!
//! ```
//! use api_base::{Api, Response};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Greeting {
//!     name: String,
//! }
//!
//! let handler = Api::new()
//!     .with_body::<Greeting>()
//!     .run(|req| Response::new(200).with_body(format!("hello {}", req.body().name)));
//! # let _ = handler;
//! ```

use http::HeaderMap;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use super::fields;
use super::handler::ApiHandler;
use super::request::Request;
use super::response::Response;
use crate::errors::DecodeError;

/// A request field slot and how to fill it.
pub trait Slot {
    /// What the handler sees for this field.
    type Value;

    /// Fills the slot from JSON body text.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the body does not decode.
    fn decode_body(raw: &str) -> Result<Self::Value, serde_json::Error>;

    /// Fills the slot from a single-valued string map.
    ///
    /// # Errors
    ///
    /// Returns a `DecodeError` when the map does not fit the shape.
    fn decode_map(map: &HashMap<String, String>) -> Result<Self::Value, DecodeError>;

    /// Fills the slot from a header map, first value per name.
    ///
    /// # Errors
    ///
    /// Returns a `DecodeError` when the headers do not fit the shape.
    fn decode_headers(headers: &HeaderMap) -> Result<Self::Value, DecodeError>;
}

/// No shape bound: the field is never read.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unbound;

impl Slot for Unbound {
    type Value = ();

    fn decode_body(_raw: &str) -> Result<Self::Value, serde_json::Error> {
        Ok(())
    }

    fn decode_map(_map: &HashMap<String, String>) -> Result<Self::Value, DecodeError> {
        Ok(())
    }

    fn decode_headers(_headers: &HeaderMap) -> Result<Self::Value, DecodeError> {
        Ok(())
    }
}

/// The field decodes into `T`.
pub struct Bound<T>(PhantomData<fn() -> T>);

impl<T: DeserializeOwned> Slot for Bound<T> {
    type Value = T;

    fn decode_body(raw: &str) -> Result<Self::Value, serde_json::Error> {
        fields::decode_body(raw)
    }

    fn decode_map(map: &HashMap<String, String>) -> Result<Self::Value, DecodeError> {
        fields::decode_map(map)
    }

    fn decode_headers(headers: &HeaderMap) -> Result<Self::Value, DecodeError> {
        fields::decode_headers(headers)
    }
}

impl<T> fmt::Debug for Bound<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bound<{}>", std::any::type_name::<T>())
    }
}

/// Binding configuration for one handler.
///
/// Built once, then turned into an [`ApiHandler`] with [`Api::run`].
pub struct Api<B = Unbound, H = Unbound, P = Unbound> {
    _slots: PhantomData<fn() -> (B, H, P)>,
}

impl Api {
    /// An empty configuration: nothing is decoded.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _slots: PhantomData,
        }
    }
}

impl Default for Api {
    fn default() -> Self {
        Self::new()
    }
}

impl<B, H, P> Clone for Api<B, H, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B, H, P> Copy for Api<B, H, P> {}

impl<B, H, P> fmt::Debug for Api<B, H, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Api")
            .field("body", &std::any::type_name::<B>())
            .field("headers", &std::any::type_name::<H>())
            .field("path_parameters", &std::any::type_name::<P>())
            .finish()
    }
}

impl<B, H, P> Api<B, H, P> {
    /// Decode the request body as JSON into `T`. Replaces any earlier body shape.
    #[must_use]
    pub fn with_body<T: DeserializeOwned>(self) -> Api<Bound<T>, H, P> {
        Api {
            _slots: PhantomData,
        }
    }

    /// Decode the header map into `T`. Replaces any earlier header shape.
    #[must_use]
    pub fn with_headers<T: DeserializeOwned>(self) -> Api<B, Bound<T>, P> {
        Api {
            _slots: PhantomData,
        }
    }

    /// Decode the path parameters into `T`. Replaces any earlier shape.
    #[must_use]
    pub fn with_path_parameters<T: DeserializeOwned>(self) -> Api<B, H, Bound<T>> {
        Api {
            _slots: PhantomData,
        }
    }

    /// Applies one option value. Options applied in sequence behave like the
    /// matching chain of `with_*` calls.
    #[must_use]
    pub fn apply<O: ApiOption<B, H, P>>(self, option: O) -> O::Output {
        option.apply(self)
    }
}

impl<B: Slot, H: Slot, P: Slot> Api<B, H, P> {
    /// Wraps `handler` in the adapter pipeline for this configuration.
    pub fn run<F>(self, handler: F) -> ApiHandler<B, H, P, F>
    where
        F: Fn(Request<'_, B, H, P>) -> Response,
    {
        ApiHandler::new(handler)
    }
}

/// A binding that can be applied to an [`Api`] as a value.
pub trait ApiOption<B, H, P> {
    type Output;

    fn apply(self, api: Api<B, H, P>) -> Self::Output;
}

/// Option value produced by [`with_body`].
pub struct WithBody<T>(PhantomData<fn() -> T>);

/// Option value produced by [`with_headers`].
pub struct WithHeaders<T>(PhantomData<fn() -> T>);

/// Option value produced by [`with_path_parameters`].
pub struct WithPathParameters<T>(PhantomData<fn() -> T>);

#[must_use]
pub fn with_body<T: DeserializeOwned>() -> WithBody<T> {
    WithBody(PhantomData)
}

#[must_use]
pub fn with_headers<T: DeserializeOwned>() -> WithHeaders<T> {
    WithHeaders(PhantomData)
}

#[must_use]
pub fn with_path_parameters<T: DeserializeOwned>() -> WithPathParameters<T> {
    WithPathParameters(PhantomData)
}

impl<T: DeserializeOwned, B, H, P> ApiOption<B, H, P> for WithBody<T> {
    type Output = Api<Bound<T>, H, P>;

    fn apply(self, api: Api<B, H, P>) -> Self::Output {
        api.with_body::<T>()
    }
}

impl<T: DeserializeOwned, B, H, P> ApiOption<B, H, P> for WithHeaders<T> {
    type Output = Api<B, Bound<T>, P>;

    fn apply(self, api: Api<B, H, P>) -> Self::Output {
        api.with_headers::<T>()
    }
}

impl<T: DeserializeOwned, B, H, P> ApiOption<B, H, P> for WithPathParameters<T> {
    type Output = Api<B, H, Bound<T>>;

    fn apply(self, api: Api<B, H, P>) -> Self::Output {
        api.with_path_parameters::<T>()
    }
}
