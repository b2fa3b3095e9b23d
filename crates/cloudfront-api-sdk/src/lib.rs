//! CloudFront API SDK - Types and runtime for the CloudFront API handlers
//!
//! Handlers are plain functions `fn(Request, &Context) -> Response`. This crate
//! provides those types plus the glue that lets the hosting platform invoke
//! them, either over the length-prefixed stdin/stdout protocol ([`ipc`]) or
//! through the AWS Lambda runtime (`lambda` feature).

pub mod config;
pub mod context;
pub mod error;
pub mod ipc;
#[cfg(feature = "lambda")]
pub mod lambda;
pub mod logging;
pub mod request;
pub mod response;

pub mod prelude {
    //! Common imports for CloudFront API handlers
    pub use crate::config::HandlerConfig;
    pub use crate::context::Context;
    pub use crate::error::HandlerError;
    pub use crate::request::Request;
    pub use crate::response::Response;
    pub use serde_json::{json, Value as JsonValue};
}

// Re-export key types at crate root
pub use config::HandlerConfig;
pub use context::Context;
pub use error::HandlerError;
pub use request::Request;
pub use response::Response;

// Used by the exported macros
#[doc(hidden)]
pub use tracing;
