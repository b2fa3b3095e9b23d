//! AWS Lambda hosting for handlers (requires the `lambda` feature).
//!
//! # Cargo.toml
//! ```toml
//! [dependencies]
//! cloudfront-api-sdk = { path = "../../crates/cloudfront-api-sdk", features = ["lambda"] }
//! ```

use crate::{Context, Request, Response};
use lambda_runtime::{service_fn, LambdaEvent};

pub use lambda_runtime::Error;

/// Run the handler for one Lambda event.
pub fn invoke<F>(handler: &F, event: LambdaEvent<Request>) -> Response
where
    F: Fn(Request, &Context) -> Response,
{
    let (request, lambda_ctx) = event.into_parts();
    let ctx = Context::from(&lambda_ctx);
    tracing::debug!(
        request_id = %ctx.request_id,
        path = request.path().unwrap_or("-"),
        "invoking handler"
    );
    handler(request, &ctx)
}

/// Serve the handler through the Lambda runtime API until the process is
/// torn down by the platform.
pub fn serve<F>(handler: F) -> Result<(), Error>
where
    F: Fn(Request, &Context) -> Response + Clone + Send + Sync + 'static,
{
    crate::logging::init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(lambda_runtime::run(service_fn(
        move |event: LambdaEvent<Request>| {
            let handler = handler.clone();
            async move { Ok::<Response, Error>(invoke(&handler, event)) }
        },
    )))
}

/// Generate a `main` that serves the given handler through the Lambda runtime.
///
/// # Example
/// ```ignore
/// cloudfront_api_sdk::lambda_loop!(handler::handle);
/// ```
#[macro_export]
macro_rules! lambda_loop {
    ($handler:expr) => {
        fn main() -> Result<(), $crate::lambda::Error> {
            $crate::lambda::serve($handler)
        }
    };
}
