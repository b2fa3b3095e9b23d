//! Handler wrapper: serves `handler::handle` through the Lambda runtime, or
//! over the stdin/stdout IPC loop when built with `--no-default-features`.
mod handler;

#[cfg(feature = "lambda")]
cloudfront_api_sdk::lambda_loop!(handler::handle);

#[cfg(not(feature = "lambda"))]
cloudfront_api_sdk::handler_loop!(handler::handle);
