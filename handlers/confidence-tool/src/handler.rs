use cloudfront_api_sdk::prelude::*;

pub const MESSAGE: &str = "Hello from the Confidence Tool Lambda!";

/// Handler for the `/confidence-tool` endpoint.
///
/// Same contract as the chatbot handler, including the `SPA_DOMAIN` origin.
pub fn handle(_req: Request, ctx: &Context) -> Response {
    let config = HandlerConfig::from_env();
    tracing::debug!(request_id = %ctx.request_id, origin = config.allow_origin(), "confidence tool");

    Response::message(200, MESSAGE).with_allow_origin(config.allow_origin())
}
