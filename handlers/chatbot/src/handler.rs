use cloudfront_api_sdk::prelude::*;

pub const MESSAGE: &str = "Hello from the Chatbot Lambda!";

/// Handler for the `/chatbot` endpoint.
///
/// Returns a fixed greeting used to test the chatbot route end to end. The
/// request and context are ignored; only the CORS origin comes from
/// `SPA_DOMAIN`.
pub fn handle(_req: Request, ctx: &Context) -> Response {
    let config = HandlerConfig::from_env();
    tracing::debug!(request_id = %ctx.request_id, origin = config.allow_origin(), "chatbot");

    Response::message(200, MESSAGE).with_allow_origin(config.allow_origin())
}
