//! Invocation context passed alongside each request

use serde::{Deserialize, Serialize};

/// Platform metadata for a single invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Context {
    /// Request ID for tracing
    pub request_id: String,

    /// Name of the function being invoked
    pub function_name: String,

    /// Fully qualified function ARN, when the platform supplies one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoked_function_arn: Option<String>,

    /// Invocation deadline in epoch milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline_ms: Option<u64>,
}

#[cfg(feature = "lambda")]
impl From<&lambda_runtime::Context> for Context {
    fn from(ctx: &lambda_runtime::Context) -> Self {
        Self {
            request_id: ctx.request_id.clone(),
            function_name: ctx.env_config.function_name.clone(),
            invoked_function_arn: Some(ctx.invoked_function_arn.clone()),
            deadline_ms: Some(ctx.deadline),
        }
    }
}
