//! Request event representation for handlers

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The event the platform invokes a handler with.
///
/// The shape depends on the upstream integration (API gateway proxy event,
/// test console payload, ...), so it is kept as raw JSON. Handlers are free to
/// ignore it entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Request(Value);

impl Request {
    /// Wrap a raw JSON event.
    pub fn new(event: Value) -> Self {
        Self(event)
    }

    /// The `path` field of a proxy event, if there is one.
    ///
    /// Only used for log output.
    pub fn path(&self) -> Option<&str> {
        self.0.get("path").and_then(Value::as_str)
    }
}
