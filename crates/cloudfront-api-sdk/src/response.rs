//! Proxy response representation for handlers

use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;
use std::collections::BTreeMap;
use std::io;

/// Header instructing browsers which origins may read the response.
pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";

/// Represents the response object handed back to the API gateway.
///
/// Serializes as `{"statusCode": .., "headers": {..}, "body": ".."}`.
///
/// # Quick Reference
///
/// | Method | Status | Use Case |
/// |--------|--------|----------|
/// | `message(status, text)` | any | `{"message": text}` body |
/// | `bad_request(msg)` | 400 | Invalid input |
/// | `internal_error(msg)` | 500 | Server error |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// HTTP status code
    pub status_code: u16,

    /// Response headers, kept sorted so repeated serialization is byte-identical
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// Response body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Response {
    /// Create a new response with the given status code (no headers, no body).
    pub fn new(status: u16) -> Self {
        Self {
            status_code: status,
            headers: BTreeMap::new(),
            body: None,
        }
    }

    /// Create a JSON response with a custom status code.
    ///
    /// No `Content-Type` header is added; the gateway integration owns that.
    /// A body that fails to serialize is logged and left out.
    pub fn json<T: Serialize>(status: u16, body: T) -> Self {
        let body = match to_json_body(&body) {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::error!(error = %e, status, "failed to serialize response body");
                None
            }
        };

        Self {
            status_code: status,
            headers: BTreeMap::new(),
            body,
        }
    }

    /// Create a response whose body is `{"message": text}`.
    ///
    /// # Example
    /// ```ignore
    /// Response::message(200, "Hello!") // body: {"message": "Hello!"}
    /// ```
    pub fn message(status: u16, text: impl Into<String>) -> Self {
        Self::json(status, serde_json::json!({ "message": text.into() }))
    }

    /// Create a 400 Bad Request response.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::json(400, serde_json::json!({ "error": message.into() }))
    }

    /// Create a 500 Internal Server Error response.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::json(500, serde_json::json!({ "error": message.into() }))
    }

    /// Add a header to the response (builder pattern). Replaces an existing value.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the CORS allow-origin header.
    ///
    /// # Example
    /// ```ignore
    /// Response::message(200, "hi").with_allow_origin("*")
    /// Response::message(200, "hi").with_allow_origin("https://myapp.com")
    /// ```
    pub fn with_allow_origin(self, origin: impl Into<String>) -> Self {
        self.with_header(ALLOW_ORIGIN, origin)
    }

    /// Value of the allow-origin header, if set.
    pub fn allow_origin(&self) -> Option<&str> {
        self.headers.get(ALLOW_ORIGIN).map(String::as_str)
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new(200)
    }
}

/// Serialize a body as JSON with `", "` and `": "` separators.
///
/// Produces `{"message": "Hello"}` rather than `{"message":"Hello"}`.
pub fn to_json_body<T: Serialize + ?Sized>(body: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    body.serialize(&mut ser)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Single-line formatter with a space after every `,` and `:`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}
