//! IPC protocol between the hosting platform and a handler process.
//!
//! The platform writes invocations to stdin using a simple length-prefixed
//! JSON protocol: a 4-byte big-endian length followed by the payload. Each
//! payload is an envelope:
//!
//! ```json
//! {"event": {"path": "/chatbot"}, "context": {"request_id": "abc"}}
//! ```
//!
//! Both fields are optional. The handler answers every invocation with one
//! frame on stdout holding the serialized [`Response`].
//!
//! # Example
//! ```ignore
//! use cloudfront_api_sdk::prelude::*;
//!
//! fn handle(_req: Request, _ctx: &Context) -> Response {
//!     Response::message(200, "Hello")
//! }
//!
//! cloudfront_api_sdk::handler_loop!(handle);
//! ```

use crate::{Context, HandlerError, Request, Response};
use serde::{Deserialize, Serialize};
use std::io::{self, ErrorKind, Read, Write};

/// Largest frame accepted in either direction (6 MiB).
pub const MAX_FRAME_LEN: usize = 6 * 1024 * 1024;

/// One invocation as sent by the platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Invocation {
    pub event: Request,
    pub context: Context,
}

/// Outcome of reading one frame.
#[derive(Debug)]
pub enum Frame {
    /// A well-formed invocation.
    Invocation(Invocation),
    /// A complete frame whose payload is not a valid envelope.
    Malformed(HandlerError),
}

/// Read the next frame.
///
/// Returns `Ok(None)` when the stream ends cleanly between frames.
pub fn read_frame<R: Read>(reader: &mut R) -> Result<Option<Frame>, HandlerError> {
    // Read length prefix (4 bytes, big-endian)
    let mut len_buf = [0u8; 4];
    let mut filled = 0;
    while filled < len_buf.len() {
        match reader.read(&mut len_buf[filled..]) {
            Ok(0) if filled == 0 => return Ok(None),
            Ok(0) => return Err(HandlerError::Ipc("Truncated length prefix".into())),
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    let len = u32::from_be_bytes(len_buf) as usize;
    if len > MAX_FRAME_LEN {
        return Err(HandlerError::Ipc(format!(
            "Frame of {} bytes exceeds limit of {} bytes",
            len, MAX_FRAME_LEN
        )));
    }

    // Read the JSON payload
    let mut payload = vec![0u8; len];
    reader
        .read_exact(&mut payload)
        .map_err(|e| HandlerError::Ipc(format!("Failed to read payload: {}", e)))?;

    Ok(Some(match serde_json::from_slice(&payload) {
        Ok(invocation) => Frame::Invocation(invocation),
        Err(e) => Frame::Malformed(HandlerError::InvalidInvocation(e.to_string())),
    }))
}

/// Write one response frame and flush.
pub fn write_response<W: Write>(writer: &mut W, response: &Response) -> Result<(), HandlerError> {
    let payload = serde_json::to_vec(response)?;
    if payload.len() > MAX_FRAME_LEN {
        return Err(HandlerError::Ipc(format!(
            "Response of {} bytes exceeds limit of {} bytes",
            payload.len(),
            MAX_FRAME_LEN
        )));
    }

    let len = payload.len() as u32;
    writer
        .write_all(&len.to_be_bytes())
        .map_err(|e| HandlerError::Ipc(format!("Failed to write length: {}", e)))?;
    writer
        .write_all(&payload)
        .map_err(|e| HandlerError::Ipc(format!("Failed to write payload: {}", e)))?;
    writer
        .flush()
        .map_err(|e| HandlerError::Ipc(format!("Failed to flush: {}", e)))?;

    Ok(())
}

/// Serve invocations from `reader` until it is exhausted.
///
/// Returns the number of frames answered.
pub fn serve_with<R, W, F>(reader: &mut R, writer: &mut W, handler: F) -> Result<usize, HandlerError>
where
    R: Read,
    W: Write,
    F: Fn(Request, &Context) -> Response,
{
    let mut served = 0;
    while let Some(frame) = read_frame(reader)? {
        let response = match frame {
            Frame::Invocation(Invocation { event, context }) => {
                tracing::debug!(
                    request_id = %context.request_id,
                    path = event.path().unwrap_or("-"),
                    "invoking handler"
                );
                handler(event, &context)
            }
            Frame::Malformed(err) => {
                tracing::warn!(error = %err, "rejecting malformed invocation");
                err.to_response()
            }
        };
        write_response(writer, &response)?;
        served += 1;
    }
    Ok(served)
}

/// Serve invocations from stdin, writing responses to stdout.
pub fn serve<F>(handler: F) -> Result<(), HandlerError>
where
    F: Fn(Request, &Context) -> Response,
{
    crate::logging::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let served = serve_with(&mut stdin.lock(), &mut stdout.lock(), handler)?;
    tracing::info!(served, "input closed, shutting down");
    Ok(())
}

/// Generate a `main` that serves the given handler over stdin/stdout.
///
/// # Example
/// ```ignore
/// use cloudfront_api_sdk::prelude::*;
///
/// fn handle(_req: Request, _ctx: &Context) -> Response {
///     Response::message(200, "Hello")
/// }
///
/// cloudfront_api_sdk::handler_loop!(handle);
/// ```
#[macro_export]
macro_rules! handler_loop {
    ($handler:expr) => {
        fn main() -> ::std::process::ExitCode {
            match $crate::ipc::serve($handler) {
                Ok(()) => ::std::process::ExitCode::SUCCESS,
                Err(e) => {
                    $crate::tracing::error!(error = %e, "handler loop failed");
                    ::std::process::ExitCode::FAILURE
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Cursor;

    fn frame(payload: &[u8]) -> Vec<u8> {
        let mut buf = (payload.len() as u32).to_be_bytes().to_vec();
        buf.extend_from_slice(payload);
        buf
    }

    fn read_responses(mut out: &[u8]) -> Vec<Response> {
        let mut responses = Vec::new();
        while !out.is_empty() {
            let len = u32::from_be_bytes([out[0], out[1], out[2], out[3]]) as usize;
            responses.push(serde_json::from_slice(&out[4..4 + len]).unwrap());
            out = &out[4 + len..];
        }
        responses
    }

    fn echo_request_id(_req: Request, ctx: &Context) -> Response {
        Response::message(200, ctx.request_id.clone())
    }

    #[test]
    fn test_empty_input_serves_nothing() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        let served = serve_with(&mut input, &mut output, echo_request_id).unwrap();
        assert_eq!(served, 0);
        assert!(output.is_empty());
    }

    #[test]
    fn test_each_frame_gets_one_response_in_order() {
        let mut input = frame(br#"{"event": {}, "context": {"request_id": "one"}}"#);
        input.extend(frame(br#"{"context": {"request_id": "two"}}"#));
        input.extend(frame(b"{}"));

        let mut output = Vec::new();
        let served = serve_with(&mut Cursor::new(input), &mut output, echo_request_id).unwrap();
        assert_eq!(served, 3);

        let bodies: Vec<_> = read_responses(&output)
            .into_iter()
            .map(|r| r.body.unwrap())
            .collect();
        assert_eq!(
            bodies,
            vec![
                r#"{"message": "one"}"#,
                r#"{"message": "two"}"#,
                r#"{"message": ""}"#,
            ]
        );
    }

    #[test]
    fn test_malformed_envelope_is_rejected_and_loop_continues() {
        let mut input = frame(b"not json");
        input.extend(frame(br#"{"context": {"request_id": "after"}}"#));

        let mut output = Vec::new();
        let served = serve_with(&mut Cursor::new(input), &mut output, echo_request_id).unwrap();
        assert_eq!(served, 2);

        let responses = read_responses(&output);
        assert_eq!(responses[0].status_code, 400);
        assert_eq!(responses[1].status_code, 200);
        assert_eq!(responses[1].body.as_deref(), Some(r#"{"message": "after"}"#));
    }

    #[test]
    fn test_truncated_payload_stops_the_loop() {
        let mut input = frame(b"{}");
        input.extend_from_slice(&100u32.to_be_bytes());
        input.extend_from_slice(b"{\"event\"");

        let mut output = Vec::new();
        let err = serve_with(&mut Cursor::new(input), &mut output, echo_request_id).unwrap_err();
        assert!(matches!(err, HandlerError::Ipc(_)));
        assert_eq!(read_responses(&output).len(), 1);
    }

    #[test]
    fn test_truncated_length_prefix() {
        let mut input = Cursor::new(vec![0u8, 0]);
        assert!(matches!(read_frame(&mut input), Err(HandlerError::Ipc(_))));
    }

    #[test]
    fn test_oversized_frame_is_refused() {
        let len = (MAX_FRAME_LEN as u32 + 1).to_be_bytes();
        let mut input = Cursor::new(len.to_vec());
        assert!(matches!(read_frame(&mut input), Err(HandlerError::Ipc(_))));
    }

    #[test]
    fn test_frame_at_limit_is_accepted() {
        // Pad a valid envelope with trailing whitespace up to the limit
        let mut payload = b"{}".to_vec();
        payload.resize(MAX_FRAME_LEN, b' ');
        let mut input = Cursor::new(frame(&payload));

        match read_frame(&mut input).unwrap() {
            Some(Frame::Invocation(invocation)) => assert_eq!(invocation, Invocation::default()),
            other => panic!("expected invocation, got {:?}", other),
        }
        assert!(read_frame(&mut input).unwrap().is_none());
    }

    #[test]
    fn test_envelope_fields_reach_the_handler() {
        let payload = json!({
            "event": {"path": "/chatbot"},
            "context": {"request_id": "r-1", "function_name": "chatbot", "deadline_ms": 10}
        });
        let input = frame(&serde_json::to_vec(&payload).unwrap());

        let mut output = Vec::new();
        serve_with(&mut Cursor::new(input), &mut output, |req: Request, ctx: &Context| {
            assert_eq!(req.path(), Some("/chatbot"));
            assert_eq!(ctx.function_name, "chatbot");
            assert_eq!(ctx.deadline_ms, Some(10));
            Response::new(204)
        })
        .unwrap();

        assert_eq!(read_responses(&output)[0].status_code, 204);
    }
}
