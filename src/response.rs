//! JSON response helpers shared by every handler.
//!
//! All bodies leave the server as `application/json; charset=utf-8`, and every
//! non-2xx body uses the same envelope:
//!
//! ```json
//! { "error": "Couldn't authenticate" }
//! ```

use std::{
    pin::Pin,
    task::{Context, Poll},
};

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::{HeaderValue, Method, StatusCode, Uri, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body::{Body as HttpBody, Frame, SizeHint};
use serde::Serialize;

/// Content type attached to every JSON response.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Body sent when a payload cannot be serialized.
///
/// Kept as a literal so the fallback path never serializes anything itself.
const SERIALIZATION_FAULT_BODY: &str = r#"{"error":"Internal Server Error"}"#;

/// The only error payload shape returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope<'a> {
    pub error: &'a str,
}

/// Serialize `payload` and build a response with the given status.
///
/// A 5xx status is logged. If serialization fails the status is downgraded to
/// 500 and a fixed body is sent instead; the serde error is logged, never
/// returned to the client.
pub fn write_json<T: Serialize + ?Sized>(status: StatusCode, payload: &T) -> Response {
    if status.is_server_error() {
        tracing::error!("responding with {} status", status.as_u16());
    }

    encode(status, payload)
}

/// Build an error envelope response.
///
/// Server-side faults (5xx) are logged with their message before the response
/// is written; client errors are not.
pub fn write_error(status: StatusCode, message: &str) -> Response {
    if status.is_server_error() {
        tracing::error!("responding with {} error: {}", status.as_u16(), message);
    }

    encode(status, &ErrorEnvelope { error: message })
}

fn encode<T: Serialize + ?Sized>(status: StatusCode, payload: &T) -> Response {
    match serde_json::to_vec(payload) {
        Ok(bytes) => json_response(status, Body::from(bytes)),
        Err(err) => {
            tracing::error!(error = %err, "marshal json failed");
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                Body::from(SERIALIZATION_FAULT_BODY),
            )
        }
    }
}

fn json_response(status: StatusCode, body: Body) -> Response {
    let mut response = (status, body).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(JSON_CONTENT_TYPE),
    );
    response
}

/// Typed JSON body with an explicit status, for handlers that return
/// `impl IntoResponse`.
#[derive(Debug)]
pub struct JsonResponse<T>(pub StatusCode, pub T);

impl<T: Serialize> IntoResponse for JsonResponse<T> {
    fn into_response(self) -> Response {
        write_json(self.0, &self.1)
    }
}

/// Middleware that reports response bodies the client never received in full.
///
/// Status and headers are already on the wire when the body streams, so a
/// failed or abandoned body cannot change the response. It is only logged.
pub async fn log_write_faults(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    // HEAD responses carry no body; hyper drops it unread
    if method == Method::HEAD {
        return response;
    }

    response.map(|body| Body::new(TrackedBody::new(body, method, uri)))
}

/// Response body that logs when it fails or is dropped before end-of-stream.
struct TrackedBody {
    inner: Body,
    method: Method,
    uri: Uri,
    done: bool,
}

impl TrackedBody {
    fn new(inner: Body, method: Method, uri: Uri) -> Self {
        Self {
            inner,
            method,
            uri,
            done: false,
        }
    }
}

impl HttpBody for TrackedBody {
    type Data = Bytes;
    type Error = axum::Error;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Bytes>, axum::Error>>> {
        let this = self.get_mut();
        let poll = Pin::new(&mut this.inner).poll_frame(cx);

        match &poll {
            Poll::Ready(None) => this.done = true,
            Poll::Ready(Some(Err(err))) => {
                this.done = true;
                tracing::error!(
                    method = %this.method,
                    uri = %this.uri,
                    error = %err,
                    "write response failed"
                );
            }
            _ => {}
        }

        poll
    }

    fn is_end_stream(&self) -> bool {
        self.inner.is_end_stream()
    }

    fn size_hint(&self) -> SizeHint {
        self.inner.size_hint()
    }
}

impl Drop for TrackedBody {
    fn drop(&mut self) {
        // hyper may stop polling once is_end_stream() is true
        if !self.done && !self.inner.is_end_stream() {
            tracing::warn!(
                method = %self.method,
                uri = %self.uri,
                "write response failed: body dropped before completion"
            );
        }
    }
}
