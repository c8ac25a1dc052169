use crate::{request::Request, response::Response};

/// Decides how a mock answers a request.
pub trait Responder: Send + Sync + 'static {
    /// Produce a response for the given request, or `None` to fall through to
    /// the next responder.
    fn respond(&self, request: &Request) -> Option<Response>;
}

/// Answers every request with an empty `200 OK`.
pub struct DefaultResponder;

impl Responder for DefaultResponder {
    fn respond(&self, _: &Request) -> Option<Response> {
        Some(Response::default())
    }
}
