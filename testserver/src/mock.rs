//! A tiny mock HTTP server to allow tests to inspect outgoing requests and
//! return specific responses.
//!
//! Only HTTP/1.x is implemented.

use crate::{pool::pool, request::Request, responder::*, response::Response};
use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};
use tiny_http::Server;

/// A mock HTTP endpoint.
#[derive(Clone)]
pub struct Mock(Arc<Inner>);

struct Inner {
    server: Server,

    /// Every request received so far, in order.
    requests: Mutex<Vec<Request>>,

    /// A list of responders. When receiving a request each responder is tried
    /// in order until one returns a response.
    responders: Vec<Box<dyn Responder>>,
}

impl Mock {
    /// Create a new mock server with a single responder.
    pub fn new<R: Responder>(responder: R) -> Self {
        Self::builder().responder(responder).build()
    }

    /// Create a builder for creating a customized mock server.
    pub fn builder() -> Builder {
        Builder {
            responders: vec![],
        }
    }

    /// Get the socket address of this mock server.
    pub fn addr(&self) -> SocketAddr {
        self.0
            .server
            .server_addr()
            .to_ip()
            .expect("mock server listens on an IP address")
    }

    /// Get the HTTP URL of this mock server.
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr())
    }

    /// Get all requests received so far.
    pub fn requests(&self) -> Vec<Request> {
        self.0.requests.lock().unwrap().clone()
    }

    /// Get the first request received by this mock.
    pub fn request(&self) -> Request {
        let request = self.0.requests.lock().unwrap().first().cloned();

        request.expect("no request received")
    }

    fn handle_request(&self, mut request: tiny_http::Request) {
        let mut body = Vec::new();

        if let Some(len) = request.body_length() {
            body.reserve(len);
        }

        request.as_reader().read_to_end(&mut body).unwrap();

        // Build a record of the request received.
        let mock_request = Request {
            method: request.method().to_string(),
            url: request.url().to_string(),
            headers: request
                .headers()
                .iter()
                .map(|header| (header.field.to_string(), header.value.to_string()))
                .collect(),
            body,
        };

        self.0.requests.lock().unwrap().push(mock_request.clone());

        let response = self
            .0
            .responders
            .iter()
            .find_map(|responder| responder.respond(&mock_request))
            .unwrap_or_else(|| Response {
                status_code: 404,
                ..Response::default()
            });

        let _ = request.respond(response.into_http_response());
    }
}

/// A builder for creating mock servers.
pub struct Builder {
    responders: Vec<Box<dyn Responder>>,
}

impl Builder {
    /// Add a responder to the mock. Responders are tried in the order that they
    /// are added to the builder.
    pub fn responder<R: Responder + 'static>(mut self, responder: R) -> Self {
        self.responders.push(Box::new(responder));
        self
    }

    /// Start a new mock server.
    pub fn build(mut self) -> Mock {
        if self.responders.is_empty() {
            self.responders.push(Box::new(DefaultResponder));
        }

        let mock = Mock(Arc::new(Inner {
            server: Server::http("127.0.0.1:0").unwrap(),
            requests: Default::default(),
            responders: self.responders,
        }));

        pool().execute({
            let mock = mock.clone();

            move || {
                for request in mock.0.server.incoming_requests() {
                    mock.handle_request(request);
                }
            }
        });

        mock
    }
}
