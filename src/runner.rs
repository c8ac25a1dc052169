//! The request runner.

use crate::{CurlClient, Error, HttpClient, RequestTarget, ResponseExt};
use std::io::{self, Write};

/// Decides whether a response's status code matters.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum StatusPolicy {
    /// Any response the client returns is a success, and its body is printed
    /// regardless of the status code.
    ///
    /// This is the default.
    #[default]
    Lenient,

    /// Only responses with a `2xx` status are a success. Anything else fails
    /// with [`Error::UnsuccessfulStatus`] before any output is written.
    RequireSuccess,
}

/// Sends one GET request and writes the response text to an output.
///
/// A runner holds no mutable state, so running it several times against the
/// same deterministic client produces the same output every time.
#[derive(Debug)]
pub struct Runner<C> {
    client: C,
    target: RequestTarget,
    status_policy: StatusPolicy,
}

impl<C: HttpClient> Runner<C> {
    /// Create a runner that sends the built-in target using the given client.
    pub fn new(client: C) -> Self {
        Self {
            client,
            target: RequestTarget::default(),
            status_policy: StatusPolicy::default(),
        }
    }

    /// Send a different request target instead of the built-in one.
    pub fn target(mut self, target: RequestTarget) -> Self {
        self.target = target;
        self
    }

    /// Set how non-success status codes are treated.
    pub fn status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = policy;
        self
    }

    /// Send the request exactly once and write the response text, followed by
    /// a newline, to `out`.
    ///
    /// Nothing is retried. If the request fails, the error is returned as-is
    /// and nothing is written.
    pub fn run_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), Error> {
        let url = self.target.url();

        tracing::debug!("sending GET request to {}", url);

        let response = self.client.get(url, self.target.headers())?;
        let status = response.status();

        if !status.is_success() {
            match self.status_policy {
                StatusPolicy::Lenient => {
                    tracing::warn!(
                        "{} responded with status {}, printing body anyway",
                        url,
                        status
                    );
                }
                StatusPolicy::RequireSuccess => return Err(Error::UnsuccessfulStatus(status)),
            }
        }

        let text = response.text();

        writeln!(out, "{}", text)?;
        out.flush()?;

        tracing::debug!("wrote {} bytes of response text", text.len());

        Ok(())
    }
}

/// Send the built-in request with libcurl and print the response text to
/// standard output.
pub fn run() -> Result<(), Error> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    Runner::new(CurlClient::new()).run_to(&mut stdout)
}
