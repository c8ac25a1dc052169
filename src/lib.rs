//! Sends one HTTP GET request with a fixed set of headers and prints the
//! response body.
//!
//! The request itself is performed by an [`HttpClient`]. The default client,
//! [`CurlClient`], delegates everything about the network transaction to
//! libcurl. The [`Runner`] only composes the request, sends it once, and writes
//! the response text out.
//!
//! ```no_run
//! fn main() -> Result<(), reqrun::Error> {
//!     reqrun::run()
//! }
//! ```
//!
//! # Logging
//!
//! Events are emitted through the [tracing](https://docs.rs/tracing) crate,
//! which also forwards them to the [log](https://docs.rs/log) crate when no
//! tracing subscriber is installed. Curl's own diagnostics are logged under the
//! `reqrun::curl` target, and raw wire data under `reqrun::wire` at the trace
//! level.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod body;
mod client;
mod error;
mod handler;
mod headers;
mod options;
mod parse;
mod response;
mod runner;
mod target;
mod text;

pub use crate::{
    body::Body,
    client::{CurlClient, HttpClient},
    error::Error,
    headers::{HeaderSet, Iter},
    options::{Options, RedirectPolicy},
    response::{Response, ResponseExt},
    runner::{run, Runner, StatusPolicy},
    target::{default_target, RequestTarget, TARGET_HEADERS, TARGET_URL},
};

/// Re-export of the standard HTTP types.
pub use http;
