//! The HTTP client capability and its curl implementation.

use crate::{handler::Collector, parse, Error, HeaderSet, Options, Response};
use curl::easy::{Easy2, List};
use std::sync::Arc;

/// Something that can perform an HTTP GET request.
///
/// This is the only thing the request runner needs from the outside world.
/// Implementations own every transport concern, such as connections, TLS,
/// redirects and timeouts.
pub trait HttpClient {
    /// Send a GET request to `url` with exactly the given headers and wait for
    /// the complete response.
    ///
    /// A response with any status code is a successful result. Only failing to
    /// obtain a response at all is an error.
    fn get(&self, url: &str, headers: &HeaderSet) -> Result<Response, Error>;
}

impl<C: HttpClient + ?Sized> HttpClient for &C {
    fn get(&self, url: &str, headers: &HeaderSet) -> Result<Response, Error> {
        (**self).get(url, headers)
    }
}

impl<C: HttpClient + ?Sized> HttpClient for Box<C> {
    fn get(&self, url: &str, headers: &HeaderSet) -> Result<Response, Error> {
        (**self).get(url, headers)
    }
}

impl<C: HttpClient + ?Sized> HttpClient for Arc<C> {
    fn get(&self, url: &str, headers: &HeaderSet) -> Result<Response, Error> {
        (**self).get(url, headers)
    }
}

/// An [`HttpClient`] backed by libcurl.
///
/// Every request uses a fresh curl handle, so nothing carries over from one
/// request to the next. Requests block the calling thread until the response
/// has been received completely.
///
/// # Examples
///
/// ```no_run
/// use reqrun::{CurlClient, HeaderSet, HttpClient, ResponseExt};
///
/// let client = CurlClient::new();
/// let response = client.get("http://example.org", &HeaderSet::new())?;
///
/// println!("{}", response.text());
/// # Ok::<(), reqrun::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct CurlClient {
    options: Options,
}

impl CurlClient {
    /// Create a new client with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new client with the given options.
    pub fn with_options(options: Options) -> Self {
        Self {
            options,
        }
    }

    /// Get the options this client was created with.
    pub fn options(&self) -> &Options {
        &self.options
    }
}

impl HttpClient for CurlClient {
    fn get(&self, url: &str, headers: &HeaderSet) -> Result<Response, Error> {
        let span = tracing::debug_span!("get", url);
        let _enter = span.enter();

        let mut easy = Easy2::new(Collector::default());

        // Route curl's own diagnostics into our logging.
        easy.verbose(true)?;
        easy.signal(false)?;
        self.options.apply(&mut easy)?;

        easy.get(true)?;
        easy.url(url)?;

        let mut list = List::new();
        for (name, value) in headers {
            list.append(&parse::header_to_curl_string(name, value))?;
        }
        easy.http_headers(list)?;

        tracing::debug!(headers = headers.len(), "sending request");
        easy.perform()?;

        let collector = std::mem::take(easy.get_mut());
        let response = collector.into_response()?;

        tracing::debug!(
            status = response.status().as_u16(),
            version = ?response.version(),
            bytes = response.body().len(),
            "received response"
        );

        Ok(response)
    }
}
