//! The request the runner sends.

use crate::{Error, HeaderSet};
use http::Uri;
use once_cell::sync::Lazy;

/// URL the runner requests by default.
pub const TARGET_URL: &str = "http://mockbin.com/har";

/// Headers the runner sends by default, in order.
pub const TARGET_HEADERS: [(&str, &str); 3] = [
    ("accept", "application/json"),
    ("x-foo", "Bar"),
    ("x-bar", "Foo"),
];

/// A URL together with the headers to send to it.
///
/// The URL is kept exactly as given. It is only checked to be an absolute
/// URI, never normalized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestTarget {
    url: String,
    headers: HeaderSet,
}

impl RequestTarget {
    /// Create a new request target.
    ///
    /// Returns an error if `url` is not an absolute URI with a scheme and
    /// authority.
    pub fn new(url: impl Into<String>, headers: HeaderSet) -> Result<Self, Error> {
        let url = url.into();
        let uri = url.parse::<Uri>()?;

        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(Error::InvalidUrl(url));
        }

        Ok(Self {
            url,
            headers,
        })
    }

    /// The URL to request.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The headers to send.
    pub fn headers(&self) -> &HeaderSet {
        &self.headers
    }
}

impl Default for RequestTarget {
    /// The built-in target: [`TARGET_URL`] with [`TARGET_HEADERS`].
    fn default() -> Self {
        default_target().clone()
    }
}

/// Get the built-in request target.
///
/// Built the first time it is needed and never changed afterwards.
pub fn default_target() -> &'static RequestTarget {
    static TARGET: Lazy<RequestTarget> = Lazy::new(|| {
        let headers = HeaderSet::try_from(&TARGET_HEADERS[..])
            .expect("built-in headers are valid");

        RequestTarget::new(TARGET_URL, headers).expect("built-in URL is valid")
    });

    &TARGET
}
