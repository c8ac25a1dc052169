//! Definition of all configurable client options.

use crate::Error;
use curl::easy::{Easy2, Handler, HttpVersion};
use std::time::Duration;

/// Defines the protocol and connection options of a [`CurlClient`](crate::CurlClient).
///
/// These are policies of the HTTP client itself. The request runner never
/// changes them.
#[derive(Clone, Debug)]
pub struct Options {
    /// The policy for automatically following server redirects.
    ///
    /// The default is to not follow redirects.
    pub redirect_policy: RedirectPolicy,

    /// A preferred HTTP version the client should attempt to use to communicate
    /// to the server with.
    ///
    /// This is treated as a suggestion. A different version may be used if the
    /// server does not support it or negotiates a different version.
    ///
    /// The default value is `None` (any version).
    pub preferred_http_version: Option<http::Version>,

    /// A timeout for the maximum time allowed for a request-response cycle.
    ///
    /// The default value is `None` (unlimited).
    pub timeout: Option<Duration>,

    /// A timeout for the initial connection phase.
    ///
    /// The default value is 300 seconds.
    pub connect_timeout: Duration,

    /// Enable or disable the `TCP_NODELAY` option.
    ///
    /// The default value is `false`.
    pub tcp_nodelay: bool,
}

impl Default for Options {
    /// Create a new options with the default values.
    fn default() -> Self {
        Self {
            redirect_policy: RedirectPolicy::default(),
            preferred_http_version: None,
            timeout: None,
            connect_timeout: Duration::from_secs(300),
            tcp_nodelay: false,
        }
    }
}

impl Options {
    /// Set the redirect policy.
    pub fn with_redirect_policy(mut self, policy: RedirectPolicy) -> Self {
        self.redirect_policy = policy;
        self
    }

    /// Set a preferred HTTP version.
    pub fn with_preferred_http_version(mut self, version: Option<http::Version>) -> Self {
        self.preferred_http_version = version;
        self
    }

    /// Set a timeout for the whole request-response cycle.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a timeout for the connection phase.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Enable or disable `TCP_NODELAY`.
    pub fn with_tcp_nodelay(mut self, enable: bool) -> Self {
        self.tcp_nodelay = enable;
        self
    }

    /// Configure a curl easy handle according to these options.
    pub(crate) fn apply<H: Handler>(&self, easy: &mut Easy2<H>) -> Result<(), Error> {
        if let Some(timeout) = self.timeout {
            easy.timeout(timeout)?;
        }
        easy.connect_timeout(self.connect_timeout)?;
        easy.tcp_nodelay(self.tcp_nodelay)?;

        match self.redirect_policy {
            RedirectPolicy::None => {
                easy.follow_location(false)?;
            }
            RedirectPolicy::Follow => {
                easy.follow_location(true)?;
            }
            RedirectPolicy::Limit(max) => {
                easy.follow_location(true)?;
                easy.max_redirections(max)?;
            }
        }

        if let Some(version) = self.preferred_http_version {
            easy.http_version(match version {
                http::Version::HTTP_10 => HttpVersion::V10,
                http::Version::HTTP_11 => HttpVersion::V11,
                http::Version::HTTP_2 => HttpVersion::V2,
                _ => HttpVersion::Any,
            })?;
        }

        Ok(())
    }
}

/// Describes a policy for handling server redirects.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RedirectPolicy {
    /// Do not apply any special treatment to redirect responses. The response
    /// will be returned as-is and redirects will not be followed.
    ///
    /// This is the default policy.
    #[default]
    None,
    /// Follow all redirects automatically.
    Follow,
    /// Follow redirects automatically up to a maximum number of redirects.
    Limit(u32),
}
