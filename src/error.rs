//! Types for error handling.

use http::StatusCode;
use std::error::Error as StdError;
use std::fmt;
use std::io;

/// All the ways running a request can fail.
///
/// Every variant is a request execution failure. None of them are recovered
/// from locally; they exist so that callers can tell causes apart.
#[derive(Debug)]
pub enum Error {
    /// The server certificate could not be validated.
    BadServerCertificate(Option<String>),
    /// Failed to connect to the server.
    ConnectFailed,
    /// Couldn't resolve host name.
    CouldntResolveHost,
    /// Couldn't resolve proxy host name.
    CouldntResolveProxy,
    /// An unrecognized error thrown by curl.
    Curl(String),
    /// Validation error when constructing the request or parsing the response.
    InvalidHttpFormat(http::Error),
    /// A URL that is not absolute was given.
    InvalidUrl(String),
    /// An I/O error, usually while writing the output.
    Io(io::Error),
    /// The server did not send a response.
    NoResponse,
    /// An error occurred while reading the response body.
    ResponseBodyError(Option<String>),
    /// Failed to connect over a secure socket.
    SSLConnectFailed(Option<String>),
    /// The request took longer than the configured timeout.
    Timeout,
    /// Number of redirects hit the maximum amount.
    TooManyRedirects,
    /// The server answered with a non-success status and the runner was told
    /// to require success.
    UnsuccessfulStatus(StatusCode),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BadServerCertificate(detail) => {
                with_detail(f, "server certificate could not be validated", detail)
            }
            Error::ConnectFailed => f.write_str("failed to connect to the server"),
            Error::CouldntResolveHost => f.write_str("couldn't resolve host name"),
            Error::CouldntResolveProxy => f.write_str("couldn't resolve proxy host name"),
            Error::Curl(e) => write!(f, "curl error: {}", e),
            Error::InvalidHttpFormat(e) => write!(f, "invalid HTTP format: {}", e),
            Error::InvalidUrl(url) => write!(f, "not an absolute URL: {}", url),
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::NoResponse => f.write_str("server did not send a response"),
            Error::ResponseBodyError(detail) => {
                with_detail(f, "error reading the response body", detail)
            }
            Error::SSLConnectFailed(detail) => {
                with_detail(f, "failed to connect over a secure socket", detail)
            }
            Error::Timeout => f.write_str("request took longer than the configured timeout"),
            Error::TooManyRedirects => f.write_str("max redirect limit exceeded"),
            Error::UnsuccessfulStatus(status) => {
                write!(f, "server responded with status {}", status)
            }
        }
    }
}

fn with_detail(f: &mut fmt::Formatter<'_>, message: &str, detail: &Option<String>) -> fmt::Result {
    match detail {
        Some(detail) => write!(f, "{}: {}", message, detail),
        None => f.write_str(message),
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::InvalidHttpFormat(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[doc(hidden)]
impl From<curl::Error> for Error {
    fn from(error: curl::Error) -> Error {
        let detail = error.extra_description().map(str::to_owned);

        if error.is_peer_failed_verification() || error.is_ssl_cacert() {
            Error::BadServerCertificate(detail)
        } else if error.is_couldnt_connect() {
            Error::ConnectFailed
        } else if error.is_couldnt_resolve_host() {
            Error::CouldntResolveHost
        } else if error.is_couldnt_resolve_proxy() {
            Error::CouldntResolveProxy
        } else if error.is_got_nothing() {
            Error::NoResponse
        } else if error.is_write_error() || error.is_partial_file() {
            Error::ResponseBodyError(detail)
        } else if error.is_ssl_connect_error() {
            Error::SSLConnectFailed(detail)
        } else if error.is_operation_timedout() {
            Error::Timeout
        } else if error.is_too_many_redirects() {
            Error::TooManyRedirects
        } else {
            Error::Curl(error.description().to_owned())
        }
    }
}

#[doc(hidden)]
impl From<http::Error> for Error {
    fn from(error: http::Error) -> Error {
        Error::InvalidHttpFormat(error)
    }
}

#[doc(hidden)]
impl From<http::header::InvalidHeaderName> for Error {
    fn from(error: http::header::InvalidHeaderName) -> Error {
        Error::InvalidHttpFormat(error.into())
    }
}

#[doc(hidden)]
impl From<http::header::InvalidHeaderValue> for Error {
    fn from(error: http::header::InvalidHeaderValue) -> Error {
        Error::InvalidHttpFormat(error.into())
    }
}

#[doc(hidden)]
impl From<http::uri::InvalidUri> for Error {
    fn from(error: http::uri::InvalidUri) -> Error {
        Error::InvalidHttpFormat(error.into())
    }
}

#[doc(hidden)]
impl From<io::Error> for Error {
    fn from(error: io::Error) -> Error {
        match error.kind() {
            io::ErrorKind::ConnectionRefused => Error::ConnectFailed,
            io::ErrorKind::TimedOut => Error::Timeout,
            _ => Error::Io(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static_assertions::assert_impl_all!(Error: Send, Sync, StdError);

    #[test]
    fn io_errors_map_to_network_variants() {
        let refused: Error = io::Error::from(io::ErrorKind::ConnectionRefused).into();
        let timed_out: Error = io::Error::from(io::ErrorKind::TimedOut).into();
        let broken: Error = io::Error::from(io::ErrorKind::BrokenPipe).into();

        assert!(matches!(refused, Error::ConnectFailed));
        assert!(matches!(timed_out, Error::Timeout));
        assert!(matches!(broken, Error::Io(_)));
    }

    #[test]
    fn invalid_header_name_is_http_format_error() {
        let error: Error = http::header::HeaderName::from_bytes(b"bad name")
            .unwrap_err()
            .into();

        assert!(matches!(error, Error::InvalidHttpFormat(_)));
        assert!(error.source().is_some());
    }

    #[test]
    fn display_includes_detail_when_present() {
        let error = Error::SSLConnectFailed(Some("handshake failed".into()));

        assert_eq!(
            error.to_string(),
            "failed to connect over a secure socket: handshake failed"
        );
        assert_eq!(
            Error::UnsuccessfulStatus(StatusCode::NOT_FOUND).to_string(),
            "server responded with status 404 Not Found"
        );
    }
}
