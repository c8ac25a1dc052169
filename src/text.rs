//! Text decoding routines.

#![cfg(feature = "text-decoding")]

use crate::headers::HasHeaders;
use encoding_rs::Encoding;
use http::Response;

/// Decode a complete response body as text.
///
/// A byte order mark takes precedence over the encoding picked from the
/// response headers, and is not part of the returned text.
pub(crate) fn decode<T>(response: &Response<T>, bytes: &[u8]) -> String {
    let (text, encoding, malformed) = encoding_for_response(response).decode(bytes);

    if malformed {
        tracing::debug!("body is not valid {}, replaced malformed sequences", encoding.name());
    }

    text.into_owned()
}

/// Pick the encoding declared by the response's `Content-Type` charset,
/// falling back to UTF-8.
fn encoding_for_response<T>(response: &Response<T>) -> &'static Encoding {
    if let Some(content_type) = response
        .content_type()
        .and_then(|header| header.parse::<mime::Mime>().ok())
    {
        if let Some(charset) = content_type.get_param(mime::CHARSET) {
            if let Some(encoding) = Encoding::for_label(charset.as_str().as_bytes()) {
                return encoding;
            } else {
                tracing::warn!("unknown encoding '{}', falling back to UTF-8", charset);
            }
        }
    }

    encoding_rs::UTF_8
}
