use crate::Body;

/// A fully received HTTP response.
pub type Response = http::Response<Body>;

/// Provides extension methods for working with HTTP responses.
pub trait ResponseExt {
    /// Get the response body decoded as text.
    ///
    /// The encoding used to decode the response body into a string depends on
    /// the response. If the body begins with a [Byte Order Mark
    /// (BOM)](https://en.wikipedia.org/wiki/Byte_order_mark), then UTF-8,
    /// UTF-16LE or UTF-16BE is used as indicated by the BOM. If no BOM is
    /// present, the encoding specified in the `charset` parameter of the
    /// `Content-Type` header is used if present. Otherwise UTF-8 is assumed.
    ///
    /// Malformed characters are replaced with the Unicode replacement
    /// character. The text is otherwise returned exactly as received,
    /// including any line breaks.
    ///
    /// # Availability
    ///
    /// Charset detection requires the `text-decoding` feature, which is enabled
    /// by default. Without it the body is always decoded as UTF-8.
    fn text(&self) -> String;
}

impl ResponseExt for Response {
    #[cfg(feature = "text-decoding")]
    fn text(&self) -> String {
        crate::text::decode(self, self.body().as_bytes())
    }

    #[cfg(not(feature = "text-decoding"))]
    fn text(&self) -> String {
        String::from_utf8_lossy(self.body().as_bytes()).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_preserves_line_structure() {
        let response = Response::new(Body::from("line one\r\nline two\n\nline four"));

        assert_eq!(response.text(), "line one\r\nline two\n\nline four");
    }

    #[test]
    fn text_of_empty_body_is_empty() {
        assert_eq!(Response::new(Body::empty()).text(), "");
    }
}
