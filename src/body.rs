//! The response body type.

use std::fmt;

/// Contains the body of an HTTP response.
///
/// The whole body is received before a response is handed back, so a `Body`
/// is simply the bytes that the server sent, after any content encoding was
/// removed.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Body(Vec<u8>);

impl Body {
    /// Create a new empty body.
    pub const fn empty() -> Self {
        Body(Vec::new())
    }

    /// Report if this body is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the size of the body in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get the raw bytes of the body.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Body {
    fn from(body: Vec<u8>) -> Self {
        Body(body)
    }
}

impl From<&'static [u8]> for Body {
    fn from(body: &'static [u8]) -> Self {
        Body(body.to_vec())
    }
}

impl From<String> for Body {
    fn from(body: String) -> Self {
        body.into_bytes().into()
    }
}

impl From<&'static str> for Body {
    fn from(body: &'static str) -> Self {
        body.as_bytes().into()
    }
}

impl AsRef<[u8]> for Body {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Body({} bytes)", self.len())
    }
}
