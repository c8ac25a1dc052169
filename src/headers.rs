//! Ordered request header sets.

use crate::Error;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use std::{fmt, slice};

/// An ordered set of request headers.
///
/// Unlike [`HeaderMap`], a header set remembers the order that headers were
/// inserted in, so that the headers handed to the HTTP client are exactly the
/// ones given, in the same order. Each name appears at most once. Names are
/// case-insensitive and are stored lowercased.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    entries: Vec<(HeaderName, HeaderValue)>,
}

impl HeaderSet {
    /// Create a new empty header set.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a header into the set.
    ///
    /// If a header with the same name is already present, its value is
    /// replaced in place and the previous value is returned. Otherwise the
    /// header is appended to the end of the set.
    ///
    /// Returns an error if the name or value are not valid in an HTTP header.
    pub fn insert(&mut self, name: &str, value: &str) -> Result<Option<HeaderValue>, Error> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let value = HeaderValue::from_str(value)?;

        if let Some((_, existing)) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            return Ok(Some(std::mem::replace(existing, value)));
        }

        self.entries.push((name, value));

        Ok(None)
    }

    /// Get the value of a header by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.entries
            .iter()
            .find(|(n, _)| n.as_str().eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    /// Check if a header with the given name is present, ignoring case.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get the number of headers in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the set contains no headers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the headers in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.entries.iter())
    }

    /// Get the header names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl<'a> TryFrom<&'a [(&'a str, &'a str)]> for HeaderSet {
    type Error = Error;

    fn try_from(pairs: &'a [(&'a str, &'a str)]) -> Result<Self, Self::Error> {
        let mut set = HeaderSet::new();

        for (name, value) in pairs {
            set.insert(name, value)?;
        }

        Ok(set)
    }
}

impl fmt::Debug for HeaderSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a HeaderSet {
    type Item = (&'a HeaderName, &'a HeaderValue);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the headers of a [`HeaderSet`], in insertion order.
#[derive(Debug)]
pub struct Iter<'a>(slice::Iter<'a, (HeaderName, HeaderValue)>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a HeaderName, &'a HeaderValue);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(name, value)| (name, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Extension trait for HTTP responses for accessing common headers in a typed
/// way.
#[cfg_attr(not(feature = "text-decoding"), allow(dead_code))]
pub(crate) trait HasHeaders {
    fn headers(&self) -> &HeaderMap;

    fn content_type(&self) -> Option<&str> {
        self.headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }
}

impl<T> HasHeaders for http::Response<T> {
    fn headers(&self) -> &HeaderMap {
        self.headers()
    }
}
