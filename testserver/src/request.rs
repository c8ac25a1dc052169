use regex::Regex;

/// A request received by a mock.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Request {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Request {
    pub fn get_header(&self, name: impl AsRef<str>) -> impl Iterator<Item = String> + '_ {
        let name_lower = name.as_ref().to_lowercase();

        self.headers
            .iter()
            .filter(move |(name, _)| name.to_lowercase() == name_lower)
            .map(|(_, value)| value.clone())
    }

    pub fn expect_header(&self, name: impl AsRef<str>, value: impl AsRef<str>) {
        self.expect_header_matches(name, |v| v == value.as_ref())
    }

    pub fn expect_header_regex(&self, name: impl AsRef<str>, regex: &str) {
        let regex = Regex::new(regex).unwrap();
        self.expect_header_matches(name, |v| regex.is_match(v))
    }

    pub fn expect_header_matches(&self, name: impl AsRef<str>, predicate: impl Fn(&str) -> bool) {
        let name = name.as_ref();

        self.get_header(name)
            .find(|v| predicate(v))
            .unwrap_or_else(|| panic!("no header named `{}` with value expected found", name));
    }

    /// Get the header names in the order they were received.
    pub fn header_names(&self) -> Vec<String> {
        self.headers.iter().map(|(name, _)| name.to_lowercase()).collect()
    }
}
