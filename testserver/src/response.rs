use std::io::Cursor;

/// A canned response sent by a mock.
#[derive(Clone, Debug)]
pub struct Response {
    pub status_code: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub(crate) fn into_http_response(self) -> tiny_http::Response<Cursor<Vec<u8>>> {
        let len = self.body.len();

        tiny_http::Response::new(
            self.status_code.into(),
            self.headers
                .into_iter()
                .filter_map(|(name, value)| {
                    tiny_http::Header::from_bytes(name.as_bytes(), value.as_bytes()).ok()
                })
                .collect(),
            Cursor::new(self.body),
            Some(len),
            None,
        )
    }
}

impl Default for Response {
    fn default() -> Self {
        Self {
            status_code: 200,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }
}
