use crate::{parse, Body, Error, Response};
use curl::easy::{InfoType, WriteError};
use http::{HeaderMap, StatusCode, Version};
use std::ascii;

/// Receives callbacks from curl and incrementally collects a response.
///
/// Curl reports every response it sees, including intermediate ones such as
/// redirects or `100 Continue`. Each new status line starts the response over,
/// so what remains when the transfer completes is the final response.
#[derive(Debug, Default)]
pub(crate) struct Collector {
    /// Status code of the response.
    status: Option<StatusCode>,

    /// HTTP version of the response.
    version: Option<Version>,

    /// Response headers received so far.
    headers: HeaderMap,

    /// Response body received so far.
    body: Vec<u8>,
}

impl Collector {
    /// Turn everything collected into a response.
    ///
    /// Fails with [`Error::NoResponse`] if curl never reported a status line.
    pub(crate) fn into_response(self) -> Result<Response, Error> {
        let status = self.status.ok_or(Error::NoResponse)?;

        let mut builder = http::Response::builder()
            .status(status)
            .version(self.version.unwrap_or_default());

        if let Some(headers) = builder.headers_mut() {
            *headers = self.headers;
        }

        Ok(builder.body(Body::from(self.body))?)
    }
}

impl curl::easy::Handler for Collector {
    // Gets called by curl for each line of data in the HTTP response header.
    fn header(&mut self, data: &[u8]) -> bool {
        // Curl calls this function for all lines in the response not part of
        // the response body, not just for headers.

        // Is this the status line?
        if let Some((version, status)) = parse::parse_status_line(data) {
            self.version = Some(version);
            self.status = Some(status);

            // Also clear any pre-existing headers that might be left over from
            // a previous intermediate response.
            self.headers.clear();
            self.body.clear();

            return true;
        }

        // Is this a header line?
        if let Some((name, value)) = parse::parse_header(data) {
            self.headers.append(name, value);
            return true;
        }

        // Is this the end of the response header?
        if data == b"\r\n" || data == b"\n" {
            return true;
        }

        // Unknown header line we don't know how to parse.
        tracing::warn!("ignoring unparseable header line: {:?}", String::from_utf8_lossy(data));
        true
    }

    // Gets called by curl when bytes from the response body are received.
    fn write(&mut self, data: &[u8]) -> Result<usize, WriteError> {
        tracing::trace!("received {} bytes of data", data.len());

        self.body.extend_from_slice(data);

        Ok(data.len())
    }

    // Gets called by curl for verbose output when `verbose` is enabled.
    fn debug(&mut self, kind: InfoType, data: &[u8]) {
        fn format_byte_string(bytes: impl AsRef<[u8]>) -> String {
            String::from_utf8(
                bytes
                    .as_ref()
                    .iter()
                    .flat_map(|byte| ascii::escape_default(*byte))
                    .collect(),
            )
            .unwrap_or_else(|_| String::from("<binary>"))
        }

        match kind {
            InfoType::Text => {
                let text = String::from_utf8_lossy(data);
                tracing::debug!(target: "reqrun::curl", "{}", text.trim_end())
            }
            InfoType::HeaderIn | InfoType::DataIn => {
                tracing::trace!(target: "reqrun::wire", "<< {}", format_byte_string(data))
            }
            InfoType::HeaderOut | InfoType::DataOut => {
                tracing::trace!(target: "reqrun::wire", ">> {}", format_byte_string(data))
            }
            _ => (),
        }
    }
}
