use http::{
    header::{HeaderName, HeaderValue},
    StatusCode,
    Version,
};

pub(crate) fn parse_status_line(line: &[u8]) -> Option<(Version, StatusCode)> {
    let mut parts = line.split(u8::is_ascii_whitespace);

    let version = match parts.next()? {
        b"HTTP/3" => Version::HTTP_3,
        b"HTTP/2" => Version::HTTP_2,
        b"HTTP/1.1" => Version::HTTP_11,
        b"HTTP/1.0" => Version::HTTP_10,
        b"HTTP/0.9" => Version::HTTP_09,
        _ => return None,
    };

    let status_code = parts
        .find(|s| !s.is_empty())
        .map(StatusCode::from_bytes)?
        .ok()?;

    Some((version, status_code))
}

pub(crate) fn parse_header(line: &[u8]) -> Option<(HeaderName, HeaderValue)> {
    let split_index = line.iter().position(|&f| f == b':')?;

    let name = HeaderName::from_bytes(&line[..split_index]).ok()?;
    let value = HeaderValue::from_bytes(line[split_index + 1..].trim_ascii()).ok()?;

    Some((name, value))
}

/// Format a request header the way libcurl expects it in a header list.
pub(crate) fn header_to_curl_string(
    name: &HeaderName,
    value: &HeaderValue,
) -> String {
    // Header sets are built from strings, so values are always valid UTF-8.
    let value = String::from_utf8_lossy(value.as_bytes());
    let mut string = String::from(name.as_str());

    // libcurl requires a special syntax to set a header with an explicit empty
    // value. See https://curl.haxx.se/libcurl/c/CURLOPT_HTTPHEADER.html.
    if value.trim().is_empty() {
        string.push(';');
    } else {
        string.push_str(": ");
        string.push_str(&value);
    }

    string
}
