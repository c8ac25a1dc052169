use reqrun::{
    http::StatusCode,
    CurlClient,
    Error,
    HeaderSet,
    HttpClient,
    Options,
    RedirectPolicy,
    RequestTarget,
    ResponseExt,
    Runner,
    TARGET_HEADERS,
};
use std::{net::TcpListener, time::Duration};
use testserver::{mock, Mock, Request, Responder, Response};

mod utils;

fn built_in_headers() -> HeaderSet {
    HeaderSet::try_from(&TARGET_HEADERS[..]).unwrap()
}

/// Redirects every path other than `/final` to `/final`.
struct RedirectToFinal;

impl Responder for RedirectToFinal {
    fn respond(&self, request: &Request) -> Option<Response> {
        if request.url == "/final" {
            return Some(Response::default().with_body("final"));
        }

        let mut response = Response::default().with_body("moved");
        response.status_code = 302;
        response.headers.push(("location".into(), "/final".into()));

        Some(response)
    }
}

/// Redirects every request back to `/`.
struct RedirectLoop;

impl Responder for RedirectLoop {
    fn respond(&self, _: &Request) -> Option<Response> {
        let mut response = Response::default();
        response.status_code = 302;
        response.headers.push(("location".into(), "/".into()));

        Some(response)
    }
}

#[test]
fn sends_get_with_headers_in_order() {
    utils::logging();

    let m = mock! {
        body: "OK",
    };

    CurlClient::new().get(&m.url(), &built_in_headers()).unwrap();

    let request = m.request();
    assert_eq!(request.method, "GET");
    assert_eq!(request.url, "/");
    request.expect_header("accept", "application/json");
    request.expect_header("x-foo", "Bar");
    request.expect_header("x-bar", "Foo");
    request.expect_header_regex("host", r"^127\.0\.0\.1:\d+$");
    assert_eq!(request.get_header("accept").count(), 1);

    let names = request.header_names();
    let position = |name: &str| names.iter().position(|n| n == name).unwrap();
    assert!(position("accept") < position("x-foo"));
    assert!(position("x-foo") < position("x-bar"));
}

#[test]
fn blank_header_value_is_sent_empty() {
    utils::logging();

    let m = mock!();
    let headers = HeaderSet::try_from(&[("x-empty", "")][..]).unwrap();

    CurlClient::new().get(&m.url(), &headers).unwrap();

    m.request().expect_header("x-empty", "");
}

#[test]
fn response_text_is_returned() {
    utils::logging();

    let m = mock! {
        body: "line one\nline two\n",
    };

    let response = CurlClient::new().get(&m.url(), &HeaderSet::new()).unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text(), "line one\nline two\n");
    assert_eq!(m.requests().len(), 1);
}

#[test]
fn response_text_uses_declared_charset() {
    utils::logging();

    let m = mock! {
        body: b"caf\xe9".to_vec(),
        headers {
            "content-type": "text/plain; charset=iso-8859-1",
        }
    };

    let response = CurlClient::new().get(&m.url(), &HeaderSet::new()).unwrap();

    assert_eq!(response.text(), "café");
}

#[test]
fn error_status_is_still_a_response() {
    utils::logging();

    let m = mock! {
        status: 404,
        body: "no such page",
    };

    let response = CurlClient::new().get(&m.url(), &HeaderSet::new()).unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "no such page");
}

#[test]
fn redirects_are_not_followed_by_default() {
    utils::logging();

    let m = mock! {
        status: 302,
        headers {
            "location": "/elsewhere",
        }
    };

    let response = CurlClient::new().get(&m.url(), &HeaderSet::new()).unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()["location"], "/elsewhere");
    assert_eq!(m.requests().len(), 1);
}

#[test]
fn redirects_are_followed_when_enabled() {
    utils::logging();

    let m = Mock::new(RedirectToFinal);
    let client = CurlClient::with_options(
        Options::default().with_redirect_policy(RedirectPolicy::Follow),
    );

    let response = client.get(&m.url(), &built_in_headers()).unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("location").is_none());
    assert_eq!(response.text(), "final");

    let requests = m.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].url, "/");
    assert_eq!(requests[1].url, "/final");
    requests[1].expect_header("x-foo", "Bar");
}

#[test]
fn redirect_within_limit_is_followed() {
    utils::logging();

    let m = Mock::new(RedirectToFinal);
    let client = CurlClient::with_options(
        Options::default().with_redirect_policy(RedirectPolicy::Limit(1)),
    );

    let response = client.get(&m.url(), &HeaderSet::new()).unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text(), "final");
}

#[test]
fn redirect_loop_hits_limit() {
    utils::logging();

    let m = Mock::new(RedirectLoop);
    let client = CurlClient::with_options(
        Options::default().with_redirect_policy(RedirectPolicy::Limit(2)),
    );

    let result = client.get(&m.url(), &HeaderSet::new());

    assert!(matches!(result, Err(Error::TooManyRedirects)));
    assert_eq!(m.requests().len(), 3);
}

#[test]
fn refused_connection_is_connect_failed() {
    utils::logging();

    // Grab a free port, then close it again so nothing is listening.
    let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    let url = format!("http://{}/", addr);

    let result = CurlClient::new().get(&url, &HeaderSet::new());

    assert!(matches!(result, Err(Error::ConnectFailed)));
}

#[test]
fn slow_server_is_timeout() {
    utils::logging();

    let m = mock! {
        delay: 1s,
    };

    let client = CurlClient::with_options(
        Options::default().with_timeout(Some(Duration::from_millis(200))),
    );

    let result = client.get(&m.url(), &HeaderSet::new());

    assert!(matches!(result, Err(Error::Timeout)));
}

#[test]
fn runner_prints_body_from_server() {
    utils::logging();

    let m = mock! {
        body: "OK",
    };

    let target = RequestTarget::new(m.url(), built_in_headers()).unwrap();
    let mut out = Vec::new();

    Runner::new(CurlClient::new())
        .target(target)
        .run_to(&mut out)
        .unwrap();

    assert_eq!(out, b"OK\n");
    assert_eq!(m.requests().len(), 1);
    m.request().expect_header("x-foo", "Bar");
}

#[test]
fn requests_do_not_share_state() {
    utils::logging();

    let m = mock! {
        body: "same",
    };
    let client = CurlClient::new();

    let first = client.get(&m.url(), &built_in_headers()).unwrap();
    let second = client.get(&m.url(), &built_in_headers()).unwrap();

    assert_eq!(first.text(), second.text());

    let requests = m.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].headers, requests[1].headers);
}
