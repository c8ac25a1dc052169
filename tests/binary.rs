//! Tests that run the compiled binary. Requests are routed through a mock
//! server acting as the HTTP proxy, so the built-in URL is never contacted.

use std::{
    net::TcpListener,
    process::{Command, Output},
};
use testserver::mock;

fn run_with_proxy(proxy: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_reqrun"))
        .env("http_proxy", proxy)
        .env_remove("no_proxy")
        .env_remove("NO_PROXY")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn prints_body_and_newline() {
    let m = mock! {
        body: "OK",
    };

    let output = run_with_proxy(&m.url());

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(output.stdout, b"OK\n");

    let request = m.request();
    assert_eq!(request.method, "GET");
    assert_eq!(request.url, "http://mockbin.com/har");
    request.expect_header("accept", "application/json");
    request.expect_header("x-foo", "Bar");
    request.expect_header("x-bar", "Foo");

    let names = request.header_names();
    let position = |name: &str| names.iter().position(|n| n == name).unwrap();
    assert!(position("accept") < position("x-foo"));
    assert!(position("x-foo") < position("x-bar"));
}

#[test]
fn prints_multi_line_body_verbatim() {
    let m = mock! {
        body: "first\r\nsecond\n",
    };

    let output = run_with_proxy(&m.url());

    assert!(output.status.success());
    assert_eq!(output.stdout, b"first\r\nsecond\n\n");
    assert_eq!(m.requests().len(), 1);
}

#[test]
fn failure_exits_non_zero_without_output() {
    // Grab a free port, then close it again so nothing is listening.
    let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();

    let output = run_with_proxy(&format!("http://{}/", addr));

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}
