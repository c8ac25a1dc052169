//! Sends the built-in GET request and prints the response body.
//!
//! Logging is written to standard error and can be enabled with the
//! `RUST_LOG` environment variable, for example `RUST_LOG=reqrun=debug`.

fn main() -> Result<(), reqrun::Error> {
    env_logger::init();

    reqrun::run()
}
