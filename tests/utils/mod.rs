use std::env;
use std::sync::Once;

pub fn logging() {
    static ONCE: Once = Once::new();

    ONCE.call_once(|| {
        env::set_var("RUST_BACKTRACE", "1");
        env::set_var("RUST_LOG", "reqrun=trace");
        let _ = env_logger::builder().is_test(true).try_init();
    });
}
