//! Shared thread pool for serving mock servers.
//!
//! Mocks can't share TCP servers since every test gets its own port, but we
//! _can_ share threads across all mock servers.

use once_cell::sync::Lazy;
use threadfin::ThreadPool;

/// Get access to the shared thread pool.
pub(crate) fn pool() -> &'static ThreadPool {
    static POOL: Lazy<ThreadPool> = Lazy::new(|| ThreadPool::builder().size(..100).build());

    &POOL
}
