//! Fixed-size worker pools for the embarrassingly parallel searches.

use std::num::NonZeroUsize;

use tracing::warn;

/// Worker count used when none is configured: the machine's available
/// parallelism, or 1 if that cannot be determined.
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Run `job` inside a dedicated rayon pool of `workers` threads (at least 1).
///
/// Parallel iterators used by `job` are scheduled on that pool. If the pool
/// cannot be built the job still runs, on the global pool.
pub fn install<R, F>(workers: usize, job: F) -> R
where
    R: Send,
    F: FnOnce() -> R + Send,
{
    match rayon::ThreadPoolBuilder::new()
        .num_threads(workers.max(1))
        .build()
    {
        Ok(pool) => pool.install(job),
        Err(err) => {
            warn!(%err, workers, "worker pool unavailable, using global pool");
            job()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_workers_is_positive() {
        assert!(default_workers() >= 1);
    }

    #[test]
    fn install_runs_on_requested_thread_count() {
        let threads = install(3, rayon::current_num_threads);
        assert_eq!(threads, 3);
    }

    #[test]
    fn install_clamps_zero_workers_to_one() {
        let threads = install(0, rayon::current_num_threads);
        assert_eq!(threads, 1);
    }
}
