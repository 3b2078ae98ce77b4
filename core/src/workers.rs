//! workers.rs
//! Scoped CPU worker pool for batches of independent codec calls.
//!
//! Design:
//! - Jobs are fanned out over a bounded crossbeam channel to scoped threads.
//! - Results come back tagged with their input index and are reassembled in
//!   input order.
//! - No cancellation or timeout; a panicking job propagates when the scope
//!   joins.

use std::thread;

use crossbeam::channel::{bounded, unbounded};
use tracing::debug;

/// Parallelism configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerProfile {
    pub worker_count: usize,
}

impl WorkerProfile {
    pub const fn single_threaded() -> Self {
        Self { worker_count: 1 }
    }

    /// One worker per core, leaving one core free (at least one worker).
    pub fn dynamic() -> Self {
        let cores = num_cpus::get();
        Self { worker_count: cores.saturating_sub(1).max(1) }
    }

    /// Explicit count, or `dynamic()` when `None`. Zero is clamped to one.
    pub fn from_count(worker_count: Option<usize>) -> Self {
        match worker_count {
            Some(n) => Self { worker_count: n.max(1) },
            None => Self::dynamic(),
        }
    }
}

impl Default for WorkerProfile {
    fn default() -> Self {
        Self::dynamic()
    }
}

/// Apply `f` to every job, returning results in input order.
pub fn run_batch<T, R, F>(jobs: Vec<T>, profile: &WorkerProfile, f: F) -> Vec<R>
where
    T: Send,
    R: Send,
    F: Fn(T) -> R + Sync,
{
    let total = jobs.len();
    let workers = profile.worker_count.max(1).min(total.max(1));

    if workers == 1 {
        return jobs.into_iter().map(f).collect();
    }

    debug!(jobs = total, workers, "batch: dispatching");

    let (job_tx, job_rx) = bounded::<(usize, T)>(workers * 4);
    let (out_tx, out_rx) = unbounded::<(usize, R)>();
    let mut slots: Vec<Option<R>> = (0..total).map(|_| None).collect();

    thread::scope(|scope| {
        // ---- Workers ----
        for _ in 0..workers {
            let rx = job_rx.clone();
            let tx = out_tx.clone();
            let f = &f;
            scope.spawn(move || {
                for (index, job) in rx.iter() {
                    if tx.send((index, f(job))).is_err() {
                        return;
                    }
                }
            });
        }
        drop(job_rx);
        drop(out_tx);

        // ---- Feeder ----
        scope.spawn(move || {
            for item in jobs.into_iter().enumerate() {
                if job_tx.send(item).is_err() {
                    break;
                }
            }
            // job_tx dropped here: closes the job channel
        });

        // ---- Ordered collect ----
        for (index, result) in out_rx.iter() {
            slots[index] = Some(result);
        }
    });

    let out: Vec<R> = slots.into_iter().flatten().collect();
    debug_assert_eq!(out.len(), total);
    out
}
