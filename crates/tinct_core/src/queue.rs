//! Deferred main-turn dispatch
//!
//! Some theme side effects (host window restyling) must not run re-entrantly
//! inside the call that triggered them. [`MainQueue`] collects that deferred
//! work; the host drains it once per main-loop turn. Work enqueued while a
//! drain is running waits for the following turn.

use std::sync::Mutex;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// FIFO queue of deferred jobs, drained by the host's main loop
pub struct MainQueue {
    jobs: Mutex<Vec<Job>>,
}

impl MainQueue {
    pub fn new() -> Self {
        Self {
            jobs: Mutex::new(Vec::new()),
        }
    }

    /// Enqueue a job for the next drain
    pub fn dispatch<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.jobs.lock().expect("main queue lock poisoned").push(Box::new(job));
    }

    /// Run every job enqueued before this call, in dispatch order.
    ///
    /// Jobs run outside the queue lock, so a job may dispatch follow-up work
    /// without deadlocking; that work lands on the next turn. Returns the
    /// number of jobs run.
    pub fn drain(&self) -> usize {
        let batch = std::mem::take(&mut *self.jobs.lock().expect("main queue lock poisoned"));
        let count = batch.len();
        if count > 0 {
            tracing::trace!("MainQueue::drain - running {count} deferred jobs");
        }
        for job in batch {
            job();
        }
        count
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.lock().expect("main queue lock poisoned").is_empty()
    }
}

impl Default for MainQueue {
    fn default() -> Self {
        Self::new()
    }
}
