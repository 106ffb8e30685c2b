//! Background breaks solve.
//!
//! The DP is bounded and deterministic, so there is no cancellation: a caller that
//! gives up (deadline passed) simply drops the handle and the worker's result is
//! discarded when it finishes.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::Duration;

use crate::breaks::{compute_breaks, BreakSet};
use crate::EngineError;

type Outcome = Result<BreakSet, EngineError>;

/// Handle to a breaks solve running on its own thread.
#[derive(Debug)]
pub struct BreaksTask {
    rx: Receiver<Outcome>,
}

/// Start `compute_breaks(values, k)` on a worker thread.
pub fn spawn_breaks(values: Vec<f64>, k: usize) -> BreaksTask {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        // The receiver may be gone if the caller timed out.
        let _ = tx.send(compute_breaks(&values, k));
    });
    BreaksTask { rx }
}

impl BreaksTask {
    /// Block until the solve finishes.
    pub fn wait(self) -> Outcome {
        self.rx.recv().map_err(|_| EngineError::WorkerLost)?
    }

    /// Block for at most `timeout`.
    pub fn wait_timeout(self, timeout: Duration) -> Outcome {
        match self.rx.recv_timeout(timeout) {
            Ok(outcome) => outcome,
            Err(RecvTimeoutError::Timeout) => Err(EngineError::Timeout { after: timeout }),
            Err(RecvTimeoutError::Disconnected) => Err(EngineError::WorkerLost),
        }
    }

    /// Non-blocking poll; `None` while the worker is still running.
    pub fn try_result(&self) -> Option<Outcome> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(EngineError::WorkerLost)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_solve_matches_inline() {
        let values = vec![1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 50.0];
        let inline = compute_breaks(&values, 3).unwrap();
        let task = spawn_breaks(values, 3);
        assert_eq!(task.wait_timeout(Duration::from_secs(30)).unwrap(), inline);
    }

    #[test]
    fn errors_are_forwarded() {
        let task = spawn_breaks(Vec::new(), 3);
        assert!(matches!(task.wait(), Err(EngineError::InvalidInput { .. })));
    }

    #[test]
    fn zero_deadline_times_out_on_large_input() {
        let values: Vec<f64> = (0..4000).map(|i| ((i * 7919) % 1000) as f64).collect();
        let task = spawn_breaks(values, 9);
        assert_eq!(
            task.wait_timeout(Duration::ZERO),
            Err(EngineError::Timeout {
                after: Duration::ZERO
            })
        );
    }
}
