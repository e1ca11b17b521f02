//! Simulated form submission: a fixed delay plus a pending guard.
//!
//! The delay stands in for network latency. The guard mirrors the dialog
//! behavior around it: while a submission is in flight, a second submit is
//! rejected and the dialog refuses to close, so a late completion can never
//! land after the user has navigated away.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    InFlight,
}

/// Gate for one dialog's submit action.
#[derive(Debug)]
pub struct SubmitGate {
    latency: Duration,
    pending: bool,
}

impl SubmitGate {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            pending: false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Close is ignored while a submission is pending.
    pub fn can_close(&self) -> bool {
        !self.pending
    }

    /// Marks a submission as started.
    pub fn begin(&mut self) -> Result<(), SubmitError> {
        if self.pending {
            return Err(SubmitError::InFlight);
        }
        self.pending = true;
        Ok(())
    }

    pub fn finish(&mut self) {
        self.pending = false;
    }

    /// Runs `op` after the simulated delay, holding the gate pending for the
    /// whole call.
    pub async fn submit<T>(&mut self, op: impl FnOnce() -> T) -> Result<T, SubmitError> {
        self.begin()?;
        tokio::time::sleep(self.latency).await;
        let value = op();
        self.finish();
        Ok(value)
    }
}
