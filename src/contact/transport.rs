//! Submission transport for the contact form.
//!
//! The form only talks to the `Transport` trait; the site currently ships
//! with a simulated backend that resolves after a fixed delay, so swapping
//! in a real endpoint later is a one-impl change.

use std::fmt;
use std::future::Future;

use gloo_timers::future::TimeoutFuture;
use serde::Serialize;

use crate::config::SUBMIT_ROUND_TRIP_MS;

/// Snapshot of the contact form at submission time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitError(pub String);

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "submission failed: {}", self.0)
    }
}

pub trait Transport {
    fn submit(&self, payload: ContactPayload) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Stand-in for a real submission backend: logs the payload, waits out a
/// fixed round trip and reports success.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulatedTransport {
    pub delay_ms: u32,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self {
            delay_ms: SUBMIT_ROUND_TRIP_MS,
        }
    }
}

impl Transport for SimulatedTransport {
    async fn submit(&self, payload: ContactPayload) -> Result<(), SubmitError> {
        match serde_json::to_string(&payload) {
            Ok(body) => log::info!("submitting contact request: {body}"),
            Err(err) => return Err(SubmitError(err.to_string())),
        }
        TimeoutFuture::new(self.delay_ms).await;
        Ok(())
    }
}
