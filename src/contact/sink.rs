use std::{future::Future, time::Duration};

use super::{ContactError, ContactMessage};

/// Destination for contact messages.
pub trait ContactSink {
    fn deliver(&self, message: ContactMessage)
        -> impl Future<Output = Result<(), ContactError>>;
}

/// Stands in for a mail backend: encodes the message, waits out a fixed
/// latency and reports success. No network traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedSink {
    latency: Duration,
}

impl SimulatedSink {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl ContactSink for SimulatedSink {
    async fn deliver(&self, message: ContactMessage) -> Result<(), ContactError> {
        let payload = serde_json::to_string(&message)
            .map_err(|e| ContactError::SubmissionFailed(e.to_string()))?;
        log::debug!(
            "simulating delivery of {} byte payload from {}",
            payload.len(),
            message.email
        );
        sleep(self.latency).await;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ana".to_string(),
            email: "a@b.com".to_string(),
            message: "Hi".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_sink_waits_latency() {
        let sink = SimulatedSink::new(Duration::from_millis(1500));
        let started = Instant::now();

        let res = sink.deliver(message()).await;

        assert!(res.is_ok());
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_sink_is_pending_before_latency() {
        let sink = SimulatedSink::new(Duration::from_millis(1500));
        let res = tokio::time::timeout(Duration::from_millis(1499), sink.deliver(message())).await;
        assert!(res.is_err(), "delivery settled before the latency elapsed");
    }
}
