use std::sync::Arc;
use std::time::Duration;

use panel_logging::panel_debug;
use tokio::sync::{mpsc, watch};
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::{DocumentApi, EngineEvent, FetchOrigin};

/// Live document poll timer. Dropping the guard cancels the timer; a fetch
/// already in flight still reports its result.
pub struct PollGuard {
    shutdown_tx: watch::Sender<bool>,
}

impl PollGuard {
    /// Spawns a timer that fetches documents every `interval`, first tick
    /// one full interval after the call.
    pub fn spawn(
        api: Arc<dyn DocumentApi>,
        interval: Duration,
        event_tx: mpsc::UnboundedSender<EngineEvent>,
    ) -> Self {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        panel_debug!("Poll task started every {:?}", interval);

        tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;
                    _ = shutdown_rx.changed() => break,
                    _ = ticker.tick() => {
                        panel_debug!("Poll tick");
                        let result = api.documents().await;
                        let event = EngineEvent::DocumentsFetched {
                            origin: FetchOrigin::Poll,
                            result,
                        };
                        if event_tx.send(event).is_err() {
                            break;
                        }
                    }
                }
            }
            panel_debug!("Poll task exited");
        });

        Self { shutdown_tx }
    }
}

impl Drop for PollGuard {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(true);
        panel_debug!("Poll task cancelled");
    }
}
