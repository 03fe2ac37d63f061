use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::poll::PollGuard;
use crate::{DocumentApi, EngineEvent, FetchOrigin};

/// Runs backend calls on the current tokio runtime and owns the single
/// document poll timer.
pub struct EngineHandle {
    api: Arc<dyn DocumentApi>,
    event_tx: mpsc::UnboundedSender<EngineEvent>,
    poll: Option<PollGuard>,
}

/// Receiving side for completed engine work.
pub struct EngineEvents {
    event_rx: mpsc::UnboundedReceiver<EngineEvent>,
}

impl EngineEvents {
    pub async fn recv(&mut self) -> Option<EngineEvent> {
        self.event_rx.recv().await
    }

    pub fn try_recv(&mut self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

impl EngineHandle {
    /// Must be called from within a tokio runtime.
    pub fn new(api: Arc<dyn DocumentApi>) -> (Self, EngineEvents) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let handle = Self {
            api,
            event_tx,
            poll: None,
        };
        (handle, EngineEvents { event_rx })
    }

    pub fn fetch_documents(&self, origin: FetchOrigin) {
        self.spawn(move |api| async move {
            EngineEvent::DocumentsFetched {
                origin,
                result: api.documents().await,
            }
        });
    }

    pub fn scan(&self) {
        self.spawn(|api| async move { EngineEvent::ScanFinished(api.scan().await) });
    }

    pub fn check_health(&self) {
        self.spawn(|api| async move { EngineEvent::HealthChecked(api.health().await) });
    }

    pub fn clear(&self) {
        self.spawn(|api| async move { EngineEvent::ClearFinished(api.clear().await) });
    }

    pub fn upload(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.spawn(move |api| async move {
            let result = api.upload(&path).await;
            EngineEvent::UploadFinished { path, result }
        });
    }

    /// Starts the poll timer, replacing (and cancelling) any running one.
    pub fn start_polling(&mut self, interval: Duration) {
        // Drop the old guard first so two timers never overlap.
        self.poll.take();
        self.poll = Some(PollGuard::spawn(
            self.api.clone(),
            interval,
            self.event_tx.clone(),
        ));
    }

    /// Returns false when no timer was running.
    pub fn stop_polling(&mut self) -> bool {
        self.poll.take().is_some()
    }

    pub fn is_polling(&self) -> bool {
        self.poll.is_some()
    }

    fn spawn<F, Fut>(&self, job: F)
    where
        F: FnOnce(Arc<dyn DocumentApi>) -> Fut + Send + 'static,
        Fut: Future<Output = EngineEvent> + Send + 'static,
    {
        let api = self.api.clone();
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let event = job(api).await;
            let _ = event_tx.send(event);
        });
    }
}
