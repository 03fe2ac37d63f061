use std::time::Duration;

use crate::{Tab, ViewSettings};

/// Interval between background document fetches while the panel is active.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollingState {
    #[default]
    Inactive,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollTransition {
    Start,
    Stop,
}

/// Decides when the document poll timer must run.
///
/// Polling is active exactly while the documents tab is selected, the
/// backend is healthy and the app is not shutting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PollingController {
    state: PollingState,
}

impl PollingController {
    pub fn state(&self) -> PollingState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == PollingState::Active
    }

    pub fn should_poll(settings: &ViewSettings, shutting_down: bool) -> bool {
        !shutting_down && settings.health && settings.current_tab == Tab::Documents
    }

    pub fn reconcile(
        &mut self,
        settings: &ViewSettings,
        shutting_down: bool,
    ) -> Option<PollTransition> {
        let wanted = Self::should_poll(settings, shutting_down);
        match (self.state, wanted) {
            (PollingState::Inactive, true) => {
                self.state = PollingState::Active;
                Some(PollTransition::Start)
            }
            (PollingState::Active, false) => {
                self.state = PollingState::Inactive;
                Some(PollTransition::Stop)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(health: bool, tab: Tab) -> ViewSettings {
        ViewSettings {
            health,
            current_tab: tab,
            ..ViewSettings::default()
        }
    }

    #[test]
    fn starts_once_and_stops_on_tab_change() {
        let mut controller = PollingController::default();
        assert_eq!(
            controller.reconcile(&settings(true, Tab::Documents), false),
            Some(PollTransition::Start)
        );
        assert_eq!(
            controller.reconcile(&settings(true, Tab::Documents), false),
            None
        );
        assert_eq!(
            controller.reconcile(&settings(true, Tab::Status), false),
            Some(PollTransition::Stop)
        );
        assert_eq!(controller.state(), PollingState::Inactive);
    }

    #[test]
    fn health_loss_and_shutdown_stop_polling() {
        let mut controller = PollingController::default();
        controller.reconcile(&settings(true, Tab::Documents), false);
        assert_eq!(
            controller.reconcile(&settings(false, Tab::Documents), false),
            Some(PollTransition::Stop)
        );

        controller.reconcile(&settings(true, Tab::Documents), false);
        assert_eq!(
            controller.reconcile(&settings(true, Tab::Documents), true),
            Some(PollTransition::Stop)
        );
    }

    #[test]
    fn unhealthy_backend_never_starts() {
        let mut controller = PollingController::default();
        assert_eq!(
            controller.reconcile(&settings(false, Tab::Documents), false),
            None
        );
        assert!(!controller.is_active());
    }
}
