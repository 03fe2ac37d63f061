//! Process-wide view settings with subscriber notification.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Documents,
    Status,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Documents, Tab::Status];

    pub fn next(self) -> Tab {
        let idx = Tab::ALL.iter().position(|&t| t == self).unwrap_or(0);
        Tab::ALL[(idx + 1) % Tab::ALL.len()]
    }

    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }
}

/// Flags shared by every view: backend reachability, pipeline state and the
/// persisted view preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSettings {
    pub health: bool,
    pub pipeline_busy: bool,
    pub current_tab: Tab,
    pub show_file_name: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            health: false,
            pipeline_busy: false,
            current_tab: Tab::Documents,
            show_file_name: false,
        }
    }
}

impl ViewSettings {
    pub fn preferences(&self) -> Preferences {
        Preferences {
            current_tab: self.current_tab,
            show_file_name: self.show_file_name,
        }
    }
}

/// The part of [`ViewSettings`] that survives restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub current_tab: Tab,
    pub show_file_name: bool,
}

pub type SubscriptionId = u64;

type Listener = Box<dyn FnMut(&ViewSettings) + Send>;

/// Observable holder of the current [`ViewSettings`].
///
/// Readers pull immutable copies with [`SettingsStore::snapshot`]; listeners
/// registered with [`SettingsStore::subscribe`] run on every published change
/// until they are unsubscribed.
pub struct SettingsStore {
    current: ViewSettings,
    next_id: SubscriptionId,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl SettingsStore {
    pub fn new(initial: ViewSettings) -> Self {
        Self {
            current: initial,
            next_id: 1,
            listeners: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> ViewSettings {
        self.current
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ViewSettings) + Send + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false when the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Replaces the settings and notifies listeners if anything changed.
    pub fn publish(&mut self, next: ViewSettings) -> bool {
        if next == self.current {
            return false;
        }
        self.current = next;
        for (_, listener) in self.listeners.iter_mut() {
            listener(&next);
        }
        true
    }
}

impl fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsStore")
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
