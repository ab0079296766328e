use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;

/// Classification of an address once a crawl has touched it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageState {
    /// Reached and expanded by exactly one branch.
    Success,
    /// Reached, and referenced at least one more time afterwards.
    Skipped,
    /// Referenced but absent from the node table.
    Error,
}

impl PageState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageState::Success => "success",
            PageState::Skipped => "skipped",
            PageState::Error => "error",
        }
    }

    /// True for states that mean the page itself was reached.
    pub fn is_visited(&self) -> bool {
        matches!(self, PageState::Success | PageState::Skipped)
    }
}

/// Thread-safe address -> state map shared by every crawl branch. Clones are
/// handles onto the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct VisitRegistry {
    states: Arc<DashMap<String, PageState>>,
}

impl VisitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically record a classification for an address that has none yet.
    /// Returns false and leaves the existing entry untouched when another
    /// branch recorded the address first.
    pub fn insert_if_absent(&self, address: &str, state: PageState) -> bool {
        match self.states.entry(address.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(state);
                true
            }
        }
    }

    /// Upgrade a visited address to skipped. No-op when the address is
    /// unknown or recorded as an error; repeat upgrades are harmless.
    pub fn mark_skipped(&self, address: &str) -> bool {
        match self.states.get_mut(address) {
            Some(mut state) if state.is_visited() => {
                *state = PageState::Skipped;
                true
            }
            _ => false,
        }
    }

    pub fn state_of(&self, address: &str) -> Option<PageState> {
        self.states.get(address).map(|state| *state)
    }

    pub fn contains(&self, address: &str) -> bool {
        self.states.contains_key(address)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Snapshot of every classification, in no particular order.
    pub fn entries(&self) -> Vec<(String, PageState)> {
        self.states
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }
}
