// src/state.rs

use crate::models::{StateSnapshot, StatusIndicator};

/// Where the cache stands with respect to the external tool.
#[derive(Debug, Clone, PartialEq, Eq)]
enum CacheState {
    /// Nothing known: no workspace, no project, or the tool failed.
    Inactive,
    /// The last refresh produced a parsed snapshot.
    Active(StateSnapshot),
}

/// The single owner of the cached snapshot.
///
/// Only the refresh operation writes to it, and always by full replacement.
/// Actions read from it to build menus but never patch it; they request a
/// follow-up refresh instead.
#[derive(Debug, Clone)]
pub struct StateCache {
    state: CacheState,
    empty: StateSnapshot,
}

impl Default for StateCache {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCache {
    /// Creates the empty cache held from process start.
    pub fn new() -> Self {
        Self {
            state: CacheState::Inactive,
            empty: StateSnapshot::empty(),
        }
    }

    /// Read-only view of the current snapshot. Empty while inactive.
    pub fn snapshot(&self) -> &StateSnapshot {
        match &self.state {
            CacheState::Inactive => &self.empty,
            CacheState::Active(snapshot) => snapshot,
        }
    }

    /// Replaces the snapshot wholesale. A snapshot without a project is
    /// stored as inactive so the other fields cannot leak into menus.
    pub fn replace(&mut self, snapshot: StateSnapshot) {
        self.state = if snapshot.has_project() {
            CacheState::Active(snapshot)
        } else {
            CacheState::Inactive
        };
    }

    /// Drops everything known about the project.
    pub fn clear(&mut self) {
        self.state = CacheState::Inactive;
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, CacheState::Active(_))
    }

    /// The indicator matching the current snapshot.
    pub fn indicator(&self) -> StatusIndicator {
        StatusIndicator::from_snapshot(self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectIdentity;

    fn demo_snapshot() -> StateSnapshot {
        StateSnapshot {
            project: Some(ProjectIdentity::Named("demo".to_string())),
            active_environment: Some("dev".to_string()),
            known_environments: vec!["dev".to_string(), "prod".to_string()],
        }
    }

    #[test]
    fn test_new_cache_is_empty_and_hidden() {
        let cache = StateCache::new();
        assert!(!cache.is_active());
        assert_eq!(cache.snapshot(), &StateSnapshot::empty());
        assert_eq!(cache.indicator(), StatusIndicator::Hidden);
    }

    #[test]
    fn test_replace_then_clear() {
        let mut cache = StateCache::new();
        cache.replace(demo_snapshot());
        assert!(cache.is_active());
        assert_eq!(cache.indicator().text(), Some("dev"));

        cache.clear();
        assert!(!cache.is_active());
        assert_eq!(cache.snapshot(), &StateSnapshot::empty());
    }

    #[test]
    fn test_replace_without_project_stores_nothing() {
        let mut cache = StateCache::new();
        cache.replace(demo_snapshot());
        cache.replace(StateSnapshot {
            project: None,
            active_environment: Some("stale".to_string()),
            known_environments: vec!["stale".to_string()],
        });
        assert_eq!(cache.snapshot(), &StateSnapshot::empty());
        assert_eq!(cache.indicator(), StatusIndicator::Hidden);
    }
}
