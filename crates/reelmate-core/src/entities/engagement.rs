//! Engagement edges - likes and saves a user places on a food post
//!
//! Both kinds share one toggle contract and differ only in which edge set
//! and which counter they touch.

use serde::Serialize;

/// Which edge set a toggle operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngagementKind {
    Like,
    Save,
}

impl EngagementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Save => "save",
        }
    }
}

/// Whether a toggle created or removed the edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleOutcome {
    Added,
    Removed,
}

impl ToggleOutcome {
    #[inline]
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added)
    }
}

/// Result of a single toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleResult {
    pub outcome: ToggleOutcome,
    /// Counter value after the toggle was applied
    pub count: i32,
}

impl ToggleResult {
    pub fn added(count: i32) -> Self {
        Self {
            outcome: ToggleOutcome::Added,
            count,
        }
    }

    pub fn removed(count: i32) -> Self {
        Self {
            outcome: ToggleOutcome::Removed,
            count,
        }
    }
}
