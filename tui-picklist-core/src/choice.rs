//! Choice modes and commit gating

use serde::{Deserialize, Serialize};

/// Cardinality discipline for checked items
///
/// The mode is consulted by every check/uncheck mutation on a
/// [`SelectionStore`](crate::SelectionStore); it is not a sequence-dependent
/// protocol and any mode may follow any other. Switching modes adjusts the
/// existing checked set immediately:
///
/// - switching to `None` clears all checked flags
/// - switching to `Single` with more than one item checked keeps only the
///   first checked item in backing order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoiceMode {
    /// Items cannot be checked
    None,
    /// At most one item may be checked at a time
    Single,
    /// Any number of items may be checked
    #[default]
    Multiple,
}

/// Bounds on the checked count for the commit gate
///
/// Either bound may be unset, meaning unbounded on that side. Used by
/// [`SelectionStore::commit_enabled`](crate::SelectionStore::commit_enabled)
/// to decide whether a caller-visible "confirm" action is currently
/// permitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceBounds {
    /// Minimum required checked count
    pub min: Option<usize>,
    /// Maximum allowed checked count
    pub max: Option<usize>,
}

impl ChoiceBounds {
    /// Unbounded on both sides
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Require at least `min` checked items
    pub fn at_least(min: usize) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Require the checked count to lie within `[min, max]`
    pub fn between(min: usize, max: usize) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Whether `count` satisfies both bounds
    pub fn admits(&self, count: usize) -> bool {
        self.min.is_none_or(|min| count >= min) && self.max.is_none_or(|max| count <= max)
    }
}
