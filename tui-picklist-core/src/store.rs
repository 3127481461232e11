//! Selection-tracking store with a filterable projection

use serde::{Deserialize, Serialize};
use std::hash::Hash;

use crate::choice::{ChoiceBounds, ChoiceMode};
use crate::error::{SelectError, SelectResult};
use crate::filter::Matcher;
use crate::id::ItemId;
use crate::snapshot::SelectionSnapshot;

/// One backing item with its identity and checked flag
struct Entry<T> {
    value: T,
    id: ItemId,
    checked: bool,
}

/// Single source of truth for logical list items and their checked state
///
/// The store keeps track of checked items even when they are currently not
/// visible due to filtering: checked flags live on the backing list, while
/// position-based operations address the *visible* projection. A presentation
/// surface renders rows by projected position and reports taps through
/// [`toggle`](SelectionStore::toggle); result and persistence queries
/// ([`checked_ids`](SelectionStore::checked_ids) and friends) always answer
/// in backing order, regardless of the active filter.
///
/// The store owns its data outright and is driven through this synchronous
/// API only; there is no background work and no interior mutability. Pass it
/// by reference to whatever renders it.
///
/// # Example
/// ```
/// use tui_picklist_core::{ChoiceMode, SelectionStore, WordMatcher};
///
/// let mut store = SelectionStore::with_matcher(WordMatcher::default());
/// store.set_items(vec!["cyan".to_string(), "magenta".into(), "yellow".into()]);
/// store.set_choice_mode(ChoiceMode::Multiple);
///
/// store.toggle(1).unwrap();
/// store.set_filter(Some("cy"));
///
/// // "magenta" is filtered out of view but stays checked
/// assert_eq!(store.visible_len(), 1);
/// assert_eq!(store.checked_count(), 1);
/// ```
pub struct SelectionStore<T> {
    entries: Vec<Entry<T>>,
    /// Backing indices of the currently visible items, in backing order
    visible: Vec<usize>,
    constraint: Option<String>,
    mode: ChoiceMode,
    matcher: Option<Box<dyn Matcher<T>>>,
}

impl<T> Default for SelectionStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for SelectionStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionStore")
            .field("backing_len", &self.entries.len())
            .field("visible_len", &self.visible.len())
            .field("constraint", &self.constraint)
            .field("mode", &self.mode)
            .field("has_matcher", &self.matcher.is_some())
            .finish()
    }
}

impl<T> SelectionStore<T> {
    /// Create an empty store without a filter predicate
    ///
    /// Until a matcher is installed, [`set_filter`](SelectionStore::set_filter)
    /// leaves the full backing list visible.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            visible: Vec::new(),
            constraint: None,
            mode: ChoiceMode::default(),
            matcher: None,
        }
    }

    /// Create an empty store with a filter predicate
    pub fn with_matcher(matcher: impl Matcher<T> + 'static) -> Self {
        let mut store = Self::new();
        store.matcher = Some(Box::new(matcher));
        store
    }

    /// Install or replace the filter predicate
    ///
    /// The current constraint (if any) is re-applied through the new matcher.
    pub fn set_matcher(&mut self, matcher: impl Matcher<T> + 'static) {
        self.matcher = Some(Box::new(matcher));
        self.project();
    }

    // --- population -----------------------------------------------------

    /// Replace the backing list, deriving ids from the item values
    ///
    /// Ids come from each value's hash (see [`ItemId::of`]), so repopulating
    /// with equal values yields stable ids across a filter or save/restore
    /// cycle. Resets any active filter to full pass-through; the choice mode
    /// and its checked-state rules are untouched.
    pub fn set_items(&mut self, items: Vec<T>)
    where
        T: Hash,
    {
        let entries = items
            .into_iter()
            .map(|value| {
                let id = ItemId::of(&value);
                Entry {
                    value,
                    id,
                    checked: false,
                }
            })
            .collect();
        self.replace(entries);
    }

    /// Replace the backing list, deriving ids with an explicit key function
    pub fn set_items_by_key(&mut self, items: Vec<T>, key: impl Fn(&T) -> ItemId) {
        let entries = items
            .into_iter()
            .map(|value| {
                let id = key(&value);
                Entry {
                    value,
                    id,
                    checked: false,
                }
            })
            .collect();
        self.replace(entries);
    }

    /// Replace the backing list with explicitly paired ids
    ///
    /// Fails with [`SelectError::ArityMismatch`] when the lists differ in
    /// length, leaving the store untouched.
    pub fn set_items_with_ids(&mut self, items: Vec<T>, ids: Vec<ItemId>) -> SelectResult<()> {
        if items.len() != ids.len() {
            return Err(SelectError::ArityMismatch {
                items: items.len(),
                ids: ids.len(),
            });
        }
        let entries = items
            .into_iter()
            .zip(ids)
            .map(|(value, id)| Entry {
                value,
                id,
                checked: false,
            })
            .collect();
        self.replace(entries);
        Ok(())
    }

    fn replace(&mut self, entries: Vec<Entry<T>>) {
        let duplicates = duplicate_id_count(&entries);
        if duplicates > 0 {
            // uniqueness of ids is the caller's contract; flag, don't fail
            tracing::warn!(
                duplicates,
                "item ids are not unique; id-based operations hit the first match"
            );
        }
        self.entries = entries;
        self.constraint = None;
        self.visible = (0..self.entries.len()).collect();
        tracing::debug!(items = self.entries.len(), "backing list replaced");
    }

    // --- choice mode ----------------------------------------------------

    /// Set the cardinality discipline, adjusting checked state immediately
    ///
    /// Switching to [`ChoiceMode::None`] clears every checked flag; switching
    /// to [`ChoiceMode::Single`] with several items checked keeps only the
    /// first in backing order.
    pub fn set_choice_mode(&mut self, mode: ChoiceMode) {
        self.mode = mode;
        match mode {
            ChoiceMode::None => self.uncheck_all(),
            ChoiceMode::Single => {
                let mut keep = true;
                for entry in &mut self.entries {
                    if entry.checked {
                        if keep {
                            keep = false;
                        } else {
                            entry.checked = false;
                        }
                    }
                }
            }
            ChoiceMode::Multiple => {}
        }
        tracing::debug!(?mode, checked = self.checked_count(), "choice mode set");
    }

    /// The current cardinality discipline
    pub fn choice_mode(&self) -> ChoiceMode {
        self.mode
    }

    // --- mutation -------------------------------------------------------

    /// Check or uncheck the item at a projected position
    ///
    /// Under [`ChoiceMode::None`], checking is refused (a no-op);
    /// unchecking is accepted, vacuously. Under [`ChoiceMode::Single`],
    /// checking first clears every other flag. Fails with
    /// [`SelectError::IndexOutOfRange`] for positions outside the visible
    /// range, without touching any state.
    pub fn set_checked(&mut self, position: usize, checked: bool) -> SelectResult<()> {
        let index = self.backing_index(position)?;
        match self.mode {
            ChoiceMode::None => {
                if !checked {
                    self.entries[index].checked = false;
                }
            }
            ChoiceMode::Single => {
                if checked {
                    self.uncheck_all();
                }
                self.entries[index].checked = checked;
            }
            ChoiceMode::Multiple => self.entries[index].checked = checked,
        }
        Ok(())
    }

    /// Toggle the item at a projected position per the choice mode
    ///
    /// [`ChoiceMode::None`]: no-op. [`ChoiceMode::Single`]: the tapped item
    /// becomes the checked one (tapping it again keeps it checked — a tap
    /// alone cannot empty a single choice). [`ChoiceMode::Multiple`]: the
    /// flag flips.
    pub fn toggle(&mut self, position: usize) -> SelectResult<()> {
        let index = self.backing_index(position)?;
        match self.mode {
            ChoiceMode::None => {}
            ChoiceMode::Single => {
                self.uncheck_all();
                self.entries[index].checked = true;
            }
            ChoiceMode::Multiple => {
                let entry = &mut self.entries[index];
                entry.checked = !entry.checked;
            }
        }
        Ok(())
    }

    /// Check or uncheck an item by identity instead of position
    ///
    /// Scans the backing list for the first item with `id` — useful for
    /// replaying a persisted selection after
    /// [`set_items`](SelectionStore::set_items), when no projection positions
    /// are known yet. Same choice-mode semantics as
    /// [`set_checked`](SelectionStore::set_checked). Returns whether a
    /// mutation was applied; an unknown id is not an error (persisted ids may
    /// legitimately be gone after repopulation).
    pub fn set_checked_by_id(&mut self, id: ItemId, checked: bool) -> bool {
        let Some(index) = self.entries.iter().position(|entry| entry.id == id) else {
            return false;
        };
        match self.mode {
            ChoiceMode::None => {
                if checked {
                    return false;
                }
                self.entries[index].checked = false;
            }
            ChoiceMode::Single => {
                if checked {
                    self.uncheck_all();
                }
                self.entries[index].checked = checked;
            }
            ChoiceMode::Multiple => self.entries[index].checked = checked,
        }
        true
    }

    /// Check or uncheck every backing item
    ///
    /// Checking all is only meaningful under [`ChoiceMode::Multiple`] and is
    /// a no-op under a cardinality-limiting mode; unchecking all is always
    /// honored.
    pub fn check_all(&mut self, checked: bool) {
        if !checked {
            self.uncheck_all();
        } else if self.mode == ChoiceMode::Multiple {
            for entry in &mut self.entries {
                entry.checked = true;
            }
        }
    }

    /// Clear all flags, then check the given ids in order
    ///
    /// The replay goes through the choice mode, so restoring several ids
    /// under [`ChoiceMode::Single`] leaves only the last one checked.
    /// Replaying the same set twice yields the same checked state.
    pub fn restore_checked_ids(&mut self, ids: &[ItemId]) {
        self.uncheck_all();
        for &id in ids {
            self.set_checked_by_id(id, true);
        }
    }

    fn uncheck_all(&mut self) {
        for entry in &mut self.entries {
            entry.checked = false;
        }
    }

    // --- filtering ------------------------------------------------------

    /// Apply a text constraint to derive the visible projection
    ///
    /// `None` or an empty string restores full pass-through. Otherwise the
    /// projection contains exactly the backing items the installed matcher
    /// accepts, in backing order (filtering never re-sorts). Without a
    /// matcher the full list stays visible. Checked state is unaffected.
    /// Re-applying an unchanged constraint yields the same projection.
    pub fn set_filter(&mut self, constraint: Option<&str>) {
        self.constraint = constraint.filter(|c| !c.is_empty()).map(str::to_owned);
        self.project();
        tracing::debug!(
            constraint = self.constraint.as_deref().unwrap_or(""),
            visible = self.visible.len(),
            "filter applied"
        );
    }

    /// Drop the active constraint, restoring full pass-through
    pub fn clear_filter(&mut self) {
        self.set_filter(None);
    }

    /// The currently applied constraint, if any
    pub fn constraint(&self) -> Option<&str> {
        self.constraint.as_deref()
    }

    fn project(&mut self) {
        let visible = match (self.constraint.as_deref(), self.matcher.as_deref()) {
            (Some(constraint), Some(matcher)) => self
                .entries
                .iter()
                .enumerate()
                .filter(|(_, entry)| matcher.matches(&entry.value, constraint))
                .map(|(index, _)| index)
                .collect(),
            _ => (0..self.entries.len()).collect(),
        };
        self.visible = visible;
    }

    // --- projection queries ---------------------------------------------

    /// Number of currently visible items
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Whether no items are currently visible
    ///
    /// True both for an empty backing list and for a constraint with zero
    /// matches; the latter is a legitimate empty projection, not an error.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Number of items in the backing list, ignoring any filter
    pub fn backing_len(&self) -> usize {
        self.entries.len()
    }

    /// The item at a projected position
    pub fn item(&self, position: usize) -> SelectResult<&T> {
        let index = self.backing_index(position)?;
        Ok(&self.entries[index].value)
    }

    /// The id of the item at a projected position
    pub fn item_id(&self, position: usize) -> SelectResult<ItemId> {
        let index = self.backing_index(position)?;
        Ok(self.entries[index].id)
    }

    /// Whether the item at a projected position is checked
    pub fn is_checked(&self, position: usize) -> SelectResult<bool> {
        let index = self.backing_index(position)?;
        Ok(self.entries[index].checked)
    }

    /// Visible `(value, checked)` pairs in display order, for rendering
    pub fn rows(&self) -> impl Iterator<Item = (&T, bool)> + '_ {
        self.visible.iter().map(|&index| {
            let entry = &self.entries[index];
            (&entry.value, entry.checked)
        })
    }

    /// All backing items in backing order, ignoring any filter
    pub fn items(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter().map(|entry| &entry.value)
    }

    fn backing_index(&self, position: usize) -> SelectResult<usize> {
        self.visible
            .get(position)
            .copied()
            .ok_or(SelectError::IndexOutOfRange {
                position,
                len: self.visible.len(),
            })
    }

    // --- checked-state queries ------------------------------------------

    /// Number of checked items, visible or not
    pub fn checked_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.checked).count()
    }

    /// References to the checked items, in backing order
    pub fn checked_items(&self) -> Vec<&T> {
        self.entries
            .iter()
            .filter(|entry| entry.checked)
            .map(|entry| &entry.value)
            .collect()
    }

    /// Backing-order positions of the checked items
    pub fn checked_positions(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.checked)
            .map(|(index, _)| index)
            .collect()
    }

    /// Ids of the checked items, in backing order
    pub fn checked_ids(&self) -> Vec<ItemId> {
        self.entries
            .iter()
            .filter(|entry| entry.checked)
            .map(|entry| entry.id)
            .collect()
    }

    /// Backing position of the checked item, if exactly addressable
    ///
    /// The first checked position in backing order; `None` when nothing is
    /// checked. Meant for the singular result under [`ChoiceMode::Single`].
    pub fn single_checked_position(&self) -> Option<usize> {
        self.entries.iter().position(|entry| entry.checked)
    }

    /// Id counterpart of [`single_checked_position`](SelectionStore::single_checked_position)
    pub fn single_checked_id(&self) -> Option<ItemId> {
        self.entries
            .iter()
            .find(|entry| entry.checked)
            .map(|entry| entry.id)
    }

    // --- commit ---------------------------------------------------------

    /// Whether a commit is currently permitted under `bounds`
    ///
    /// True iff the checked count lies within the bounds; always true under
    /// [`ChoiceMode::None`], where there is nothing to constrain.
    pub fn commit_enabled(&self, bounds: &ChoiceBounds) -> bool {
        self.mode == ChoiceMode::None || bounds.admits(self.checked_count())
    }

    /// The committed result: checked positions and ids in backing order
    pub fn selection(&self) -> Selection {
        let single = self.mode == ChoiceMode::Single;
        Selection {
            positions: self.checked_positions(),
            ids: self.checked_ids(),
            single_position: single.then(|| self.single_checked_position()).flatten(),
            single_id: single.then(|| self.single_checked_id()).flatten(),
        }
    }

    // --- persistence ----------------------------------------------------

    /// Capture the checked set for host persistence
    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            checked_ids: self.checked_ids(),
        }
    }

    /// Replay a persisted checked set
    ///
    /// Call after repopulating the store with
    /// [`set_items`](SelectionStore::set_items) (or a sibling); restoring the
    /// same snapshot twice yields the same checked state.
    pub fn restore(&mut self, snapshot: &SelectionSnapshot) {
        self.restore_checked_ids(&snapshot.checked_ids);
    }
}

/// Result bundle produced on commit
///
/// Positions and ids are in backing order, independent of any filter active
/// at commit time. The singular fields are populated under
/// [`ChoiceMode::Single`] only, and absent when nothing is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Backing-order positions of the checked items
    pub positions: Vec<usize>,
    /// Ids of the checked items
    pub ids: Vec<ItemId>,
    /// The single checked position, in single-choice mode
    pub single_position: Option<usize>,
    /// The single checked id, in single-choice mode
    pub single_id: Option<ItemId>,
}

impl Selection {
    /// Whether nothing was checked
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

fn duplicate_id_count<T>(entries: &[Entry<T>]) -> usize {
    let mut seen = std::collections::HashSet::with_capacity(entries.len());
    entries
        .iter()
        .filter(|entry| !seen.insert(entry.id))
        .count()
}
