// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single, multi, and range selection over a list.

use alloc::vec::Vec;

use super::focus::{ListFocus, ListView};
use crate::item::Selectable;

/// The selected values of a list, plus range-selection bounds.
///
/// Values are kept in the order they were selected. Range bounds are item
/// indices: `range_start` is where the committed range begins, `range_end`
/// is the last item the previous range selection touched.
#[derive(Clone, Debug, PartialEq)]
pub struct ListSelection<V> {
    values: Vec<V>,
    range_start: Option<usize>,
    range_end: Option<usize>,
}

impl<V> Default for ListSelection<V> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            range_start: Some(0),
            range_end: Some(0),
        }
    }
}

impl<V: Clone + PartialEq + core::fmt::Debug> ListSelection<V> {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected values in selection order.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Replace the selected values without any checks.
    pub fn set_values(&mut self, values: Vec<V>) {
        self.values = values;
    }

    /// Start index of the committed range.
    pub fn range_start(&self) -> Option<usize> {
        self.range_start
    }

    /// End index of the committed range.
    pub fn range_end(&self) -> Option<usize> {
        self.range_end
    }

    /// Whether `item`'s value is selected.
    pub fn is_selected<T: Selectable<Value = V>>(&self, item: &T) -> bool {
        self.values.contains(&item.value())
    }

    /// Whether `item` may be selected or deselected by the user.
    pub fn is_valid<T: Selectable<Value = V>>(item: &T) -> bool {
        !item.disabled() && item.selectable()
    }

    /// Commit a new range anchored at `index`.
    pub fn begin_range_selection(&mut self, index: Option<usize>) {
        self.range_start = index;
        self.range_end = index;
    }

    pub(crate) fn set_range_start(&mut self, index: Option<usize>) {
        self.range_start = index;
    }

    /// Select the item at `index`, or the active item when `index` is `None`.
    ///
    /// No-op if the item is missing, disabled, unselectable, or already
    /// selected. A single-select list drops every other value first. With
    /// `anchor` set, a new range is committed at the item.
    pub fn select<T: Selectable<Value = V>>(
        &mut self,
        focus: &ListFocus<T::Id>,
        view: ListView<'_, T>,
        index: Option<usize>,
        anchor: bool,
    ) -> bool {
        let Some(index) = index.or_else(|| focus.active_index(view)) else {
            return false;
        };
        let Some(item) = view.items.get(index) else {
            return false;
        };
        if !Self::is_valid(item) || self.is_selected(item) {
            return false;
        }
        if !view.config.multi {
            self.deselect_all(view);
        }
        if anchor {
            self.begin_range_selection(Some(index));
        }
        self.values.push(item.value());
        true
    }

    /// Deselect the item at `index`, or the active item when `index` is `None`.
    ///
    /// Disabled and unselectable items keep their state.
    pub fn deselect<T: Selectable<Value = V>>(
        &mut self,
        focus: &ListFocus<T::Id>,
        view: ListView<'_, T>,
        index: Option<usize>,
    ) -> bool {
        let Some(item) = index
            .or_else(|| focus.active_index(view))
            .and_then(|i| view.items.get(i))
        else {
            return false;
        };
        if !Self::is_valid(item) {
            return false;
        }
        let value = item.value();
        let before = self.values.len();
        self.values.retain(|v| *v != value);
        self.values.len() != before
    }

    /// Flip the selection state of the item at `index` (default: active item).
    pub fn toggle<T: Selectable<Value = V>>(
        &mut self,
        focus: &ListFocus<T::Id>,
        view: ListView<'_, T>,
        index: Option<usize>,
    ) -> bool {
        let Some(index) = index.or_else(|| focus.active_index(view)) else {
            return false;
        };
        match view.items.get(index) {
            Some(item) if self.is_selected(item) => self.deselect(focus, view, Some(index)),
            Some(_) => self.select(focus, view, Some(index), true),
            None => false,
        }
    }

    /// Deselect the active item if selected, otherwise make it the only
    /// selected item.
    pub fn toggle_one<T: Selectable<Value = V>>(
        &mut self,
        focus: &ListFocus<T::Id>,
        view: ListView<'_, T>,
    ) -> bool {
        match focus.active_index(view).and_then(|i| view.items.get(i)) {
            Some(item) if self.is_selected(item) => self.deselect(focus, view, None),
            Some(_) => self.select_one(focus, view),
            None => false,
        }
    }

    /// Make the active item the only selected item.
    ///
    /// If a value survives clearing (its item is disabled) in a single-select
    /// list, the existing selection is kept.
    pub fn select_one<T: Selectable<Value = V>>(
        &mut self,
        focus: &ListFocus<T::Id>,
        view: ListView<'_, T>,
    ) -> bool {
        let Some(item) = focus.active_index(view).and_then(|i| view.items.get(i)) else {
            return false;
        };
        if !Self::is_valid(item) {
            return false;
        }
        self.deselect_all(view);
        if !self.values.is_empty() && !view.config.multi {
            return false;
        }
        self.select(focus, view, None, true)
    }

    /// Select every valid item of a multi-select list.
    pub fn select_all<T: Selectable<Value = V>>(
        &mut self,
        focus: &ListFocus<T::Id>,
        view: ListView<'_, T>,
    ) {
        if !view.config.multi {
            return;
        }
        for index in 0..view.len() {
            self.select(focus, view, Some(index), false);
        }
        self.begin_range_selection(focus.active_index(view));
    }

    /// Drop every selected value whose item can be deselected.
    ///
    /// Values whose item is no longer present are dropped as well, even
    /// though their disabled state cannot be checked.
    pub fn deselect_all<T: Selectable<Value = V>>(&mut self, view: ListView<'_, T>) {
        self.values.retain(|value| {
            match view.items.iter().find(|item| item.value() == *value) {
                Some(item) => !Self::is_valid(item),
                None => false,
            }
        });
    }

    /// Deselect everything if every valid item is selected, else select all.
    pub fn toggle_all<T: Selectable<Value = V>>(
        &mut self,
        focus: &ListFocus<T::Id>,
        view: ListView<'_, T>,
    ) {
        let all_selected = view
            .items
            .iter()
            .filter(|item| Self::is_valid(*item))
            .all(|item| self.is_selected(item));
        if all_selected {
            self.deselect_all(view);
        } else {
            self.select_all(focus, view);
        }
    }

    /// Select from the range start to the active item.
    ///
    /// Items inside the previous range but outside the new one are
    /// deselected. With `anchor` set and the previous active item sitting on
    /// the range start, the range is re-committed there first.
    pub fn select_range<T: Selectable<Value = V>>(
        &mut self,
        focus: &ListFocus<T::Id>,
        view: ListView<'_, T>,
        anchor: bool,
    ) {
        let Some(active) = focus.active_index(view) else {
            return;
        };
        let prev = focus.prev_active_index(view);
        if anchor && prev.is_some() && prev == self.range_start {
            self.begin_range_selection(prev);
        }
        let in_range = range_from(self.range_start, active, view.len());
        let out_of_range: Vec<usize> = range_from(self.range_end, active, view.len())
            .into_iter()
            .filter(|i| !in_range.contains(i))
            .collect();
        for index in out_of_range {
            self.deselect(focus, view, Some(index));
        }
        for &index in &in_range {
            self.select(focus, view, Some(index), false);
        }
        if let Some(&last) = in_range.last() {
            self.range_end = Some(last);
        }
    }
}

/// Indices between `from` and `active` inclusive, ordered so that `active`
/// comes last.
fn range_from(from: Option<usize>, active: usize, len: usize) -> Vec<usize> {
    let Some(from) = from.filter(|&f| f < len) else {
        return Vec::new();
    };
    if active < from {
        (active..=from).rev().collect()
    } else {
        (from..=active).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ListConfig;
    use crate::item::test_items::{Opt, opts};
    use alloc::vec;

    fn multi() -> ListConfig {
        ListConfig {
            multi: true,
            ..ListConfig::default()
        }
    }

    #[test]
    fn single_select_replaces_the_value() {
        let items = opts(&["a", "b", "c"]);
        let config = ListConfig::default();
        let view = ListView::new(&items, &config);
        let focus = ListFocus::new();
        let mut sel = ListSelection::new();
        assert!(sel.select(&focus, view, Some(0), true));
        assert!(sel.select(&focus, view, Some(2), true));
        assert_eq!(sel.values(), [2]);
        assert!(!sel.select(&focus, view, Some(2), true), "already selected");
    }

    #[test]
    fn invalid_items_are_never_selected() {
        let items = vec![Opt::new(0, "a").disable(), Opt::new(1, "b").unselectable()];
        let config = multi();
        let view = ListView::new(&items, &config);
        let focus = ListFocus::new();
        let mut sel = ListSelection::new();
        assert!(!sel.select(&focus, view, Some(0), true));
        assert!(!sel.select(&focus, view, Some(1), true));
        assert!(!sel.select(&focus, view, Some(9), true));
        assert!(!sel.select(&focus, view, None, true), "no active item");
        assert!(sel.values().is_empty());
    }

    #[test]
    fn toggle_and_toggle_all() {
        let items = vec![Opt::new(0, "a"), Opt::new(1, "b").disable(), Opt::new(2, "c")];
        let config = multi();
        let view = ListView::new(&items, &config);
        let mut focus = ListFocus::new();
        focus.focus(view, 0, false);
        let mut sel = ListSelection::new();
        assert!(sel.toggle(&focus, view, None));
        assert!(sel.toggle(&focus, view, None));
        assert!(sel.values().is_empty());

        sel.toggle_all(&focus, view);
        assert_eq!(sel.values(), [0, 2]);
        sel.toggle_all(&focus, view);
        assert!(sel.values().is_empty());
    }

    #[test]
    fn select_one_keeps_a_foreign_disabled_value() {
        let items = vec![Opt::new(0, "a"), Opt::new(1, "b").disable()];
        let config = ListConfig::default();
        let view = ListView::new(&items, &config);
        let mut focus = ListFocus::new();
        focus.focus(view, 0, false);
        let mut sel = ListSelection::new();
        sel.set_values(vec![1]);
        assert!(!sel.select_one(&focus, view));
        assert_eq!(sel.values(), [1]);
    }

    #[test]
    fn toggle_one_clears_others() {
        let items = opts(&["a", "b", "c"]);
        let config = multi();
        let view = ListView::new(&items, &config);
        let mut focus = ListFocus::new();
        let mut sel = ListSelection::new();
        sel.set_values(vec![0, 2]);
        focus.focus(view, 1, false);
        assert!(sel.toggle_one(&focus, view));
        assert_eq!(sel.values(), [1]);
        assert!(sel.toggle_one(&focus, view));
        assert!(sel.values().is_empty());
    }

    #[test]
    fn deselect_all_drops_values_of_absent_items() {
        let items = vec![Opt::new(0, "a"), Opt::new(1, "b").disable()];
        let config = multi();
        let view = ListView::new(&items, &config);
        let mut sel = ListSelection::new();
        sel.set_values(vec![0, 1, 42]);
        sel.deselect_all(view);
        assert_eq!(sel.values(), [1], "disabled item keeps its value, absent one does not");
    }

    #[test]
    fn range_grows_and_shrinks() {
        let items = opts(&["a", "b", "c", "d", "e"]);
        let config = multi();
        let view = ListView::new(&items, &config);
        let mut focus = ListFocus::new();
        let mut sel = ListSelection::new();
        focus.focus(view, 1, false);
        sel.begin_range_selection(Some(1));

        focus.focus(view, 3, false);
        sel.select_range(&focus, view, true);
        assert_eq!(sel.values(), [1, 2, 3]);
        assert_eq!(sel.range_end(), Some(3));

        focus.focus(view, 2, false);
        sel.select_range(&focus, view, true);
        assert_eq!(sel.values(), [1, 2]);

        focus.focus(view, 0, false);
        sel.select_range(&focus, view, true);
        let mut values = sel.values().to_vec();
        values.sort_unstable();
        assert_eq!(values, [0, 1]);
        assert_eq!(sel.range_end(), Some(0));
    }

    #[test]
    fn range_is_direction_independent_and_idempotent() {
        let items = opts(&["a", "b", "c", "d"]);
        let config = multi();
        let view = ListView::new(&items, &config);

        let mut forward = ListSelection::new();
        let mut focus = ListFocus::new();
        focus.focus(view, 3, false);
        forward.begin_range_selection(Some(0));
        forward.select_range(&focus, view, false);
        forward.select_range(&focus, view, false);

        let mut backward = ListSelection::new();
        let mut focus = ListFocus::new();
        focus.focus(view, 0, false);
        backward.begin_range_selection(Some(3));
        backward.select_range(&focus, view, false);

        let mut a = forward.values().to_vec();
        let mut b = backward.values().to_vec();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, [0, 1, 2, 3]);
        assert_eq!(a, b);
    }
}
