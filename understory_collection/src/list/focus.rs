// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-item tracking, focusability, and tab-index policy.

use crate::item::{Focusable, index_of};
use crate::types::{FocusMode, FocusRequest, ListConfig};

/// Borrowed inputs a list operation runs against.
///
/// The host owns the items; the engine only sees them for the duration of a
/// call, which keeps every derived read consistent with the current item set.
#[derive(Debug)]
pub struct ListView<'a, T> {
    /// Items in navigation order.
    pub items: &'a [T],
    /// Collection configuration.
    pub config: &'a ListConfig,
}

impl<T> Clone for ListView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListView<'_, T> {}

impl<'a, T> ListView<'a, T> {
    /// Create a view over `items` with `config`.
    pub fn new(items: &'a [T], config: &'a ListConfig) -> Self {
        Self { items, config }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Tracks which item of a list is active.
///
/// The active item is recorded by id, so it survives reordering and
/// insertion. Index reads resolve the id against the current view and yield
/// `None` once the item is gone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListFocus<K> {
    active: Option<K>,
    prev_active: Option<K>,
    request: Option<FocusRequest<K>>,
}

impl<K> Default for ListFocus<K> {
    fn default() -> Self {
        Self {
            active: None,
            prev_active: None,
            request: None,
        }
    }
}

impl<K: Clone + Eq + core::hash::Hash + core::fmt::Debug> ListFocus<K> {
    /// Create focus state with no active item.
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the active item, if any.
    pub fn active(&self) -> Option<&K> {
        self.active.as_ref()
    }

    /// Id of the item that was active before the last focus change.
    pub fn prev_active(&self) -> Option<&K> {
        self.prev_active.as_ref()
    }

    /// Overwrite the active item without side effects.
    ///
    /// Hosts use this to restore persisted state; no focus request is made.
    pub fn set_active(&mut self, id: Option<K>) {
        self.active = id;
    }

    /// Index of the active item in `view`.
    pub fn active_index<T: Focusable<Id = K>>(&self, view: ListView<'_, T>) -> Option<usize> {
        self.active.as_ref().and_then(|id| index_of(view.items, id))
    }

    /// Index of the previously active item in `view`.
    pub fn prev_active_index<T: Focusable<Id = K>>(&self, view: ListView<'_, T>) -> Option<usize> {
        self.prev_active.as_ref().and_then(|id| index_of(view.items, id))
    }

    /// Whether the whole list is disabled.
    ///
    /// A list whose items are all disabled (including an empty list) counts
    /// as disabled.
    pub fn is_list_disabled<T: Focusable>(&self, view: ListView<'_, T>) -> bool {
        view.config.disabled || view.items.iter().all(Focusable::disabled)
    }

    /// Whether navigation may land on `item`.
    ///
    /// Disabled items stay reachable when `skip_disabled` is off.
    pub fn is_focusable<T: Focusable>(&self, view: ListView<'_, T>, item: &T) -> bool {
        !item.disabled() || !view.config.skip_disabled
    }

    /// Make the item at `index` active.
    ///
    /// Returns `false` and leaves state unchanged if the list is disabled,
    /// the index is out of bounds, or the item is not focusable. On success a
    /// [`FocusRequest`] is recorded unless `focus_element` is `false`.
    pub fn focus<T: Focusable<Id = K>>(
        &mut self,
        view: ListView<'_, T>,
        index: usize,
        focus_element: bool,
    ) -> bool {
        if self.is_list_disabled(view) {
            return false;
        }
        let Some(item) = view.items.get(index) else {
            return false;
        };
        if !self.is_focusable(view, item) {
            return false;
        }
        let id = item.id();
        self.prev_active = self.active.replace(id.clone());
        tracing::trace!(target: "understory_collection::list", ?id, index, "active item changed");
        if focus_element {
            self.request = Some(match view.config.focus_mode {
                FocusMode::Roving => FocusRequest::Item(id),
                FocusMode::ActiveDescendant => FocusRequest::Container,
            });
        }
        true
    }

    /// Tab index of the list container.
    pub fn list_tab_index<T: Focusable>(&self, view: ListView<'_, T>) -> i32 {
        if self.is_list_disabled(view) || view.config.focus_mode == FocusMode::ActiveDescendant {
            0
        } else {
            -1
        }
    }

    /// Tab index of `item`.
    pub fn item_tab_index<T: Focusable<Id = K>>(&self, view: ListView<'_, T>, item: &T) -> i32 {
        if self.is_list_disabled(view) || view.config.focus_mode == FocusMode::ActiveDescendant {
            return -1;
        }
        if self.active.as_ref() == Some(&item.id()) { 0 } else { -1 }
    }

    /// Id the container should reference through `aria-activedescendant`.
    ///
    /// `None` under roving focus and while the list is disabled.
    pub fn active_descendant<T: Focusable<Id = K>>(&self, view: ListView<'_, T>) -> Option<K> {
        if view.config.focus_mode == FocusMode::Roving || self.is_list_disabled(view) {
            return None;
        }
        self.active_index(view).map(|i| view.items[i].id())
    }

    /// The pending focus request, if any. Draining clears it.
    pub fn take_request(&mut self) -> Option<FocusRequest<K>> {
        self.request.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::test_items::{Opt, opts};
    use alloc::vec;

    #[test]
    fn focus_moves_active_and_requests_element_focus() {
        let items = opts(&["a", "b", "c"]);
        let config = ListConfig::default();
        let view = ListView::new(&items, &config);
        let mut focus = ListFocus::new();
        assert!(focus.focus(view, 1, true));
        assert_eq!(focus.active(), Some(&1));
        assert!(focus.focus(view, 2, true));
        assert_eq!(focus.prev_active_index(view), Some(1));
        assert_eq!(focus.take_request(), Some(FocusRequest::Item(2)));
        assert_eq!(focus.take_request(), None, "draining clears the request");
    }

    #[test]
    fn focus_fails_silently_on_disabled_items() {
        let items = vec![Opt::new(0, "a"), Opt::new(1, "b").disable()];
        let mut config = ListConfig::default();
        let mut focus = ListFocus::new();
        assert!(!focus.focus(ListView::new(&items, &config), 1, true));
        assert!(!focus.focus(ListView::new(&items, &config), 7, true));
        assert_eq!(focus.active(), None);

        config.skip_disabled = false;
        assert!(focus.focus(ListView::new(&items, &config), 1, false));
        assert_eq!(focus.take_request(), None, "focus_element: false suppresses the request");
    }

    #[test]
    fn all_disabled_means_list_disabled() {
        let items = vec![Opt::new(0, "a").disable(), Opt::new(1, "b").disable()];
        let config = ListConfig {
            skip_disabled: false,
            ..ListConfig::default()
        };
        let view = ListView::new(&items, &config);
        let mut focus = ListFocus::new();
        assert!(focus.is_list_disabled(view));
        assert!(!focus.focus(view, 0, true));
        assert_eq!(focus.list_tab_index(view), 0);

        let empty: [Opt; 0] = [];
        assert!(focus.is_list_disabled(ListView::new(&empty, &config)));
    }

    #[test]
    fn roving_tab_indices() {
        let items = opts(&["a", "b"]);
        let config = ListConfig::default();
        let view = ListView::new(&items, &config);
        let mut focus = ListFocus::new();
        focus.focus(view, 1, true);
        assert_eq!(focus.list_tab_index(view), -1);
        assert_eq!(focus.item_tab_index(view, &items[0]), -1);
        assert_eq!(focus.item_tab_index(view, &items[1]), 0);
        assert_eq!(focus.active_descendant(view), None);
    }

    #[test]
    fn active_descendant_tab_indices() {
        let items = opts(&["a", "b"]);
        let config = ListConfig {
            focus_mode: FocusMode::ActiveDescendant,
            ..ListConfig::default()
        };
        let view = ListView::new(&items, &config);
        let mut focus = ListFocus::new();
        focus.focus(view, 1, true);
        assert_eq!(focus.take_request(), Some(FocusRequest::Container));
        assert_eq!(focus.list_tab_index(view), 0);
        assert_eq!(focus.item_tab_index(view, &items[1]), -1);
        assert_eq!(focus.active_descendant(view), Some(1));
    }

    #[test]
    fn active_index_follows_the_id() {
        let mut items = opts(&["a", "b", "c"]);
        let config = ListConfig::default();
        let mut focus = ListFocus::new();
        focus.focus(ListView::new(&items, &config), 2, true);
        items.remove(0);
        assert_eq!(focus.active_index(ListView::new(&items, &config)), Some(1));
        items.pop();
        assert_eq!(focus.active_index(ListView::new(&items, &config)), None);
    }
}
