// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-dimensional collections.
//!
//! [`List`] composes [`ListFocus`], [`ListNavigation`], [`ListSelection`] and
//! [`ListTypeahead`] into one navigable, selectable collection. Every
//! operation takes the current items as a slice; the list itself only stores
//! ids, values, and a few indices.
//!
//! ```
//! use understory_collection::{Focusable, List, ListConfig, NavigationOptions, Searchable, Selectable};
//!
//! struct Fruit(&'static str);
//!
//! impl Focusable for Fruit {
//!     type Id = &'static str;
//!     fn id(&self) -> Self::Id { self.0 }
//! }
//! impl Selectable for Fruit {
//!     type Value = &'static str;
//!     fn value(&self) -> Self::Value { self.0 }
//! }
//! impl Searchable for Fruit {
//!     fn search_term(&self) -> &str { self.0 }
//! }
//!
//! let fruit = [Fruit("apple"), Fruit("banana"), Fruit("cherry")];
//! let mut list = List::new(ListConfig::default());
//! list.set_default_state(&fruit);
//! assert_eq!(list.active_index(&fruit), Some(0));
//!
//! // Selection follows focus by default.
//! assert!(list.next(&fruit, NavigationOptions::SELECT_ONE));
//! assert_eq!(list.values(), ["banana"]);
//! ```

mod expansion;
mod focus;
mod keys;
mod navigation;
mod selection;
mod typeahead;

use alloc::vec::Vec;

pub use expansion::ListExpansion;
pub use focus::{ListFocus, ListView};
pub use keys::ListContext;
pub(crate) use keys::TYPING;
pub use navigation::ListNavigation;
pub use selection::ListSelection;
pub use typeahead::ListTypeahead;

use crate::item::ListItem;
use crate::types::{FocusRequest, ListConfig, NavigationOptions};
use crate::violation::{Violation, report};

/// A navigable, selectable one-dimensional collection.
#[derive(Clone, Debug)]
pub struct List<K, V> {
    /// Collection configuration; may be changed between calls.
    pub config: ListConfig,
    /// Active-item tracking.
    pub focus: ListFocus<K>,
    /// Linear movement.
    pub navigation: ListNavigation,
    /// Selected values and range bounds.
    pub selection: ListSelection<V>,
    /// Typeahead query state.
    pub typeahead: ListTypeahead,
    anchor_index: Option<usize>,
}

impl<K, V> List<K, V>
where
    K: Clone + Eq + core::hash::Hash + core::fmt::Debug,
    V: Clone + PartialEq + core::fmt::Debug,
{
    /// Create an empty list state with `config`.
    pub fn new(config: ListConfig) -> Self {
        Self {
            config,
            focus: ListFocus::new(),
            navigation: ListNavigation::new(),
            selection: ListSelection::new(),
            typeahead: ListTypeahead::new(),
            anchor_index: Some(0),
        }
    }

    /// A view of `items` under this list's configuration.
    pub fn view<'a, T>(&'a self, items: &'a [T]) -> ListView<'a, T> {
        ListView::new(items, &self.config)
    }

    /// Index of the active item.
    pub fn active_index<T: ListItem<Id = K, Value = V>>(&self, items: &[T]) -> Option<usize> {
        self.focus.active_index(self.view(items))
    }

    /// The active item.
    pub fn active_item<'a, T: ListItem<Id = K, Value = V>>(&self, items: &'a [T]) -> Option<&'a T> {
        self.active_index(items).map(|i| &items[i])
    }

    /// Whether the list as a whole is disabled.
    pub fn is_list_disabled<T: ListItem<Id = K, Value = V>>(&self, items: &[T]) -> bool {
        self.focus.is_list_disabled(self.view(items))
    }

    /// Tab index of the container.
    pub fn tab_index<T: ListItem<Id = K, Value = V>>(&self, items: &[T]) -> i32 {
        self.focus.list_tab_index(self.view(items))
    }

    /// Tab index of `item`.
    pub fn item_tab_index<T: ListItem<Id = K, Value = V>>(&self, items: &[T], item: &T) -> i32 {
        self.focus.item_tab_index(self.view(items), item)
    }

    /// Id for the container's `aria-activedescendant`.
    pub fn active_descendant<T: ListItem<Id = K, Value = V>>(&self, items: &[T]) -> Option<K> {
        self.focus.active_descendant(self.view(items))
    }

    /// The pending focus request, if any. Draining clears it.
    pub fn take_focus_request(&mut self) -> Option<FocusRequest<K>> {
        self.focus.take_request()
    }

    /// Selected values in selection order.
    pub fn values(&self) -> &[V] {
        self.selection.values()
    }

    /// Replace the selected values.
    pub fn set_values(&mut self, values: Vec<V>) {
        self.selection.set_values(values);
    }

    /// Whether `item` is selected.
    pub fn is_selected<T: ListItem<Id = K, Value = V>>(&self, item: &T) -> bool {
        self.selection.is_selected(item)
    }

    /// Indices of the selected items, in item order.
    pub fn selected_indices<T: ListItem<Id = K, Value = V>>(&self, items: &[T]) -> Vec<usize> {
        (0..items.len())
            .filter(|&i| self.selection.is_selected(&items[i]))
            .collect()
    }

    /// The selected items, in item order.
    pub fn selected_items<'a, T: ListItem<Id = K, Value = V>>(
        &'a self,
        items: &'a [T],
    ) -> impl Iterator<Item = &'a T> + 'a {
        items.iter().filter(|item| self.selection.is_selected(*item))
    }

    /// Whether a typeahead burst is in progress.
    pub fn is_typing(&self) -> bool {
        self.typeahead.is_typing()
    }

    /// Advance the typeahead clock to `now`.
    pub fn tick(&mut self, now: u64) -> bool {
        self.typeahead.tick(now)
    }

    /// Record the active item as the place a range selection would begin.
    pub fn set_anchor<T: ListItem<Id = K, Value = V>>(&mut self, items: &[T]) {
        self.anchor_index = self.active_index(items);
    }

    /// The index recorded by the last [`set_anchor`](Self::set_anchor).
    pub fn anchor_index(&self) -> Option<usize> {
        self.anchor_index
    }

    /// Make an initial item active without requesting focus.
    ///
    /// Prefers the first focusable selected item, then the first focusable
    /// item.
    pub fn set_default_state<T: ListItem<Id = K, Value = V>>(&mut self, items: &[T]) {
        let view = ListView::new(items, &self.config);
        let mut first = None;
        for item in items {
            if !self.focus.is_focusable(view, item) {
                continue;
            }
            if self.selection.is_selected(item) {
                first = Some(item);
                break;
            }
            first.get_or_insert(item);
        }
        if let Some(item) = first {
            self.focus.set_active(Some(item.id()));
        }
    }

    /// Move to the next item.
    pub fn next<T: ListItem<Id = K, Value = V>>(&mut self, items: &[T], opts: NavigationOptions) -> bool {
        self.navigate(items, opts, |nav, focus, view| nav.next(focus, view, opts.focus_element))
    }

    /// Move to the previous item.
    pub fn prev<T: ListItem<Id = K, Value = V>>(&mut self, items: &[T], opts: NavigationOptions) -> bool {
        self.navigate(items, opts, |nav, focus, view| nav.prev(focus, view, opts.focus_element))
    }

    /// Move to the first focusable item.
    pub fn first<T: ListItem<Id = K, Value = V>>(&mut self, items: &[T], opts: NavigationOptions) -> bool {
        self.navigate(items, opts, |nav, focus, view| nav.first(focus, view, opts.focus_element))
    }

    /// Move to the last focusable item.
    pub fn last<T: ListItem<Id = K, Value = V>>(&mut self, items: &[T], opts: NavigationOptions) -> bool {
        self.navigate(items, opts, |nav, focus, view| nav.last(focus, view, opts.focus_element))
    }

    /// Move to the item with `id`.
    pub fn goto<T: ListItem<Id = K, Value = V>>(
        &mut self,
        items: &[T],
        id: &K,
        opts: NavigationOptions,
    ) -> bool {
        self.navigate(items, opts, |nav, focus, view| nav.goto(focus, view, id, opts.focus_element))
    }

    /// Feed a typed key to typeahead at time `now`.
    pub fn search<T: ListItem<Id = K, Value = V>>(
        &mut self,
        items: &[T],
        key: &str,
        now: u64,
        opts: NavigationOptions,
    ) -> bool {
        let view = ListView::new(items, &self.config);
        let moved = self
            .typeahead
            .search(&mut self.focus, view, key, now, opts.focus_element);
        if moved {
            self.update_selection(items, opts);
        }
        moved
    }

    /// Select the item at `index` (default: active item).
    pub fn select<T: ListItem<Id = K, Value = V>>(&mut self, items: &[T], index: Option<usize>) -> bool {
        let view = ListView::new(items, &self.config);
        self.selection.select(&self.focus, view, index, true)
    }

    /// Deselect the item at `index` (default: active item).
    pub fn deselect<T: ListItem<Id = K, Value = V>>(&mut self, items: &[T], index: Option<usize>) -> bool {
        let view = ListView::new(items, &self.config);
        self.selection.deselect(&self.focus, view, index)
    }

    /// Toggle the item at `index` (default: active item).
    pub fn toggle<T: ListItem<Id = K, Value = V>>(&mut self, items: &[T], index: Option<usize>) -> bool {
        let view = ListView::new(items, &self.config);
        self.selection.toggle(&self.focus, view, index)
    }

    /// Toggle the active item, clearing everything else when selecting.
    pub fn toggle_one<T: ListItem<Id = K, Value = V>>(&mut self, items: &[T]) -> bool {
        let view = ListView::new(items, &self.config);
        self.selection.toggle_one(&self.focus, view)
    }

    /// Make the active item the only selected item.
    pub fn select_one<T: ListItem<Id = K, Value = V>>(&mut self, items: &[T]) -> bool {
        let view = ListView::new(items, &self.config);
        self.selection.select_one(&self.focus, view)
    }

    /// Select every valid item (multi-select only).
    pub fn select_all<T: ListItem<Id = K, Value = V>>(&mut self, items: &[T]) {
        let view = ListView::new(items, &self.config);
        self.selection.select_all(&self.focus, view);
    }

    /// Deselect every item that can be deselected.
    pub fn deselect_all<T: ListItem<Id = K, Value = V>>(&mut self, items: &[T]) {
        let view = ListView::new(items, &self.config);
        self.selection.deselect_all(view);
    }

    /// Select all, or deselect all if everything is already selected.
    pub fn toggle_all<T: ListItem<Id = K, Value = V>>(&mut self, items: &[T]) {
        let view = ListView::new(items, &self.config);
        self.selection.toggle_all(&self.focus, view);
    }

    /// Extend the range selection to the active item.
    pub fn select_range<T: ListItem<Id = K, Value = V>>(&mut self, items: &[T], anchor: bool) {
        let view = ListView::new(items, &self.config);
        self.selection.select_range(&self.focus, view, anchor);
    }

    /// Apply the selection side effects of `opts` to the active item.
    ///
    /// The anchor moves only when a new range began or the range was pinned
    /// with `anchor: false`.
    pub fn update_selection<T: ListItem<Id = K, Value = V>>(&mut self, items: &[T], opts: NavigationOptions) {
        let range_start = self.selection.range_start();
        if opts.toggle {
            self.toggle(items, None);
        }
        if opts.toggle_one {
            self.toggle_one(items);
        }
        if opts.select {
            self.select(items, None);
        }
        if opts.select_one {
            self.select_one(items);
        }
        if opts.select_range {
            self.select_range(items, opts.anchor);
        }
        if !opts.anchor || self.selection.range_start() != range_start {
            self.anchor_index = self.selection.range_start();
        }
    }

    /// Report state a host should not produce.
    pub fn validate<T: ListItem<Id = K, Value = V>>(&self, items: &[T]) -> Vec<Violation> {
        let mut found = Vec::new();
        if !self.config.multi && self.values().len() > 1 {
            found.push(Violation::multiple_selected(self.values()));
        }
        if self.config.skip_disabled {
            found.extend(
                self.selected_items(items)
                    .filter(|item| item.disabled())
                    .map(|item| Violation::unreachable(&item.id())),
            );
        }
        report("list", found)
    }

    /// Run `operation`, then apply selection side effects only if it moved
    /// the active item. Range selection never wraps.
    fn navigate<T, F>(&mut self, items: &[T], opts: NavigationOptions, operation: F) -> bool
    where
        T: ListItem<Id = K, Value = V>,
        F: FnOnce(&ListNavigation, &mut ListFocus<K>, ListView<'_, T>) -> bool,
    {
        if opts.select_range {
            self.navigation.set_wrap_enabled(false);
            self.selection.set_range_start(self.anchor_index);
        }
        let view = ListView::new(items, &self.config);
        let moved = operation(&self.navigation, &mut self.focus, view);
        if moved {
            self.update_selection(items, opts);
        }
        self.navigation.set_wrap_enabled(true);
        moved
    }
}
