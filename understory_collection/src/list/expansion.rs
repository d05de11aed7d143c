// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which items of a group are expanded.

use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::item::{Expandable, Focusable};

/// Expanded state for one group of sibling items.
///
/// In a single-expandable group, opening an item closes its siblings.
#[derive(Clone, Debug)]
pub struct ListExpansion<K> {
    /// Whether more than one item may be expanded at a time.
    pub multi_expandable: bool,
    expanded: HashSet<K>,
}

impl<K> Default for ListExpansion<K> {
    fn default() -> Self {
        Self {
            multi_expandable: true,
            expanded: HashSet::new(),
        }
    }
}

impl<K: Clone + Eq + core::hash::Hash> ListExpansion<K> {
    /// Create an expansion group.
    pub fn new(multi_expandable: bool) -> Self {
        Self {
            multi_expandable,
            expanded: HashSet::new(),
        }
    }

    /// Whether `item` may change its expanded state.
    pub fn is_expandable<T: Expandable<Id = K>>(&self, item: &T) -> bool {
        !item.disabled() && item.expandable()
    }

    /// Whether the item with `id` is expanded.
    pub fn is_expanded(&self, id: &K) -> bool {
        self.expanded.contains(id)
    }

    /// Ids of all expanded items, in no particular order.
    pub fn expanded_ids(&self) -> impl Iterator<Item = &K> + '_ {
        self.expanded.iter()
    }

    /// Expand `item`. In a single-expandable group, `siblings` are closed
    /// first. Returns whether the state changed.
    pub fn open<T: Expandable<Id = K>>(&mut self, siblings: &[T], item: &T) -> bool {
        if !self.is_expandable(item) || self.is_expanded(&item.id()) {
            return false;
        }
        if !self.multi_expandable {
            self.close_all(siblings);
        }
        self.expanded.insert(item.id())
    }

    /// Collapse `item`. Returns whether the state changed.
    pub fn close<T: Expandable<Id = K>>(&mut self, item: &T) -> bool {
        self.is_expandable(item) && self.expanded.remove(&item.id())
    }

    /// Flip the expanded state of `item`.
    pub fn toggle<T: Expandable<Id = K>>(&mut self, siblings: &[T], item: &T) -> bool {
        if self.is_expanded(&item.id()) {
            self.close(item)
        } else {
            self.open(siblings, item)
        }
    }

    /// Expand every expandable item of a multi-expandable group.
    pub fn open_all<T: Expandable<Id = K>>(&mut self, items: &[T]) {
        if !self.multi_expandable {
            return;
        }
        for item in items {
            self.open(items, item);
        }
    }

    /// Collapse every expandable item. Disabled items keep their state.
    pub fn close_all<T: Expandable<Id = K>>(&mut self, items: &[T]) {
        for item in items {
            self.close(item);
        }
    }

    /// Forget `id` regardless of its state, for items that no longer exist.
    pub fn forget(&mut self, id: &K) -> bool {
        self.expanded.remove(id)
    }

    /// Drop ids that no longer belong to any of `items`.
    pub fn retain_present<T: Expandable<Id = K>>(&mut self, items: &[T]) {
        let present: Vec<K> = items.iter().map(Focusable::id).collect();
        self.expanded.retain(|id| present.contains(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::test_items::{Opt, opts};
    use alloc::vec;

    #[test]
    fn single_expandable_closes_siblings() {
        let items = opts(&["a", "b", "c"]);
        let mut exp = ListExpansion::new(false);
        assert!(exp.open(&items, &items[0]));
        assert!(exp.open(&items, &items[1]));
        assert!(!exp.is_expanded(&0));
        assert!(exp.is_expanded(&1));
        assert!(!exp.open(&items, &items[1]), "already open");
        exp.open_all(&items);
        assert_eq!(exp.expanded_ids().count(), 1, "open_all needs multi_expandable");
    }

    #[test]
    fn multi_expandable_keeps_siblings_open() {
        let items = opts(&["a", "b", "c"]);
        let mut exp = ListExpansion::new(true);
        exp.open_all(&items);
        assert_eq!(exp.expanded_ids().count(), 3);
        assert!(exp.toggle(&items, &items[1]));
        assert!(!exp.is_expanded(&1));
        exp.close_all(&items);
        assert_eq!(exp.expanded_ids().count(), 0);
    }

    #[test]
    fn disabled_items_keep_their_state() {
        let items = vec![Opt::new(0, "a"), Opt::new(1, "b").disable()];
        let mut exp = ListExpansion::new(true);
        assert!(!exp.open(&items, &items[1]));
        exp.expanded.insert(1);
        exp.close_all(&items);
        assert!(exp.is_expanded(&1));
        assert!(exp.forget(&1));
    }

    #[test]
    fn retain_present_drops_stale_ids() {
        let mut items = opts(&["a", "b"]);
        let mut exp = ListExpansion::new(true);
        exp.open_all(&items);
        items.remove(0);
        exp.retain_present(&items);
        assert!(!exp.is_expanded(&0));
        assert!(exp.is_expanded(&1));
    }
}
