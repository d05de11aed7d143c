// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hierarchical collections.
//!
//! A [`Tree`] stores its items in an arena of nodes addressed by [`NodeId`].
//! A node is visible when every ancestor is expanded. Navigation, selection
//! and typeahead run the one-dimensional [`List`] engine over the visible
//! nodes in document order, so collapsing a node hides its subtree from
//! every operation without touching the descendants' own state.
//!
//! ```
//! use understory_collection::{
//!     Expandable, Focusable, NavigationOptions, Searchable, Selectable, Tree, TreeConfig,
//! };
//!
//! struct Entry(&'static str);
//!
//! impl Focusable for Entry {
//!     type Id = &'static str;
//!     fn id(&self) -> Self::Id { self.0 }
//! }
//! impl Selectable for Entry {
//!     type Value = &'static str;
//!     fn value(&self) -> Self::Value { self.0 }
//! }
//! impl Searchable for Entry {
//!     fn search_term(&self) -> &str { self.0 }
//! }
//! impl Expandable for Entry {}
//!
//! let mut tree = Tree::new(TreeConfig::default());
//! let src = tree.insert(None, Entry("src")).unwrap();
//! tree.insert(Some(src), Entry("lib.rs")).unwrap();
//! tree.insert(None, Entry("Cargo.toml")).unwrap();
//! tree.set_default_state();
//!
//! // Collapsed children are skipped.
//! assert!(tree.next(NavigationOptions::MOVE));
//! assert_eq!(tree.active_item().map(|e| e.0), Some("Cargo.toml"));
//!
//! assert!(tree.expand(Some(src), NavigationOptions::MOVE));
//! assert!(tree.prev(NavigationOptions::MOVE));
//! assert_eq!(tree.active_item().map(|e| e.0), Some("lib.rs"));
//! assert_eq!(tree.level(tree.active_node().unwrap()), Some(2));
//! ```

mod arena;
mod keys;

use alloc::vec::Vec;

pub use arena::NodeId;

use arena::NodeArena;

use crate::item::TreeItem;
use crate::list::List;
use crate::types::{FocusRequest, NavigationOptions, TreeConfig};
use crate::violation::Violation;

/// A navigable, selectable, expandable tree.
#[derive(Clone, Debug)]
pub struct Tree<T: TreeItem> {
    nodes: NodeArena<T>,
    /// List state over the visible nodes; its `config` is the tree's list
    /// configuration.
    pub list: List<T::Id, T::Value>,
}

impl<T: TreeItem> Tree<T> {
    /// Create an empty tree.
    pub fn new(config: TreeConfig) -> Self {
        Self {
            nodes: NodeArena::new(config.multi_expandable),
            list: List::new(config.list),
        }
    }

    /// Current configuration.
    pub fn config(&self) -> TreeConfig {
        TreeConfig {
            list: self.list.config,
            multi_expandable: self.nodes.multi_expandable(),
        }
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: TreeConfig) {
        self.list.config = config.list;
        self.nodes.set_multi_expandable(config.multi_expandable);
    }

    // Arena.

    /// Insert `item` as the last child of `parent`, or as the last root.
    ///
    /// Returns `None` if `parent` no longer exists. Item ids must be unique
    /// within a tree.
    pub fn insert(&mut self, parent: Option<NodeId>, item: T) -> Option<NodeId> {
        self.nodes.insert(parent, item)
    }

    /// Remove `node` and its subtree, returning the removed items.
    ///
    /// The active item may become hidden or vanish; see
    /// [`reset_state`](Self::reset_state).
    pub fn remove(&mut self, node: NodeId) -> Vec<T> {
        self.nodes.remove(node)
    }

    /// Whether `node` still exists.
    pub fn is_alive(&self, node: NodeId) -> bool {
        self.nodes.is_alive(node)
    }

    /// The item stored at `node`.
    pub fn item(&self, node: NodeId) -> Option<&T> {
        self.nodes.node(node).map(|n| &n.item)
    }

    /// Mutable access to the item at `node`. The item's id must not change.
    pub fn item_mut(&mut self, node: NodeId) -> Option<&mut T> {
        self.nodes.node_mut(node).map(|n| &mut n.item)
    }

    /// Parent of `node`.
    pub fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.node(node).and_then(|n| n.parent)
    }

    /// Children of `node`, in order.
    pub fn children_of(&self, node: NodeId) -> &[NodeId] {
        self.nodes.children(Some(node))
    }

    /// Root nodes, in order.
    pub fn roots(&self) -> &[NodeId] {
        self.nodes.roots()
    }

    /// The node holding the item with `id`.
    pub fn node_of(&self, id: &T::Id) -> Option<NodeId> {
        self.nodes.node_of(id)
    }

    // Derived reads.

    /// Visible nodes in document order.
    pub fn visible_nodes(&self) -> Vec<NodeId> {
        self.nodes.visible()
    }

    /// Items of the visible nodes in document order.
    pub fn visible_items(&self) -> Vec<&T> {
        self.nodes.items(&self.nodes.visible())
    }

    /// Depth of `node`, starting at 1 for roots.
    pub fn level(&self, node: NodeId) -> Option<usize> {
        let mut level = 1;
        let mut parent = self.nodes.node(node)?.parent;
        while let Some(p) = parent {
            level += 1;
            parent = self.parent_of(p);
        }
        Some(level)
    }

    /// One-based position of `node` among its siblings.
    pub fn posinset(&self, node: NodeId) -> Option<usize> {
        let parent = self.nodes.node(node)?.parent;
        self.nodes
            .children(parent)
            .iter()
            .position(|c| *c == node)
            .map(|i| i + 1)
    }

    /// Number of siblings of `node`, itself included.
    pub fn setsize(&self, node: NodeId) -> Option<usize> {
        let parent = self.nodes.node(node)?.parent;
        Some(self.nodes.children(parent).len())
    }

    /// Whether `node` can be expanded: it has children, allows expansion,
    /// and is enabled.
    pub fn is_expandable(&self, node: NodeId) -> bool {
        self.nodes.is_expandable(node)
    }

    /// Whether `node` is expanded.
    pub fn is_expanded(&self, node: NodeId) -> bool {
        self.nodes.is_expanded(node)
    }

    /// `aria-expanded` value: `None` for nodes without children.
    pub fn expanded_state(&self, node: NodeId) -> Option<bool> {
        let n = self.nodes.node(node)?;
        (!n.children.is_empty()).then(|| self.is_expanded(node))
    }

    /// Whether every ancestor of `node` is expanded.
    pub fn is_visible(&self, node: NodeId) -> bool {
        self.nodes.is_visible(node)
    }

    /// The active node.
    pub fn active_node(&self) -> Option<NodeId> {
        self.list.focus.active().and_then(|id| self.nodes.node_of(id))
    }

    /// The active item.
    pub fn active_item(&self) -> Option<&T> {
        self.active_node().and_then(|n| self.item(n))
    }

    /// Whether `node` is the active node.
    pub fn is_active(&self, node: NodeId) -> bool {
        self.active_node() == Some(node)
    }

    /// Whether `node`'s item is selected.
    pub fn is_selected(&self, node: NodeId) -> bool {
        self.item(node).is_some_and(|item| self.list.is_selected(item))
    }

    /// Tab index of `node`.
    pub fn tab_index(&self, node: NodeId) -> i32 {
        let items = self.visible_items();
        match self.item(node) {
            Some(item) => self.list.item_tab_index(&items, &item),
            None => -1,
        }
    }

    /// Tab index of the tree container.
    pub fn container_tab_index(&self) -> i32 {
        self.list.tab_index(&self.visible_items())
    }

    /// Id for the container's `aria-activedescendant`.
    pub fn active_descendant(&self) -> Option<T::Id> {
        self.list.active_descendant(&self.visible_items())
    }

    /// The pending focus request, if any. Draining clears it.
    pub fn take_focus_request(&mut self) -> Option<FocusRequest<T::Id>> {
        self.list.take_focus_request()
    }

    /// Selected values in selection order.
    pub fn values(&self) -> &[T::Value] {
        self.list.values()
    }

    /// Whether a typeahead burst is in progress.
    pub fn is_typing(&self) -> bool {
        self.list.is_typing()
    }

    /// Advance the typeahead clock to `now`.
    pub fn tick(&mut self, now: u64) -> bool {
        self.list.tick(now)
    }

    // Navigation and selection over the visible nodes.

    /// Make an initial visible node active without requesting focus.
    pub fn set_default_state(&mut self) {
        let items = self.nodes.items(&self.nodes.visible());
        self.list.set_default_state(&items);
    }

    /// Move to the next visible node.
    pub fn next(&mut self, opts: NavigationOptions) -> bool {
        let items = self.nodes.items(&self.nodes.visible());
        self.list.next(&items, opts)
    }

    /// Move to the previous visible node.
    pub fn prev(&mut self, opts: NavigationOptions) -> bool {
        let items = self.nodes.items(&self.nodes.visible());
        self.list.prev(&items, opts)
    }

    /// Move to the first visible node.
    pub fn first(&mut self, opts: NavigationOptions) -> bool {
        let items = self.nodes.items(&self.nodes.visible());
        self.list.first(&items, opts)
    }

    /// Move to the last visible node.
    pub fn last(&mut self, opts: NavigationOptions) -> bool {
        let items = self.nodes.items(&self.nodes.visible());
        self.list.last(&items, opts)
    }

    /// Move to `node` if it is visible.
    pub fn goto(&mut self, node: NodeId, opts: NavigationOptions) -> bool {
        let Some(id) = self.item(node).map(|item| item.id()) else {
            return false;
        };
        let items = self.nodes.items(&self.nodes.visible());
        self.list.goto(&items, &id, opts)
    }

    /// Feed a typed key to typeahead at time `now`.
    pub fn search(&mut self, key: &str, now: u64, opts: NavigationOptions) -> bool {
        let items = self.nodes.items(&self.nodes.visible());
        self.list.search(&items, key, now, opts)
    }

    /// Record the active node as the anchor for range selection.
    pub fn set_anchor(&mut self) {
        let items = self.nodes.items(&self.nodes.visible());
        self.list.set_anchor(&items);
    }

    /// Apply the selection side effects of `opts` to the active node.
    pub fn update_selection(&mut self, opts: NavigationOptions) {
        let items = self.nodes.items(&self.nodes.visible());
        self.list.update_selection(&items, opts);
    }

    /// Select `node` (default: active node).
    pub fn select(&mut self, node: Option<NodeId>) -> bool {
        let (items, index) = target(&self.nodes, node);
        self.list.select(&items, index)
    }

    /// Deselect `node` (default: active node).
    pub fn deselect(&mut self, node: Option<NodeId>) -> bool {
        let (items, index) = target(&self.nodes, node);
        self.list.deselect(&items, index)
    }

    /// Toggle `node` (default: active node).
    pub fn toggle(&mut self, node: Option<NodeId>) -> bool {
        let (items, index) = target(&self.nodes, node);
        self.list.toggle(&items, index)
    }

    /// Toggle the active node, clearing everything else when selecting.
    pub fn toggle_one(&mut self) -> bool {
        let items = self.nodes.items(&self.nodes.visible());
        self.list.toggle_one(&items)
    }

    /// Make the active node the only selected node.
    pub fn select_one(&mut self) -> bool {
        let items = self.nodes.items(&self.nodes.visible());
        self.list.select_one(&items)
    }

    /// Select every visible valid node (multi-select only).
    pub fn select_all(&mut self) {
        let items = self.nodes.items(&self.nodes.visible());
        self.list.select_all(&items);
    }

    /// Deselect every node that can be deselected.
    ///
    /// Hidden nodes count as present; only values of removed nodes are
    /// dropped unconditionally.
    pub fn deselect_all(&mut self) {
        let items = self.nodes.items(&self.nodes.all());
        self.list.deselect_all(&items);
    }

    /// Select all visible nodes, or deselect all if they are all selected.
    pub fn toggle_all(&mut self) {
        let items = self.nodes.items(&self.nodes.visible());
        self.list.toggle_all(&items);
    }

    /// Extend the range selection to the active node.
    pub fn select_range(&mut self, anchor: bool) {
        let items = self.nodes.items(&self.nodes.visible());
        self.list.select_range(&items, anchor);
    }

    // Expansion.

    /// Expand `node` (default: active node).
    ///
    /// An already expanded node with a focusable child moves to the next
    /// visible node instead, which is its first child.
    pub fn expand(&mut self, node: Option<NodeId>, opts: NavigationOptions) -> bool {
        let Some(node) = node.or_else(|| self.active_node()) else {
            return false;
        };
        if !self.is_node_focusable(node) {
            return false;
        }
        if self.is_expandable(node) && !self.is_expanded(node) {
            return self.nodes.open(node);
        }
        let has_focusable_child = self
            .children_of(node)
            .iter()
            .any(|c| self.is_node_focusable(*c));
        if self.is_expanded(node) && has_focusable_child {
            return self.next(opts);
        }
        false
    }

    /// Collapse `node` (default: active node).
    ///
    /// A leaf or an already collapsed node moves to its parent instead.
    pub fn collapse(&mut self, node: Option<NodeId>, opts: NavigationOptions) -> bool {
        let Some(node) = node.or_else(|| self.active_node()) else {
            return false;
        };
        if !self.is_node_focusable(node) {
            return false;
        }
        if self.is_expandable(node) && self.is_expanded(node) {
            return self.nodes.close(node);
        }
        match self.parent_of(node) {
            Some(parent) => self.goto(parent, opts),
            None => false,
        }
    }

    /// Flip the expanded state of `node` (default: active node).
    pub fn toggle_expansion(&mut self, node: Option<NodeId>) -> bool {
        let Some(node) = node.or_else(|| self.active_node()) else {
            return false;
        };
        if self.is_expanded(node) {
            self.nodes.close(node)
        } else {
            self.nodes.open(node)
        }
    }

    /// Expand every sibling of `node` (default: active node).
    ///
    /// Only applies when siblings may be expanded together.
    pub fn expand_siblings(&mut self, node: Option<NodeId>) {
        if let Some(node) = node.or_else(|| self.active_node())
            && self.is_alive(node)
        {
            let parent = self.parent_of(node);
            self.nodes.open_group(parent);
        }
    }

    /// Expand every expandable node.
    pub fn expand_all(&mut self) {
        self.nodes.open_group(None);
        for node in self.nodes.all() {
            self.nodes.open_group(Some(node));
        }
    }

    /// Collapse every expandable node.
    pub fn collapse_all(&mut self) {
        self.nodes.close_group(None);
        for node in self.nodes.all() {
            self.nodes.close_group(Some(node));
        }
    }

    fn is_node_focusable(&self, node: NodeId) -> bool {
        let items = self.visible_items();
        let view = self.list.view(&items);
        self.item(node)
            .is_some_and(|item| self.list.focus.is_focusable(view, &item))
    }

    // State repair.

    /// Whether the active item is hidden or gone.
    pub fn is_state_stale(&self) -> bool {
        match self.list.focus.active() {
            None => false,
            Some(id) => self.nodes.node_of(id).is_none_or(|n| !self.is_visible(n)),
        }
    }

    /// Move a hidden or removed active item to the nearest visible ancestor,
    /// else to the default state. Returns whether state changed.
    pub fn reset_state(&mut self) -> bool {
        if !self.is_state_stale() {
            return false;
        }
        let opts = NavigationOptions::MOVE.without_focus();
        let mut ancestor = self.active_node().and_then(|n| self.parent_of(n));
        while let Some(node) = ancestor {
            if self.is_visible(node) && self.goto(node, opts) {
                tracing::debug!(target: "understory_collection::tree", ?node, "stale state repaired: visible ancestor");
                return true;
            }
            ancestor = self.parent_of(node);
        }
        self.list.focus.set_active(None);
        self.set_default_state();
        tracing::debug!(target: "understory_collection::tree", "stale state repaired: default state");
        true
    }

    /// Report state a host should not produce.
    pub fn validate(&self) -> Vec<Violation> {
        let items = self.nodes.items(&self.nodes.all());
        self.list.validate(&items)
    }
}

/// Visible items plus the index of `node` among them.
///
/// A hidden or stale `node` resolves to an index past the end, which every
/// selection operation rejects.
fn target<T: TreeItem>(nodes: &NodeArena<T>, node: Option<NodeId>) -> (Vec<&T>, Option<usize>) {
    let visible = nodes.visible();
    let index = node.map(|n| visible.iter().position(|v| *v == n).unwrap_or(usize::MAX));
    (nodes.items(&visible), index)
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::item::Focusable;
    use crate::item::test_items::Opt;

    struct Fixture {
        tree: Tree<Opt>,
        a: NodeId,
        a2: NodeId,
        a2x: NodeId,
        c: NodeId,
    }

    /// ```text
    /// a (0)
    ///   apple (1)
    ///   avocado (2)
    ///     avocado toast (3)
    /// b (4)
    /// c (5)
    ///   cherry (6)
    /// ```
    fn fixture(config: TreeConfig) -> Fixture {
        let mut tree = Tree::new(config);
        let a = tree.insert(None, Opt::new(0, "a")).unwrap();
        tree.insert(Some(a), Opt::new(1, "apple")).unwrap();
        let a2 = tree.insert(Some(a), Opt::new(2, "avocado")).unwrap();
        let a2x = tree.insert(Some(a2), Opt::new(3, "avocado toast")).unwrap();
        tree.insert(None, Opt::new(4, "b")).unwrap();
        let c = tree.insert(None, Opt::new(5, "c")).unwrap();
        tree.insert(Some(c), Opt::new(6, "cherry")).unwrap();
        tree.set_default_state();
        Fixture {
            tree,
            a,
            a2,
            a2x,
            c,
        }
    }

    fn visible(tree: &Tree<Opt>) -> Vec<u32> {
        tree.visible_items().iter().map(|o| o.id()).collect()
    }

    fn active(tree: &Tree<Opt>) -> Option<u32> {
        tree.active_item().map(Focusable::id)
    }

    #[test]
    fn only_roots_are_visible_at_first() {
        let f = fixture(TreeConfig::default());
        assert_eq!(visible(&f.tree), [0, 4, 5]);
        assert_eq!(active(&f.tree), Some(0));
        assert!(!f.tree.is_visible(f.a2));
    }

    #[test]
    fn navigation_skips_collapsed_children() {
        let mut f = fixture(TreeConfig::default());
        assert!(f.tree.next(NavigationOptions::MOVE));
        assert_eq!(active(&f.tree), Some(4));
        assert!(f.tree.last(NavigationOptions::MOVE));
        assert_eq!(active(&f.tree), Some(5));
    }

    #[test]
    fn expand_opens_then_drills_in() {
        let mut f = fixture(TreeConfig::default());
        assert!(f.tree.expand(None, NavigationOptions::MOVE));
        assert_eq!(visible(&f.tree), [0, 1, 2, 4, 5]);
        assert_eq!(active(&f.tree), Some(0), "opening does not move");

        assert!(f.tree.expand(None, NavigationOptions::MOVE));
        assert_eq!(active(&f.tree), Some(1));

        // A leaf cannot expand or drill in.
        assert!(!f.tree.expand(None, NavigationOptions::MOVE));
        assert_eq!(active(&f.tree), Some(1));
    }

    #[test]
    fn collapse_closes_then_climbs() {
        let mut f = fixture(TreeConfig::default());
        f.tree.expand(Some(f.a), NavigationOptions::MOVE);
        f.tree.goto(f.a2, NavigationOptions::MOVE);

        // Collapsed parent: move to the parent.
        assert!(f.tree.collapse(None, NavigationOptions::MOVE));
        assert_eq!(active(&f.tree), Some(0));

        // Expanded node: close it in place.
        assert!(f.tree.collapse(None, NavigationOptions::MOVE));
        assert_eq!(active(&f.tree), Some(0));
        assert_eq!(visible(&f.tree), [0, 4, 5]);

        // Root without a parent: nothing to do.
        assert!(!f.tree.collapse(None, NavigationOptions::MOVE));
    }

    #[test]
    fn collapsing_keeps_descendant_expansion() {
        let mut f = fixture(TreeConfig::default());
        f.tree.expand(Some(f.a), NavigationOptions::MOVE);
        f.tree.expand(Some(f.a2), NavigationOptions::MOVE);
        assert_eq!(visible(&f.tree), [0, 1, 2, 3, 4, 5]);

        f.tree.collapse(Some(f.a), NavigationOptions::MOVE);
        assert_eq!(visible(&f.tree), [0, 4, 5]);
        assert!(f.tree.is_expanded(f.a2));

        f.tree.expand(Some(f.a), NavigationOptions::MOVE);
        assert_eq!(visible(&f.tree), [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn aria_reads() {
        let mut f = fixture(TreeConfig::default());
        assert_eq!(f.tree.level(f.a), Some(1));
        assert_eq!(f.tree.level(f.a2x), Some(3));
        assert_eq!(f.tree.posinset(f.a2), Some(2));
        assert_eq!(f.tree.setsize(f.a2), Some(2));
        assert_eq!(f.tree.setsize(f.c), Some(3));
        assert_eq!(f.tree.expanded_state(f.a), Some(false));
        assert_eq!(f.tree.expanded_state(f.a2x), None);

        f.tree.expand(Some(f.a), NavigationOptions::MOVE);
        assert_eq!(f.tree.expanded_state(f.a), Some(true));
        assert!(f.tree.is_active(f.a));
        assert_eq!(f.tree.tab_index(f.a), 0);
        assert_eq!(f.tree.tab_index(f.a2), -1);
    }

    #[test]
    fn single_expandable_closes_siblings() {
        let config = TreeConfig {
            multi_expandable: false,
            ..TreeConfig::default()
        };
        let mut f = fixture(config);
        f.tree.expand(Some(f.a), NavigationOptions::MOVE);
        f.tree.expand(Some(f.c), NavigationOptions::MOVE);
        assert!(!f.tree.is_expanded(f.a));
        assert!(f.tree.is_expanded(f.c));

        f.tree.expand_all();
        assert!(!f.tree.is_expanded(f.a), "expand all needs multi expansion");
    }

    #[test]
    fn expand_and_collapse_all() {
        let mut f = fixture(TreeConfig::default());
        f.tree.expand_all();
        assert_eq!(visible(&f.tree), [0, 1, 2, 3, 4, 5, 6]);
        f.tree.collapse_all();
        assert_eq!(visible(&f.tree), [0, 4, 5]);

        f.tree.expand_siblings(Some(f.a));
        assert_eq!(visible(&f.tree), [0, 1, 2, 4, 5, 6]);
    }

    #[test]
    fn hidden_active_item_moves_to_visible_ancestor() {
        let mut f = fixture(TreeConfig::default());
        f.tree.expand_all();
        f.tree.goto(f.a2x, NavigationOptions::MOVE);
        assert!(!f.tree.is_state_stale());

        f.tree.collapse(Some(f.a), NavigationOptions::MOVE);
        assert!(f.tree.is_state_stale());
        assert!(f.tree.reset_state());
        assert_eq!(active(&f.tree), Some(0));
        assert!(!f.tree.reset_state(), "state is settled");
    }

    #[test]
    fn removed_active_item_falls_back_to_default() {
        let mut f = fixture(TreeConfig::default());
        f.tree.goto(f.c, NavigationOptions::MOVE);
        let removed = f.tree.remove(f.c);
        assert_eq!(removed.iter().map(|o| o.id).collect::<Vec<_>>(), [5, 6]);
        assert!(!f.tree.is_alive(f.c));
        assert!(f.tree.is_state_stale());
        assert!(f.tree.reset_state());
        assert_eq!(active(&f.tree), Some(0));
    }

    #[test]
    fn removed_ids_do_not_resolve_after_reuse() {
        let mut f = fixture(TreeConfig::default());
        f.tree.remove(f.a2x);
        let fresh = f.tree.insert(Some(f.a2), Opt::new(9, "avocado salad")).unwrap();
        assert!(!f.tree.is_alive(f.a2x));
        assert!(f.tree.item(f.a2x).is_none());
        assert_eq!(f.tree.item(fresh).map(|o| o.id), Some(9));
        assert_eq!(f.tree.node_of(&9), Some(fresh));
        assert_eq!(f.tree.node_of(&3), None);
    }

    #[test]
    fn selection_targets_visible_nodes_only() {
        let mut f = fixture(TreeConfig::default());
        assert!(!f.tree.select(Some(f.a2)), "hidden node");
        f.tree.expand(Some(f.a), NavigationOptions::MOVE);
        assert!(f.tree.select(Some(f.a2)));
        assert!(f.tree.is_selected(f.a2));
        assert_eq!(f.tree.values(), [2]);
    }

    #[test]
    fn typeahead_searches_visible_nodes() {
        let mut f = fixture(TreeConfig::default());
        assert!(f.tree.search("c", 0, NavigationOptions::MOVE));
        assert_eq!(active(&f.tree), Some(5), "cherry is hidden");
    }

    #[test]
    fn validate_reports_extra_values_in_single_select() {
        let mut f = fixture(TreeConfig::default());
        f.tree.list.set_values([1, 4].into());
        assert_eq!(f.tree.validate().len(), 1);
    }
}
