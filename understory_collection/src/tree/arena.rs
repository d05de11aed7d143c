// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node storage for trees: a generational arena with parent/child links.

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::item::{Expandable, Focusable, TreeItem};
use crate::list::ListExpansion;

/// Handle to a node of a [`Tree`](crate::Tree).
///
/// A handle pairs a storage slot with the slot's generation. Removing a node
/// frees its slot and the next insert into that slot bumps the generation,
/// so a handle kept across a removal stops resolving instead of silently
/// pointing at whichever item took the slot over. Handles are only
/// meaningful for the tree that issued them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId {
    slot: u32,
    generation: u32,
}

impl NodeId {
    fn slot(self) -> usize {
        self.slot as usize
    }
}

#[derive(Clone, Debug)]
pub(super) struct Node<T: TreeItem> {
    generation: u32,
    pub(super) item: T,
    pub(super) parent: Option<NodeId>,
    pub(super) children: Vec<NodeId>,
    /// Which of `children` are expanded.
    pub(super) expansion: ListExpansion<T::Id>,
}

/// An expansion-group member as seen by [`ListExpansion`].
///
/// A tree item can only expand if it also has children.
#[derive(Clone, Debug)]
pub(super) struct Branch<K> {
    id: K,
    disabled: bool,
    expandable: bool,
}

impl<K: Clone + Eq + core::hash::Hash + core::fmt::Debug> Focusable for Branch<K> {
    type Id = K;

    fn id(&self) -> K {
        self.id.clone()
    }

    fn disabled(&self) -> bool {
        self.disabled
    }
}

impl<K: Clone + Eq + core::hash::Hash + core::fmt::Debug> Expandable for Branch<K> {
    fn expandable(&self) -> bool {
        self.expandable
    }
}

#[derive(Clone, Debug)]
pub(super) struct NodeArena<T: TreeItem> {
    nodes: Vec<Option<Node<T>>>,
    generations: Vec<u32>,
    free_list: Vec<usize>,
    roots: Vec<NodeId>,
    root_expansion: ListExpansion<T::Id>,
    by_id: HashMap<T::Id, NodeId>,
    multi_expandable: bool,
}

impl<T: TreeItem> NodeArena<T> {
    pub(super) fn new(multi_expandable: bool) -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            roots: Vec::new(),
            root_expansion: ListExpansion::new(multi_expandable),
            by_id: HashMap::new(),
            multi_expandable,
        }
    }

    pub(super) fn set_multi_expandable(&mut self, multi: bool) {
        self.multi_expandable = multi;
        self.root_expansion.multi_expandable = multi;
        for node in self.nodes.iter_mut().flatten() {
            node.expansion.multi_expandable = multi;
        }
    }

    pub(super) fn multi_expandable(&self) -> bool {
        self.multi_expandable
    }

    pub(super) fn is_alive(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    pub(super) fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes
            .get(id.slot())
            .and_then(Option::as_ref)
            .filter(|n| n.generation == id.generation)
    }

    pub(super) fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.nodes
            .get_mut(id.slot())
            .and_then(Option::as_mut)
            .filter(|n| n.generation == id.generation)
    }

    pub(super) fn node_of(&self, item: &T::Id) -> Option<NodeId> {
        self.by_id.get(item).copied()
    }

    pub(super) fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub(super) fn children(&self, parent: Option<NodeId>) -> &[NodeId] {
        match parent {
            None => &self.roots,
            Some(p) => match self.node(p) {
                Some(n) => &n.children,
                None => &[],
            },
        }
    }

    pub(super) fn insert(&mut self, parent: Option<NodeId>, item: T) -> Option<NodeId> {
        if parent.is_some_and(|p| !self.is_alive(p)) {
            return None;
        }
        let key = item.id();
        let node = Node {
            generation: 1,
            item,
            parent,
            children: Vec::new(),
            expansion: ListExpansion::new(self.multi_expandable),
        };
        let idx = if let Some(idx) = self.free_list.pop() {
            self.generations[idx] = self.generations[idx].saturating_add(1);
            self.nodes[idx] = Some(Node {
                generation: self.generations[idx],
                ..node
            });
            idx
        } else {
            self.nodes.push(Some(node));
            self.generations.push(1);
            self.nodes.len() - 1
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId stores 32-bit slot indices."
        )]
        let id = NodeId {
            slot: idx as u32,
            generation: self.generations[idx],
        };
        match parent.and_then(|p| self.node_mut(p)) {
            Some(p) => p.children.push(id),
            None => self.roots.push(id),
        }
        self.by_id.insert(key, id);
        Some(id)
    }

    /// Remove `id` and its subtree. Returns the removed items, parents first.
    pub(super) fn remove(&mut self, id: NodeId) -> Vec<T> {
        let Some(parent) = self.node(id).map(|n| n.parent) else {
            return Vec::new();
        };
        let key = self.node(id).map(|n| n.item.id());
        match parent.and_then(|p| self.node_mut(p)) {
            Some(p) => {
                p.children.retain(|c| *c != id);
                if let Some(key) = &key {
                    p.expansion.forget(key);
                }
            }
            None => {
                self.roots.retain(|c| *c != id);
                if let Some(key) = &key {
                    self.root_expansion.forget(key);
                }
            }
        }
        let mut removed = Vec::new();
        self.remove_subtree(id, &mut removed);
        removed
    }

    fn remove_subtree(&mut self, id: NodeId, out: &mut Vec<T>) {
        let Some(node) = self.nodes.get_mut(id.slot()).and_then(Option::take) else {
            return;
        };
        self.free_list.push(id.slot());
        let key = node.item.id();
        if self.by_id.get(&key) == Some(&id) {
            self.by_id.remove(&key);
        }
        out.push(node.item);
        for child in node.children {
            self.remove_subtree(child, out);
        }
    }

    fn group(&self, parent: Option<NodeId>) -> Option<&ListExpansion<T::Id>> {
        match parent {
            None => Some(&self.root_expansion),
            Some(p) => self.node(p).map(|n| &n.expansion),
        }
    }

    fn group_mut(&mut self, parent: Option<NodeId>) -> Option<&mut ListExpansion<T::Id>> {
        match parent {
            None => Some(&mut self.root_expansion),
            Some(p) => self.node_mut(p).map(|n| &mut n.expansion),
        }
    }

    /// Members of the expansion group under `parent`.
    fn branches(&self, parent: Option<NodeId>) -> Vec<Branch<T::Id>> {
        self.children(parent)
            .iter()
            .filter_map(|c| self.node(*c))
            .map(|n| Branch {
                id: n.item.id(),
                disabled: n.item.disabled(),
                expandable: !n.children.is_empty() && n.item.expandable(),
            })
            .collect()
    }

    fn branch(&self, id: NodeId) -> Option<(Option<NodeId>, Vec<Branch<T::Id>>, usize)> {
        let parent = self.node(id)?.parent;
        let position = self.children(parent).iter().position(|c| *c == id)?;
        Some((parent, self.branches(parent), position))
    }

    pub(super) fn is_expandable(&self, id: NodeId) -> bool {
        self.branch(id)
            .is_some_and(|(parent, siblings, i)| {
                self.group(parent)
                    .is_some_and(|g| g.is_expandable(&siblings[i]))
            })
    }

    pub(super) fn is_expanded(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|n| {
            self.group(n.parent)
                .is_some_and(|g| g.is_expanded(&n.item.id()))
        })
    }

    pub(super) fn is_visible(&self, id: NodeId) -> bool {
        let Some(mut parent) = self.node(id).map(|n| n.parent) else {
            return false;
        };
        while let Some(p) = parent {
            if !self.is_expanded(p) {
                return false;
            }
            parent = self.node(p).and_then(|n| n.parent);
        }
        true
    }

    pub(super) fn open(&mut self, id: NodeId) -> bool {
        let Some((parent, siblings, i)) = self.branch(id) else {
            return false;
        };
        self.group_mut(parent)
            .is_some_and(|g| g.open(&siblings, &siblings[i]))
    }

    pub(super) fn close(&mut self, id: NodeId) -> bool {
        let Some((parent, siblings, i)) = self.branch(id) else {
            return false;
        };
        self.group_mut(parent).is_some_and(|g| g.close(&siblings[i]))
    }

    pub(super) fn open_group(&mut self, parent: Option<NodeId>) {
        let siblings = self.branches(parent);
        if let Some(g) = self.group_mut(parent) {
            g.open_all(&siblings);
        }
    }

    pub(super) fn close_group(&mut self, parent: Option<NodeId>) {
        let siblings = self.branches(parent);
        if let Some(g) = self.group_mut(parent) {
            g.close_all(&siblings);
        }
    }

    /// Every live node, in document order.
    pub(super) fn all(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.walk(&self.roots, false, &mut out);
        out
    }

    /// Nodes whose ancestors are all expanded, in document order.
    pub(super) fn visible(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.walk(&self.roots, true, &mut out);
        out
    }

    fn walk(&self, ids: &[NodeId], only_expanded: bool, out: &mut Vec<NodeId>) {
        for &id in ids {
            let Some(node) = self.node(id) else {
                continue;
            };
            out.push(id);
            if !only_expanded || self.is_expanded(id) {
                self.walk(&node.children, only_expanded, out);
            }
        }
    }

    pub(super) fn items(&self, ids: &[NodeId]) -> Vec<&T> {
        ids.iter()
            .filter_map(|id| self.node(*id))
            .map(|n| &n.item)
            .collect()
    }
}
