// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangular selection over grid coordinates.

use alloc::vec::Vec;

use hashbrown::HashSet;

use super::data::Coord;
use super::focus::GridView;
use crate::item::GridCell;

/// The set of selected cell ids.
#[derive(Clone, Debug)]
pub struct GridSelection<K> {
    selected: HashSet<K>,
}

impl<K> Default for GridSelection<K> {
    fn default() -> Self {
        Self {
            selected: HashSet::new(),
        }
    }
}

impl<K: Clone + Eq + core::hash::Hash + core::fmt::Debug> GridSelection<K> {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cell with `id` is selected.
    pub fn is_selected(&self, id: &K) -> bool {
        self.selected.contains(id)
    }

    /// Ids of the selected cells, in no particular order.
    pub fn selected(&self) -> impl Iterator<Item = &K> + '_ {
        self.selected.iter()
    }

    /// Number of selected cells.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Whether `cell` may be selected or deselected by the user.
    pub fn is_valid<C: GridCell<Id = K>>(cell: &C) -> bool {
        !cell.disabled() && cell.selectable()
    }

    /// Valid cells inside the rectangle spanned by `from` and `to`, each
    /// visited once even when it occupies several coordinates.
    pub fn valid_cells<'a, C: GridCell<Id = K>>(
        &self,
        view: GridView<'a, C>,
        from: Coord,
        to: Coord,
    ) -> Vec<&'a C> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for row in from.row.min(to.row)..=from.row.max(to.row) {
            for col in from.col.min(to.col)..=from.col.max(to.col) {
                let Some(cell) = view.data.cell(Coord::new(row, col)) else {
                    continue;
                };
                if seen.insert(cell.id()) && Self::is_valid(cell) {
                    out.push(cell);
                }
            }
        }
        out
    }

    /// Select every valid cell in the rectangle `from..=to`.
    pub fn select<C: GridCell<Id = K>>(&mut self, view: GridView<'_, C>, from: Coord, to: Coord) {
        for cell in self.valid_cells(view, from, to) {
            self.selected.insert(cell.id());
        }
    }

    /// Deselect every valid cell in the rectangle `from..=to`.
    pub fn deselect<C: GridCell<Id = K>>(&mut self, view: GridView<'_, C>, from: Coord, to: Coord) {
        for cell in self.valid_cells(view, from, to) {
            self.selected.remove(&cell.id());
        }
    }

    /// Flip every valid cell in the rectangle `from..=to`.
    pub fn toggle<C: GridCell<Id = K>>(&mut self, view: GridView<'_, C>, from: Coord, to: Coord) {
        for cell in self.valid_cells(view, from, to) {
            let id = cell.id();
            if !self.selected.remove(&id) {
                self.selected.insert(id);
            }
        }
    }

    /// Select every valid cell.
    pub fn select_all<C: GridCell<Id = K>>(&mut self, view: GridView<'_, C>) {
        for cell in view.data.iter().filter(|c| Self::is_valid(*c)) {
            self.selected.insert(cell.id());
        }
    }

    /// Deselect every valid cell.
    ///
    /// Ids whose cell is gone are dropped too; only present disabled or
    /// unselectable cells keep their state.
    pub fn deselect_all<C: GridCell<Id = K>>(&mut self, view: GridView<'_, C>) {
        self.selected
            .retain(|id| view.data.cell_by_id(id).is_some_and(|cell| !Self::is_valid(cell)));
    }

    /// Remove `id` without checks.
    pub fn remove(&mut self, id: &K) -> bool {
        self.selected.remove(id)
    }

    /// Overwrite the selected ids without checks.
    pub fn set_selected(&mut self, ids: impl IntoIterator<Item = K>) {
        self.selected = ids.into_iter().collect();
    }
}
