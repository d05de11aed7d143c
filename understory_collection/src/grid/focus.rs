// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-cell tracking for grids.

use super::data::{Coord, GridData};
use crate::item::GridCell;
use crate::types::{FocusMode, FocusRequest, GridConfig};

/// Borrowed inputs a grid operation runs against.
#[derive(Debug)]
pub struct GridView<'a, C: GridCell> {
    /// Cells and coordinates.
    pub data: &'a GridData<C>,
    /// Grid configuration.
    pub config: &'a GridConfig,
}

impl<C: GridCell> Clone for GridView<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: GridCell> Copy for GridView<'_, C> {}

impl<'a, C: GridCell> GridView<'a, C> {
    /// Create a view.
    pub fn new(data: &'a GridData<C>, config: &'a GridConfig) -> Self {
        Self { data, config }
    }
}

/// Tracks the active cell and the coordinate it was entered at.
///
/// A spanning cell occupies several coordinates. Keeping the exact
/// coordinate lets vertical movement through a wide cell return to the
/// column it started from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridFocus<K> {
    active_cell: Option<K>,
    active_coords: Option<Coord>,
    request: Option<FocusRequest<K>>,
}

impl<K> Default for GridFocus<K> {
    fn default() -> Self {
        Self {
            active_cell: None,
            active_coords: None,
            request: None,
        }
    }
}

impl<K: Clone + Eq + core::hash::Hash + core::fmt::Debug> GridFocus<K> {
    /// Create focus state with no active cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the active cell.
    pub fn active_cell(&self) -> Option<&K> {
        self.active_cell.as_ref()
    }

    /// Coordinate the active cell was entered at.
    pub fn active_coords(&self) -> Option<Coord> {
        self.active_coords
    }

    /// Whether no active cell is recorded.
    pub fn is_state_empty(&self) -> bool {
        self.active_cell.is_none() || self.active_coords.is_none()
    }

    /// Whether the recorded state no longer matches the cells.
    ///
    /// Empty state counts as stale, as does a recorded coordinate that no
    /// longer holds the recorded cell (rows removed, cells reordered).
    pub fn is_state_stale<C: GridCell<Id = K>>(&self, view: GridView<'_, C>) -> bool {
        let (Some(id), Some(coords)) = (&self.active_cell, self.active_coords) else {
            return true;
        };
        view.data.cell(coords).is_none_or(|cell| cell.id() != *id)
    }

    /// Whether the grid as a whole is disabled.
    pub fn is_grid_disabled<C: GridCell<Id = K>>(&self, view: GridView<'_, C>) -> bool {
        view.config.disabled || view.data.iter().all(|cell| cell.disabled())
    }

    /// Whether navigation may land on `cell`.
    pub fn is_focusable<C: GridCell<Id = K>>(&self, view: GridView<'_, C>, cell: &C) -> bool {
        !cell.disabled() || !view.config.skip_disabled
    }

    /// Make the cell with `id` active at its canonical coordinate.
    pub fn focus_cell<C: GridCell<Id = K>>(
        &mut self,
        view: GridView<'_, C>,
        id: &K,
        focus_element: bool,
    ) -> bool {
        match view.data.coords(id) {
            Some(coords) => self.focus_coordinates(view, coords, focus_element),
            None => false,
        }
    }

    /// Make the cell at `coords` active, remembering `coords` exactly.
    pub fn focus_coordinates<C: GridCell<Id = K>>(
        &mut self,
        view: GridView<'_, C>,
        coords: Coord,
        focus_element: bool,
    ) -> bool {
        if self.is_grid_disabled(view) {
            return false;
        }
        let Some(cell) = view.data.cell(coords) else {
            return false;
        };
        if !self.is_focusable(view, cell) {
            return false;
        }
        let id = cell.id();
        tracing::trace!(target: "understory_collection::grid", ?id, row = coords.row, col = coords.col, "active cell changed");
        self.active_cell = Some(id.clone());
        self.active_coords = Some(coords);
        if focus_element {
            self.request = Some(match view.config.focus_mode {
                FocusMode::Roving => FocusRequest::Item(id),
                FocusMode::ActiveDescendant => FocusRequest::Container,
            });
        }
        true
    }

    /// Forget the active cell.
    pub fn clear(&mut self) {
        self.active_cell = None;
        self.active_coords = None;
    }

    /// Tab index of the grid container.
    pub fn grid_tab_index<C: GridCell<Id = K>>(&self, view: GridView<'_, C>) -> i32 {
        if self.is_grid_disabled(view) || view.config.focus_mode == FocusMode::ActiveDescendant {
            0
        } else {
            -1
        }
    }

    /// Tab index of `cell`.
    pub fn cell_tab_index<C: GridCell<Id = K>>(&self, view: GridView<'_, C>, cell: &C) -> i32 {
        if self.is_grid_disabled(view) || view.config.focus_mode == FocusMode::ActiveDescendant {
            return -1;
        }
        if self.active_cell.as_ref() == Some(&cell.id()) { 0 } else { -1 }
    }

    /// Id for the container's `aria-activedescendant`.
    pub fn active_descendant<C: GridCell<Id = K>>(&self, view: GridView<'_, C>) -> Option<K> {
        if view.config.focus_mode == FocusMode::Roving || self.is_grid_disabled(view) {
            return None;
        }
        self.active_cell.clone()
    }

    /// The pending focus request, if any. Draining clears it.
    pub fn take_request(&mut self) -> Option<FocusRequest<K>> {
        self.request.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::data::test_cells::{Cell, square};
    use alloc::vec;

    #[test]
    fn focus_coordinates_keeps_the_exact_coordinate() {
        let data = GridData::new(vec![vec![Cell::new(1).span(1, 3)], vec![Cell::new(2)]]);
        let config = GridConfig::default();
        let view = GridView::new(&data, &config);
        let mut focus = GridFocus::new();
        assert!(focus.focus_coordinates(view, Coord::new(0, 2), true));
        assert_eq!(focus.active_cell(), Some(&1));
        assert_eq!(focus.active_coords(), Some(Coord::new(0, 2)));
        assert!(focus.focus_cell(view, &1, true));
        assert_eq!(focus.active_coords(), Some(Coord::new(0, 0)), "canonical coordinate");
        assert_eq!(focus.take_request(), Some(FocusRequest::Item(1)));
    }

    #[test]
    fn staleness_tracks_the_cell_at_the_coordinate() {
        let mut data = GridData::new(square(2, 2));
        let config = GridConfig::default();
        let mut focus = GridFocus::new();
        assert!(focus.is_state_empty());
        assert!(focus.is_state_stale(GridView::new(&data, &config)));
        focus.focus_cell(GridView::new(&data, &config), &11, false);
        assert!(!focus.is_state_stale(GridView::new(&data, &config)));
        data.set_cells(square(1, 2));
        assert!(focus.is_state_stale(GridView::new(&data, &config)));
    }

    #[test]
    fn disabled_cells_and_tab_indices() {
        let data = GridData::new(vec![vec![Cell::new(1), Cell::new(2).disable()]]);
        let mut config = GridConfig::default();
        let mut focus = GridFocus::new();
        assert!(!focus.focus_cell(GridView::new(&data, &config), &2, true));
        assert!(focus.focus_cell(GridView::new(&data, &config), &1, true));
        let view = GridView::new(&data, &config);
        assert_eq!(focus.grid_tab_index(view), -1);
        assert_eq!(focus.cell_tab_index(view, &Cell::new(1)), 0);
        assert_eq!(focus.active_descendant(view), None);

        config.focus_mode = FocusMode::ActiveDescendant;
        let view = GridView::new(&data, &config);
        assert_eq!(focus.grid_tab_index(view), 0);
        assert_eq!(focus.cell_tab_index(view, &Cell::new(1)), -1);
        assert_eq!(focus.active_descendant(view), Some(1));

        config.disabled = true;
        let view = GridView::new(&data, &config);
        assert!(!focus.focus_cell(view, &1, true));
        assert_eq!(focus.active_descendant(view), None);
    }
}
