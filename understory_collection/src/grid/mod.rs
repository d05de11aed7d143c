// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-dimensional collections with spanning cells.
//!
//! [`Grid`] owns its cells (as rows) and composes [`GridFocus`],
//! [`GridNavigation`] and [`GridSelection`] over a [`GridData`] coordinate
//! map.
//!
//! ```
//! use understory_collection::{Coord, Focusable, Grid, GridCell, GridConfig};
//!
//! #[derive(Debug)]
//! struct Day(u32);
//!
//! impl Focusable for Day {
//!     type Id = u32;
//!     fn id(&self) -> u32 { self.0 }
//! }
//! impl GridCell for Day {}
//!
//! let weeks = (0..2).map(|w| (1..=7).map(|d| Day(w * 7 + d)).collect()).collect();
//! let mut grid = Grid::new(weeks, GridConfig::default());
//! grid.set_default_state();
//! assert!(grid.down());
//! assert_eq!(grid.active_cell(), Some(&8));
//! assert!(grid.right());
//! assert_eq!(grid.active_coords(), Some(Coord::new(1, 1)));
//! ```

mod data;
mod focus;
mod keys;
mod navigation;
mod selection;

use alloc::vec::Vec;

pub use data::{Coord, GridData};
pub use focus::{GridFocus, GridView};
pub use navigation::{Direction, GridNavigation};
pub use selection::GridSelection;

use crate::item::GridCell;
use crate::types::{FocusRequest, GridConfig, WrapStrategy};
use crate::violation::{Violation, report};

/// A navigable, selectable grid.
#[derive(Clone, Debug)]
pub struct Grid<C: GridCell> {
    /// Grid configuration; may be changed between calls.
    pub config: GridConfig,
    data: GridData<C>,
    /// Active-cell tracking.
    pub focus: GridFocus<C::Id>,
    /// Directional movement.
    pub navigation: GridNavigation,
    /// Selected cells.
    pub selection: GridSelection<C::Id>,
    selection_anchor: Option<Coord>,
    last_range: Option<(Coord, Coord)>,
}

impl<C: GridCell> Grid<C> {
    /// Create a grid over `rows` of cells.
    pub fn new(rows: Vec<Vec<C>>, config: GridConfig) -> Self {
        Self {
            config,
            data: GridData::new(rows),
            focus: GridFocus::new(),
            navigation: GridNavigation::new(),
            selection: GridSelection::new(),
            selection_anchor: None,
            last_range: None,
        }
    }

    /// The cells and their coordinates.
    pub fn data(&self) -> &GridData<C> {
        &self.data
    }

    /// Replace the cells.
    ///
    /// The active state may become stale; call
    /// [`reset_state`](Self::reset_state) afterwards.
    pub fn set_cells(&mut self, rows: Vec<Vec<C>>) {
        self.data.set_cells(rows);
        self.last_range = None;
    }

    /// A view of the cells under this grid's configuration.
    pub fn view(&self) -> GridView<'_, C> {
        GridView::new(&self.data, &self.config)
    }

    /// Id of the active cell.
    pub fn active_cell(&self) -> Option<&C::Id> {
        self.focus.active_cell()
    }

    /// Coordinate the active cell was entered at.
    pub fn active_coords(&self) -> Option<Coord> {
        self.focus.active_coords()
    }

    /// Whether no active cell is recorded.
    pub fn is_state_empty(&self) -> bool {
        self.focus.is_state_empty()
    }

    /// Whether the active state no longer matches the cells.
    pub fn is_state_stale(&self) -> bool {
        self.focus.is_state_stale(self.view())
    }

    /// Whether the grid as a whole is disabled.
    pub fn is_grid_disabled(&self) -> bool {
        self.focus.is_grid_disabled(self.view())
    }

    /// Tab index of the grid container.
    pub fn tab_index(&self) -> i32 {
        self.focus.grid_tab_index(self.view())
    }

    /// Tab index of `cell`.
    pub fn cell_tab_index(&self, cell: &C) -> i32 {
        self.focus.cell_tab_index(self.view(), cell)
    }

    /// Id for the container's `aria-activedescendant`.
    pub fn active_descendant(&self) -> Option<C::Id> {
        self.focus.active_descendant(self.view())
    }

    /// The pending focus request, if any. Draining clears it.
    pub fn take_focus_request(&mut self) -> Option<FocusRequest<C::Id>> {
        self.focus.take_request()
    }

    /// Whether the cell with `id` is selected.
    pub fn is_selected(&self, id: &C::Id) -> bool {
        self.selection.is_selected(id)
    }

    /// Make the first selected focusable cell active, else the first
    /// focusable cell, without requesting focus.
    pub fn set_default_state(&mut self) -> bool {
        let view = GridView::new(&self.data, &self.config);
        let selected = view
            .data
            .iter()
            .find(|cell| self.selection.is_selected(&cell.id()) && self.focus.is_focusable(view, *cell))
            .map(|cell| cell.id());
        let moved = match selected {
            Some(id) => self.focus.focus_cell(view, &id, false),
            None => self.navigation.first(&mut self.focus, view, None, false),
        };
        if moved {
            self.reset_anchor();
        }
        moved
    }

    /// Repair stale active state.
    ///
    /// Tries, in order, the same cell at its current coordinate, the same
    /// coordinate with whatever cell now occupies it, and the first focusable
    /// cell. Returns whether state changed.
    pub fn reset_state(&mut self) -> bool {
        if !self.is_state_stale() {
            return false;
        }
        let view = GridView::new(&self.data, &self.config);
        if let Some(id) = self.focus.active_cell().cloned()
            && self.focus.focus_cell(view, &id, false)
        {
            tracing::debug!(target: "understory_collection::grid", ?id, "stale state repaired: same cell");
            self.reset_anchor();
            return true;
        }
        if let Some(coords) = self.focus.active_coords()
            && self.focus.focus_coordinates(view, coords, false)
        {
            tracing::debug!(target: "understory_collection::grid", row = coords.row, col = coords.col, "stale state repaired: same coordinates");
            self.reset_anchor();
            return true;
        }
        if self.navigation.first(&mut self.focus, view, None, false) {
            tracing::debug!(target: "understory_collection::grid", "stale state repaired: first cell");
            self.reset_anchor();
            return true;
        }
        self.focus.clear();
        false
    }

    /// Move up.
    pub fn up(&mut self) -> bool {
        let wrap = self.config.col_wrap;
        self.step(Direction::Up, wrap)
    }

    /// Move down.
    pub fn down(&mut self) -> bool {
        let wrap = self.config.col_wrap;
        self.step(Direction::Down, wrap)
    }

    /// Move left.
    pub fn left(&mut self) -> bool {
        let wrap = self.config.row_wrap;
        self.step(Direction::Left, wrap)
    }

    /// Move right.
    pub fn right(&mut self) -> bool {
        let wrap = self.config.row_wrap;
        self.step(Direction::Right, wrap)
    }

    /// Move to the first focusable cell of the grid.
    pub fn first(&mut self) -> bool {
        let view = GridView::new(&self.data, &self.config);
        let moved = self.navigation.first(&mut self.focus, view, None, true);
        self.after_move(moved)
    }

    /// Move to the last focusable cell of the grid.
    pub fn last(&mut self) -> bool {
        let view = GridView::new(&self.data, &self.config);
        let moved = self.navigation.last(&mut self.focus, view, None, true);
        self.after_move(moved)
    }

    /// Move to the first focusable cell of the active row.
    pub fn first_in_row(&mut self) -> bool {
        let Some(coords) = self.active_coords() else {
            return false;
        };
        let view = GridView::new(&self.data, &self.config);
        let moved = self.navigation.first(&mut self.focus, view, Some(coords.row), true);
        self.after_move(moved)
    }

    /// Move to the last focusable cell of the active row.
    pub fn last_in_row(&mut self) -> bool {
        let Some(coords) = self.active_coords() else {
            return false;
        };
        let view = GridView::new(&self.data, &self.config);
        let moved = self.navigation.last(&mut self.focus, view, Some(coords.row), true);
        self.after_move(moved)
    }

    /// Move to the cell with `id`.
    pub fn goto_cell(&mut self, id: &C::Id) -> bool {
        let view = GridView::new(&self.data, &self.config);
        let moved = self.navigation.goto_cell(&mut self.focus, view, id, true);
        self.after_move(moved)
    }

    /// Move to the cell at `coords`.
    pub fn goto_coords(&mut self, coords: Coord) -> bool {
        let view = GridView::new(&self.data, &self.config);
        let moved = self.navigation.goto_coords(&mut self.focus, view, coords, true);
        self.after_move(moved)
    }

    /// Extend the range selection one row up from its far corner.
    pub fn range_select_up(&mut self) {
        self.range_step(Direction::Up);
    }

    /// Extend the range selection one row down from its far corner.
    pub fn range_select_down(&mut self) {
        self.range_step(Direction::Down);
    }

    /// Extend the range selection one column left from its far corner.
    pub fn range_select_left(&mut self) {
        self.range_step(Direction::Left);
    }

    /// Extend the range selection one column right from its far corner.
    pub fn range_select_right(&mut self) {
        self.range_step(Direction::Right);
    }

    /// Select the rectangle between the active cell and the cell with `id`.
    pub fn range_select(&mut self, id: &C::Id) {
        if let Some(coords) = self.data.coords(id) {
            self.range_select_coords(coords);
        }
    }

    /// Select the rectangle covering both the active cell and the cell at
    /// `coords`, including every coordinate either cell spans.
    ///
    /// Cells selected by the previous range but outside this one are
    /// deselected. The active cell does not move.
    pub fn range_select_coords(&mut self, coords: Coord) {
        if !self.config.enable_selection || !self.config.multi {
            return;
        }
        let Some(active) = self.focus.active_cell().cloned() else {
            return;
        };
        let Some(far) = self.data.cell(coords).map(|c| c.id()) else {
            return;
        };
        let corners = self
            .data
            .all_coords(&active)
            .iter()
            .chain(self.data.all_coords(&far))
            .fold(None, |acc: Option<(Coord, Coord)>, c| {
                Some(match acc {
                    None => (*c, *c),
                    Some((lo, hi)) => (
                        Coord::new(lo.row.min(c.row), lo.col.min(c.col)),
                        Coord::new(hi.row.max(c.row), hi.col.max(c.col)),
                    ),
                })
            });
        let Some((from, to)) = corners else {
            return;
        };

        let view = GridView::new(&self.data, &self.config);
        if let Some((old_from, old_to)) = self.last_range {
            let keep = self.selection.valid_cells(view, from, to);
            let outside: Vec<C::Id> = self
                .selection
                .valid_cells(view, old_from, old_to)
                .into_iter()
                .map(|c| c.id())
                .filter(|id| !keep.iter().any(|k| k.id() == *id))
                .collect();
            for id in &outside {
                self.selection.remove(id);
            }
        }
        self.selection.select(view, from, to);
        self.selection_anchor = Some(coords);
        self.last_range = Some((from, to));
    }

    /// Select the cell at `coords` (default: active coordinate).
    ///
    /// A single-select grid drops its other cells first.
    pub fn select(&mut self, coords: Option<Coord>) -> bool {
        let Some(coords) = coords.or(self.active_coords()) else {
            return false;
        };
        if !self.config.enable_selection {
            return false;
        }
        let Some(cell) = self.data.cell(coords) else {
            return false;
        };
        if !GridSelection::<C::Id>::is_valid(cell) || self.selection.is_selected(&cell.id()) {
            return false;
        }
        let view = GridView::new(&self.data, &self.config);
        if !self.config.multi {
            self.selection.deselect_all(view);
        }
        self.selection.select(view, coords, coords);
        true
    }

    /// Deselect the cell at `coords` (default: active coordinate).
    pub fn deselect(&mut self, coords: Option<Coord>) -> bool {
        let Some(coords) = coords.or(self.active_coords()) else {
            return false;
        };
        let Some(id) = self.data.cell(coords).map(|c| c.id()) else {
            return false;
        };
        if !self.selection.is_selected(&id) {
            return false;
        }
        let view = GridView::new(&self.data, &self.config);
        self.selection.deselect(view, coords, coords);
        !self.selection.is_selected(&id)
    }

    /// Toggle the cell at `coords` (default: active coordinate).
    pub fn toggle(&mut self, coords: Option<Coord>) -> bool {
        let Some(coords) = coords.or(self.active_coords()) else {
            return false;
        };
        let selected = self.data.cell(coords).is_some_and(|c| self.selection.is_selected(&c.id()));
        if selected {
            self.deselect(Some(coords))
        } else {
            self.select(Some(coords))
        }
    }

    /// Make the active cell the only selected cell.
    pub fn select_one(&mut self) -> bool {
        if !self.config.enable_selection {
            return false;
        }
        let Some(coords) = self.active_coords() else {
            return false;
        };
        if !self.data.cell(coords).is_some_and(GridSelection::<C::Id>::is_valid) {
            return false;
        }
        let view = GridView::new(&self.data, &self.config);
        self.selection.deselect_all(view);
        self.selection.select(view, coords, coords);
        true
    }

    /// Select every cell of the active row (multi-select only).
    pub fn select_row(&mut self) {
        let Some(coords) = self.active_coords() else {
            return;
        };
        let last_col = self.data.max_col_count().saturating_sub(1);
        self.select_rect(Coord::new(coords.row, 0), Coord::new(coords.row, last_col));
    }

    /// Select every cell of the active column (multi-select only).
    pub fn select_col(&mut self) {
        let Some(coords) = self.active_coords() else {
            return;
        };
        let last_row = self.data.max_row_count().saturating_sub(1);
        self.select_rect(Coord::new(0, coords.col), Coord::new(last_row, coords.col));
    }

    /// Select every valid cell (multi-select only).
    pub fn select_all(&mut self) {
        if !self.config.enable_selection || !self.config.multi {
            return;
        }
        let view = GridView::new(&self.data, &self.config);
        self.selection.select_all(view);
    }

    /// Deselect every valid cell.
    pub fn deselect_all(&mut self) {
        let view = GridView::new(&self.data, &self.config);
        self.selection.deselect_all(view);
    }

    /// Report state a host should not produce.
    pub fn validate(&self) -> Vec<Violation> {
        let mut found = Vec::new();
        if !self.config.multi && self.selection.len() > 1 {
            found.push(Violation::multiple_selected(self.selection.selected()));
        }
        if self.config.skip_disabled {
            found.extend(
                self.data
                    .iter()
                    .filter(|cell| cell.disabled() && self.selection.is_selected(&cell.id()))
                    .map(|cell| Violation::unreachable(&cell.id())),
            );
        }
        report("grid", found)
    }

    fn step(&mut self, direction: Direction, wrap: WrapStrategy) -> bool {
        let view = GridView::new(&self.data, &self.config);
        let moved = self
            .navigation
            .advance(&mut self.focus, view, direction, wrap, true);
        self.after_move(moved)
    }

    fn after_move(&mut self, moved: bool) -> bool {
        if moved {
            if self.config.follows_focus() {
                self.select_one();
            }
            self.reset_anchor();
        }
        moved
    }

    fn reset_anchor(&mut self) {
        self.selection_anchor = self.active_coords();
        self.last_range = None;
    }

    fn range_step(&mut self, direction: Direction) {
        let Some(anchor) = self.selection_anchor.or(self.active_coords()) else {
            return;
        };
        let Ok(from) = anchor_point(anchor) else {
            return;
        };
        let view = GridView::new(&self.data, &self.config);
        let next =
            self.navigation
                .peek_directional(&self.focus, view, from, direction, WrapStrategy::NoWrap, true);
        if let Some(coords) = next {
            self.range_select_coords(coords);
        }
    }

    fn select_rect(&mut self, from: Coord, to: Coord) {
        if !self.config.enable_selection || !self.config.multi {
            return;
        }
        let view = GridView::new(&self.data, &self.config);
        self.selection.select(view, from, to);
    }
}

fn anchor_point(coords: Coord) -> Result<(isize, isize), core::num::TryFromIntError> {
    Ok((isize::try_from(coords.row)?, isize::try_from(coords.col)?))
}

#[cfg(test)]
mod tests {
    use super::data::test_cells::{Cell, square};
    use super::*;
    use crate::types::SelectionMode;
    use alloc::vec;

    fn selectable(rows: Vec<Vec<Cell>>, multi: bool) -> Grid<Cell> {
        let mut grid = Grid::new(
            rows,
            GridConfig {
                multi,
                enable_selection: true,
                selection_mode: SelectionMode::Explicit,
                ..GridConfig::default()
            },
        );
        assert!(grid.set_default_state());
        grid
    }

    fn selected(grid: &Grid<Cell>) -> Vec<u32> {
        let mut ids: Vec<u32> = grid.selection.selected().copied().collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn moves_use_the_matching_wrap_policy() {
        let mut grid = Grid::new(
            square(2, 2),
            GridConfig {
                row_wrap: WrapStrategy::NoWrap,
                col_wrap: WrapStrategy::Loop,
                ..GridConfig::default()
            },
        );
        grid.set_default_state();
        assert!(grid.right());
        assert!(!grid.right(), "rows do not wrap");
        assert!(grid.up(), "columns loop");
        assert_eq!(grid.active_cell(), Some(&11));
        assert!(grid.first());
        assert_eq!(grid.active_cell(), Some(&0));
        assert!(grid.last());
        assert_eq!(grid.active_cell(), Some(&11));
        assert!(grid.first_in_row());
        assert_eq!(grid.active_cell(), Some(&10));
        assert!(grid.last_in_row());
        assert_eq!(grid.active_cell(), Some(&11));
    }

    #[test]
    fn vertical_moves_remember_the_column_inside_a_span() {
        let mut grid = Grid::new(
            vec![
                vec![Cell::new(1), Cell::new(2), Cell::new(3)],
                vec![Cell::new(4).span(1, 3)],
                vec![Cell::new(5), Cell::new(6), Cell::new(7)],
            ],
            GridConfig::default(),
        );
        assert!(grid.goto_cell(&3));
        assert!(grid.down());
        assert_eq!(grid.active_cell(), Some(&4));
        assert_eq!(grid.active_coords(), Some(Coord::new(1, 2)));
        assert!(grid.down());
        assert_eq!(grid.active_cell(), Some(&7));
    }

    #[test]
    fn follow_mode_selects_on_move() {
        let mut grid = Grid::new(
            square(2, 2),
            GridConfig {
                enable_selection: true,
                ..GridConfig::default()
            },
        );
        grid.set_default_state();
        grid.down();
        assert_eq!(selected(&grid), [10]);
        grid.right();
        assert_eq!(selected(&grid), [11]);
    }

    #[test]
    fn range_selection_grows_and_shrinks_from_the_anchor() {
        let mut grid = selectable(square(3, 3), true);
        grid.range_select_right();
        grid.range_select_down();
        assert_eq!(selected(&grid), [0, 1, 10, 11]);
        assert_eq!(grid.active_cell(), Some(&0), "focus stays put");
        grid.range_select_left();
        assert_eq!(selected(&grid), [0, 10]);
        grid.down();
        grid.range_select_down();
        assert_eq!(selected(&grid), [0, 10, 20], "a plain move starts a new range");
    }

    #[test]
    fn range_covers_whole_spanning_cells() {
        let mut grid = selectable(
            vec![
                vec![Cell::new(1), Cell::new(2).span(2, 1), Cell::new(3)],
                vec![Cell::new(4), Cell::new(6)],
            ],
            true,
        );
        // (0, 0) to the wide cell at (0, 1) covers rows 0..=1 because it spans both.
        grid.range_select(&2);
        assert_eq!(selected(&grid), [1, 2, 4]);
    }

    #[test]
    fn row_column_and_all() {
        let mut grid = selectable(square(2, 3), true);
        grid.goto_coords(Coord::new(1, 1));
        grid.select_row();
        assert_eq!(selected(&grid), [10, 11, 12]);
        grid.deselect_all();
        grid.select_col();
        assert_eq!(selected(&grid), [1, 11]);
        grid.select_all();
        assert_eq!(grid.selection.len(), 6);
    }

    #[test]
    fn single_select_replaces() {
        let mut grid = selectable(square(1, 3), false);
        assert!(grid.select(None));
        assert!(grid.select(Some(Coord::new(0, 2))));
        assert_eq!(selected(&grid), [2]);
        assert!(grid.toggle(Some(Coord::new(0, 2))));
        assert!(selected(&grid).is_empty());
        grid.select_row();
        assert!(selected(&grid).is_empty(), "rows need multi-select");
    }

    #[test]
    fn stale_state_repair_ladder() {
        let mut grid = Grid::new(square(3, 3), GridConfig::default());
        grid.goto_cell(&22);
        assert!(!grid.reset_state(), "fresh state needs no repair");

        // Same cell, new coordinate.
        grid.set_cells(vec![vec![Cell::new(22), Cell::new(0)]]);
        assert!(grid.is_state_stale());
        assert!(grid.reset_state());
        assert_eq!(grid.active_coords(), Some(Coord::new(0, 0)));

        // Cell gone, coordinate still occupied.
        grid.goto_cell(&0);
        grid.set_cells(vec![vec![Cell::new(5), Cell::new(6)]]);
        assert!(grid.reset_state());
        assert_eq!(grid.active_cell(), Some(&6));

        // Both gone: first focusable cell.
        grid.set_cells(vec![vec![Cell::new(9).disable(), Cell::new(8)]]);
        grid.goto_cell(&8);
        grid.set_cells(vec![vec![Cell::new(7)]]);
        assert!(grid.reset_state());
        assert_eq!(grid.active_cell(), Some(&7));
    }

    #[test]
    fn validate_reports_violations() {
        let mut grid = Grid::new(
            vec![vec![Cell::new(1), Cell::new(2).disable()]],
            GridConfig::default(),
        );
        grid.selection.set_selected([1, 2]);
        let found = grid.validate();
        assert_eq!(found.len(), 2);
        assert_eq!(found[1], Violation::unreachable(&2_u32));
    }
}
