// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directional movement across a grid.

use super::data::Coord;
use super::focus::{GridFocus, GridView};
use crate::item::GridCell;
use crate::types::WrapStrategy;

/// A unit step along one axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward row zero.
    Up,
    /// Away from row zero.
    Down,
    /// Toward column zero.
    Left,
    /// Away from column zero.
    Right,
}

impl Direction {
    fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// Moves the active cell between coordinates.
///
/// Each step moves one coordinate. Holes (coordinates no cell occupies) and
/// further coordinates of the cell being left are stepped over, and so are
/// cells that are not focusable. Every walk is bounded by the grid's area.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GridNavigation;

impl GridNavigation {
    /// Create grid navigation.
    pub fn new() -> Self {
        Self
    }

    /// Coordinate reached by walking from `from` in `direction`.
    ///
    /// `from` may lie one step outside the grid, which is how
    /// [`peek_first`](Self::peek_first) and [`peek_last`](Self::peek_last)
    /// start their walks. With `allow_disabled`, disabled cells count as
    /// targets.
    pub fn peek_directional<C: GridCell>(
        &self,
        focus: &GridFocus<C::Id>,
        view: GridView<'_, C>,
        from: (isize, isize),
        direction: Direction,
        wrap: WrapStrategy,
        allow_disabled: bool,
    ) -> Option<Coord> {
        let rows = isize::try_from(view.data.max_row_count()).ok()?;
        let cols = isize::try_from(view.data.max_col_count()).ok()?;
        if rows == 0 || cols == 0 {
            return None;
        }
        let source = to_coord(from).and_then(|c| view.data.cell(c)).map(|c| c.id());
        let (dr, dc) = direction.delta();
        let (mut row, mut col) = from;
        for _ in 0..rows * cols {
            row += dr;
            col += dc;
            match wrap {
                WrapStrategy::NoWrap => {
                    if !(0..rows).contains(&row) || !(0..cols).contains(&col) {
                        return None;
                    }
                }
                WrapStrategy::Loop => {
                    row = row.rem_euclid(rows);
                    col = col.rem_euclid(cols);
                }
                WrapStrategy::Continuous => {
                    if !(0..cols).contains(&col) {
                        col = col.rem_euclid(cols);
                        row += dc;
                    }
                    if !(0..rows).contains(&row) {
                        row = row.rem_euclid(rows);
                        col = (col + dr).rem_euclid(cols);
                    }
                }
            }
            let Some(coord) = to_coord((row, col)) else {
                continue;
            };
            let Some(cell) = view.data.cell(coord) else {
                continue;
            };
            if source.as_ref() == Some(&cell.id()) {
                continue;
            }
            if allow_disabled || focus.is_focusable(view, cell) {
                return Some(coord);
            }
        }
        None
    }

    /// Coordinate one move away from the active coordinate.
    pub fn peek<C: GridCell>(
        &self,
        focus: &GridFocus<C::Id>,
        view: GridView<'_, C>,
        direction: Direction,
        wrap: WrapStrategy,
    ) -> Option<Coord> {
        let from = focus.active_coords()?;
        self.peek_directional(focus, view, from_coord(from), direction, wrap, false)
    }

    /// First focusable coordinate of `row`, or of the whole grid.
    pub fn peek_first<C: GridCell>(
        &self,
        focus: &GridFocus<C::Id>,
        view: GridView<'_, C>,
        row: Option<usize>,
    ) -> Option<Coord> {
        let (from, wrap) = match row {
            Some(r) => ((isize::try_from(r).ok()?, -1), WrapStrategy::NoWrap),
            None => ((0, -1), WrapStrategy::Continuous),
        };
        self.peek_directional(focus, view, from, Direction::Right, wrap, false)
    }

    /// Last focusable coordinate of `row`, or of the whole grid.
    pub fn peek_last<C: GridCell>(
        &self,
        focus: &GridFocus<C::Id>,
        view: GridView<'_, C>,
        row: Option<usize>,
    ) -> Option<Coord> {
        let cols = isize::try_from(view.data.max_col_count()).ok()?;
        let last_row = view.data.max_row_count().checked_sub(1)?;
        let (from, wrap) = match row {
            Some(r) => ((isize::try_from(r).ok()?, cols), WrapStrategy::NoWrap),
            None => ((isize::try_from(last_row).ok()?, cols), WrapStrategy::Continuous),
        };
        self.peek_directional(focus, view, from, Direction::Left, wrap, false)
    }

    /// Move one step in `direction`. Returns whether the active cell moved.
    ///
    /// With no active cell, moves to the first focusable cell instead.
    pub fn advance<C: GridCell>(
        &self,
        focus: &mut GridFocus<C::Id>,
        view: GridView<'_, C>,
        direction: Direction,
        wrap: WrapStrategy,
        focus_element: bool,
    ) -> bool {
        if focus.is_state_empty() {
            return self.first(focus, view, None, focus_element);
        }
        match self.peek(focus, view, direction, wrap) {
            Some(coords) => focus.focus_coordinates(view, coords, focus_element),
            None => false,
        }
    }

    /// Move to the first focusable cell of `row`, or of the whole grid.
    pub fn first<C: GridCell>(
        &self,
        focus: &mut GridFocus<C::Id>,
        view: GridView<'_, C>,
        row: Option<usize>,
        focus_element: bool,
    ) -> bool {
        match self.peek_first(focus, view, row) {
            Some(coords) => focus.focus_coordinates(view, coords, focus_element),
            None => false,
        }
    }

    /// Move to the last focusable cell of `row`, or of the whole grid.
    pub fn last<C: GridCell>(
        &self,
        focus: &mut GridFocus<C::Id>,
        view: GridView<'_, C>,
        row: Option<usize>,
        focus_element: bool,
    ) -> bool {
        match self.peek_last(focus, view, row) {
            Some(coords) => focus.focus_coordinates(view, coords, focus_element),
            None => false,
        }
    }

    /// Move to the cell with `id`.
    pub fn goto_cell<C: GridCell>(
        &self,
        focus: &mut GridFocus<C::Id>,
        view: GridView<'_, C>,
        id: &C::Id,
        focus_element: bool,
    ) -> bool {
        focus.focus_cell(view, id, focus_element)
    }

    /// Move to the cell at `coords`.
    pub fn goto_coords<C: GridCell>(
        &self,
        focus: &mut GridFocus<C::Id>,
        view: GridView<'_, C>,
        coords: Coord,
        focus_element: bool,
    ) -> bool {
        focus.focus_coordinates(view, coords, focus_element)
    }
}

fn to_coord((row, col): (isize, isize)) -> Option<Coord> {
    Some(Coord::new(usize::try_from(row).ok()?, usize::try_from(col).ok()?))
}

fn from_coord(coord: Coord) -> (isize, isize) {
    (
        isize::try_from(coord.row).unwrap_or(isize::MAX),
        isize::try_from(coord.col).unwrap_or(isize::MAX),
    )
}
