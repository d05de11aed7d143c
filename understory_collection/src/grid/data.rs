// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cell matrix with span-aware coordinate mapping.

use alloc::vec::Vec;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::item::GridCell;

/// A logical grid coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Coord {
    /// Create a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Position of a cell in the declared matrix: row and index within the row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct CellRef {
    row: usize,
    index: usize,
}

#[derive(Clone, Debug)]
struct Placement {
    cell: CellRef,
    canonical: Coord,
    coords: SmallVec<[Coord; 4]>,
}

/// A grid's cells and the coordinates they occupy.
///
/// Rows are declared as sequences of cells. Coordinates are assigned
/// row-major: each cell takes the first column of its row not already
/// claimed by a spanning cell from an earlier row, then claims
/// `row_span × col_span` coordinates from there. A coordinate claimed twice
/// stays with the cell that claimed it first.
///
/// Row spans stop at the last declared row and column spans are capped at
/// [`MAX_COL_SPAN`](Self::MAX_COL_SPAN).
#[derive(Clone, Debug)]
pub struct GridData<C: GridCell> {
    cells: Vec<Vec<C>>,
    by_coord: HashMap<Coord, CellRef>,
    placements: HashMap<C::Id, Placement>,
    row_counts: HashMap<usize, usize>,
    col_counts: HashMap<usize, usize>,
    max_rows: usize,
    max_cols: usize,
}

impl<C: GridCell> Default for GridData<C> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<C: GridCell> GridData<C> {
    /// Widest column span a cell may claim, as for HTML table cells.
    pub const MAX_COL_SPAN: usize = 1_000;

    /// Build the coordinate map for `cells`.
    pub fn new(cells: Vec<Vec<C>>) -> Self {
        let mut data = Self {
            cells: Vec::new(),
            by_coord: HashMap::new(),
            placements: HashMap::new(),
            row_counts: HashMap::new(),
            col_counts: HashMap::new(),
            max_rows: 0,
            max_cols: 0,
        };
        data.set_cells(cells);
        data
    }

    /// Replace the cells and rebuild every coordinate.
    pub fn set_cells(&mut self, cells: Vec<Vec<C>>) {
        self.cells = cells;
        self.by_coord.clear();
        self.placements.clear();
        self.row_counts.clear();
        self.col_counts.clear();
        self.max_rows = 0;
        self.max_cols = 0;

        let rows = self.cells.len();
        for (row, declared) in self.cells.iter().enumerate() {
            let mut col = 0;
            for (index, cell) in declared.iter().enumerate() {
                while self.by_coord.contains_key(&Coord::new(row, col)) {
                    col += 1;
                }
                let canonical = Coord::new(row, col);
                let cell_ref = CellRef { row, index };
                let col_span = cell.col_span().clamp(1, Self::MAX_COL_SPAN);
                let row_span = cell.row_span().clamp(1, rows - row);
                let mut coords = SmallVec::new();
                for r in row..row + row_span {
                    for c in col..col.saturating_add(col_span) {
                        let coord = Coord::new(r, c);
                        if self.by_coord.contains_key(&coord) {
                            continue;
                        }
                        self.by_coord.insert(coord, cell_ref);
                        *self.row_counts.entry(r).or_default() += 1;
                        *self.col_counts.entry(c).or_default() += 1;
                        self.max_rows = self.max_rows.max(r + 1);
                        self.max_cols = self.max_cols.max(c + 1);
                        coords.push(coord);
                    }
                }
                self.placements.insert(
                    cell.id(),
                    Placement {
                        cell: cell_ref,
                        canonical,
                        coords,
                    },
                );
                col = col.saturating_add(col_span);
            }
        }
    }

    /// The declared rows of cells.
    pub fn rows(&self) -> &[Vec<C>] {
        &self.cells
    }

    /// Iterate every cell in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &C> + '_ {
        self.cells.iter().flatten()
    }

    /// The cell occupying `coord`.
    pub fn cell(&self, coord: Coord) -> Option<&C> {
        self.by_coord.get(&coord).map(|r| self.resolve(*r))
    }

    /// The cell with `id`.
    pub fn cell_by_id(&self, id: &C::Id) -> Option<&C> {
        self.placements.get(id).map(|p| self.resolve(p.cell))
    }

    /// Whether a cell with `id` exists.
    pub fn contains(&self, id: &C::Id) -> bool {
        self.placements.contains_key(id)
    }

    /// Canonical (top-left) coordinate of the cell with `id`.
    pub fn coords(&self, id: &C::Id) -> Option<Coord> {
        self.placements.get(id).map(|p| p.canonical)
    }

    /// Every coordinate the cell with `id` occupies, row-major.
    pub fn all_coords(&self, id: &C::Id) -> &[Coord] {
        match self.placements.get(id) {
            Some(p) => &p.coords,
            None => &[],
        }
    }

    /// Number of declared rows.
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of rows once spans are applied.
    pub fn max_row_count(&self) -> usize {
        self.max_rows
    }

    /// Number of columns of the widest row once spans are applied.
    pub fn max_col_count(&self) -> usize {
        self.max_cols
    }

    /// Number of occupied coordinates in `row`.
    pub fn col_count(&self, row: usize) -> usize {
        self.row_counts.get(&row).copied().unwrap_or(0)
    }

    /// Number of occupied coordinates in `col`.
    pub fn row_count_in_col(&self, col: usize) -> usize {
        self.col_counts.get(&col).copied().unwrap_or(0)
    }

    /// Whether the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    fn resolve(&self, r: CellRef) -> &C {
        &self.cells[r.row][r.index]
    }
}

#[cfg(test)]
pub(crate) mod test_cells {
    //! Grid cells shared by the unit tests.

    use super::*;
    use crate::item::Focusable;

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub(crate) struct Cell {
        pub(crate) id: u32,
        pub(crate) rows: usize,
        pub(crate) cols: usize,
        pub(crate) disabled: bool,
        pub(crate) selectable: bool,
    }

    impl Cell {
        pub(crate) fn new(id: u32) -> Self {
            Self {
                id,
                rows: 1,
                cols: 1,
                disabled: false,
                selectable: true,
            }
        }

        pub(crate) fn span(mut self, rows: usize, cols: usize) -> Self {
            self.rows = rows;
            self.cols = cols;
            self
        }

        pub(crate) fn disable(mut self) -> Self {
            self.disabled = true;
            self
        }

        pub(crate) fn unselectable(mut self) -> Self {
            self.selectable = false;
            self
        }
    }

    impl Focusable for Cell {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }

        fn disabled(&self) -> bool {
            self.disabled
        }
    }

    impl GridCell for Cell {
        fn row_span(&self) -> usize {
            self.rows
        }

        fn col_span(&self) -> usize {
            self.cols
        }

        fn selectable(&self) -> bool {
            self.selectable
        }
    }

    /// A `rows × cols` grid of plain cells with ids `row * 10 + col`.
    pub(crate) fn square(rows: u32, cols: u32) -> Vec<Vec<Cell>> {
        (0..rows)
            .map(|r| (0..cols).map(|c| Cell::new(r * 10 + c)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::test_cells::{Cell, square};
    use super::*;
    use alloc::vec;

    #[test]
    fn oversized_spans_are_bounded() {
        let data = GridData::new(vec![
            vec![Cell::new(1).span(usize::MAX, usize::MAX), Cell::new(2)],
            vec![Cell::new(3)],
        ]);
        let cap = GridData::<Cell>::MAX_COL_SPAN;
        assert_eq!(data.all_coords(&1).len(), 2 * cap);
        assert_eq!(data.coords(&2), Some(Coord::new(0, cap)));
        assert_eq!(data.coords(&3), Some(Coord::new(1, cap)));
        assert_eq!(data.max_row_count(), 2, "row span stops at the last row");
        assert_eq!(data.max_col_count(), cap + 1);
    }

    #[test]
    fn spanning_cell_occupies_its_rectangle() {
        let data = GridData::new(vec![
            vec![Cell::new(1).span(2, 2), Cell::new(2)],
            vec![Cell::new(3)],
        ]);
        let expected = [
            Coord::new(0, 0),
            Coord::new(0, 1),
            Coord::new(1, 0),
            Coord::new(1, 1),
        ];
        assert_eq!(data.all_coords(&1), expected);
        for coord in expected {
            assert_eq!(data.cell(coord).map(|c| c.id), Some(1));
        }
        assert_eq!(data.coords(&2), Some(Coord::new(0, 2)));
        assert_eq!(data.coords(&3), Some(Coord::new(1, 2)), "skips claimed columns");
        assert_eq!(data.max_row_count(), 2);
        assert_eq!(data.max_col_count(), 3);
        assert_eq!(data.col_count(1), 3);
        assert_eq!(data.row_count_in_col(2), 2);
    }

    #[test]
    fn overlapping_spans_keep_the_earlier_claim() {
        let data = GridData::new(vec![
            vec![Cell::new(1), Cell::new(2).span(2, 1)],
            vec![Cell::new(3).span(1, 2)],
        ]);
        // Cell 3 starts at (1, 0) and wants (1, 1), which cell 2 claimed.
        assert_eq!(data.cell(Coord::new(1, 1)).map(|c| c.id), Some(2));
        assert_eq!(data.all_coords(&3), [Coord::new(1, 0)]);
    }

    #[test]
    fn ragged_rows_and_lookups() {
        let data = GridData::new(vec![vec![Cell::new(1), Cell::new(2)], vec![Cell::new(3)]]);
        assert_eq!(data.row_count(), 2);
        assert_eq!(data.col_count(0), 2);
        assert_eq!(data.col_count(1), 1);
        assert!(data.cell(Coord::new(1, 1)).is_none());
        assert!(data.cell(Coord::new(9, 9)).is_none());
        assert_eq!(data.cell_by_id(&3).map(|c| c.id), Some(3));
        assert!(data.all_coords(&42).is_empty());
    }

    #[test]
    fn set_cells_rebuilds() {
        let mut data = GridData::new(square(3, 3));
        assert_eq!(data.max_row_count(), 3);
        data.set_cells(square(1, 2));
        assert_eq!(data.max_row_count(), 1);
        assert_eq!(data.max_col_count(), 2);
        assert!(!data.contains(&20));
        assert_eq!(data.iter().count(), 2);
    }
}
