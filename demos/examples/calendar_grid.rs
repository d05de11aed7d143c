// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A date-picker style grid with a spanning header cell.
//!
//! This example shows:
//! - building a `Grid` from rows of cells, one of which spans several columns,
//! - continuous wrapping along rows (Right at the end of a week moves to the
//!   next week) and no wrapping along columns,
//! - Shift+arrow range selection and `reset_state` after the cells change.
//!
//! Run:
//! - `cargo run -p understory_demos --example calendar_grid`

use understory_collection::{
    Focusable, Grid, GridCell, GridConfig, SelectionMode, WrapStrategy,
};
use understory_event_match::{KeyboardEvent, Modifiers};

#[derive(Clone, Debug)]
enum Cell {
    Title(&'static str),
    Day(u32),
}

impl Focusable for Cell {
    type Id = u32;

    fn id(&self) -> u32 {
        match self {
            Self::Title(_) => 0,
            Self::Day(d) => *d,
        }
    }
}

impl GridCell for Cell {
    fn col_span(&self) -> usize {
        match self {
            Self::Title(_) => 7,
            Self::Day(_) => 1,
        }
    }

    fn selectable(&self) -> bool {
        matches!(self, Self::Day(_))
    }
}

fn month(title: &'static str, days: u32) -> Vec<Vec<Cell>> {
    let mut rows = vec![vec![Cell::Title(title)]];
    let days: Vec<Cell> = (1..=days).map(Cell::Day).collect();
    rows.extend(days.chunks(7).map(<[Cell]>::to_vec));
    rows
}

fn render(grid: &Grid<Cell>) {
    for row in grid.data().rows() {
        let line: Vec<String> = row
            .iter()
            .map(|cell| {
                let id = cell.id();
                let active = if grid.active_cell() == Some(&id) { '>' } else { ' ' };
                let selected = if grid.is_selected(&id) { '*' } else { ' ' };
                match cell {
                    Cell::Title(t) => format!("{active}{t:^27}"),
                    Cell::Day(d) => format!("{active}{d:>2}{selected}"),
                }
            })
            .collect();
        println!("{}", line.join(""));
    }
    println!();
}

fn main() {
    let mut grid = Grid::new(
        month("February", 28),
        GridConfig {
            multi: true,
            enable_selection: true,
            selection_mode: SelectionMode::Explicit,
            row_wrap: WrapStrategy::Continuous,
            col_wrap: WrapStrategy::NoWrap,
            ..GridConfig::default()
        },
    );
    grid.set_default_state();

    let key = |k: &str| KeyboardEvent::new(k);
    let shift = |k: &str| KeyboardEvent::new(k).with_modifiers(Modifiers::SHIFT);

    grid.on_keydown(&key("ArrowDown"));
    for _ in 0..6 {
        grid.on_keydown(&key("ArrowRight"));
    }
    // Continuous wrap: from the last day of week one to the first of week two.
    grid.on_keydown(&key("ArrowRight"));
    grid.on_keydown(&key(" "));
    grid.on_keydown(&shift("ArrowRight"));
    grid.on_keydown(&shift("ArrowDown"));
    println!("range selected from day 8:");
    render(&grid);

    // Column wrap is off: Up climbs to the title, then stops.
    grid.on_keydown(&key("ArrowUp"));
    grid.on_keydown(&key("ArrowUp"));
    let stuck = !grid.up();
    println!("stopped at the top edge: {stuck}");

    // Swap in a shorter month; the active title keeps its id.
    grid.set_cells(month("March (short)", 14));
    if grid.is_state_stale() {
        grid.reset_state();
    }
    println!("after replacing the cells:");
    render(&grid);

    for violation in grid.validate() {
        println!("warning: {violation}");
    }
}
