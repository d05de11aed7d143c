// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid keyboard and pointer bindings.

use understory_event_match::{
    EventOutcome, KeyPattern, KeyboardEvent, KeyboardEventManager, Modifiers, PointerEvent,
    PointerEventManager,
};

use super::Grid;
use crate::item::GridCell;
use crate::types::TextDirection;

const CTRL_OR_META: [Modifiers; 2] = [Modifiers::CTRL, Modifiers::META];

impl<C: GridCell> Grid<C> {
    fn left_key(&self) -> &'static str {
        match self.config.text_direction {
            TextDirection::Ltr => "ArrowLeft",
            TextDirection::Rtl => "ArrowRight",
        }
    }

    fn right_key(&self) -> &'static str {
        match self.config.text_direction {
            TextDirection::Ltr => "ArrowRight",
            TextDirection::Rtl => "ArrowLeft",
        }
    }

    /// Keyboard bindings for the current configuration.
    ///
    /// Left and Right swap under right-to-left text. Rebuild the manager when
    /// `multi` or `enable_selection` change.
    pub fn keydown_manager(&self) -> KeyboardEventManager<Self> {
        let left: KeyPattern<Self> = KeyPattern::Lazy(|grid| grid.left_key());
        let right: KeyPattern<Self> = KeyPattern::Lazy(|grid| grid.right_key());

        let mut manager = KeyboardEventManager::<Self>::new()
            .on("ArrowUp", |grid, _| {
                grid.up();
            })
            .on("ArrowDown", |grid, _| {
                grid.down();
            })
            .on(left.clone(), |grid, _| {
                grid.left();
            })
            .on(right.clone(), |grid, _| {
                grid.right();
            })
            .on("Home", |grid, _| {
                grid.first_in_row();
            })
            .on("End", |grid, _| {
                grid.last_in_row();
            })
            .on_with(CTRL_OR_META, "Home", |grid, _| {
                grid.first();
            })
            .on_with(CTRL_OR_META, "End", |grid, _| {
                grid.last();
            });

        if !self.config.enable_selection {
            return manager;
        }
        if self.config.multi {
            manager = manager
                .on_with(Modifiers::SHIFT, "ArrowUp", |grid, _| grid.range_select_up())
                .on_with(Modifiers::SHIFT, "ArrowDown", |grid, _| grid.range_select_down())
                .on_with(Modifiers::SHIFT, left, |grid, _| grid.range_select_left())
                .on_with(Modifiers::SHIFT, right, |grid, _| grid.range_select_right())
                .on_with(CTRL_OR_META, "A", |grid, _| grid.select_all())
                .on_with(Modifiers::SHIFT, " ", |grid, _| grid.select_row())
                .on_with(CTRL_OR_META, " ", |grid, _| grid.select_col());
        }
        manager
            .on(" ", |grid, _| {
                grid.toggle(None);
            })
            .on("Enter", |grid, _| {
                grid.toggle(None);
            })
    }

    /// Pointer bindings for the current configuration.
    ///
    /// The event target is the id of the cell under the pointer.
    pub fn pointerdown_manager(&self) -> PointerEventManager<Self, C::Id> {
        let mut manager = PointerEventManager::<Self, C::Id>::new().on(|grid, ev| {
            if let Some(id) = &ev.target
                && grid.goto_cell(id)
                && grid.config.enable_selection
                && !grid.config.follows_focus()
            {
                grid.toggle(None);
            }
        });
        if self.config.enable_selection && self.config.multi {
            manager = manager
                .on_with(Modifiers::SHIFT, |grid, ev| {
                    if let Some(id) = &ev.target {
                        grid.range_select(id);
                    }
                })
                .on_with(CTRL_OR_META, |grid, ev| {
                    if let Some(coords) = ev.target.as_ref().and_then(|id| grid.data().coords(id)) {
                        grid.toggle(Some(coords));
                    }
                });
        }
        manager
    }

    /// Handle a keydown.
    pub fn on_keydown(&mut self, event: &KeyboardEvent) -> EventOutcome {
        let manager = self.keydown_manager();
        manager.handle(self, event)
    }

    /// Handle a pointerdown on a cell.
    pub fn on_pointerdown(&mut self, event: &PointerEvent<C::Id>) -> EventOutcome {
        let manager = self.pointerdown_manager();
        manager.handle(self, event)
    }
}
