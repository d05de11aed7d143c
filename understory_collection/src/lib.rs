// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_collection --heading-base-level=0

//! Understory Collection: headless interaction state for lists, grids and trees.
//!
//! This crate decides *which item is active* and *which items are selected*
//! for a collection of UI items, given a stream of keyboard and pointer
//! events. It renders nothing and owns no widget tree: the host owns the
//! items, passes them in per call, and reads back small derived values
//! (tab index, active-descendant id, selected flags, tree levels) to project
//! accessibility attributes.
//!
//! - [`List`]: the one-dimensional engine. It composes [`ListFocus`],
//!   [`ListNavigation`], [`ListSelection`] and [`ListTypeahead`], and handles
//!   wrap-around, disabled items, follow-focus and explicit selection, and
//!   anchored range selection.
//! - [`Grid`]: rows and columns with spanning cells, two independent wrap
//!   policies ([`WrapStrategy`]) and rectangular range selection.
//! - [`Tree`]: nodes in an arena addressed by [`NodeId`]; navigation runs the
//!   list engine over the visible nodes, and expansion is tracked per parent
//!   with [`ListExpansion`].
//!
//! Items describe themselves through small capability traits ([`Focusable`],
//! [`Selectable`], [`Searchable`], [`GridCell`], [`Expandable`]). Each
//! collection exposes `keydown_manager`/`pointerdown_manager` rule tables built
//! with [`understory_event_match`], plus `on_keydown`/`on_pointerdown`
//! shortcuts.
//!
//! DOM focus is an effect, not state: after an operation the host drains a
//! [`FocusRequest`] and moves focus itself. Time is passed in as millisecond
//! timestamps, so typeahead works without a clock.
//!
//! ## Minimal example
//!
//! A single-select listbox where selection follows focus:
//!
//! ```rust
//! use understory_collection::{Focusable, List, ListConfig, Searchable, Selectable};
//! use understory_event_match::KeyboardEvent;
//!
//! struct Fruit(u32, &'static str);
//!
//! impl Focusable for Fruit {
//!     type Id = u32;
//!     fn id(&self) -> u32 { self.0 }
//! }
//! impl Selectable for Fruit {
//!     type Value = &'static str;
//!     fn value(&self) -> Self::Value { self.1 }
//! }
//! impl Searchable for Fruit {
//!     fn search_term(&self) -> &str { self.1 }
//! }
//!
//! let fruits = [Fruit(1, "apple"), Fruit(2, "banana"), Fruit(3, "blueberry")];
//! let mut list = List::new(ListConfig::default());
//! list.set_default_state(&fruits);
//!
//! list.on_keydown(&fruits, &KeyboardEvent::new("ArrowDown"));
//! assert_eq!(list.values(), ["banana"]);
//!
//! // Typeahead: "bl" finds "blueberry".
//! list.on_keydown(&fruits, &KeyboardEvent::new("b").at(1_000));
//! list.on_keydown(&fruits, &KeyboardEvent::new("l").at(1_100));
//! assert_eq!(list.active_item(&fruits).map(|f| f.1), Some("blueberry"));
//!
//! // Only the active item is in the tab order.
//! assert_eq!(list.item_tab_index(&fruits, &fruits[2]), 0);
//! assert_eq!(list.item_tab_index(&fruits, &fruits[0]), -1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod grid;
mod item;
mod list;
mod tree;
mod types;
mod violation;

pub use grid::{
    Coord, Direction, Grid, GridData, GridFocus, GridNavigation, GridSelection, GridView,
};
pub use item::{Expandable, Focusable, GridCell, ListItem, Searchable, Selectable, TreeItem};
pub use list::{
    List, ListContext, ListExpansion, ListFocus, ListNavigation, ListSelection, ListTypeahead,
    ListView,
};
pub use tree::{NodeId, Tree};
pub use types::{
    FocusMode, FocusRequest, GridConfig, ListConfig, NavigationOptions, Orientation,
    SelectionMode, TextDirection, TreeConfig, WrapStrategy,
};
pub use violation::Violation;
