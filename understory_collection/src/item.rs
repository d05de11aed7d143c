// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability traits describing what the engine may ask of an item.
//!
//! Items are owned by the host. Each engine component only requires the
//! narrowest capability it needs: focus tracking needs [`Focusable`], selection
//! needs [`Selectable`], typeahead needs [`Searchable`], grids need
//! [`GridCell`], and trees need [`Expandable`].
//!
//! All traits are implemented for `&T` as well, so a derived view such as
//! `Vec<&T>` (for example the visible rows of a tree) can be handed straight
//! back to the engine.

use core::fmt::Debug;
use core::hash::Hash;

/// An item that can become the active item of a collection.
pub trait Focusable {
    /// Stable identifier, used to track the active item across mutations.
    type Id: Clone + Eq + Hash + Debug;

    /// The identifier of this item.
    fn id(&self) -> Self::Id;

    /// Whether the item is disabled.
    ///
    /// Disabled items are skipped by navigation unless the collection is
    /// configured to keep them reachable.
    fn disabled(&self) -> bool {
        false
    }
}

/// An item that carries a selectable value.
pub trait Selectable: Focusable {
    /// The value recorded in the selection when this item is selected.
    type Value: Clone + PartialEq + Debug;

    /// The value of this item.
    fn value(&self) -> Self::Value;

    /// Whether this item may be selected at all.
    fn selectable(&self) -> bool {
        true
    }
}

/// An item that can be found by typeahead.
pub trait Searchable: Focusable {
    /// Text matched against the typeahead query, case-insensitively, by prefix.
    fn search_term(&self) -> &str;
}

/// A cell of a two-dimensional grid.
pub trait GridCell: Focusable {
    /// Number of rows this cell spans. Values below one are treated as one.
    fn row_span(&self) -> usize {
        1
    }

    /// Number of columns this cell spans. Values below one are treated as one.
    fn col_span(&self) -> usize {
        1
    }

    /// Whether this cell may be selected at all.
    fn selectable(&self) -> bool {
        true
    }
}

/// An item that may own an expandable group of children.
pub trait Expandable: Focusable {
    /// Whether the item allows expansion. Trees additionally require children.
    fn expandable(&self) -> bool {
        true
    }
}

/// Everything a one-dimensional list needs from its items.
pub trait ListItem: Selectable + Searchable {}

impl<T: Selectable + Searchable + ?Sized> ListItem for T {}

/// Everything a tree needs from its items.
pub trait TreeItem: ListItem + Expandable {}

impl<T: ListItem + Expandable + ?Sized> TreeItem for T {}

impl<T: Focusable + ?Sized> Focusable for &T {
    type Id = T::Id;

    fn id(&self) -> Self::Id {
        (**self).id()
    }

    fn disabled(&self) -> bool {
        (**self).disabled()
    }
}

impl<T: Selectable + ?Sized> Selectable for &T {
    type Value = T::Value;

    fn value(&self) -> Self::Value {
        (**self).value()
    }

    fn selectable(&self) -> bool {
        (**self).selectable()
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn search_term(&self) -> &str {
        (**self).search_term()
    }
}

impl<T: GridCell + ?Sized> GridCell for &T {
    fn row_span(&self) -> usize {
        (**self).row_span()
    }

    fn col_span(&self) -> usize {
        (**self).col_span()
    }

    fn selectable(&self) -> bool {
        (**self).selectable()
    }
}

impl<T: Expandable + ?Sized> Expandable for &T {
    fn expandable(&self) -> bool {
        (**self).expandable()
    }
}

/// Position of the item with `id` in `items`.
pub(crate) fn index_of<T: Focusable>(items: &[T], id: &T::Id) -> Option<usize> {
    items.iter().position(|item| item.id() == *id)
}
