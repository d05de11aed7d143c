// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared configuration enums, options, and outbound effects.

/// How keyboard focus is represented while a collection item is active.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FocusMode {
    /// Real focus moves to the active item; only that item is tabbable.
    #[default]
    Roving,
    /// Real focus stays on the container, which references the active item
    /// through `aria-activedescendant`.
    ActiveDescendant,
}

/// Main axis of a one-dimensional collection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Items are stacked top to bottom; Up/Down navigate.
    #[default]
    Vertical,
    /// Items are laid out along the inline axis; Left/Right navigate.
    Horizontal,
}

/// Inline text direction, which flips horizontal arrow keys.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

/// Whether selection follows the active item.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// Moving the active item also selects it.
    #[default]
    Follow,
    /// Selection changes only on explicit commands (Space, Enter, click).
    Explicit,
}

/// Request to move real focus, produced by a successful focus operation.
///
/// The engine never touches the host's focus system itself. Hosts drain the
/// pending request after handling an input event and apply it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FocusRequest<K> {
    /// Focus the element of the item with this id (roving focus).
    Item(K),
    /// Focus the collection container (active-descendant focus).
    Container,
}

/// Selection side effects applied after a successful navigation.
///
/// Selection only follows movement: if the navigation operation does not
/// change the active item, none of these are applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NavigationOptions {
    /// Toggle the newly active item.
    pub toggle: bool,
    /// Clear the selection, then toggle the newly active item.
    pub toggle_one: bool,
    /// Select the newly active item.
    pub select: bool,
    /// Clear the selection, then select only the newly active item.
    pub select_one: bool,
    /// Extend the range selection from the anchor to the newly active item.
    pub select_range: bool,
    /// Whether a range selection may re-commit its start at the previously
    /// active item.
    ///
    /// Ctrl+Shift+Home/End turn this off so the range stays pinned to the
    /// anchor.
    pub anchor: bool,
    /// Whether a [`FocusRequest`] is produced.
    pub focus_element: bool,
}

impl NavigationOptions {
    /// Move only; no selection change.
    pub const MOVE: Self = Self {
        toggle: false,
        toggle_one: false,
        select: false,
        select_one: false,
        select_range: false,
        anchor: true,
        focus_element: true,
    };

    /// Move and toggle the new active item.
    pub const TOGGLE: Self = Self {
        toggle: true,
        ..Self::MOVE
    };

    /// Move, clear, and toggle the new active item.
    pub const TOGGLE_ONE: Self = Self {
        toggle_one: true,
        ..Self::MOVE
    };

    /// Move and select the new active item.
    pub const SELECT: Self = Self {
        select: true,
        ..Self::MOVE
    };

    /// Move and make the new active item the only selected item.
    pub const SELECT_ONE: Self = Self {
        select_one: true,
        ..Self::MOVE
    };

    /// Move and extend the range selection.
    pub const SELECT_RANGE: Self = Self {
        select_range: true,
        ..Self::MOVE
    };

    /// Keep the range start pinned to the anchor.
    #[must_use]
    pub const fn without_anchor(mut self) -> Self {
        self.anchor = false;
        self
    }

    /// Do not produce a focus request.
    #[must_use]
    pub const fn without_focus(mut self) -> Self {
        self.focus_element = false;
        self
    }

    /// `SELECT_ONE` when `follow` is true, `MOVE` otherwise.
    pub(crate) const fn following(follow: bool) -> Self {
        if follow { Self::SELECT_ONE } else { Self::MOVE }
    }
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self::MOVE
    }
}

/// Configuration of a one-dimensional list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListConfig {
    /// Disable the whole list.
    pub disabled: bool,
    /// Allow more than one selected value.
    pub multi: bool,
    /// Wrap around at either end while navigating.
    pub wrap: bool,
    /// How real focus tracks the active item.
    pub focus_mode: FocusMode,
    /// Skip disabled items while navigating.
    ///
    /// When `false`, disabled items stay reachable (but not selectable).
    pub skip_disabled: bool,
    /// Main axis, which decides the prev/next arrow keys.
    pub orientation: Orientation,
    /// Text direction, which flips horizontal arrow keys.
    pub text_direction: TextDirection,
    /// Whether selection follows the active item.
    pub selection_mode: SelectionMode,
    /// Milliseconds of inactivity after which the typeahead query resets.
    pub typeahead_delay: u64,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            multi: false,
            wrap: true,
            focus_mode: FocusMode::Roving,
            skip_disabled: true,
            orientation: Orientation::Vertical,
            text_direction: TextDirection::Ltr,
            selection_mode: SelectionMode::Follow,
            typeahead_delay: 500,
        }
    }
}

impl ListConfig {
    /// Returns `true` if selection follows the active item.
    pub fn follows_focus(&self) -> bool {
        self.selection_mode == SelectionMode::Follow
    }
}

/// How grid movement behaves at the edge of an axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WrapStrategy {
    /// Stop at the edge.
    NoWrap,
    /// Wrap to the opposite edge of the same row or column.
    #[default]
    Loop,
    /// Continue into the next row or column, like reading order.
    Continuous,
}

/// Configuration of a two-dimensional grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridConfig {
    /// Disable the whole grid.
    pub disabled: bool,
    /// Allow more than one selected cell.
    pub multi: bool,
    /// How real focus tracks the active cell.
    pub focus_mode: FocusMode,
    /// Skip disabled cells while navigating.
    pub skip_disabled: bool,
    /// Edge behavior for movement along a row (Left/Right).
    pub row_wrap: WrapStrategy,
    /// Edge behavior for movement along a column (Up/Down).
    pub col_wrap: WrapStrategy,
    /// Whether selection follows the active cell.
    pub selection_mode: SelectionMode,
    /// Text direction, which flips Left/Right.
    pub text_direction: TextDirection,
    /// Whether cells can be selected at all.
    pub enable_selection: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            multi: false,
            focus_mode: FocusMode::Roving,
            skip_disabled: true,
            row_wrap: WrapStrategy::Loop,
            col_wrap: WrapStrategy::Loop,
            selection_mode: SelectionMode::Follow,
            text_direction: TextDirection::Ltr,
            enable_selection: false,
        }
    }
}

impl GridConfig {
    /// Returns `true` if selection follows the active cell.
    pub fn follows_focus(&self) -> bool {
        self.enable_selection && self.selection_mode == SelectionMode::Follow
    }
}

/// Configuration of a tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TreeConfig {
    /// Configuration of the flattened list of visible nodes.
    pub list: ListConfig,
    /// Whether siblings may be expanded at the same time.
    pub multi_expandable: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            list: ListConfig::default(),
            multi_expandable: true,
        }
    }
}
