// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear movement with optional wrap-around.

use super::focus::{ListFocus, ListView};
use crate::item::Focusable;

/// Moves the active item along a list.
///
/// Movement skips items that are not focusable. With wrap enabled the walk
/// continues past either end and gives up once it is back where it started.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ListNavigation {
    wrap_enabled: bool,
}

impl Default for ListNavigation {
    fn default() -> Self {
        Self { wrap_enabled: true }
    }
}

impl ListNavigation {
    /// Create navigation state with wrapping allowed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether wrapping is currently allowed.
    ///
    /// The list turns this off for the duration of a range selection, which
    /// must not cross the wrap boundary. Wrapping also requires
    /// [`ListConfig::wrap`](crate::ListConfig::wrap).
    pub fn wrap_enabled(&self) -> bool {
        self.wrap_enabled
    }

    /// Allow or forbid wrapping.
    pub fn set_wrap_enabled(&mut self, enabled: bool) {
        self.wrap_enabled = enabled;
    }

    /// Index of the focusable item `delta` steps away from the active item.
    ///
    /// With no active item, a forward walk starts before the first item and a
    /// backward walk after the last one.
    pub fn peek<T: Focusable>(
        &self,
        focus: &ListFocus<T::Id>,
        view: ListView<'_, T>,
        delta: isize,
    ) -> Option<usize> {
        let len = isize::try_from(view.len()).ok()?;
        if len == 0 || delta == 0 {
            return None;
        }
        let wrap = self.wrap_enabled && view.config.wrap;
        let start = match focus.active_index(view) {
            Some(i) => isize::try_from(i).ok()?,
            None if delta > 0 => -1,
            None => len,
        };
        let mut at = start;
        for _ in 0..len {
            at += delta;
            if wrap {
                at = at.rem_euclid(len);
            } else if !(0..len).contains(&at) {
                return None;
            }
            if at == start {
                return None;
            }
            let index = at as usize;
            if focus.is_focusable(view, &view.items[index]) {
                return Some(index);
            }
        }
        None
    }

    /// Index of the first focusable item.
    pub fn peek_first<T: Focusable>(&self, focus: &ListFocus<T::Id>, view: ListView<'_, T>) -> Option<usize> {
        view.items.iter().position(|item| focus.is_focusable(view, item))
    }

    /// Index of the last focusable item.
    pub fn peek_last<T: Focusable>(&self, focus: &ListFocus<T::Id>, view: ListView<'_, T>) -> Option<usize> {
        view.items.iter().rposition(|item| focus.is_focusable(view, item))
    }

    /// Move to the next focusable item. Returns whether the active item moved.
    pub fn next<T: Focusable>(
        &self,
        focus: &mut ListFocus<T::Id>,
        view: ListView<'_, T>,
        focus_element: bool,
    ) -> bool {
        self.advance(focus, view, 1, focus_element)
    }

    /// Move to the previous focusable item. Returns whether the active item moved.
    pub fn prev<T: Focusable>(
        &self,
        focus: &mut ListFocus<T::Id>,
        view: ListView<'_, T>,
        focus_element: bool,
    ) -> bool {
        self.advance(focus, view, -1, focus_element)
    }

    /// Move to the first focusable item.
    pub fn first<T: Focusable>(
        &self,
        focus: &mut ListFocus<T::Id>,
        view: ListView<'_, T>,
        focus_element: bool,
    ) -> bool {
        self.goto_index(focus, view, self.peek_first(focus, view), focus_element)
    }

    /// Move to the last focusable item.
    pub fn last<T: Focusable>(
        &self,
        focus: &mut ListFocus<T::Id>,
        view: ListView<'_, T>,
        focus_element: bool,
    ) -> bool {
        self.goto_index(focus, view, self.peek_last(focus, view), focus_element)
    }

    /// Move to the item with `id`.
    pub fn goto<T: Focusable>(
        &self,
        focus: &mut ListFocus<T::Id>,
        view: ListView<'_, T>,
        id: &T::Id,
        focus_element: bool,
    ) -> bool {
        let index = crate::item::index_of(view.items, id);
        self.goto_index(focus, view, index, focus_element)
    }

    fn advance<T: Focusable>(
        &self,
        focus: &mut ListFocus<T::Id>,
        view: ListView<'_, T>,
        delta: isize,
        focus_element: bool,
    ) -> bool {
        let target = self.peek(focus, view, delta);
        self.goto_index(focus, view, target, focus_element)
    }

    fn goto_index<T: Focusable>(
        &self,
        focus: &mut ListFocus<T::Id>,
        view: ListView<'_, T>,
        index: Option<usize>,
        focus_element: bool,
    ) -> bool {
        index.is_some_and(|i| focus.focus(view, i, focus_element))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ListConfig;
    use crate::item::test_items::{Opt, opts};
    use alloc::vec;

    fn start_at(view: ListView<'_, Opt>, index: usize) -> ListFocus<u32> {
        let mut focus = ListFocus::new();
        assert!(focus.focus(view, index, false));
        focus
    }

    #[test]
    fn next_n_times_wraps_back_to_start() {
        let items = opts(&["a", "b", "c", "d"]);
        let config = ListConfig::default();
        let view = ListView::new(&items, &config);
        let nav = ListNavigation::new();
        let mut focus = start_at(view, 0);
        for _ in 0..items.len() {
            assert!(nav.next(&mut focus, view, false));
        }
        assert_eq!(focus.active_index(view), Some(0));
    }

    #[test]
    fn next_at_end_without_wrap_is_a_no_op() {
        let items = opts(&["a", "b"]);
        let config = ListConfig {
            wrap: false,
            ..ListConfig::default()
        };
        let view = ListView::new(&items, &config);
        let nav = ListNavigation::new();
        let mut focus = start_at(view, 1);
        assert!(!nav.next(&mut focus, view, false));
        assert_eq!(focus.active_index(view), Some(1));
        assert!(nav.prev(&mut focus, view, false));
        assert!(!nav.prev(&mut focus, view, false));
    }

    #[test]
    fn disabled_run_is_skipped() {
        let items = vec![
            Opt::new(0, "a"),
            Opt::new(1, "b").disable(),
            Opt::new(2, "c").disable(),
            Opt::new(3, "d"),
        ];
        let config = ListConfig::default();
        let view = ListView::new(&items, &config);
        let nav = ListNavigation::new();
        let mut focus = start_at(view, 0);
        assert!(nav.next(&mut focus, view, false));
        assert_eq!(focus.active_index(view), Some(3));
        assert!(nav.next(&mut focus, view, false), "wraps over the end");
        assert_eq!(focus.active_index(view), Some(0));
    }

    #[test]
    fn single_focusable_item_cannot_move() {
        let items = vec![Opt::new(0, "a"), Opt::new(1, "b").disable()];
        let config = ListConfig::default();
        let view = ListView::new(&items, &config);
        let nav = ListNavigation::new();
        let mut focus = start_at(view, 0);
        assert!(!nav.next(&mut focus, view, false));
        assert!(!nav.prev(&mut focus, view, false));
        assert_eq!(focus.active_index(view), Some(0));
    }

    #[test]
    fn soft_disabled_items_are_reachable() {
        let items = vec![Opt::new(0, "a"), Opt::new(1, "b").disable(), Opt::new(2, "c")];
        let config = ListConfig {
            skip_disabled: false,
            ..ListConfig::default()
        };
        let view = ListView::new(&items, &config);
        let nav = ListNavigation::new();
        let mut focus = start_at(view, 0);
        assert!(nav.next(&mut focus, view, false));
        assert_eq!(focus.active_index(view), Some(1));
    }

    #[test]
    fn no_active_item_starts_from_the_matching_end() {
        let items = opts(&["a", "b", "c"]);
        let config = ListConfig::default();
        let view = ListView::new(&items, &config);
        let nav = ListNavigation::new();
        let focus = ListFocus::new();
        assert_eq!(nav.peek(&focus, view, 1), Some(0));
        assert_eq!(nav.peek(&focus, view, -1), Some(2));
    }

    #[test]
    fn wrap_can_be_suspended() {
        let items = opts(&["a", "b"]);
        let config = ListConfig::default();
        let view = ListView::new(&items, &config);
        let mut nav = ListNavigation::new();
        let mut focus = start_at(view, 1);
        nav.set_wrap_enabled(false);
        assert!(!nav.next(&mut focus, view, false));
        nav.set_wrap_enabled(true);
        assert!(nav.next(&mut focus, view, false));
        assert_eq!(focus.active_index(view), Some(0));
    }

    #[test]
    fn first_last_and_goto() {
        let items = vec![
            Opt::new(0, "a").disable(),
            Opt::new(1, "b"),
            Opt::new(2, "c"),
            Opt::new(3, "d").disable(),
        ];
        let config = ListConfig::default();
        let view = ListView::new(&items, &config);
        let nav = ListNavigation::new();
        let mut focus = ListFocus::new();
        assert!(nav.last(&mut focus, view, false));
        assert_eq!(focus.active_index(view), Some(2));
        assert!(nav.first(&mut focus, view, false));
        assert_eq!(focus.active_index(view), Some(1));
        assert!(!nav.goto(&mut focus, view, &3, false));
        assert!(nav.goto(&mut focus, view, &2, false));
        assert_eq!(focus.active(), Some(&2));
    }
}
