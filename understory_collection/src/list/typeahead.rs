// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Incremental prefix search.
//!
//! Characters typed in quick succession form a burst. Each burst remembers
//! the item that was active when it began and searches from just after it,
//! so typing the same letter repeatedly cycles through matching items while
//! typing a longer prefix narrows the match.
//!
//! Time is supplied by the caller as millisecond timestamps. A burst ends
//! once `typeahead_delay` milliseconds pass without a new character.

use alloc::string::String;

use super::focus::{ListFocus, ListView};
use crate::item::Searchable;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Burst {
    start: Option<usize>,
    deadline: u64,
}

/// Typeahead query state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListTypeahead {
    query: String,
    burst: Option<Burst>,
}

impl ListTypeahead {
    /// Create idle typeahead state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The lower-cased query typed so far in this burst.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether a burst is in progress.
    pub fn is_typing(&self) -> bool {
        self.burst.is_some()
    }

    /// End the burst if its deadline has passed. Returns `true` if it ended.
    pub fn tick(&mut self, now: u64) -> bool {
        match self.burst {
            Some(burst) if now >= burst.deadline => {
                self.reset();
                true
            }
            _ => false,
        }
    }

    /// End the burst immediately.
    pub fn reset(&mut self) {
        if self.burst.take().is_some() {
            tracing::trace!(target: "understory_collection::typeahead", query = %self.query, "typeahead query reset");
        }
        self.query.clear();
    }

    /// Feed one typed key at time `now`.
    ///
    /// Keys that are not a single character are rejected, and so is a space
    /// that would start a new burst. Returns `true` if a matching item was
    /// focused.
    pub fn search<T: Searchable>(
        &mut self,
        focus: &mut ListFocus<T::Id>,
        view: ListView<'_, T>,
        key: &str,
        now: u64,
        focus_element: bool,
    ) -> bool {
        self.tick(now);
        let mut chars = key.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return false;
        };
        if ch == ' ' && !self.is_typing() {
            return false;
        }
        let start = match self.burst {
            Some(burst) => burst.start,
            None => focus.active_index(view),
        };
        self.query.extend(ch.to_lowercase());
        self.burst = Some(Burst {
            start,
            deadline: now.saturating_add(view.config.typeahead_delay),
        });

        self.find(focus, view, start)
            .is_some_and(|index| focus.focus(view, index, focus_element))
    }

    fn find<T: Searchable>(
        &self,
        focus: &ListFocus<T::Id>,
        view: ListView<'_, T>,
        start: Option<usize>,
    ) -> Option<usize> {
        let len = view.len();
        let first = start.map_or(0, |s| s + 1);
        let order = (first..len).chain(0..first.min(len));
        order
            .filter(|&i| focus.is_focusable(view, &view.items[i]))
            .find(|&i| starts_with_ignore_case(view.items[i].search_term(), &self.query))
    }
}

fn starts_with_ignore_case(term: &str, lowered_prefix: &str) -> bool {
    let mut term = term.chars().flat_map(char::to_lowercase);
    lowered_prefix.chars().all(|p| term.next() == Some(p))
}
