// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listbox keyboard and pointer bindings.

use understory_event_match::{
    EventOutcome, KeyPattern, KeyboardEvent, KeyboardEventManager, ModifierMatch, Modifiers,
    PointerEvent, PointerEventManager,
};

use super::List;
use crate::item::ListItem;
use crate::types::{NavigationOptions, Orientation, TextDirection};

/// A list paired with the items it currently operates on.
///
/// This is the context event handlers run against.
#[derive(Debug)]
pub struct ListContext<'a, T: ListItem> {
    /// The list state.
    pub list: &'a mut List<T::Id, T::Value>,
    /// The current items.
    pub items: &'a [T],
}

const CTRL_OR_META: [Modifiers; 2] = [Modifiers::CTRL, Modifiers::META];

/// Modifiers under which a printable key still feeds typeahead.
pub(crate) const TYPING: [Modifiers; 2] = [Modifiers::NONE, Modifiers::SHIFT];

impl<K, V> List<K, V>
where
    K: Clone + Eq + core::hash::Hash + core::fmt::Debug,
    V: Clone + PartialEq + core::fmt::Debug,
{
    /// Key that moves to the previous item under the current orientation and
    /// text direction.
    pub fn prev_key(&self) -> &'static str {
        match (self.config.orientation, self.config.text_direction) {
            (Orientation::Vertical, _) => "ArrowUp",
            (Orientation::Horizontal, TextDirection::Ltr) => "ArrowLeft",
            (Orientation::Horizontal, TextDirection::Rtl) => "ArrowRight",
        }
    }

    /// Key that moves to the next item.
    pub fn next_key(&self) -> &'static str {
        match (self.config.orientation, self.config.text_direction) {
            (Orientation::Vertical, _) => "ArrowDown",
            (Orientation::Horizontal, TextDirection::Ltr) => "ArrowRight",
            (Orientation::Horizontal, TextDirection::Rtl) => "ArrowLeft",
        }
    }

    /// Space activates only while no typeahead burst is running.
    pub(crate) fn space_key(&self) -> &'static str {
        if self.is_typing() { "" } else { " " }
    }

    pub(crate) fn move_options(&self) -> NavigationOptions {
        NavigationOptions::following(self.config.follows_focus())
    }

    /// Keyboard bindings for the current configuration.
    ///
    /// Rules that depend on orientation, text direction, or typeahead state
    /// are evaluated lazily, so the manager stays valid while those change.
    /// Rebuild it when `multi` or `selection_mode` change.
    pub fn keydown_manager<'a, T>(&self) -> KeyboardEventManager<ListContext<'a, T>>
    where
        T: ListItem<Id = K, Value = V> + 'a,
    {
        let prev: KeyPattern<ListContext<'a, T>> = KeyPattern::Lazy(|cx| cx.list.prev_key());
        let next: KeyPattern<ListContext<'a, T>> = KeyPattern::Lazy(|cx| cx.list.next_key());
        let space: KeyPattern<ListContext<'a, T>> = KeyPattern::Lazy(|cx| cx.list.space_key());
        let follow = self.config.follows_focus();
        let multi = self.config.multi;

        let mut manager = KeyboardEventManager::<ListContext<'a, T>>::new()
            .on(prev.clone(), |cx, _| {
                let opts = cx.list.move_options();
                cx.list.prev(cx.items, opts);
            })
            .on(next.clone(), |cx, _| {
                let opts = cx.list.move_options();
                cx.list.next(cx.items, opts);
            })
            .on("Home", |cx, _| {
                let opts = cx.list.move_options();
                cx.list.first(cx.items, opts);
            })
            .on("End", |cx, _| {
                let opts = cx.list.move_options();
                cx.list.last(cx.items, opts);
            })
            .on_with(TYPING, KeyPattern::Printable, |cx, ev| {
                let opts = cx.list.move_options();
                cx.list.search(cx.items, &ev.key, ev.timestamp, opts);
            });

        if multi {
            manager = manager
                .on_with(ModifierMatch::Any, "Shift", |cx, _| cx.list.set_anchor(cx.items))
                .on_with(Modifiers::SHIFT, prev.clone(), |cx, _| {
                    cx.list.prev(cx.items, NavigationOptions::SELECT_RANGE);
                })
                .on_with(Modifiers::SHIFT, next.clone(), |cx, _| {
                    cx.list.next(cx.items, NavigationOptions::SELECT_RANGE);
                })
                .on_with(
                    [Modifiers::CTRL | Modifiers::SHIFT, Modifiers::META | Modifiers::SHIFT],
                    "Home",
                    |cx, _| {
                        cx.list
                            .first(cx.items, NavigationOptions::SELECT_RANGE.without_anchor());
                    },
                )
                .on_with(
                    [Modifiers::CTRL | Modifiers::SHIFT, Modifiers::META | Modifiers::SHIFT],
                    "End",
                    |cx, _| {
                        cx.list
                            .last(cx.items, NavigationOptions::SELECT_RANGE.without_anchor());
                    },
                )
                .on_with(Modifiers::SHIFT, "Enter", |cx, _| {
                    cx.list
                        .update_selection(cx.items, NavigationOptions::SELECT_RANGE.without_anchor());
                })
                .on_with(Modifiers::SHIFT, space.clone(), |cx, _| {
                    cx.list
                        .update_selection(cx.items, NavigationOptions::SELECT_RANGE.without_anchor());
                });
        }

        manager = match (multi, follow) {
            (true, false) => manager
                .on(space, |cx, _| {
                    cx.list.toggle(cx.items, None);
                })
                .on("Enter", |cx, _| {
                    cx.list.toggle(cx.items, None);
                })
                .on_with(CTRL_OR_META, "A", |cx, _| cx.list.toggle_all(cx.items)),
            (false, false) => manager
                .on(space, |cx, _| {
                    cx.list.toggle_one(cx.items);
                })
                .on("Enter", |cx, _| {
                    cx.list.toggle_one(cx.items);
                }),
            (true, true) => manager
                .on_with(CTRL_OR_META, prev, |cx, _| {
                    cx.list.prev(cx.items, NavigationOptions::MOVE);
                })
                .on_with(CTRL_OR_META, next, |cx, _| {
                    cx.list.next(cx.items, NavigationOptions::MOVE);
                })
                .on_with(CTRL_OR_META, " ", |cx, _| {
                    cx.list.toggle(cx.items, None);
                })
                .on_with(CTRL_OR_META, "Enter", |cx, _| {
                    cx.list.toggle(cx.items, None);
                })
                .on_with(CTRL_OR_META, "Home", |cx, _| {
                    cx.list.first(cx.items, NavigationOptions::MOVE);
                })
                .on_with(CTRL_OR_META, "End", |cx, _| {
                    cx.list.last(cx.items, NavigationOptions::MOVE);
                })
                .on_with(CTRL_OR_META, "A", |cx, _| {
                    cx.list.toggle_all(cx.items);
                    cx.list.select(cx.items, None);
                }),
            (false, true) => manager,
        };
        manager
    }

    /// Pointer bindings for the current configuration.
    ///
    /// The event target is the id of the item under the pointer.
    pub fn pointerdown_manager<'a, T>(&self) -> PointerEventManager<ListContext<'a, T>, K>
    where
        T: ListItem<Id = K, Value = V> + 'a,
    {
        let mut manager = PointerEventManager::<ListContext<'a, T>, K>::new();
        if self.config.multi {
            manager = manager.on_with(Modifiers::SHIFT, |cx, ev| {
                if let Some(id) = &ev.target {
                    cx.list.goto(cx.items, id, NavigationOptions::SELECT_RANGE);
                }
            });
        }
        match (self.config.multi, self.config.follows_focus()) {
            (_, true) => {
                manager = manager.on(|cx, ev| {
                    if let Some(id) = &ev.target {
                        cx.list.goto(cx.items, id, NavigationOptions::SELECT_ONE);
                    }
                });
                if self.config.multi {
                    manager = manager.on_with(CTRL_OR_META, |cx, ev| {
                        if let Some(id) = &ev.target {
                            cx.list.goto(cx.items, id, NavigationOptions::TOGGLE);
                        }
                    });
                }
                manager
            }
            (true, false) => manager.on(|cx, ev| {
                if let Some(id) = &ev.target {
                    cx.list.goto(cx.items, id, NavigationOptions::TOGGLE);
                }
            }),
            (false, false) => manager.on(|cx, ev| {
                if let Some(id) = &ev.target {
                    cx.list.goto(cx.items, id, NavigationOptions::TOGGLE_ONE);
                }
            }),
        }
    }

    /// Handle a keydown against `items`.
    ///
    /// The typeahead clock is advanced to the event's timestamp first.
    pub fn on_keydown<T: ListItem<Id = K, Value = V>>(
        &mut self,
        items: &[T],
        event: &KeyboardEvent,
    ) -> EventOutcome {
        self.tick(event.timestamp);
        let manager = self.keydown_manager();
        manager.handle(&mut ListContext { list: self, items }, event)
    }

    /// Handle a pointerdown on an item of `items`.
    pub fn on_pointerdown<T: ListItem<Id = K, Value = V>>(
        &mut self,
        items: &[T],
        event: &PointerEvent<K>,
    ) -> EventOutcome {
        let manager = self.pointerdown_manager();
        manager.handle(&mut ListContext { list: self, items }, event)
    }
}
