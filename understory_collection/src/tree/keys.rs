// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree keyboard and pointer bindings.

use understory_event_match::{
    EventOutcome, KeyPattern, KeyboardEvent, KeyboardEventManager, ModifierMatch, Modifiers,
    PointerEvent, PointerEventManager,
};

use super::{NodeId, Tree};
use crate::item::TreeItem;
use crate::list::TYPING;
use crate::types::{NavigationOptions, Orientation, TextDirection};

const CTRL_OR_META: [Modifiers; 2] = [Modifiers::CTRL, Modifiers::META];

impl<T: TreeItem> Tree<T> {
    /// Key that expands the active node, or moves into it when expanded.
    pub fn expand_key(&self) -> &'static str {
        match (self.list.config.orientation, self.list.config.text_direction) {
            (Orientation::Vertical, TextDirection::Ltr) => "ArrowRight",
            (Orientation::Vertical, TextDirection::Rtl) => "ArrowLeft",
            (Orientation::Horizontal, _) => "ArrowDown",
        }
    }

    /// Key that collapses the active node, or moves to its parent.
    pub fn collapse_key(&self) -> &'static str {
        match (self.list.config.orientation, self.list.config.text_direction) {
            (Orientation::Vertical, TextDirection::Ltr) => "ArrowLeft",
            (Orientation::Vertical, TextDirection::Rtl) => "ArrowRight",
            (Orientation::Horizontal, _) => "ArrowUp",
        }
    }

    /// Keyboard bindings for the current configuration.
    ///
    /// Movement keys follow the list conventions over the visible nodes.
    /// Rebuild the manager when `multi` or `selection_mode` change.
    pub fn keydown_manager(&self) -> KeyboardEventManager<Self> {
        let prev: KeyPattern<Self> = KeyPattern::Lazy(|t| t.list.prev_key());
        let next: KeyPattern<Self> = KeyPattern::Lazy(|t| t.list.next_key());
        let space: KeyPattern<Self> = KeyPattern::Lazy(|t| t.list.space_key());
        let follow = self.list.config.follows_focus();
        let multi = self.list.config.multi;

        let mut manager = KeyboardEventManager::<Self>::new()
            .on(prev.clone(), |t, _| {
                t.prev(t.list.move_options());
            })
            .on(next.clone(), |t, _| {
                t.next(t.list.move_options());
            })
            .on(KeyPattern::Lazy(|t: &Self| t.expand_key()), |t, _| {
                t.expand(None, t.list.move_options());
            })
            .on(KeyPattern::Lazy(|t: &Self| t.collapse_key()), |t, _| {
                t.collapse(None, t.list.move_options());
            })
            .on("Home", |t, _| {
                t.first(t.list.move_options());
            })
            .on("End", |t, _| {
                t.last(t.list.move_options());
            })
            .on_with(Modifiers::SHIFT, "*", |t, _| t.expand_siblings(None))
            .on_with(TYPING, KeyPattern::Printable, |t, ev| {
                t.search(&ev.key, ev.timestamp, t.list.move_options());
            });

        if multi {
            manager = manager
                .on_with(ModifierMatch::Any, "Shift", |t, _| t.set_anchor())
                .on_with(Modifiers::SHIFT, prev.clone(), |t, _| {
                    t.prev(NavigationOptions::SELECT_RANGE);
                })
                .on_with(Modifiers::SHIFT, next.clone(), |t, _| {
                    t.next(NavigationOptions::SELECT_RANGE);
                })
                .on_with(
                    [Modifiers::CTRL | Modifiers::SHIFT, Modifiers::META | Modifiers::SHIFT],
                    "Home",
                    |t, _| {
                        t.first(NavigationOptions::SELECT_RANGE.without_anchor());
                    },
                )
                .on_with(
                    [Modifiers::CTRL | Modifiers::SHIFT, Modifiers::META | Modifiers::SHIFT],
                    "End",
                    |t, _| {
                        t.last(NavigationOptions::SELECT_RANGE.without_anchor());
                    },
                )
                .on_with(Modifiers::SHIFT, "Enter", |t, _| {
                    t.update_selection(NavigationOptions::SELECT_RANGE.without_anchor());
                })
                .on_with(Modifiers::SHIFT, space.clone(), |t, _| {
                    t.update_selection(NavigationOptions::SELECT_RANGE.without_anchor());
                });
        }

        match (multi, follow) {
            (true, false) => manager
                .on(space, |t, _| {
                    t.toggle(None);
                })
                .on("Enter", |t, _| {
                    t.toggle(None);
                })
                .on_with(CTRL_OR_META, "A", |t, _| t.toggle_all()),
            (false, false) => manager
                .on(space, |t, _| {
                    t.toggle_one();
                })
                .on("Enter", |t, _| {
                    t.toggle_one();
                }),
            (true, true) => manager
                .on_with(CTRL_OR_META, prev, |t, _| {
                    t.prev(NavigationOptions::MOVE);
                })
                .on_with(CTRL_OR_META, next, |t, _| {
                    t.next(NavigationOptions::MOVE);
                })
                .on_with(CTRL_OR_META, " ", |t, _| {
                    t.toggle(None);
                })
                .on_with(CTRL_OR_META, "Enter", |t, _| {
                    t.toggle(None);
                })
                .on_with(CTRL_OR_META, "Home", |t, _| {
                    t.first(NavigationOptions::MOVE);
                })
                .on_with(CTRL_OR_META, "End", |t, _| {
                    t.last(NavigationOptions::MOVE);
                })
                .on_with(CTRL_OR_META, "A", |t, _| {
                    t.toggle_all();
                    t.select(None);
                }),
            (false, true) => manager,
        }
    }

    /// Pointer bindings for the current configuration.
    ///
    /// The event target is the node under the pointer. A plain click moves
    /// to the node and flips its expanded state.
    pub fn pointerdown_manager(&self) -> PointerEventManager<Self, NodeId> {
        let mut manager = PointerEventManager::<Self, NodeId>::new();
        let multi = self.list.config.multi;
        if multi {
            manager = manager.on_with(Modifiers::SHIFT, |t, ev| {
                if let Some(node) = ev.target {
                    t.goto(node, NavigationOptions::SELECT_RANGE);
                }
            });
        }
        match (multi, self.list.config.follows_focus()) {
            (_, true) => {
                manager = manager.on(|t, ev| {
                    if let Some(node) = ev.target {
                        t.goto(node, NavigationOptions::SELECT_ONE);
                        t.toggle_expansion(Some(node));
                    }
                });
                if multi {
                    manager = manager.on_with(CTRL_OR_META, |t, ev| {
                        if let Some(node) = ev.target {
                            t.goto(node, NavigationOptions::TOGGLE);
                        }
                    });
                }
                manager
            }
            (true, false) => manager.on(|t, ev| {
                if let Some(node) = ev.target {
                    t.goto(node, NavigationOptions::TOGGLE);
                    t.toggle_expansion(Some(node));
                }
            }),
            (false, false) => manager.on(|t, ev| {
                if let Some(node) = ev.target {
                    t.goto(node, NavigationOptions::TOGGLE_ONE);
                    t.toggle_expansion(Some(node));
                }
            }),
        }
    }

    /// Handle a keydown. The typeahead clock is advanced first.
    pub fn on_keydown(&mut self, event: &KeyboardEvent) -> EventOutcome {
        self.tick(event.timestamp);
        let manager = self.keydown_manager();
        manager.handle(self, event)
    }

    /// Handle a pointerdown on a node.
    pub fn on_pointerdown(&mut self, event: &PointerEvent<NodeId>) -> EventOutcome {
        let manager = self.pointerdown_manager();
        manager.handle(self, event)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::item::Focusable;
    use crate::item::test_items::Opt;
    use crate::types::{ListConfig, SelectionMode, TreeConfig};

    fn key(k: &str) -> KeyboardEvent {
        KeyboardEvent::new(k)
    }

    /// `0 [1, 2], 3 [4]`
    fn tree(list: ListConfig) -> (Tree<Opt>, NodeId, NodeId) {
        let mut tree = Tree::new(TreeConfig {
            list,
            ..TreeConfig::default()
        });
        let fruit = tree.insert(None, Opt::new(0, "fruit")).unwrap();
        tree.insert(Some(fruit), Opt::new(1, "apple")).unwrap();
        tree.insert(Some(fruit), Opt::new(2, "banana")).unwrap();
        let veg = tree.insert(None, Opt::new(3, "vegetables")).unwrap();
        tree.insert(Some(veg), Opt::new(4, "carrot")).unwrap();
        tree.set_default_state();
        (tree, fruit, veg)
    }

    fn active(tree: &Tree<Opt>) -> Option<u32> {
        tree.active_item().map(Focusable::id)
    }

    fn visible(tree: &Tree<Opt>) -> Vec<u32> {
        tree.visible_items().iter().map(|o| o.id()).collect()
    }

    #[test]
    fn right_opens_and_enters_left_leaves_and_closes() {
        let (mut tree, fruit, _) = tree(ListConfig::default());
        tree.on_keydown(&key("ArrowRight"));
        assert!(tree.is_expanded(fruit));
        tree.on_keydown(&key("ArrowRight"));
        assert_eq!(active(&tree), Some(1));
        assert_eq!(tree.values(), [1], "selection follows focus");

        tree.on_keydown(&key("ArrowLeft"));
        assert_eq!(active(&tree), Some(0));
        tree.on_keydown(&key("ArrowLeft"));
        assert!(!tree.is_expanded(fruit));
    }

    #[test]
    fn rtl_swaps_expand_and_collapse() {
        let (mut tree, fruit, _) = tree(ListConfig {
            text_direction: TextDirection::Rtl,
            ..ListConfig::default()
        });
        tree.on_keydown(&key("ArrowLeft"));
        assert!(tree.is_expanded(fruit));
        tree.on_keydown(&key("ArrowRight"));
        assert!(!tree.is_expanded(fruit));
    }

    #[test]
    fn star_expands_siblings() {
        let (mut tree, fruit, veg) = tree(ListConfig::default());
        let star = KeyboardEvent::new("*").with_modifiers(Modifiers::SHIFT);
        assert!(tree.on_keydown(&star).is_handled());
        assert!(tree.is_expanded(fruit) && tree.is_expanded(veg));
        assert_eq!(visible(&tree), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn shifted_letters_feed_typeahead() {
        let (mut tree, _, _) = tree(ListConfig::default());
        let upper_v = KeyboardEvent::new("V").with_modifiers(Modifiers::SHIFT);
        assert!(tree.on_keydown(&upper_v).is_handled());
        assert_eq!(active(&tree), Some(3));
    }

    #[test]
    fn arrows_move_over_visible_nodes() {
        let (mut tree, _, _) = tree(ListConfig::default());
        tree.on_keydown(&key("ArrowDown"));
        assert_eq!(active(&tree), Some(3));
        tree.on_keydown(&key("End"));
        assert_eq!(active(&tree), Some(3));
        tree.on_keydown(&key("Home"));
        assert_eq!(active(&tree), Some(0));
    }

    #[test]
    fn click_moves_and_toggles_expansion() {
        let (mut tree, fruit, veg) = tree(ListConfig {
            multi: true,
            selection_mode: SelectionMode::Explicit,
            ..ListConfig::default()
        });
        tree.on_pointerdown(&PointerEvent::on(veg));
        assert_eq!(active(&tree), Some(3));
        assert!(tree.is_expanded(veg));
        assert_eq!(tree.values(), [3]);

        tree.on_pointerdown(&PointerEvent::on(fruit));
        tree.on_pointerdown(&PointerEvent::on(fruit));
        assert!(!tree.is_expanded(fruit));
        assert_eq!(tree.values(), [3], "second click toggled fruit off again");
    }

    #[test]
    fn shift_arrows_select_a_range() {
        let (mut tree, _, _) = tree(ListConfig {
            multi: true,
            ..ListConfig::default()
        });
        tree.expand_all();
        tree.on_keydown(&key("ArrowDown"));
        assert_eq!(tree.values(), [1]);
        let shift = |k: &str| KeyboardEvent::new(k).with_modifiers(Modifiers::SHIFT);
        tree.on_keydown(&shift("Shift"));
        tree.on_keydown(&shift("ArrowDown"));
        tree.on_keydown(&shift("ArrowDown"));
        let mut values = tree.values().to_vec();
        values.sort_unstable();
        assert_eq!(values, [1, 2, 3]);
    }
}
