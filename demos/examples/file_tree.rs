// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A file explorer tree with expand/collapse and typeahead.
//!
//! This example shows:
//! - inserting items into a `Tree` arena and keeping the returned `NodeId`s,
//! - driving it with arrow keys, `*` and typeahead,
//! - reading `level`, `posinset`, `setsize` and `expanded_state` for rendering,
//! - repairing state after the active node's subtree is removed.
//!
//! Run:
//! - `cargo run -p understory_demos --example file_tree`

use understory_collection::{
    Expandable, Focusable, NodeId, Searchable, Selectable, Tree, TreeConfig,
};
use understory_event_match::{KeyboardEvent, Modifiers, PointerEvent};

#[derive(Debug)]
struct Entry {
    path: &'static str,
    name: &'static str,
}

impl Focusable for Entry {
    type Id = &'static str;

    fn id(&self) -> &'static str {
        self.path
    }
}

impl Selectable for Entry {
    type Value = &'static str;

    fn value(&self) -> &'static str {
        self.path
    }
}

impl Searchable for Entry {
    fn search_term(&self) -> &str {
        self.name
    }
}

impl Expandable for Entry {}

fn add(tree: &mut Tree<Entry>, parent: Option<NodeId>, path: &'static str) -> NodeId {
    let name = path.rsplit('/').next().unwrap_or(path);
    tree.insert(parent, Entry { path, name })
        .expect("parent is alive")
}

fn render(tree: &Tree<Entry>) {
    for node in tree.visible_nodes() {
        let (Some(entry), Some(level)) = (tree.item(node), tree.level(node)) else {
            continue;
        };
        let marker = match tree.expanded_state(node) {
            Some(true) => 'v',
            Some(false) => '>',
            None => ' ',
        };
        let active = if tree.is_active(node) { "*" } else { " " };
        println!(
            "{active}{:indent$}{marker} {} ({}/{})",
            "",
            entry.name,
            tree.posinset(node).unwrap_or(0),
            tree.setsize(node).unwrap_or(0),
            indent = (level - 1) * 2,
        );
    }
    println!();
}

fn main() {
    let mut tree = Tree::new(TreeConfig::default());
    let src = add(&mut tree, None, "src");
    add(&mut tree, Some(src), "src/lib.rs");
    let list = add(&mut tree, Some(src), "src/list");
    add(&mut tree, Some(list), "src/list/focus.rs");
    add(&mut tree, Some(list), "src/list/selection.rs");
    let tests = add(&mut tree, None, "tests");
    add(&mut tree, Some(tests), "tests/smoke.rs");
    add(&mut tree, None, "Cargo.toml");
    tree.set_default_state();

    let key = |k: &str| KeyboardEvent::new(k);

    // Right opens `src`, a second Right moves into it.
    tree.on_keydown(&key("ArrowRight"));
    tree.on_keydown(&key("ArrowRight"));
    tree.on_keydown(&key("ArrowDown"));
    tree.on_keydown(&key("ArrowRight"));
    render(&tree);

    // Typeahead over visible nodes only.
    tree.on_keydown(&key("s").at(10_000));
    tree.on_keydown(&key("e").at(10_050));
    println!("typeahead 'se' -> {:?}", tree.active_item().map(|e| e.path));

    // `*` expands every sibling of the active node.
    tree.on_keydown(&key("Home"));
    tree.on_keydown(&KeyboardEvent::new("*").with_modifiers(Modifiers::SHIFT));
    render(&tree);

    // Clicking `tests` activates and collapses it.
    tree.on_pointerdown(&PointerEvent::on(tests));
    render(&tree);

    // Remove the active subtree and repair.
    tree.remove(tests);
    if tree.is_state_stale() {
        tree.reset_state();
    }
    println!("after removing tests/:");
    render(&tree);
}
