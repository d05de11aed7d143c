// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A multi-select listbox driven by keyboard and pointer events.
//!
//! This example shows how a host widget:
//! - owns its items and hands them to the `List` on every call,
//! - forwards raw key/pointer events through `on_keydown`/`on_pointerdown`,
//! - drains focus requests and reads back tab indices and selection.
//!
//! Run:
//! - `cargo run -p understory_demos --example listbox`

use understory_collection::{
    Focusable, FocusRequest, List, ListConfig, Searchable, Selectable, SelectionMode,
};
use understory_event_match::{KeyboardEvent, Modifiers, PointerEvent};

#[derive(Debug)]
struct City {
    id: u32,
    name: &'static str,
    closed: bool,
}

impl Focusable for City {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn disabled(&self) -> bool {
        self.closed
    }
}

impl Selectable for City {
    type Value = &'static str;

    fn value(&self) -> &'static str {
        self.name
    }
}

impl Searchable for City {
    fn search_term(&self) -> &str {
        self.name
    }
}

fn render(list: &List<u32, &'static str>, cities: &[City]) {
    for city in cities {
        let marker = if list.is_selected(city) { "[x]" } else { "[ ]" };
        let tab = list.item_tab_index(cities, city);
        let state = if city.closed { " (disabled)" } else { "" };
        println!("  {marker} {:<10} tabindex={tab}{state}", city.name);
    }
}

fn main() {
    let cities = [
        ("Amsterdam", false),
        ("Berlin", false),
        ("Bern", true),
        ("Boston", false),
        ("Cairo", false),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, closed), id)| City { id, name, closed })
    .collect::<Vec<_>>();

    let mut list = List::new(ListConfig {
        multi: true,
        selection_mode: SelectionMode::Explicit,
        ..ListConfig::default()
    });
    list.set_default_state(&cities);

    let mut now = 0;
    let mut press = |list: &mut List<u32, &'static str>, key: &str, modifiers: Modifiers| {
        now += 100;
        let event = KeyboardEvent::new(key).with_modifiers(modifiers).at(now);
        let outcome = list.on_keydown(&cities, &event);
        if let Some(FocusRequest::Item(id)) = list.take_focus_request() {
            println!("{key:>10} -> focus item {id}");
        } else if !outcome.is_handled() {
            println!("{key:>10} -> ignored");
        }
    };

    press(&mut list, " ", Modifiers::NONE);
    press(&mut list, "ArrowDown", Modifiers::NONE);
    press(&mut list, "Shift", Modifiers::SHIFT);
    press(&mut list, "ArrowDown", Modifiers::SHIFT);
    press(&mut list, "ArrowDown", Modifiers::SHIFT);
    press(&mut list, "c", Modifiers::NONE);
    press(&mut list, "F1", Modifiers::NONE);

    println!("after keyboard:");
    render(&list, &cities);

    list.on_pointerdown(&cities, &PointerEvent::on(1));
    println!("after clicking Amsterdam:");
    render(&list, &cities);

    println!("selected: {:?}", list.values());
    for violation in list.validate(&cities) {
        println!("warning: {violation}");
    }
}
