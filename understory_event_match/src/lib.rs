// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_match --heading-base-level=0

//! Understory Event Match: declarative keyboard and pointer rule tables.
//!
//! UI behaviors (lists, grids, trees, menus) mostly react to input the same
//! way: "when *this* key is pressed with *these* modifiers, run *that*
//! operation". This crate turns that into a small rule table:
//!
//! - [`KeyboardEventManager`]: rules keyed by a [`KeyPattern`] (a literal key,
//!   a key computed from the context at match time, or "any printable
//!   character") plus a [`ModifierMatch`].
//! - [`PointerEventManager`]: rules keyed by a [`PointerButton`] plus a
//!   [`ModifierMatch`].
//! - [`EventManager`]: the shared ordered table both are built on.
//!
//! Every rule whose matcher accepts an event runs, in registration order.
//! [`EventOutcome`] reports how many rules ran and whether the host should
//! prevent the default action or stop propagation. Keyboard rules consume
//! the event by default; pointer rules do not.
//!
//! Handlers are function pointers over a context type `C` that the caller
//! passes to `handle`, so a manager holds no borrows and can be built once
//! and reused.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_event_match::{KeyPattern, KeyboardEvent, KeyboardEventManager, Modifiers};
//!
//! #[derive(Default)]
//! struct Search { query: String, submitted: bool }
//!
//! let keys = KeyboardEventManager::<Search>::new()
//!     .on(KeyPattern::Printable, |s, ev| s.query.push_str(&ev.key))
//!     .on("Enter", |s, _| s.submitted = true);
//!
//! let mut search = Search::default();
//! keys.handle(&mut search, &KeyboardEvent::new("h"));
//! keys.handle(&mut search, &KeyboardEvent::new("i"));
//! let outcome = keys.handle(&mut search, &KeyboardEvent::new("Enter"));
//!
//! assert_eq!(search.query, "hi");
//! assert!(search.submitted);
//! assert!(outcome.prevent_default);
//!
//! // Ctrl+Enter is not an unmodified Enter.
//! let ctrl_enter = KeyboardEvent::new("Enter").with_modifiers(Modifiers::CTRL);
//! assert!(!keys.handle(&mut search, &ctrl_enter).is_handled());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod keyboard;
mod manager;
mod modifiers;
mod pointer;

pub use keyboard::{KeyPattern, KeyboardEvent, KeyboardEventManager};
pub use manager::{
    EventManager, EventOptions, EventOutcome, Handler, InputEvent, Matcher, RuleSpec,
};
pub use modifiers::{ModifierMatch, Modifiers};
pub use pointer::{PointerButton, PointerEvent, PointerEventManager};
