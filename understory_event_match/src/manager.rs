// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generic rule table shared by the keyboard and pointer managers.
//!
//! An [`EventManager`] is an ordered list of rules. Each rule pairs a matcher
//! with a handler and an [`EventOptions`] value. [`EventManager::handle`] walks
//! the rules in registration order; every rule whose matcher accepts the event
//! runs, so one event may fire several handlers (for example a catch-all rule
//! that records Shift presses plus a specific Shift+ArrowDown rule).
//!
//! Matchers are evaluated lazily, right before the rule would run, against the
//! context as left by the previous handlers.
//!
//! Handlers are plain function pointers. A manager therefore never borrows
//! anything itself; all state lives in the context `C` passed to `handle`.

use alloc::vec::Vec;

use crate::modifiers::Modifiers;

/// Common shape of the input events a manager can dispatch.
pub trait InputEvent {
    /// Modifier keys held while the event was produced.
    fn modifiers(&self) -> Modifiers;
}

/// Per-rule side effects applied when the rule fires.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EventOptions {
    /// Ask the host to suppress the platform's default action.
    pub prevent_default: bool,
    /// Ask the host to stop propagating the event to ancestors.
    pub stop_propagation: bool,
}

impl EventOptions {
    /// Keyboard rules consume the event by default.
    pub const KEYBOARD: Self = Self {
        prevent_default: true,
        stop_propagation: true,
    };

    /// Pointer rules let the event continue by default.
    pub const POINTER: Self = Self {
        prevent_default: false,
        stop_propagation: false,
    };
}

/// What happened while handling one event.
///
/// The host applies `prevent_default` / `stop_propagation` to the native event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EventOutcome {
    /// Number of rules that matched and ran.
    pub matched: usize,
    /// Whether any matching rule asked to prevent the default action.
    pub prevent_default: bool,
    /// Whether any matching rule asked to stop propagation.
    pub stop_propagation: bool,
}

impl EventOutcome {
    /// Returns `true` if at least one rule ran.
    pub const fn is_handled(&self) -> bool {
        self.matched > 0
    }
}

/// Decides whether a rule applies to an event, given the current context.
pub type Matcher<C, E> = fn(&RuleSpec<C>, &C, &E) -> bool;

/// Runs when a rule matches.
pub type Handler<C, E> = fn(&mut C, &E);

/// Data a matcher inspects; owned by the rule.
///
/// The keyboard and pointer managers store their key pattern or button here
/// so the matcher itself can stay a plain function pointer.
#[derive(Debug)]
pub struct RuleSpec<C> {
    /// Accepted modifier combinations.
    pub modifiers: crate::ModifierMatch,
    /// Key pattern for keyboard rules.
    pub key: Option<crate::KeyPattern<C>>,
    /// Button for pointer rules.
    pub button: Option<crate::PointerButton>,
}

impl<C> Clone for RuleSpec<C> {
    fn clone(&self) -> Self {
        Self {
            modifiers: self.modifiers.clone(),
            key: self.key.clone(),
            button: self.button,
        }
    }
}

impl<C> Default for RuleSpec<C> {
    fn default() -> Self {
        Self {
            modifiers: crate::ModifierMatch::default(),
            key: None,
            button: None,
        }
    }
}

struct Rule<C, E> {
    spec: RuleSpec<C>,
    matcher: Matcher<C, E>,
    handler: Handler<C, E>,
    options: EventOptions,
}

/// Ordered table of event rules for a context type `C` and event type `E`.
pub struct EventManager<C, E> {
    rules: Vec<Rule<C, E>>,
}

impl<C, E> core::fmt::Debug for EventManager<C, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventManager")
            .field("rules", &self.rules.len())
            .finish_non_exhaustive()
    }
}

impl<C, E> Default for EventManager<C, E> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<C, E: InputEvent> EventManager<C, E> {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule. Rules run in registration order.
    pub fn push(
        &mut self,
        spec: RuleSpec<C>,
        matcher: Matcher<C, E>,
        handler: Handler<C, E>,
        options: EventOptions,
    ) {
        self.rules.push(Rule {
            spec,
            matcher,
            handler,
            options,
        });
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every matching rule against `event`, in registration order.
    ///
    /// Each rule is matched against the context as it stands after the
    /// handlers of earlier rules have run.
    pub fn handle(&self, cx: &mut C, event: &E) -> EventOutcome {
        let mut outcome = EventOutcome::default();
        for (index, rule) in self.rules.iter().enumerate() {
            if !rule.spec.modifiers.matches(event.modifiers()) {
                continue;
            }
            if !(rule.matcher)(&rule.spec, cx, event) {
                continue;
            }
            tracing::trace!(target: "understory_event_match", rule = index, "rule matched");
            (rule.handler)(cx, event);
            outcome.matched += 1;
            outcome.prevent_default |= rule.options.prevent_default;
            outcome.stop_propagation |= rule.options.stop_propagation;
        }
        outcome
    }
}
