// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard events, key patterns, and the keyboard rule builder.

use alloc::borrow::Cow;
use alloc::string::String;

use crate::manager::{EventManager, EventOptions, EventOutcome, Handler, InputEvent, RuleSpec};
use crate::modifiers::{ModifierMatch, Modifiers};

/// A key press as seen by the engine.
///
/// `key` uses the web `KeyboardEvent.key` vocabulary (`"ArrowDown"`, `"Home"`,
/// `"a"`, `" "`, `"Shift"`, ...). `timestamp` is in milliseconds on any
/// monotonic clock chosen by the host; time-based behaviors such as typeahead
/// compare timestamps from the same clock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyboardEvent {
    /// Logical key value.
    pub key: String,
    /// Modifier keys held during the press.
    pub modifiers: Modifiers,
    /// Event timestamp in milliseconds.
    pub timestamp: u64,
}

impl KeyboardEvent {
    /// Create an unmodified key press at time zero.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::NONE,
            timestamp: 0,
        }
    }

    /// Set the held modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the event timestamp in milliseconds.
    #[must_use]
    pub fn at(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Returns the single character carried by this key, if it is printable.
    pub fn printable_char(&self) -> Option<char> {
        let mut chars = self.key.chars();
        let c = chars.next()?;
        (chars.next().is_none() && !c.is_control()).then_some(c)
    }
}

impl InputEvent for KeyboardEvent {
    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

/// Which key values a keyboard rule accepts.
pub enum KeyPattern<C> {
    /// A fixed key, compared case-insensitively.
    Literal(Cow<'static, str>),
    /// A key computed from the context at match time.
    ///
    /// Used for direction keys whose meaning depends on orientation or text
    /// direction, which may change between events.
    Lazy(fn(&C) -> &'static str),
    /// Any single printable character (typeahead input).
    Printable,
}

impl<C> Clone for KeyPattern<C> {
    fn clone(&self) -> Self {
        match self {
            Self::Literal(key) => Self::Literal(key.clone()),
            Self::Lazy(compute) => Self::Lazy(*compute),
            Self::Printable => Self::Printable,
        }
    }
}

impl<C> core::fmt::Debug for KeyPattern<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Literal(key) => f.debug_tuple("Literal").field(key).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
            Self::Printable => f.write_str("Printable"),
        }
    }
}

impl<C> KeyPattern<C> {
    /// Returns `true` if `key` satisfies this pattern in context `cx`.
    pub fn matches(&self, cx: &C, key: &str) -> bool {
        match self {
            Self::Literal(expected) => eq_ignore_case(expected, key),
            Self::Lazy(compute) => eq_ignore_case(compute(cx), key),
            Self::Printable => {
                let mut chars = key.chars();
                matches!((chars.next(), chars.next()), (Some(c), None) if !c.is_control())
            }
        }
    }
}

impl<C> From<&'static str> for KeyPattern<C> {
    fn from(value: &'static str) -> Self {
        Self::Literal(Cow::Borrowed(value))
    }
}

impl<C> From<String> for KeyPattern<C> {
    fn from(value: String) -> Self {
        Self::Literal(Cow::Owned(value))
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

fn match_key<C>(spec: &RuleSpec<C>, cx: &C, event: &KeyboardEvent) -> bool {
    spec.key
        .as_ref()
        .is_some_and(|pattern| pattern.matches(cx, &event.key))
}

/// Builder and dispatcher for keyboard rules over a context `C`.
///
/// Rules default to "no modifiers" and to [`EventOptions::KEYBOARD`]
/// (prevent default and stop propagation).
///
/// ```
/// use understory_event_match::{KeyboardEvent, KeyboardEventManager, Modifiers};
///
/// #[derive(Default)]
/// struct Counter { down: u32, shift_seen: u32 }
///
/// let manager = KeyboardEventManager::<Counter>::new()
///     .on_with(understory_event_match::ModifierMatch::Any, "Shift", |c, _| c.shift_seen += 1)
///     .on("ArrowDown", |c, _| c.down += 1);
///
/// let mut counter = Counter::default();
/// let outcome = manager.handle(&mut counter, &KeyboardEvent::new("arrowdown"));
/// assert!(outcome.is_handled());
/// assert_eq!(counter.down, 1);
///
/// // Shift+ArrowDown does not match the unmodified rule.
/// let shifted = KeyboardEvent::new("ArrowDown").with_modifiers(Modifiers::SHIFT);
/// assert!(!manager.handle(&mut counter, &shifted).is_handled());
/// ```
pub struct KeyboardEventManager<C> {
    rules: EventManager<C, KeyboardEvent>,
}

impl<C> core::fmt::Debug for KeyboardEventManager<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyboardEventManager")
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl<C> Default for KeyboardEventManager<C> {
    fn default() -> Self {
        Self {
            rules: EventManager::default(),
        }
    }
}

impl<C> KeyboardEventManager<C> {
    /// Create an empty keyboard manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an unmodified key rule.
    #[must_use]
    pub fn on(self, key: impl Into<KeyPattern<C>>, handler: Handler<C, KeyboardEvent>) -> Self {
        self.on_with(Modifiers::NONE, key, handler)
    }

    /// Register a key rule that requires the given modifiers.
    #[must_use]
    pub fn on_with(
        self,
        modifiers: impl Into<ModifierMatch>,
        key: impl Into<KeyPattern<C>>,
        handler: Handler<C, KeyboardEvent>,
    ) -> Self {
        self.on_with_options(modifiers, key, EventOptions::KEYBOARD, handler)
    }

    /// Register a key rule with explicit side-effect options.
    #[must_use]
    pub fn on_with_options(
        mut self,
        modifiers: impl Into<ModifierMatch>,
        key: impl Into<KeyPattern<C>>,
        options: EventOptions,
        handler: Handler<C, KeyboardEvent>,
    ) -> Self {
        let spec = RuleSpec {
            modifiers: modifiers.into(),
            key: Some(key.into()),
            button: None,
        };
        self.rules.push(spec, match_key::<C>, handler, options);
        self
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every matching rule against `event`.
    pub fn handle(&self, cx: &mut C, event: &KeyboardEvent) -> EventOutcome {
        self.rules.handle(cx, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct Log {
        seen: Vec<&'static str>,
        vertical: bool,
    }

    fn next_key(log: &Log) -> &'static str {
        if log.vertical { "ArrowDown" } else { "ArrowRight" }
    }

    #[test]
    fn literal_keys_compare_case_insensitively() {
        let manager = KeyboardEventManager::<Log>::new().on("Home", |l, _| l.seen.push("home"));
        let mut log = Log::default();
        assert!(manager.handle(&mut log, &KeyboardEvent::new("HOME")).is_handled());
        assert_eq!(log.seen, ["home"]);
    }

    #[test]
    fn all_matching_rules_fire_in_order() {
        let manager = KeyboardEventManager::<Log>::new()
            .on_with(ModifierMatch::Any, "Shift", |l, _| l.seen.push("anchor"))
            .on_with(Modifiers::SHIFT, "Shift", |l, _| l.seen.push("shift-only"))
            .on("Shift", |l, _| l.seen.push("bare"));
        let mut log = Log::default();
        let ev = KeyboardEvent::new("Shift").with_modifiers(Modifiers::SHIFT);
        let outcome = manager.handle(&mut log, &ev);
        assert_eq!(outcome.matched, 2);
        assert_eq!(log.seen, ["anchor", "shift-only"]);
    }

    #[test]
    fn lazy_keys_follow_context() {
        let manager = KeyboardEventManager::<Log>::new()
            .on(KeyPattern::Lazy(next_key), |l, _| l.seen.push("next"));
        let mut log = Log::default();
        assert!(!manager.handle(&mut log, &KeyboardEvent::new("ArrowDown")).is_handled());
        assert!(manager.handle(&mut log, &KeyboardEvent::new("ArrowRight")).is_handled());
        log.vertical = true;
        assert!(manager.handle(&mut log, &KeyboardEvent::new("ArrowDown")).is_handled());
        assert_eq!(log.seen, ["next", "next"]);
    }

    #[test]
    fn matchers_see_state_left_by_earlier_handlers() {
        let manager = KeyboardEventManager::<Log>::new()
            .on("ArrowDown", |l, _| l.vertical = true)
            .on(KeyPattern::Lazy(next_key), |l, _| l.seen.push("next"));
        let mut log = Log::default();
        let outcome = manager.handle(&mut log, &KeyboardEvent::new("ArrowDown"));
        assert_eq!(outcome.matched, 2);
        assert_eq!(log.seen, ["next"]);
    }

    #[test]
    fn printable_pattern_accepts_single_characters_only() {
        let manager =
            KeyboardEventManager::<Log>::new().on(KeyPattern::Printable, |l, _| l.seen.push("char"));
        let mut log = Log::default();
        assert!(manager.handle(&mut log, &KeyboardEvent::new("a")).is_handled());
        assert!(manager.handle(&mut log, &KeyboardEvent::new("é")).is_handled());
        assert!(manager.handle(&mut log, &KeyboardEvent::new(" ")).is_handled());
        assert!(!manager.handle(&mut log, &KeyboardEvent::new("Enter")).is_handled());
        assert!(!manager.handle(&mut log, &KeyboardEvent::new("\t")).is_handled());
        assert_eq!(log.seen.len(), 3);
    }

    #[test]
    fn options_merge_across_rules() {
        let manager = KeyboardEventManager::<Log>::new()
            .on_with_options(Modifiers::NONE, "x", EventOptions::POINTER, |_, _| {})
            .on_with_options(
                Modifiers::NONE,
                "y",
                EventOptions {
                    prevent_default: true,
                    stop_propagation: false,
                },
                |_, _| {},
            );
        let mut log = Log::default();
        let x = manager.handle(&mut log, &KeyboardEvent::new("x"));
        assert!(x.is_handled() && !x.prevent_default && !x.stop_propagation);
        let y = manager.handle(&mut log, &KeyboardEvent::new("y"));
        assert!(y.prevent_default && !y.stop_propagation);
        let none = manager.handle(&mut log, &KeyboardEvent::new("z"));
        assert_eq!(none, EventOutcome::default());
    }

    #[test]
    fn printable_char_helper() {
        assert_eq!(KeyboardEvent::new("q").printable_char(), Some('q'));
        assert_eq!(KeyboardEvent::new("ArrowUp").printable_char(), None);
    }
}
