// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer events and the pointer rule builder.

use crate::manager::{EventManager, EventOptions, EventOutcome, Handler, InputEvent, RuleSpec};
use crate::modifiers::{ModifierMatch, Modifiers};

/// Pointer button, numbered like the web `PointerEvent.button` field.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left mouse button, or a touch/pen contact.
    #[default]
    Primary,
    /// Usually the middle mouse button.
    Auxiliary,
    /// Usually the right mouse button.
    Secondary,
}

/// A pointer press targeting an item of type `K`.
///
/// The host resolves which item was hit (by hit testing, DOM lookup, or any
/// other means) and passes its identifier as `target`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointerEvent<K> {
    /// Button that was pressed.
    pub button: PointerButton,
    /// Modifier keys held during the press.
    pub modifiers: Modifiers,
    /// Item under the pointer, if any.
    pub target: Option<K>,
}

impl<K> PointerEvent<K> {
    /// A primary-button press on `target` with no modifiers.
    pub fn on(target: K) -> Self {
        Self {
            button: PointerButton::Primary,
            modifiers: Modifiers::NONE,
            target: Some(target),
        }
    }

    /// Set the held modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the pressed button.
    #[must_use]
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }
}

impl<K> InputEvent for PointerEvent<K> {
    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

fn match_button<C, K>(spec: &RuleSpec<C>, _: &C, event: &PointerEvent<K>) -> bool {
    spec.button.unwrap_or_default() == event.button
}

/// Builder and dispatcher for pointer rules over a context `C`.
///
/// Rules default to the primary button, to "no modifiers", and to
/// [`EventOptions::POINTER`] (the event keeps its default action and keeps
/// propagating).
pub struct PointerEventManager<C, K> {
    rules: EventManager<C, PointerEvent<K>>,
}

impl<C, K> core::fmt::Debug for PointerEventManager<C, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PointerEventManager")
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl<C, K> Default for PointerEventManager<C, K> {
    fn default() -> Self {
        Self {
            rules: EventManager::default(),
        }
    }
}

impl<C, K> PointerEventManager<C, K> {
    /// Create an empty pointer manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an unmodified primary-button rule.
    #[must_use]
    pub fn on(self, handler: Handler<C, PointerEvent<K>>) -> Self {
        self.on_with(Modifiers::NONE, handler)
    }

    /// Register a primary-button rule that requires the given modifiers.
    #[must_use]
    pub fn on_with(
        self,
        modifiers: impl Into<ModifierMatch>,
        handler: Handler<C, PointerEvent<K>>,
    ) -> Self {
        self.on_button(modifiers, PointerButton::Primary, EventOptions::POINTER, handler)
    }

    /// Register a rule for a specific button with explicit options.
    #[must_use]
    pub fn on_button(
        mut self,
        modifiers: impl Into<ModifierMatch>,
        button: PointerButton,
        options: EventOptions,
        handler: Handler<C, PointerEvent<K>>,
    ) -> Self {
        let spec = RuleSpec {
            modifiers: modifiers.into(),
            key: None,
            button: Some(button),
        };
        self.rules.push(spec, match_button::<C, K>, handler, options);
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
    pub fn handle(&self, cx: &mut C, event: &PointerEvent<K>) -> EventOutcome {
        self.rules.handle(cx, event)
    }
}
