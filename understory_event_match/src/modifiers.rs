// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modifier key masks and modifier match rules.

use smallvec::{SmallVec, smallvec};

bitflags::bitflags! {
    /// Modifier keys held while an input event was produced.
    ///
    /// The bit values follow the conventional `Ctrl=1, Shift=2, Alt=4, Meta=8`
    /// layout; an empty mask means "no modifiers".
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// The Control key.
        const CTRL  = 0b0000_0001;
        /// The Shift key.
        const SHIFT = 0b0000_0010;
        /// The Alt (Option) key.
        const ALT   = 0b0000_0100;
        /// The Meta (Command/Windows) key.
        const META  = 0b0000_1000;
    }
}

impl Modifiers {
    /// No modifier keys held.
    pub const NONE: Self = Self::empty();
}

/// Which modifier combinations a rule accepts.
///
/// A rule either accepts any modifier state, or one of a short list of exact
/// combinations. `[Modifiers::CTRL, Modifiers::META]` is the usual way to
/// express "the platform's primary modifier".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModifierMatch {
    /// Match regardless of which modifiers are held.
    Any,
    /// Match when the held modifiers equal one of these masks exactly.
    OneOf(SmallVec<[Modifiers; 2]>),
}

impl ModifierMatch {
    /// Returns `true` if `held` satisfies this rule.
    pub fn matches(&self, held: Modifiers) -> bool {
        match self {
            Self::Any => true,
            Self::OneOf(accepted) => accepted.iter().any(|m| *m == held),
        }
    }
}

impl Default for ModifierMatch {
    fn default() -> Self {
        Self::OneOf(smallvec![Modifiers::NONE])
    }
}

impl From<Modifiers> for ModifierMatch {
    fn from(value: Modifiers) -> Self {
        Self::OneOf(smallvec![value])
    }
}

impl<const N: usize> From<[Modifiers; N]> for ModifierMatch {
    fn from(value: [Modifiers; N]) -> Self {
        Self::OneOf(value.into_iter().collect())
    }
}
