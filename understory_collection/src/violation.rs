// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Development-time consistency diagnostics.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;

/// A state the engine tolerates but a host should not produce.
///
/// Returned by the `validate` methods; the `Display` text is meant for
/// development logs, never for end users.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// A single-select collection holds more than one selected value.
    #[error("a single-select collection should not have multiple selected values: {values}")]
    MultipleSelectedInSingle {
        /// The selected values, formatted for display.
        values: String,
    },
    /// A selected item is disabled while disabled items are skipped, so a
    /// keyboard user can never reach it to deselect it.
    #[error("selected item {id} is disabled and cannot be reached while disabled items are skipped")]
    UnreachableSelection {
        /// The id of the unreachable item, formatted for display.
        id: String,
    },
}

impl Violation {
    pub(crate) fn multiple_selected<V: Debug>(values: impl IntoIterator<Item = V>) -> Self {
        let values: Vec<String> = values.into_iter().map(|v| format!("{v:?}")).collect();
        Self::MultipleSelectedInSingle {
            values: values.join(", "),
        }
    }

    pub(crate) fn unreachable<K: Debug>(id: &K) -> Self {
        Self::UnreachableSelection {
            id: format!("{id:?}"),
        }
    }
}

/// Emit found violations as a debug event and return them.
pub(crate) fn report(target: &'static str, violations: Vec<Violation>) -> Vec<Violation> {
    if !violations.is_empty() {
        tracing::debug!(target: "understory_collection::validate", collection = target, count = violations.len(), "consistency violations found");
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_are_human_readable() {
        let v = Violation::multiple_selected([1, 2]);
        assert_eq!(
            v.to_string(),
            "a single-select collection should not have multiple selected values: 1, 2"
        );
        let v = Violation::unreachable(&"opt-3");
        assert!(v.to_string().contains("\"opt-3\""), "id should be debug-formatted");
    }
}
