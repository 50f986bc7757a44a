//! Caller-side validation layer.
//!
//! Raw forms deserialize straight from the presentation layer and carry
//! `validator` rules; `TryFrom` turns them into payloads built from domain
//! newtypes. The store itself never validates required-field presence.

pub mod categories;
pub mod guides;
pub mod steps;

/// Collapses empty or whitespace-only optional inputs into `None`.
pub(crate) fn normalize_optional(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
