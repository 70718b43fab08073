//! Parser warnings with deduplication.
//!
//! Avoids spamming the same warning once per element on large inputs.
//! Used by the parser to report input it accepts but silently discards.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Emit a warning through `log::warn!` the first time a message is seen.
///
/// Returns `true` if the warning was emitted, `false` if it was a repeat.
///
/// # Example
/// ```
/// use sprig_common::warning::warn_once;
///
/// let first = warn_once("Doc", "example warning");
/// assert!(first);
/// assert!(!warn_once("Doc", "example warning"));
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        log::warn!("[Sprig {component}] {message}");
    }
    should_print
}

/// Forget every recorded warning (call before parsing a new document).
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_is_suppressed_until_cleared() {
        let message = "unit-test warning that no other test uses";
        assert!(warn_once("Test", message));
        assert!(!warn_once("Test", message));
        clear_warnings();
        assert!(warn_once("Test", message));
    }

    #[test]
    fn test_component_is_part_of_the_key() {
        let message = "shared message for two components";
        let _ = warn_once("First", message);
        assert!(warn_once("Second", message));
    }
}
