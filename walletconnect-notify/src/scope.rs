//! Subscription scope resolution.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::NotificationType;

/// Whether one notification type is enabled for a subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeValue {
    pub description: String,
    pub enabled: bool,
}

/// Merge a subscriber's selected scope with the app's advertised types.
///
/// The output has exactly one entry per advertised name, enabled iff the
/// subscriber selected it. Selected names the app no longer advertises are
/// dropped.
///
/// # Example
///
/// ```
/// use walletconnect_notify::{resolve_scope, NotificationType};
///
/// let available = vec![
///     NotificationType::new("alerts", "Security alerts"),
///     NotificationType::new("promotional", "Promotions"),
/// ];
/// let scope = resolve_scope(&["alerts".to_string(), "legacy".to_string()], &available);
///
/// assert_eq!(scope.len(), 2);
/// assert!(scope["alerts"].enabled);
/// assert!(!scope["promotional"].enabled);
/// assert!(!scope.contains_key("legacy"));
/// ```
pub fn resolve_scope(
    selected: &[String],
    available: &[NotificationType],
) -> HashMap<String, ScopeValue> {
    available
        .iter()
        .map(|kind| {
            let value = ScopeValue {
                description: kind.description.clone(),
                enabled: selected.contains(&kind.name),
            };
            (kind.name.clone(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_available_gives_empty_scope() {
        let scope = resolve_scope(&["alerts".to_string()], &[]);
        assert!(scope.is_empty());
    }

    #[test]
    fn nothing_selected_disables_everything() {
        let available = vec![
            NotificationType::new("a", "A"),
            NotificationType::new("b", "B"),
        ];
        let scope = resolve_scope(&[], &available);
        assert_eq!(scope.len(), 2);
        assert!(scope.values().all(|v| !v.enabled));
        assert_eq!(scope["b"].description, "B");
    }
}
