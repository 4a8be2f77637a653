//! Selection helpers for single- and multi-value menus.

use std::ops::Deref;

/// Toggle `value` in `selected`: remove it when present, append it otherwise.
///
/// Existing entries keep their order; new entries land at the end.
#[must_use]
pub fn toggle_value<T: PartialEq + Clone>(selected: &[T], value: &T) -> Vec<T> {
    if selected.contains(value) {
        selected.iter().filter(|v| *v != value).cloned().collect()
    } else {
        let mut next = Vec::with_capacity(selected.len() + 1);
        next.extend_from_slice(selected);
        next.push(value.clone());
        next
    }
}

/// Display label for `value`, falling back to the raw value when no option matches.
#[must_use]
pub fn label_for<'a, V, L>(options: &'a [(V, L)], value: &'a str) -> &'a str
where
    V: Deref<Target = str>,
    L: Deref<Target = str>,
{
    options
        .iter()
        .find(|(candidate, _)| &**candidate == value)
        .map_or(value, |(_, label)| &**label)
}

/// Whether `value` is the currently committed single selection.
#[must_use]
pub fn is_current<V: Deref<Target = str>>(current: Option<&V>, value: &str) -> bool {
    current.is_some_and(|current| &**current == value)
}

/// Whether a key commits the focused menu item.
#[must_use]
pub fn is_commit_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_appends_in_call_order() {
        let first = toggle_value(&[], &"b");
        let second = toggle_value(&first, &"a");
        let third = toggle_value(&second, &"c");
        assert_eq!(third, vec!["b", "a", "c"]);
    }

    #[test]
    fn toggling_selected_value_removes_it_without_reordering() {
        let selected = vec!["b", "a", "c"];
        assert_eq!(toggle_value(&selected, &"a"), vec!["b", "c"]);
    }

    #[test]
    fn labels_fall_back_to_raw_value() {
        let options = vec![
            ("rs".to_string(), "Rust".to_string()),
            ("go".to_string(), "Go".to_string()),
        ];
        assert_eq!(label_for(&options, "rs"), "Rust");
        assert_eq!(label_for(&options, "zig"), "zig");
    }

    #[test]
    fn current_value_matching() {
        let current = "2".to_string();
        assert!(is_current(Some(&current), "2"));
        assert!(!is_current(Some(&current), "3"));
        assert!(!is_current::<String>(None, "2"));
    }

    #[test]
    fn enter_and_space_commit() {
        assert!(is_commit_key("Enter"));
        assert!(is_commit_key(" "));
        assert!(!is_commit_key("Escape"));
    }
}
