//! Ordered string-list operations shared by skills, highlights and links.

/// Append `value` trimmed, unless it is empty after trimming.
/// Returns whether the list changed.
pub fn add_trimmed(items: &mut Vec<String>, value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }
    items.push(trimmed.to_string());
    true
}

/// Remove the entry at `index`, keeping the relative order of the rest.
/// Out-of-range indices leave the list untouched.
pub fn remove_at(items: &mut Vec<String>, index: usize) -> Option<String> {
    if index < items.len() {
        Some(items.remove(index))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("\t\n")]
    #[case("   \u{3000}")]
    fn test_blank_values_are_ignored(#[case] value: &str) {
        let mut items = vec!["Rust".to_string()];
        assert!(!add_trimmed(&mut items, value));
        assert_eq!(items, vec!["Rust".to_string()]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut items = Vec::new();
        add_trimmed(&mut items, "Rust");
        add_trimmed(&mut items, "Rust");
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut items = vec!["a".to_string()];
        assert_eq!(remove_at(&mut items, 1), None);
        assert_eq!(items.len(), 1);
    }

    proptest! {
        #[test]
        fn prop_whitespace_add_is_noop(
            items in proptest::collection::vec("[a-z]{1,8}", 0..10),
            ws in "[ \t\n]{0,6}",
        ) {
            let mut list = items.clone();
            prop_assert!(!add_trimmed(&mut list, &ws));
            prop_assert_eq!(list, items);
        }

        #[test]
        fn prop_add_appends_trimmed(
            items in proptest::collection::vec("[a-z]{1,8}", 0..10),
            value in "[ ]{0,3}[a-z]{1,8}[ ]{0,3}",
        ) {
            let mut list = items.clone();
            prop_assert!(add_trimmed(&mut list, &value));
            prop_assert_eq!(list.len(), items.len() + 1);
            prop_assert_eq!(list.last().map(String::as_str), Some(value.trim()));
        }

        #[test]
        fn prop_remove_preserves_order(
            items in proptest::collection::vec("[a-z]{1,8}", 1..12),
            pick in any::<prop::sample::Index>(),
        ) {
            let index = pick.index(items.len());
            let mut list = items.clone();
            let removed = remove_at(&mut list, index);

            prop_assert_eq!(removed.as_ref(), Some(&items[index]));
            prop_assert_eq!(list.len(), items.len() - 1);

            let mut expected = items.clone();
            expected.remove(index);
            prop_assert_eq!(list, expected);
        }
    }
}
