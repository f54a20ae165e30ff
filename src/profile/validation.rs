//! Presence validation for drafts.
//!
//! Failures are plain messages shown in the form, never error kinds.

use super::{DraftField, ListKind, ProfileDraft};

/// Human-readable validation failures, in display order
pub type ValidationReport = Vec<String>;

/// One message per required field that is empty after trimming
pub fn missing_required(draft: &ProfileDraft, required: &[DraftField]) -> ValidationReport {
    required
        .iter()
        .filter(|field| draft.field(**field).trim().is_empty())
        .map(|field| format!("{} is required", field.label()))
        .collect()
}

/// Message when a list holds fewer than `min` entries
pub fn missing_items(draft: &ProfileDraft, kind: ListKind, min: usize) -> Option<String> {
    if draft.list(kind).len() >= min {
        return None;
    }
    Some(if min == 1 {
        format!("Add at least one {}", singular(kind))
    } else {
        format!("Add at least {} {}", min, kind.label().to_lowercase())
    })
}

fn singular(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Skills => "skill",
        ListKind::Highlights => "highlight",
        ListKind::Links => "link",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_lists_each_empty_field() {
        let mut draft = ProfileDraft::new();
        draft.name = "Ada".to_string();
        draft.location = "   ".to_string();

        let report = missing_required(
            &draft,
            &[DraftField::Name, DraftField::Location, DraftField::Bio],
        );
        assert_eq!(
            report,
            vec![
                "Location is required".to_string(),
                "Bio is required".to_string()
            ]
        );
    }

    #[test]
    fn test_missing_required_all_present() {
        let mut draft = ProfileDraft::new();
        draft.name = "Ada".to_string();
        assert!(missing_required(&draft, &[DraftField::Name]).is_empty());
    }

    #[test]
    fn test_missing_items() {
        let mut draft = ProfileDraft::new();
        assert_eq!(
            missing_items(&draft, ListKind::Skills, 1),
            Some("Add at least one skill".to_string())
        );
        draft.skills.push("Rust".to_string());
        assert_eq!(missing_items(&draft, ListKind::Skills, 1), None);
        assert_eq!(
            missing_items(&draft, ListKind::Links, 2),
            Some("Add at least 2 links".to_string())
        );
    }
}
