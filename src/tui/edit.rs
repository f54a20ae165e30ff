//! Profile Edit Wizard
//!
//! Edits an existing profile in a split pane: the form on the left, a live
//! card preview on the right. Unlike setup, saving is allowed from any step
//! once the whole draft validates.

use super::form::{DraftForm, FormCommand, FormField, StepSpec, WizardAction};
use crate::profile::{DraftField, ListKind, ProfileDraft};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub static EDIT_STEPS: [StepSpec; 3] = [
    StepSpec {
        title: "Basic Info",
        subtitle: "Name, contact and avatar",
        fields: &[
            FormField::Text(DraftField::Name),
            FormField::Text(DraftField::Email),
            FormField::Text(DraftField::Location),
            FormField::Text(DraftField::AvatarUrl),
        ],
        required: &[DraftField::Name],
        min_skills: 0,
    },
    StepSpec {
        title: "Professional",
        subtitle: "Role, focus and bio",
        fields: &[
            FormField::Text(DraftField::Role),
            FormField::Text(DraftField::Focus),
            FormField::Text(DraftField::Bio),
            FormField::Text(DraftField::LookingFor),
        ],
        required: &[],
        min_skills: 0,
    },
    StepSpec {
        title: "Skills & Links",
        subtitle: "Skills, highlights and links",
        fields: &[
            FormField::List(ListKind::Skills),
            FormField::List(ListKind::Highlights),
            FormField::List(ListKind::Links),
        ],
        required: &[],
        min_skills: 0,
    },
];

pub struct ProfileEdit {
    pub form: DraftForm,
}

impl ProfileEdit {
    /// Open the editor on a copy of an existing profile
    pub fn new(existing: ProfileDraft) -> Self {
        let mut draft = existing;
        draft.refresh_avatar_preview();
        Self {
            form: DraftForm::new(&EDIT_STEPS, draft),
        }
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.form.draft
    }

    pub fn submit_label(&self) -> &'static str {
        "Save"
    }

    pub fn handle_key(&mut self, event: KeyEvent) -> WizardAction {
        // Alt+1..3 jumps between tabs
        if event.modifiers.contains(KeyModifiers::ALT)
            && let KeyCode::Char(c @ '1'..='3') = event.code
        {
            self.jump_to(c as usize - '0' as usize);
            return WizardAction::None;
        }

        match self.form.handle_key(event) {
            FormCommand::None => WizardAction::None,
            FormCommand::Leave => WizardAction::Cancel,
            FormCommand::Submit => self.submit(),
        }
    }

    /// Jump to a tab. Moving forward still requires every step being
    /// skipped over to validate.
    pub fn jump_to(&mut self, step: usize) -> bool {
        if self.form.is_loading() || step == 0 || step > self.form.steps.len() {
            return false;
        }
        let current = self.form.step();
        if step > current {
            let report: Vec<String> = self.form.steps[current - 1..step - 1]
                .iter()
                .flat_map(|spec| spec.validate(&self.form.draft))
                .collect();
            if !report.is_empty() {
                self.form.errors = report;
                return false;
            }
        }
        self.form.errors.clear();
        self.form.focused = 0;
        self.form.controller.go_to(step)
    }

    pub fn submit(&mut self) -> WizardAction {
        match self.form.try_begin_submit() {
            Some(draft) => {
                tracing::info!("Profile edit saved for {:?}", draft.name);
                WizardAction::Submit(draft)
            }
            None => WizardAction::None,
        }
    }

    pub fn finish_submit(&mut self) {
        self.form.finish_submit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Profile;
    use crate::tui::form::test_support::{ctrl, key};

    fn existing() -> ProfileDraft {
        Profile::sample().draft
    }

    #[test]
    fn test_edit_starts_with_existing_values() {
        let edit = ProfileEdit::new(existing());
        assert_eq!(edit.draft().name, "Ada Lovelace");
        assert_eq!(edit.form.step(), 1);
        assert_eq!(edit.submit_label(), "Save");
    }

    #[test]
    fn test_save_from_first_step() {
        let mut edit = ProfileEdit::new(existing());
        edit.handle_key(key(KeyCode::Char('!')));
        let action = edit.handle_key(ctrl('s'));
        assert_eq!(
            action,
            WizardAction::Submit(ProfileDraft {
                name: "Ada Lovelace!".to_string(),
                ..existing()
            })
        );
        assert!(edit.form.is_loading());
    }

    #[test]
    fn test_cleared_name_blocks_next_and_save() {
        let mut edit = ProfileEdit::new(existing());
        edit.form.draft.name.clear();
        edit.handle_key(ctrl('n'));
        assert_eq!(edit.form.step(), 1);
        assert_eq!(edit.handle_key(ctrl('s')), WizardAction::None);
        assert_eq!(edit.form.errors, vec!["Name is required".to_string()]);
    }

    #[test]
    fn test_alt_number_jumps_tabs() {
        let mut edit = ProfileEdit::new(existing());
        edit.handle_key(KeyEvent::new(KeyCode::Char('3'), KeyModifiers::ALT));
        assert_eq!(edit.form.step(), 3);
        edit.handle_key(KeyEvent::new(KeyCode::Char('2'), KeyModifiers::ALT));
        assert_eq!(edit.form.step(), 2);
        assert_eq!(edit.draft().name, "Ada Lovelace");
    }

    #[test]
    fn test_jump_forward_blocked_by_invalid_step() {
        let mut edit = ProfileEdit::new(existing());
        edit.form.draft.name = "  ".to_string();
        assert!(!edit.jump_to(3));
        assert_eq!(edit.form.step(), 1);
        assert_eq!(edit.form.errors, vec!["Name is required".to_string()]);
    }

    #[test]
    fn test_remove_existing_skill() {
        let mut edit = ProfileEdit::new(existing());
        edit.form.controller.go_to(3);
        edit.handle_key(key(KeyCode::Down));
        edit.handle_key(key(KeyCode::Delete));
        assert_eq!(
            edit.draft().skills,
            vec!["Mathematics".to_string(), "Technical writing".to_string()]
        );
    }

    #[test]
    fn test_esc_cancels_from_first_step() {
        let mut edit = ProfileEdit::new(existing());
        assert_eq!(edit.handle_key(key(KeyCode::Esc)), WizardAction::Cancel);
    }
}
