//! Profile Setup Wizard
//!
//! A 3-step wizard that collects a new profile. The same state backs the
//! modal overlay and the full-page layout; only rendering and the name of
//! the exit callback differ.

use super::form::{DraftForm, FormCommand, FormField, StepSpec, WizardAction};
use crate::profile::{DraftField, ListKind, ProfileDraft};
use crossterm::event::KeyEvent;

pub static SETUP_STEPS: [StepSpec; 3] = [
    StepSpec {
        title: "Basics",
        subtitle: "Who you are and where you are based",
        fields: &[
            FormField::Text(DraftField::Name),
            FormField::Text(DraftField::Email),
            FormField::Text(DraftField::Location),
            FormField::Text(DraftField::AvatarUrl),
        ],
        required: &[DraftField::Name, DraftField::Location],
        min_skills: 0,
    },
    StepSpec {
        title: "About",
        subtitle: "What you work on and what you are looking for",
        fields: &[
            FormField::Text(DraftField::Role),
            FormField::Text(DraftField::Focus),
            FormField::Text(DraftField::Bio),
            FormField::Text(DraftField::LookingFor),
        ],
        required: &[DraftField::Focus, DraftField::Bio],
        min_skills: 0,
    },
    StepSpec {
        title: "Skills & Links",
        subtitle: "What you are good at and where to find you",
        fields: &[
            FormField::List(ListKind::Skills),
            FormField::List(ListKind::Highlights),
            FormField::List(ListKind::Links),
        ],
        required: &[],
        min_skills: 1,
    },
];

/// Where the setup wizard is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupLayout {
    /// Centered overlay; leaving it is a close
    Modal,
    /// Full-screen page; leaving it is a back navigation
    Page,
}

pub struct ProfileSetup {
    pub form: DraftForm,
    pub layout: SetupLayout,
}

impl ProfileSetup {
    /// Open the wizard with an empty draft
    pub fn new(layout: SetupLayout) -> Self {
        Self {
            form: DraftForm::new(&SETUP_STEPS, ProfileDraft::new()),
            layout,
        }
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.form.draft
    }

    /// Label of the terminal button
    pub fn submit_label(&self) -> &'static str {
        "Complete"
    }

    pub fn handle_key(&mut self, event: KeyEvent) -> WizardAction {
        match self.form.handle_key(event) {
            FormCommand::None => WizardAction::None,
            FormCommand::Leave => WizardAction::Cancel,
            FormCommand::Submit => self.submit(),
        }
    }

    /// Complete is only offered on the last step
    pub fn submit(&mut self) -> WizardAction {
        if !self.form.controller.is_last() {
            self.form.errors = vec!["Finish every step before completing".to_string()];
            return WizardAction::None;
        }
        match self.form.try_begin_submit() {
            Some(draft) => {
                tracing::info!("Profile setup submitted for {:?}", draft.name);
                WizardAction::Submit(draft)
            }
            None => WizardAction::None,
        }
    }

    pub fn finish_submit(&mut self) {
        self.form.finish_submit();
    }
}
