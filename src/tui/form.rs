//! Draft Form
//!
//! Shared form state for the setup and edit wizards: the draft, the step
//! controller, field focus, list editors and the current validation
//! messages. Each wizard supplies its own step table and submit rule.

use super::events::keys;
use super::list_editor::ListEditor;
use super::wizard::StepController;
use crate::profile::validation::{self, ValidationReport};
use crate::profile::{DraftField, ListKind, ProfileDraft};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One editable field on a wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Text(DraftField),
    List(ListKind),
}

/// Static description of a wizard step
#[derive(Debug)]
pub struct StepSpec {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub fields: &'static [FormField],
    /// Text fields that must be non-empty to leave this step
    pub required: &'static [DraftField],
    /// Minimum number of skills required on this step
    pub min_skills: usize,
}

impl StepSpec {
    pub fn validate(&self, draft: &ProfileDraft) -> ValidationReport {
        let mut report = validation::missing_required(draft, self.required);
        if self.min_skills > 0
            && let Some(msg) = validation::missing_items(draft, ListKind::Skills, self.min_skills)
        {
            report.push(msg);
        }
        report
    }

    pub fn is_required(&self, field: FormField) -> bool {
        match field {
            FormField::Text(f) => self.required.contains(&f),
            FormField::List(ListKind::Skills) => self.min_skills > 0,
            FormField::List(_) => false,
        }
    }
}

/// What the host should do after a wizard handled a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    /// Nothing special
    None,
    /// User left the wizard from step 1 (back/close)
    Cancel,
    /// Start the simulated save with this draft
    Submit(ProfileDraft),
}

/// Result of routing a key through the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormCommand {
    None,
    Leave,
    Submit,
}

#[derive(Debug, Clone, Default)]
pub struct ListEditors {
    pub skills: ListEditor,
    pub highlights: ListEditor,
    pub links: ListEditor,
}

impl ListEditors {
    pub fn get(&self, kind: ListKind) -> &ListEditor {
        match kind {
            ListKind::Skills => &self.skills,
            ListKind::Highlights => &self.highlights,
            ListKind::Links => &self.links,
        }
    }

    pub fn get_mut(&mut self, kind: ListKind) -> &mut ListEditor {
        match kind {
            ListKind::Skills => &mut self.skills,
            ListKind::Highlights => &mut self.highlights,
            ListKind::Links => &mut self.links,
        }
    }
}

pub struct DraftForm {
    pub draft: ProfileDraft,
    pub steps: &'static [StepSpec],
    pub controller: StepController,
    pub focused: usize,
    pub editors: ListEditors,
    /// Messages from the last rejected Next/Submit
    pub errors: ValidationReport,
}

impl DraftForm {
    pub fn new(steps: &'static [StepSpec], draft: ProfileDraft) -> Self {
        Self {
            draft,
            steps,
            controller: StepController::new(steps.len()),
            focused: 0,
            editors: ListEditors::default(),
            errors: Vec::new(),
        }
    }

    pub fn step(&self) -> usize {
        self.controller.current()
    }

    pub fn spec(&self) -> &'static StepSpec {
        let steps = self.steps;
        &steps[self.controller.current() - 1]
    }

    pub fn is_loading(&self) -> bool {
        self.controller.is_loading()
    }

    pub fn focused_field(&self) -> FormField {
        let fields = self.spec().fields;
        fields[self.focused.min(fields.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        let len = self.spec().fields.len();
        self.focused = (self.focused + 1) % len;
    }

    pub fn focus_prev(&mut self) {
        let len = self.spec().fields.len();
        self.focused = (self.focused + len - 1) % len;
    }

    pub fn validate_current(&self) -> ValidationReport {
        self.spec().validate(&self.draft)
    }

    pub fn validate_all(&self) -> ValidationReport {
        self.steps
            .iter()
            .flat_map(|step| step.validate(&self.draft))
            .collect()
    }

    /// Whether Next is enabled on the current step
    pub fn can_advance(&self) -> bool {
        !self.controller.is_last() && self.validate_current().is_empty()
    }

    /// Advance if the current step is valid; otherwise record why not
    pub fn next_step(&mut self) -> bool {
        let report = self.validate_current();
        let valid = report.is_empty();
        self.errors = report;
        if self.controller.next(valid) {
            self.focused = 0;
            tracing::debug!("Wizard advanced to step {}", self.step());
            true
        } else {
            false
        }
    }

    /// Step back. `false` on step 1 means the caller should leave.
    pub fn prev_step(&mut self) -> bool {
        self.errors.clear();
        if self.controller.prev() {
            self.focused = 0;
            true
        } else {
            false
        }
    }

    /// Start a submit if every step validates and none is in flight
    pub fn try_begin_submit(&mut self) -> Option<ProfileDraft> {
        if self.is_loading() {
            return None;
        }
        let report = self.validate_all();
        if !report.is_empty() {
            self.errors = report;
            return None;
        }
        self.errors.clear();
        if !self.controller.begin_submit() {
            return None;
        }
        Some(self.draft.clone())
    }

    pub fn finish_submit(&mut self) {
        self.controller.finish_submit();
    }

    pub fn add_list_item(&mut self, kind: ListKind) -> bool {
        let editor = self.editors.get_mut(kind);
        editor.commit(self.draft.list_mut(kind))
    }

    pub fn remove_list_item(&mut self, kind: ListKind) -> Option<String> {
        let editor = self.editors.get_mut(kind);
        editor.remove_selected(self.draft.list_mut(kind))
    }

    /// Route a key through focus, editing and step navigation
    pub fn handle_key(&mut self, event: KeyEvent) -> FormCommand {
        if self.is_loading() {
            // Form is locked until the in-flight save returns
            return FormCommand::None;
        }

        if keys::is_cancel(&event) {
            if !self.prev_step() {
                return FormCommand::Leave;
            }
            return FormCommand::None;
        }
        if keys::is_next_step(&event) {
            self.next_step();
            return FormCommand::None;
        }
        if keys::is_prev_step(&event) {
            self.prev_step();
            return FormCommand::None;
        }
        if keys::is_submit(&event) {
            return FormCommand::Submit;
        }
        if keys::is_enter(&event) {
            return self.handle_enter();
        }

        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        match event.code {
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_prev(),
            KeyCode::Up => match self.focused_field() {
                FormField::List(kind) => self.editors.get_mut(kind).select_prev(),
                FormField::Text(_) => self.focus_prev(),
            },
            KeyCode::Down => match self.focused_field() {
                FormField::List(kind) => {
                    let len = self.draft.list(kind).len();
                    self.editors.get_mut(kind).select_next(len);
                }
                FormField::Text(_) => self.focus_next(),
            },
            KeyCode::Delete => {
                if let FormField::List(kind) = self.focused_field()
                    && let Some(removed) = self.remove_list_item(kind)
                {
                    tracing::debug!("Removed {:?} entry {:?}", kind, removed);
                }
            }
            KeyCode::Backspace => match self.focused_field() {
                FormField::Text(field) => self.draft.pop_char(field),
                FormField::List(kind) => self.editors.get_mut(kind).pop_char(),
            },
            KeyCode::Char(c) if !ctrl => match self.focused_field() {
                FormField::Text(field) => self.draft.push_char(field, c),
                FormField::List(kind) => self.editors.get_mut(kind).push_char(c),
            },
            _ => {}
        }
        FormCommand::None
    }

    fn handle_enter(&mut self) -> FormCommand {
        match self.focused_field() {
            FormField::List(kind) => {
                self.add_list_item(kind);
                FormCommand::None
            }
            FormField::Text(_) => {
                let last_field = self.focused + 1 >= self.spec().fields.len();
                if !last_field {
                    self.focus_next();
                } else if self.controller.is_last() {
                    return FormCommand::Submit;
                } else {
                    self.next_step();
                }
                FormCommand::None
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    pub fn type_text(mut send: impl FnMut(KeyEvent), text: &str) {
        for c in text.chars() {
            send(key(KeyCode::Char(c)));
        }
    }
}
