//! Handler used by the binary: logs every callback and remembers how the
//! screen ended so the command can report it after the terminal is restored.

use crate::profile::{Profile, ProfileDraft};
use crate::tui::ProfileHandler;

/// How a screen was left
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
    /// Still open, or quit with Ctrl+C
    #[default]
    Open,
    Completed(ProfileDraft),
    Saved(ProfileDraft),
    Closed,
    Back,
}

#[derive(Debug, Default)]
pub struct CliHandler {
    pub outcome: Outcome,
    /// Card actions in the order they fired, e.g. `connect: Ada Lovelace`
    pub actions: Vec<String>,
}

impl CliHandler {
    fn record(&mut self, action: &str, profile: &Profile) {
        tracing::info!("Card action {} for {:?}", action, profile.draft.name);
        self.actions
            .push(format!("{}: {}", action, profile.draft.name));
    }
}

impl ProfileHandler for CliHandler {
    fn on_connect(&mut self, profile: &Profile) {
        self.record("connect", profile);
    }

    fn on_message(&mut self, profile: &Profile) {
        self.record("message", profile);
    }

    fn on_share(&mut self, profile: &Profile) {
        self.record("share", profile);
    }

    fn on_open_profile(&mut self, profile: &Profile) {
        self.record("open", profile);
    }

    fn on_complete(&mut self, draft: &ProfileDraft) {
        tracing::info!("Profile setup completed for {:?}", draft.name);
        self.outcome = Outcome::Completed(draft.clone());
    }

    fn on_back(&mut self) {
        tracing::info!("Profile setup page left");
        self.outcome = Outcome::Back;
    }

    fn on_close(&mut self) {
        tracing::info!("Profile modal closed");
        self.outcome = Outcome::Closed;
    }

    fn on_save(&mut self, draft: &ProfileDraft) {
        tracing::info!("Profile saved for {:?}", draft.name);
        self.outcome = Outcome::Saved(draft.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_card_actions_in_order() {
        let mut handler = CliHandler::default();
        let profile = Profile::sample();
        handler.on_connect(&profile);
        handler.on_share(&profile);
        assert_eq!(
            handler.actions,
            vec![
                "connect: Ada Lovelace".to_string(),
                "share: Ada Lovelace".to_string()
            ]
        );
        assert_eq!(handler.outcome, Outcome::Open);
    }

    #[test]
    fn test_outcome_follows_last_callback() {
        let mut handler = CliHandler::default();
        let draft = Profile::sample().draft;
        handler.on_save(&draft);
        assert_eq!(handler.outcome, Outcome::Saved(draft));
        handler.on_close();
        assert_eq!(handler.outcome, Outcome::Closed);
    }
}
