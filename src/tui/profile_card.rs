//! Profile Card
//!
//! Read-only profile summary with connect/message/share/open actions.
//! Button availability follows the viewer's connection status.

use crate::profile::{AvatarView, ConnectionStatus, Profile};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Card buttons, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardButton {
    Connect,
    Message,
    Share,
    Open,
}

impl CardButton {
    pub const ALL: [CardButton; 4] = [Self::Connect, Self::Message, Self::Share, Self::Open];

    fn index(&self) -> usize {
        match self {
            Self::Connect => 0,
            Self::Message => 1,
            Self::Share => 2,
            Self::Open => 3,
        }
    }

    pub fn hotkey(&self) -> char {
        match self {
            Self::Connect => 'c',
            Self::Message => 'm',
            Self::Share => 's',
            Self::Open => 'o',
        }
    }
}

/// User intent emitted by the card; the host forwards it to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    None,
    Connect(Profile),
    Message(Profile),
    Share(Profile),
    OpenProfile(Profile),
}

#[derive(Debug, Clone)]
pub struct ProfileCard {
    profile: Profile,
    focused: CardButton,
    avatar_failed: bool,
}

impl ProfileCard {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            focused: CardButton::Connect,
            avatar_failed: false,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn focused(&self) -> CardButton {
        self.focused
    }

    pub fn connection_status(&self) -> ConnectionStatus {
        self.profile.connection_status
    }

    /// The caller owns the relationship; it reports changes back here
    pub fn set_connection_status(&mut self, status: ConnectionStatus) {
        self.profile.connection_status = status;
    }

    /// Switch to the initial-letter avatar after the image failed to load
    pub fn mark_avatar_failed(&mut self) {
        self.avatar_failed = true;
    }

    pub fn avatar(&self) -> AvatarView {
        AvatarView::resolve(
            self.profile.draft.display_avatar_url(),
            &self.profile.draft.name,
            self.avatar_failed,
        )
    }

    pub fn label(&self, button: CardButton) -> &'static str {
        match button {
            CardButton::Connect => match self.profile.connection_status {
                ConnectionStatus::None => "Connect",
                ConnectionStatus::Pending => "Pending",
                ConnectionStatus::Accepted => "Connected",
            },
            CardButton::Message => "Message",
            CardButton::Share => "Share",
            CardButton::Open => "View Profile",
        }
    }

    pub fn is_enabled(&self, button: CardButton) -> bool {
        match button {
            CardButton::Connect => self.profile.connection_status == ConnectionStatus::None,
            CardButton::Message => self.profile.connection_status == ConnectionStatus::Accepted,
            CardButton::Share | CardButton::Open => true,
        }
    }

    /// Fire a button; disabled buttons emit nothing
    pub fn activate(&self, button: CardButton) -> CardAction {
        if !self.is_enabled(button) {
            tracing::debug!("Ignoring disabled card button {:?}", button);
            return CardAction::None;
        }
        let profile = self.profile.clone();
        match button {
            CardButton::Connect => CardAction::Connect(profile),
            CardButton::Message => CardAction::Message(profile),
            CardButton::Share => CardAction::Share(profile),
            CardButton::Open => CardAction::OpenProfile(profile),
        }
    }

    pub fn focus_next(&mut self) {
        let i = (self.focused.index() + 1) % CardButton::ALL.len();
        self.focused = CardButton::ALL[i];
    }

    pub fn focus_prev(&mut self) {
        let len = CardButton::ALL.len();
        let i = (self.focused.index() + len - 1) % len;
        self.focused = CardButton::ALL[i];
    }

    pub fn handle_key(&mut self, event: KeyEvent) -> CardAction {
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return CardAction::None;
        }
        match event.code {
            KeyCode::Right | KeyCode::Tab => {
                self.focus_next();
                CardAction::None
            }
            KeyCode::Left | KeyCode::BackTab => {
                self.focus_prev();
                CardAction::None
            }
            KeyCode::Enter => self.activate(self.focused),
            KeyCode::Char(c) => {
                let c = c.to_ascii_lowercase();
                match CardButton::ALL.iter().find(|b| b.hotkey() == c) {
                    Some(button) => self.activate(*button),
                    None => CardAction::None,
                }
            }
            _ => CardAction::None,
        }
    }
}
