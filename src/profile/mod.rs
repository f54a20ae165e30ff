//! Profile Data Model
//!
//! The draft edited by the wizards and the profile rendered by the card.

pub mod avatar;
pub mod list;
pub mod validation;

pub use avatar::{AvatarView, fallback_initial, is_valid_image_url};
pub use validation::{ValidationReport, missing_required};

use serde::{Deserialize, Serialize};

/// In-memory, unsaved profile data being edited by a wizard.
///
/// Created empty when a setup wizard opens, cloned from an existing profile
/// for the edit wizard, and handed to the caller on submit. The caller owns
/// whatever happens to it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
    pub location: String,
    pub bio: String,
    pub role: String,
    pub focus: String,
    pub skills: Vec<String>,
    pub highlights: Vec<String>,
    pub links: Vec<String>,
    pub looking_for: String,
    pub avatar_url: String,
    pub avatar_preview_url: String,
}

/// Scalar text fields of a [`ProfileDraft`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Email,
    Location,
    Role,
    Focus,
    Bio,
    LookingFor,
    AvatarUrl,
}

impl DraftField {
    /// Human-readable label, also used in validation messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Location => "Location",
            Self::Role => "Role",
            Self::Focus => "Focus",
            Self::Bio => "Bio",
            Self::LookingFor => "Looking for",
            Self::AvatarUrl => "Avatar URL",
        }
    }

    /// Placeholder shown while the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Ada Lovelace",
            Self::Email => "ada@example.com",
            Self::Location => "London, UK",
            Self::Role => "Software Engineer",
            Self::Focus => "Distributed systems",
            Self::Bio => "A few words about you",
            Self::LookingFor => "Collaborators, mentors, new role...",
            Self::AvatarUrl => "https://example.com/me.png",
        }
    }
}

/// Ordered list fields of a [`ProfileDraft`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Skills,
    Highlights,
    Links,
}

impl ListKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Skills => "Skills",
            Self::Highlights => "Highlights",
            Self::Links => "Links",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Skills => "Add a skill",
            Self::Highlights => "Add a highlight",
            Self::Links => "Add a link",
        }
    }
}

impl ProfileDraft {
    /// Create an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a scalar field
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Email => &self.email,
            DraftField::Location => &self.location,
            DraftField::Role => &self.role,
            DraftField::Focus => &self.focus,
            DraftField::Bio => &self.bio,
            DraftField::LookingFor => &self.looking_for,
            DraftField::AvatarUrl => &self.avatar_url,
        }
    }

    fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Name => &mut self.name,
            DraftField::Email => &mut self.email,
            DraftField::Location => &mut self.location,
            DraftField::Role => &mut self.role,
            DraftField::Focus => &mut self.focus,
            DraftField::Bio => &mut self.bio,
            DraftField::LookingFor => &mut self.looking_for,
            DraftField::AvatarUrl => &mut self.avatar_url,
        }
    }

    /// Replace a scalar field
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
        self.after_edit(field);
    }

    /// Append a typed character to a scalar field
    pub fn push_char(&mut self, field: DraftField, c: char) {
        self.field_mut(field).push(c);
        self.after_edit(field);
    }

    /// Delete the last character of a scalar field
    pub fn pop_char(&mut self, field: DraftField) {
        self.field_mut(field).pop();
        self.after_edit(field);
    }

    fn after_edit(&mut self, field: DraftField) {
        if field == DraftField::AvatarUrl {
            self.refresh_avatar_preview();
        }
    }

    /// Preview URL tracks the avatar URL only while it points at a usable image
    pub fn refresh_avatar_preview(&mut self) {
        self.avatar_preview_url = if is_valid_image_url(&self.avatar_url) {
            self.avatar_url.trim().to_string()
        } else {
            String::new()
        };
    }

    pub fn list(&self, kind: ListKind) -> &[String] {
        match kind {
            ListKind::Skills => &self.skills,
            ListKind::Highlights => &self.highlights,
            ListKind::Links => &self.links,
        }
    }

    pub fn list_mut(&mut self, kind: ListKind) -> &mut Vec<String> {
        match kind {
            ListKind::Skills => &mut self.skills,
            ListKind::Highlights => &mut self.highlights,
            ListKind::Links => &mut self.links,
        }
    }

    /// Append a trimmed value to a list field; whitespace-only input is ignored
    pub fn add_item(&mut self, kind: ListKind, value: &str) -> bool {
        list::add_trimmed(self.list_mut(kind), value)
    }

    /// Remove a list entry by index
    pub fn remove_item(&mut self, kind: ListKind, index: usize) -> Option<String> {
        list::remove_at(self.list_mut(kind), index)
    }

    /// URL the card should try to show: the preview when present, else the raw URL
    pub fn display_avatar_url(&self) -> &str {
        if self.avatar_preview_url.is_empty() {
            &self.avatar_url
        } else {
            &self.avatar_preview_url
        }
    }
}

/// Relationship between the viewer and the profile shown on a card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    #[default]
    None,
    Pending,
    Accepted,
}

impl std::str::FromStr for ConnectionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            other => Err(format!("unknown connection status: {}", other)),
        }
    }
}

/// What the profile card renders
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(flatten)]
    pub draft: ProfileDraft,
    #[serde(default)]
    pub connection_status: ConnectionStatus,
}

impl Profile {
    pub fn new(draft: ProfileDraft, connection_status: ConnectionStatus) -> Self {
        Self {
            draft,
            connection_status,
        }
    }

    /// Live preview of a draft that has not been saved yet
    pub fn preview(draft: &ProfileDraft) -> Self {
        Self::new(draft.clone(), ConnectionStatus::None)
    }

    /// Demo profile used by `profilekit card` when no file is given
    pub fn sample() -> Self {
        let mut draft = ProfileDraft {
            name: "Ada Lovelace".to_string(),
            email: "ada@analytical.engine".to_string(),
            location: "London, UK".to_string(),
            bio: "Writing the first programs for machines that do not exist yet.".to_string(),
            role: "Mathematician".to_string(),
            focus: "Analytical engines".to_string(),
            skills: vec![
                "Mathematics".to_string(),
                "Algorithms".to_string(),
                "Technical writing".to_string(),
            ],
            highlights: vec!["Notes on the Analytical Engine".to_string()],
            links: vec!["https://en.wikipedia.org/wiki/Ada_Lovelace".to_string()],
            looking_for: "Engine builders".to_string(),
            avatar_url: String::new(),
            avatar_preview_url: String::new(),
        };
        draft.refresh_avatar_preview();
        Self::new(draft, ConnectionStatus::None)
    }
}
