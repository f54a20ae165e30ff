//! ProfileKit - Profile Card and Setup Wizards for the Terminal
//!
//! Terminal rendition of a small set of user-profile components: a profile
//! card, a three-step setup wizard (modal or full page) and an edit modal
//! with a live preview.
//!
//! ## Features
//!
//! - **Profile card:** connect/message/share/view actions gated by connection status
//! - **Setup wizard:** validated steps, list editors for skills, highlights and links
//! - **Edit modal:** split-pane editor with a live card preview
//! - **Simulated backend:** saves go through an async `ProfileService`
//!
//! ## Quick Start
//!
//! ```bash
//! # Show the demo card
//! profilekit card
//!
//! # Create a profile; the result is printed as JSON
//! profilekit setup --page
//!
//! # Edit a saved profile
//! profilekit edit --from profile.json
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod profile;
pub mod services;
pub mod tui;

// Re-export commonly used types
pub use error::{ErrorCode, ProfileKitError};
pub use profile::{ConnectionStatus, Profile, ProfileDraft};
pub use tui::ProfileHandler;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
