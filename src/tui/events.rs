//! TUI Event System
//!
//! Handles terminal input and application events for the profile screens.

use crate::profile::ProfileDraft;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

/// Events that can occur in the TUI
#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// User pressed a key
    Key(KeyEvent),

    /// Terminal was resized
    Resize(u16, u16),

    /// Tick event for animations/updates
    Tick,

    /// A simulated save finished
    SubmitFinished(Result<ProfileDraft, String>),

    /// Request to quit
    Quit,
}

/// Event handler for the TUI
pub struct EventHandler {
    /// Event sender
    tx: mpsc::UnboundedSender<TuiEvent>,

    /// Event receiver
    rx: mpsc::UnboundedReceiver<TuiEvent>,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    /// Get a sender for sending events
    pub fn sender(&self) -> mpsc::UnboundedSender<TuiEvent> {
        self.tx.clone()
    }

    /// Receive the next event (blocks until available)
    pub async fn next(&mut self) -> Option<TuiEvent> {
        self.rx.recv().await
    }

    /// Try to receive the next event without blocking
    pub fn try_next(&mut self) -> Option<TuiEvent> {
        self.rx.try_recv().ok()
    }

    /// Start listening for terminal events
    ///
    /// Uses crossterm's async EventStream so the save timer and the input
    /// reader share the runtime without blocking each other.
    pub fn start_terminal_listener(tx: mpsc::UnboundedSender<TuiEvent>, tick_rate: Duration) {
        use crossterm::event::{Event, EventStream, KeyEventKind};
        use futures::StreamExt;

        tokio::spawn(async move {
            let mut reader = EventStream::new();

            loop {
                // Race: next terminal event vs tick timer
                let event = tokio::select! {
                    maybe_event = reader.next() => {
                        match maybe_event {
                            Some(Ok(event)) => Some(event),
                            Some(Err(e)) => {
                                tracing::warn!("Terminal event error: {}", e);
                                None
                            }
                            None => break, // Stream closed
                        }
                    }
                    _ = tokio::time::sleep(tick_rate) => None,
                };

                if let Some(event) = event {
                    let should_break = match event {
                        Event::Key(key) => {
                            // Only process key press events to avoid duplicates
                            if key.kind == KeyEventKind::Press {
                                tx.send(TuiEvent::Key(key)).is_err()
                            } else {
                                false
                            }
                        }
                        Event::Resize(w, h) => tx.send(TuiEvent::Resize(w, h)).is_err(),
                        _ => false,
                    };
                    if should_break {
                        break;
                    }
                }

                if tx.send(TuiEvent::Tick).is_err() {
                    break;
                }
            }
            tracing::debug!("Terminal listener stopped");
        });
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper function to check if a key event matches
pub fn key_matches(event: &KeyEvent, code: KeyCode, modifiers: KeyModifiers) -> bool {
    event.code == code && event.modifiers == modifiers
}

/// Common key bindings
pub mod keys {
    use super::*;

    /// Ctrl+C - Quit
    pub fn is_quit(event: &KeyEvent) -> bool {
        key_matches(event, KeyCode::Char('c'), KeyModifiers::CONTROL)
    }

    /// Ctrl+N - Next step
    pub fn is_next_step(event: &KeyEvent) -> bool {
        key_matches(event, KeyCode::Char('n'), KeyModifiers::CONTROL)
    }

    /// Ctrl+P - Previous step
    pub fn is_prev_step(event: &KeyEvent) -> bool {
        key_matches(event, KeyCode::Char('p'), KeyModifiers::CONTROL)
    }

    /// Ctrl+S - Complete / Save
    pub fn is_submit(event: &KeyEvent) -> bool {
        key_matches(event, KeyCode::Char('s'), KeyModifiers::CONTROL)
    }

    /// Escape - Cancel/Back
    pub fn is_cancel(event: &KeyEvent) -> bool {
        event.code == KeyCode::Esc
    }

    /// Enter - Select/Confirm
    pub fn is_enter(event: &KeyEvent) -> bool {
        event.code == KeyCode::Enter && event.modifiers.is_empty()
    }
}
