//! Profile Services
//!
//! The seam between the wizards and whatever stores profiles. Only the
//! simulated backend ships: it waits a fixed delay and echoes the draft back.

use crate::error::Result;
use crate::profile::ProfileDraft;
use async_trait::async_trait;
use std::time::Duration;

/// Backend contract used by the setup and edit wizards
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Create a new profile from a completed setup draft
    async fn create_profile(&self, draft: ProfileDraft) -> Result<ProfileDraft>;

    /// Persist edits to an existing profile
    async fn update_profile(&self, draft: ProfileDraft) -> Result<ProfileDraft>;
}

/// Stand-in backend: always succeeds after `latency`
#[derive(Debug, Clone)]
pub struct SimulatedProfileService {
    latency: Duration,
}

impl SimulatedProfileService {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedProfileService {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

#[async_trait]
impl ProfileService for SimulatedProfileService {
    async fn create_profile(&self, draft: ProfileDraft) -> Result<ProfileDraft> {
        tracing::debug!("Simulating profile creation for {:?}", draft.name);
        tokio::time::sleep(self.latency).await;
        tracing::info!("Profile created: {}", draft.name);
        Ok(draft)
    }

    async fn update_profile(&self, draft: ProfileDraft) -> Result<ProfileDraft> {
        tracing::debug!("Simulating profile update for {:?}", draft.name);
        tokio::time::sleep(self.latency).await;
        tracing::info!("Profile updated: {}", draft.name);
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_create_echoes_draft() {
        let service = SimulatedProfileService::new(Duration::ZERO);
        let mut draft = ProfileDraft::new();
        draft.name = "Ada".to_string();

        let saved = service.create_profile(draft.clone()).await.unwrap();
        assert_eq!(saved, draft);
    }

    #[tokio::test]
    async fn test_update_waits_for_latency() {
        let service = SimulatedProfileService::new(Duration::from_millis(30));
        let started = Instant::now();
        service.update_profile(ProfileDraft::new()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_default_latency() {
        assert_eq!(
            SimulatedProfileService::default().latency(),
            Duration::from_millis(1500)
        );
    }
}
