//! Onboarding progress and dismissed banners.

use std::collections::BTreeSet;

use meridian_shared::types::EntityId;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::PreferenceError;
use super::store::PreferenceStore;

/// Steps of the onboarding wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    /// Company name, address, fiscal year.
    CompanyProfile,
    /// Base currency and additional currencies.
    Currencies,
    /// Warehouses and stock locations.
    Warehouses,
    /// First products.
    Products,
    /// Team invitations.
    InviteTeam,
}

impl OnboardingStep {
    /// All steps, in wizard order.
    pub const ALL: [Self; 5] = [
        Self::CompanyProfile,
        Self::Currencies,
        Self::Warehouses,
        Self::Products,
        Self::InviteTeam,
    ];
}

/// Per-entity console state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleState {
    /// Completed onboarding steps.
    #[serde(default)]
    pub completed_steps: BTreeSet<OnboardingStep>,
    /// Identifiers of banners the user closed.
    #[serde(default)]
    pub dismissed_banners: BTreeSet<String>,
}

impl ConsoleState {
    /// Storage key for an entity's console state.
    #[must_use]
    pub fn storage_key(entity_id: EntityId) -> String {
        format!("console_state:{entity_id}")
    }

    /// Loads state for `entity_id`.
    ///
    /// A missing entry yields the default state. An entry that no longer
    /// decodes is logged and also yields the default state.
    pub fn load(
        store: &impl PreferenceStore,
        entity_id: EntityId,
    ) -> Result<Self, PreferenceError> {
        let Some(raw) = store.get(&Self::storage_key(entity_id))? else {
            return Ok(Self::default());
        };

        match serde_json::from_str(&raw) {
            Ok(state) => Ok(state),
            Err(e) => {
                warn!(entity_id = %entity_id, error = %e, "Discarding unreadable console state");
                Ok(Self::default())
            }
        }
    }

    /// Saves state for `entity_id`.
    pub fn save(
        &self,
        store: &mut impl PreferenceStore,
        entity_id: EntityId,
    ) -> Result<(), PreferenceError> {
        let raw = serde_json::to_string(self)?;
        store.set(&Self::storage_key(entity_id), raw)?;
        debug!(entity_id = %entity_id, "Console state saved");
        Ok(())
    }

    /// Marks a step complete. Returns false if it already was.
    pub fn complete_step(&mut self, step: OnboardingStep) -> bool {
        self.completed_steps.insert(step)
    }

    /// First step not yet completed, in wizard order.
    #[must_use]
    pub fn next_step(&self) -> Option<OnboardingStep> {
        OnboardingStep::ALL
            .into_iter()
            .find(|step| !self.completed_steps.contains(step))
    }

    /// Completed steps as a percentage of all steps, rounded down.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        let done = self.completed_steps.len() * 100 / OnboardingStep::ALL.len();
        u8::try_from(done).unwrap_or(100)
    }

    /// True once every step is complete.
    #[must_use]
    pub fn is_onboarding_complete(&self) -> bool {
        self.next_step().is_none()
    }

    /// Hides a banner. Returns false if it already was hidden.
    pub fn dismiss_banner(&mut self, banner_id: &str) -> bool {
        self.dismissed_banners.insert(banner_id.to_string())
    }

    /// True if the banner was dismissed.
    #[must_use]
    pub fn is_banner_dismissed(&self, banner_id: &str) -> bool {
        self.dismissed_banners.contains(banner_id)
    }
}
