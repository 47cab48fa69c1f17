//! Console state behind an injected storage interface.
//!
//! Onboarding progress and dismissed banners are explicit state objects.
//! Where they are kept is decided by the caller through [`PreferenceStore`].

mod error;
mod state;
mod store;

pub use error::PreferenceError;
pub use state::{ConsoleState, OnboardingStep};
pub use store::{MemoryPreferenceStore, PreferenceStore};
