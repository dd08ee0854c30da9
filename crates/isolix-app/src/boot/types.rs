//! Boot sequence phase definitions.

use serde::Serialize;

/// Number of onboarding screens.
pub const ONBOARDING_STEPS: u8 = 3;

/// Boot sequence phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum BootPhase {
    /// Splash screen, shown for a fixed time unless skipped.
    Splash,
    /// First-run walkthrough. `step` counts from 1.
    Onboarding { step: u8 },
    /// Panels are shown and interactive.
    Ready,
}

/// Outcome of an onboarding "next" press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingAdvance {
    /// Not in onboarding; nothing happened.
    Ignored,
    /// Moved to the next screen.
    Step(u8),
    /// Last screen done. The caller should remember this.
    Completed,
}
