//! Boot sequence timing and phase transitions.

use std::time::{Duration, Instant};

use isolix_config::schema::StartupConfig;

use super::types::{BootPhase, OnboardingAdvance, ONBOARDING_STEPS};

/// Manages the boot sequence timing and phase transitions.
///
/// Time is passed in rather than read, so the event loop and tests drive
/// the same code.
pub struct BootSequence {
    start_time: Instant,
    phase: BootPhase,
    splash_duration: Duration,
    onboarding_pending: bool,
}

impl BootSequence {
    /// Create a new boot sequence. A zero splash duration goes straight to
    /// onboarding, or to [`BootPhase::Ready`] when onboarding is off or done.
    pub fn new(config: &StartupConfig, onboarding_completed: bool, now: Instant) -> Self {
        let mut boot = Self {
            start_time: now,
            phase: BootPhase::Splash,
            splash_duration: Duration::from_millis(config.splash_duration_ms),
            onboarding_pending: config.show_onboarding && !onboarding_completed,
        };
        if boot.splash_duration.is_zero() {
            boot.finish_splash();
        }
        boot
    }

    fn finish_splash(&mut self) {
        self.phase = if self.onboarding_pending {
            BootPhase::Onboarding { step: 1 }
        } else {
            BootPhase::Ready
        };
    }

    /// Skip the splash screen immediately. Returns `true` if the phase changed.
    pub fn skip(&mut self) -> bool {
        if self.phase == BootPhase::Splash {
            self.finish_splash();
            return true;
        }
        false
    }

    /// Advance the boot sequence based on elapsed time.
    ///
    /// Returns `true` if the phase changed.
    pub fn update(&mut self, now: Instant) -> bool {
        if self.phase == BootPhase::Splash
            && now.saturating_duration_since(self.start_time) >= self.splash_duration
        {
            self.finish_splash();
            return true;
        }
        false
    }

    /// Move to the next onboarding screen, or finish onboarding.
    pub fn advance(&mut self) -> OnboardingAdvance {
        match self.phase {
            BootPhase::Onboarding { step } if step < ONBOARDING_STEPS => {
                self.phase = BootPhase::Onboarding { step: step + 1 };
                OnboardingAdvance::Step(step + 1)
            }
            BootPhase::Onboarding { .. } => {
                self.phase = BootPhase::Ready;
                self.onboarding_pending = false;
                OnboardingAdvance::Completed
            }
            _ => OnboardingAdvance::Ignored,
        }
    }

    /// When the splash ends on its own, if it is still showing.
    pub fn deadline(&self) -> Option<Instant> {
        (self.phase == BootPhase::Splash).then(|| self.start_time + self.splash_duration)
    }

    /// Current phase.
    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    /// Whether the boot sequence is complete.
    pub fn is_ready(&self) -> bool {
        self.phase == BootPhase::Ready
    }

    /// Progress through the splash screen (0.0 to 1.0).
    pub fn progress(&self, now: Instant) -> f64 {
        if self.phase != BootPhase::Splash || self.splash_duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start_time);
        (elapsed.as_secs_f64() / self.splash_duration.as_secs_f64()).min(1.0)
    }
}
