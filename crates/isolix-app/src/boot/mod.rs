//! Boot sequence manager.
//!
//! Controls the application startup phases: splash screen, the first-run
//! onboarding walkthrough, and transition to the ready state.

mod sequence;
mod types;

pub use sequence::BootSequence;
pub use types::{BootPhase, OnboardingAdvance, ONBOARDING_STEPS};

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use isolix_config::schema::StartupConfig;

    use super::*;

    fn config(splash_ms: u64, onboarding: bool) -> StartupConfig {
        StartupConfig {
            splash_duration_ms: splash_ms,
            show_onboarding: onboarding,
        }
    }

    #[test]
    fn zero_splash_without_onboarding_is_ready() {
        let boot = BootSequence::new(&config(0, false), false, Instant::now());
        assert!(boot.is_ready());
        assert_eq!(boot.deadline(), None);
    }

    #[test]
    fn zero_splash_goes_to_onboarding_on_first_run() {
        let boot = BootSequence::new(&config(0, true), false, Instant::now());
        assert_eq!(boot.phase(), BootPhase::Onboarding { step: 1 });
    }

    #[test]
    fn completed_onboarding_is_not_shown_again() {
        let now = Instant::now();
        let mut boot = BootSequence::new(&config(3000, true), true, now);
        assert!(boot.update(now + Duration::from_millis(3000)));
        assert!(boot.is_ready());
    }

    #[test]
    fn splash_ends_at_deadline() {
        let now = Instant::now();
        let mut boot = BootSequence::new(&config(3000, false), false, now);
        assert_eq!(boot.phase(), BootPhase::Splash);
        assert_eq!(boot.deadline(), Some(now + Duration::from_millis(3000)));

        assert!(!boot.update(now + Duration::from_millis(2999)));
        assert_eq!(boot.phase(), BootPhase::Splash);

        assert!(boot.update(now + Duration::from_millis(3000)));
        assert!(boot.is_ready());
        assert!(!boot.update(now + Duration::from_millis(4000)));
    }

    #[test]
    fn skip_transitions_out_of_splash() {
        let mut boot = BootSequence::new(&config(10_000, true), false, Instant::now());
        assert!(boot.skip());
        assert_eq!(boot.phase(), BootPhase::Onboarding { step: 1 });
        assert!(!boot.skip());
    }

    #[test]
    fn onboarding_walks_three_steps() {
        let mut boot = BootSequence::new(&config(0, true), false, Instant::now());
        assert_eq!(boot.advance(), OnboardingAdvance::Step(2));
        assert_eq!(boot.advance(), OnboardingAdvance::Step(3));
        assert_eq!(boot.advance(), OnboardingAdvance::Completed);
        assert!(boot.is_ready());
        assert_eq!(boot.advance(), OnboardingAdvance::Ignored);
    }

    #[test]
    fn advance_during_splash_is_ignored() {
        let mut boot = BootSequence::new(&config(3000, true), false, Instant::now());
        assert_eq!(boot.advance(), OnboardingAdvance::Ignored);
        assert_eq!(boot.phase(), BootPhase::Splash);
    }

    #[test]
    fn progress_runs_from_zero_to_one() {
        let now = Instant::now();
        let boot = BootSequence::new(&config(1000, false), false, now);
        assert!(boot.progress(now) < 0.01);
        assert!((boot.progress(now + Duration::from_millis(500)) - 0.5).abs() < 1e-9);
        assert!((boot.progress(now + Duration::from_secs(5)) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn phase_serializes_for_the_chrome() {
        let json = serde_json::to_value(BootPhase::Onboarding { step: 2 }).unwrap();
        assert_eq!(json, serde_json::json!({"phase": "onboarding", "step": 2}));
        let json = serde_json::to_value(BootPhase::Ready).unwrap();
        assert_eq!(json, serde_json::json!({"phase": "ready"}));
    }
}
