use std::time::{Duration, Instant};

use super::*;
use isolix_common::PanelId;

const DELAY: Duration = Duration::from_millis(500);

fn id(s: &str) -> PanelId {
    PanelId::from(s)
}

#[test]
fn leave_before_delay_never_hovers() {
    let t0 = Instant::now();
    let mut tracker = HoverTracker::new(DELAY);

    assert_eq!(tracker.enter(id("x"), t0), HoverChange::None);
    assert_eq!(tracker.poll(t0 + Duration::from_millis(200)), HoverChange::None);
    assert_eq!(tracker.leave(&id("x")), HoverChange::None);
    assert_eq!(tracker.poll(t0 + Duration::from_secs(5)), HoverChange::None);
    assert!(tracker.hovered().is_none());
}

#[test]
fn staying_past_delay_hovers_exactly_once() {
    let t0 = Instant::now();
    let mut tracker = HoverTracker::new(DELAY);

    tracker.enter(id("x"), t0);
    assert_eq!(
        tracker.poll(t0 + DELAY),
        HoverChange::Hovered(Some(id("x")))
    );
    assert_eq!(tracker.poll(t0 + DELAY * 2), HoverChange::None);
    assert_eq!(tracker.hovered(), Some(&id("x")));
}

#[test]
fn leave_clears_immediately() {
    let t0 = Instant::now();
    let mut tracker = HoverTracker::new(DELAY);
    tracker.enter(id("x"), t0);
    tracker.poll(t0 + DELAY);

    assert_eq!(tracker.leave(&id("x")), HoverChange::Hovered(None));
    assert!(tracker.hovered().is_none());
    assert!(tracker.next_deadline().is_none());
}

#[test]
fn new_enter_cancels_pending_timer() {
    let t0 = Instant::now();
    let mut tracker = HoverTracker::new(DELAY);

    tracker.enter(id("a"), t0);
    tracker.enter(id("b"), t0 + Duration::from_millis(300));
    assert_eq!(tracker.pending(), Some(&id("b")));

    // a's deadline passes but a never commits.
    assert_eq!(tracker.poll(t0 + DELAY), HoverChange::None);
    assert_eq!(
        tracker.poll(t0 + Duration::from_millis(800)),
        HoverChange::Hovered(Some(id("b")))
    );
}

#[test]
fn zero_delay_commits_on_enter() {
    let t0 = Instant::now();
    let mut tracker = HoverTracker::new(Duration::ZERO);
    assert_eq!(tracker.enter(id("x"), t0), HoverChange::Hovered(Some(id("x"))));
    assert!(tracker.next_deadline().is_none());
}

#[test]
fn re_entering_hovered_panel_is_quiet() {
    let t0 = Instant::now();
    let mut tracker = HoverTracker::new(DELAY);
    tracker.enter(id("x"), t0);
    tracker.poll(t0 + DELAY);

    tracker.enter(id("x"), t0 + DELAY * 2);
    assert_eq!(tracker.poll(t0 + DELAY * 3), HoverChange::None);
    assert_eq!(tracker.hovered(), Some(&id("x")));
}

#[test]
fn late_leave_from_previous_panel_keeps_pending_timer() {
    let t0 = Instant::now();
    let mut tracker = HoverTracker::new(DELAY);

    tracker.enter(id("a"), t0);
    tracker.enter(id("b"), t0 + Duration::from_millis(100));
    assert_eq!(tracker.leave(&id("a")), HoverChange::None);
    assert_eq!(tracker.pending(), Some(&id("b")));
    assert_eq!(
        tracker.poll(t0 + Duration::from_millis(600)),
        HoverChange::Hovered(Some(id("b")))
    );
}

#[test]
fn late_leave_from_previous_panel_keeps_hovered() {
    let t0 = Instant::now();
    let mut tracker = HoverTracker::new(DELAY);
    tracker.enter(id("b"), t0);
    tracker.poll(t0 + DELAY);

    assert_eq!(tracker.leave(&id("a")), HoverChange::None);
    assert_eq!(tracker.hovered(), Some(&id("b")));
}

#[test]
fn re_entering_hovered_panel_cancels_other_pending() {
    let t0 = Instant::now();
    let mut tracker = HoverTracker::new(DELAY);
    tracker.enter(id("x"), t0);
    tracker.poll(t0 + DELAY);

    tracker.enter(id("y"), t0 + DELAY);
    assert_eq!(tracker.enter(id("x"), t0 + DELAY * 2), HoverChange::None);
    assert!(tracker.pending().is_none());
    assert_eq!(tracker.poll(t0 + DELAY * 4), HoverChange::None);
    assert_eq!(tracker.hovered(), Some(&id("x")));
}

#[test]
fn next_deadline_tracks_pending() {
    let t0 = Instant::now();
    let mut tracker = HoverTracker::new(DELAY);
    assert!(tracker.next_deadline().is_none());
    tracker.enter(id("x"), t0);
    assert_eq!(tracker.next_deadline(), Some(t0 + DELAY));
}

#[test]
fn set_delay_applies_to_next_enter() {
    let t0 = Instant::now();
    let mut tracker = HoverTracker::new(DELAY);
    tracker.set_delay(Duration::from_millis(100));
    assert_eq!(tracker.delay(), Duration::from_millis(100));
    tracker.enter(id("x"), t0);
    assert_eq!(
        tracker.poll(t0 + Duration::from_millis(100)),
        HoverChange::Hovered(Some(id("x")))
    );
}

#[test]
fn forget_removed_panel() {
    let t0 = Instant::now();
    let mut tracker = HoverTracker::new(DELAY);
    tracker.enter(id("x"), t0);
    tracker.poll(t0 + DELAY);
    assert_eq!(tracker.forget(&id("y")), HoverChange::None);
    assert_eq!(tracker.forget(&id("x")), HoverChange::Hovered(None));

    tracker.enter(id("z"), t0);
    tracker.forget(&id("z"));
    assert!(tracker.pending().is_none());
}

#[test]
fn reset_clears_everything() {
    let t0 = Instant::now();
    let mut tracker = HoverTracker::new(DELAY);
    tracker.enter(id("x"), t0);
    tracker.poll(t0 + DELAY);
    tracker.enter(id("y"), t0 + DELAY);
    assert_eq!(tracker.reset(), HoverChange::Hovered(None));
    assert!(tracker.pending().is_none());
    assert!(tracker.hovered().is_none());
}
