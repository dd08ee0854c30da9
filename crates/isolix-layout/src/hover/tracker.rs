use std::time::{Duration, Instant};

use isolix_common::PanelId;

/// Result of feeding the tracker an event or a clock tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverChange {
    /// Nothing observable changed.
    None,
    /// The hovered panel is now `Some(id)` or cleared.
    Hovered(Option<PanelId>),
}

/// Asymmetric hover debounce: delayed set, instant clear.
///
/// At most one timer is pending. Clock values are passed in so the tracker
/// can be driven by the event loop and by tests alike.
#[derive(Debug, Clone)]
pub struct HoverTracker {
    delay: Duration,
    pending: Option<(PanelId, Instant)>,
    hovered: Option<PanelId>,
}

impl HoverTracker {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            hovered: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Change the settle delay. A timer already armed keeps its deadline.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    pub fn hovered(&self) -> Option<&PanelId> {
        self.hovered.as_ref()
    }

    pub fn pending(&self) -> Option<&PanelId> {
        self.pending.as_ref().map(|(id, _)| id)
    }

    /// Pointer entered `id`. Cancels any pending timer and arms a new one.
    ///
    /// With a zero delay the panel is committed immediately. Entering the
    /// panel that is already hovered only cancels the pending timer.
    pub fn enter(&mut self, id: PanelId, now: Instant) -> HoverChange {
        if self.hovered.as_ref() == Some(&id) {
            self.pending = None;
            return HoverChange::None;
        }
        if self.delay.is_zero() {
            self.pending = None;
            return self.commit(id);
        }
        self.pending = Some((id, now + self.delay));
        HoverChange::None
    }

    /// Pointer left `id`. Cancels its timer and clears it if hovered.
    ///
    /// Each panel reports from its own view, so a leave can arrive after
    /// the enter of the next panel. Leaves for any other panel are ignored.
    pub fn leave(&mut self, id: &PanelId) -> HoverChange {
        if self.pending.as_ref().is_some_and(|(p, _)| p == id) {
            self.pending = None;
        }
        if self.hovered.as_ref() == Some(id) {
            self.hovered = None;
            return HoverChange::Hovered(None);
        }
        HoverChange::None
    }

    /// Fire the pending timer if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> HoverChange {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => {}
            _ => return HoverChange::None,
        }
        match self.pending.take() {
            Some((id, _)) => self.commit(id),
            None => HoverChange::None,
        }
    }

    /// Deadline of the pending timer, for scheduling the next wake-up.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Drop all hover state, e.g. on workspace switch.
    pub fn reset(&mut self) -> HoverChange {
        self.pending = None;
        match self.hovered.take() {
            Some(_) => HoverChange::Hovered(None),
            None => HoverChange::None,
        }
    }

    /// Forget `id` if it is pending or hovered (the panel went away).
    pub fn forget(&mut self, id: &PanelId) -> HoverChange {
        self.leave(id)
    }

    fn commit(&mut self, id: PanelId) -> HoverChange {
        if self.hovered.as_ref() == Some(&id) {
            return HoverChange::None;
        }
        tracing::debug!(panel_id = %id, "hover committed");
        self.hovered = Some(id.clone());
        HoverChange::Hovered(Some(id))
    }
}
