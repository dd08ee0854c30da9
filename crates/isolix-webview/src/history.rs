//! Session history bookkeeping for a panel view.
//!
//! The native view does not expose its back/forward lists, so availability
//! is derived from page loads and the history steps we issued ourselves.

use isolix_common::HistoryStep;

#[derive(Debug, Clone, Default)]
pub struct NavHistory {
    entries: Vec<String>,
    index: usize,
    /// A back/forward we asked for whose page load has not arrived yet.
    pending: Option<HistoryStep>,
}

impl NavHistory {
    pub fn new(initial_url: &str) -> Self {
        Self {
            entries: vec![initial_url.to_string()],
            index: 0,
            pending: None,
        }
    }

    pub fn current(&self) -> &str {
        self.entries.get(self.index).map(String::as_str).unwrap_or("")
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Remember that a history step was sent to the page.
    ///
    /// Returns `false` when the step has nowhere to go.
    pub fn request(&mut self, step: HistoryStep) -> bool {
        let possible = match step {
            HistoryStep::Back => self.can_go_back(),
            HistoryStep::Forward => self.can_go_forward(),
            HistoryStep::Reload => true,
        };
        if possible && step != HistoryStep::Reload {
            self.pending = Some(step);
        }
        possible
    }

    /// A page finished loading `url`.
    pub fn loaded(&mut self, url: &str) {
        match self.pending.take() {
            Some(HistoryStep::Back) if self.can_go_back() => {
                self.index -= 1;
                self.entries[self.index] = url.to_string();
            }
            Some(HistoryStep::Forward) if self.can_go_forward() => {
                self.index += 1;
                self.entries[self.index] = url.to_string();
            }
            _ => {
                if self.current() == url {
                    return;
                }
                if self.entries.is_empty() {
                    self.entries.push(url.to_string());
                    self.index = 0;
                    return;
                }
                self.entries.truncate(self.index + 1);
                self.entries.push(url.to_string());
                self.index = self.entries.len() - 1;
            }
        }
    }
}
