//! Broadcast bar input routing.
//!
//! A submission is either a service shortcut (opens a panel), a directed
//! broadcast to the panels named by leading `@name` tokens, or a plain
//! broadcast to every panel of the active workspace.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use isolix_common::types::capitalize;
use isolix_common::{LaunchDecision, Panel, RouteOutcome, RoutingDecision};
use regex::Regex;

/// One or more `@word` tokens, each optionally followed by whitespace,
/// anchored at the start.
static MENTION_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:@\w+\s?)+").unwrap());

#[derive(Debug, Clone, Default)]
pub struct InputRouter {
    /// Lower-cased shortcut name to URL.
    shortcuts: BTreeMap<String, String>,
}

impl InputRouter {
    pub fn new<I, K, V>(shortcuts: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            shortcuts: shortcuts
                .into_iter()
                .map(|(k, v)| (k.as_ref().trim().to_lowercase(), v.into()))
                .collect(),
        }
    }

    pub fn shortcut(&self, name: &str) -> Option<&str> {
        self.shortcuts.get(name).map(String::as_str)
    }

    /// Route `raw` against the active workspace's panels.
    ///
    /// Returns `None` for blank input, and for a broadcast when there are
    /// no panels to receive it. Shortcuts win over everything else, even a
    /// panel titled the same as the shortcut.
    pub fn route(&self, raw: &str, panels: &[Panel]) -> Option<RouteOutcome> {
        let input = raw.trim();
        if input.is_empty() {
            return None;
        }

        let folded = input.to_lowercase();
        if let Some(url) = self.shortcuts.get(&folded) {
            return Some(RouteOutcome::Launch(LaunchDecision {
                title: capitalize(&folded),
                url: url.clone(),
            }));
        }

        if let Some(decision) = directed(input, panels) {
            return Some(RouteOutcome::Broadcast(decision));
        }

        // Unmatched mentions land here too, with the tokens left in place.
        if panels.is_empty() {
            return None;
        }
        Some(RouteOutcome::Broadcast(RoutingDecision {
            targets: panels.to_vec(),
            payload: input.to_string(),
            directed: false,
        }))
    }
}

/// Directed broadcast, if the input opens with mentions naming at least one panel.
fn directed(input: &str, panels: &[Panel]) -> Option<RoutingDecision> {
    let prefix = MENTION_PREFIX_RE.find(input)?.as_str().trim_end();
    let names: Vec<String> = prefix
        .split_whitespace()
        .map(|token| token.trim_start_matches('@').to_lowercase())
        .collect();

    let targets: Vec<Panel> = panels
        .iter()
        .filter(|p| names.contains(&p.mention_name()))
        .cloned()
        .collect();
    if targets.is_empty() {
        return None;
    }

    Some(RoutingDecision {
        targets,
        payload: input[prefix.len()..].trim().to_string(),
        directed: true,
    })
}
