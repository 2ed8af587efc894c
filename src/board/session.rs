// SPDX-License-Identifier: MPL-2.0
//! Edit sessions and decode tickets.
//!
//! Opening a form dialog starts a new session. A submission that has to wait
//! for an image decode takes a [`Ticket`] naming the session it came from.
//! When the decode finishes, [`LateDecodePolicy`] decides whether a result
//! from an older session still lands.

use serde::Deserialize;

/// What to do with a decode that completes after a newer session started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LateDecodePolicy {
    /// Every completion is applied, whenever it arrives.
    #[default]
    Apply,
    /// Completions from a session older than the current one are dropped.
    DiscardSuperseded,
}

/// Identifies the session a pending decode belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Session counter of one form.
#[derive(Debug, Clone, Default)]
pub struct SessionTracker {
    current: u64,
}

impl SessionTracker {
    /// Starts a new session; tickets from earlier sessions become superseded.
    pub fn begin(&mut self) {
        self.current += 1;
    }

    /// Ticket for a submission made in the current session.
    #[must_use]
    pub fn ticket(&self) -> Ticket {
        Ticket(self.current)
    }

    #[must_use]
    pub fn is_superseded(&self, ticket: Ticket) -> bool {
        ticket.0 < self.current
    }

    /// Returns true if a decode holding `ticket` should be applied.
    #[must_use]
    pub fn accepts(&self, ticket: Ticket, policy: LateDecodePolicy) -> bool {
        match policy {
            LateDecodePolicy::Apply => true,
            LateDecodePolicy::DiscardSuperseded => !self.is_superseded(ticket),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_of_current_session_is_accepted() {
        let mut tracker = SessionTracker::default();
        tracker.begin();
        let ticket = tracker.ticket();
        assert!(tracker.accepts(ticket, LateDecodePolicy::DiscardSuperseded));
        assert!(tracker.accepts(ticket, LateDecodePolicy::Apply));
    }

    #[test]
    fn superseded_ticket_depends_on_policy() {
        let mut tracker = SessionTracker::default();
        tracker.begin();
        let old = tracker.ticket();
        tracker.begin();

        assert!(tracker.is_superseded(old));
        assert!(tracker.accepts(old, LateDecodePolicy::Apply));
        assert!(!tracker.accepts(old, LateDecodePolicy::DiscardSuperseded));
    }

    #[test]
    fn policy_parses_from_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: LateDecodePolicy,
        }
        let parsed: Wrapper = toml::from_str("policy = \"discard-superseded\"").unwrap();
        assert_eq!(parsed.policy, LateDecodePolicy::DiscardSuperseded);
    }
}
