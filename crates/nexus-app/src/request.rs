//! Request tokens for in-flight service calls
//!
//! Every AI-backed action draws a token for its [`Panel`]. Only the most
//! recent token of a panel is current; replies carrying any other token are
//! stale and must not touch state.

use std::collections::HashMap;
use std::fmt;

/// Monotonically increasing id of one service request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// UI region that owns a busy indicator and receives one kind of reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Generate,
    Qa,
    Explain,
    Refactor,
    Research,
    Image,
    Chat,
}

impl Panel {
    /// Panels whose replies belong to the project open in the editor
    pub const PROJECT_BOUND: [Panel; 4] = [Panel::Generate, Panel::Qa, Panel::Explain, Panel::Refactor];
}

#[derive(Debug, Default)]
pub struct RequestTracker {
    last_issued: u64,
    current: HashMap<Panel, RequestToken>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token for `panel`, superseding any request still in flight there
    pub fn begin(&mut self, panel: Panel) -> RequestToken {
        self.last_issued += 1;
        let token = RequestToken(self.last_issued);
        if let Some(previous) = self.current.insert(panel, token) {
            tracing::debug!("{:?} request {} superseded by {}", panel, previous, token);
        }
        token
    }

    /// Accept a reply. Returns `false` for stale tokens, leaving the panel untouched.
    pub fn complete(&mut self, panel: Panel, token: RequestToken) -> bool {
        if self.current.get(&panel) == Some(&token) {
            self.current.remove(&panel);
            true
        } else {
            tracing::debug!("Discarding stale {:?} reply {}", panel, token);
            false
        }
    }

    pub fn is_busy(&self, panel: Panel) -> bool {
        self.current.contains_key(&panel)
    }

    pub fn any_busy(&self) -> bool {
        !self.current.is_empty()
    }

    /// Forget the in-flight request of `panel`; its reply will be discarded
    pub fn cancel(&mut self, panel: Panel) {
        self.current.remove(&panel);
    }

    pub fn cancel_all(&mut self) {
        self.current.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_increase() {
        let mut tracker = RequestTracker::new();
        let a = tracker.begin(Panel::Generate);
        let b = tracker.begin(Panel::Chat);
        assert!(b > a);
        assert_eq!(b.value(), a.value() + 1);
    }

    #[test]
    fn test_complete_current_token_clears_busy() {
        let mut tracker = RequestTracker::new();
        let token = tracker.begin(Panel::Qa);
        assert!(tracker.is_busy(Panel::Qa));
        assert!(tracker.complete(Panel::Qa, token));
        assert!(!tracker.is_busy(Panel::Qa));
    }

    #[test]
    fn test_superseded_token_is_stale() {
        let mut tracker = RequestTracker::new();
        let first = tracker.begin(Panel::Research);
        let second = tracker.begin(Panel::Research);

        assert!(!tracker.complete(Panel::Research, first));
        assert!(tracker.is_busy(Panel::Research));
        assert!(tracker.complete(Panel::Research, second));
    }

    #[test]
    fn test_token_for_other_panel_is_stale() {
        let mut tracker = RequestTracker::new();
        let token = tracker.begin(Panel::Explain);
        tracker.begin(Panel::Refactor);
        assert!(!tracker.complete(Panel::Refactor, token));
    }

    #[test]
    fn test_cancel_makes_reply_stale() {
        let mut tracker = RequestTracker::new();
        let token = tracker.begin(Panel::Image);
        tracker.cancel(Panel::Image);
        assert!(!tracker.is_busy(Panel::Image));
        assert!(!tracker.complete(Panel::Image, token));
    }

    #[test]
    fn test_cancel_all() {
        let mut tracker = RequestTracker::new();
        tracker.begin(Panel::Chat);
        tracker.begin(Panel::Generate);
        assert!(tracker.any_busy());
        tracker.cancel_all();
        assert!(!tracker.any_busy());
    }
}
