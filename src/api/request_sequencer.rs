use serde::{Deserialize, Serialize};

/// Opaque, monotonically increasing id of one chart data request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestToken(u64);

impl RequestToken {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Issues request tokens and recognizes stale completions.
///
/// Only the completion of the most recently issued request may be drawn;
/// anything older finished out of order and is discarded.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    last_issued: u64,
    last_completed: Option<u64>,
}

impl RequestSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> RequestToken {
        self.last_issued += 1;
        RequestToken(self.last_issued)
    }

    #[must_use]
    pub fn latest(&self) -> Option<RequestToken> {
        (self.last_issued > 0).then_some(RequestToken(self.last_issued))
    }

    #[must_use]
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.last_issued
    }

    /// Marks `token` complete; returns `false` if its result must be dropped.
    pub fn complete(&mut self, token: RequestToken) -> bool {
        if !self.is_current(token) || self.last_completed == Some(token.0) {
            return false;
        }
        self.last_completed = Some(token.0);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn older_completion_is_rejected() {
        let mut sequencer = RequestSequencer::new();
        let first = sequencer.issue();
        let second = sequencer.issue();
        assert!(!sequencer.complete(first));
        assert!(sequencer.complete(second));
    }

    #[test]
    fn duplicate_completion_is_rejected() {
        let mut sequencer = RequestSequencer::new();
        let token = sequencer.issue();
        assert!(sequencer.complete(token));
        assert!(!sequencer.complete(token));
    }
}
