//! Pending analysis requests, one slot per purpose
//!
//! Issuing a request of a purpose replaces whatever was pending for that
//! purpose. A reply is accepted only if a request of its purpose is pending
//! for the same FEN; everything else is stale.

use crate::game::ai::AnalysisPurpose;

/// A request the session is still waiting on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    /// Position sent to the engine
    pub fen: String,
    /// For reply predictions: the live position the hypothetical move was
    /// played from
    pub base_fen: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct PendingAnalyses {
    primary: Option<PendingRequest>,
    prediction: Option<PendingRequest>,
}

impl PendingAnalyses {
    fn slot(&mut self, purpose: AnalysisPurpose) -> &mut Option<PendingRequest> {
        match purpose {
            AnalysisPurpose::Primary => &mut self.primary,
            AnalysisPurpose::ReplyPrediction => &mut self.prediction,
        }
    }

    /// Record a new request, returning the one it supersedes
    pub fn issue(
        &mut self,
        purpose: AnalysisPurpose,
        request: PendingRequest,
    ) -> Option<PendingRequest> {
        self.slot(purpose).replace(request)
    }

    pub fn get(&self, purpose: AnalysisPurpose) -> Option<&PendingRequest> {
        match purpose {
            AnalysisPurpose::Primary => self.primary.as_ref(),
            AnalysisPurpose::ReplyPrediction => self.prediction.as_ref(),
        }
    }

    pub fn is_pending(&self, purpose: AnalysisPurpose) -> bool {
        self.get(purpose).is_some()
    }

    /// Take the pending request of `purpose` if it was issued for `fen`
    pub fn take_matching(&mut self, purpose: AnalysisPurpose, fen: &str) -> Option<PendingRequest> {
        let slot = self.slot(purpose);
        if slot.as_ref().is_some_and(|r| r.fen == fen) {
            slot.take()
        } else {
            None
        }
    }

    pub fn cancel(&mut self, purpose: AnalysisPurpose) -> Option<PendingRequest> {
        self.slot(purpose).take()
    }

    pub fn clear(&mut self) {
        self.primary = None;
        self.prediction = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(fen: &str) -> PendingRequest {
        PendingRequest {
            fen: fen.to_string(),
            base_fen: None,
        }
    }

    #[test]
    fn test_new_request_supersedes_old() {
        let mut pending = PendingAnalyses::default();
        assert!(pending.issue(AnalysisPurpose::Primary, request("a")).is_none());
        let superseded = pending.issue(AnalysisPurpose::Primary, request("b"));
        assert_eq!(superseded, Some(request("a")));

        assert!(pending.take_matching(AnalysisPurpose::Primary, "a").is_none());
        assert!(pending.take_matching(AnalysisPurpose::Primary, "b").is_some());
        assert!(!pending.is_pending(AnalysisPurpose::Primary));
    }

    #[test]
    fn test_purposes_are_independent() {
        let mut pending = PendingAnalyses::default();
        pending.issue(AnalysisPurpose::Primary, request("a"));
        pending.issue(AnalysisPurpose::ReplyPrediction, request("a"));
        assert!(pending
            .take_matching(AnalysisPurpose::ReplyPrediction, "a")
            .is_some());
        assert!(pending.is_pending(AnalysisPurpose::Primary));
        pending.clear();
        assert!(!pending.is_pending(AnalysisPurpose::Primary));
    }
}
