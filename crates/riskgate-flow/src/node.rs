use crate::state::FlowState;
use riskgate_classify::{classify, parse_signals, HeaderLookup};
use riskgate_core::{Evaluation, Thresholds, RISK_HEADER};
use tracing::info;

/// The risk classification step of an authentication flow. Classifies the
/// request's risk header and publishes the numeric score into FlowState for
/// later steps; the returned evaluation drives the host's branch selection.
#[derive(Debug, Clone)]
pub struct RiskClassifierNode {
    thresholds: Thresholds,
    save_header: bool,
}

impl RiskClassifierNode {
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            save_header: false,
        }
    }

    /// Also store the full parsed header signal map into FlowState.
    pub fn with_save_header(mut self, save_header: bool) -> Self {
        self.save_header = save_header;
        self
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Run one classification. State is written only when a score was
    /// parsed; No Score and Error leave FlowState untouched.
    pub fn process(&self, lookup: &impl HeaderLookup, state: &FlowState) -> Evaluation {
        let evaluation = classify(lookup, &self.thresholds);

        if let Some(score) = evaluation.score {
            state.put_score(score);

            if self.save_header {
                let raw = lookup
                    .values(RISK_HEADER)
                    .ok()
                    .and_then(|v| v.into_iter().next());
                if let Some(raw) = raw {
                    let signals = parse_signals(&raw);
                    if !signals.is_empty() {
                        state.put_signals(&signals);
                    }
                }
            }

            info!(score, outcome = %evaluation.outcome, "risk header classified");
        }

        evaluation
    }
}

impl Default for RiskClassifierNode {
    fn default() -> Self {
        Self::new(Thresholds::default())
    }
}
