pub mod error;
pub mod types;

pub use error::{RiskGateError, RiskGateResult};
pub use types::{Evaluation, EvaluationRecord, Outcome, RiskSignals, Thresholds, RISK_HEADER};
