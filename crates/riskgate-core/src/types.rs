use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Request header carrying the upstream risk assessment.
pub const RISK_HEADER: &str = "akamai-user-risk";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    High,
    Medium,
    Low,
    #[serde(rename = "No Score")]
    NoScore,
    Error,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::High => "High",
            Outcome::Medium => "Medium",
            Outcome::Low => "Low",
            Outcome::NoScore => "No Score",
            Outcome::Error => "Error",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tier boundaries. A score strictly above `high` is High, strictly above
/// `medium` is Medium, everything else Low. Equal-to-threshold falls into
/// the lower tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Thresholds {
    pub high: f64,
    pub medium: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            high: 50.0,
            medium: 25.0,
        }
    }
}

/// Result of one classification call. `score` is set only when the header
/// was present and parsed, i.e. for High/Medium/Low outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub outcome: Outcome,
    pub score: Option<f64>,
}

impl Evaluation {
    pub fn no_score() -> Self {
        Self {
            outcome: Outcome::NoScore,
            score: None,
        }
    }

    pub fn error() -> Self {
        Self {
            outcome: Outcome::Error,
            score: None,
        }
    }
}

/// All key=value pairs found in the risk header, for downstream steps that
/// want more than the overall score.
pub type RiskSignals = BTreeMap<String, String>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub id: String,
    pub outcome: Outcome,
    pub score: Option<f64>,
    pub signals: Option<RiskSignals>,
    pub evaluated_at: DateTime<Utc>,
}
