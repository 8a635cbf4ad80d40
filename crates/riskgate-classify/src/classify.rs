use crate::header::HeaderLookup;
use riskgate_core::{Evaluation, Outcome, Thresholds, RISK_HEADER};
use thiserror::Error;
use tracing::debug;

/// Score field position within the semicolon-delimited header value.
const SCORE_FIELD_INDEX: usize = 3;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expected at least 4 fields, found {found}")]
    TooFewFields { found: usize },

    #[error("score field has no '=' separator")]
    MissingSeparator,

    #[error("score is not numeric: {0}")]
    InvalidScore(#[from] std::num::ParseFloatError),
}

/// Classify the risk header of the current request.
///
/// Total over all inputs: absence of the header yields `No Score`, any
/// malformed value or lookup fault yields `Error`, and nothing is ever
/// propagated to the caller. Only the first header value is consulted when
/// more than one is present.
pub fn classify(lookup: &impl HeaderLookup, thresholds: &Thresholds) -> Evaluation {
    let values = match lookup.values(RISK_HEADER) {
        Ok(values) => values,
        Err(e) => {
            debug!(error = %e, "risk header lookup failed");
            return Evaluation::error();
        }
    };

    match values.first() {
        Some(raw) => classify_value(raw, thresholds),
        None => Evaluation::no_score(),
    }
}

/// Classify an already-fetched header value.
pub fn classify_value(raw: &str, thresholds: &Thresholds) -> Evaluation {
    match parse_score(raw) {
        Ok(score) => Evaluation {
            outcome: tier(score, thresholds),
            score: Some(score),
        },
        Err(e) => {
            debug!(error = %e, "malformed risk header");
            Evaluation::error()
        }
    }
}

/// Extract the numeric score from a raw header value: field index 3 of the
/// semicolon-delimited string, text after the first '='.
fn parse_score(raw: &str) -> Result<f64, ParseError> {
    let fields: Vec<&str> = raw.split(';').collect();
    let field = fields
        .get(SCORE_FIELD_INDEX)
        .ok_or(ParseError::TooFewFields {
            found: fields.len(),
        })?;

    let (_, score_text) = field.split_once('=').ok_or(ParseError::MissingSeparator)?;

    Ok(score_text.trim().parse::<f64>()?)
}

fn tier(score: f64, thresholds: &Thresholds) -> Outcome {
    if score > thresholds.high {
        Outcome::High
    } else if score > thresholds.medium {
        Outcome::Medium
    } else {
        Outcome::Low
    }
}
