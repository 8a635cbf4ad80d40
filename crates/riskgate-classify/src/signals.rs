use riskgate_core::RiskSignals;

/// Break a raw header value into all of its key=value fields, for downstream
/// steps that want the full signal set rather than just the overall score.
/// Fields without a '=' are skipped. Never affects the classify outcome.
pub fn parse_signals(raw: &str) -> RiskSignals {
    let mut signals = RiskSignals::new();

    for field in raw.split(';') {
        if let Some((key, value)) = field.split_once('=') {
            signals.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    signals
}
