use dashmap::DashMap;
use riskgate_core::RiskSignals;
use serde_json::Value;

/// FlowState key holding the parsed numeric score.
pub const SCORE_KEY: &str = "score";

/// FlowState key holding the full parsed header signal map.
pub const HEADER_KEY: &str = "akamai_http_header";

/// Key-value store scoped to one flow execution. The host owns one per
/// authentication flow; later steps read what earlier steps wrote. Writes
/// are plain last-writer-wins sets.
#[derive(Debug, Default)]
pub struct FlowState {
    values: DashMap<String, Value>,
}

impl FlowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).map(|v| v.clone())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn put_score(&self, score: f64) {
        self.put(SCORE_KEY, Value::from(score));
    }

    pub fn score(&self) -> Option<f64> {
        self.get(SCORE_KEY).and_then(|v| v.as_f64())
    }

    pub fn put_signals(&self, signals: &RiskSignals) {
        self.put(HEADER_KEY, serde_json::json!(signals));
    }

    pub fn signals(&self) -> Option<RiskSignals> {
        self.get(HEADER_KEY)
            .and_then(|v| serde_json::from_value(v).ok())
    }
}
