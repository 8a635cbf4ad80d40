use axum::{
    extract::State,
    http::HeaderMap,
    response::Json,
    routing::get,
    Router,
};
use chrono::Utc;
use riskgate_classify::{HeaderLookup, LookupError};
use riskgate_core::{EvaluationRecord, RiskGateError, RiskGateResult};
use riskgate_flow::{FlowState, RiskClassifierNode};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

pub struct ServeState {
    pub node: RiskClassifierNode,
}

/// Header lookup over the incoming request's headers. Absence comes back as
/// an empty vec; undecodable header bytes are a lookup fault.
struct RequestHeaders<'a>(&'a HeaderMap);

impl HeaderLookup for RequestHeaders<'_> {
    fn values(&self, name: &str) -> Result<Vec<String>, LookupError> {
        let mut values = Vec::new();
        for value in self.0.get_all(name) {
            let s = value
                .to_str()
                .map_err(|e| LookupError(format!("undecodable value for {}: {}", name, e)))?;
            values.push(s.to_string());
        }
        Ok(values)
    }
}

pub fn evaluate_router(state: Arc<ServeState>) -> Router {
    Router::new()
        .route("/v1/evaluate", get(evaluate_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "riskgate"
    }))
}

async fn evaluate_handler(
    State(state): State<Arc<ServeState>>,
    headers: HeaderMap,
) -> Json<EvaluationRecord> {
    // Fresh flow-scoped state per request; the host engine would own this
    // for the lifetime of the whole flow.
    let flow_state = FlowState::new();
    let evaluation = state.node.process(&RequestHeaders(&headers), &flow_state);

    let record = EvaluationRecord {
        id: uuid::Uuid::new_v4().to_string(),
        outcome: evaluation.outcome,
        score: flow_state.score(),
        signals: flow_state.signals(),
        evaluated_at: Utc::now(),
    };

    info!(id = %record.id, outcome = %record.outcome, score = ?record.score, "evaluation served");
    Json(record)
}

pub async fn run_serve(bind: &str, port: u16, node: RiskClassifierNode) -> RiskGateResult<()> {
    let state = Arc::new(ServeState { node });
    let router = evaluate_router(state);

    let addr = format!("{}:{}", bind, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| RiskGateError::Server(format!("bind {}: {}", addr, e)))?;
    info!("riskgate listening on {}", addr);
    axum::serve(listener, router).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use riskgate_core::{Outcome, Thresholds, RISK_HEADER};

    fn serve_state() -> Arc<ServeState> {
        Arc::new(ServeState {
            node: RiskClassifierNode::new(Thresholds::default()).with_save_header(true),
        })
    }

    #[test]
    fn request_headers_absent_is_empty() {
        let headers = HeaderMap::new();
        assert_eq!(
            RequestHeaders(&headers).values(RISK_HEADER).unwrap(),
            Vec::<String>::new()
        );
    }

    #[test]
    fn request_headers_undecodable_is_fault() {
        let mut headers = HeaderMap::new();
        headers.insert(
            RISK_HEADER,
            HeaderValue::from_bytes(&[0x61, 0xff, 0x62]).unwrap(),
        );
        assert!(RequestHeaders(&headers).values(RISK_HEADER).is_err());
    }

    #[tokio::test]
    async fn evaluate_returns_record_for_valid_header() {
        let mut headers = HeaderMap::new();
        headers.insert(RISK_HEADER, HeaderValue::from_static("a;b;c;uid=60"));

        let Json(record) = evaluate_handler(State(serve_state()), headers).await;
        assert_eq!(record.outcome, Outcome::High);
        assert_eq!(record.score, Some(60.0));
        assert!(record.signals.is_some());
    }

    #[tokio::test]
    async fn evaluate_absorbs_malformed_header() {
        let mut headers = HeaderMap::new();
        headers.insert(RISK_HEADER, HeaderValue::from_static("a;b"));

        let Json(record) = evaluate_handler(State(serve_state()), headers).await;
        assert_eq!(record.outcome, Outcome::Error);
        assert_eq!(record.score, None);
        assert_eq!(record.signals, None);
    }

    #[tokio::test]
    async fn evaluate_without_header_is_no_score() {
        let Json(record) = evaluate_handler(State(serve_state()), HeaderMap::new()).await;
        assert_eq!(record.outcome, Outcome::NoScore);
        assert_eq!(record.score, None);
    }

    #[tokio::test]
    async fn bind_failure_is_server_error() {
        let node = RiskClassifierNode::new(Thresholds::default());
        let err = run_serve("not an address", 0, node).await.unwrap_err();
        assert!(matches!(err, RiskGateError::Server(_)));
    }
}
