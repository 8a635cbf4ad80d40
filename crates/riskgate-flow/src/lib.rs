pub mod node;
pub mod state;

pub use node::RiskClassifierNode;
pub use state::{FlowState, HEADER_KEY, SCORE_KEY};
