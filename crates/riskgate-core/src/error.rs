use thiserror::Error;

#[derive(Debug, Error)]
pub enum RiskGateError {
    #[error("config error: {0}")]
    Config(String),

    #[error("server error: {0}")]
    Server(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RiskGateResult<T> = Result<T, RiskGateError>;
