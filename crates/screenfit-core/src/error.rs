use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("screen context used before a viewport was observed")]
    NotInitialized,

    #[error("unknown device category: {0}")]
    UnknownCategory(String),

    #[error("unknown scale kind: {0} (expected width, height or font)")]
    UnknownScaleKind(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
