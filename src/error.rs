use thiserror::Error;

/// Errors raised while configuring or binding the background.
///
/// Runtime failures inside the browser callbacks are swallowed by the caller;
/// only configuration problems ever reach JavaScript.
#[derive(Debug, Error)]
pub enum LifeError {
    #[error("invalid config: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },

    #[error("config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dom: {0}")]
    Dom(String),
}

pub type LifeResult<T> = Result<T, LifeError>;

impl LifeError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        LifeError::InvalidConfig { field, reason }
    }

    #[cfg(target_arch = "wasm32")]
    pub(crate) fn dom(what: impl Into<String>) -> Self {
        LifeError::Dom(what.into())
    }
}
