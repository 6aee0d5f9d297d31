// state.rs
use crate::greeting::Wording;

/// Resolved once at startup; handlers never read the process environment.
#[derive(Clone)]
pub struct AppState {
    pub env_name: String,
    pub wording: Wording,
}

impl AppState {
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::var("NODE_ENV").ok(),
            std::env::var("GREETING_WORDING").ok(),
        )
    }

    /// `env_name` unset or empty falls back to "dev".
    pub fn resolve(env_name: Option<String>, wording: Option<String>) -> Self {
        let env_name = env_name
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "dev".to_string());
        let wording = match wording.as_deref() {
            Some("running") => Wording::RunningIn,
            _ => Wording::In,
        };
        Self { env_name, wording }
    }
}
