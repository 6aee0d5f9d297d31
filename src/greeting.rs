/// Which phrasing of the greeting the service serves.
///
/// Two deployments of this app historically shipped slightly different
/// wordings; both are kept and selected via `GREETING_WORDING`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wording {
    In,
    RunningIn,
}

/// Body served by the root route.
pub fn greeting(env_name: &str, wording: Wording) -> String {
    match wording {
        Wording::In => format!("Hello from Node.js App in {env_name} environment!"),
        Wording::RunningIn => {
            format!("Hello from Node.js App running in {env_name} environment!")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_wording() {
        assert_eq!(
            greeting("dev", Wording::In),
            "Hello from Node.js App in dev environment!"
        );
    }

    #[test]
    fn running_wording() {
        assert_eq!(
            greeting("production", Wording::RunningIn),
            "Hello from Node.js App running in production environment!"
        );
    }
}
