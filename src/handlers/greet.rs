use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::{greeting::greeting, state::AppState};

/// `GET /` — the greeting for the configured environment.
pub async fn index(State(st): State<Arc<AppState>>) -> Html<String> {
    Html(greeting(&st.env_name, st.wording))
}
