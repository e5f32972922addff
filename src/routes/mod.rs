pub mod rides;

use axum::Router;

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new().merge(rides::router()).with_state(state)
}
