use axum::Router;

use crate::Deployment;

pub mod values;

pub fn router(deployment: Deployment) -> Router {
    Router::new()
        .merge(values::router())
        .with_state(deployment)
}
