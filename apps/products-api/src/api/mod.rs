use axum::Router;
use axum::middleware::from_fn_with_state;
use axum_helpers::jwt_auth_middleware;

use crate::state::AppState;

pub mod health;
pub mod products;
pub mod users;

/// Creates the API routes.
///
/// `/products` requires a bearer token; `/users` is public so that callers
/// can register and obtain one.
pub fn routes(state: &AppState) -> Router {
    let protected = Router::new()
        .nest("/products", products::router(state))
        .route_layer(from_fn_with_state(
            state.jwt_auth.clone(),
            jwt_auth_middleware,
        ));

    Router::new()
        .merge(protected)
        .nest("/users", users::router(state))
}

/// Router with the `/ready` endpoint backed by a database ping.
pub fn ready_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
