//! Aggregate statistics controller.

use crate::{
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{extract::State, routing::get, Router};
use kinship_service::StatsResponse;
use tracing::debug;

/// Creates the stats router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_stats))
}

/// Combined user and friendship totals for the dashboard.
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Stats found", body = StatsResponse)
    )
)]
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<StatsResponse> {
    debug!("Stats request");

    let users = state.user_service.get_user_stats().await?;
    let friendships = state.friend_service.get_friendship_stats().await?;

    ok(StatsResponse { users, friendships }, "Stats found")
}
