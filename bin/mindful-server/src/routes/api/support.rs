//! Static support content: crisis resources and the daily tip.

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use utoipa::OpenApi;

use crate::companion::{CrisisResource, DailyTip, crisis_resources, daily_tip};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(list_crisis_resources, get_daily_tip),
    components(schemas(CrisisResource, DailyTip))
)]
pub struct SupportApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/crisis-resources", get(list_crisis_resources))
        .route("/daily-tip", get(get_daily_tip))
}

#[utoipa::path(
    get,
    path = "/api/crisis-resources",
    tag = "support",
    responses(
        (status = 200, description = "Fixed list of crisis support resources", body = Vec<CrisisResource>),
    )
)]
pub async fn list_crisis_resources() -> Json<Vec<CrisisResource>> {
    Json(crisis_resources())
}

#[utoipa::path(
    get,
    path = "/api/daily-tip",
    tag = "support",
    responses(
        (status = 200, description = "Tip for the current UTC date", body = DailyTip),
    )
)]
pub async fn get_daily_tip() -> Json<DailyTip> {
    Json(daily_tip(Utc::now().date_naive()))
}
