use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::stats::{StatsFilter, StatsResponse},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/stats",
    params(StatsFilter),
    responses(
        (status = 200, description = "Totals, frequency chart and top muscle groups", body = StatsResponse),
        (status = 400, description = "Unknown period")
    ),
    tag = "stats"
)]
pub async fn get_stats(
    State(db): State<Database>,
    Query(filter): Query<StatsFilter>,
) -> Result<Response, WebError> {
    let stats = services::get_stats(db.pool(), filter.period).await?;

    Ok(Json(stats).into_response())
}
