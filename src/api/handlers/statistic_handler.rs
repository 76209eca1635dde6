//! Statistics dashboard handler.

use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::AppState;
use crate::errors::AppResult;
use crate::services::StatisticSummary;

/// Query parameters for the statistics endpoint
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatisticQuery {
    /// Cap the number of recent reviews included
    pub max: Option<u64>,
}

/// Dashboard response envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct StatisticResponse {
    #[schema(example = "Statistics retrieved successfully")]
    pub message: String,
    pub data: StatisticSummary,
}

/// Create statistics routes
pub fn statistic_routes() -> Router<AppState> {
    Router::new().route("/", get(get_statistics))
}

/// Aggregate usage statistics for the admin dashboard
#[utoipa::path(
    get,
    path = "/api/statistic",
    tag = "Statistics",
    params(StatisticQuery),
    responses(
        (status = 200, description = "Aggregate counts and averages", body = StatisticResponse)
    )
)]
pub async fn get_statistics(
    State(state): State<AppState>,
    Query(query): Query<StatisticQuery>,
) -> AppResult<Json<StatisticResponse>> {
    let data = state.statistics.summary(query.max).await?;

    Ok(Json(StatisticResponse {
        message: "Statistics retrieved successfully".to_string(),
        data,
    }))
}
