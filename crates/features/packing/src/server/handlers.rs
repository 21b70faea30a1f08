use super::dto::{AllocationsResponse, ErrorResponse, OrderQuery, PlanResponse};
use crate::{Packing, PackingError};
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use packwise_derive::api_handler;
use packwise_domain::constants::PACKING_TAG;
use packwise_kernel::server::ApiState;

impl IntoResponse for PackingError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::InvalidOrder { message, .. } => (StatusCode::BAD_REQUEST, message.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_owned()),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "packing request failed");
        } else {
            tracing::debug!(error = %self, "packing request rejected");
        }

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

fn packing(state: &ApiState) -> Result<&Packing, PackingError> {
    state.try_get_slice::<Packing>().map_err(|err| PackingError::internal(err.to_string()))
}

#[api_handler(
    get,
    path = "/correct",
    params(OrderQuery),
    responses(
        (status = OK, description = "Greedy plan with small packs merged upwards", body = PlanResponse),
        (status = BAD_REQUEST, description = "Missing or invalid `x`", body = ErrorResponse),
    ),
    tag = PACKING_TAG,
)]
pub(super) async fn correct_handler(
    State(state): State<ApiState>,
    Query(query): Query<OrderQuery>,
) -> Result<Json<PlanResponse>, PackingError> {
    let plan = packing(&state)?.correct(query.x.as_deref())?;
    Ok(Json(plan.into()))
}

#[api_handler(
    get,
    path = "/incorrect",
    params(OrderQuery),
    responses(
        (status = OK, description = "Suboptimal single-size allocations", body = AllocationsResponse),
        (status = BAD_REQUEST, description = "Missing or invalid `x`", body = ErrorResponse),
    ),
    tag = PACKING_TAG,
)]
pub(super) async fn incorrect_handler(
    State(state): State<ApiState>,
    Query(query): Query<OrderQuery>,
) -> Result<Json<AllocationsResponse>, PackingError> {
    let plans = packing(&state)?.incorrect(query.x.as_deref())?;
    Ok(Json(plans.into()))
}
