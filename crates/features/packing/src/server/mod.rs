//! HTTP surface of the packing slice.

mod dto;
mod handlers;

pub use dto::{AllocationsData, AllocationsResponse, ErrorResponse, OrderQuery, PlanData, PlanResponse};

use packwise_kernel::server::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// `/correct` and `/incorrect`, reading the [`crate::Packing`] slice from state.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::correct_handler))
        .routes(routes!(handlers::incorrect_handler))
}
