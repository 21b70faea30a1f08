use crate::PackPlan;
use packwise_derive::api_model;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Query string of both packing endpoints.
///
/// `x` stays a string so that absent and malformed values reach the order
/// validation and get its messages.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderQuery {
    /// Items ordered, an integer of at least 1.
    pub x: Option<String>,
}

/// Optimal plan, keyed by pack size.
#[api_model]
pub struct PlanResponse {
    pub data: PlanData,
}

#[api_model]
pub struct PlanData {
    #[cfg_attr(feature = "server", schema(example = json!({"250": 1, "500": 1})))]
    pub packs: BTreeMap<u32, u64>,
}

/// Suboptimal single-size allocations, largest size first.
#[api_model]
pub struct AllocationsResponse {
    pub data: AllocationsData,
}

#[api_model]
pub struct AllocationsData {
    #[cfg_attr(feature = "server", schema(example = json!([{"5000": 1}, {"2000": 1}])))]
    pub packs: Vec<BTreeMap<u32, u64>>,
}

/// Error body of every failed packing request.
#[api_model]
pub struct ErrorResponse {
    /// Always `false`.
    pub status: bool,
    pub message: String,
}

impl From<PackPlan> for PlanResponse {
    fn from(plan: PackPlan) -> Self {
        Self { data: PlanData { packs: plan.into_map() } }
    }
}

impl From<Vec<PackPlan>> for AllocationsResponse {
    fn from(plans: Vec<PackPlan>) -> Self {
        Self { data: AllocationsData { packs: plans.into_iter().map(PackPlan::into_map).collect() } }
    }
}

impl ErrorResponse {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self { status: false, message: message.into() }
    }
}
