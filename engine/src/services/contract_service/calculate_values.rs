// Handlers for the CalculateValues and ApplyUpdate RPCs
use tonic::{Response, Status};

use shared::models::ContractUpdate;

use super::helpers::{parse_end_time_mode, parse_field, parse_record_json, to_calculate_response};
use crate::calculator::ValueCalculator;
use crate::services::{ApplyUpdateRequest, CalculateValuesRequest, CalculateValuesResponse};

pub async fn handle_calculate_values(
    req_payload: CalculateValuesRequest,
    calculator: ValueCalculator,
) -> Result<Response<CalculateValuesResponse>, Status> {
    let record = parse_record_json(&req_payload.record_json)?;
    let mode = parse_end_time_mode(req_payload.end_time_mode.as_deref(), calculator.mode())?;

    let calculated = ValueCalculator::new(mode).calculate(&record)?;
    tracing::debug!(
        total_value = calculated.total_value,
        down_payment = calculated.down_payment,
        ?mode,
        "Values calculated (handler)"
    );
    Ok(Response::new(to_calculate_response(&calculated)?))
}

pub async fn handle_apply_update(
    req_payload: ApplyUpdateRequest,
    calculator: ValueCalculator,
) -> Result<Response<CalculateValuesResponse>, Status> {
    let record = parse_record_json(&req_payload.record_json)?;
    let field = parse_field(&req_payload.field)?;
    let update = ContractUpdate::from_form_input(field, &req_payload.value);

    let updated = calculator.apply(&record, update)?;
    tracing::debug!(?field, total_value = updated.total_value, "Form update applied (handler)");
    Ok(Response::new(to_calculate_response(&updated)?))
}
