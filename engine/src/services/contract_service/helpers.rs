// Conversions between wire messages and domain records
use chrono::{NaiveDate, Utc};
use shared::models::{ContractField, ContractRecord, EventSummary, StoredContractRecord};

use crate::calculator::{calculate_base_waiters, EndTimeMode};
use crate::error::EngineError;
use crate::services::{CalculateValuesResponse, ProtoEventSummary, StoredContractResponse};

pub fn parse_record_json(record_json: &str) -> Result<ContractRecord, EngineError> {
    // An empty payload means a fresh form
    if record_json.trim().is_empty() {
        return Ok(ContractRecord::default());
    }
    Ok(serde_json::from_str(record_json)?)
}

pub fn parse_end_time_mode(mode: Option<&str>, default: EndTimeMode) -> Result<EndTimeMode, EngineError> {
    match mode.map(str::trim) {
        None | Some("") => Ok(default),
        Some("keep") => Ok(EndTimeMode::Keep),
        Some("derive_from_start") => Ok(EndTimeMode::DeriveFromStart),
        Some(other) => Err(EngineError::ValidationError(format!(
            "unknown end time mode '{}' (expected 'keep' or 'derive_from_start')",
            other
        ))),
    }
}

pub fn parse_field(field: &str) -> Result<ContractField, EngineError> {
    serde_json::from_value(serde_json::Value::String(field.trim().to_string()))
        .map_err(|_| EngineError::ValidationError(format!("unknown or read-only contract field '{}'", field)))
}

/// Empty means today.
pub fn parse_issue_date(date: &str) -> Result<NaiveDate, EngineError> {
    if date.trim().is_empty() {
        return Ok(Utc::now().date_naive());
    }
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|e| EngineError::ValidationError(format!("invalid issue date '{}': {}", date, e)))
}

pub fn to_calculate_response(record: &ContractRecord) -> Result<CalculateValuesResponse, EngineError> {
    Ok(CalculateValuesResponse {
        record_json: serde_json::to_string(record)?,
        total_value: record.total_value,
        down_payment: record.down_payment,
        event_end_time: record.event_end_time.clone(),
        base_waiters: calculate_base_waiters(record.adult_count, record.child_count),
    })
}

pub fn to_stored_response(stored: &StoredContractRecord) -> Result<StoredContractResponse, EngineError> {
    Ok(StoredContractResponse {
        id: stored.id.clone(),
        created_at: stored.created_at.to_rfc3339(),
        record_json: serde_json::to_string(&stored.record)?,
    })
}

pub fn to_proto_event(event: EventSummary) -> ProtoEventSummary {
    ProtoEventSummary {
        id: event.id,
        title: event.title,
        date: event.date,
        time: event.time,
        location: event.location,
        guest_count: event.guest_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_names() {
        assert_eq!(parse_field("adultCount").unwrap(), ContractField::AdultCount);
        assert_eq!(parse_field(" extraWaiterPrice ").unwrap(), ContractField::ExtraWaiterPrice);
        // Same key as the record JSON, plus the older spellings
        assert_eq!(parse_field("clientCpf").unwrap(), ContractField::ClientDocument);
        assert_eq!(parse_field("clientDoc").unwrap(), ContractField::ClientDocument);
        assert_eq!(parse_field("clientDocument").unwrap(), ContractField::ClientDocument);
        assert!(matches!(parse_field("totalValue"), Err(EngineError::ValidationError(_))));
    }

    #[test]
    fn test_parse_end_time_mode() {
        assert_eq!(parse_end_time_mode(None, EndTimeMode::Keep).unwrap(), EndTimeMode::Keep);
        assert_eq!(
            parse_end_time_mode(Some("derive_from_start"), EndTimeMode::Keep).unwrap(),
            EndTimeMode::DeriveFromStart
        );
        assert!(parse_end_time_mode(Some("sometimes"), EndTimeMode::Keep).is_err());
    }

    #[test]
    fn test_parse_record_json_empty_is_default_form() {
        assert_eq!(parse_record_json("  ").unwrap(), ContractRecord::default());
        assert!(matches!(parse_record_json("[1, 2]"), Err(EngineError::JsonError { .. })));
    }

    #[test]
    fn test_parse_issue_date() {
        assert_eq!(parse_issue_date("2025-04-02").unwrap(), NaiveDate::from_ymd_opt(2025, 4, 2).unwrap());
        assert!(parse_issue_date("02/04/2025").is_err());
    }
}
