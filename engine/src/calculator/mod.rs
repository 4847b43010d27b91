// Derived contract values: total, down payment, end time and staffing
pub mod pricing;
pub mod schedule;
pub mod staffing;

use serde::Deserialize;
use shared::models::{ContractRecord, ContractUpdate};

use crate::error::EngineError;

pub use pricing::{down_payment, total_value, DOWN_PAYMENT_RATE};
pub use schedule::derive_end_time;
pub use staffing::{calculate_base_waiters, waiters_narrative};

/// How the event end time is handled when recalculating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndTimeMode {
    /// The end time typed by the user passes through unchanged.
    Keep,
    /// The end time is recomputed as start time plus three hours.
    #[default]
    DeriveFromStart,
}

/// Recomputes `total_value`, `down_payment` and, in `DeriveFromStart` mode,
/// `event_end_time`. Every other field passes through untouched.
pub fn calculate_values(record: &ContractRecord, mode: EndTimeMode) -> Result<ContractRecord, EngineError> {
    let mut calculated = record.clone();
    calculated.total_value = total_value(record);
    calculated.down_payment = down_payment(calculated.total_value);

    if mode == EndTimeMode::DeriveFromStart {
        calculated.event_end_time = derive_end_time(&record.event_start_time)?;
    }

    tracing::debug!(
        total_value = calculated.total_value,
        down_payment = calculated.down_payment,
        end_time = %calculated.event_end_time,
        "Calculated contract values"
    );
    Ok(calculated)
}

/// Calculator bound to one end-time policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueCalculator {
    mode: EndTimeMode,
}

impl ValueCalculator {
    pub fn new(mode: EndTimeMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> EndTimeMode {
        self.mode
    }

    pub fn calculate(&self, record: &ContractRecord) -> Result<ContractRecord, EngineError> {
        calculate_values(record, self.mode)
    }

    /// Applies one form edit and recalculates the derived fields.
    pub fn apply(&self, record: &ContractRecord, update: ContractUpdate) -> Result<ContractRecord, EngineError> {
        let mut updated = record.clone();
        updated.apply(update);
        self.calculate(&updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ContractField;

    fn sample_record() -> ContractRecord {
        ContractRecord {
            client_name: "Carlos Lima".to_string(),
            event_start_time: "20:30".to_string(),
            event_end_time: "22:00".to_string(),
            adult_count: 40,
            child_count: 6,
            extra_waiters: 1,
            adult_price: 55.0,
            child_price: 27.5,
            extra_waiter_price: 120.0,
            ..ContractRecord::default()
        }
    }

    #[test]
    fn test_calculate_values_keep_mode() {
        let calculated = calculate_values(&sample_record(), EndTimeMode::Keep).unwrap();
        // 40*55 + 6*27.5 + 1*120
        assert_eq!(calculated.total_value, 2485.0);
        assert_eq!(calculated.down_payment, 994.0);
        assert_eq!(calculated.event_end_time, "22:00");
        assert_eq!(calculated.client_name, "Carlos Lima");
    }

    #[test]
    fn test_calculate_values_derive_mode() {
        let calculated = calculate_values(&sample_record(), EndTimeMode::DeriveFromStart).unwrap();
        assert_eq!(calculated.event_end_time, "23:30");
        assert_eq!(calculated.total_value, 2485.0);
    }

    #[test]
    fn test_calculate_values_is_idempotent() {
        let calculator = ValueCalculator::new(EndTimeMode::DeriveFromStart);
        let once = calculator.calculate(&sample_record()).unwrap();
        let twice = calculator.calculate(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_stale_derived_fields_are_overwritten() {
        let mut record = sample_record();
        record.total_value = 1.0;
        record.down_payment = 999_999.0;
        let calculated = calculate_values(&record, EndTimeMode::Keep).unwrap();
        assert_eq!(calculated.total_value, 2485.0);
        assert_eq!(calculated.down_payment, 994.0);
    }

    #[test]
    fn test_malformed_start_time_only_fails_in_derive_mode() {
        let mut record = sample_record();
        record.event_start_time = "oito horas".to_string();
        assert!(calculate_values(&record, EndTimeMode::Keep).is_ok());
        let err = calculate_values(&record, EndTimeMode::DeriveFromStart).unwrap_err();
        assert!(matches!(err, EngineError::InvalidTimeFormat(_)));
    }

    #[test]
    fn test_apply_update_recalculates() {
        let calculator = ValueCalculator::default();
        let base = calculator.calculate(&sample_record()).unwrap();
        let update = ContractUpdate::from_form_input(ContractField::AdultCount, "50");
        let updated = calculator.apply(&base, update).unwrap();
        assert_eq!(updated.adult_count, 50);
        assert_eq!(updated.total_value, 50.0 * 55.0 + 6.0 * 27.5 + 120.0);
        assert_eq!(updated.down_payment, (updated.total_value * 0.4).round());
    }

    #[test]
    fn test_apply_start_time_derives_end_time() {
        let calculator = ValueCalculator::new(EndTimeMode::DeriveFromStart);
        let update = ContractUpdate::from_form_input(ContractField::EventStartTime, "22:00");
        let updated = calculator.apply(&sample_record(), update).unwrap();
        assert_eq!(updated.event_end_time, "01:00");
    }

    #[test]
    fn test_default_calculator_derives_end_time() {
        assert_eq!(EndTimeMode::default(), EndTimeMode::DeriveFromStart);
        let calculated = ValueCalculator::default().calculate(&sample_record()).unwrap();
        assert_eq!(calculated.event_end_time, "23:30");
    }

    #[test]
    fn test_end_time_mode_from_config_value() {
        let mode: EndTimeMode = serde_json::from_str("\"derive_from_start\"").unwrap();
        assert_eq!(mode, EndTimeMode::DeriveFromStart);
    }
}
