use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::utils::{coerce_count, coerce_count_value, coerce_price, coerce_price_value};

/// Contract data as collected by the form. `total_value` and `down_payment`
/// are derived by the engine calculator and never edited directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRecord {
    // Client
    #[serde(default)]
    pub client_name: String,
    #[serde(default, rename = "clientCpf", alias = "clientDoc")]
    pub client_document: String,
    #[serde(default)]
    pub client_rg: String,
    #[serde(default)]
    pub client_address: String,

    // Event
    #[serde(default)]
    pub event_date: String,
    #[serde(default)]
    pub event_address: String,
    #[serde(default)]
    pub event_start_time: String,
    #[serde(default)]
    pub event_end_time: String,

    // Quantities
    #[serde(default, deserialize_with = "lenient_count")]
    pub adult_count: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub child_count: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub extra_waiters: u32,

    // Prices
    #[serde(default, deserialize_with = "lenient_price")]
    pub adult_price: f64,
    #[serde(default, deserialize_with = "lenient_price")]
    pub child_price: f64,
    #[serde(default, deserialize_with = "lenient_price")]
    pub extra_waiter_price: f64,

    // Payment
    #[serde(default, deserialize_with = "lenient_price")]
    pub total_value: f64,
    #[serde(default, deserialize_with = "lenient_price")]
    pub down_payment: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_date: Option<String>,
}

impl Default for ContractRecord {
    // Values the form starts with
    fn default() -> Self {
        ContractRecord {
            client_name: String::new(),
            client_document: String::new(),
            client_rg: String::new(),
            client_address: String::new(),
            event_date: String::new(),
            event_address: String::new(),
            event_start_time: "20:30".to_string(),
            event_end_time: "23:30".to_string(),
            adult_count: 30,
            child_count: 0,
            extra_waiters: 0,
            adult_price: 55.0,
            child_price: 27.0,
            extra_waiter_price: 120.0,
            total_value: 0.0,
            down_payment: 0.0,
            signature_date: None,
        }
    }
}

impl ContractRecord {
    pub fn guest_count(&self) -> u32 {
        self.adult_count.saturating_add(self.child_count)
    }

    /// Amount due on the event day.
    pub fn remaining_payment(&self) -> f64 {
        self.total_value - self.down_payment
    }

    /// Writes one editable field. Derived payment fields are left stale;
    /// the engine recalculates them after every update.
    pub fn apply(&mut self, update: ContractUpdate) {
        match update {
            ContractUpdate::ClientName(v) => self.client_name = v,
            ContractUpdate::ClientDocument(v) => self.client_document = v,
            ContractUpdate::ClientRg(v) => self.client_rg = v,
            ContractUpdate::ClientAddress(v) => self.client_address = v,
            ContractUpdate::EventDate(v) => self.event_date = v,
            ContractUpdate::EventAddress(v) => self.event_address = v,
            ContractUpdate::EventStartTime(v) => self.event_start_time = v,
            ContractUpdate::EventEndTime(v) => self.event_end_time = v,
            ContractUpdate::AdultCount(v) => self.adult_count = v,
            ContractUpdate::ChildCount(v) => self.child_count = v,
            ContractUpdate::ExtraWaiters(v) => self.extra_waiters = v,
            ContractUpdate::AdultPrice(v) => self.adult_price = v,
            ContractUpdate::ChildPrice(v) => self.child_price = v,
            ContractUpdate::ExtraWaiterPrice(v) => self.extra_waiter_price = v,
            ContractUpdate::SignatureDate(v) => self.signature_date = v,
        }
    }
}

/// A contract saved to the history list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredContractRecord {
    #[serde(default = "new_contract_id")]
    pub id: String,
    #[serde(rename = "createdAt", default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub record: ContractRecord,
}

impl StoredContractRecord {
    pub fn new(record: ContractRecord) -> Self {
        StoredContractRecord {
            id: new_contract_id(),
            created_at: Utc::now(),
            record,
        }
    }
}

pub fn new_contract_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Editable form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContractField {
    ClientName,
    #[serde(rename = "clientCpf", alias = "clientDoc", alias = "clientDocument")]
    ClientDocument,
    ClientRg,
    ClientAddress,
    EventDate,
    EventAddress,
    EventStartTime,
    EventEndTime,
    AdultCount,
    ChildCount,
    ExtraWaiters,
    AdultPrice,
    ChildPrice,
    ExtraWaiterPrice,
    SignatureDate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContractUpdate {
    ClientName(String),
    ClientDocument(String),
    ClientRg(String),
    ClientAddress(String),
    EventDate(String),
    EventAddress(String),
    EventStartTime(String),
    EventEndTime(String),
    AdultCount(u32),
    ChildCount(u32),
    ExtraWaiters(u32),
    AdultPrice(f64),
    ChildPrice(f64),
    ExtraWaiterPrice(f64),
    SignatureDate(Option<String>),
}

impl ContractUpdate {
    /// Builds an update from raw form input. Numeric fields coerce bad input to zero.
    pub fn from_form_input(field: ContractField, raw: &str) -> Self {
        match field {
            ContractField::ClientName => ContractUpdate::ClientName(raw.to_string()),
            ContractField::ClientDocument => ContractUpdate::ClientDocument(raw.to_string()),
            ContractField::ClientRg => ContractUpdate::ClientRg(raw.to_string()),
            ContractField::ClientAddress => ContractUpdate::ClientAddress(raw.to_string()),
            ContractField::EventDate => ContractUpdate::EventDate(raw.to_string()),
            ContractField::EventAddress => ContractUpdate::EventAddress(raw.to_string()),
            ContractField::EventStartTime => ContractUpdate::EventStartTime(raw.trim().to_string()),
            ContractField::EventEndTime => ContractUpdate::EventEndTime(raw.trim().to_string()),
            ContractField::AdultCount => ContractUpdate::AdultCount(coerce_count(raw)),
            ContractField::ChildCount => ContractUpdate::ChildCount(coerce_count(raw)),
            ContractField::ExtraWaiters => ContractUpdate::ExtraWaiters(coerce_count(raw)),
            ContractField::AdultPrice => ContractUpdate::AdultPrice(coerce_price(raw)),
            ContractField::ChildPrice => ContractUpdate::ChildPrice(coerce_price(raw)),
            ContractField::ExtraWaiterPrice => ContractUpdate::ExtraWaiterPrice(coerce_price(raw)),
            ContractField::SignatureDate => {
                let trimmed = raw.trim();
                ContractUpdate::SignatureDate((!trimmed.is_empty()).then(|| trimmed.to_string()))
            }
        }
    }
}

/// Calendar entry for a stored contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub guest_count: u32,
}

impl From<&StoredContractRecord> for EventSummary {
    fn from(stored: &StoredContractRecord) -> Self {
        EventSummary {
            id: stored.id.clone(),
            title: stored.record.client_name.clone(),
            date: stored.record.event_date.clone(),
            time: stored.record.event_start_time.clone(),
            location: stored.record.event_address.clone(),
            guest_count: stored.record.guest_count(),
        }
    }
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(coerce_count_value).unwrap_or(0))
}

fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(coerce_price_value).unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_saved_file_shape() {
        let value = json!({
            "clientName": "Maria Souza",
            "clientCpf": "12345678901",
            "clientRg": "12.345.678-9",
            "clientAddress": "Rua das Flores, 10",
            "eventDate": "2025-05-10",
            "eventAddress": "Salão Jardim",
            "eventStartTime": "20:30",
            "eventEndTime": "23:30",
            "adultCount": 40,
            "childCount": 5,
            "extraWaiters": 1,
            "adultPrice": 55,
            "childPrice": 27.5,
            "extraWaiterPrice": 120,
            "totalValue": 2457.5,
            "downPayment": 983,
            "signatureDate": "01/05/2025"
        });
        let record: ContractRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.client_document, "12345678901");
        assert_eq!(record.adult_count, 40);
        assert_eq!(record.child_price, 27.5);
        assert_eq!(record.signature_date.as_deref(), Some("01/05/2025"));
        assert_eq!(record.guest_count(), 45);
    }

    #[test]
    fn test_legacy_client_doc_key() {
        let record: ContractRecord = serde_json::from_value(json!({ "clientDoc": "12.345.678/0001-90" })).unwrap();
        assert_eq!(record.client_document, "12.345.678/0001-90");
    }

    #[test]
    fn test_document_field_name_matches_record_key() {
        let record = serde_json::to_value(ContractRecord::default()).unwrap();
        assert!(record.get("clientCpf").is_some());
        assert_eq!(serde_json::to_value(ContractField::ClientDocument).unwrap(), "clientCpf");
        let field: ContractField = serde_json::from_str("\"clientCpf\"").unwrap();
        assert_eq!(field, ContractField::ClientDocument);
        let legacy: ContractField = serde_json::from_str("\"clientDoc\"").unwrap();
        assert_eq!(legacy, ContractField::ClientDocument);
    }

    #[test]
    fn test_lenient_numeric_fields() {
        let record: ContractRecord = serde_json::from_value(json!({
            "adultCount": "abc",
            "childCount": null,
            "extraWaiters": -2,
            "adultPrice": "27,50",
            "childPrice": "x"
        }))
        .unwrap();
        assert_eq!(record.adult_count, 0);
        assert_eq!(record.child_count, 0);
        assert_eq!(record.extra_waiters, 0);
        assert_eq!(record.adult_price, 27.5);
        assert_eq!(record.child_price, 0.0);
        assert_eq!(record.extra_waiter_price, 0.0);
    }

    #[test]
    fn test_stored_record_flattens_and_round_trips() {
        let stored = StoredContractRecord::new(ContractRecord::default());
        let json = serde_json::to_value(&stored).unwrap();
        assert_eq!(json["id"], json!(stored.id));
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["adultCount"], json!(30));
        assert!(json.get("record").is_none());

        let back: StoredContractRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, stored);
    }

    #[test]
    fn test_stored_record_accepts_js_iso_timestamp() {
        let stored: StoredContractRecord = serde_json::from_value(json!({
            "id": "lq2k3j4abc",
            "createdAt": "2024-03-01T18:25:43.511Z",
            "clientName": "João"
        }))
        .unwrap();
        assert_eq!(stored.id, "lq2k3j4abc");
        assert_eq!(stored.created_at.to_rfc3339(), "2024-03-01T18:25:43.511+00:00");
    }

    #[test]
    fn test_update_from_form_input() {
        let mut record = ContractRecord::default();
        record.apply(ContractUpdate::from_form_input(ContractField::AdultCount, "45"));
        record.apply(ContractUpdate::from_form_input(ContractField::ChildPrice, "abc"));
        record.apply(ContractUpdate::from_form_input(ContractField::ClientName, "Ana"));
        record.apply(ContractUpdate::from_form_input(ContractField::SignatureDate, "  "));
        assert_eq!(record.adult_count, 45);
        assert_eq!(record.child_price, 0.0);
        assert_eq!(record.client_name, "Ana");
        assert_eq!(record.signature_date, None);
    }

    #[test]
    fn test_event_summary_from_stored() {
        let mut record = ContractRecord::default();
        record.client_name = "Festa da Ana".to_string();
        record.event_date = "2025-06-01".to_string();
        record.event_address = "Chácara Sol".to_string();
        record.adult_count = 20;
        record.child_count = 4;
        let stored = StoredContractRecord::new(record);
        let summary = EventSummary::from(&stored);
        assert_eq!(summary.title, "Festa da Ana");
        assert_eq!(summary.time, "20:30");
        assert_eq!(summary.guest_count, 24);
    }
}
