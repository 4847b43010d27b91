// Saved contracts: an owned repository over a pluggable persistence port
use chrono::NaiveDate;
use csv::WriterBuilder;
use shared::models::{ContractRecord, EventSummary, StoredContractRecord};
use std::fs;
use std::path::{Path, PathBuf};

use super::brazilian_format;
use crate::error::EngineError;

/// Where the contract list lives. The list is always read and written whole.
pub trait ContractPersistence: Send + Sync {
    fn load_all(&self) -> Result<Vec<StoredContractRecord>, EngineError>;
    fn save_all(&mut self, contracts: &[StoredContractRecord]) -> Result<(), EngineError>;
}

/// Parses a JSON array of stored contracts. Anything other than an array is rejected.
pub fn parse_contracts_json(json: &str) -> Result<Vec<StoredContractRecord>, EngineError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(EngineError::ImportFormatError("expected a JSON array of contracts".to_string()));
    }
    Ok(serde_json::from_value(value)?)
}

/// Contracts kept as a pretty-printed JSON array in a single file.
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFilePersistence { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContractPersistence for JsonFilePersistence {
    fn load_all(&self) -> Result<Vec<StoredContractRecord>, EngineError> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "Contracts file not found, starting with an empty list");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        parse_contracts_json(&content)
    }

    fn save_all(&mut self, contracts: &[StoredContractRecord]) -> Result<(), EngineError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(contracts)?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), count = contracts.len(), "Contracts written to disk");
        Ok(())
    }
}

/// Volatile persistence, for tests and one-off sessions.
#[derive(Default)]
pub struct InMemoryPersistence {
    contracts: Vec<StoredContractRecord>,
}

impl InMemoryPersistence {
    pub fn new(contracts: Vec<StoredContractRecord>) -> Self {
        InMemoryPersistence { contracts }
    }
}

impl ContractPersistence for InMemoryPersistence {
    fn load_all(&self) -> Result<Vec<StoredContractRecord>, EngineError> {
        Ok(self.contracts.clone())
    }

    fn save_all(&mut self, contracts: &[StoredContractRecord]) -> Result<(), EngineError> {
        self.contracts = contracts.to_vec();
        Ok(())
    }
}

pub struct ContractRepository {
    persistence: Box<dyn ContractPersistence>,
    // Newest first
    contracts: Vec<StoredContractRecord>,
}

impl ContractRepository {
    pub fn open(persistence: Box<dyn ContractPersistence>) -> Result<Self, EngineError> {
        let contracts = persistence.load_all()?;
        tracing::info!(count = contracts.len(), "Contracts loaded");
        Ok(ContractRepository { persistence, contracts })
    }

    pub fn in_memory() -> Self {
        ContractRepository {
            persistence: Box::new(InMemoryPersistence::default()),
            contracts: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    pub fn list(&self) -> &[StoredContractRecord] {
        &self.contracts
    }

    pub fn get(&self, id: &str) -> Option<&StoredContractRecord> {
        self.contracts.iter().find(|c| c.id == id)
    }

    /// Stores a completed record at the head of the list. A record needs at
    /// least the client name and the event date.
    pub fn save(&mut self, record: ContractRecord) -> Result<StoredContractRecord, EngineError> {
        if record.client_name.trim().is_empty() || record.event_date.trim().is_empty() {
            return Err(EngineError::ValidationError(
                "client name and event date are required to save a contract".to_string(),
            ));
        }

        let stored = StoredContractRecord::new(record);
        self.contracts.insert(0, stored.clone());
        if let Err(e) = self.persistence.save_all(&self.contracts) {
            self.contracts.remove(0);
            return Err(e);
        }

        tracing::info!(id = %stored.id, client = %stored.record.client_name, "Contract saved");
        Ok(stored)
    }

    /// Returns false when no contract has the given id.
    pub fn delete(&mut self, id: &str) -> Result<bool, EngineError> {
        let Some(pos) = self.contracts.iter().position(|c| c.id == id) else {
            tracing::warn!(id = %id, "Delete requested for unknown contract");
            return Ok(false);
        };

        let removed = self.contracts.remove(pos);
        if let Err(e) = self.persistence.save_all(&self.contracts) {
            self.contracts.insert(pos, removed);
            return Err(e);
        }

        tracing::info!(id = %id, "Contract deleted");
        Ok(true)
    }

    /// Replaces every stored contract with the ones in `json`.
    pub fn import_json(&mut self, json: &str) -> Result<usize, EngineError> {
        let imported = parse_contracts_json(json)?;
        self.persistence.save_all(&imported)?;
        self.contracts = imported;
        tracing::info!(count = self.contracts.len(), "Contracts imported");
        Ok(self.contracts.len())
    }

    pub fn export_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string_pretty(&self.contracts)?)
    }

    /// History table as ';'-separated CSV.
    pub fn export_csv(&self) -> Result<String, EngineError> {
        let mut writer = WriterBuilder::new().delimiter(b';').from_writer(Vec::new());
        writer.write_record(["Data", "Cliente", "Data do Evento", "Valor Total", "Convidados"])?;
        for contract in &self.contracts {
            writer.write_record([
                contract.created_at.format("%d/%m/%Y %H:%M").to_string(),
                contract.record.client_name.clone(),
                brazilian_format::format_date_br(&contract.record.event_date),
                brazilian_format::format_currency(contract.record.total_value),
                contract.record.guest_count().to_string(),
            ])?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| EngineError::StorageError(format!("Failed to flush CSV export: {}", e)))?;
        String::from_utf8(bytes).map_err(|e| EngineError::StorageError(format!("CSV export is not UTF-8: {}", e)))
    }

    pub fn contracts_on(&self, date: NaiveDate) -> Vec<&StoredContractRecord> {
        self.contracts
            .iter()
            .filter(|c| brazilian_format::parse_event_date(&c.record.event_date) == Some(date))
            .collect()
    }

    /// Calendar entries for the events held on `date`.
    pub fn events_on(&self, date: NaiveDate) -> Vec<EventSummary> {
        self.contracts_on(date).into_iter().map(EventSummary::from).collect()
    }
}
