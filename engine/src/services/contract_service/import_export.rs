// Handlers for the ImportContracts and ExportContracts RPCs
use std::sync::Arc;
use tokio::sync::RwLock;
use tonic::{Response, Status};

use crate::data::contract_store::ContractRepository;
use crate::error::EngineError;
use crate::services::{ExportContractsRequest, ExportContractsResponse, ImportContractsRequest, ImportContractsResponse};

pub const EXPORT_FILE_STEM: &str = "contratos_pizzas";

pub async fn handle_import_contracts(
    req_payload: ImportContractsRequest,
    repository: Arc<RwLock<ContractRepository>>,
) -> Result<Response<ImportContractsResponse>, Status> {
    let mut repo = repository.write().await;
    let imported = repo.import_json(&req_payload.contracts_json)?;
    Ok(Response::new(ImportContractsResponse {
        imported: u32::try_from(imported).unwrap_or(u32::MAX),
    }))
}

pub async fn handle_export_contracts(
    req_payload: ExportContractsRequest,
    repository: Arc<RwLock<ContractRepository>>,
) -> Result<Response<ExportContractsResponse>, Status> {
    let repo = repository.read().await;
    let (content, extension) = match req_payload.format.trim().to_lowercase().as_str() {
        "" | "json" => (repo.export_json()?, "json"),
        "csv" => (repo.export_csv()?, "csv"),
        other => {
            return Err(EngineError::ValidationError(format!(
                "unsupported export format '{}'. Use 'json' or 'csv'.",
                other
            ))
            .into())
        }
    };
    tracing::debug!(count = repo.len(), format = extension, "Contracts exported (handler)");

    Ok(Response::new(ExportContractsResponse {
        content,
        file_name: format!("{}.{}", EXPORT_FILE_STEM, extension),
    }))
}
