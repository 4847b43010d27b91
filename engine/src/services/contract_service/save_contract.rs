// Handler for the SaveContract RPC
use std::sync::Arc;
use tokio::sync::RwLock;
use tonic::{Response, Status};

use super::helpers::{parse_record_json, to_stored_response};
use crate::calculator::ValueCalculator;
use crate::data::contract_store::ContractRepository;
use crate::services::{SaveContractRequest, StoredContractResponse};

pub async fn handle_save_contract(
    req_payload: SaveContractRequest,
    calculator: ValueCalculator,
    repository: Arc<RwLock<ContractRepository>>,
) -> Result<Response<StoredContractResponse>, Status> {
    let record = parse_record_json(&req_payload.record_json)?;
    // Derived fields are never trusted from the client
    let calculated = calculator.calculate(&record)?;

    let mut repo = repository.write().await;
    let stored = repo.save(calculated)?;
    drop(repo);

    Ok(Response::new(to_stored_response(&stored)?))
}
