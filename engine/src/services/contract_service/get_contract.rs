// Handlers for the GetContract and DeleteContract RPCs
use std::sync::Arc;
use tokio::sync::RwLock;
use tonic::{Response, Status};

use super::helpers::to_stored_response;
use crate::data::contract_store::ContractRepository;
use crate::error::EngineError;
use crate::services::{ContractIdRequest, DeleteContractResponse, StoredContractResponse};

pub async fn handle_get_contract(
    req_payload: ContractIdRequest,
    repository: Arc<RwLock<ContractRepository>>,
) -> Result<Response<StoredContractResponse>, Status> {
    let repo = repository.read().await;
    let stored = repo
        .get(&req_payload.id)
        .cloned()
        .ok_or_else(|| EngineError::ContractNotFound(req_payload.id.clone()))?;
    drop(repo);

    Ok(Response::new(to_stored_response(&stored)?))
}

pub async fn handle_delete_contract(
    req_payload: ContractIdRequest,
    repository: Arc<RwLock<ContractRepository>>,
) -> Result<Response<DeleteContractResponse>, Status> {
    let mut repo = repository.write().await;
    let deleted = repo.delete(&req_payload.id)?;
    Ok(Response::new(DeleteContractResponse { deleted }))
}
