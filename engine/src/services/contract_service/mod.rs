// engine/src/services/contract_service/mod.rs
// Hub of the contract service: the MyContractEngine struct, its trait impl,
// and the per-RPC handler modules it dispatches to.

use super::{
    AmountRequest, AmountWordsResponse, ApplyUpdateRequest, CalculateValuesRequest, CalculateValuesResponse,
    ContractEngine, ContractIdRequest, DeleteContractResponse, ExportContractsRequest, ExportContractsResponse,
    ImportContractsRequest, ImportContractsResponse, ListContractsRequest, ListEventsRequest, ListEventsResponse,
    RenderDocumentsRequest, RenderDocumentsResponse, SaveContractRequest, StoredContractResponse,
};
use crate::calculator::ValueCalculator;
use crate::data::contract_store::ContractRepository;
use crate::documents::CompanyProfile;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_stream::wrappers::ReceiverStream;
use tonic::{Request, Response, Status};

pub mod calculate_values;
pub mod get_contract;
pub mod helpers;
pub mod import_export;
pub mod list_contracts;
pub mod number_to_words;
pub mod render_documents;
pub mod save_contract;

pub struct MyContractEngine {
    repository: Arc<RwLock<ContractRepository>>,
    calculator: ValueCalculator,
    company: CompanyProfile,
}

impl MyContractEngine {
    pub fn new(repository: Arc<RwLock<ContractRepository>>, calculator: ValueCalculator, company: CompanyProfile) -> Self {
        MyContractEngine { repository, calculator, company }
    }
}

#[tonic::async_trait]
impl ContractEngine for MyContractEngine {
    async fn calculate_values(
        &self,
        request: Request<CalculateValuesRequest>,
    ) -> Result<Response<CalculateValuesResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(
            end_time_mode = ?req_payload.end_time_mode,
            "Received CalculateValuesRequest in main service, dispatching to handler."
        );
        calculate_values::handle_calculate_values(req_payload, self.calculator).await
    }

    async fn apply_update(&self, request: Request<ApplyUpdateRequest>) -> Result<Response<CalculateValuesResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(
            field = %req_payload.field,
            "Received ApplyUpdateRequest in main service, dispatching to handler."
        );
        calculate_values::handle_apply_update(req_payload, self.calculator).await
    }

    async fn number_to_words(&self, request: Request<AmountRequest>) -> Result<Response<AmountWordsResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(amount = req_payload.amount, "Received AmountRequest in main service, dispatching to handler.");
        number_to_words::handle_number_to_words(req_payload).await
    }

    async fn save_contract(&self, request: Request<SaveContractRequest>) -> Result<Response<StoredContractResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!("Received SaveContractRequest in main service, dispatching to handler.");
        save_contract::handle_save_contract(req_payload, self.calculator, self.repository.clone()).await
    }

    type ListContractsStream = ReceiverStream<Result<StoredContractResponse, Status>>;
    async fn list_contracts(
        &self,
        request: Request<ListContractsRequest>,
    ) -> Result<Response<Self::ListContractsStream>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(
            event_date = ?req_payload.event_date,
            "Received ListContractsRequest in main service, dispatching to handler."
        );
        list_contracts::handle_list_contracts(req_payload, self.repository.clone()).await
    }

    async fn get_contract(&self, request: Request<ContractIdRequest>) -> Result<Response<StoredContractResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(id = %req_payload.id, "Received GetContractRequest in main service, dispatching to handler.");
        get_contract::handle_get_contract(req_payload, self.repository.clone()).await
    }

    async fn list_events(&self, request: Request<ListEventsRequest>) -> Result<Response<ListEventsResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(
            event_date = %req_payload.event_date,
            "Received ListEventsRequest in main service, dispatching to handler."
        );
        list_contracts::handle_list_events(req_payload, self.repository.clone()).await
    }

    async fn delete_contract(&self, request: Request<ContractIdRequest>) -> Result<Response<DeleteContractResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(id = %req_payload.id, "Received DeleteContractRequest in main service, dispatching to handler.");
        get_contract::handle_delete_contract(req_payload, self.repository.clone()).await
    }

    async fn render_documents(
        &self,
        request: Request<RenderDocumentsRequest>,
    ) -> Result<Response<RenderDocumentsResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(
            receipt_number = req_payload.receipt_number,
            issue_date = %req_payload.issue_date,
            "Received RenderDocumentsRequest in main service, dispatching to handler."
        );
        render_documents::handle_render_documents(req_payload, self.calculator, &self.company).await
    }

    async fn import_contracts(
        &self,
        request: Request<ImportContractsRequest>,
    ) -> Result<Response<ImportContractsResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(
            payload_bytes = req_payload.contracts_json.len(),
            "Received ImportContractsRequest in main service, dispatching to handler."
        );
        import_export::handle_import_contracts(req_payload, self.repository.clone()).await
    }

    async fn export_contracts(
        &self,
        request: Request<ExportContractsRequest>,
    ) -> Result<Response<ExportContractsResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(format = %req_payload.format, "Received ExportContractsRequest in main service, dispatching to handler.");
        import_export::handle_export_contracts(req_payload, self.repository.clone()).await
    }
}
