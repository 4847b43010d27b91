// gRPC surface of the contract engine
pub mod generated {
    tonic::include_proto!("contracts");
}

pub mod contract_service;

pub use generated::contract_engine_server::{ContractEngine, ContractEngineServer};
pub use generated::{
    AmountRequest, AmountWordsResponse, ApplyUpdateRequest, CalculateValuesRequest, CalculateValuesResponse,
    ContractIdRequest, DeleteContractResponse, EventSummary as ProtoEventSummary, ExportContractsRequest,
    ExportContractsResponse, ImportContractsRequest, ImportContractsResponse, ListContractsRequest,
    ListEventsRequest, ListEventsResponse, RenderDocumentsRequest, RenderDocumentsResponse, SaveContractRequest,
    StoredContractResponse,
};
