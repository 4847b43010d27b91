// Handlers for the ListContracts and ListEvents RPCs
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::RwLock;
use tokio_stream::wrappers::ReceiverStream;
use tonic::{Response, Status};

use super::helpers::{to_proto_event, to_stored_response};
use crate::data::brazilian_format::{format_date_long, parse_event_date};
use crate::data::contract_store::ContractRepository;
use crate::error::EngineError;
use crate::services::{ListContractsRequest, ListEventsRequest, ListEventsResponse, StoredContractResponse};

fn requested_date(raw: &str) -> Result<chrono::NaiveDate, EngineError> {
    parse_event_date(raw).ok_or_else(|| EngineError::ValidationError(format!("invalid event date '{}'", raw)))
}

pub async fn handle_list_contracts(
    req_payload: ListContractsRequest,
    repository: Arc<RwLock<ContractRepository>>,
) -> Result<Response<ReceiverStream<Result<StoredContractResponse, Status>>>, Status> {
    let filter_date = match req_payload.event_date.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(requested_date(raw)?),
    };

    let repo = repository.read().await;
    let contracts: Vec<_> = match filter_date {
        Some(date) => repo.contracts_on(date).into_iter().cloned().collect(),
        None => repo.list().to_vec(),
    };
    drop(repo);

    let (tx, rx) = mpsc::channel(16);
    tokio::spawn(async move {
        tracing::debug!(count = contracts.len(), ?filter_date, "Streaming contracts (handler).");
        for stored in &contracts {
            let item = to_stored_response(stored).map_err(Status::from);
            if let Err(e) = tx.send(item).await {
                tracing::error!(error = ?e, "Failed to send contract to stream (handler)");
                return;
            }
        }
    });

    Ok(Response::new(ReceiverStream::new(rx)))
}

pub async fn handle_list_events(
    req_payload: ListEventsRequest,
    repository: Arc<RwLock<ContractRepository>>,
) -> Result<Response<ListEventsResponse>, Status> {
    let date = requested_date(req_payload.event_date.trim())?;

    let repo = repository.read().await;
    let events = repo.events_on(date);
    drop(repo);

    Ok(Response::new(ListEventsResponse {
        date_label: format_date_long(date),
        events: events.into_iter().map(to_proto_event).collect(),
    }))
}
