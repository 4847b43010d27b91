// Engine main entry point
use engine::calculator::ValueCalculator;
use engine::config::EngineSettings;
use engine::data::contract_store::{ContractRepository, JsonFilePersistence};
use engine::services::contract_service::MyContractEngine;
use engine::services::ContractEngineServer;
use std::sync::Arc;
use tokio::sync::RwLock;
use tonic::transport::Server;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    info!("Starting contract engine...");

    let settings = EngineSettings::load()?;
    let addr = settings.socket_addr()?;
    info!(
        contracts_file = %settings.contracts_file.display(),
        end_time_mode = ?settings.end_time_mode,
        "Engine will listen on {}",
        addr
    );

    let repository = ContractRepository::open(Box::new(JsonFilePersistence::new(settings.contracts_file.clone())))?;
    info!(count = repository.len(), "Saved contracts loaded");

    let contract_engine_service = MyContractEngine::new(
        Arc::new(RwLock::new(repository)),
        ValueCalculator::new(settings.end_time_mode),
        settings.company.clone(),
    );

    Server::builder()
        .add_service(ContractEngineServer::new(contract_engine_service))
        .serve(addr)
        .await?;

    Ok(())
}
