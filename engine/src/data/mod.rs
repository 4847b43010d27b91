// Formatting helpers and contract persistence
pub mod brazilian_format;
pub mod contract_store;
