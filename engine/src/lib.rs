// Engine library root
// Contract calculation, amount spelling, storage and the gRPC surface over them.

pub mod calculator;
pub mod config;
pub mod data;
pub mod documents;
pub mod error;
pub mod services;
pub mod speller;

pub use calculator::{calculate_values, ValueCalculator};
pub use error::EngineError;
pub use speller::number_to_words;
