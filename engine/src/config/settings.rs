// Engine settings, loaded from an optional JSON file and environment variables
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::calculator::EndTimeMode;
use crate::documents::CompanyProfile;
use crate::error::EngineError;

pub const CONFIG_PATH_VAR: &str = "CONTRACT_ENGINE_CONFIG";
pub const HOST_VAR: &str = "CONTRACT_ENGINE_HOST";
pub const PORT_VAR: &str = "CONTRACT_ENGINE_PORT";
pub const STORE_VAR: &str = "CONTRACT_ENGINE_STORE";
pub const END_TIME_VAR: &str = "CONTRACT_ENGINE_END_TIME";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineSettings {
    pub host: String,
    pub port: u16,
    /// JSON array holding the saved contracts.
    pub contracts_file: PathBuf,
    pub end_time_mode: EndTimeMode,
    pub company: CompanyProfile,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            host: "127.0.0.1".to_string(),
            port: 50051,
            contracts_file: PathBuf::from("contratos_pizzas.json"),
            end_time_mode: EndTimeMode::DeriveFromStart,
            company: CompanyProfile::default(),
        }
    }
}

impl EngineSettings {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        serde_json::from_str(json).map_err(|e| EngineError::ConfigError(format!("invalid settings JSON: {}", e)))
    }

    /// Reads the file named by `CONTRACT_ENGINE_CONFIG` (defaults otherwise),
    /// then applies the `CONTRACT_ENGINE_*` environment overrides.
    pub fn load() -> Result<Self, EngineError> {
        let settings = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| EngineError::ConfigError(format!("cannot read settings file '{}': {}", path, e)))?;
                tracing::info!(path = %path, "Loading engine settings file");
                Self::from_json(&content)?
            }
            Err(_) => EngineSettings::default(),
        };
        settings.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, EngineError> {
        if let Some(host) = lookup(HOST_VAR) {
            self.host = host;
        }
        if let Some(port) = lookup(PORT_VAR) {
            self.port = port
                .trim()
                .parse()
                .map_err(|e| EngineError::ConfigError(format!("invalid {} '{}': {}", PORT_VAR, port, e)))?;
        }
        if let Some(store) = lookup(STORE_VAR) {
            self.contracts_file = PathBuf::from(store);
        }
        if let Some(mode) = lookup(END_TIME_VAR) {
            self.end_time_mode = match mode.trim() {
                "keep" => EndTimeMode::Keep,
                "derive_from_start" => EndTimeMode::DeriveFromStart,
                other => {
                    return Err(EngineError::ConfigError(format!(
                        "invalid {} '{}' (expected 'keep' or 'derive_from_start')",
                        END_TIME_VAR, other
                    )))
                }
            };
        }
        Ok(self)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, EngineError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| EngineError::ConfigError(format!("invalid listen address '{}:{}': {}", self.host, self.port, e)))
    }
}
