use crate::dynamic::ExecutionEngine;
use serde::Deserialize;

/// Startup configuration consumed when a registry is built.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub dynamic_code: DynamicCodeConfig,
}

/// Dynamic code switches.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DynamicCodeConfig {
    /// Host-level kill switch. `false` forces dynamic code off.
    pub enabled: bool,
    pub engine: ExecutionEngine,
}

impl Default for DynamicCodeConfig {
    fn default() -> Self {
        Self { enabled: true, engine: ExecutionEngine::Auto }
    }
}
