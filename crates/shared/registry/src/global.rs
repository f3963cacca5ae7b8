use crate::FeatureRegistry;
use crate::config::load_config;
use crate::error::RegistryError;
use rtfeat_domain::config::RegistryConfig;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{info, warn};

static REGISTRY: OnceLock<FeatureRegistry> = OnceLock::new();

/// Installs `registry` as the process-wide registry.
///
/// Must run before the first query through [`global`]; afterwards the
/// registry is fixed for the lifetime of the process.
///
/// # Errors
/// Returns [`RegistryError::AlreadyInstalled`] if a registry was installed
/// earlier or already built lazily by [`global`]. The rejected registry is dropped.
pub fn install(registry: FeatureRegistry) -> Result<&'static FeatureRegistry, RegistryError> {
    let mut fresh = false;
    let installed = REGISTRY.get_or_init(|| {
        fresh = true;
        registry
    });

    if !fresh {
        return Err(RegistryError::AlreadyInstalled { context: None });
    }

    info!(dynamic_code = %installed.dynamic_code(), "Feature registry installed");
    Ok(installed)
}

/// Returns the process-wide registry, building it from the environment on first use.
///
/// A malformed environment never fails a query: it is logged and the
/// defaults are used instead.
pub fn global() -> &'static FeatureRegistry {
    REGISTRY.get_or_init(|| {
        let config = load_config(None::<&Path>).unwrap_or_else(|e| {
            warn!(error = %e, "Invalid registry environment, using defaults");
            RegistryConfig::default()
        });
        FeatureRegistry::new(&config)
    })
}

/// Whether a registry has been installed or lazily built.
#[must_use]
pub fn is_initialized() -> bool {
    REGISTRY.get().is_some()
}
