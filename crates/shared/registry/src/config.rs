use crate::error::{RegistryError, RegistryErrorExt};
use config::{Config, Environment, File, Map};
use rtfeat_domain::config::RegistryConfig;
use std::path::Path;
use tracing::info;

/// Prefix for environment overrides, e.g. `RTFEAT__DYNAMIC_CODE__ENGINE`.
pub const ENV_PREFIX: &str = "RTFEAT";
const ENV_SEPARATOR: &str = "__";

/// Loads the registry configuration from an optional file plus environment overrides.
///
/// Layers, lowest priority first:
/// 1. **Defaults**: [`RegistryConfig::default`] for anything left unset.
/// 2. **File**: when `path` is given the file must exist. The format follows its
///    extension (`rtfeat.toml`, `rtfeat.json`, ...).
/// 3. **Environment**: variables prefixed with `RTFEAT__`, nested with `__`
///    (e.g. `RTFEAT__DYNAMIC_CODE__ENABLED=false` maps to `dynamic_code.enabled`).
///
/// # Errors
/// Returns [`RegistryError::Config`] if the file is missing or the merged values
/// do not match [`RegistryConfig`].
///
/// # Example
/// ```rust
/// use rtfeat_registry::config::load_config;
///
/// let cfg = load_config(Some("config/rtfeat.toml")).unwrap_or_default();
/// let engine = cfg.dynamic_code.engine;
/// ```
pub fn load_config(path: Option<impl AsRef<Path>>) -> Result<RegistryConfig, RegistryError> {
    load_config_with_env(path, None)
}

/// Same as [`load_config`], but reads overrides from `env` instead of the process
/// environment when it is `Some`.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env(
    path: Option<impl AsRef<Path>>,
    env: Option<Map<String, String>>,
) -> Result<RegistryConfig, RegistryError> {
    let mut builder = Config::builder();

    if let Some(path) = path {
        let path = path.as_ref();
        info!("Loading registry config from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    }

    let builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR).source(env),
    );

    let config = builder
        .build()
        .context("Failed to build registry config")?
        .try_deserialize::<RegistryConfig>()
        .context("Failed to deserialize registry config")?;

    Ok(config)
}
