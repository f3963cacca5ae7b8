//! # Feature Registry
//!
//! A process-wide, read-only mapping from feature name to support status.
//!
//! The registry is built once at startup from compiled-in constants
//! ([`StaticFeatures`]) and a dynamic-code probe ([`probe`]), then never changes.
//! All queries take `&self`, so concurrent readers need no locking.
//!
//! * Unknown names are unsupported; lookups never fail.
//! * Names are matched exactly and case-sensitively.
//! * The probed flags `IsDynamicCodeSupported` and `IsDynamicCodeCompiled` are
//!   queryable by name and always agree with the corresponding accessors.
//!
//! ## Example
//!
//! ```rust
//! use rtfeat_registry::{DynamicCode, FeatureRegistry, StaticFeatures};
//!
//! let registry =
//!     FeatureRegistry::from_parts(StaticFeatures::standard(), DynamicCode::Interpreted);
//!
//! assert!(registry.is_supported("PortablePdb"));
//! assert!(registry.is_supported("IsDynamicCodeSupported"));
//! assert!(!registry.is_supported("IsDynamicCodeCompiled"));
//! assert!(!registry.is_supported("NonexistentFeatureXYZ"));
//! ```

pub mod config;
mod error;
mod global;
pub mod probe;

pub use crate::error::{RegistryError, RegistryErrorExt};
pub use crate::global::{global, install, is_initialized};
pub use rtfeat_domain::config::{DynamicCodeConfig, RegistryConfig};
pub use rtfeat_domain::{DynamicCode, ExecutionEngine, FeatureFlag, StaticFeature, StaticFeatures};

use fxhash::FxHashMap;
use rtfeat_domain::names;
use serde::Serialize;
use strum::{EnumCount, IntoEnumIterator};
use tracing::debug;

/// Immutable answer table for "is capability X supported in this process?".
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRegistry {
    static_features: StaticFeatures,
    dynamic_code: DynamicCode,
    /// Statics in declaration order, then the probes.
    flags: Vec<FeatureFlag>,
    #[serde(skip)]
    index: FxHashMap<&'static str, usize>,
}

impl FeatureRegistry {
    /// Builds a registry for a standard build, probing dynamic code per `config`.
    #[must_use]
    pub fn new(config: &RegistryConfig) -> Self {
        let dynamic_code = probe::probe_dynamic_code(&config.dynamic_code);
        Self::from_parts(StaticFeatures::standard(), dynamic_code)
    }

    /// Builds a registry from already-resolved parts.
    #[must_use]
    pub fn from_parts(static_features: StaticFeatures, dynamic_code: DynamicCode) -> Self {
        let mut flags = Vec::with_capacity(StaticFeature::COUNT + names::PROBED.len());
        flags.extend(
            StaticFeature::iter()
                .map(|f| FeatureFlag::fixed(f.name(), static_features.supports(f))),
        );
        flags.push(FeatureFlag::probed(
            names::IS_DYNAMIC_CODE_SUPPORTED,
            dynamic_code.is_supported(),
        ));
        flags.push(FeatureFlag::probed(
            names::IS_DYNAMIC_CODE_COMPILED,
            dynamic_code.is_compiled(),
        ));

        let index = flags.iter().enumerate().map(|(i, flag)| (flag.name, i)).collect();

        debug!(
            static_features = static_features.bits(),
            dynamic_code = %dynamic_code,
            "Feature registry built"
        );

        Self { static_features, dynamic_code, flags, index }
    }

    /// Returns `true` if `name` is a known, supported flag.
    ///
    /// Unknown names, including differently-cased known names, return `false`.
    #[must_use]
    pub fn is_supported(&self, name: &str) -> bool {
        self.flag(name).is_some_and(|flag| flag.is_supported)
    }

    /// Full descriptor for a known flag name.
    #[must_use]
    pub fn flag(&self, name: &str) -> Option<FeatureFlag> {
        self.index.get(name).map(|&i| self.flags[i])
    }

    /// Every known flag: statics first, in declaration order, then the probes.
    pub fn flags(&self) -> impl ExactSizeIterator<Item = &FeatureFlag> {
        self.flags.iter()
    }

    /// `true` if generated code can run, compiled or interpreted.
    #[must_use]
    pub const fn is_dynamic_code_supported(&self) -> bool {
        self.dynamic_code.is_supported()
    }

    /// `true` only if generated code is JIT-compiled. Implies
    /// [`Self::is_dynamic_code_supported`].
    #[must_use]
    pub const fn is_dynamic_code_compiled(&self) -> bool {
        self.dynamic_code.is_compiled()
    }

    #[must_use]
    pub const fn dynamic_code(&self) -> DynamicCode {
        self.dynamic_code
    }

    #[must_use]
    pub const fn static_features(&self) -> StaticFeatures {
        self.static_features
    }
}

impl Default for FeatureRegistry {
    fn default() -> Self {
        Self::new(&RegistryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_covers_every_flag_once() {
        let registry =
            FeatureRegistry::from_parts(StaticFeatures::standard(), DynamicCode::Compiled);
        assert_eq!(registry.flags().len(), StaticFeature::COUNT + 2);
        assert_eq!(registry.index.len(), registry.flags.len());
        for flag in registry.flags() {
            assert_eq!(registry.flag(flag.name), Some(*flag));
        }
    }

    #[test]
    fn partial_static_set_reports_missing_features() {
        let registry =
            FeatureRegistry::from_parts(StaticFeatures::PORTABLE_PDB, DynamicCode::Unsupported);
        assert!(registry.is_supported("PortablePdb"));
        assert!(!registry.is_supported("ByRefFields"));
        assert_eq!(registry.flag("ByRefFields"), Some(FeatureFlag::fixed("ByRefFields", false)));
    }

    #[test]
    fn probes_follow_dynamic_code_mode() {
        let registry =
            FeatureRegistry::from_parts(StaticFeatures::standard(), DynamicCode::Interpreted);
        assert!(registry.is_dynamic_code_supported());
        assert!(!registry.is_dynamic_code_compiled());
        assert_eq!(
            registry.flag(names::IS_DYNAMIC_CODE_SUPPORTED),
            Some(FeatureFlag::probed(names::IS_DYNAMIC_CODE_SUPPORTED, true))
        );
    }

    #[test]
    fn report_serializes_without_index() {
        let registry =
            FeatureRegistry::from_parts(StaticFeatures::empty(), DynamicCode::Unsupported);
        let value = serde_json::to_value(&registry).unwrap();
        assert_eq!(value["staticFeatures"], 0);
        assert_eq!(value["dynamicCode"], "unsupported");
        assert!(value.get("index").is_none());
        assert_eq!(value["flags"].as_array().map(Vec::len), Some(StaticFeature::COUNT + 2));
    }
}
