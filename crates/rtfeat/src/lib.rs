//! Facade crate for runtime feature queries.
//! Re-exports the domain and registry crates and answers queries against the
//! process-wide registry. Keep this crate thin: it composes, it does not probe.
//!
//! ## Usage
//! - Call the free functions below; the registry is built from `RTFEAT__*`
//!   environment overrides on first use.
//! - To pin a specific configuration, call [`registry::install`] before the first query.
//!
//! ```rust
//! assert!(rtfeat::is_supported("PortablePdb"));
//! assert!(!rtfeat::is_supported("NonexistentFeatureXYZ"));
//! assert!(!rtfeat::is_dynamic_code_compiled() || rtfeat::is_dynamic_code_supported());
//! ```

pub use rtfeat_domain as domain;
pub use rtfeat_domain::names;
pub use rtfeat_registry as registry;
pub use rtfeat_registry::{DynamicCode, FeatureFlag, FeatureRegistry, StaticFeature};

/// Returns `true` if `name` is a known, supported feature in this process.
///
/// Never fails: unknown names are unsupported.
#[must_use]
pub fn is_supported(name: &str) -> bool {
    registry::global().is_supported(name)
}

/// `true` if this process can execute generated code, compiled or interpreted.
#[must_use]
pub fn is_dynamic_code_supported() -> bool {
    registry::global().is_dynamic_code_supported()
}

/// `true` only if generated code is JIT-compiled rather than interpreted.
#[must_use]
pub fn is_dynamic_code_compiled() -> bool {
    registry::global().is_dynamic_code_compiled()
}
