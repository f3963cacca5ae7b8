//! # Domain Models
//!
//! Pure feature-flag types with minimal dependencies (`serde`, `bitflags`, `strum`).
//! Keep it lean: no I/O, probing, or global state. Those live in `rtfeat-registry`.

pub mod config;
pub mod dynamic;
pub mod features;
pub mod names;

pub use dynamic::{DynamicCode, ExecutionEngine};
pub use features::{FeatureFlag, StaticFeature, StaticFeatures};
