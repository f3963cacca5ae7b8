use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How (and whether) this process can execute code generated at runtime.
///
/// The two derived booleans are projections of this one value, so
/// "compiled implies supported" cannot be violated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DynamicCode {
    /// No engine is available or dynamic code was switched off.
    #[default]
    Unsupported,
    /// Generated code runs on the interpreter.
    Interpreted,
    /// Generated code is JIT-compiled to native code.
    Compiled,
}

impl DynamicCode {
    #[must_use]
    pub const fn is_supported(self) -> bool {
        !matches!(self, Self::Unsupported)
    }

    #[must_use]
    pub const fn is_compiled(self) -> bool {
        matches!(self, Self::Compiled)
    }
}

/// Requested execution engine for dynamic code.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExecutionEngine {
    /// Pick the JIT when the platform allows it, otherwise interpret.
    #[default]
    Auto,
    Jit,
    Interpreter,
    /// Never execute dynamic code.
    None,
}
