//! Canonical flag names. Lookups against these are case-sensitive.

pub const PORTABLE_PDB: &str = "PortablePdb";
pub const DEFAULT_IMPLEMENTATIONS_OF_INTERFACES: &str = "DefaultImplementationsOfInterfaces";
pub const COVARIANT_RETURNS_OF_CLASSES: &str = "CovariantReturnsOfClasses";
pub const BY_REF_FIELDS: &str = "ByRefFields";
pub const BY_REF_LIKE_GENERICS: &str = "ByRefLikeGenerics";
pub const UNMANAGED_SIGNATURE_CALLING_CONVENTION: &str = "UnmanagedSignatureCallingConvention";
pub const VIRTUAL_STATICS_IN_INTERFACES: &str = "VirtualStaticsInInterfaces";
pub const NUMERIC_INT_PTR: &str = "NumericIntPtr";

/// Probed at startup, never compiled in.
pub const IS_DYNAMIC_CODE_SUPPORTED: &str = "IsDynamicCodeSupported";
/// Probed at startup, never compiled in.
pub const IS_DYNAMIC_CODE_COMPILED: &str = "IsDynamicCodeCompiled";

/// Names of the runtime-computed flags, in report order.
pub const PROBED: [&str; 2] = [IS_DYNAMIC_CODE_SUPPORTED, IS_DYNAMIC_CODE_COMPILED];
