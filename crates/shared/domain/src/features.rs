use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Statically declared runtime capabilities.
///
/// Each variant serializes to its exact flag name (see [`crate::names`]).
/// Use [`strum::IntoEnumIterator::iter`] to enumerate them; the order is
/// declaration order and is stable.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum StaticFeature {
    /// Portable PDB debug symbols.
    PortablePdb,
    /// Default interface method implementations.
    DefaultImplementationsOfInterfaces,
    /// Covariant return types on overridden class methods.
    CovariantReturnsOfClasses,
    /// By-reference fields in by-ref-like types.
    ByRefFields,
    /// By-ref-like types as generic arguments.
    ByRefLikeGenerics,
    /// Unmanaged calling conventions in function pointer signatures.
    UnmanagedSignatureCallingConvention,
    /// Static virtual members in interfaces.
    VirtualStaticsInInterfaces,
    /// Native-sized integers as numeric types.
    NumericIntPtr,
}

impl StaticFeature {
    /// The exact, case-sensitive flag name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Parses an exact flag name. Unknown or differently-cased names yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }
}

bitflags! {
    /// A set of static features compiled into a build.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct StaticFeatures: u32 {
        const PORTABLE_PDB = 1 << 0;
        const DEFAULT_IMPLEMENTATIONS_OF_INTERFACES = 1 << 1;
        const COVARIANT_RETURNS_OF_CLASSES = 1 << 2;
        const BY_REF_FIELDS = 1 << 3;
        const BY_REF_LIKE_GENERICS = 1 << 4;
        const UNMANAGED_SIGNATURE_CALLING_CONVENTION = 1 << 5;
        const VIRTUAL_STATICS_IN_INTERFACES = 1 << 6;
        const NUMERIC_INT_PTR = 1 << 7;
    }
}

impl StaticFeatures {
    /// Every static feature; what a standard build advertises.
    #[must_use]
    pub const fn standard() -> Self {
        Self::all()
    }

    #[must_use]
    pub fn supports(self, feature: StaticFeature) -> bool {
        self.contains(feature.into())
    }
}

impl From<StaticFeature> for StaticFeatures {
    fn from(feature: StaticFeature) -> Self {
        match feature {
            StaticFeature::PortablePdb => Self::PORTABLE_PDB,
            StaticFeature::DefaultImplementationsOfInterfaces => {
                Self::DEFAULT_IMPLEMENTATIONS_OF_INTERFACES
            },
            StaticFeature::CovariantReturnsOfClasses => Self::COVARIANT_RETURNS_OF_CLASSES,
            StaticFeature::ByRefFields => Self::BY_REF_FIELDS,
            StaticFeature::ByRefLikeGenerics => Self::BY_REF_LIKE_GENERICS,
            StaticFeature::UnmanagedSignatureCallingConvention => {
                Self::UNMANAGED_SIGNATURE_CALLING_CONVENTION
            },
            StaticFeature::VirtualStaticsInInterfaces => Self::VIRTUAL_STATICS_IN_INTERFACES,
            StaticFeature::NumericIntPtr => Self::NUMERIC_INT_PTR,
        }
    }
}

impl From<u32> for StaticFeatures {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl FromIterator<StaticFeature> for StaticFeatures {
    fn from_iter<I: IntoIterator<Item = StaticFeature>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |set, feature| set | feature.into())
    }
}

impl Serialize for StaticFeatures {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for StaticFeatures {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}

/// A named boolean capability as reported by a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlag {
    pub name: &'static str,
    pub is_supported: bool,
    /// `true` for compiled-in constants, `false` for startup probes.
    pub is_static: bool,
}

impl FeatureFlag {
    #[must_use]
    pub const fn fixed(name: &'static str, is_supported: bool) -> Self {
        Self { name, is_supported, is_static: true }
    }

    #[must_use]
    pub const fn probed(name: &'static str, is_supported: bool) -> Self {
        Self { name, is_supported, is_static: false }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        if self.is_static { "static" } else { "probed" }
    }
}
