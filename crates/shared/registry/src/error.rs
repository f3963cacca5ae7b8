use std::borrow::Cow;

/// Errors raised while configuring or installing a feature registry.
///
/// Queries never produce these; an unknown flag name is simply unsupported.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The layered configuration could not be built or deserialized.
    #[error("Registry config error{}: {source}", format_context(.context))]
    Config {
        #[source]
        source: config::ConfigError,
        context: Option<Cow<'static, str>>,
    },

    /// A process registry was already installed (or lazily built by a query).
    #[error("Feature registry already installed{}", format_context(.context))]
    AlreadyInstalled { context: Option<Cow<'static, str>> },
}

/// Attaches a human-readable context to a failed registry operation.
pub trait RegistryErrorExt<T> {
    /// # Errors
    /// Returns the original error, converted into [`RegistryError`], with `context` attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, RegistryError>;
}

impl<T> RegistryErrorExt<T> for Result<T, config::ConfigError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, RegistryError> {
        self.map_err(|source| RegistryError::Config { source, context: Some(context.into()) })
    }
}

impl From<config::ConfigError> for RegistryError {
    #[inline]
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

#[allow(clippy::ref_option)]
fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_rendered_in_message() {
        let err = RegistryError::AlreadyInstalled { context: None };
        assert_eq!(err.to_string(), "Feature registry already installed");
        let err = RegistryError::AlreadyInstalled { context: Some("installing from cli".into()) };
        assert_eq!(err.to_string(), "Feature registry already installed (installing from cli)");
    }

    #[test]
    fn config_errors_convert_with_context() {
        let raw: Result<(), config::ConfigError> =
            Err(config::ConfigError::Message("bad value".to_owned()));
        let err = raw.context("Failed to build config").unwrap_err();
        assert!(matches!(err, RegistryError::Config { context: Some(_), .. }));
        assert!(err.to_string().contains("bad value"));
        assert!(err.to_string().contains("(Failed to build config)"));
    }

    #[test]
    fn bare_config_errors_convert_without_context() {
        let err = RegistryError::from(config::ConfigError::Message("bad value".to_owned()));
        assert!(matches!(err, RegistryError::Config { context: None, .. }));
        assert_eq!(err.to_string(), "Registry config error: bad value");
    }
}
