//! Processing configuration.
//!
//! A [`Configuration`] is supplied once when a
//! [`Registry`](crate::registry::Registry) is constructed and is read-only
//! afterwards. It can be built in code or loaded from a YAML file whose keys
//! are all optional:
//!
//! ```yaml
//! solver_backend: why3
//! timeout_seconds: 60
//! verbose_logging: false
//! generate_certificates: true
//! ```

use std::num::NonZeroU32;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::schema::Tag;

/// Solver backend used when none is configured.
pub const DEFAULT_SOLVER_BACKEND: &str = "why3";

/// Solver timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECONDS: NonZeroU32 = match NonZeroU32::new(30) {
    Some(seconds) => seconds,
    None => NonZeroU32::MIN,
};

/// Errors that can occur when loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration '{path}': {source}")]
    Read {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// YAML deserialization failed (malformed YAML or schema mismatch).
    #[error("YAML deserialization failed: {0}")]
    Deserialize(String),
}

/// Process-wide tunables forwarded to the solver projection.
///
/// `timeout_seconds` is descriptive metadata for an external solver; it is
/// never enforced in-process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Configuration {
    solver_backend: Tag,
    timeout_seconds: NonZeroU32,
    verbose_logging: bool,
    generate_certificates: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            solver_backend: Tag::from_static(DEFAULT_SOLVER_BACKEND),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            verbose_logging: true,
            generate_certificates: true,
        }
    }
}

impl Configuration {
    /// Parses a configuration from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Deserialize`] for malformed YAML, unknown
    /// keys, a zero timeout, or a blank solver backend.
    ///
    /// # Examples
    ///
    ///     use theoremsite::Configuration;
    ///
    ///     let config = Configuration::from_yaml_str("timeout_seconds: 60\n").unwrap();
    ///     assert_eq!(config.timeout_seconds().get(), 60);
    ///     assert_eq!(config.solver_backend(), "why3");
    pub fn from_yaml_str(input: &str) -> Result<Self, ConfigError> {
        serde_saphyr::from_str(input).map_err(|error| ConfigError::Deserialize(error.to_string()))
    }

    /// Reads and parses a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, otherwise
    /// any error from [`Configuration::from_yaml_str`].
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let input = crate::fs::read_utf8(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_yaml_str(&input)
    }

    /// Replaces the solver backend name.
    #[must_use]
    pub fn with_solver_backend(mut self, solver_backend: Tag) -> Self {
        self.solver_backend = solver_backend;
        self
    }

    /// Replaces the descriptive solver timeout.
    #[must_use]
    pub fn with_timeout_seconds(mut self, timeout_seconds: NonZeroU32) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Enables or disables debug-level logging.
    #[must_use]
    pub fn with_verbose_logging(mut self, verbose_logging: bool) -> Self {
        self.verbose_logging = verbose_logging;
        self
    }

    /// Enables or disables certificate generation in the solver projection.
    #[must_use]
    pub fn with_generate_certificates(mut self, generate_certificates: bool) -> Self {
        self.generate_certificates = generate_certificates;
        self
    }

    /// Name of the external solver backend.
    #[must_use]
    pub const fn solver_backend(&self) -> &Tag {
        &self.solver_backend
    }

    /// Per-goal timeout forwarded to the external solver.
    #[must_use]
    pub const fn timeout_seconds(&self) -> NonZeroU32 {
        self.timeout_seconds
    }

    /// Whether debug-level logging is requested.
    #[must_use]
    pub const fn verbose_logging(&self) -> bool {
        self.verbose_logging
    }

    /// Whether the external solver should produce certificates.
    #[must_use]
    pub const fn generate_certificates(&self) -> bool {
        self.generate_certificates
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Configuration::default();
        assert_eq!(config.solver_backend(), &Tag::from_static("why3"));
        assert_eq!(config.timeout_seconds().get(), 30);
        assert!(config.verbose_logging());
        assert!(config.generate_certificates());
    }

    #[test]
    fn yaml_overrides_selected_keys() {
        let yaml = "solver_backend: z3\ngenerate_certificates: false\n";
        let config = Configuration::from_yaml_str(yaml).expect("should parse");
        assert_eq!(config.solver_backend().as_str(), "z3");
        assert_eq!(config.timeout_seconds().get(), 30);
        assert!(!config.generate_certificates());
    }

    #[rstest]
    #[case::zero_timeout("timeout_seconds: 0\n")]
    #[case::blank_backend("solver_backend: '  '\n")]
    #[case::unknown_key("solver: z3\n")]
    #[case::wrong_type("verbose_logging: [true]\n")]
    fn invalid_yaml_is_rejected(#[case] yaml: &str) {
        let result = Configuration::from_yaml_str(yaml);
        assert!(
            matches!(result, Err(ConfigError::Deserialize(_))),
            "expected rejection, got: {result:?}"
        );
    }

    #[test]
    fn builder_replaces_fields() {
        let timeout = NonZeroU32::new(5).expect("non-zero");
        let config = Configuration::default()
            .with_solver_backend(Tag::new("cvc5").expect("tag"))
            .with_timeout_seconds(timeout)
            .with_verbose_logging(false)
            .with_generate_certificates(false);
        assert_eq!(config.solver_backend().as_str(), "cvc5");
        assert_eq!(config.timeout_seconds(), timeout);
        assert!(!config.verbose_logging());
        assert!(!config.generate_certificates());
    }

    #[test]
    fn serialized_yaml_parses_back_unchanged() {
        let config = Configuration::default()
            .with_solver_backend(Tag::new("z3").expect("tag"))
            .with_timeout_seconds(NonZeroU32::new(90).expect("non-zero"))
            .with_verbose_logging(false);
        let yaml = serde_saphyr::to_string(&config).expect("should serialize");
        assert!(yaml.contains("timeout_seconds: 90"), "got: {yaml}");
        let reparsed = Configuration::from_yaml_str(&yaml).expect("should reparse");
        assert_eq!(reparsed, config);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let dir = Utf8Path::from_path(temp.path()).expect("UTF-8 temp path");
        let result = Configuration::load(&dir.join("absent.yaml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
