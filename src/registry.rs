//! Theorem registry and site generation.
//!
//! A [`Registry`] is constructed explicitly with a [`Configuration`] and
//! owns every loaded theorem, keyed by id in load order. Each entry moves
//! from [`TheoremState::Unvalidated`] to a terminal `Valid` or `Invalid`
//! state the first time it is validated; reloading the id resets it.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs_utf8::Dir;
use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::Configuration;
use crate::render::{
    INDEX_FILE_NAME, RenderError, document_file_name, render_index_document,
    render_theorem_document,
};
use crate::schema::{
    SchemaError, Theorem, Validation, ValidationIssue, export_theorem_file, load_theorem_file,
    load_theorem_str, parse_theorem, validate_theorem,
};
use crate::solver::{SolverConfig, project};

/// Errors returned by registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No theorem with the requested id is registered.
    #[error("theorem '{theorem_id}' is not registered")]
    NotFound {
        /// The requested id.
        theorem_id: String,
    },

    /// A theorem directory could not be listed.
    #[error("theorem directory '{path}' cannot be read: {source}")]
    Directory {
        /// The directory being listed.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Loading or exporting a theorem document failed.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Validation state of a registered theorem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TheoremState {
    /// Loaded but not yet validated.
    Unvalidated,
    /// Validated without issues.
    Valid,
    /// Validated with the listed issues.
    Invalid(Vec<ValidationIssue>),
}

/// A theorem skipped during site generation because it failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTheorem {
    /// Id of the skipped theorem.
    pub theorem_id: String,
    /// Every violated rule.
    pub issues: Vec<ValidationIssue>,
}

/// Outcome of [`Registry::generate_site`].
#[derive(Debug, Default)]
pub struct SiteReport {
    /// Ids whose documents were written, in registry order.
    pub written: Vec<String>,
    /// Theorems skipped because they failed validation.
    pub invalid: Vec<InvalidTheorem>,
    /// Documents that could not be rendered or written.
    pub failed: Vec<RenderError>,
}

impl SiteReport {
    /// Returns `true` if every registered theorem was rendered.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.invalid.is_empty() && self.failed.is_empty()
    }
}

/// Result of loading one file during [`Registry::load_dir`].
#[derive(Debug)]
pub struct LoadOutcome {
    /// The file that was loaded.
    pub path: Utf8PathBuf,
    /// The registered theorem id, or why loading failed.
    pub result: Result<String, RegistryError>,
}

#[derive(Debug)]
struct RegistryEntry {
    theorem: Theorem,
    state: TheoremState,
}

impl RegistryEntry {
    const fn new(theorem: Theorem) -> Self {
        Self {
            theorem,
            state: TheoremState::Unvalidated,
        }
    }

    fn validate(&mut self) -> &TheoremState {
        if self.state == TheoremState::Unvalidated {
            self.state = match validate_theorem(&self.theorem) {
                Validation::Valid => TheoremState::Valid,
                Validation::Invalid(issues) => TheoremState::Invalid(issues),
            };
        }
        &self.state
    }
}

/// The collection of loaded theorems and the pipeline that renders them.
///
/// # Examples
///
///     use theoremsite::{Configuration, Registry, TheoremState};
///
///     let mut registry = Registry::new(Configuration::default());
///     let id = registry
///         .load_str(r#"{"theorem_id": "t1", "name": "Sample",
///                       "statement": "A implies A", "formal_statement": "A -> A"}"#)
///         .unwrap();
///     assert_eq!(registry.list(), vec!["t1"]);
///     assert_eq!(registry.validate(&id).unwrap(), &TheoremState::Valid);
#[derive(Debug)]
pub struct Registry {
    config: Configuration,
    entries: IndexMap<String, RegistryEntry>,
}

impl Registry {
    /// Creates an empty registry that processes theorems under `config`.
    #[must_use]
    pub fn new(config: Configuration) -> Self {
        Self {
            config,
            entries: IndexMap::new(),
        }
    }

    /// The configuration this registry was constructed with.
    #[must_use]
    pub const fn config(&self) -> &Configuration {
        &self.config
    }

    /// Loads a theorem file and registers it, replacing any theorem with
    /// the same id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Schema`] if the file cannot be read or
    /// parsed; the registry is left unchanged.
    pub fn load(&mut self, path: &Utf8Path) -> Result<String, RegistryError> {
        let theorem = load_theorem_file(path)
            .inspect_err(|error| warn!(%path, %error, "failed to load theorem"))?;
        Ok(self.insert(theorem))
    }

    /// Parses a theorem from JSON text and registers it.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Schema`] if the text is not a valid theorem
    /// document; the registry is left unchanged.
    pub fn load_str(&mut self, input: &str) -> Result<String, RegistryError> {
        let theorem = load_theorem_str(input)
            .inspect_err(|error| warn!(%error, "failed to load theorem"))?;
        Ok(self.insert(theorem))
    }

    /// Parses a theorem from an already-decoded JSON value and registers it.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Schema`] if the value is not a valid theorem
    /// document; the registry is left unchanged.
    pub fn load_value(&mut self, document: &Value) -> Result<String, RegistryError> {
        let theorem = parse_theorem(document)
            .inspect_err(|error| warn!(%error, "failed to load theorem"))?;
        Ok(self.insert(theorem))
    }

    /// Loads every `*.json` file directly inside `dir`, in file-name order.
    ///
    /// A failing file does not stop the others; each file's outcome is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Directory`] if `dir` cannot be listed.
    pub fn load_dir(&mut self, dir: &Utf8Path) -> Result<Vec<LoadOutcome>, RegistryError> {
        let mut names = json_file_names(dir).map_err(|source| RegistryError::Directory {
            path: dir.to_owned(),
            source,
        })?;
        names.sort();
        debug!(path = %dir, files = names.len(), "loading theorem directory");

        Ok(names
            .into_iter()
            .map(|name| {
                let path = dir.join(name);
                let result = self.load(&path);
                LoadOutcome { path, result }
            })
            .collect())
    }

    /// Returns the theorem registered under `theorem_id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no such theorem is registered.
    pub fn get(&self, theorem_id: &str) -> Result<&Theorem, RegistryError> {
        self.entry(theorem_id).map(|entry| &entry.theorem)
    }

    /// Registered ids in load order. Replacing a theorem keeps its position.
    #[must_use]
    pub fn list(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Number of registered theorems.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no theorem is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current validation state of a theorem.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no such theorem is registered.
    pub fn state(&self, theorem_id: &str) -> Result<&TheoremState, RegistryError> {
        self.entry(theorem_id).map(|entry| &entry.state)
    }

    /// Validates a theorem if it has not been validated since it was loaded
    /// and returns its state.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no such theorem is registered.
    pub fn validate(&mut self, theorem_id: &str) -> Result<&TheoremState, RegistryError> {
        let entry = self
            .entries
            .get_mut(theorem_id)
            .ok_or_else(|| not_found(theorem_id))?;
        let state = entry.validate();
        debug!(theorem_id, valid = *state == TheoremState::Valid, "validated theorem");
        Ok(state)
    }

    /// Derives the solver configuration for a registered theorem.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no such theorem is registered.
    pub fn project(&self, theorem_id: &str) -> Result<SolverConfig, RegistryError> {
        self.get(theorem_id)
            .map(|theorem| project(theorem, &self.config))
    }

    /// Exports a registered theorem to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no such theorem is registered
    /// and [`RegistryError::Schema`] if the export fails.
    pub fn export(&self, theorem_id: &str, path: &Utf8Path) -> Result<(), RegistryError> {
        let theorem = self.get(theorem_id)?;
        export_theorem_file(theorem, path)?;
        info!(theorem_id, %path, "exported theorem");
        Ok(())
    }

    /// Renders every valid theorem into `out` plus an index document.
    ///
    /// `out` and its parents are created if needed. Invalid theorems are
    /// skipped and a failure to write one theorem's document does not stop
    /// the others; both are recorded in the returned [`SiteReport`]. The
    /// index lists exactly the theorems whose documents were written.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::OutputDirectory`] if `out` cannot be created
    /// or opened and [`RenderError::Index`] if the index cannot be written.
    pub fn generate_site(&mut self, out: &Utf8Path) -> Result<SiteReport, RenderError> {
        let dir = crate::fs::create_dir(out).map_err(|source| {
            warn!(path = %out, error = %source, "output directory is unusable");
            RenderError::OutputDirectory {
                path: out.to_owned(),
                source,
            }
        })?;

        let config = &self.config;
        let mut report = SiteReport::default();
        for (theorem_id, entry) in &mut self.entries {
            if let TheoremState::Invalid(issues) = entry.validate() {
                for issue in issues {
                    warn!(theorem_id = %theorem_id, reason = %issue, "skipping invalid theorem");
                }
                report.invalid.push(InvalidTheorem {
                    theorem_id: theorem_id.clone(),
                    issues: issues.clone(),
                });
                continue;
            }
            match write_document(&dir, &entry.theorem, config) {
                Ok(file) => {
                    debug!(theorem_id = %theorem_id, %file, "wrote theorem document");
                    report.written.push(theorem_id.clone());
                }
                Err(error) => {
                    warn!(theorem_id = %theorem_id, %error, "failed to write theorem document");
                    report.failed.push(error);
                }
            }
        }

        let listed: Vec<&Theorem> = report
            .written
            .iter()
            .filter_map(|theorem_id| self.entries.get(theorem_id))
            .map(|entry| &entry.theorem)
            .collect();
        dir.write(INDEX_FILE_NAME, render_index_document(&listed))
            .map_err(|source| {
                warn!(path = %out, error = %source, "failed to write index document");
                RenderError::Index {
                    path: out.to_owned(),
                    source,
                }
            })?;

        info!(
            path = %out,
            written = report.written.len(),
            invalid = report.invalid.len(),
            failed = report.failed.len(),
            "generated theorem site"
        );
        Ok(report)
    }

    fn entry(&self, theorem_id: &str) -> Result<&RegistryEntry, RegistryError> {
        self.entries
            .get(theorem_id)
            .ok_or_else(|| not_found(theorem_id))
    }

    fn insert(&mut self, theorem: Theorem) -> String {
        let theorem_id = theorem.theorem_id.clone();
        let previous = self
            .entries
            .insert(theorem_id.clone(), RegistryEntry::new(theorem));
        if previous.is_some() {
            debug!(theorem_id = %theorem_id, "replaced registered theorem");
        } else {
            debug!(theorem_id = %theorem_id, "registered theorem");
        }
        theorem_id
    }
}

fn not_found(theorem_id: &str) -> RegistryError {
    RegistryError::NotFound {
        theorem_id: theorem_id.to_owned(),
    }
}

/// Names of the regular `*.json` files directly inside `path`.
fn json_file_names(path: &Utf8Path) -> std::io::Result<Vec<String>> {
    let dir = crate::fs::open_dir(path)?;
    let mut names = Vec::new();
    for item in dir.entries()? {
        let entry = item?;
        let name = entry.file_name()?;
        if entry.file_type()?.is_file()
            && Utf8Path::new(&name).extension() == Some("json")
        {
            names.push(name);
        }
    }
    Ok(names)
}

/// Renders one theorem and writes it into `dir`, returning the file name.
fn write_document(
    dir: &Dir,
    theorem: &Theorem,
    config: &Configuration,
) -> Result<String, RenderError> {
    let file = document_file_name(&theorem.theorem_id);
    if file == INDEX_FILE_NAME {
        return Err(RenderError::ReservedName {
            theorem_id: theorem.theorem_id.clone(),
        });
    }
    let solver = project(theorem, config);
    let html = render_theorem_document(theorem, &solver)?;
    dir.write(&file, html)
        .map_err(|source| RenderError::Document {
            theorem_id: theorem.theorem_id.clone(),
            file: file.clone(),
            source,
        })?;
    Ok(file)
}
