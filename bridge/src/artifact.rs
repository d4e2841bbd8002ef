use crate::error::LoadError;
use crate::native::NativeObj;

/// Entry point that builds an artifact's symbol table, run once per load.
pub type ArtifactInit = fn() -> Artifact;

/// A compiled extension unit: a name, a doc string and its exported symbols.
#[derive(Clone, Debug)]
pub struct Artifact {
    name: &'static str,
    doc: &'static str,
    symbols: Vec<NativeObj>,
}

impl Artifact {
    pub fn new(name: &'static str, doc: &'static str) -> Self {
        Self {
            name,
            doc,
            symbols: Vec::new(),
        }
    }

    /// Export a symbol. A later definition with the same name replaces the
    /// earlier one.
    pub fn define_native(&mut self, native: NativeObj) {
        if let Some(existing) = self.symbols.iter_mut().find(|s| s.name == native.name) {
            *existing = native;
        } else {
            self.symbols.push(native);
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn doc(&self) -> &'static str {
        self.doc
    }

    pub fn symbol(&self, name: &str) -> Option<&NativeObj> {
        self.symbols.iter().find(|s| s.name == name)
    }

    pub fn symbols(&self) -> &[NativeObj] {
        &self.symbols
    }
}

/// Where the loader looks for artifacts: a name -> init function table.
#[derive(Clone, Default)]
pub struct ArtifactRegistry {
    entries: Vec<(&'static str, ArtifactInit)>,
}

impl ArtifactRegistry {
    /// A registry with nothing in it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The artifacts compiled into this crate.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(crate::specs::ARTIFACT_NAME, crate::counter::init);
        registry
    }

    pub fn register(&mut self, name: &'static str, init: ArtifactInit) {
        self.entries.retain(|(n, _)| *n != name);
        self.entries.push((name, init));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| *n == name)
    }

    /// Resolve and initialize an artifact. `package` only feeds the error.
    pub fn load(&self, package: &str, name: &str) -> Result<Artifact, LoadError> {
        let (_, init) = self
            .entries
            .iter()
            .find(|(n, _)| *n == name)
            .ok_or_else(|| LoadError::ArtifactNotFound {
                package: package.to_string(),
                artifact: name.to_string(),
            })?;
        let artifact = init();
        tracing::debug!(
            target: "bridge",
            artifact = artifact.name(),
            symbols = artifact.symbols().len(),
            "artifact loaded"
        );
        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare() -> Artifact {
        Artifact::new("_bare", "nothing here")
    }

    #[test]
    fn builtin_contains_counter_artifact() {
        let registry = ArtifactRegistry::builtin();
        assert!(registry.contains("_counterkit"));
        let artifact = registry.load("counterkit", "_counterkit").unwrap();
        assert!(artifact.symbol("counter").is_some());
    }

    #[test]
    fn missing_artifact_is_a_load_error() {
        let err = ArtifactRegistry::empty()
            .load("counterkit", "_counterkit")
            .unwrap_err();
        assert_eq!(
            err,
            LoadError::ArtifactNotFound {
                package: "counterkit".into(),
                artifact: "_counterkit".into(),
            }
        );
    }

    #[test]
    fn register_replaces_same_name() {
        let mut registry = ArtifactRegistry::builtin();
        registry.register("_counterkit", bare);
        let artifact = registry.load("counterkit", "_counterkit").unwrap();
        assert_eq!(artifact.name(), "_bare");
        assert!(artifact.symbols().is_empty());
    }

    #[test]
    fn define_native_replaces_symbol() {
        let mut artifact = crate::counter::init();
        let before = artifact.symbols().len();
        let counter = artifact.symbol("counter").cloned().unwrap();
        artifact.define_native(counter);
        assert_eq!(artifact.symbols().len(), before);
    }
}
