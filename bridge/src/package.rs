use std::io::{self, Write};
use std::sync::OnceLock;

use crate::args::CallArgs;
use crate::artifact::{Artifact, ArtifactRegistry};
use crate::error::{CallError, LoadError};
use crate::native::NativeObj;
use crate::signature::Signature;
use crate::specs::{ARTIFACT_NAME, PACKAGE_NAME, PUBLIC_NAMES, REEXPORTS};
use value::Value;

/// A native symbol published under the package's public name.
#[derive(Clone, Debug)]
pub struct Export {
    public_name: &'static str,
    native: NativeObj,
}

impl Export {
    pub fn name(&self) -> &'static str {
        self.public_name
    }

    pub fn doc(&self) -> &'static str {
        self.native.doc
    }

    pub fn signature(&self) -> &'static Signature {
        self.native.signature
    }

    /// Forward a call to the artifact symbol, unchanged in both directions.
    pub fn invoke(&self, out: &mut dyn Write, args: &CallArgs) -> Result<Value, CallError> {
        self.native.call(out, args)
    }

    /// [`Export::invoke`] with native output going to stdout.
    pub fn call(&self, args: &CallArgs) -> Result<Value, CallError> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.invoke(&mut lock, args)
    }
}

/// The public facade over the `_counterkit` artifact.
#[derive(Clone, Debug)]
pub struct Package {
    artifact: Artifact,
    exports: Vec<Export>,
}

impl Package {
    /// Resolve the artifact and every re-exported symbol.
    pub fn load(registry: &ArtifactRegistry) -> Result<Self, LoadError> {
        let artifact = registry.load(PACKAGE_NAME, ARTIFACT_NAME)?;

        let exports = REEXPORTS
            .iter()
            .map(|re| -> Result<Export, LoadError> {
                let native = artifact
                    .symbol(re.symbol)
                    .cloned()
                    .ok_or_else(|| LoadError::SymbolNotFound {
                        artifact: artifact.name().to_string(),
                        symbol: re.symbol.to_string(),
                    })?;
                Ok(Export {
                    public_name: re.public,
                    native,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(
            target: "bridge",
            package = PACKAGE_NAME,
            artifact = artifact.name(),
            exports = exports.len(),
            "package loaded"
        );
        Ok(Self { artifact, exports })
    }

    pub fn name(&self) -> &'static str {
        PACKAGE_NAME
    }

    pub fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    pub fn doc(&self) -> &'static str {
        self.artifact.doc()
    }

    /// Public names, in `__all__` order.
    pub fn dir(&self) -> &'static [&'static str] {
        PUBLIC_NAMES
    }

    /// Look up a public name. Symbols outside the allow-list are not
    /// returned even when the artifact exports them.
    pub fn get(&self, name: &str) -> Option<&Export> {
        if !PUBLIC_NAMES.iter().any(|n| *n == name) {
            return None;
        }
        self.exports.iter().find(|e| e.public_name == name)
    }

    /// The `counter` export.
    pub fn counter(&self) -> &Export {
        // load() fails unless every re-export resolved, and `counter` is one.
        &self.exports[0]
    }

    /// The underlying artifact. Not part of the supported surface.
    pub fn artifact(&self) -> &Artifact {
        &self.artifact
    }
}

static PACKAGE: OnceLock<Package> = OnceLock::new();

/// Load the package once per process and hand out the shared instance.
///
/// A failed load is returned to the caller and not remembered, so a later
/// import retries.
pub fn import() -> Result<&'static Package, LoadError> {
    if let Some(package) = PACKAGE.get() {
        return Ok(package);
    }
    let package = import_from(&ArtifactRegistry::builtin())?;
    Ok(PACKAGE.get_or_init(|| package))
}

/// Load the package from an explicit registry, without touching the
/// process-wide instance.
pub fn import_from(registry: &ArtifactRegistry) -> Result<Package, LoadError> {
    Package::load(registry)
}
