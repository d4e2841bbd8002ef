pub struct ReExport {
    /// Name the package publishes.
    pub public: &'static str,
    /// Symbol resolved from the native artifact.
    pub symbol: &'static str,
}

// Public package name (what callers import).
pub const PACKAGE_NAME: &str = "counterkit";

// Compiled artifact the package loads. Internal; not part of the contract.
pub const ARTIFACT_NAME: &str = "_counterkit";

// THE SINGLE SOURCE OF TRUTH for what the package re-exports.
pub const REEXPORTS: &[ReExport] = &[ReExport {
    public: "counter",
    symbol: "counter",
}];

// Allow-list of public names (`__all__`). Anything else reachable through
// the artifact is unsupported surface.
pub const PUBLIC_NAMES: &[&str] = &["counter"];

// Compile-time assertion: every allow-listed name is backed by a re-export.
const _: () = assert!(
    REEXPORTS.len() == PUBLIC_NAMES.len(),
    "REEXPORTS and PUBLIC_NAMES drifted apart"
);

// Bumped when the native calling convention changes incompatibly.
pub const ABI_VERSION: i64 = 1;
