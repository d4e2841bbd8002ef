//! Boundary between a loosely typed host and the counterkit native code.
//!
//! A call goes through three stages: [`Signature::bind`] maps positional and
//! keyword arguments onto parameters, [`FromArgs`] coerces each bound value to
//! its native type, and only then does the native entry point run. The
//! [`Package`] facade re-exports the artifact's symbol under its public name.

pub mod args;
pub mod artifact;
pub mod coerce;
pub mod counter;
pub mod error;
pub mod native;
pub mod package;
pub mod signature;
pub mod specs;

#[cfg(feature = "python")]
mod python;

pub use args::CallArgs;
pub use artifact::{Artifact, ArtifactInit, ArtifactRegistry};
pub use coerce::FromArgs;
pub use error::{ArgumentError, CallError, LoadError, NativeError};
pub use native::{NativeFn, NativeObj, Status};
pub use package::{import, import_from, Export, Package};
pub use signature::{BoundArgs, Param, ParamKind, Signature};
pub use value::{Kind, Value};
