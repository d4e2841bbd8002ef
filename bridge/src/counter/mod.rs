//! The `_counterkit` native artifact.
//!
//! Exports `counter(max_number, debug_enable) -> int`, which counts from 1
//! up to `max_number`, reporting each step when debugging is enabled, and
//! returns status 0. An internal `abi_version()` symbol is also exported but
//! is not re-published by the package.

use std::io::{self, Write};

use crate::args::CallArgs;
use crate::artifact::Artifact;
use crate::coerce::FromArgs;
use crate::error::{ArgumentError, CallError, NativeError};
use crate::native::{self, NativeObj, Status};
use crate::signature::{BoundArgs, Param, ParamKind, Signature};
use crate::specs::{ABI_VERSION, ARTIFACT_NAME};
use value::Value;

pub const DOC: &str = "counterkit native extension module";

pub static SIGNATURE: Signature = Signature {
    name: "counter",
    params: &[Param::int("max_number"), Param::bool("debug_enable")],
    returns: ParamKind::Int,
};

pub static ABI_SIGNATURE: Signature = Signature {
    name: "abi_version",
    params: &[],
    returns: ParamKind::Int,
};

/// Counts from 1 up to a maximum, optionally printing each step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counter {
    max_number: i32,
    debug_enable: bool,
}

impl Counter {
    pub fn new(max_number: i32, debug_enable: bool) -> Self {
        Self {
            max_number,
            debug_enable,
        }
    }

    /// Run the count. Writes nothing unless debugging is enabled; a maximum
    /// below 1 counts nothing.
    pub fn start_counting(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.debug_enable {
            writeln!(
                out,
                "[DEBUG] Counter initialized with maxNumber = {}",
                self.max_number
            )?;
        }

        for i in 1..=self.max_number {
            if self.debug_enable {
                writeln!(out, "[DEBUG] Printed number: {i}")?;
            }
        }

        if self.debug_enable {
            writeln!(out, "[DEBUG] Counting finished.")?;
        }
        out.flush()
    }
}

/// Native arguments of `counter`, after coercion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterArgs {
    pub max_number: i32,
    pub debug_enable: bool,
}

impl FromArgs for CounterArgs {
    fn from_args(bound: &BoundArgs<'_>) -> Result<Self, ArgumentError> {
        Ok(Self {
            max_number: bound.int(0)?,
            debug_enable: bound.flag(1)?,
        })
    }
}

/// Typed entry point: what the loose `counter` symbol ends up calling.
pub fn run(out: &mut dyn Write, args: CounterArgs) -> Result<Status, NativeError> {
    Counter::new(args.max_number, args.debug_enable).start_counting(out)?;
    Ok(Status::SUCCESS)
}

pub fn native_counter(out: &mut dyn Write, args: &CallArgs) -> Result<Value, CallError> {
    native::dispatch(&SIGNATURE, out, args, run)
}

pub fn native_abi_version(_out: &mut dyn Write, args: &CallArgs) -> Result<Value, CallError> {
    ABI_SIGNATURE.bind(args)?;
    Ok(Value::Int(ABI_VERSION))
}

/// Build the artifact's symbol table.
pub fn init() -> Artifact {
    let mut artifact = Artifact::new(ARTIFACT_NAME, DOC);
    artifact.define_native(NativeObj {
        name: "counter",
        doc: "Run the counter with given parameters",
        signature: &SIGNATURE,
        func: native_counter,
    });
    artifact.define_native(NativeObj {
        name: "abi_version",
        doc: "Version of the native calling convention",
        signature: &ABI_SIGNATURE,
        func: native_abi_version,
    });
    artifact
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(counter: Counter) -> String {
        let mut out = Vec::<u8>::new();
        counter.start_counting(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn debug_output_lists_every_number() {
        assert_eq!(
            output(Counter::new(3, true)),
            "[DEBUG] Counter initialized with maxNumber = 3\n\
             [DEBUG] Printed number: 1\n\
             [DEBUG] Printed number: 2\n\
             [DEBUG] Printed number: 3\n\
             [DEBUG] Counting finished.\n"
        );
    }

    #[test]
    fn silent_without_debug() {
        assert_eq!(output(Counter::new(10, false)), "");
    }

    #[test]
    fn non_positive_maximum_counts_nothing() {
        assert_eq!(
            output(Counter::new(0, true)),
            "[DEBUG] Counter initialized with maxNumber = 0\n[DEBUG] Counting finished.\n"
        );
        assert_eq!(
            output(Counter::new(-5, true)),
            "[DEBUG] Counter initialized with maxNumber = -5\n[DEBUG] Counting finished.\n"
        );
    }

    #[test]
    fn run_returns_success() {
        let mut out = Vec::<u8>::new();
        let status = run(
            &mut out,
            CounterArgs {
                max_number: 10,
                debug_enable: false,
            },
        )
        .unwrap();
        assert_eq!(status, Status::SUCCESS);
    }

    #[test]
    fn abi_version_takes_no_arguments() {
        let mut out = Vec::<u8>::new();
        assert_eq!(
            native_abi_version(&mut out, &CallArgs::new()).unwrap(),
            Value::Int(ABI_VERSION)
        );
        let err = native_abi_version(&mut out, &CallArgs::from_iter([1])).unwrap_err();
        assert!(err.is_argument_fault());
    }

    #[test]
    fn init_exports_both_symbols() {
        let artifact = init();
        assert_eq!(artifact.name(), "_counterkit");
        assert_eq!(artifact.doc(), DOC);
        let names: Vec<_> = artifact.symbols().iter().map(|s| s.name).collect();
        assert_eq!(names, ["counter", "abi_version"]);
    }
}
