use std::any::Any;
use std::fmt;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};

use crate::args::CallArgs;
use crate::coerce::FromArgs;
use crate::error::{CallError, NativeError};
use crate::signature::Signature;
use value::Value;

// The unified signature for every symbol an artifact exports.
// out: sink for anything the native body prints.
// Return: the host value, or an argument/native fault.
pub type NativeFn = fn(out: &mut dyn Write, args: &CallArgs) -> Result<Value, CallError>;

#[derive(Clone)]
pub struct NativeObj {
    pub name: &'static str,
    pub doc: &'static str,
    pub signature: &'static Signature,
    pub func: NativeFn,
}

impl NativeObj {
    pub fn call(&self, out: &mut dyn Write, args: &CallArgs) -> Result<Value, CallError> {
        (self.func)(out, args)
    }
}

impl fmt::Debug for NativeObj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeObj({})", self.signature)
    }
}

/// Integer status returned by a native entry point. Zero is success; any
/// other value is a normal return that the caller interprets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Status(pub i32);

impl Status {
    pub const SUCCESS: Status = Status(0);

    pub fn code(self) -> i32 {
        self.0
    }

    pub fn is_success(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Status> for Value {
    fn from(status: Status) -> Self {
        Value::Int(i64::from(status.0))
    }
}

/// Run a typed entry point behind the loose calling convention.
///
/// Binding and coercion finish before `entry` is called, so an argument
/// fault never produces native side effects. Panics are caught here and
/// reported as [`NativeError::Panicked`].
pub fn dispatch<A: FromArgs>(
    signature: &Signature,
    out: &mut dyn Write,
    args: &CallArgs,
    entry: fn(&mut dyn Write, A) -> Result<Status, NativeError>,
) -> Result<Value, CallError> {
    let typed = signature
        .bind(args)
        .and_then(|bound| A::from_args(&bound))
        .map_err(|err| {
            tracing::debug!(
                target: "bridge",
                symbol = signature.name,
                param = err.param().unwrap_or("-"),
                error = %err,
                "argument fault"
            );
            err
        })?;

    match panic::catch_unwind(AssertUnwindSafe(|| entry(out, typed))) {
        Ok(Ok(status)) => {
            tracing::trace!(target: "bridge", symbol = signature.name, status = status.0, "call returned");
            Ok(status.into())
        }
        Ok(Err(err)) => {
            tracing::warn!(target: "bridge", symbol = signature.name, error = %err, "native fault");
            Err(err.into())
        }
        Err(payload) => {
            let msg = panic_message(payload.as_ref());
            tracing::error!(target: "bridge", symbol = signature.name, panic = %msg, "native panic");
            Err(NativeError::Panicked(msg).into())
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::{BoundArgs, Param, ParamKind};
    use crate::ArgumentError;

    static ONE: Signature = Signature {
        name: "one",
        params: &[Param::int("n")],
        returns: ParamKind::Int,
    };

    struct N(i32);

    impl FromArgs for N {
        fn from_args(bound: &BoundArgs<'_>) -> Result<Self, ArgumentError> {
            Ok(N(bound.int(0)?))
        }
    }

    fn echo(out: &mut dyn Write, n: N) -> Result<Status, NativeError> {
        writeln!(out, "got {}", n.0)?;
        Ok(Status(n.0))
    }

    fn explode(_out: &mut dyn Write, _n: N) -> Result<Status, NativeError> {
        panic!("kaboom");
    }

    fn refuse(_out: &mut dyn Write, _n: N) -> Result<Status, NativeError> {
        Err(NativeError::Failed("refused".into()))
    }

    #[test]
    fn status_crosses_as_int() {
        let mut out = Vec::<u8>::new();
        let res = dispatch(&ONE, &mut out, &CallArgs::from_iter([7]), echo).unwrap();
        assert_eq!(res, Value::Int(7));
        assert_eq!(String::from_utf8(out).unwrap(), "got 7\n");
    }

    #[test]
    fn argument_fault_skips_entry() {
        let mut out = Vec::<u8>::new();
        let err = dispatch(&ONE, &mut out, &CallArgs::from_iter(["7"]), echo).unwrap_err();
        assert!(err.is_argument_fault());
        assert!(out.is_empty());
    }

    #[test]
    fn native_failures_are_not_argument_faults() {
        let mut out = Vec::<u8>::new();
        let err = dispatch(&ONE, &mut out, &CallArgs::from_iter([1]), refuse).unwrap_err();
        assert!(matches!(err, CallError::Native(NativeError::Failed(_))));

        let err = dispatch(&ONE, &mut out, &CallArgs::from_iter([1]), explode).unwrap_err();
        match err {
            CallError::Native(NativeError::Panicked(msg)) => assert_eq!(msg, "kaboom"),
            other => panic!("expected panic fault, got {other:?}"),
        }
    }

    #[test]
    fn status_helpers() {
        assert!(Status::SUCCESS.is_success());
        assert!(!Status(3).is_success());
        assert_eq!(Status(3).code(), 3);
        assert_eq!(Value::from(Status(-1)), Value::Int(-1));
    }
}
