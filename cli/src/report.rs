use bridge::{CallError, Value};
use std::io::{self, Write};

/// How a call ended, from the caller's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Normal return with a non-zero status.
    Code(i64),
    /// The arguments were refused before native code ran.
    TypeError(String),
    Unexpected(String),
}

/// Print the caller's verdict on a call and return it.
///
/// Faults are reported, not propagated: the caller keeps going.
pub fn report(result: Result<Value, CallError>, out: &mut dyn Write) -> io::Result<Outcome> {
    let outcome = match result {
        Ok(Value::Int(0)) => Outcome::Success,
        Ok(Value::Int(code)) => Outcome::Code(code),
        Ok(other) => Outcome::Unexpected(format!(
            "native code returned {other}, expected an int status"
        )),
        Err(CallError::Argument(e)) => Outcome::TypeError(e.to_string()),
        Err(CallError::Native(e)) => Outcome::Unexpected(e.to_string()),
    };

    match &outcome {
        Outcome::Success => writeln!(out, "Counter executed successfully!")?,
        Outcome::Code(code) => writeln!(out, "Counter returned code: {code}")?,
        Outcome::TypeError(msg) => {
            writeln!(out, "Type error: {msg}")?;
            writeln!(out, "Make sure arguments are of correct type (int, bool)")?;
        }
        Outcome::Unexpected(msg) => writeln!(out, "Unexpected error: {msg}")?,
    }
    Ok(outcome)
}
