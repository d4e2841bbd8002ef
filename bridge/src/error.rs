use thiserror::Error;
use value::Kind;

/// An argument that could not be bound or coerced to its native type.
///
/// Always raised before native code runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("{function}(): argument '{param}' must be {expected}, not {found} ({value})")]
    TypeMismatch {
        function: &'static str,
        param: &'static str,
        expected: &'static str,
        found: Kind,
        value: String,
    },
    #[error("{function}(): argument '{param}' value {value} does not fit in {expected}")]
    OutOfRange {
        function: &'static str,
        param: &'static str,
        expected: &'static str,
        value: String,
    },
    #[error("{function}() missing required argument '{param}'")]
    MissingArgument {
        function: &'static str,
        param: &'static str,
    },
    #[error("{function}() got an unexpected keyword argument '{name}'")]
    UnexpectedKeyword { function: &'static str, name: String },
    #[error("{function}() got multiple values for argument '{param}'")]
    DuplicateArgument {
        function: &'static str,
        param: &'static str,
    },
    #[error("{function}() takes {expected} positional arguments but {given} were given")]
    TooManyArguments {
        function: &'static str,
        expected: usize,
        given: usize,
    },
}

impl ArgumentError {
    /// Name of the parameter at fault, when there is one.
    pub fn param(&self) -> Option<&str> {
        match self {
            ArgumentError::TypeMismatch { param, .. }
            | ArgumentError::OutOfRange { param, .. }
            | ArgumentError::MissingArgument { param, .. }
            | ArgumentError::DuplicateArgument { param, .. } => Some(*param),
            ArgumentError::UnexpectedKeyword { name, .. } => Some(name.as_str()),
            ArgumentError::TooManyArguments { .. } => None,
        }
    }
}

/// A failure raised from inside native code, after arguments were accepted.
#[derive(Debug, Error)]
pub enum NativeError {
    #[error("native I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("native code panicked: {0}")]
    Panicked(String),
    #[error("{0}")]
    Failed(String),
}

/// Everything a call through the boundary can raise.
///
/// A non-zero status is not an error and never shows up here.
#[derive(Debug, Error)]
pub enum CallError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),
    #[error(transparent)]
    Native(#[from] NativeError),
}

impl CallError {
    pub fn is_argument_fault(&self) -> bool {
        matches!(self, CallError::Argument(_))
    }

    pub fn as_argument(&self) -> Option<&ArgumentError> {
        match self {
            CallError::Argument(e) => Some(e),
            CallError::Native(_) => None,
        }
    }
}

/// Raised while importing a package, never during a call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("no native artifact named '{artifact}' (required by package '{package}')")]
    ArtifactNotFound { package: String, artifact: String },
    #[error("cannot import name '{symbol}' from native artifact '{artifact}'")]
    SymbolNotFound { artifact: String, symbol: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_function_and_parameter() {
        let err = ArgumentError::TypeMismatch {
            function: "counter",
            param: "max_number",
            expected: "int",
            found: Kind::Str,
            value: "\"10\"".into(),
        };
        assert_eq!(
            err.to_string(),
            "counter(): argument 'max_number' must be int, not str (\"10\")"
        );
        assert_eq!(err.param(), Some("max_number"));
    }

    #[test]
    fn call_error_keeps_fault_classes_apart() {
        let arg: CallError = ArgumentError::MissingArgument {
            function: "counter",
            param: "debug_enable",
        }
        .into();
        assert!(arg.is_argument_fault());
        assert!(arg.as_argument().is_some());

        let native: CallError = NativeError::Failed("boom".into()).into();
        assert!(!native.is_argument_fault());
        assert_eq!(native.to_string(), "boom");
    }
}
