use std::fmt;

use crate::args::CallArgs;
use crate::coerce;
use crate::error::ArgumentError;
use value::Value;

/// Native type of a parameter or return value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    /// 32-bit signed integer.
    Int,
    Bool,
}

impl ParamKind {
    pub fn name(self) -> &'static str {
        match self {
            ParamKind::Int => "int",
            ParamKind::Bool => "bool",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamKind,
}

impl Param {
    pub const fn int(name: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Int,
        }
    }

    pub const fn bool(name: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Bool,
        }
    }
}

/// Declared shape of a native function: name, ordered parameters, return.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature {
    pub name: &'static str,
    pub params: &'static [Param],
    pub returns: ParamKind,
}

impl Signature {
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|p| p.name == name)
    }

    /// Map the call's positional and keyword values onto parameters.
    ///
    /// Parameter identity decides where a keyword lands, so keyword order
    /// never matters. Each parameter must receive exactly one value.
    pub fn bind<'a>(&'a self, args: &'a CallArgs) -> Result<BoundArgs<'a>, ArgumentError> {
        let given = args.positionals().len();
        if given > self.arity() {
            return Err(ArgumentError::TooManyArguments {
                function: self.name,
                expected: self.arity(),
                given,
            });
        }

        let mut slots: Vec<Option<&'a Value>> = vec![None; self.arity()];
        for (slot, value) in slots.iter_mut().zip(args.positionals()) {
            *slot = Some(value);
        }

        for (name, value) in args.keywords() {
            let idx = self
                .position(name)
                .ok_or_else(|| ArgumentError::UnexpectedKeyword {
                    function: self.name,
                    name: name.to_string(),
                })?;
            if slots[idx].is_some() {
                return Err(ArgumentError::DuplicateArgument {
                    function: self.name,
                    param: self.params[idx].name,
                });
            }
            slots[idx] = Some(value);
        }

        let values = slots
            .into_iter()
            .zip(self.params)
            .map(|(slot, param)| {
                slot.ok_or(ArgumentError::MissingArgument {
                    function: self.name,
                    param: param.name,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BoundArgs {
            signature: self,
            values,
        })
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, p) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", p.name, p.kind.name())?;
        }
        write!(f, ") -> {}", self.returns.name())
    }
}

/// Arguments after binding: one host value per parameter, in declaration
/// order, still loosely typed.
#[derive(Debug)]
pub struct BoundArgs<'a> {
    signature: &'a Signature,
    values: Vec<&'a Value>,
}

impl<'a> BoundArgs<'a> {
    pub fn value(&self, idx: usize) -> &'a Value {
        self.values[idx]
    }

    /// Coerce parameter `idx` to a native `i32`.
    pub fn int(&self, idx: usize) -> Result<i32, ArgumentError> {
        let param = &self.signature.params[idx];
        debug_assert_eq!(param.kind, ParamKind::Int);
        coerce::to_i32(self.signature.name, param.name, self.values[idx])
    }

    /// Coerce parameter `idx` to a native `bool`.
    pub fn flag(&self, idx: usize) -> Result<bool, ArgumentError> {
        let param = &self.signature.params[idx];
        debug_assert_eq!(param.kind, ParamKind::Bool);
        coerce::to_bool(self.signature.name, param.name, self.values[idx])
    }
}
