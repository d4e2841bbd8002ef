//! PyO3 bindings: the `_counterkit` extension module.
//!
//! Python objects become [`Value`]s and go through the same binding and
//! coercion stages as every other caller. Argument faults surface as
//! `TypeError`, native faults as `RuntimeError`, load faults as
//! `ImportError`.

use pyo3::exceptions::{PyImportError, PyRuntimeError, PyTypeError};
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDict, PyFloat, PyInt, PyList, PyString, PyTuple};

use crate::args::CallArgs;
use crate::error::{ArgumentError, CallError};
use crate::package;
use value::Value;

fn to_value(obj: &Bound<'_, PyAny>) -> PyResult<Value> {
    if obj.is_none() {
        return Ok(Value::Nil);
    }
    // bool is a subclass of int; check it first.
    if let Ok(b) = obj.downcast::<PyBool>() {
        return Ok(Value::Bool(b.is_true()));
    }
    if obj.is_instance_of::<PyInt>() {
        if let Ok(i) = obj.extract::<i64>() {
            return Ok(Value::Int(i));
        }
        // Ints wider than i64 go through float so coercion reports them as
        // out of range rather than as a type mismatch. Past f64 the value
        // saturates, keeping its sign.
        let wide = match obj.extract::<f64>() {
            Ok(x) => x,
            Err(_) if obj.lt(0)? => f64::MIN,
            Err(_) => f64::MAX,
        };
        return Ok(Value::Float(wide));
    }
    if let Ok(x) = obj.downcast::<PyFloat>() {
        return Ok(Value::Float(x.value()));
    }
    if let Ok(s) = obj.downcast::<PyString>() {
        return Ok(Value::Str(s.to_cow()?.into_owned()));
    }
    if let Ok(list) = obj.downcast::<PyList>() {
        let items = list.iter().map(|item| to_value(&item));
        return items.collect::<PyResult<Vec<_>>>().map(Value::List);
    }
    if let Ok(tuple) = obj.downcast::<PyTuple>() {
        let items = tuple.iter().map(|item| to_value(&item));
        return items.collect::<PyResult<Vec<_>>>().map(Value::List);
    }
    Err(PyTypeError::new_err(format!(
        "unsupported argument type '{}'",
        obj.get_type().name()?
    )))
}

fn to_py_err(err: CallError) -> PyErr {
    match err {
        CallError::Argument(e) => PyTypeError::new_err(e.to_string()),
        CallError::Native(e) => PyRuntimeError::new_err(e.to_string()),
    }
}

// Range faults quote the caller's integer as Python prints it, not the
// float it was widened to.
fn with_host_text(
    err: CallError,
    args: &Bound<'_, PyTuple>,
    kwargs: Option<&Bound<'_, PyDict>>,
) -> CallError {
    match err {
        CallError::Argument(ArgumentError::OutOfRange {
            function,
            param,
            expected,
            value,
        }) => {
            let value = host_int_text(param, args, kwargs).unwrap_or(value);
            ArgumentError::OutOfRange {
                function,
                param,
                expected,
                value,
            }
            .into()
        }
        other => other,
    }
}

fn host_int_text(
    param: &str,
    args: &Bound<'_, PyTuple>,
    kwargs: Option<&Bound<'_, PyDict>>,
) -> Option<String> {
    let positional = crate::counter::SIGNATURE
        .position(param)
        .and_then(|idx| args.get_item(idx).ok());
    let obj = match positional {
        Some(obj) => obj,
        None => kwargs?.get_item(param).ok()??,
    };
    if obj.is_instance_of::<PyBool>() || !obj.is_instance_of::<PyInt>() {
        return None;
    }
    obj.str().ok().map(|s| s.to_string())
}

/// Run the counter with given parameters.
#[pyfunction]
#[pyo3(signature = (*args, **kwargs), text_signature = "(max_number, debug_enable)")]
fn counter(args: &Bound<'_, PyTuple>, kwargs: Option<&Bound<'_, PyDict>>) -> PyResult<i64> {
    let mut call = CallArgs::new();
    for arg in args.iter() {
        call.push_positional(to_value(&arg)?);
    }
    if let Some(kwargs) = kwargs {
        for (key, val) in kwargs.iter() {
            call.push_keyword(key.extract::<String>()?, to_value(&val)?);
        }
    }

    let package = package::import().map_err(|e| PyImportError::new_err(e.to_string()))?;
    let result = package
        .counter()
        .call(&call)
        .map_err(|err| to_py_err(with_host_text(err, args, kwargs)))?;
    match result {
        Value::Int(status) => Ok(status),
        other => Err(PyRuntimeError::new_err(format!(
            "native code returned {other}, expected an int status"
        ))),
    }
}

#[pymodule]
fn _counterkit(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let package = package::import().map_err(|e| PyImportError::new_err(e.to_string()))?;
    m.add("__doc__", package.doc())?;
    m.add("__version__", package.version())?;
    m.add_function(wrap_pyfunction!(counter, m)?)?;
    Ok(())
}
