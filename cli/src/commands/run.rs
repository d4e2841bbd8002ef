use anyhow::Result;
use bridge::{CallArgs, Value};
use std::io::Write;

use crate::config::CallConfig;
use crate::report::Outcome;

/// Command-line overrides for `run`. `None` falls back to the config.
#[derive(Debug, Default, Clone)]
pub struct RunOptions {
    pub max_number: Option<String>,
    pub debug: Option<bool>,
}

/// Call `counter(max_number=..., debug_enable=...)` with keyword arguments.
pub fn run_counter(call: &CallConfig, opts: &RunOptions, out: &mut dyn Write) -> Result<Outcome> {
    let max_number = match opts.max_number.as_deref() {
        Some(literal) => value::parse_literal(literal),
        None => call.max_number.clone(),
    };
    let debug_enable = match opts.debug {
        Some(flag) => Value::Bool(flag),
        None => call.debug_enable.clone(),
    };

    let args = CallArgs::new()
        .keyword("max_number", max_number)
        .keyword("debug_enable", debug_enable);
    super::invoke_and_report(&args, out)
}
