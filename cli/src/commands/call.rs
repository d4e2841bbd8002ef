use anyhow::{Context, Result};
use bridge::{CallArgs, Value};
use std::io::Write;

use crate::report::Outcome;

/// Call `counter` with raw tokens: literals are positional, `name=literal`
/// is a keyword. A token starting with `[` is read as a JSON list.
pub fn call_counter(tokens: &[String], out: &mut dyn Write) -> Result<Outcome> {
    let args = parse_args(tokens)?;
    super::invoke_and_report(&args, out)
}

pub fn parse_args(tokens: &[String]) -> Result<CallArgs> {
    let mut args = CallArgs::new();
    for token in tokens {
        match token.split_once('=') {
            Some((name, literal)) if is_identifier(name) => {
                args.push_keyword(name, parse_value(literal)?);
            }
            _ => args.push_positional(parse_value(token)?),
        }
    }
    Ok(args)
}

fn parse_value(token: &str) -> Result<Value> {
    if token.trim_start().starts_with('[') {
        serde_json::from_str(token).with_context(|| format!("Invalid list literal: {token}"))
    } else {
        Ok(value::parse_literal(token))
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn splits_positional_and_keyword() {
        let args = parse_args(&tokens(&["10", "debug_enable=1"])).unwrap();
        assert_eq!(args.positionals(), &[Value::Int(10)]);
        let kw: Vec<_> = args.keywords().collect();
        assert_eq!(kw, vec![("debug_enable", &Value::Int(1))]);
    }

    #[test]
    fn quoted_tokens_stay_positional() {
        let args = parse_args(&tokens(&["'a=b'", "\"10\""])).unwrap();
        assert_eq!(
            args.positionals(),
            &[Value::Str("a=b".into()), Value::Str("10".into())]
        );
    }

    #[test]
    fn json_lists() {
        let args = parse_args(&tokens(&["[1, 2]"])).unwrap();
        assert_eq!(args.positionals(), &[Value::from(vec![1i64, 2])]);
        assert!(parse_args(&tokens(&["[1,"])).is_err());
    }

    #[test]
    fn identifiers() {
        assert!(is_identifier("max_number"));
        assert!(is_identifier("_x1"));
        assert!(!is_identifier("1x"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("'a"));
    }
}
