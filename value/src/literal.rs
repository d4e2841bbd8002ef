use crate::Value;

/// Parse a command-line token into a host value.
///
/// `nil`, `none` and `null` give `Nil`; `true`/`false` are matched without
/// regard to case (so `True` works too). Integers and floats follow Rust's
/// parsers. Single or double quotes force a string, which is how a caller
/// passes `"10"` as text. Anything else is taken as a bare string.
pub fn parse_literal(token: &str) -> Value {
    let trimmed = token.trim();

    if let Some(inner) = unquote(trimmed) {
        return Value::Str(inner.to_string());
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "nil" | "none" | "null" => return Value::Nil,
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::Int(i);
    }
    if let Ok(x) = trimmed.parse::<f64>() {
        return Value::Float(x);
    }

    Value::Str(trimmed.to_string())
}

fn unquote(s: &str) -> Option<&str> {
    if s.len() < 2 {
        return None;
    }
    let first = s.as_bytes()[0];
    let last = s.as_bytes()[s.len() - 1];
    if (first == b'"' || first == b'\'') && first == last {
        Some(&s[1..s.len() - 1])
    } else {
        None
    }
}
