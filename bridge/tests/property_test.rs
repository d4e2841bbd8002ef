//! Property tests for the coercion contract.

use bridge::{import, CallArgs, Value};
use proptest::prelude::*;

fn invoke(args: &CallArgs) -> (Result<Value, String>, Vec<u8>) {
    let mut out = Vec::<u8>::new();
    let result = import()
        .unwrap()
        .counter()
        .invoke(&mut out, args)
        .map_err(|e| e.to_string());
    (result, out)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn well_typed_calls_return_an_int(n in -50i32..200, flag in any::<bool>()) {
        let (result, _) = invoke(&CallArgs::new().positional(n).positional(flag));
        prop_assert_eq!(result, Ok(Value::Int(0)));
    }

    #[test]
    fn fractions_truncate_not_round(n in -50i32..200, frac in 0.0f64..0.999) {
        let x = if n < 0 { f64::from(n) - frac } else { f64::from(n) + frac };
        let truncated = invoke(&CallArgs::new().positional(x).positional(true));
        let whole = invoke(&CallArgs::new().positional(n).positional(true));
        prop_assert_eq!(truncated, whole);
    }

    #[test]
    fn zero_and_one_act_as_booleans(n in 0i32..50, flag in any::<bool>()) {
        let as_int = invoke(&CallArgs::new().positional(n).positional(i64::from(flag)));
        let as_bool = invoke(&CallArgs::new().positional(n).positional(flag));
        prop_assert_eq!(as_int, as_bool);
    }

    #[test]
    fn keyword_order_does_not_matter(n in -10i32..100, flag in any::<bool>()) {
        let canonical = invoke(&CallArgs::new().positional(n).positional(flag));
        let forward = invoke(&CallArgs::new().keyword("max_number", n).keyword("debug_enable", flag));
        let reversed = invoke(&CallArgs::new().keyword("debug_enable", flag).keyword("max_number", n));
        prop_assert_eq!(&forward, &canonical);
        prop_assert_eq!(&reversed, &canonical);
    }

    #[test]
    fn text_never_reaches_native_code(text in "\\PC*", n in 0i32..20) {
        let (result, out) = invoke(&CallArgs::new().positional(text.as_str()).positional(true));
        prop_assert!(result.is_err());
        prop_assert!(out.is_empty());

        let (result, out) = invoke(&CallArgs::new().positional(n).positional(text));
        prop_assert!(result.is_err());
        prop_assert!(out.is_empty());
    }
}
