use std::collections::BTreeMap;

use assert_matches::assert_matches;
use filtrate::{Error, Fallback, Filtered, Registry, Value};

/// One value of every kind
fn samples() -> Vec<Value> {
    vec![
        Value::from("The Go Programming Language"),
        Value::from(""),
        Value::from(-12),
        Value::from(u64::MAX),
        Value::from(2.5),
        Value::from(f64::NAN),
        Value::from(true),
        Value::from(vec![1, 2]),
        Value::from(BTreeMap::from([("k", "v")])),
        Value::Unknown,
    ]
}

fn args_for(arity: usize, arg: &Value) -> Vec<Value> {
    vec![arg.clone(); arity]
}

#[test]
fn builtins_never_fail_the_host() {
    let registry = Registry::builtin();
    for filter in registry {
        for arg in samples() {
            for value in samples() {
                let args = args_for(filter.arity(), &arg);
                let out = filter.apply(&args, &value);
                assert_matches!(out, Ok(_), "{} {args:?} on {value:?}", filter.name());
            }
        }
    }
}

#[test]
fn degraded_output_is_the_fallback() {
    let registry = Registry::builtin();
    for filter in registry {
        for arg in samples() {
            for value in samples() {
                let args = args_for(filter.arity(), &arg);
                if let Ok(out @ Filtered::Degraded { .. }) = filter.apply(&args, &value) {
                    let expected = filter.meta().fallback.value(&value);
                    // NaN is not equal to itself
                    if !matches!(expected, Value::Float(n) if n.is_nan()) {
                        assert_eq!(out.value(), &expected, "{} on {value:?}", filter.name());
                    }
                    assert!(out.reason().is_some_and(Error::is_degradation));
                }
            }
        }
    }
}

#[test]
fn fallbacks_by_filter() {
    let registry = Registry::builtin();
    let expected = [
        ("replace", Fallback::Input),
        ("default", Fallback::Input),
        ("length", Fallback::Zero),
        ("lower", Fallback::Input),
        ("upper", Fallback::Input),
        ("trim", Fallback::Input),
        ("capfirst", Fallback::Input),
        ("title", Fallback::Input),
        ("urlencode", Fallback::Empty),
        ("wordcount", Fallback::Zero),
        ("lengthis", Fallback::False),
        ("truncatechars", Fallback::Input),
        ("rjust", Fallback::Input),
        ("ljust", Fallback::Input),
        ("center", Fallback::Input),
        ("divisibleby", Fallback::False),
        ("pluralize", Fallback::Empty),
        ("yesno", Fallback::Empty),
        ("filesizeformat", Fallback::Empty),
        ("join", Fallback::Empty),
    ];
    for (name, fallback) in expected {
        let filter = registry.get(name).unwrap();
        assert_eq!(filter.meta().fallback, fallback, "{name}");
    }
    assert_eq!(registry.len(), expected.len());
}

#[test]
fn text_filters_keep_non_text() {
    let registry = Registry::builtin();
    for name in ["lower", "upper", "trim", "capfirst", "title"] {
        let out = registry.apply(name, &[], &Value::from(42)).unwrap();
        assert!(out.is_degraded(), "{name}");
        assert_eq!(out.into_value(), Value::from(42));
    }
    let out = registry
        .apply("truncatechars", &[Value::from("3")], &Value::from("abcdef"))
        .unwrap();
    assert_eq!(out.into_value(), Value::from("abcdef"));
}

#[test]
fn wide_padding_is_applied() {
    let registry = Registry::builtin();
    for name in ["rjust", "ljust", "center"] {
        let out = registry
            .apply(name, &[Value::from(10_000)], &Value::from("a"))
            .unwrap();
        assert!(!out.is_degraded(), "{name}");
        assert_eq!(out.value().len(), Some(10_000), "{name}");
    }
}

#[test]
fn unallocatable_padding_keeps_the_input() {
    let registry = Registry::builtin();
    for name in ["rjust", "ljust", "center"] {
        let out = registry
            .apply(name, &[Value::from(i64::MAX)], &Value::from("foo"))
            .unwrap();
        assert_matches!(
            out,
            Filtered::Degraded {
                reason: Error::OutOfRange(_),
                ..
            }
        );
        assert_eq!(out.into_value(), Value::from("foo"));
    }
}

#[test]
fn numeric_edge_cases() {
    let registry = Registry::builtin();
    let out = registry
        .apply("divisibleby", &[Value::from(0)], &Value::from(21))
        .unwrap();
    assert_eq!(
        out.reason(),
        Some(&Error::OutOfRange("division by zero".into()))
    );
    assert_eq!(out.into_value(), Value::from(false));

    for size in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let out = registry
            .apply("filesizeformat", &[], &Value::from(size))
            .unwrap();
        assert!(out.is_degraded());
        assert_eq!(out.into_value(), Value::from(""));
    }
}

#[test]
fn host_errors_are_not_degradations() {
    let registry = Registry::builtin();
    let err = registry.apply("upper", &[Value::from(1)], &Value::from("x"));
    assert_matches!(err, Err(ref e) if !e.is_degradation());
    let err = registry.apply("nope", &[], &Value::from("x"));
    assert_matches!(err, Err(Error::UnknownFilter(_)));
}
