//! Option validation and pattern domain errors

use jql_core::config::{ConfigDefaults, ConfigValidator};
use jql_core::prelude::*;
use serde_json::json;

fn value(json: serde_json::Value) -> Value {
    Value::try_from(json).expect("test value should convert")
}

fn nested_arrays(depth: usize) -> (Pattern, Value) {
    let mut pattern = Pattern::Int(1);
    let mut target = Value::Int(1);
    for _ in 0..depth {
        pattern = Pattern::Array(vec![pattern]);
        target = Value::Array(vec![target]);
    }
    (pattern, target)
}

fn nested_mixed(depth: usize) -> (Pattern, Value) {
    let mut pattern = Pattern::Int(1);
    let mut target = Value::Int(1);
    for level in 0..depth {
        if level % 2 == 0 {
            pattern = Pattern::array([Pattern::Wildcard, pattern]);
            target = Value::Array(vec![Value::Null, target]);
        } else {
            pattern = Pattern::object([(PatternKey::from("k"), pattern)]);
            let mut map = ObjectMap::new();
            map.insert(Key::from("k"), target);
            target = Value::Object(map);
        }
    }
    (pattern, target)
}

#[test]
fn test_default_options() {
    let options = MatchOptions::default();
    assert!((options.relative_tolerance - 1e-15).abs() < f64::EPSILON);
    assert_eq!(options.max_depth, ConfigDefaults::MAX_DEPTH);
    assert!(options.validate().is_ok());
}

#[test]
fn test_tolerance_domain() {
    for tolerance in [0.0, 1e-15, 0.5, 0.999_999] {
        assert!(ConfigValidator::validate_tolerance(tolerance).is_ok());
    }
    for tolerance in [-1e-9, 1.0, 1.5, f64::NAN, f64::INFINITY] {
        let error = MatchOptions::default()
            .with_relative_tolerance(tolerance)
            .validate()
            .expect_err("tolerance should be rejected");
        assert_eq!(error.kind(), ErrorKind::InvalidToleranceValue);
        assert!(error.is_configuration());
    }
}

#[test]
fn test_invalid_tolerance_fails_every_match() {
    let options = MatchOptions::default().with_relative_tolerance(1.0);
    let error = matches(&Pattern::Wildcard, &Value::Null, &options)
        .expect_err("invalid options should fail before matching");
    assert!(matches!(error, JqlError::InvalidToleranceValue(t) if (t - 1.0).abs() < f64::EPSILON));
    assert!(Matcher::new(options).is_err());
}

#[test]
fn test_max_depth_range() {
    let error = Matcher::new(MatchOptions::default().with_max_depth(0))
        .expect_err("zero depth should be rejected");
    assert_eq!(error.kind(), ErrorKind::InvalidParameter);
    assert!(error.to_string().contains("max_depth"));
    assert!(Matcher::new(MatchOptions::default().with_max_depth(ConfigDefaults::MAX_DEPTH_CEILING)).is_ok());
    assert!(
        Matcher::new(MatchOptions::default().with_max_depth(ConfigDefaults::MAX_DEPTH_CEILING + 1))
            .is_err()
    );
}

#[test]
fn test_nesting_limit() {
    let (pattern, target) = nested_arrays(10);

    let shallow = Matcher::new(MatchOptions::default().with_max_depth(5)).expect("valid options");
    let error = shallow
        .matches(&pattern, &target)
        .expect_err("nesting beyond the limit should fail");
    assert_eq!(error, JqlError::NestingTooDeep { limit: 5 });

    let deep = Matcher::new(MatchOptions::default().with_max_depth(64)).expect("valid options");
    assert!(deep.matches(&pattern, &target).expect("within limit"));

    // A wildcard at the root never descends
    assert!(shallow.matches(&Pattern::Wildcard, &target).expect("no descent"));
}

#[test]
fn test_nesting_at_the_ceiling_on_a_small_stack() {
    let ceiling = ConfigDefaults::MAX_DEPTH_CEILING;
    let worker = std::thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(move || {
            let matcher =
                Matcher::new(MatchOptions::default().with_max_depth(ceiling)).expect("valid options");
            let mut outcomes = Vec::new();
            for build in [nested_arrays, nested_mixed] {
                let at_limit = build(ceiling);
                let past_limit = build(ceiling + 1);
                outcomes.push((
                    matcher.matches(&at_limit.0, &at_limit.1),
                    matcher.matches(&past_limit.0, &past_limit.1),
                ));
                // Drop glue for trees this deep recurses once per level
                std::mem::forget((at_limit, past_limit));
            }
            outcomes
        })
        .expect("thread should spawn");

    let outcomes = worker.join().expect("matching should not exhaust the thread stack");
    for (at_limit, past_limit) in outcomes {
        assert_eq!(at_limit, Ok(true));
        assert_eq!(past_limit, Err(JqlError::NestingTooDeep { limit: ceiling }));
    }
}

#[test]
fn test_options_deserialize_with_defaults() {
    let options: MatchOptions =
        serde_json::from_str(r#"{"relative_tolerance": 1e-9}"#).expect("options should parse");
    assert!((options.relative_tolerance - 1e-9).abs() < f64::EPSILON);
    assert_eq!(options.max_depth, ConfigDefaults::MAX_DEPTH);

    let options: MatchOptions = serde_json::from_value(json!({"max_depth": 8})).expect("options should parse");
    assert_eq!(options.max_depth, 8);
}

#[test]
fn test_several_wildcard_keys_are_invalid() {
    let pattern = Pattern::object([
        (PatternKey::Wildcard, Pattern::Int(1)),
        (PatternKey::Wildcard, Pattern::Int(2)),
    ]);
    for target in [value(json!({"a": 1, "b": 2})), value(json!([1, 2])), Value::Int(3)] {
        let error = matches(&pattern, &target, &MatchOptions::default())
            .expect_err("pattern should be rejected");
        assert_eq!(error.kind(), ErrorKind::InvalidPatternType);
        assert!(!error.is_fatal());
    }
}

#[test]
fn test_repeated_explicit_keys_are_invalid() {
    let pattern = Pattern::object([
        (PatternKey::from("a"), Pattern::Int(1)),
        (PatternKey::from("a"), Pattern::Int(2)),
    ]);
    let error = matches(&pattern, &value(json!({"a": 1})), &MatchOptions::default())
        .expect_err("pattern should be rejected");
    assert_eq!(error.kind(), ErrorKind::InvalidPatternType);
    assert!(error.to_string().contains("\"a\""));
}

#[test]
fn test_validation_is_local_to_visited_nodes() {
    let invalid = Pattern::object([
        (PatternKey::Wildcard, Pattern::Int(1)),
        (PatternKey::Wildcard, Pattern::Int(2)),
    ]);
    let pattern = Pattern::object([
        (PatternKey::from("a"), Pattern::Int(1)),
        (PatternKey::from("b"), invalid.clone()),
    ]);

    // "a" fails first, so the invalid child is never visited
    let target = value(json!({"a": 2, "b": {}}));
    assert!(!matches(&pattern, &target, &MatchOptions::default()).expect("child not visited"));

    let target = value(json!({"a": 1, "b": {}}));
    let error = matches(&pattern, &target, &MatchOptions::default())
        .expect_err("visited child should be rejected");
    assert_eq!(error.kind(), ErrorKind::InvalidPatternType);
}

#[test]
fn test_error_classification() {
    let defect = JqlError::invariant_violation("int", "int");
    assert!(defect.is_fatal());
    assert_eq!(defect.kind(), ErrorKind::InternalInvariantViolation);
    assert!(defect.to_string().contains("int pattern against int value"));

    assert!(!JqlError::invalid_value("x").is_fatal());
    assert!(!JqlError::NestingTooDeep { limit: 1 }.is_configuration());
}
