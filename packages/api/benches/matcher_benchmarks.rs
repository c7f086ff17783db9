//! Matcher Performance Benchmarks
//!
//! Timing of representative matches:
//! - Deep object subtree matches
//! - Wildcard array scans over long arrays
//! - Regex full matches with a warm cache

use std::time::Instant;

use jql::{Jql, Pattern, PatternKey, Value};

fn main() {
    println!("🏁 JQL Matcher Performance Benchmarks\n");

    bench_object_subtree();
    bench_wildcard_array();
    bench_regex_match();
}

fn report(label: &str, iterations: u32, elapsed: std::time::Duration) {
    let per_op = elapsed / iterations;
    println!("   {label}: {iterations} matches in {elapsed:?} ({per_op:?} per match)");
}

/// Benchmark subtree matching on a wide object
fn bench_object_subtree() {
    println!("📊 1. Object Subtree Matching");

    let value = match Value::object((0..256).map(|i| (format!("key{i}"), Value::from(i)))) {
        Ok(value) => value,
        Err(e) => {
            println!("   ❌ Failed to build value: {e}");
            return;
        }
    };
    let query = match Jql::pattern(Pattern::object([
        (PatternKey::from("key7"), Pattern::from(7)),
        (PatternKey::Wildcard, Pattern::from(255)),
    ]))
    .build()
    {
        Ok(query) => query,
        Err(e) => {
            println!("   ❌ Failed to build query: {e}");
            return;
        }
    };

    let iterations = 10_000;
    let start = Instant::now();
    for _ in 0..iterations {
        let _ = query.matches(&value);
    }
    report("wide object", iterations, start.elapsed());
}

/// Benchmark anchor scanning over a long array
fn bench_wildcard_array() {
    println!("📊 2. Wildcard Array Matching");

    let value = Value::array((0..4096).map(|i| i % 97));
    let pattern = Pattern::array([
        Pattern::from(0),
        Pattern::Wildcard,
        Pattern::from(96),
        Pattern::Wildcard,
        Pattern::from(4095 % 97),
    ]);
    let query = match Jql::pattern(pattern).build() {
        Ok(query) => query,
        Err(e) => {
            println!("   ❌ Failed to build query: {e}");
            return;
        }
    };

    let iterations = 1_000;
    let start = Instant::now();
    for _ in 0..iterations {
        let _ = query.matches(&value);
    }
    report("4096-element array", iterations, start.elapsed());
}

/// Benchmark regex full matching with a warm cache
fn bench_regex_match() {
    println!("📊 3. Regex Full Matching");

    let builder = match Jql::regex("[a-z]+-[0-9]{4}") {
        Ok(builder) => builder,
        Err(e) => {
            println!("   ❌ Failed to compile regex: {e}");
            return;
        }
    };
    let value = Value::from("release-2026");

    let iterations = 100_000;
    let start = Instant::now();
    for _ in 0..iterations {
        let _ = builder.matches(&value);
    }
    report("anchored regex", iterations, start.elapsed());
}
