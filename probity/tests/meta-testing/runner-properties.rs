//! Property runner workflows
//!
//! These properties exercise full checks: generation, failure detection,
//! shrinking to a minimal counterexample, and seed reproduction.

use crate::meta_check;
use probity::*;

fn session(seed: u64) -> Session {
    match Session::new(RunParams::default().with_seed(seed)) {
        Ok(session) => session,
        Err(error) => panic!("session: {error}"),
    }
}

/// Property: Reversing twice is the identity, with no shrinking triggered
pub fn test_reverse_twice_passes() {
    let mut session = session(0);
    let property = session
        .property(|values: &Vec<i32>| {
            let mut twice = values.clone();
            twice.reverse();
            twice.reverse();
            &twice == values
        })
        .named("reverse_twice");
    let mut diagnostics = Diagnostics::new();

    let result = session.run(&property, &mut diagnostics);
    assert_eq!(
        result,
        CheckResult::Pass {
            trials_run: 100,
            property_name: Some("reverse_twice".to_string()),
        }
    );
    assert!(diagnostics.is_empty());
}

/// Property: A false property over non-negative sums shrinks to size 0 or 1
pub fn test_negative_sum_fails_minimally() {
    meta_check("negative_sum_minimal", 20, |&seed: &u64| {
        let mut session = session(seed + 1);
        let property = session.property(|values: &Vec<i64>| values.iter().sum::<i64>() < 0);
        let mut diagnostics = Diagnostics::new();

        let result = session.run(&property, &mut diagnostics);
        let minimal = matches!(result.counterexample(), Some("[]"));
        let reproduced = diagnostics.reproduce_seed() == result.failing_seed();
        let last_is_minimal = diagnostics.last_failure() == result.counterexample();

        !result.is_pass() && diagnostics.len() >= 2 && minimal && reproduced && last_is_minimal
    });
}

/// Property: Two sessions with the same seed agree on everything reported
pub fn test_same_seed_same_outcome() {
    meta_check("same_seed_same_outcome", 20, |&seed: &u64| {
        let outcome = |seed: u64| {
            let mut session = session(seed + 1);
            // Fails for some seeds and passes for others.
            let property = session
                .property(|values: &Vec<u8>| !values.is_empty() && values.first() != Some(&0));
            let mut diagnostics = Diagnostics::new();
            let result = session.run(&property, &mut diagnostics);
            (result, diagnostics)
        };
        outcome(seed) == outcome(seed)
    });
}

/// Property: A zero seed is replaced by a non-zero entropy seed and reported
pub fn test_zero_seed_uses_entropy() {
    let mut session = session(0);
    assert_ne!(session.seed(), 0);

    let property = session.property(|_: &Vec<u8>| false);
    let mut diagnostics = Diagnostics::new();
    assert!(!session.check(&property, &mut diagnostics));

    assert_eq!(diagnostics.reproduce_seed(), Some(session.seed()));
}

/// Property: The reported seed regenerates the failing counterexample
pub fn test_reported_seed_reproduces_failure() {
    // Empty vectors fail, so every failing branch shrinks down to one.
    let predicate = |values: &Vec<u16>| !values.is_empty() && values.iter().all(|&value| value < 95);

    let mut first = session(2024);
    let property = first.property(predicate);
    let mut diagnostics = Diagnostics::new();
    let result = first.run(&property, &mut diagnostics);

    let Some(seed) = result.failing_seed() else {
        panic!("Expected a failure, got: {result}");
    };

    let rerun = Property::new(predicate, seed);
    let mut rerun_diagnostics = Diagnostics::new();
    let rerun_result = rerun.run(100, &mut rerun_diagnostics, &mut RandomSource::new(seed));
    assert!(!rerun_result.is_pass());
    assert_eq!(rerun_result.counterexample(), result.counterexample());
    assert_eq!(rerun_diagnostics.messages(), diagnostics.messages());
}
