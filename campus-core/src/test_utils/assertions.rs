//! Custom assertions and matchers for tests
//!
//! Provides expressive assertion helpers that improve test readability
//! and provide better error messages.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Assert that a Result is Ok and return the value
pub fn assert_ok<T, E: Debug>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("Expected Ok, got Err: {:?}", e),
    }
}

/// Assert that a Result is Err and return the error
pub fn assert_err<T: Debug, E>(result: Result<T, E>) -> E {
    match result {
        Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
        Err(e) => e,
    }
}

/// Assert that an Option is Some and return the value
pub fn assert_some<T>(option: Option<T>) -> T {
    match option {
        Some(value) => value,
        None => panic!("Expected Some, got None"),
    }
}

/// Assert that an Option is None
pub fn assert_none<T: Debug>(option: Option<T>) {
    if let Some(value) = option {
        panic!("Expected None, got Some({:?})", value);
    }
}

/// Assert that a set contains an element
pub fn assert_set_contains<T: Eq + Hash + Debug>(set: &HashSet<T>, element: &T) {
    if !set.contains(element) {
        panic!(
            "Expected set to contain {:?}, but it didn't. Set: {:?}",
            element, set
        );
    }
}

/// Assert that a set does not contain an element
pub fn assert_set_not_contains<T: Eq + Hash + Debug>(set: &HashSet<T>, element: &T) {
    if set.contains(element) {
        panic!(
            "Expected set not to contain {:?}, but it did. Set: {:?}",
            element, set
        );
    }
}

/// Assert that a set holds exactly the expected elements (order doesn't matter)
pub fn assert_set_eq<T: Eq + Hash + Debug + Clone>(set: &HashSet<T>, expected: &[T]) {
    let expected_set: HashSet<T> = expected.iter().cloned().collect();
    if *set != expected_set {
        panic!(
            "Sets differ. Actual: {:?}, expected: {:?}",
            set, expected_set
        );
    }
}
