//! Testing utilities for code that produces resources
//!
//! This module provides assertion macros for each state, a recording state
//! cell for checking the sequence of transitions a driver goes through, and
//! property-based testing support behind the `proptest` feature.
//!
//! # Examples
//!
//! ## Assertion Macros
//!
//! ```rust
//! use remote_resource::{Resource, assert_success, assert_failure, assert_loading};
//!
//! let ok = Resource::<_, String>::success(42);
//! assert_success!(ok);
//!
//! let err = Resource::<i32, _>::failure("timeout".to_string());
//! assert_failure!(err);
//!
//! assert_loading!(Resource::<i32, String>::loading());
//! ```
//!
//! ## Recording transitions
//!
//! ```rust
//! use remote_resource::{Resource, Tag};
//! use remote_resource::testing::Transitions;
//!
//! let mut cell = Transitions::<u32, String>::new();
//! cell.set(Resource::loading());
//! cell.set(Resource::success(7));
//!
//! assert_eq!(cell.tags(), vec![Tag::Initial, Tag::Loading, Tag::Success]);
//! assert_eq!(cell.current(), &Resource::Success(7));
//! ```

use crate::{Resource, Tag};

/// A state cell that remembers every resource stored in it.
///
/// Starts at `Initial`. Useful for asserting that a driver moved a resource
/// through the expected lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Transitions<A, E> {
    past: Vec<Resource<A, E>>,
    current: Resource<A, E>,
}

impl<A, E> Transitions<A, E> {
    /// Create a cell holding `Initial`.
    pub fn new() -> Self {
        Self {
            past: Vec::new(),
            current: Resource::Initial,
        }
    }

    /// Store the next state.
    pub fn set(&mut self, next: Resource<A, E>) {
        let previous = std::mem::replace(&mut self.current, next);
        self.past.push(previous);
    }

    /// Replace the current state with a function of it.
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&Resource<A, E>) -> Resource<A, E>,
    {
        let next = f(&self.current);
        self.set(next);
    }

    /// The most recently stored state.
    pub fn current(&self) -> &Resource<A, E> {
        &self.current
    }

    /// Every state stored so far, oldest first, ending with the current one.
    pub fn history(&self) -> impl Iterator<Item = &Resource<A, E>> {
        self.past.iter().chain(std::iter::once(&self.current))
    }

    /// The tags of every state stored so far, oldest first.
    pub fn tags(&self) -> Vec<Tag> {
        self.history().map(Resource::tag).collect()
    }

    /// Consume the cell, returning its current state.
    pub fn into_current(self) -> Resource<A, E> {
        self.current
    }
}

impl<A, E> Default for Transitions<A, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Assert that a resource is a `Success`.
///
/// # Example
///
/// ```rust
/// use remote_resource::{Resource, assert_success};
///
/// assert_success!(Resource::<_, String>::success(42));
/// ```
#[macro_export]
macro_rules! assert_success {
    ($resource:expr) => {
        match $resource {
            $crate::Resource::Success(_) => {}
            $crate::Resource::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
            other => {
                panic!("Expected Success, got {}", other.tag());
            }
        }
    };
    ($resource:expr, $expected:expr) => {
        match $resource {
            $crate::Resource::Success(value) => {
                assert_eq!(value, $expected);
            }
            $crate::Resource::Failure(e) => {
                panic!(
                    "Expected Success with value {:?}, got Failure: {:?}",
                    $expected, e
                );
            }
            other => {
                panic!(
                    "Expected Success with value {:?}, got {}",
                    $expected,
                    other.tag()
                );
            }
        }
    };
}

/// Assert that a resource is a `Failure`, optionally with a specific error.
///
/// # Example
///
/// ```rust
/// use remote_resource::{Resource, assert_failure};
///
/// let r = Resource::<i32, _>::failure("not found");
/// assert_failure!(r);
/// assert_failure!(r, "not found");
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($resource:expr) => {
        match $resource {
            $crate::Resource::Failure(_) => {}
            $crate::Resource::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
            other => {
                panic!("Expected Failure, got {}", other.tag());
            }
        }
    };
    ($resource:expr, $expected:expr) => {
        match $resource {
            $crate::Resource::Failure(error) => {
                assert_eq!(error, $expected);
            }
            $crate::Resource::Success(v) => {
                panic!(
                    "Expected Failure with error {:?}, got Success: {:?}",
                    $expected, v
                );
            }
            other => {
                panic!(
                    "Expected Failure with error {:?}, got {}",
                    $expected,
                    other.tag()
                );
            }
        }
    };
}

/// Assert that a resource is `Initial`.
#[macro_export]
macro_rules! assert_initial {
    ($resource:expr) => {{
        let resource = $resource;
        assert!(
            resource.is_initial(),
            "Expected Initial, got {}",
            resource.tag()
        );
    }};
}

/// Assert that a resource is `Loading`.
#[macro_export]
macro_rules! assert_loading {
    ($resource:expr) => {{
        let resource = $resource;
        assert!(
            resource.is_loading(),
            "Expected Loading, got {}",
            resource.tag()
        );
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;
#[cfg(feature = "proptest")]
use proptest::strategy::LazyJust;

#[cfg(feature = "proptest")]
impl<A, E> Arbitrary for Resource<A, E>
where
    A: Arbitrary + 'static,
    E: Arbitrary + 'static,
{
    type Parameters = (A::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (a_params, e_params) = args;
        prop_oneof![
            LazyJust::new(|| Resource::Initial),
            LazyJust::new(|| Resource::Loading),
            any_with::<E>(e_params).prop_map(Resource::failure),
            any_with::<A>(a_params).prop_map(Resource::success),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_start_initial() {
        let cell = Transitions::<i32, String>::new();
        assert_eq!(cell.current(), &Resource::Initial);
        assert_eq!(cell.history().count(), 1);
        assert_eq!(cell.into_current(), Resource::Initial);
    }

    #[test]
    fn transitions_current_tracks_last_set() {
        let mut cell = Transitions::<i32, String>::new();
        cell.set(Resource::loading());
        assert_eq!(cell.current(), &Resource::Loading);

        cell.set(Resource::success(3));
        assert_eq!(cell.current(), &Resource::Success(3));
        assert_eq!(cell.history().last(), Some(&Resource::Success(3)));
        assert_eq!(cell.history().count(), 3);
    }

    #[test]
    fn transitions_record_history() {
        let mut cell = Transitions::<i32, String>::default();
        cell.set(Resource::loading());
        cell.set(Resource::failure("refused".to_string()));
        cell.update(|prev| prev.clone().recover(|_| Some(0)));

        assert_eq!(
            cell.tags(),
            vec![Tag::Initial, Tag::Loading, Tag::Failure, Tag::Success]
        );
        assert_eq!(cell.into_current(), Resource::Success(0));
    }

    #[test]
    fn assert_success_macro() {
        assert_success!(Resource::<_, String>::success(42));
        assert_success!(Resource::<_, String>::success(42), 42);
    }

    #[test]
    fn assert_failure_macro() {
        assert_failure!(Resource::<i32, _>::failure("e"));
        assert_failure!(Resource::<i32, _>::failure("e"), "e");
    }

    #[test]
    fn assert_pending_macros() {
        assert_initial!(Resource::<i32, String>::initial());
        assert_loading!(Resource::<i32, String>::loading());
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn assert_success_panics_on_failure() {
        assert_success!(Resource::<i32, _>::failure("error".to_string()));
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Loading")]
    fn assert_success_panics_on_loading() {
        assert_success!(Resource::<i32, String>::loading());
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success")]
    fn assert_failure_panics_on_success() {
        assert_failure!(Resource::<_, String>::success(42));
    }

    #[test]
    #[should_panic(expected = "Expected Failure with error")]
    fn assert_failure_with_error_panics_on_initial() {
        assert_failure!(Resource::<i32, &str>::initial(), "e");
    }

    #[test]
    #[should_panic(expected = "Expected Initial, got Success")]
    fn assert_initial_panics_on_success() {
        assert_initial!(Resource::<_, String>::success(1));
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn resource_arbitrary_generates_every_tag(
                r in any::<Resource<i32, String>>()
            ) {
                match &r {
                    Resource::Initial => prop_assert!(r.is_initial()),
                    Resource::Loading => prop_assert!(r.is_loading()),
                    Resource::Failure(_) => prop_assert!(r.is_failure()),
                    Resource::Success(_) => prop_assert!(r.is_success()),
                }
            }
        }
    }
}
