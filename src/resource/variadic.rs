//! Combining several resources into one
//!
//! Both forms scan their inputs left to right. The first input that is not a
//! `Success` is returned as-is and nothing after it is looked at. If every
//! input is a `Success`, the result is a `Success` of all the values in input
//! order.
//!
//! - [`combine`] takes a tuple of up to eight resources with different success
//!   types and the same error type.
//! - [`combine_all`] takes any iterator of resources of one type.
//!
//! # Examples
//!
//! ```
//! use remote_resource::{combine, combine_all, Resource};
//!
//! let name: Resource<&str, String> = Resource::success("ada");
//! let age: Resource<u8, String> = Resource::success(36);
//! assert_eq!(combine((name, age)), Resource::Success(("ada", 36)));
//!
//! let pages: Vec<Resource<u32, String>> = vec![
//!     Resource::success(1),
//!     Resource::failure("page 2".to_string()),
//!     Resource::loading(),
//! ];
//! assert_eq!(combine_all(pages), Resource::Failure("page 2".to_string()));
//! ```

use super::Resource;

/// Combine a tuple of resources into a resource of a tuple.
///
/// # Example
///
/// ```
/// use remote_resource::{combine, Resource};
///
/// let a: Resource<i32, &str> = Resource::success(1);
/// let b: Resource<bool, &str> = Resource::success(true);
/// let c: Resource<char, &str> = Resource::success('c');
/// assert_eq!(combine((a, b, c)), Resource::Success((1, true, 'c')));
/// ```
pub fn combine<V, E>(resources: V) -> Resource<V::Output, E>
where
    V: CombineAll<E>,
{
    resources.combine_all()
}

/// Combine any number of resources of one type into a resource of a `Vec`.
///
/// The accumulator starts as `Success(vec![])` and each `Success` input is
/// appended through [`Resource::ap`]. The iterator is not advanced past the
/// first input that is not a `Success`. An empty input gives `Success(vec![])`.
///
/// # Example
///
/// ```
/// use remote_resource::{combine_all, Resource};
///
/// let ready = (1..=3).map(Resource::<i32, ()>::success);
/// assert_eq!(combine_all(ready), Resource::Success(vec![1, 2, 3]));
///
/// let mixed = vec![Resource::<i32, ()>::initial(), Resource::loading()];
/// assert_eq!(combine_all(mixed), Resource::Initial);
/// ```
pub fn combine_all<A, E, I>(resources: I) -> Resource<Vec<A>, E>
where
    I: IntoIterator<Item = Resource<A, E>>,
{
    let mut combined: Resource<Vec<A>, E> = Resource::success(Vec::new());
    for resource in resources {
        // `combined` is a Success here, so `ap` yields `resource` itself
        // whenever `resource` is not a Success
        combined = resource.ap(combined.map(append));
        if !combined.is_success() {
            break;
        }
    }
    combined
}

fn append<A>(mut values: Vec<A>) -> impl FnOnce(A) -> Vec<A> {
    move |value| {
        values.push(value);
        values
    }
}

/// Trait for combining a tuple of resources that share an error type.
///
/// Implemented for tuples of one to eight resources. Use through [`combine`],
/// the [`combine!`](crate::combine!) macro, or directly.
pub trait CombineAll<E> {
    /// The tuple of success values.
    type Output;

    /// Combine the tuple, stopping at the leftmost input that is not a `Success`.
    fn combine_all(self) -> Resource<Self::Output, E>;
}

macro_rules! impl_combine_all {
    ($($T:ident),+) => {
        impl<E, $($T),+> CombineAll<E> for ($(Resource<$T, E>,)+) {
            type Output = ($($T,)+);

            #[allow(non_snake_case)]
            fn combine_all(self) -> Resource<Self::Output, E> {
                let ($($T,)+) = self;
                $(
                    let $T = match $T.take_success() {
                        Ok(value) => value,
                        Err(rest) => return rest,
                    };
                )+
                Resource::Success(($($T,)+))
            }
        }
    };
}

impl_combine_all!(T1);
impl_combine_all!(T1, T2);
impl_combine_all!(T1, T2, T3);
impl_combine_all!(T1, T2, T3, T4);
impl_combine_all!(T1, T2, T3, T4, T5);
impl_combine_all!(T1, T2, T3, T4, T5, T6);
impl_combine_all!(T1, T2, T3, T4, T5, T6, T7);
impl_combine_all!(T1, T2, T3, T4, T5, T6, T7, T8);

/// Combine resources given as separate arguments.
///
/// `combine!(a, b, c)` is `combine((a, b, c))`.
///
/// # Example
///
/// ```
/// use remote_resource::{combine, Resource};
///
/// let a: Resource<i32, &str> = Resource::success(1);
/// let b: Resource<i32, &str> = Resource::failure("b");
/// let c: Resource<i32, &str> = Resource::loading();
/// assert_eq!(combine!(a, b, c), Resource::Failure("b"));
/// ```
#[macro_export]
macro_rules! combine {
    ($($resource:expr),+ $(,)?) => {
        $crate::resource::CombineAll::combine_all(($($resource,)+))
    };
}
