//! Curried combinators for pipeline composition
//!
//! Each function here takes the combinator's arguments and returns a function
//! of the resource, so steps can be built up separately and composed. The
//! inherent methods on [`Resource`] are the direct form of the same
//! operations: `map(f)(r)` is `r.map(f)`.
//!
//! # Example
//!
//! ```
//! use remote_resource::Resource;
//! use remote_resource::resource::pointfree::{compose, get_or_else, map, recover};
//!
//! let to_label = compose(
//!     compose(map(|n: u32| format!("{} items", n)), recover(|_: &String| None)),
//!     get_or_else(|| "-".to_string()),
//! );
//!
//! assert_eq!(to_label(Resource::<u32, String>::success(3)), "3 items");
//! ```

use super::Resource;

/// Compose two functions left to right: `compose(f, g)(x)` is `g(f(x))`.
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl FnOnce(A) -> C
where
    F: FnOnce(A) -> B,
    G: FnOnce(B) -> C,
{
    move |a| g(f(a))
}

/// Curried [`Resource::map`].
pub fn map<A, B, E, F>(f: F) -> impl FnOnce(Resource<A, E>) -> Resource<B, E>
where
    F: FnOnce(A) -> B,
{
    move |resource| resource.map(f)
}

/// Curried [`Resource::map_failure`].
pub fn map_failure<A, E, E2, F>(f: F) -> impl FnOnce(Resource<A, E>) -> Resource<A, E2>
where
    F: FnOnce(E) -> E2,
{
    move |resource| resource.map_failure(f)
}

/// Curried [`Resource::bimap`].
pub fn bimap<A, B, E, E2, F, G>(fa: F, fe: G) -> impl FnOnce(Resource<A, E>) -> Resource<B, E2>
where
    F: FnOnce(A) -> B,
    G: FnOnce(E) -> E2,
{
    move |resource| resource.bimap(fa, fe)
}

/// Curried [`Resource::tap`].
pub fn tap<A, E, F>(f: F) -> impl FnOnce(Resource<A, E>) -> Resource<A, E>
where
    F: FnOnce(&A),
{
    move |resource| resource.tap(f)
}

/// Curried [`Resource::tap_failure`].
pub fn tap_failure<A, E, F>(f: F) -> impl FnOnce(Resource<A, E>) -> Resource<A, E>
where
    F: FnOnce(&E),
{
    move |resource| resource.tap_failure(f)
}

/// Curried [`Resource::chain`].
pub fn chain<A, B, E, F>(f: F) -> impl FnOnce(Resource<A, E>) -> Resource<B, E>
where
    F: FnOnce(A) -> Resource<B, E>,
{
    move |resource| resource.chain(f)
}

/// Curried [`Resource::alt`].
pub fn alt<A, E, F>(def: F) -> impl FnOnce(Resource<A, E>) -> Resource<A, E>
where
    F: FnOnce() -> Resource<A, E>,
{
    move |resource| resource.alt(def)
}

/// Curried [`Resource::get_or_else`].
pub fn get_or_else<A, E, F>(def: F) -> impl FnOnce(Resource<A, E>) -> A
where
    F: FnOnce() -> A,
{
    move |resource| resource.get_or_else(def)
}

/// Curried [`Resource::recover`].
pub fn recover<A, E, F>(f: F) -> impl FnOnce(Resource<A, E>) -> Resource<A, E>
where
    F: FnOnce(&E) -> Option<A>,
{
    move |resource| resource.recover(f)
}

/// Curried [`Resource::ap`]: `ap(fresource)(resource)` is `resource.ap(fresource)`.
pub fn ap<A, B, E, F>(fresource: Resource<F, E>) -> impl FnOnce(Resource<A, E>) -> Resource<B, E>
where
    F: FnOnce(A) -> B,
{
    move |resource| resource.ap(fresource)
}

/// Curried [`Resource::fold`].
pub fn fold<A, E, T, FI, FL, FF, FS>(
    on_initial: FI,
    on_loading: FL,
    on_failure: FF,
    on_success: FS,
) -> impl FnOnce(Resource<A, E>) -> T
where
    FI: FnOnce() -> T,
    FL: FnOnce() -> T,
    FF: FnOnce(E) -> T,
    FS: FnOnce(A) -> T,
{
    move |resource| resource.fold(on_initial, on_loading, on_failure, on_success)
}
