//! The `Resource` type: the lifecycle of a remotely loaded value
//!
//! A `Resource<A, E>` is exactly one of four states:
//!
//! - `Initial` - the operation has not been requested
//! - `Loading` - the operation is in flight
//! - `Failure(E)` - the operation finished with an error
//! - `Success(A)` - the operation finished with a value
//!
//! Whatever drives the request (a task, a callback, an event loop) stores a
//! new `Resource` in its state cell at each transition. Readers transform and
//! combine those values with the combinators here instead of inspecting the
//! state by hand.
//!
//! # Examples
//!
//! ## Transforming
//!
//! ```
//! use remote_resource::Resource;
//!
//! let r: Resource<i32, String> = Resource::success(10);
//! assert_eq!(r.map(|n| n * 2), Resource::Success(20));
//!
//! let r: Resource<i32, String> = Resource::failure("timeout".to_string());
//! assert_eq!(r.map(|n| n * 2), Resource::Failure("timeout".to_string()));
//! ```
//!
//! ## Combining
//!
//! ```
//! use remote_resource::{combine, Resource};
//!
//! let user: Resource<&str, String> = Resource::success("ada");
//! let posts: Resource<u32, String> = Resource::loading();
//!
//! // The leftmost non-success input decides the result
//! assert_eq!(combine!(user, posts), Resource::Loading);
//! ```
//!
//! ## Eliminating
//!
//! ```
//! use remote_resource::Resource;
//!
//! let r: Resource<Vec<&str>, String> = Resource::success(vec!["a new hope"]);
//! let view = r.fold(
//!     || "".to_string(),
//!     || "loading...".to_string(),
//!     |e| format!("error: {}", e),
//!     |films| films.join(", "),
//! );
//! assert_eq!(view, "a new hope");
//! ```

mod error;
#[cfg(feature = "tracing")]
mod instrument;
pub mod pointfree;
#[cfg(feature = "serde")]
mod serde_impl;
mod tag;
mod variadic;

use std::panic::UnwindSafe;

pub use error::{CaughtPanic, UnpackError, UnpackTarget};
pub use tag::{ParseTagError, Tag};
pub use variadic::{combine, combine_all, CombineAll};

/// The state of a value obtained through an external asynchronous operation.
///
/// # Type Parameters
///
/// * `A` - The type of the success value
/// * `E` - The type of the error
///
/// Equality is structural: two resources are equal when their tags match and
/// their payloads (if any) are equal.
///
/// # Example
///
/// ```
/// use remote_resource::Resource;
///
/// let mut state: Resource<u32, String> = Resource::initial();
/// assert!(state.is_initial());
///
/// state = Resource::loading();
/// assert!(state.is_pending());
///
/// state = Resource::success(200);
/// assert_eq!(state.get_or_else(|| 0), 200);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource<A, E> {
    /// Not requested yet
    Initial,
    /// Requested, outcome unknown
    Loading,
    /// Finished unsuccessfully
    Failure(E),
    /// Finished successfully
    Success(A),
}

impl<A, E> Resource<A, E> {
    // ========== Constructors ==========

    /// Create a resource that has not been requested.
    #[inline]
    pub fn initial() -> Self {
        Resource::Initial
    }

    /// Create a resource whose request is in flight.
    #[inline]
    pub fn loading() -> Self {
        Resource::Loading
    }

    /// Create a failed resource.
    ///
    /// # Example
    ///
    /// ```
    /// use remote_resource::Resource;
    ///
    /// let r = Resource::<i32, _>::failure("not found");
    /// assert!(r.is_failure());
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Resource::Failure(error)
    }

    /// Create a successful resource.
    ///
    /// # Example
    ///
    /// ```
    /// use remote_resource::Resource;
    ///
    /// let r = Resource::<_, String>::success(42);
    /// assert!(r.is_success());
    /// ```
    #[inline]
    pub fn success(value: A) -> Self {
        Resource::Success(value)
    }

    /// Alias for [`Resource::success`].
    #[inline]
    pub fn of(value: A) -> Self {
        Resource::Success(value)
    }

    /// Create a resource from an optional value.
    ///
    /// `Some` becomes `Success`; `None` becomes `Initial`. An absent value is
    /// treated as "not requested", not as an error.
    ///
    /// # Example
    ///
    /// ```
    /// use remote_resource::Resource;
    ///
    /// assert_eq!(Resource::<_, ()>::from_nullable(Some(5)), Resource::Success(5));
    /// assert_eq!(Resource::<i32, ()>::from_nullable(None), Resource::Initial);
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<A>) -> Self {
        match value {
            Some(value) => Resource::Success(value),
            None => Resource::Initial,
        }
    }

    /// Create a settled resource from a Result.
    #[inline]
    pub fn from_result(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Resource::Success(value),
            Err(error) => Resource::Failure(error),
        }
    }

    /// Run a fallible thunk and capture its outcome.
    ///
    /// `Ok` becomes `Success` and `Err` becomes `Failure`. This is the bridge
    /// from ordinary fallible code into the `Failure` channel.
    ///
    /// # Example
    ///
    /// ```
    /// use remote_resource::Resource;
    ///
    /// let ok = Resource::try_catch(|| "42".parse::<i32>());
    /// assert_eq!(ok, Resource::Success(42));
    ///
    /// let err = Resource::try_catch(|| "x".parse::<i32>());
    /// assert!(err.is_failure());
    /// ```
    #[inline]
    pub fn try_catch<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<A, E>,
    {
        Resource::from_result(f())
    }

    // ========== Predicates ==========

    /// Returns `true` if this is `Initial`.
    #[inline]
    pub fn is_initial(&self) -> bool {
        matches!(self, Resource::Initial)
    }

    /// Returns `true` if this is `Loading`.
    #[inline]
    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Resource::Failure(_))
    }

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Resource::Success(_))
    }

    /// Returns `true` if no outcome is known yet (`Initial` or `Loading`).
    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self, Resource::Initial | Resource::Loading)
    }

    /// Returns `true` if the operation has finished (`Failure` or `Success`).
    #[inline]
    pub fn is_settled(&self) -> bool {
        !self.is_pending()
    }

    /// The active variant's tag.
    #[inline]
    pub fn tag(&self) -> Tag {
        match self {
            Resource::Initial => Tag::Initial,
            Resource::Loading => Tag::Loading,
            Resource::Failure(_) => Tag::Failure,
            Resource::Success(_) => Tag::Success,
        }
    }

    // ========== Borrowing ==========

    /// Convert to `Resource<&A, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Resource<&A, &E> {
        match self {
            Resource::Initial => Resource::Initial,
            Resource::Loading => Resource::Loading,
            Resource::Failure(error) => Resource::Failure(error),
            Resource::Success(value) => Resource::Success(value),
        }
    }

    /// Convert to `Resource<&mut A, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Resource<&mut A, &mut E> {
        match self {
            Resource::Initial => Resource::Initial,
            Resource::Loading => Resource::Loading,
            Resource::Failure(error) => Resource::Failure(error),
            Resource::Success(value) => Resource::Success(value),
        }
    }

    /// Split off the success value, retyping any other variant.
    #[inline]
    pub(crate) fn take_success<B>(self) -> Result<A, Resource<B, E>> {
        match self {
            Resource::Initial => Err(Resource::Initial),
            Resource::Loading => Err(Resource::Loading),
            Resource::Failure(error) => Err(Resource::Failure(error)),
            Resource::Success(value) => Ok(value),
        }
    }

    // ========== Transformations ==========

    /// Transform the success value, passing every other variant through.
    ///
    /// # Example
    ///
    /// ```
    /// use remote_resource::Resource;
    ///
    /// let r: Resource<i32, &str> = Resource::success(21);
    /// assert_eq!(r.map(|x| x * 2), Resource::Success(42));
    ///
    /// let r: Resource<i32, &str> = Resource::loading();
    /// assert_eq!(r.map(|x| x * 2), Resource::Loading);
    /// ```
    #[inline]
    pub fn map<B, F>(self, f: F) -> Resource<B, E>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Resource::Initial => Resource::Initial,
            Resource::Loading => Resource::Loading,
            Resource::Failure(error) => Resource::Failure(error),
            Resource::Success(value) => Resource::Success(f(value)),
        }
    }

    /// Transform the error, passing every other variant through.
    ///
    /// # Example
    ///
    /// ```
    /// use remote_resource::Resource;
    ///
    /// let r: Resource<i32, &str> = Resource::failure("boom");
    /// assert_eq!(r.map_failure(str::len), Resource::Failure(4));
    /// ```
    #[inline]
    pub fn map_failure<E2, F>(self, f: F) -> Resource<A, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Resource::Initial => Resource::Initial,
            Resource::Loading => Resource::Loading,
            Resource::Failure(error) => Resource::Failure(f(error)),
            Resource::Success(value) => Resource::Success(value),
        }
    }

    /// Transform the success value with `fa` or the error with `fe`.
    ///
    /// `Initial` and `Loading` pass through unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use remote_resource::Resource;
    ///
    /// let ok: Resource<i32, &str> = Resource::success(1);
    /// let err: Resource<i32, &str> = Resource::failure("bad");
    ///
    /// assert_eq!(ok.bimap(|x| x + 1, str::len), Resource::Success(2));
    /// assert_eq!(err.bimap(|x| x + 1, str::len), Resource::Failure(3));
    /// ```
    #[inline]
    pub fn bimap<B, E2, F, G>(self, fa: F, fe: G) -> Resource<B, E2>
    where
        F: FnOnce(A) -> B,
        G: FnOnce(E) -> E2,
    {
        match self {
            Resource::Initial => Resource::Initial,
            Resource::Loading => Resource::Loading,
            Resource::Failure(error) => Resource::Failure(fe(error)),
            Resource::Success(value) => Resource::Success(fa(value)),
        }
    }

    /// Observe the success value without changing the resource.
    ///
    /// `f` runs exactly once if this is a `Success` and never otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use remote_resource::Resource;
    ///
    /// let mut seen = Vec::new();
    /// let r: Resource<i32, ()> = Resource::success(7).tap(|v| seen.push(*v));
    ///
    /// assert_eq!(r, Resource::Success(7));
    /// assert_eq!(seen, vec![7]);
    /// ```
    #[inline]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&A),
    {
        if let Resource::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Observe the error without changing the resource.
    ///
    /// `f` runs exactly once if this is a `Failure` and never otherwise.
    #[inline]
    pub fn tap_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Resource::Failure(error) = &self {
            f(error);
        }
        self
    }

    // ========== Monadic Operations ==========

    /// Chain a resource-producing computation on the success value.
    ///
    /// Every other variant passes through unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use remote_resource::Resource;
    ///
    /// fn parse(s: &str) -> Resource<i32, String> {
    ///     Resource::try_catch(|| s.parse::<i32>().map_err(|e| e.to_string()))
    /// }
    ///
    /// let r: Resource<&str, String> = Resource::success("12");
    /// assert_eq!(r.chain(parse), Resource::Success(12));
    ///
    /// let r: Resource<&str, String> = Resource::initial();
    /// assert_eq!(r.chain(parse), Resource::Initial);
    /// ```
    #[inline]
    pub fn chain<B, F>(self, f: F) -> Resource<B, E>
    where
        F: FnOnce(A) -> Resource<B, E>,
    {
        match self {
            Resource::Initial => Resource::Initial,
            Resource::Loading => Resource::Loading,
            Resource::Failure(error) => Resource::Failure(error),
            Resource::Success(value) => f(value),
        }
    }

    /// Alias for [`Resource::chain`].
    #[inline]
    pub fn and_then<B, F>(self, f: F) -> Resource<B, E>
    where
        F: FnOnce(A) -> Resource<B, E>,
    {
        self.chain(f)
    }

    /// Keep a `Success`, otherwise fall back to a lazily produced resource.
    ///
    /// `def` is never called when this is a `Success`.
    ///
    /// # Example
    ///
    /// ```
    /// use remote_resource::Resource;
    ///
    /// let cached: Resource<i32, &str> = Resource::success(1);
    /// assert_eq!(cached.alt(|| panic!("not evaluated")), Resource::Success(1));
    ///
    /// let missing: Resource<i32, &str> = Resource::failure("miss");
    /// assert_eq!(missing.alt(|| Resource::success(2)), Resource::Success(2));
    /// ```
    #[inline]
    pub fn alt<F>(self, def: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            resource @ Resource::Success(_) => resource,
            Resource::Initial | Resource::Loading | Resource::Failure(_) => def(),
        }
    }

    /// Turn a `Failure` into a `Success` when `f` can produce a value.
    ///
    /// `f` receives the error by reference. `Some(value)` yields
    /// `Success(value)`; `None` leaves the original `Failure` in place. Other
    /// variants pass through and `f` is not called.
    ///
    /// For a success type that is itself an `Option`, `None` still means "no
    /// recovery"; return `Some(None)` to recover into `Success(None)`.
    ///
    /// # Example
    ///
    /// ```
    /// use remote_resource::Resource;
    ///
    /// let not_found: Resource<Vec<u8>, u16> = Resource::failure(404);
    /// let recovered = not_found.recover(|code| (*code == 404).then(Vec::new));
    /// assert_eq!(recovered, Resource::Success(vec![]));
    ///
    /// let server_error: Resource<Vec<u8>, u16> = Resource::failure(500);
    /// let unchanged = server_error.recover(|code| (*code == 404).then(Vec::new));
    /// assert_eq!(unchanged, Resource::Failure(500));
    /// ```
    #[inline]
    pub fn recover<F>(self, f: F) -> Self
    where
        F: FnOnce(&E) -> Option<A>,
    {
        match self {
            Resource::Failure(error) => match f(&error) {
                Some(value) => Resource::Success(value),
                None => Resource::Failure(error),
            },
            resource @ (Resource::Initial | Resource::Loading | Resource::Success(_)) => resource,
        }
    }

    // ========== Applicative ==========

    /// Apply the function carried by `fresource` to this resource's value.
    ///
    /// `self` is the argument side. Precedence:
    ///
    /// 1. if `self` is not a `Success`, it is returned, whatever `fresource` holds;
    /// 2. if both are `Success`, the function is applied;
    /// 3. otherwise `fresource`'s state is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use remote_resource::Resource;
    ///
    /// let f: Resource<fn(i32) -> i32, &str> = Resource::success(|x| x + 1);
    /// assert_eq!(Resource::success(1).ap(f), Resource::Success(2));
    ///
    /// let f: Resource<fn(i32) -> i32, &str> = Resource::failure("no fn");
    /// assert_eq!(Resource::<i32, &str>::loading().ap(f), Resource::Loading);
    ///
    /// let f: Resource<fn(i32) -> i32, &str> = Resource::failure("no fn");
    /// assert_eq!(Resource::success(1).ap(f), Resource::Failure("no fn"));
    /// ```
    #[inline]
    pub fn ap<B, F>(self, fresource: Resource<F, E>) -> Resource<B, E>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Resource::Initial => Resource::Initial,
            Resource::Loading => Resource::Loading,
            Resource::Failure(error) => Resource::Failure(error),
            Resource::Success(value) => match fresource {
                Resource::Initial => Resource::Initial,
                Resource::Loading => Resource::Loading,
                Resource::Failure(error) => Resource::Failure(error),
                Resource::Success(f) => Resource::Success(f(value)),
            },
        }
    }

    /// [`Resource::ap`] called from the function side: `f.apply(arg)` is
    /// `arg.ap(f)`.
    #[inline]
    pub fn apply<T, B>(self, arg: Resource<T, E>) -> Resource<B, E>
    where
        A: FnOnce(T) -> B,
    {
        arg.ap(self)
    }

    /// Pair this resource with another.
    ///
    /// Equivalent to `combine((self, other))`: if `self` is not a `Success`
    /// it wins, else `other` decides.
    ///
    /// # Example
    ///
    /// ```
    /// use remote_resource::Resource;
    ///
    /// let a: Resource<i32, &str> = Resource::failure("a");
    /// let b: Resource<i32, &str> = Resource::loading();
    /// assert_eq!(a.and(b), Resource::Failure("a"));
    /// ```
    #[inline]
    pub fn and<B>(self, other: Resource<B, E>) -> Resource<(A, B), E> {
        combine((self, other))
    }

    // ========== Elimination ==========

    /// Reduce the resource to a single value, one handler per variant.
    ///
    /// Exactly one handler is invoked.
    #[inline]
    pub fn fold<T, FI, FL, FF, FS>(
        self,
        on_initial: FI,
        on_loading: FL,
        on_failure: FF,
        on_success: FS,
    ) -> T
    where
        FI: FnOnce() -> T,
        FL: FnOnce() -> T,
        FF: FnOnce(E) -> T,
        FS: FnOnce(A) -> T,
    {
        match self {
            Resource::Initial => on_initial(),
            Resource::Loading => on_loading(),
            Resource::Failure(error) => on_failure(error),
            Resource::Success(value) => on_success(value),
        }
    }

    /// [`Resource::fold`] over a borrowed resource.
    ///
    /// # Example
    ///
    /// ```
    /// use remote_resource::Resource;
    ///
    /// let r: Resource<String, String> = Resource::success("ok".to_string());
    /// let len = r.fold_ref(|| 0, || 0, |e| e.len(), |v| v.len());
    /// assert_eq!(len, 2);
    /// assert!(r.is_success());
    /// ```
    #[inline]
    pub fn fold_ref<T, FI, FL, FF, FS>(
        &self,
        on_initial: FI,
        on_loading: FL,
        on_failure: FF,
        on_success: FS,
    ) -> T
    where
        FI: FnOnce() -> T,
        FL: FnOnce() -> T,
        FF: FnOnce(&E) -> T,
        FS: FnOnce(&A) -> T,
    {
        self.as_ref()
            .fold(on_initial, on_loading, on_failure, on_success)
    }

    /// Return the success value or a lazily computed default.
    ///
    /// # Example
    ///
    /// ```
    /// use remote_resource::Resource;
    ///
    /// let r: Resource<i32, &str> = Resource::loading();
    /// assert_eq!(r.get_or_else(|| -1), -1);
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, def: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Resource::Success(value) => value,
            Resource::Initial | Resource::Loading | Resource::Failure(_) => def(),
        }
    }

    /// Borrow the success value, if any.
    #[inline]
    pub fn value(&self) -> Option<&A> {
        match self {
            Resource::Success(value) => Some(value),
            Resource::Initial | Resource::Loading | Resource::Failure(_) => None,
        }
    }

    /// Borrow the error, if any.
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Resource::Failure(error) => Some(error),
            Resource::Initial | Resource::Loading | Resource::Success(_) => None,
        }
    }

    /// Take the success value, if any.
    #[inline]
    pub fn into_value(self) -> Option<A> {
        self.take_success::<A>().ok()
    }

    /// Take the error, if any.
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Resource::Failure(error) => Some(error),
            Resource::Initial | Resource::Loading | Resource::Success(_) => None,
        }
    }

    /// Convert a settled resource to a Result; `None` while pending.
    ///
    /// # Example
    ///
    /// ```
    /// use remote_resource::Resource;
    ///
    /// assert_eq!(Resource::<i32, &str>::success(1).into_settled(), Some(Ok(1)));
    /// assert_eq!(Resource::<i32, &str>::failure("e").into_settled(), Some(Err("e")));
    /// assert_eq!(Resource::<i32, &str>::loading().into_settled(), None);
    /// ```
    #[inline]
    pub fn into_settled(self) -> Option<Result<A, E>> {
        match self {
            Resource::Initial | Resource::Loading => None,
            Resource::Failure(error) => Some(Err(error)),
            Resource::Success(value) => Some(Ok(value)),
        }
    }

    /// Take the success value, or report which state the resource was in.
    #[inline]
    pub fn try_unpack_value(self) -> Result<A, UnpackError> {
        match self {
            Resource::Success(value) => Ok(value),
            resource @ (Resource::Initial | Resource::Loading | Resource::Failure(_)) => Err(
                UnpackError::new(UnpackTarget::Value, resource.tag()),
            ),
        }
    }

    /// Take the error, or report which state the resource was in.
    #[inline]
    pub fn try_unpack_error(self) -> Result<E, UnpackError> {
        match self {
            Resource::Failure(error) => Ok(error),
            resource @ (Resource::Initial | Resource::Loading | Resource::Success(_)) => Err(
                UnpackError::new(UnpackTarget::Error, resource.tag()),
            ),
        }
    }

    /// Extract the success value, panicking for any other state.
    ///
    /// Only call this where the tag is already known to be `Success`. Use
    /// [`Resource::try_unpack_value`] or [`Resource::value`] otherwise.
    ///
    /// # Panics
    ///
    /// Panics with `cannot unpack value in <Tag> state` if this is not a
    /// `Success`.
    ///
    /// # Example
    ///
    /// ```
    /// use remote_resource::Resource;
    ///
    /// let r: Resource<i32, &str> = Resource::success(3);
    /// assert_eq!(r.unpack_value(), 3);
    /// ```
    #[track_caller]
    pub fn unpack_value(self) -> A {
        match self.try_unpack_value() {
            Ok(value) => value,
            Err(err) => contract_violation(err),
        }
    }

    /// Extract the error, panicking for any other state.
    ///
    /// # Panics
    ///
    /// Panics with `cannot unpack error in <Tag> state` if this is not a
    /// `Failure`.
    #[track_caller]
    pub fn unpack_error(self) -> E {
        match self.try_unpack_error() {
            Ok(error) => error,
            Err(err) => contract_violation(err),
        }
    }

    // ========== Pipelines ==========

    /// Feed this resource into `f`.
    ///
    /// Lets the curried combinators in [`pointfree`] read left to right.
    ///
    /// # Example
    ///
    /// ```
    /// use remote_resource::Resource;
    /// use remote_resource::resource::pointfree::{chain, map};
    ///
    /// let r: Resource<i32, &str> = Resource::success(4)
    ///     .pipe(map(|x: i32| x * 10))
    ///     .pipe(chain(|x: i32| Resource::success(x + 2)));
    /// assert_eq!(r, Resource::Success(42));
    /// ```
    #[inline]
    pub fn pipe<T, F>(self, f: F) -> T
    where
        F: FnOnce(Self) -> T,
    {
        f(self)
    }
}

impl<A> Resource<A, CaughtPanic> {
    /// Run a thunk, turning a panic into a `Failure`.
    ///
    /// The panic message is kept in [`CaughtPanic`]. Only panics raised
    /// synchronously inside `f` are caught. The process panic hook still runs,
    /// so the message is also printed to stderr.
    ///
    /// # Example
    ///
    /// ```
    /// use remote_resource::Resource;
    ///
    /// let ok = Resource::catch_unwind(|| "Win");
    /// assert_eq!(ok, Resource::Success("Win"));
    ///
    /// let lost: Resource<&str, _> = Resource::catch_unwind(|| panic!("Lose"));
    /// assert_eq!(lost.unpack_error().message(), "Lose");
    /// ```
    pub fn catch_unwind<F>(f: F) -> Self
    where
        F: FnOnce() -> A + UnwindSafe,
    {
        match std::panic::catch_unwind(f) {
            Ok(value) => Resource::Success(value),
            Err(payload) => {
                let caught = CaughtPanic::from_payload(payload);
                #[cfg(feature = "tracing")]
                ::tracing::warn!(message = %caught.message(), "caught panic as resource failure");
                Resource::Failure(caught)
            }
        }
    }
}

impl<A, E> Resource<Resource<A, E>, E> {
    /// Flatten a nested resource.
    ///
    /// # Example
    ///
    /// ```
    /// use remote_resource::Resource;
    ///
    /// let nested: Resource<Resource<i32, &str>, &str> = Resource::success(Resource::loading());
    /// assert_eq!(nested.flatten(), Resource::Loading);
    /// ```
    #[inline]
    pub fn flatten(self) -> Resource<A, E> {
        self.chain(|inner| inner)
    }
}

#[cold]
#[track_caller]
fn contract_violation(err: UnpackError) -> ! {
    #[cfg(feature = "tracing")]
    ::tracing::error!(
        requested = %err.target(),
        found = %err.found(),
        "resource unpacked in the wrong state"
    );
    panic!("{}", err)
}

// ========== Trait Implementations ==========

impl<A, E> Default for Resource<A, E> {
    /// Returns `Resource::Initial`.
    fn default() -> Self {
        Resource::Initial
    }
}

impl<A, E> From<Option<A>> for Resource<A, E> {
    fn from(value: Option<A>) -> Self {
        Resource::from_nullable(value)
    }
}

impl<A, E> From<Result<A, E>> for Resource<A, E> {
    fn from(result: Result<A, E>) -> Self {
        Resource::from_result(result)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn widen(a: i32) -> i64 {
        i64::from(a) + 1
    }

    fn show(b: i64) -> String {
        b.to_string()
    }

    fn any_resource() -> impl Strategy<Value = Resource<i32, String>> {
        prop_oneof![
            Just(Resource::Initial),
            Just(Resource::Loading),
            any::<String>().prop_map(Resource::Failure),
            any::<i32>().prop_map(Resource::Success),
        ]
    }

    proptest! {
        #[test]
        fn prop_functor_identity(r in any_resource()) {
            prop_assert_eq!(r.clone().map(|v| v), r.clone());
            prop_assert_eq!(r.clone().map_failure(|e| e), r);
        }

        #[test]
        fn prop_functor_composition(r in any_resource()) {
            let f = |v: i32| v.wrapping_add(1);
            let g = |v: i32| v.wrapping_mul(2);
            prop_assert_eq!(r.clone().map(|v| g(f(v))), r.map(f).map(g));
        }

        #[test]
        fn prop_map_failure_composition(r in any_resource()) {
            let f = |e: String| e.len();
            let g = |n: usize| n.wrapping_mul(3);
            prop_assert_eq!(r.clone().map_failure(|e| g(f(e))), r.map_failure(f).map_failure(g));
        }

        #[test]
        fn prop_bimap_order_is_immaterial(r in any_resource()) {
            let fa = |v: i32| v.wrapping_sub(7);
            let fe = |e: String| e.to_uppercase();
            prop_assert_eq!(r.clone().bimap(fa, fe), r.clone().map(fa).map_failure(fe));
            prop_assert_eq!(r.clone().bimap(fa, fe), r.map_failure(fe).map(fa));
        }

        #[test]
        fn prop_monad_associativity(r in any_resource(), threshold: i32) {
            let f = move |v: i32| -> Resource<i64, String> {
                if v < threshold { Resource::success(i64::from(v)) } else { Resource::loading() }
            };
            let g = |v: i64| -> Resource<String, String> {
                if v % 2 == 0 { Resource::success(v.to_string()) } else { Resource::failure("odd".into()) }
            };
            prop_assert_eq!(r.clone().chain(f).chain(g), r.chain(|a| f(a).chain(g)));
        }

        #[test]
        fn prop_alt_distributes_over_map(r in any_resource(), fallback in any_resource()) {
            let f = |v: i32| v.wrapping_mul(5);
            let def = || fallback.clone();
            prop_assert_eq!(
                r.clone().alt(def).map(f),
                r.map(f).alt(|| def().map(f))
            );
        }

        #[test]
        fn prop_applicative_composition(
            fa in any_resource(),
            fab_ready: bool,
            fbc_ready: bool,
        ) {
            let fab: Resource<fn(i32) -> i64, String> = if fab_ready {
                Resource::success(widen)
            } else {
                Resource::failure("fab".into())
            };
            let fbc: Resource<fn(i64) -> String, String> = if fbc_ready {
                Resource::success(show)
            } else {
                Resource::loading()
            };

            let compose = |g: fn(i64) -> String| move |f: fn(i32) -> i64| move |a: i32| g(f(a));
            let left = fa.clone().ap(fab.clone().ap(fbc.clone().map(compose)));
            let right = fa.ap(fab).ap(fbc);
            prop_assert_eq!(left, right);
        }
    }
}
