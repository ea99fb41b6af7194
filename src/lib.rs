//! # remote-resource
//!
//! A closed, immutable sum type for the lifecycle of a value that arrives
//! through an asynchronous operation, and a lawful set of combinators over it.
//!
//! ## Philosophy
//!
//! A request is either not made yet, in flight, failed, or succeeded. Holding
//! that as one [`Resource`] value instead of a bundle of flags and options
//! means every reader handles every state, and every transformation keeps the
//! state it was given. The crate is pure: it never performs or schedules
//! asynchronous work. Whatever drives the request stores a new `Resource` in
//! its state cell at each step.
//!
//! ## Quick Example
//!
//! ```rust
//! use remote_resource::Resource;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Film {
//!     title: String,
//! }
//!
//! async fn fetch_films() -> Result<Vec<Film>, String> {
//!     Ok(vec![Film { title: "A New Hope".to_string() }])
//! }
//!
//! # tokio_test::block_on(async {
//! let mut films: Resource<Vec<Film>, String> = Resource::initial();
//!
//! films = Resource::loading();
//! films = Resource::from_result(fetch_films().await);
//!
//! let view = films.fold(
//!     || "".to_string(),
//!     || "loading films...".to_string(),
//!     |error| format!("error: {}", error),
//!     |films| films.iter().map(|f| f.title.as_str()).collect::<Vec<_>>().join("\n"),
//! );
//! assert_eq!(view, "A New Hope");
//! # });
//! ```
//!
//! ## Combining
//!
//! ```rust
//! use remote_resource::{combine, Resource};
//!
//! let user: Resource<&str, String> = Resource::success("ada");
//! let settings: Resource<bool, String> = Resource::failure("403".to_string());
//! let feed: Resource<Vec<u32>, String> = Resource::loading();
//!
//! // The first input that is not a Success decides the outcome
//! assert_eq!(combine!(user, settings, feed), Resource::Failure("403".to_string()));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod resource;
pub mod testing;

// Re-exports
pub use resource::{
    combine, combine_all, CaughtPanic, CombineAll, ParseTagError, Resource, Tag, UnpackError,
    UnpackTarget,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::resource::pointfree;
    pub use crate::resource::{combine, combine_all, CombineAll, Resource, Tag};
}
