//! Tracing support for resource pipelines.
//!
//! Feature-gated behind `#[cfg(feature = "tracing")]`. With the feature on,
//! contract violations in `unpack_*` are logged at `error` level before the
//! panic and panics caught by `catch_unwind` are logged at `warn` level.

use std::fmt::Debug;

use super::Resource;

impl<A, E> Resource<A, E> {
    /// Log the current tag at `debug` level and return the resource unchanged.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use remote_resource::Resource;
    ///
    /// let movies = fetch_movies()
    ///     .trace("movies")
    ///     .map(|films| films.len());
    /// ```
    pub fn trace(self, label: &str) -> Self {
        tracing::debug!(resource = label, tag = %self.tag(), "resource state");
        self
    }

    /// Like [`Resource::trace`], also logging the payload with `Debug`.
    pub fn trace_debug(self, label: &str) -> Self
    where
        A: Debug,
        E: Debug,
    {
        match &self {
            Resource::Initial | Resource::Loading => {
                tracing::debug!(resource = label, tag = %self.tag(), "resource state");
            }
            Resource::Failure(error) => {
                tracing::debug!(resource = label, tag = %self.tag(), ?error, "resource state");
            }
            Resource::Success(value) => {
                tracing::debug!(resource = label, tag = %self.tag(), ?value, "resource state");
            }
        }
        self
    }
}
