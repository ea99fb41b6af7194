//! Error types for contract violations and caught panics.
//!
//! Neither of these is a domain failure. A domain failure is the
//! [`Resource::Failure`](crate::Resource::Failure) variant and flows through
//! combinators as data.

use std::any::Any;
use std::fmt;

use super::Tag;

/// Which payload an unpack operation asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnpackTarget {
    /// The `Success` value
    Value,
    /// The `Failure` error
    Error,
}

impl UnpackTarget {
    /// The tag that carries this payload.
    pub fn expected(self) -> Tag {
        match self {
            UnpackTarget::Value => Tag::Success,
            UnpackTarget::Error => Tag::Failure,
        }
    }
}

impl fmt::Display for UnpackTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnpackTarget::Value => f.write_str("value"),
            UnpackTarget::Error => f.write_str("error"),
        }
    }
}

/// A resource was unpacked while in the wrong state.
///
/// This is a programmer error: the caller should have established the tag
/// first (for example inside a branch of [`Resource::fold`](crate::Resource::fold)).
/// The panicking accessors use this type's `Display` output as their panic
/// message; the `try_unpack_*` accessors return it.
///
/// # Example
///
/// ```rust
/// use remote_resource::{Resource, Tag, UnpackError, UnpackTarget};
///
/// let r: Resource<i32, String> = Resource::loading();
/// let err = r.try_unpack_value().unwrap_err();
///
/// assert_eq!(err, UnpackError::new(UnpackTarget::Value, Tag::Loading));
/// assert_eq!(err.to_string(), "cannot unpack value in Loading state");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnpackError {
    target: UnpackTarget,
    found: Tag,
}

impl UnpackError {
    /// Create a new UnpackError.
    pub fn new(target: UnpackTarget, found: Tag) -> Self {
        Self { target, found }
    }

    /// The payload that was requested.
    pub fn target(&self) -> UnpackTarget {
        self.target
    }

    /// The tag the resource actually had.
    pub fn found(&self) -> Tag {
        self.found
    }
}

impl fmt::Display for UnpackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot unpack {} in {} state", self.target, self.found)
    }
}

impl std::error::Error for UnpackError {}

/// A panic caught by [`Resource::catch_unwind`](crate::Resource::catch_unwind).
///
/// Panic payloads are type-erased; the message is recovered when the payload
/// is a `&str` or `String`, which covers `panic!` with a format string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CaughtPanic {
    message: String,
}

impl CaughtPanic {
    /// Create a CaughtPanic from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub(crate) fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_string(),
                Err(_) => "non-string panic payload".to_string(),
            },
        };
        Self { message }
    }

    /// The panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CaughtPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panicked: {}", self.message)
    }
}

impl std::error::Error for CaughtPanic {}
