//! The discriminant of a [`Resource`](crate::Resource).

use std::fmt;
use std::str::FromStr;

/// Identifies which of the four variants of a [`Resource`](crate::Resource) is active.
///
/// # Example
///
/// ```rust
/// use remote_resource::{Resource, Tag};
///
/// let r: Resource<i32, String> = Resource::loading();
/// assert_eq!(r.tag(), Tag::Loading);
/// assert_eq!(r.tag().to_string(), "Loading");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tag {
    /// Not requested yet
    Initial,
    /// Requested, outcome unknown
    Loading,
    /// Finished with an error
    Failure,
    /// Finished with a value
    Success,
}

impl Tag {
    /// All tags in lifecycle order.
    pub const ALL: [Tag; 4] = [Tag::Initial, Tag::Loading, Tag::Failure, Tag::Success];

    /// The tag's name as a static string.
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Initial => "Initial",
            Tag::Loading => "Loading",
            Tag::Failure => "Failure",
            Tag::Success => "Success",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown tag name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTagError {
    input: String,
}

impl ParseTagError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown resource tag: {:?}", self.input)
    }
}

impl std::error::Error for ParseTagError {}

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| ParseTagError {
                input: s.to_string(),
            })
    }
}
