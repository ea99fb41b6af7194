//! Serde support for resources (feature-gated)
//!
//! A resource serializes as a record carrying its tag plus whichever payload
//! field the tag has:
//!
//! ```text
//! {"tag": "Initial"}
//! {"tag": "Loading"}
//! {"tag": "Failure", "error": ...}
//! {"tag": "Success", "value": ...}
//! ```
//!
//! Deserialization rejects a `Failure` without `error` and a `Success`
//! without `value`. A payload that is itself `null` (`()`, `None`) is
//! present, not missing. Extra payload fields on other tags are ignored.

use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Resource, Tag};

impl<A, E> Serialize for Resource<A, E>
where
    A: Serialize,
    E: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Resource::Initial | Resource::Loading => {
                let mut state = serializer.serialize_struct("Resource", 1)?;
                state.serialize_field("tag", &self.tag())?;
                state.end()
            }
            Resource::Failure(error) => {
                let mut state = serializer.serialize_struct("Resource", 2)?;
                state.serialize_field("tag", &Tag::Failure)?;
                state.serialize_field("error", error)?;
                state.end()
            }
            Resource::Success(value) => {
                let mut state = serializer.serialize_struct("Resource", 2)?;
                state.serialize_field("tag", &Tag::Success)?;
                state.serialize_field("value", value)?;
                state.end()
            }
        }
    }
}

// `None` only when the field is absent. A present `null` is handed to the
// payload's own impl, so `Success(None)` and `Success(())` survive.
#[derive(Deserialize)]
#[serde(
    rename = "Resource",
    bound(deserialize = "A: Deserialize<'de>, E: Deserialize<'de>")
)]
struct Record<A, E> {
    tag: Tag,
    #[serde(default, deserialize_with = "present")]
    value: Option<A>,
    #[serde(default, deserialize_with = "present")]
    error: Option<E>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl<'de, A, E> Deserialize<'de> for Resource<A, E>
where
    A: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = Record::<A, E>::deserialize(deserializer)?;
        match record.tag {
            Tag::Initial => Ok(Resource::Initial),
            Tag::Loading => Ok(Resource::Loading),
            Tag::Failure => record
                .error
                .map(Resource::Failure)
                .ok_or_else(|| D::Error::missing_field("error")),
            Tag::Success => record
                .value
                .map(Resource::Success)
                .ok_or_else(|| D::Error::missing_field("value")),
        }
    }
}
