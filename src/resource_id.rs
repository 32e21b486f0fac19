//! Resource ID type definition.

use std::{convert::Infallible, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// The identifier the backend assigns to a transaction or category.
///
/// json-server style backends issue either integer or string IDs, so both are
/// accepted and sent back in the same form they were received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    /// An integer ID, e.g. `7`.
    Number(i64),
    /// A string ID, e.g. `"a1b2"`.
    Text(String),
}

impl ResourceId {
    /// Whether `self` and `other` refer to the same resource.
    ///
    /// IDs are compared by their textual form so that `7` matches `"7"`.
    pub fn matches(&self, other: &ResourceId) -> bool {
        match (self, other) {
            (ResourceId::Number(left), ResourceId::Number(right)) => left == right,
            (ResourceId::Text(left), ResourceId::Text(right)) => left == right,
            (left, right) => left.to_string() == right.to_string(),
        }
    }
}

impl Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceId::Number(id) => write!(f, "{id}"),
            ResourceId::Text(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for ResourceId {
    type Err = Infallible;

    /// Text written the way an integer is displayed becomes
    /// [ResourceId::Number], anything else (e.g. `"0123"`) is kept as
    /// [ResourceId::Text].
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();

        Ok(match text.parse::<i64>() {
            Ok(id) if id.to_string() == text => ResourceId::Number(id),
            _ => ResourceId::Text(text.to_owned()),
        })
    }
}

impl From<i64> for ResourceId {
    fn from(value: i64) -> Self {
        ResourceId::Number(value)
    }
}

impl From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        ResourceId::Text(value.to_owned())
    }
}
