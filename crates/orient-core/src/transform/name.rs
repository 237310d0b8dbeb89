//! Canonical transform names, used for logs and for serialization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Transform;
use crate::TransformError;

impl Transform {
    /// The fixed lowercase name of this transform.
    ///
    /// Note that code 5 is `rot270` and code 6 is `rot90`.
    pub const fn name(self) -> &'static str {
        match self {
            Transform::Identity => "identity",
            Transform::HFlip => "hflip",
            Transform::VFlip => "vflip",
            Transform::HVFlip => "hvflip",
            Transform::Transpose => "transpose",
            Transform::Rot270 => "rot270",
            Transform::Rot90 => "rot90",
            Transform::Rot180Transpose => "rot180transpose",
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the canonical names plus `rot0` and `rot180`, ignoring case and
/// surrounding whitespace.
impl FromStr for Transform {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        match wanted.as_str() {
            "rot0" => return Ok(Transform::Rot0),
            "rot180" => return Ok(Transform::Rot180),
            _ => {}
        }
        Transform::ALL
            .into_iter()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| {
                log::debug!("unknown transform name {s:?}");
                TransformError::UnknownName(s.to_string())
            })
    }
}

impl Serialize for Transform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Transform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
