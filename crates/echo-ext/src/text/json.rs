// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! JSON passthrough over `serde_json`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::Result;

/// Output layout for [`ToJson::to_json_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    /// Single line, no insignificant whitespace.
    #[default]
    Compact,
    /// Two-space indented, one member per line.
    Pretty,
}

/// Serializes any [`Serialize`] value to JSON text.
///
/// ```
/// use echo_ext::text::ToJson;
///
/// assert_eq!(vec![1, 2, 3].to_json().ok().as_deref(), Some("[1,2,3]"));
/// ```
pub trait ToJson: Serialize {
    /// Compact JSON.
    fn to_json(&self) -> Result<String> {
        self.to_json_with(JsonStyle::Compact)
    }

    /// JSON in the requested layout.
    fn to_json_with(&self, style: JsonStyle) -> Result<String> {
        let text = match style {
            JsonStyle::Compact => serde_json::to_string(self)?,
            JsonStyle::Pretty => serde_json::to_string_pretty(self)?,
        };
        Ok(text)
    }
}

impl<T: Serialize + ?Sized> ToJson for T {}

/// Deserializes JSON text.
pub trait FromJson {
    /// Parses `self` as JSON into `T`.
    fn from_json<T: DeserializeOwned>(&self) -> Result<T>;
}

impl FromJson for str {
    fn from_json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(self).map_err(|err| {
            debug!(?err, target_type = core::any::type_name::<T>(), "failed to decode json");
            err.into()
        })
    }
}
