//! Opaque color tokens.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A color token as supplied by the UI (typically a hex string like `"#FF0000"`).
///
/// The engine never parses or interprets the token; two colors are the same
/// exactly when their strings are equal. Transparency is modelled by the
/// absence of a color (`Option<Color>`), not by a special token.
///
/// # Examples
///
/// ```
/// use pixelboard::draw::Color;
/// let red = Color::new("#FF0000");
/// assert_eq!(red.as_str(), "#FF0000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Wraps a color token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for Color {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// Default drawing color for new documents.
pub const DEFAULT_COLOR: &str = "#000000";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_compare_by_string() {
        assert_eq!(Color::new("#ff0000"), Color::from("#ff0000"));
        // Case is not normalised: tokens are opaque.
        assert_ne!(Color::new("#ff0000"), Color::new("#FF0000"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&Color::new("#123456")).unwrap();
        assert_eq!(json, "\"#123456\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "#123456");
    }
}
