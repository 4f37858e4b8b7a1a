//! Hex color literals accepted by custom-color buttons.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// `#RGB` or `#RRGGBB`, any case.
static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^#(?:[0-9a-f]{3}){1,2}$")
        .unwrap_or_else(|e| panic!("invalid hex color pattern: {}", e))
});

/// A validated hex color literal, kept exactly as authored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    /// Parse `s` as a hex color. No trimming or case folding is applied.
    pub fn parse(s: &str) -> Option<Self> {
        HEX_COLOR.is_match(s).then(|| Self(s.to_string()))
    }

    /// Color used for labels and icons when a custom-color button leaves them unset.
    pub fn white() -> Self {
        Self(crate::defaults::CUSTOM_FOREGROUND.to_string())
    }

    /// Borrow the literal.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
