//! Component properties: the decoded button list plus row-level settings.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::{
    AvailableActions, ButtonSpec, Error, NavBar, decode, decode_value, defaults, error::Result,
    normalize,
};

/// The `buttonsList` property: either a JSON string (as hosts usually pass it) or an inline array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawButtonsList {
    Encoded(String),
    Inline(Value),
}

/// Component properties as a host serializes them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProps {
    #[serde(default)]
    buttons_list: Option<RawButtonsList>,
    #[serde(default = "defaults::default_layout_alignment")]
    layout_alignment: String,
    #[serde(default)]
    include_line: bool,
}

/// Decoded component configuration.
///
/// Decoding happens once on construction. [`NavConfig::resolve`] validates
/// against a given set of available actions and may be called again whenever
/// the host's actions change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavConfig {
    /// Buttons as authored, in order.
    buttons: Vec<ButtonSpec>,
    /// Layout alignment as supplied by the host, unresolved.
    layout_alignment: String,
    /// Whether the renderer draws a separator line.
    include_line: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            buttons: defaults::default_buttons(),
            layout_alignment: defaults::default_layout_alignment(),
            include_line: false,
        }
    }
}

impl NavConfig {
    /// Decode `buttons_list` and pair it with row-level settings.
    pub fn new(buttons_list: &str, layout_alignment: &str, include_line: bool) -> Result<Self> {
        Ok(Self {
            buttons: decode(buttons_list)?,
            layout_alignment: layout_alignment.to_string(),
            include_line,
        })
    }

    /// Build from already-decoded buttons.
    pub fn from_buttons(
        buttons: Vec<ButtonSpec>,
        layout_alignment: &str,
        include_line: bool,
    ) -> Self {
        Self {
            buttons,
            layout_alignment: layout_alignment.to_string(),
            include_line,
        }
    }

    /// Load from a JSON props object with optional `buttonsList`,
    /// `layoutAlignment` and `includeLine` keys.
    ///
    /// Missing properties take the component defaults.
    pub fn from_props_json(s: &str) -> Result<Self> {
        let props: RawProps = serde_json::from_str(s)
            .map_err(|e| Error::malformed(format!("invalid props: {}", e)))?;
        let buttons = match props.buttons_list {
            None => defaults::default_buttons(),
            Some(RawButtonsList::Encoded(raw)) => decode(&raw)?,
            Some(RawButtonsList::Inline(value)) => decode_value(value)?,
        };
        Ok(Self {
            buttons,
            layout_alignment: props.layout_alignment,
            include_line: props.include_line,
        })
    }

    /// Buttons as authored.
    pub fn buttons(&self) -> &[ButtonSpec] {
        &self.buttons
    }

    /// Layout alignment as supplied, before resolution.
    pub fn layout_alignment(&self) -> &str {
        &self.layout_alignment
    }

    /// Whether the renderer draws a separator line.
    pub fn include_line(&self) -> bool {
        self.include_line
    }

    /// Validate and resolve against the host's currently available actions.
    pub fn resolve(&self, actions: &AvailableActions) -> Result<NavBar> {
        debug!(
            target: "flownav_config::config",
            buttons = self.buttons.len(),
            actions = ?actions,
            "resolving navigation bar"
        );
        let mut bar = normalize(&self.buttons, &self.layout_alignment, actions)?;
        bar.include_line = self.include_line;
        Ok(bar)
    }
}
