use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ===== RAW BUTTON AS AUTHORED =====

/// A button exactly as authored, before validation.
///
/// Every field is optional here; presence and shape are checked by
/// [`crate::normalize`]. A JSON `null` reads the same as an omitted key.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ButtonSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(
        default,
        deserialize_with = "strict_true",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_next_action: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_alignment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_color: Option<String>,
    #[serde(
        default,
        deserialize_with = "truthy",
        skip_serializing_if = "Option::is_none"
    )]
    pub hide_when_unavailable: Option<bool>,
}

/// JSON keys read from an authored button.
pub(crate) const BUTTON_KEYS: &[&str] = &[
    "label",
    "isNextAction",
    "variant",
    "outputValue",
    "icon",
    "iconAlignment",
    "iconColor",
    "labelColor",
    "hideWhenUnavailable",
];

/// Flag keys read leniently; they keep their JSON type through decoding.
pub(crate) const FLAG_KEYS: &[&str] = &["isNextAction", "hideWhenUnavailable"];

/// Keys that only appear on resolved output. They are recomputed, so feeding a
/// resolved list back in ignores them without complaint.
pub(crate) const RESOLVED_KEYS: &[&str] = &["style", "isDisabled"];

impl ButtonSpec {
    /// Whether the button asks to move the flow forward.
    pub fn is_next(&self) -> bool {
        self.is_next_action.unwrap_or(false)
    }

    /// Whether the button should disappear when its action is unavailable.
    pub fn hides_when_unavailable(&self) -> bool {
        self.hide_when_unavailable.unwrap_or(false)
    }

    /// The icon identifier, treating an empty string as no icon.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref().filter(|s| !s.is_empty())
    }
}

/// Only a JSON `true` counts; any other present value reads as `false`.
fn strict_true<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
    Ok(Option::<Value>::deserialize(d)?.map(|v| v == Value::Bool(true)))
}

/// Loose truthiness: `true`, a nonzero number, a non-empty string, or any array or object.
fn truthy<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
    Ok(Option::<Value>::deserialize(d)?.map(|v| match v {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }))
}
