// Defaults and constants for navigation bar configuration

use crate::ButtonSpec;

/// Foreground used for labels and icons of custom-color buttons when unset.
pub(crate) const CUSTOM_FOREGROUND: &str = "#fff";

/// Layout alignment used when the host supplies none.
pub(crate) const LAYOUT_ALIGNMENT: &str = "right";

// Serde default functions
pub(crate) fn default_layout_alignment() -> String {
    LAYOUT_ALIGNMENT.to_string()
}

/// The button row shipped with the component: a neutral back button and a
/// custom-color forward button.
pub(crate) fn default_buttons() -> Vec<ButtonSpec> {
    vec![
        ButtonSpec {
            label: Some("Previous".to_string()),
            is_next_action: Some(false),
            variant: Some("neutral".to_string()),
            output_value: Some("Previous".to_string()),
            icon: Some("utility:chevronleft".to_string()),
            icon_alignment: Some("left".to_string()),
            hide_when_unavailable: Some(true),
            ..ButtonSpec::default()
        },
        ButtonSpec {
            label: Some("Next".to_string()),
            is_next_action: Some(true),
            variant: Some("#1565C0".to_string()),
            output_value: Some("Next".to_string()),
            icon: Some("utility:chevronright".to_string()),
            icon_color: Some("#fff".to_string()),
            label_color: Some("#fff".to_string()),
            icon_alignment: Some("right".to_string()),
            hide_when_unavailable: Some(false),
        },
    ]
}
