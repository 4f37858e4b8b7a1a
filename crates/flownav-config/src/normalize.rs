//! Validation and resolution of decoded buttons into a render-ready navigation bar.

use serde::Serialize;
use tracing::{debug, trace};

use crate::{
    ActionFamily, Activation, AvailableActions, ButtonSpec, ButtonVariant, Error, HexColor,
    IconAlignment, LayoutAlignment, error::Result, style,
};

/// A fully validated button, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedButton {
    /// Trimmed, non-empty label.
    pub label: String,
    /// True for forward (next/finish) buttons.
    pub is_next_action: bool,
    /// Resolved style token or custom color literal.
    pub variant: ButtonVariant,
    /// Value reported to the host on activation. Never empty.
    pub output_value: String,
    /// Optional icon identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Side of the label the icon is drawn on. Always set when `icon` is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_alignment: Option<IconAlignment>,
    /// Icon color; only set for custom-color buttons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<HexColor>,
    /// Label color; only set for custom-color buttons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_color: Option<HexColor>,
    /// Whether the button is dropped while its action is unavailable.
    pub hide_when_unavailable: bool,
    /// Inline style for custom-color buttons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// True when the host does not permit this button's action.
    pub is_disabled: bool,
}

/// The resolved button row handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavBar {
    /// Resolved layout token for the row.
    pub layout_alignment: LayoutAlignment,
    /// Whether the renderer draws a separator line above the row.
    pub include_line: bool,
    /// Visible buttons, in authored order.
    pub buttons: Vec<ResolvedButton>,
}

impl NavBar {
    /// Number of visible buttons.
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    /// True when nothing is rendered.
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Activate the visible button at `index`, or `None` when out of range.
    pub fn activate(&self, index: usize, actions: &AvailableActions) -> Option<Activation> {
        self.buttons.get(index).map(|button| button.activate(actions))
    }
}

/// Validate `buttons` and resolve them against the host's `actions`.
///
/// Validation stops at the first failing button. Buttons that are disabled
/// and marked `hideWhenUnavailable` are left out; the rest keep their order.
pub fn normalize(
    buttons: &[ButtonSpec],
    layout_alignment: &str,
    actions: &AvailableActions,
) -> Result<NavBar> {
    if buttons.is_empty() {
        // An empty row renders nothing, so a bad layout is not worth failing over.
        return Ok(NavBar {
            layout_alignment: LayoutAlignment::lookup(layout_alignment).unwrap_or_default(),
            include_line: false,
            buttons: Vec::new(),
        });
    }

    let layout = LayoutAlignment::resolve(layout_alignment)?;

    let mut resolved = Vec::with_capacity(buttons.len());
    for (index, spec) in buttons.iter().enumerate() {
        let button = resolve_button(index, spec, actions)?;
        if button.hide_when_unavailable && button.is_disabled {
            debug!(
                target: "flownav_config::normalize",
                index,
                label = %button.label,
                "hiding unavailable button"
            );
            continue;
        }
        resolved.push(button);
    }

    Ok(NavBar {
        layout_alignment: layout,
        include_line: false,
        buttons: resolved,
    })
}

/// Validate and resolve one button.
fn resolve_button(
    index: usize,
    spec: &ButtonSpec,
    actions: &AvailableActions,
) -> Result<ResolvedButton> {
    let label = required(index, "label", spec.label.as_deref())?;
    let variant_input = required(index, "variant", spec.variant.as_deref())?;

    let icon = spec.icon().map(str::to_string);
    let icon_alignment = match icon {
        Some(_) => Some(icon_alignment(index, spec.icon_alignment.as_deref())?),
        None => spec.icon_alignment.as_deref().and_then(IconAlignment::lookup),
    };

    let variant = ButtonVariant::resolve(variant_input).ok_or_else(|| {
        Error::InvalidVariantOrColor {
            index,
            value: variant_input.to_string(),
        }
    })?;

    let (label_color, icon_color, style) = match &variant {
        ButtonVariant::Custom(background) => {
            let label_color = custom_color(index, "labelColor", spec.label_color.as_deref())?;
            let icon_color = custom_color(index, "iconColor", spec.icon_color.as_deref())?;
            let style = style::synthesize(background, &label_color, &icon_color);
            (Some(label_color), Some(icon_color), Some(style))
        }
        ButtonVariant::Named(_) => (None, None, None),
    };

    let output_value = spec
        .output_value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(label)
        .to_string();

    let family = ActionFamily::from_is_next(spec.is_next());
    let is_disabled = !actions.permits(family);

    trace!(
        target: "flownav_config::normalize",
        index,
        variant = variant.as_str(),
        custom = variant.is_custom(),
        is_disabled,
        "resolved button"
    );

    Ok(ResolvedButton {
        label: label.to_string(),
        is_next_action: spec.is_next(),
        variant,
        output_value,
        icon,
        icon_alignment,
        icon_color,
        label_color,
        hide_when_unavailable: spec.hides_when_unavailable(),
        style,
        is_disabled,
    })
}

/// Trim a required text field, failing when it is absent or blank.
fn required<'a>(index: usize, field: &'static str, value: Option<&'a str>) -> Result<&'a str> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(Error::MissingRequiredField { index, field })
}

/// Resolve the icon alignment of a button that has an icon.
fn icon_alignment(index: usize, value: Option<&str>) -> Result<IconAlignment> {
    let value = value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(Error::MissingIconAlignment { index })?;
    IconAlignment::lookup(value).ok_or_else(|| Error::InvalidIconAlignment {
        index,
        value: value.to_lowercase(),
    })
}

/// Validate an optional custom color, defaulting to white when unset or empty.
fn custom_color(index: usize, field: &'static str, value: Option<&str>) -> Result<HexColor> {
    match value.filter(|s| !s.is_empty()) {
        None => Ok(HexColor::white()),
        Some(s) => HexColor::parse(s).ok_or_else(|| Error::InvalidColor {
            index,
            field,
            value: s.to_string(),
        }),
    }
}
