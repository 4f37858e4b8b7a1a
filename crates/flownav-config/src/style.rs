//! Button variant resolution and custom-color style synthesis.

use serde::Serialize;

use crate::{HexColor, NamedVariant};

/// A button's resolved look: either a named style or a custom background color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ButtonVariant {
    /// One of the renderer's built-in styles.
    Named(NamedVariant),
    /// A literal background color, styled through [`synthesize`].
    Custom(HexColor),
}

impl ButtonVariant {
    /// Resolve an authored variant. Hex colors win over named variants.
    pub fn resolve(input: &str) -> Option<Self> {
        if let Some(color) = HexColor::parse(input) {
            return Some(Self::Custom(color));
        }
        NamedVariant::lookup(input).map(Self::Named)
    }

    /// True for custom-color buttons.
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// Token or literal handed to the renderer.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Named(named) => named.token(),
            Self::Custom(color) => color.as_str(),
        }
    }
}

/// Which of the three custom colors a style property takes.
#[derive(Debug, Clone, Copy)]
enum Slot {
    /// The button's `variant` color.
    Background,
    /// The button's `labelColor`.
    Label,
    /// The button's `iconColor`.
    Icon,
}

/// Style hooks set for a custom-color button, in output order.
const STYLE_PROPERTIES: &[(&str, Slot)] = &[
    ("--slds-c-button-brand-color-background", Slot::Background),
    ("--slds-c-button-brand-color-background-hover", Slot::Background),
    ("--slds-c-button-brand-color-background-active", Slot::Background),
    ("--slds-c-button-brand-color-border", Slot::Background),
    ("--slds-c-button-brand-color-border-hover", Slot::Background),
    ("--slds-c-button-brand-text-color", Slot::Label),
    ("--slds-c-button-brand-text-color-hover", Slot::Label),
    ("--slds-c-button-brand-text-color-active", Slot::Label),
    ("--slds-c-icon-color-foreground", Slot::Icon),
];

/// Build the inline style string for a custom-color button.
///
/// Output is a `; `-separated list of `property: color` pairs, with every
/// property of [`STYLE_PROPERTIES`] present exactly once and in table order.
pub fn synthesize(background: &HexColor, label: &HexColor, icon: &HexColor) -> String {
    STYLE_PROPERTIES
        .iter()
        .map(|(property, slot)| {
            let color = match slot {
                Slot::Background => background,
                Slot::Label => label,
                Slot::Icon => icon,
            };
            format!("{}: {}", property, color)
        })
        .collect::<Vec<_>>()
        .join("; ")
}
