//! Error types for decoding and validating a button configuration.

use std::result::Result as StdResult;

use thiserror::Error;

/// Crate-local `Result` alias using the config error type.
pub type Result<T> = StdResult<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors produced while decoding or validating a button configuration.
///
/// Every variant is terminal for the attempt that produced it. The `Display`
/// form is the message a host shows to the configuring user.
pub enum Error {
    #[error(
        "The buttons list seems to be in the wrong format ({reason}). Please check the structure and try again."
    )]
    /// The raw input is not JSON, not an array of objects, or holds a field of the wrong type.
    MalformedConfig {
        /// What the decoder tripped over.
        reason: String,
    },
    #[error("{}", layout_message(.value))]
    /// The layout alignment is blank or not one of `left`, `center`, `right`.
    InvalidLayoutAlignment {
        /// The value as supplied by the host.
        value: String,
    },
    #[error("Please provide a valid label and variant for each button ('{field}' is missing).")]
    /// A button lacks a non-blank `label` or `variant`.
    MissingRequiredField {
        /// Zero-based position of the button in the input list.
        index: usize,
        /// JSON key of the missing field.
        field: &'static str,
    },
    #[error("'iconAlignment' attribute is required when an 'icon' is specified.")]
    /// A button has an icon but no icon alignment.
    MissingIconAlignment {
        /// Zero-based position of the button in the input list.
        index: usize,
    },
    #[error(
        "'{value}' is not a valid alignment. Please provide a valid alignment (e.g., 'left' or 'right')."
    )]
    /// A button's icon alignment is neither `left` nor `right`.
    InvalidIconAlignment {
        /// Zero-based position of the button in the input list.
        index: usize,
        /// Normalized alignment value that failed the lookup.
        value: String,
    },
    #[error(
        "'{value}' is not a valid hex color for '{field}'. Please provide a valid hex color (e.g., '#RRGGBB')."
    )]
    /// A `labelColor` or `iconColor` is not a hex color.
    InvalidColor {
        /// Zero-based position of the button in the input list.
        index: usize,
        /// JSON key of the offending color field.
        field: &'static str,
        /// The rejected value.
        value: String,
    },
    #[error(
        "'{value}' is not a valid variant or hex color. Please provide a named variant (e.g., 'blue') or a valid hex color (e.g., '#RRGGBB')."
    )]
    /// A `variant` is neither a hex color nor a known named variant.
    InvalidVariantOrColor {
        /// Zero-based position of the button in the input list.
        index: usize,
        /// The rejected value.
        value: String,
    },
    #[error("'{value}' is not a known navigation action (expected NEXT, FINISH, or BACK).")]
    /// A host-supplied action token could not be parsed.
    UnknownAction {
        /// The rejected token.
        value: String,
    },
}

/// Message for a blank or unrecognized layout alignment.
fn layout_message(value: &str) -> String {
    if value.trim().is_empty() {
        "Button layout alignment is not defined. Please provide a valid layout alignment (e.g., 'left', 'right', or 'center').".to_string()
    } else {
        format!(
            "'{}' is not a valid button layout alignment. Please provide a valid button alignment (e.g., 'left', 'right', or 'center').",
            value
        )
    }
}

impl Error {
    /// Zero-based position of the button this error refers to, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::MissingRequiredField { index, .. }
            | Self::MissingIconAlignment { index }
            | Self::InvalidIconAlignment { index, .. }
            | Self::InvalidColor { index, .. }
            | Self::InvalidVariantOrColor { index, .. } => Some(*index),
            Self::MalformedConfig { .. }
            | Self::InvalidLayoutAlignment { .. }
            | Self::UnknownAction { .. } => None,
        }
    }

    /// Render a human-friendly message, prefixed with the button position when known.
    pub fn pretty(&self) -> String {
        match self.index() {
            Some(index) => format!("Button {}: {}", index + 1, self),
            None => self.to_string(),
        }
    }

    /// Build a malformed-config error from any displayable reason.
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedConfig {
            reason: reason.into(),
        }
    }
}
