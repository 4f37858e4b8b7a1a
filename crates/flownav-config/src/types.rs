//! Core token types and the fixed lookup tables that resolve user input into them.

use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Normalize a user-supplied token for table lookup.
fn normalize_token(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Horizontal placement of the whole button row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum LayoutAlignment {
    /// Buttons packed to the left edge.
    FlexStart,
    /// Buttons centered.
    FlexCenter,
    /// Buttons packed to the right edge.
    #[default]
    FlexEnd,
}

/// User-facing layout names and their resolved tokens.
static LAYOUT_ALIGNMENTS: &[(&str, LayoutAlignment)] = &[
    ("left", LayoutAlignment::FlexStart),
    ("center", LayoutAlignment::FlexCenter),
    ("right", LayoutAlignment::FlexEnd),
];

impl LayoutAlignment {
    /// Resolved token handed to the renderer.
    pub fn token(self) -> &'static str {
        match self {
            Self::FlexStart => "flex_start",
            Self::FlexCenter => "flex_center",
            Self::FlexEnd => "flex_end",
        }
    }

    /// Look up a layout by user-facing name or resolved token, ignoring case and padding.
    pub fn lookup(input: &str) -> Option<Self> {
        let key = normalize_token(input);
        LAYOUT_ALIGNMENTS
            .iter()
            .find(|(name, layout)| *name == key || layout.token() == key)
            .map(|(_, layout)| *layout)
    }

    /// Resolve a host-supplied layout alignment, failing on blank or unknown values.
    pub fn resolve(input: &str) -> Result<Self, Error> {
        Self::lookup(input).ok_or_else(|| Error::InvalidLayoutAlignment {
            value: input.to_string(),
        })
    }
}

impl fmt::Display for LayoutAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Side of the label on which a button icon is drawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum IconAlignment {
    /// Icon before the label.
    #[default]
    Left,
    /// Icon after the label.
    Right,
}

impl IconAlignment {
    /// Lower-case token handed to the renderer.
    pub fn token(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Look up an icon alignment, ignoring case and padding.
    pub fn lookup(input: &str) -> Option<Self> {
        match normalize_token(input).as_str() {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

impl fmt::Display for IconAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Named button styles understood by the renderer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum NamedVariant {
    /// Plain, unaccented button.
    Neutral,
    /// Filled brand color.
    Brand,
    /// Brand-colored outline.
    BrandOutline,
    /// Filled success color.
    Success,
    /// Filled destructive color.
    Destructive,
    /// Destructive-colored text only.
    DestructiveText,
}

/// User-facing variant names and their resolved style tokens.
static NAMED_VARIANTS: &[(&str, NamedVariant)] = &[
    ("neutral", NamedVariant::Neutral),
    ("blue", NamedVariant::Brand),
    ("blue outlined", NamedVariant::BrandOutline),
    ("green", NamedVariant::Success),
    ("red", NamedVariant::Destructive),
    ("red outlined", NamedVariant::DestructiveText),
];

impl NamedVariant {
    /// Resolved style token handed to the renderer.
    pub fn token(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Brand => "brand",
            Self::BrandOutline => "brand-outline",
            Self::Success => "success",
            Self::Destructive => "destructive",
            Self::DestructiveText => "destructive-text",
        }
    }

    /// Look up a variant by user-facing name or resolved token, ignoring case and padding.
    pub fn lookup(input: &str) -> Option<Self> {
        let key = normalize_token(input);
        NAMED_VARIANTS
            .iter()
            .find(|(name, variant)| *name == key || variant.token() == key)
            .map(|(_, variant)| *variant)
    }
}

impl fmt::Display for NamedVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Direction a button tries to move the host flow in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionFamily {
    /// Continue or finish the flow.
    Forward,
    /// Return to the previous step.
    Backward,
}

impl ActionFamily {
    /// Family selected by a button's `isNextAction` flag.
    pub fn from_is_next(is_next_action: bool) -> Self {
        if is_next_action {
            Self::Forward
        } else {
            Self::Backward
        }
    }
}

/// Navigation capabilities a host can declare available, and the signals sent back to it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum NavAction {
    /// Move forward to the next step.
    #[serde(alias = "FORWARD_CONTINUE")]
    Next,
    /// Complete the flow.
    #[serde(alias = "FORWARD_FINISH")]
    Finish,
    /// Return to the previous step.
    #[serde(alias = "BACKWARD")]
    Back,
}

impl NavAction {
    /// Upper-case token used by hosts.
    pub fn token(self) -> &'static str {
        match self {
            Self::Next => "NEXT",
            Self::Finish => "FINISH",
            Self::Back => "BACK",
        }
    }

    /// Family this action belongs to.
    pub fn family(self) -> ActionFamily {
        match self {
            Self::Next | Self::Finish => ActionFamily::Forward,
            Self::Back => ActionFamily::Backward,
        }
    }
}

impl fmt::Display for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for NavAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NEXT" | "FORWARD_CONTINUE" => Ok(Self::Next),
            "FINISH" | "FORWARD_FINISH" => Ok(Self::Finish),
            "BACK" | "BACKWARD" => Ok(Self::Back),
            _ => Err(Error::UnknownAction {
                value: s.to_string(),
            }),
        }
    }
}

/// The set of navigation actions the host currently permits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvailableActions(BTreeSet<NavAction>);

impl AvailableActions {
    /// An empty set: no navigation is permitted.
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether `action` is declared available.
    pub fn contains(&self, action: NavAction) -> bool {
        self.0.contains(&action)
    }

    /// Declare `action` available. Returns true if it was not already present.
    pub fn insert(&mut self, action: NavAction) -> bool {
        self.0.insert(action)
    }

    /// Whether the host permits any action of `family`.
    pub fn permits(&self, family: ActionFamily) -> bool {
        self.iter().any(|action| action.family() == family)
    }

    /// The navigation signal a button of `family` sends on activation, if any.
    ///
    /// Forward buttons prefer `FINISH` over `NEXT`.
    pub fn signal_for(&self, family: ActionFamily) -> Option<NavAction> {
        match family {
            ActionFamily::Forward if self.contains(NavAction::Finish) => Some(NavAction::Finish),
            ActionFamily::Forward if self.contains(NavAction::Next) => Some(NavAction::Next),
            ActionFamily::Forward => None,
            ActionFamily::Backward if self.contains(NavAction::Back) => Some(NavAction::Back),
            ActionFamily::Backward => None,
        }
    }

    /// Iterate the declared actions in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = NavAction> + '_ {
        self.0.iter().copied()
    }

    /// True when no action is available.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<NavAction> for AvailableActions {
    fn from_iter<I: IntoIterator<Item = NavAction>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
