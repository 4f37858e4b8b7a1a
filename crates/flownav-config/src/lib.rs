//! Decoding, validation, and resolution of flow navigation button configs.
//!
//! A host hands over a JSON-encoded button list, a layout alignment, and the
//! navigation actions it currently permits. [`decode`] reads the list,
//! [`normalize`] validates it and resolves every button into a
//! [`ResolvedButton`], and [`ResolvedButton::activate`] computes what a click
//! reports back through a [`NavigationHost`].
#![allow(missing_docs)]

mod activate;
mod color;
mod config;
mod decode;
mod defaults;
mod error;
mod normalize;
mod raw;
mod style;
mod types;

#[cfg(test)]
mod test_normalize;

pub use activate::{Activation, NavigationHost};
pub use color::HexColor;
pub use config::NavConfig;
pub use decode::{decode, decode_value};
pub use error::{Error, Result};
pub use normalize::{NavBar, ResolvedButton, normalize};
pub use raw::ButtonSpec;
pub use style::{ButtonVariant, synthesize};
pub use types::{
    ActionFamily, AvailableActions, IconAlignment, LayoutAlignment, NamedVariant, NavAction,
};

/// Decode `raw` and resolve it in one step.
pub fn resolve_str(
    raw: &str,
    layout_alignment: &str,
    actions: &AvailableActions,
) -> Result<NavBar> {
    let buttons = decode(raw)?;
    normalize(&buttons, layout_alignment, actions)
}
