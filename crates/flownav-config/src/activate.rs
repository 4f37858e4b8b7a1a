//! Button activation: what a click reports back to the host.

use serde::Serialize;
use tracing::debug;

use crate::{ActionFamily, AvailableActions, NavAction, ResolvedButton};

/// Receiver for the notifications produced by a button activation.
pub trait NavigationHost {
    /// The user picked a button; `output_value` is its resolved output value.
    fn value_changed(&mut self, output_value: &str);

    /// Ask the host to navigate.
    fn navigate(&mut self, action: NavAction);
}

/// Outcome of activating a button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activation {
    /// Value reported through [`NavigationHost::value_changed`].
    pub output_value: String,
    /// Navigation signal, when the host permits the button's action family.
    pub navigation: Option<NavAction>,
}

impl Activation {
    /// Deliver this activation to `host`: any navigation first, then the value change.
    pub fn dispatch<H: NavigationHost + ?Sized>(&self, host: &mut H) {
        if let Some(action) = self.navigation {
            host.navigate(action);
        }
        host.value_changed(&self.output_value);
    }
}

impl ResolvedButton {
    /// Action family this button belongs to.
    pub fn family(&self) -> ActionFamily {
        ActionFamily::from_is_next(self.is_next_action)
    }

    /// Compute what activating this button does under the host's current `actions`.
    pub fn activate(&self, actions: &AvailableActions) -> Activation {
        let navigation = actions.signal_for(self.family());
        debug!(
            target: "flownav_config::activate",
            label = %self.label,
            output_value = %self.output_value,
            navigation = ?navigation,
            "button activated"
        );
        Activation {
            output_value: self.output_value.clone(),
            navigation,
        }
    }
}
