//! Error types surfaced by the component library.

use crate::core::control::ControlMode;
use thiserror::Error;

/// Primary error type for library configuration and widget wiring.
#[derive(Debug, Error)]
pub enum UiError {
    /// A widget changed between controlled and uncontrolled operation after first render.
    #[error("{widget} switched from {from} to {to} mode")]
    ModeSwitched {
        /// Display name of the widget that observed the switch.
        widget: &'static str,
        /// Mode pinned at first render.
        from: ControlMode,
        /// Mode requested by the current props.
        to: ControlMode,
    },
    /// Configuration JSON could not be parsed.
    #[error("invalid ui configuration")]
    InvalidConfig(#[from] serde_json::Error),
    /// Intersection observer options were out of range.
    #[error("invalid observer options: {reason}")]
    InvalidObserverOptions {
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_switch_message_names_both_modes() {
        let err = UiError::ModeSwitched {
            widget: "Dialog",
            from: ControlMode::Controlled,
            to: ControlMode::Uncontrolled,
        };
        assert_eq!(
            err.to_string(),
            "Dialog switched from controlled to uncontrolled mode"
        );
    }

    #[test]
    fn observer_reason_is_reported() {
        let err = UiError::InvalidObserverOptions {
            reason: "threshold_out_of_range",
        };
        assert!(err.to_string().ends_with("threshold_out_of_range"));
    }
}
