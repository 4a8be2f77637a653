//! Library-wide defaults that applications may override.
//!
//! # Design
//! - Every field has a default so partial JSON documents are accepted.
//! - Validation happens once at load time; widgets trust the values afterwards.

use crate::core::infinite_scroll::{DEFAULT_ROOT_MARGIN, DEFAULT_THRESHOLD, ObserverOptions};
use crate::core::toast::DEFAULT_DURATION_MS;
use crate::error::UiError;
use serde::Deserialize;

/// Default id of the element that hosts portalled overlays.
pub const DEFAULT_PORTAL_ROOT_ID: &str = "portal-root";
/// Image shown by avatars without a source.
pub const DEFAULT_AVATAR_SRC: &str = "/assets/images/default-avatar.svg";
/// Gap between a trigger and its floating panel.
pub const DEFAULT_FLOATING_GAP: f64 = 4.0;

/// Tunables shared by widgets, provided through a Yew context.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Spacing between a trigger and its floating menu.
    pub floating_gap: f64,
    /// Toast lifetime when a toast does not set its own duration.
    pub toast_duration_ms: u32,
    /// Visible ratio of the sentinel that counts as an intersection.
    pub observer_threshold: f64,
    /// CSS margin applied around the observer root.
    pub observer_root_margin: String,
    /// Id of the element that hosts portalled overlays.
    pub portal_root_id: String,
    /// Image used by avatars without a source.
    pub default_avatar_src: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            floating_gap: DEFAULT_FLOATING_GAP,
            toast_duration_ms: DEFAULT_DURATION_MS,
            observer_threshold: DEFAULT_THRESHOLD,
            observer_root_margin: DEFAULT_ROOT_MARGIN.to_string(),
            portal_root_id: DEFAULT_PORTAL_ROOT_ID.to_string(),
            default_avatar_src: DEFAULT_AVATAR_SRC.to_string(),
        }
    }
}

impl UiConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    /// Returns [`UiError::InvalidConfig`] for malformed JSON or unknown keys and
    /// [`UiError::InvalidObserverOptions`] when the observer settings are out of range.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        let config: Self = serde_json::from_str(raw)?;
        config.observer_options()?;
        Ok(config)
    }

    /// Observer options derived from the configured threshold and margin.
    ///
    /// # Errors
    /// Returns [`UiError::InvalidObserverOptions`] when the threshold is outside `0.0..=1.0`.
    pub fn observer_options(&self) -> Result<ObserverOptions, UiError> {
        ObserverOptions::new(self.observer_threshold, &self.observer_root_margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = UiConfig::from_json("{}").expect("defaults");
        assert_eq!(config, UiConfig::default());
        assert!((config.floating_gap - 4.0).abs() < f64::EPSILON);
        assert_eq!(config.toast_duration_ms, 5_000);
        assert_eq!(config.portal_root_id, "portal-root");
    }

    #[test]
    fn partial_document_overrides_selected_fields() {
        let config =
            UiConfig::from_json(r#"{"floating_gap": 8.0, "portal_root_id": "overlays"}"#)
                .expect("parse");
        assert!((config.floating_gap - 8.0).abs() < f64::EPSILON);
        assert_eq!(config.portal_root_id, "overlays");
        assert_eq!(config.observer_root_margin, "0px");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = UiConfig::from_json(r#"{"gap": 2}"#).unwrap_err();
        assert!(matches!(err, UiError::InvalidConfig(_)));
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let err = UiConfig::from_json(r#"{"observer_threshold": 1.5}"#).unwrap_err();
        assert!(matches!(err, UiError::InvalidObserverOptions { .. }));
    }
}
