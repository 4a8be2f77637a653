//! Gate deciding when a visible sentinel should request the next page.
//!
//! # Design
//! - The in-flight flag is owned by the caller; no extra de-duplication happens here.
//! - A disabled gate means "do not observe at all", not "observe and ignore".

use crate::error::UiError;

/// Visible ratio of the sentinel that counts as an intersection.
pub const DEFAULT_THRESHOLD: f64 = 0.1;
/// Margin applied around the observer root.
pub const DEFAULT_ROOT_MARGIN: &str = "0px";

/// Options forwarded to the browser's intersection observer.
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    threshold: f64,
    root_margin: String,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN.to_string(),
        }
    }
}

impl ObserverOptions {
    /// Build validated observer options.
    ///
    /// # Errors
    /// Returns [`UiError::InvalidObserverOptions`] when `threshold` is not within `0.0..=1.0`
    /// or the margin is blank.
    pub fn new(threshold: f64, root_margin: &str) -> Result<Self, UiError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(UiError::InvalidObserverOptions {
                reason: "threshold_out_of_range",
            });
        }
        if root_margin.trim().is_empty() {
            return Err(UiError::InvalidObserverOptions {
                reason: "root_margin_empty",
            });
        }
        Ok(Self {
            threshold,
            root_margin: root_margin.trim().to_string(),
        })
    }

    /// Intersection ratio threshold.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// CSS margin around the root.
    #[must_use]
    pub fn root_margin(&self) -> &str {
        &self.root_margin
    }
}

/// Flags that decide whether the next page may be requested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchGate {
    /// Observation is active at all.
    pub enabled: bool,
    /// More pages exist upstream.
    pub has_next_page: bool,
    /// A page request is already in flight.
    pub is_fetching_next_page: bool,
}

impl FetchGate {
    /// Whether an observer should be attached to the sentinel.
    #[must_use]
    pub const fn should_observe(self) -> bool {
        self.enabled
    }

    /// Whether a single observer callback should trigger a fetch.
    ///
    /// Only the first entry of a callback batch is considered, so one
    /// callback yields at most one fetch.
    #[must_use]
    pub const fn should_fetch(self, first_entry_intersecting: Option<bool>) -> bool {
        matches!(first_entry_intersecting, Some(true))
            && self.enabled
            && self.has_next_page
            && !self.is_fetching_next_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPEN: FetchGate = FetchGate {
        enabled: true,
        has_next_page: true,
        is_fetching_next_page: false,
    };

    #[test]
    fn intersecting_sentinel_fetches_when_open() {
        assert!(OPEN.should_fetch(Some(true)));
    }

    #[test]
    fn non_intersecting_or_missing_entry_does_not_fetch() {
        assert!(!OPEN.should_fetch(Some(false)));
        assert!(!OPEN.should_fetch(None));
    }

    #[test]
    fn each_closed_flag_blocks_fetch() {
        let no_more = FetchGate {
            has_next_page: false,
            ..OPEN
        };
        let in_flight = FetchGate {
            is_fetching_next_page: true,
            ..OPEN
        };
        let disabled = FetchGate {
            enabled: false,
            ..OPEN
        };
        assert!(!no_more.should_fetch(Some(true)));
        assert!(!in_flight.should_fetch(Some(true)));
        assert!(!disabled.should_fetch(Some(true)));
        assert!(!disabled.should_observe());
        assert!(in_flight.should_observe());
    }

    #[test]
    fn options_default_and_validate() {
        let options = ObserverOptions::default();
        assert!((options.threshold() - 0.1).abs() < f64::EPSILON);
        assert_eq!(options.root_margin(), "0px");

        assert!(ObserverOptions::new(1.0, "10px 0px").is_ok());
        assert!(ObserverOptions::new(-0.1, "0px").is_err());
        assert!(ObserverOptions::new(0.5, "  ").is_err());
    }
}
