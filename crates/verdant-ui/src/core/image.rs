//! Load-status tracking and layout options for image boxes.

/// Loading lifecycle of an image element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageStatus {
    /// Request in flight.
    #[default]
    Loading,
    /// Image decoded and displayed.
    Success,
    /// Request failed or no source was given.
    Error,
}

impl ImageStatus {
    /// Status for a freshly assigned `src`; empty sources fail immediately.
    #[must_use]
    pub fn for_source(src: &str) -> Self {
        if src.trim().is_empty() {
            Self::Error
        } else {
            Self::Loading
        }
    }

    /// Value for the `data-status` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Skeleton placeholder is visible.
    #[must_use]
    pub const fn shows_placeholder(self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Fallback content replaces the image.
    #[must_use]
    pub const fn shows_fallback(self) -> bool {
        matches!(self, Self::Error)
    }

    /// Overlay children are visible (only after a successful load).
    #[must_use]
    pub const fn shows_overlay(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// How the box derives its height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageSizing {
    /// Fixed aspect ratio box.
    #[default]
    Ratio,
    /// Natural image height (masonry layouts).
    Natural,
}

/// CSS `object-fit` applied to the image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ObjectFit {
    /// Fill the box, cropping overflow.
    #[default]
    Cover,
    /// Fit inside the box, letterboxing.
    Contain,
}

impl ObjectFit {
    /// CSS keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cover => "cover",
            Self::Contain => "contain",
        }
    }
}

/// Default aspect ratio for ratio-sized boxes.
pub const DEFAULT_ASPECT_RATIO: &str = "1/1";

/// Convert `"16/9"` shorthand into the CSS form `"16 / 9"`.
#[must_use]
pub fn aspect_ratio_css(ratio: &str) -> String {
    ratio.replacen('/', " / ", 1)
}

/// Container style for an image box.
#[must_use]
pub fn container_style(sizing: ImageSizing, aspect_ratio: &str, background: &str) -> String {
    match sizing {
        ImageSizing::Ratio => format!(
            "aspect-ratio:{};background-color:{background};",
            aspect_ratio_css(aspect_ratio)
        ),
        ImageSizing::Natural => format!("background-color:{background};"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_fails_immediately() {
        assert_eq!(ImageStatus::for_source(""), ImageStatus::Error);
        assert_eq!(ImageStatus::for_source("  "), ImageStatus::Error);
        assert_eq!(ImageStatus::for_source("/a.png"), ImageStatus::Loading);
    }

    #[test]
    fn each_status_shows_one_branch() {
        assert!(ImageStatus::Loading.shows_placeholder());
        assert!(!ImageStatus::Loading.shows_overlay());
        assert!(ImageStatus::Error.shows_fallback());
        assert!(!ImageStatus::Error.shows_overlay());
        assert!(ImageStatus::Success.shows_overlay());
        assert!(!ImageStatus::Success.shows_fallback());
    }

    #[test]
    fn ratio_shorthand_is_spaced() {
        assert_eq!(aspect_ratio_css("16/9"), "16 / 9");
        assert_eq!(aspect_ratio_css("auto"), "auto");
    }

    #[test]
    fn masonry_skips_aspect_ratio() {
        assert_eq!(
            container_style(ImageSizing::Ratio, "4/3", "transparent"),
            "aspect-ratio:4 / 3;background-color:transparent;"
        );
        assert_eq!(
            container_style(ImageSizing::Natural, "4/3", "#000"),
            "background-color:#000;"
        );
    }
}
