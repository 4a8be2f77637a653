//! Visual tokens shared by the atoms (sizes, variants, typography).
//!
//! Each token maps to the class suffix the stylesheet defines for it.

/// Size scale used by controls and avatars.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Size {
    /// Extra small.
    Xs,
    /// Small.
    Sm,
    /// Medium.
    #[default]
    Md,
    /// Large.
    Lg,
    /// Extra large.
    Xl,
}

impl Size {
    /// Class suffix (`"md"`).
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// Class with a component prefix (`"size-md"`).
    #[must_use]
    pub fn with_prefix(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }

    /// Avatar edge length in pixels.
    #[must_use]
    pub const fn avatar_px(self) -> u32 {
        match self {
            Self::Xs => 24,
            Self::Sm => 32,
            Self::Md => 40,
            Self::Lg => 48,
            Self::Xl => 160,
        }
    }
}

/// Button look.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled brand color.
    #[default]
    Primary,
    /// Muted fill.
    Secondary,
    /// Border only.
    Outline,
    /// Text only.
    Text,
}

impl ButtonVariant {
    /// Class name for the variant.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Text => "text",
        }
    }
}

/// Element rendered by the text atom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextTag {
    /// `<h1>`.
    H1,
    /// `<h2>`.
    H2,
    /// `<h3>`.
    H3,
    /// `<h4>`.
    H4,
    /// `<h5>`.
    H5,
    /// `<h6>`.
    H6,
    /// `<p>`.
    #[default]
    P,
    /// `<span>`.
    Span,
}

impl TextTag {
    /// HTML tag name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::P => "p",
            Self::Span => "span",
        }
    }
}

/// Font size step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextSize {
    /// Small.
    Sm,
    /// Medium.
    #[default]
    Md,
    /// Large.
    Lg,
    /// Extra large.
    Xl,
    /// 2x large.
    Xl2,
    /// 3x large.
    Xl3,
}

impl TextSize {
    /// Class name.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xl2 => "2xl",
            Self::Xl3 => "3xl",
        }
    }
}

/// Font weight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextWeight {
    /// Light.
    Light,
    /// Normal.
    #[default]
    Normal,
    /// Medium.
    Medium,
    /// Bold.
    Bold,
}

impl TextWeight {
    /// Class name.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Normal => "normal",
            Self::Medium => "medium",
            Self::Bold => "bold",
        }
    }
}

/// Semantic text color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextColor {
    /// Primary text.
    #[default]
    Primary,
    /// Secondary text.
    Secondary,
    /// Disabled text.
    Disabled,
    /// Error text.
    Error,
    /// Success text.
    Success,
}

impl TextColor {
    /// Class name.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Disabled => "disabled",
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

/// Horizontal alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    /// Left.
    #[default]
    Left,
    /// Center.
    Center,
    /// Right.
    Right,
}

impl TextAlign {
    /// Class name.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Maximum width of a text block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MaxWidth {
    /// Fill the container.
    Full,
    /// Shrink to content.
    #[default]
    Fit,
    /// Any CSS length, applied inline.
    Custom(String),
}

impl MaxWidth {
    /// Class for the keyword variants.
    #[must_use]
    pub const fn as_class(&self) -> Option<&'static str> {
        match self {
            Self::Full => Some("full"),
            Self::Fit => Some("fit"),
            Self::Custom(_) => None,
        }
    }

    /// Inline style for custom widths.
    #[must_use]
    pub fn inline_style(&self) -> Option<String> {
        match self {
            Self::Custom(width) => Some(format!("max-width:{width};")),
            Self::Full | Self::Fit => None,
        }
    }
}

/// Card layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardVariant {
    /// Vertical product tile.
    #[default]
    Product,
    /// Horizontal list row.
    ListItem,
    /// Banner with image background.
    Promotion,
}

impl CardVariant {
    /// Class name.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::ListItem => "list-item",
            Self::Promotion => "promotion",
        }
    }
}

/// Skeleton outline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SkeletonShape {
    /// Rectangle.
    #[default]
    Rect,
    /// Circle.
    Circle,
}

impl SkeletonShape {
    /// Class name.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Rect => "rect",
            Self::Circle => "circle",
        }
    }
}

/// Flow direction for grouped controls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Side by side.
    #[default]
    Horizontal,
    /// Stacked.
    Vertical,
}

impl Direction {
    /// Class name.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

/// Build an inline style from optional `property:value` pairs.
#[must_use]
pub fn inline_style<'a, I>(pairs: I) -> Option<String>
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
{
    let style: String = pairs
        .into_iter()
        .filter_map(|(property, value)| value.map(|value| format!("{property}:{value};")))
        .collect();
    (!style.is_empty()).then_some(style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_sizes_match_scale() {
        let sizes: Vec<u32> = [Size::Xs, Size::Sm, Size::Md, Size::Lg, Size::Xl]
            .into_iter()
            .map(Size::avatar_px)
            .collect();
        assert_eq!(sizes, vec![24, 32, 40, 48, 160]);
    }

    #[test]
    fn size_prefix_composes_class() {
        assert_eq!(Size::Lg.with_prefix("size"), "size-lg");
    }

    #[test]
    fn max_width_picks_class_or_style() {
        assert_eq!(MaxWidth::Full.as_class(), Some("full"));
        assert_eq!(MaxWidth::Fit.inline_style(), None);
        let custom = MaxWidth::Custom("32ch".into());
        assert_eq!(custom.as_class(), None);
        assert_eq!(custom.inline_style().as_deref(), Some("max-width:32ch;"));
    }

    #[test]
    fn inline_style_skips_missing_values() {
        assert_eq!(
            inline_style([("width", Some("10px")), ("height", None)]).as_deref(),
            Some("width:10px;")
        );
        assert_eq!(inline_style([("width", None)]), None);
    }

    #[test]
    fn defaults_match_component_defaults() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(TextTag::default().as_str(), "p");
        assert_eq!(CardVariant::default().as_class(), "product");
        assert_eq!(Direction::Vertical.as_class(), "vertical");
    }
}
