//! CSS custom properties for the responsive grid.
//!
//! # Design
//! - Explicit columns and auto-fill are mutually exclusive layouts.
//! - Responsive overrides are emitted per breakpoint; the stylesheet picks them up.

use crate::core::breakpoints::{self, Breakpoint};
use std::fmt;

/// Default gap between grid cells.
pub const DEFAULT_GAP: &str = "24px";
/// Default minimum child width for auto-fill layouts.
pub const DEFAULT_MIN_CHILD_WIDTH: &str = "280px";

/// CSS length given as pixels or any raw CSS value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CssLength {
    /// Pixel count.
    Px(u32),
    /// Raw CSS length (`"2rem"`, `"var(--space-4)"`).
    Raw(String),
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{px}px"),
            Self::Raw(raw) => f.write_str(raw),
        }
    }
}

impl From<u32> for CssLength {
    fn from(value: u32) -> Self {
        Self::Px(value)
    }
}

impl From<&str> for CssLength {
    fn from(value: &str) -> Self {
        Self::Raw(value.to_string())
    }
}

/// Per-breakpoint column counts; unset breakpoints inherit from smaller ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResponsiveColumns {
    /// All widths.
    pub base: Option<u16>,
    /// From the `sm` breakpoint.
    pub sm: Option<u16>,
    /// From the `md` breakpoint.
    pub md: Option<u16>,
    /// From the `lg` breakpoint.
    pub lg: Option<u16>,
    /// From the `xl` breakpoint.
    pub xl: Option<u16>,
}

impl ResponsiveColumns {
    fn by_breakpoint(&self) -> [(Breakpoint, Option<u16>); 5] {
        [
            (breakpoints::BASE, self.base),
            (breakpoints::SM, self.sm),
            (breakpoints::MD, self.md),
            (breakpoints::LG, self.lg),
            (breakpoints::XL, self.xl),
        ]
    }
}

/// Column strategy for a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridColumns {
    /// Same column count at every width.
    Fixed(u16),
    /// Column count per breakpoint.
    Responsive(ResponsiveColumns),
}

/// Class suffix and inline style produced for a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridLayout {
    /// `explicit-columns` or `auto-fill-columns`.
    pub class: &'static str,
    /// Inline style with the grid custom properties.
    pub style: String,
}

/// Build the grid custom properties.
///
/// When `columns` is `None` the grid auto-fills using `min_child_width`.
#[must_use]
pub fn grid_layout(
    columns: Option<&GridColumns>,
    gap: &CssLength,
    min_child_width: &CssLength,
) -> GridLayout {
    let mut style = format!("--grid-gap:{gap};");
    let class = match columns {
        Some(GridColumns::Fixed(count)) => {
            style.push_str(&format!("--grid-columns:{count};"));
            "explicit-columns"
        }
        Some(GridColumns::Responsive(responsive)) => {
            for (bp, count) in responsive.by_breakpoint() {
                if let Some(count) = count {
                    style.push_str(&format!("--grid-columns-{}:{count};", bp.name));
                }
            }
            "explicit-columns"
        }
        None => {
            style.push_str(&format!("--grid-min-child-width:{min_child_width};"));
            "auto-fill-columns"
        }
    };
    GridLayout { class, style }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> (CssLength, CssLength) {
        (
            CssLength::from(DEFAULT_GAP),
            CssLength::from(DEFAULT_MIN_CHILD_WIDTH),
        )
    }

    #[test]
    fn auto_fill_uses_min_child_width() {
        let (gap, min) = defaults();
        let layout = grid_layout(None, &gap, &min);
        assert_eq!(layout.class, "auto-fill-columns");
        assert_eq!(layout.style, "--grid-gap:24px;--grid-min-child-width:280px;");
    }

    #[test]
    fn fixed_columns_skip_min_width() {
        let layout = grid_layout(
            Some(&GridColumns::Fixed(3)),
            &CssLength::Px(16),
            &CssLength::Px(100),
        );
        assert_eq!(layout.class, "explicit-columns");
        assert_eq!(layout.style, "--grid-gap:16px;--grid-columns:3;");
    }

    #[test]
    fn responsive_columns_emit_only_set_breakpoints() {
        let (gap, min) = defaults();
        let columns = GridColumns::Responsive(ResponsiveColumns {
            base: Some(2),
            md: Some(4),
            ..ResponsiveColumns::default()
        });
        let layout = grid_layout(Some(&columns), &gap, &min);
        assert_eq!(
            layout.style,
            "--grid-gap:24px;--grid-columns-base:2;--grid-columns-md:4;"
        );
    }
}
