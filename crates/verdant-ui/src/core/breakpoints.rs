//! Responsive breakpoints used by grid column overrides.

/// Breakpoint with an inclusive minimum width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    /// Name used in CSS custom property suffixes.
    pub name: &'static str,
    /// Inclusive minimum viewport width in pixels.
    pub min_width: u16,
}

/// Applies from zero width upwards.
pub const BASE: Breakpoint = Breakpoint {
    name: "base",
    min_width: 0,
};
/// Small screens.
pub const SM: Breakpoint = Breakpoint {
    name: "sm",
    min_width: 640,
};
/// Medium screens.
pub const MD: Breakpoint = Breakpoint {
    name: "md",
    min_width: 768,
};
/// Large screens.
pub const LG: Breakpoint = Breakpoint {
    name: "lg",
    min_width: 1024,
};
/// Extra large screens.
pub const XL: Breakpoint = Breakpoint {
    name: "xl",
    min_width: 1280,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_ascend_from_zero() {
        let ordered = [BASE, SM, MD, LG, XL];
        assert_eq!(ordered[0].min_width, 0);
        assert!(ordered.windows(2).all(|pair| pair[0].min_width < pair[1].min_width));
    }
}
