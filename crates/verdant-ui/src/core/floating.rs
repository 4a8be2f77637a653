//! Placement arithmetic for floating panels anchored to a trigger.
//!
//! # Design
//! - Work on plain rectangles so the math runs without a DOM.
//! - Place below the trigger; flip above only when the panel would overflow the viewport.

/// Coordinate used to park a closed panel outside the visible area.
pub const OFFSCREEN: f64 = -9999.0;

/// Trigger bounds relative to the viewport, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Top edge.
    pub top: f64,
    /// Left edge.
    pub left: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Width of the box.
    pub width: f64,
}

/// Visible viewport height plus the current document scroll offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Inner height of the window.
    pub height: f64,
    /// Horizontal scroll offset.
    pub scroll_x: f64,
    /// Vertical scroll offset.
    pub scroll_y: f64,
}

/// Side of the trigger the panel ended up on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Panel sits under the trigger.
    Below,
    /// Panel was flipped above the trigger.
    Above,
    /// Panel is closed and parked off-screen.
    Hidden,
}

impl Placement {
    /// Class name for side-specific styling.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Below => "placement-below",
            Self::Above => "placement-above",
            Self::Hidden => "placement-hidden",
        }
    }
}

/// Absolute document coordinates for a floating panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingPosition {
    /// Document-relative top coordinate.
    pub top: f64,
    /// Document-relative left coordinate.
    pub left: f64,
    /// Minimum width, matching the trigger.
    pub min_width: f64,
    /// Which side of the trigger was chosen.
    pub placement: Placement,
}

impl Default for FloatingPosition {
    fn default() -> Self {
        Self::hidden()
    }
}

impl FloatingPosition {
    /// Off-screen position used while the panel is closed.
    #[must_use]
    pub const fn hidden() -> Self {
        Self {
            top: OFFSCREEN,
            left: OFFSCREEN,
            min_width: 0.0,
            placement: Placement::Hidden,
        }
    }

    /// Inline style string for the floating element.
    #[must_use]
    pub fn to_style(&self) -> String {
        format!(
            "position:absolute;top:{}px;left:{}px;min-width:{}px;",
            self.top, self.left, self.min_width
        )
    }
}

/// Compute where a panel of `floating_height` should sit relative to `trigger`.
#[must_use]
pub fn compute_position(
    trigger: Rect,
    floating_height: f64,
    viewport: Viewport,
    gap: f64,
) -> FloatingPosition {
    let below = trigger.bottom + viewport.scroll_y + gap;
    let (top, placement) = if below + floating_height > viewport.height + viewport.scroll_y {
        (
            trigger.top + viewport.scroll_y - floating_height - gap,
            Placement::Above,
        )
    } else {
        (below, Placement::Below)
    };

    FloatingPosition {
        top,
        left: trigger.left + viewport.scroll_x,
        min_width: trigger.width,
        placement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAP: f64 = 4.0;

    fn trigger_at(top: f64, height: f64) -> Rect {
        Rect {
            top,
            left: 20.0,
            bottom: top + height,
            width: 120.0,
        }
    }

    fn viewport(height: f64) -> Viewport {
        Viewport {
            height,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }

    #[test]
    fn panel_drops_below_when_it_fits() {
        let pos = compute_position(trigger_at(100.0, 32.0), 200.0, viewport(800.0), GAP);
        assert_eq!(pos.placement, Placement::Below);
        assert!((pos.top - 136.0).abs() < f64::EPSILON);
        assert!((pos.left - 20.0).abs() < f64::EPSILON);
        assert!((pos.min_width - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn panel_flips_above_on_overflow() {
        let trigger = trigger_at(700.0, 32.0);
        let pos = compute_position(trigger, 200.0, viewport(800.0), GAP);
        assert_eq!(pos.placement, Placement::Above);
        assert!((pos.top - (700.0 - 200.0 - GAP)).abs() < f64::EPSILON);
    }

    #[test]
    fn exact_fit_stays_below() {
        // bottom 32 + gap 4 + height 764 == 800
        let pos = compute_position(trigger_at(0.0, 32.0), 764.0, viewport(800.0), GAP);
        assert_eq!(pos.placement, Placement::Below);
    }

    #[test]
    fn scroll_offsets_shift_document_coordinates() {
        let view = Viewport {
            height: 800.0,
            scroll_x: 15.0,
            scroll_y: 1_000.0,
        };
        let pos = compute_position(trigger_at(100.0, 32.0), 200.0, view, GAP);
        assert_eq!(pos.placement, Placement::Below);
        assert!((pos.top - 1_136.0).abs() < f64::EPSILON);
        assert!((pos.left - 35.0).abs() < f64::EPSILON);

        let flipped = compute_position(trigger_at(700.0, 32.0), 200.0, view, GAP);
        assert_eq!(flipped.placement, Placement::Above);
        assert!((flipped.top - 1_496.0).abs() < f64::EPSILON);
    }

    #[test]
    fn hidden_position_renders_offscreen_style() {
        let style = FloatingPosition::hidden().to_style();
        assert_eq!(
            style,
            "position:absolute;top:-9999px;left:-9999px;min-width:0px;"
        );
    }
}
