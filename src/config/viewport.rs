use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, Size};

/// Width at or above which the taller header is shown.
pub(crate) const HEADER_BREAKPOINT: u32 = 640;
pub(crate) const HEADER_HEIGHT_WIDE: f64 = 56.0;
pub(crate) const HEADER_HEIGHT_NARROW: f64 = 48.0;
/// Gap kept between the header and the first row of tiles.
pub(crate) const HEADER_GAP: f64 = 10.0;
pub(crate) const MARGIN_SIDE: f64 = 15.0;
pub(crate) const MARGIN_BOTTOM: f64 = 10.0;

/// Reserved space around the placement area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Margins {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Gallery margins for a viewport `width`; the top margin tracks the
    /// header, which shrinks below the header breakpoint.
    pub fn for_width(width: u32) -> Self {
        let header = if width >= HEADER_BREAKPOINT {
            HEADER_HEIGHT_WIDE
        } else {
            HEADER_HEIGHT_NARROW
        };
        Self::new(MARGIN_SIDE, MARGIN_SIDE, header + HEADER_GAP, MARGIN_BOTTOM)
    }
}

/// Viewport dimensions read once per layout call, plus its margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    pub size: Size,
    pub margins: Margins,
}

impl ViewportConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            margins: Margins::for_width(width),
        }
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn width(&self) -> f64 {
        self.size.width as f64
    }

    pub fn height(&self) -> f64 {
        self.size.height as f64
    }

    pub fn available_width(&self) -> f64 {
        (self.width() - self.margins.left - self.margins.right).max(0.0)
    }

    pub fn available_height(&self) -> f64 {
        (self.height() - self.margins.top - self.margins.bottom).max(0.0)
    }

    /// The region tiles are laid out in: viewport minus margins.
    pub fn placement_area(&self) -> Rect {
        Rect::new(
            self.margins.left,
            self.margins.top,
            self.available_width(),
            self.available_height(),
        )
    }

    /// Largest legal `x` for a tile of side `size`.
    pub fn max_x(&self, size: f64) -> f64 {
        self.width() - self.margins.right - size
    }

    /// Largest legal `y` for a tile of side `size`.
    pub fn max_y(&self, size: f64) -> f64 {
        self.height() - self.margins.bottom - size
    }

    /// True when the viewport is narrow enough that the scatter gives way
    /// to a plain list.
    pub fn is_compact(&self, breakpoint: u32) -> bool {
        self.size.width <= breakpoint
    }
}

impl From<Size> for ViewportConfig {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_viewport_uses_tall_header() {
        let viewport = ViewportConfig::new(1920, 1080);
        assert_eq!(viewport.margins.top, 66.0);
        assert_eq!(viewport.available_width(), 1890.0);
        assert_eq!(viewport.available_height(), 1004.0);
    }

    #[test]
    fn narrow_viewport_uses_short_header() {
        let viewport = ViewportConfig::new(320, 480);
        assert_eq!(viewport.margins.top, 58.0);
        assert_eq!(viewport.available_height(), 412.0);
        assert_eq!(ViewportConfig::new(640, 480).margins.top, 66.0);
    }

    #[test]
    fn available_space_never_negative() {
        let viewport = ViewportConfig::new(10, 20);
        assert_eq!(viewport.available_width(), 0.0);
        assert_eq!(viewport.available_height(), 0.0);
    }

    #[test]
    fn compact_breakpoint_is_inclusive() {
        assert!(ViewportConfig::new(1024, 768).is_compact(1024));
        assert!(!ViewportConfig::new(1025, 768).is_compact(1024));
    }

    #[test]
    fn custom_margins_override_breakpoint_rule() {
        let viewport =
            ViewportConfig::new(800, 600).with_margins(Margins::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(viewport.placement_area(), Rect::new(0.0, 0.0, 800.0, 600.0));
        assert_eq!(viewport.max_x(100.0), 700.0);
    }
}
