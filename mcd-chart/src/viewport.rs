use serde::{Deserialize, Serialize};

/// Size of a chart's host container, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Viewport { width, height }
    }

    /// Charts never draw into a zero (or negative, or non-finite) area.
    pub fn is_renderable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Margin {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Horizontal plot range `[left, width - right]`.
    pub fn x_range(&self, size: Viewport) -> (f64, f64) {
        (self.left, size.width - self.right)
    }

    /// Vertical plot range, bottom to top: `[height - bottom, top]`.
    pub fn y_range(&self, size: Viewport) -> (f64, f64) {
        (size.height - self.bottom, self.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sizes_are_not_renderable() {
        assert!(!Viewport::new(0.0, 0.0).is_renderable());
        assert!(!Viewport::new(300.0, 0.0).is_renderable());
        assert!(!Viewport::new(0.0, 300.0).is_renderable());
        assert!(!Viewport::new(f64::NAN, 300.0).is_renderable());
        assert!(Viewport::new(1.0, 1.0).is_renderable());
    }

    #[test]
    fn plot_ranges() {
        let m = Margin::new(40.0, 20.0, 80.0, 60.0);
        let size = Viewport::new(800.0, 400.0);
        assert_eq!(m.x_range(size), (60.0, 780.0));
        assert_eq!(m.y_range(size), (320.0, 40.0));
    }
}
