//! Geometry primitives for the view hierarchy

use serde::Deserialize;

/// A 2D point in the coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
///
/// A zero component means "not constrained by this call": the dimension is
/// left to other constraints or to the view's intrinsic content size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A size with both components zero
    pub fn zero() -> Self {
        Self::default()
    }
}

/// A view's frame: origin plus extent
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A zero-sized rect at the origin
    pub fn zero() -> Self {
        Self::default()
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the rect
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Componentwise linear interpolation from `self` toward `other`
    pub fn lerp(&self, other: &Rect, t: f64) -> Rect {
        Rect {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            width: self.width + (other.width - self.width) * t,
            height: self.height + (other.height - self.height) * t,
        }
    }

    /// Componentwise comparison within a tolerance
    pub fn approx_eq(&self, other: &Rect, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.width - other.width).abs() <= tolerance
            && (self.height - other.height).abs() <= tolerance
    }
}

/// Signed per-side offsets relative to a parent's safe content area.
///
/// Used both as padding (raw signed offsets: the constant is added to the
/// parent's edge, so pulling a view inward on the right or bottom side takes
/// a negative value) and as safe-area insets (all-positive, one inset per
/// side).
///
/// For centering combinations only `left` and `top` are meaningful: they are
/// reinterpreted as horizontal/vertical center offsets, positive left shifting
/// right and positive top shifting down.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Insets {
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Insets with all sides zero
    pub fn zero() -> Self {
        Self::default()
    }

    /// Uniform padding on every side.
    ///
    /// Bottom and right are negated so that a positive `value` pulls the view
    /// inward on all four sides.
    pub fn all(value: f64) -> Self {
        Self {
            top: value,
            left: value,
            bottom: -value,
            right: -value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 70.0);
    }

    #[test]
    fn test_rect_center() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let center = rect.center();
        assert_eq!(center.x, 50.0);
        assert_eq!(center.y, 25.0);
    }

    #[test]
    fn test_rect_lerp() {
        let from = Rect::new(0.0, 0.0, 100.0, 100.0);
        let to = Rect::new(10.0, 20.0, 200.0, 300.0);

        assert_eq!(from.lerp(&to, 0.0), from);
        assert_eq!(from.lerp(&to, 1.0), to);

        let mid = from.lerp(&to, 0.5);
        assert_eq!(mid, Rect::new(5.0, 10.0, 150.0, 200.0));
    }

    #[test]
    fn test_rect_approx_eq() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(0.0005, 0.0, 100.0, 99.9995);
        assert!(a.approx_eq(&b, 0.001));
        assert!(!a.approx_eq(&b, 0.0001));
    }

    #[test]
    fn test_insets_all_negates_trailing_sides() {
        let insets = Insets::all(20.0);
        assert_eq!(insets.top, 20.0);
        assert_eq!(insets.left, 20.0);
        assert_eq!(insets.bottom, -20.0);
        assert_eq!(insets.right, -20.0);
    }

    #[test]
    fn test_size_zero_is_default() {
        assert_eq!(Size::zero(), Size::default());
        assert_eq!(Size::new(0.0, 0.0), Size::zero());
    }
}
