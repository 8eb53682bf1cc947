//! Symbolic layout intents and the constraint identifier convention
//!
//! A [`SnapEdges`] value names which parent edges a view attaches to; the
//! rule resolver expands it into a concrete constraint set. Sides and
//! dimensions key later mutations, and every realized constraint is tagged
//! with an identifier derived from the view kind and the anchor it pins.

use std::fmt;

/// Edge snapping combinations describing where a view sits inside its parent.
///
/// Combinations that leave an axis without two pinned edges call for the
/// matching [`Size`](super::Size) component; passing zero leaves that
/// dimension to other constraints or to the view's intrinsic content size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapEdges {
    /// Snap to top, right, bottom, left sides.
    All,
    /// Snap to top, right and bottom. Width should be provided.
    TopRightBottom,
    /// Snap to top, right and left edges. Height should be provided.
    TopRightLeft,
    /// Snap to top, left and bottom. Width should be provided.
    TopLeftBottom,
    /// Snap to bottom, right and left. Height should be provided.
    BottomRightLeft,
    /// Snap to the top-left corner. Width and height should be provided.
    TopLeft,
    /// Snap to the top-right corner. Width and height should be provided.
    TopRight,
    /// Snap to the bottom-left corner. Width and height should be provided.
    BottomLeft,
    /// Snap to the bottom-right corner. Width and height should be provided.
    BottomRight,
    /// Snap to top and bottom, centered horizontally. Width should be provided.
    TopBottomCenterX,
    /// Snap to top, centered horizontally. Width and height should be provided.
    TopCenterX,
    /// Snap to bottom, centered horizontally. Width and height should be provided.
    BottomCenterX,
    /// Snap to left and right, centered vertically. Height should be provided.
    LeftRightCenterY,
    /// Snap to left, centered vertically. Width and height should be provided.
    LeftCenterY,
    /// Snap to right, centered vertically. Width and height should be provided.
    RightCenterY,
    /// Center both horizontally and vertically. Width and height should be
    /// provided for a complete constraint set.
    CenterXY,
}

impl SnapEdges {
    /// All combinations together with their scene-file names
    pub const NAMED: [(&'static str, SnapEdges); 16] = [
        ("all", SnapEdges::All),
        ("top_right_bottom", SnapEdges::TopRightBottom),
        ("top_right_left", SnapEdges::TopRightLeft),
        ("top_left_bottom", SnapEdges::TopLeftBottom),
        ("bottom_right_left", SnapEdges::BottomRightLeft),
        ("top_left", SnapEdges::TopLeft),
        ("top_right", SnapEdges::TopRight),
        ("bottom_left", SnapEdges::BottomLeft),
        ("bottom_right", SnapEdges::BottomRight),
        ("top_bottom_center_x", SnapEdges::TopBottomCenterX),
        ("top_center_x", SnapEdges::TopCenterX),
        ("bottom_center_x", SnapEdges::BottomCenterX),
        ("left_right_center_y", SnapEdges::LeftRightCenterY),
        ("left_center_y", SnapEdges::LeftCenterY),
        ("right_center_y", SnapEdges::RightCenterY),
        ("center_x_y", SnapEdges::CenterXY),
    ];

    /// Look up a combination by its scene-file name
    pub fn parse(name: &str) -> Option<SnapEdges> {
        Self::NAMED
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, edges)| *edges)
    }

    /// The scene-file name of this combination
    pub fn name(&self) -> &'static str {
        Self::NAMED
            .iter()
            .find(|(_, edges)| edges == self)
            .map(|(name, _)| *name)
            .unwrap_or("all")
    }
}

impl fmt::Display for SnapEdges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the four sides of a view, keying a padding mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// The anchor a padding constraint for this side pins
    pub fn anchor(&self) -> Anchor {
        match self {
            Side::Top => Anchor::Top,
            Side::Bottom => Anchor::Bottom,
            Side::Left => Anchor::Left,
            Side::Right => Anchor::Right,
        }
    }
}

/// Width or height, keying a dimension mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Width,
    Height,
}

impl Dimension {
    /// The anchor a dimension constraint pins
    pub fn anchor(&self) -> Anchor {
        match self {
            Dimension::Width => Anchor::Width,
            Dimension::Height => Anchor::Height,
        }
    }
}

/// The anchor a single constraint pins.
///
/// Edge and center anchors relate a view to its parent's safe content area;
/// width and height fix a dimension with no reference anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Top,
    Left,
    Right,
    Bottom,
    CenterX,
    CenterY,
    Width,
    Height,
}

impl Anchor {
    /// Identifier suffix for this anchor
    pub fn name(&self) -> &'static str {
        match self {
            Anchor::Top => "top",
            Anchor::Left => "left",
            Anchor::Right => "right",
            Anchor::Bottom => "bottom",
            Anchor::CenterX => "centerX",
            Anchor::CenterY => "centerY",
            Anchor::Width => "width",
            Anchor::Height => "height",
        }
    }

    /// Whether this anchor fixes a dimension rather than relating to a parent
    /// anchor. Dimension constraints live in the view's own constraint
    /// collection; all others live in the parent's.
    pub fn is_dimension(&self) -> bool {
        matches!(self, Anchor::Width | Anchor::Height)
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Build the constraint identifier for a view kind and anchor.
///
/// The convention is `<viewKind>_<anchor>`: a stable, reconstructible key
/// rather than a stored handle. Two views of the same kind sharing a parent
/// collide on it; callers are responsible for avoiding that.
pub fn identifier(kind: &str, anchor: Anchor) -> String {
    format!("{}_{}", kind, anchor.name())
}
