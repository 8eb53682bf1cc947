//! Rule resolver: expands a snap combination into a concrete constraint set
//!
//! Resolution is a pure table dispatch. Every combination starts from the
//! maximal "all four edges pinned" set; the combination then names the edges
//! to drop and the replacement anchors (width, height, centerX, centerY) to
//! append. Centering both axes is the one special case that discards the
//! edge set wholesale.

use std::fmt;

use super::snap::{identifier, Anchor, SnapEdges};
use super::types::{Insets, Size};

/// One resolved constraint, ready to be realized by the view hierarchy.
///
/// `reference` is the parent anchor the view anchor relates to, or `None`
/// for fixed dimensions. The identifier follows the
/// `<viewKind>_<anchor>` convention and is the key used for later mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintSpec {
    pub anchor: Anchor,
    pub reference: Option<Anchor>,
    pub constant: f64,
    pub identifier: String,
}

impl ConstraintSpec {
    fn edge(kind: &str, anchor: Anchor, constant: f64) -> Self {
        Self {
            anchor,
            reference: Some(anchor),
            constant,
            identifier: identifier(kind, anchor),
        }
    }

    fn fixed(kind: &str, anchor: Anchor, constant: f64) -> Self {
        Self {
            anchor,
            reference: None,
            constant,
            identifier: identifier(kind, anchor),
        }
    }
}

impl fmt::Display for ConstraintSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reference {
            Some(reference) => write!(
                f,
                "{}: {} = parent.{} {} {}",
                self.identifier,
                self.anchor,
                reference,
                if self.constant < 0.0 { "-" } else { "+" },
                self.constant.abs()
            ),
            None => write!(f, "{}: {} = {}", self.identifier, self.anchor, self.constant),
        }
    }
}

/// Resolve a snap combination into its ordered constraint set.
///
/// The result always fully determines the view's frame on both axes, given
/// that the caller supplies the size components the combination documents as
/// required. A zero size component is passed through unvalidated; the frame
/// dimension then falls to whatever else constrains it, which may be nothing.
pub fn resolve(edges: SnapEdges, padding: Insets, size: Size, kind: &str) -> Vec<ConstraintSpec> {
    let mut specs = Vec::with_capacity(4);

    // Default set: all four edges pinned, offset by the matching padding
    // field. Centering both axes swaps the whole set for centers plus fixed
    // dimensions; padding.left/top become the center offsets and the
    // trailing fields are disregarded.
    if edges != SnapEdges::CenterXY {
        specs.push(ConstraintSpec::edge(kind, Anchor::Top, padding.top));
        specs.push(ConstraintSpec::edge(kind, Anchor::Left, padding.left));
        specs.push(ConstraintSpec::edge(kind, Anchor::Right, padding.right));
        specs.push(ConstraintSpec::edge(kind, Anchor::Bottom, padding.bottom));
    } else {
        specs.push(ConstraintSpec::edge(kind, Anchor::CenterX, padding.left));
        specs.push(ConstraintSpec::edge(kind, Anchor::CenterY, padding.top));
        specs.push(ConstraintSpec::fixed(kind, Anchor::Width, size.width));
        specs.push(ConstraintSpec::fixed(kind, Anchor::Height, size.height));
    }

    // Substitution table: drop the edges the combination does not need and
    // append the anchors that re-determine the freed axis. `All` and
    // `CenterXY` are complete already.
    match edges {
        SnapEdges::All | SnapEdges::CenterXY => {}

        SnapEdges::TopRightBottom => {
            drop_anchor(&mut specs, Anchor::Left);
            specs.push(ConstraintSpec::fixed(kind, Anchor::Width, size.width));
        }

        SnapEdges::TopRightLeft => {
            drop_anchor(&mut specs, Anchor::Bottom);
            specs.push(ConstraintSpec::fixed(kind, Anchor::Height, size.height));
        }

        SnapEdges::TopLeftBottom => {
            drop_anchor(&mut specs, Anchor::Right);
            specs.push(ConstraintSpec::fixed(kind, Anchor::Width, size.width));
        }

        SnapEdges::BottomRightLeft => {
            drop_anchor(&mut specs, Anchor::Top);
            specs.push(ConstraintSpec::fixed(kind, Anchor::Height, size.height));
        }

        SnapEdges::TopLeft => {
            drop_anchor(&mut specs, Anchor::Right);
            drop_anchor(&mut specs, Anchor::Bottom);
            specs.push(ConstraintSpec::fixed(kind, Anchor::Width, size.width));
            specs.push(ConstraintSpec::fixed(kind, Anchor::Height, size.height));
        }

        SnapEdges::TopRight => {
            drop_anchor(&mut specs, Anchor::Left);
            drop_anchor(&mut specs, Anchor::Bottom);
            specs.push(ConstraintSpec::fixed(kind, Anchor::Width, size.width));
            specs.push(ConstraintSpec::fixed(kind, Anchor::Height, size.height));
        }

        SnapEdges::BottomLeft => {
            drop_anchor(&mut specs, Anchor::Right);
            drop_anchor(&mut specs, Anchor::Top);
            specs.push(ConstraintSpec::fixed(kind, Anchor::Width, size.width));
            specs.push(ConstraintSpec::fixed(kind, Anchor::Height, size.height));
        }

        SnapEdges::BottomRight => {
            drop_anchor(&mut specs, Anchor::Left);
            drop_anchor(&mut specs, Anchor::Top);
            specs.push(ConstraintSpec::fixed(kind, Anchor::Width, size.width));
            specs.push(ConstraintSpec::fixed(kind, Anchor::Height, size.height));
        }

        SnapEdges::TopBottomCenterX => {
            drop_anchor(&mut specs, Anchor::Left);
            drop_anchor(&mut specs, Anchor::Right);
            specs.push(ConstraintSpec::edge(kind, Anchor::CenterX, padding.left));
            specs.push(ConstraintSpec::fixed(kind, Anchor::Width, size.width));
        }

        SnapEdges::TopCenterX => {
            drop_anchor(&mut specs, Anchor::Left);
            drop_anchor(&mut specs, Anchor::Right);
            drop_anchor(&mut specs, Anchor::Bottom);
            specs.push(ConstraintSpec::edge(kind, Anchor::CenterX, padding.left));
            specs.push(ConstraintSpec::fixed(kind, Anchor::Width, size.width));
            specs.push(ConstraintSpec::fixed(kind, Anchor::Height, size.height));
        }

        SnapEdges::BottomCenterX => {
            drop_anchor(&mut specs, Anchor::Left);
            drop_anchor(&mut specs, Anchor::Right);
            drop_anchor(&mut specs, Anchor::Top);
            specs.push(ConstraintSpec::edge(kind, Anchor::CenterX, padding.left));
            specs.push(ConstraintSpec::fixed(kind, Anchor::Width, size.width));
            specs.push(ConstraintSpec::fixed(kind, Anchor::Height, size.height));
        }

        SnapEdges::LeftRightCenterY => {
            drop_anchor(&mut specs, Anchor::Top);
            drop_anchor(&mut specs, Anchor::Bottom);
            specs.push(ConstraintSpec::edge(kind, Anchor::CenterY, padding.top));
            specs.push(ConstraintSpec::fixed(kind, Anchor::Height, size.height));
        }

        SnapEdges::LeftCenterY => {
            drop_anchor(&mut specs, Anchor::Top);
            drop_anchor(&mut specs, Anchor::Bottom);
            drop_anchor(&mut specs, Anchor::Right);
            specs.push(ConstraintSpec::edge(kind, Anchor::CenterY, padding.top));
            specs.push(ConstraintSpec::fixed(kind, Anchor::Width, size.width));
            specs.push(ConstraintSpec::fixed(kind, Anchor::Height, size.height));
        }

        SnapEdges::RightCenterY => {
            drop_anchor(&mut specs, Anchor::Top);
            drop_anchor(&mut specs, Anchor::Bottom);
            drop_anchor(&mut specs, Anchor::Left);
            specs.push(ConstraintSpec::edge(kind, Anchor::CenterY, padding.top));
            specs.push(ConstraintSpec::fixed(kind, Anchor::Width, size.width));
            specs.push(ConstraintSpec::fixed(kind, Anchor::Height, size.height));
        }
    }

    specs
}

fn drop_anchor(specs: &mut Vec<ConstraintSpec>, anchor: Anchor) {
    specs.retain(|spec| spec.anchor != anchor);
}
