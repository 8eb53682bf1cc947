//! Edgekit - declarative edge snapping for constraint-based view layout
//!
//! This library attaches one rectangular view to another by naming a
//! symbolic edge combination; a rule resolver expands the combination into a
//! concrete constraint set, and a Cassowary-backed view hierarchy realizes
//! it, tags every constraint with a deterministic identifier, and lets the
//! padding or dimensions be mutated later, optionally animated.
//!
//! # Example
//!
//! ```rust
//! use edgekit::{Insets, Rect, Size, SnapAdaptable, SnapEdges, ViewHierarchy};
//!
//! let mut ui = ViewHierarchy::new();
//! let screen = ui.add_root("Screen", Rect::new(0.0, 0.0, 400.0, 800.0));
//! let banner = ui.create_view("Banner");
//!
//! // Snap to top, left and right; the height comes from the size.
//! ui.add_view(
//!     banner,
//!     screen,
//!     SnapEdges::TopRightLeft,
//!     Insets { top: 20.0, ..Insets::zero() },
//!     Size::new(0.0, 150.0),
//! );
//!
//! assert!(ui.frame(banner).approx_eq(&Rect::new(0.0, 20.0, 400.0, 150.0), 0.001));
//! ```

pub mod animation;
pub mod config;
pub mod layout;
pub mod scene;

pub use animation::{AnimationCurve, AnimationSettings, Completion};
pub use config::{ConfigError, EngineConfig};
pub use layout::{
    identifier, resolve, Anchor, ConstraintSpec, Dimension, Insets, Point, Rect, Side, Size,
    SnapEdges, SolverError, StoredConstraint, ViewHierarchy, ViewId,
};
pub use scene::{Scene, SceneError};

/// Edge-snapping layout capability for any type that exposes a view
/// hierarchy.
///
/// Every method is provided, so a conforming type only supplies
/// [`hierarchy_mut`](SnapAdaptable::hierarchy_mut); `ViewHierarchy` itself
/// conforms. This is the crate's public three-call surface: add a view with
/// a snap combination, then mutate its padding or dimensions by identifier.
pub trait SnapAdaptable {
    /// The hierarchy the provided methods operate on
    fn hierarchy_mut(&mut self) -> &mut ViewHierarchy;

    /// Add `view` as a child of `parent`, snapped to the given edge
    /// combination with per-side padding and an optional fixed size.
    ///
    /// Combinations other than [`SnapEdges::All`] need the width, the
    /// height, or both to carry a real value in `size`; pass
    /// [`Size::zero`] for dimensions determined elsewhere. For combinations
    /// that center an axis, only the `left` and `top` padding fields apply
    /// and act as center offsets.
    fn add_view(
        &mut self,
        view: ViewId,
        parent: ViewId,
        snap_to: SnapEdges,
        padding: Insets,
        size: Size,
    ) {
        self.hierarchy_mut().attach(view, parent, snap_to, padding, size);
    }

    /// Update the padding at the given side of `view`.
    ///
    /// Pass `None` for the settings to animate with the configured defaults,
    /// or settings with a zero duration to apply the change immediately.
    /// The completion fires when the change has settled; it is not invoked
    /// when no constraint matches the side's identifier.
    fn update_padding(
        &mut self,
        side: Side,
        view: ViewId,
        new_value: f64,
        animation: Option<AnimationSettings>,
        completion: Option<Completion>,
    ) {
        self.hierarchy_mut()
            .set_padding(side, view, new_value, animation, completion);
    }

    /// Update the width or height constraint of `view` to `new_value`.
    ///
    /// Same animation and completion behavior as
    /// [`update_padding`](SnapAdaptable::update_padding).
    fn update_dimension(
        &mut self,
        dimension: Dimension,
        view: ViewId,
        new_value: f64,
        animation: Option<AnimationSettings>,
        completion: Option<Completion>,
    ) {
        self.hierarchy_mut()
            .set_dimension(dimension, view, new_value, animation, completion);
    }
}

impl SnapAdaptable for ViewHierarchy {
    fn hierarchy_mut(&mut self) -> &mut ViewHierarchy {
        self
    }
}
