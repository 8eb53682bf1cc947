//! View hierarchy and constraint store
//!
//! The hierarchy owns the views, realizes resolved constraint specs against
//! the frame solver, and re-discovers constraints by identifier when a
//! padding or dimension value changes. Mutations never return errors: a
//! missing parent is a documented no-op, a missing identifier emits a
//! diagnostic through the log sink, and an unsatisfiable activation is an
//! engine-level fault report rather than a caller error.

use std::fmt;
use std::time::Duration;

use kasuari::Strength;
use log::{debug, warn};

use crate::animation::{AnimationSettings, Animator, Completion, Transition};
use crate::config::EngineConfig;

use super::resolver::{resolve, ConstraintSpec};
use super::snap::{identifier, Anchor, Dimension, Side, SnapEdges};
use super::solver::{FrameSolver, Property};
use super::types::{Insets, Rect, Size};

/// Handle to a view inside a [`ViewHierarchy`].
///
/// Ids are arena indices and are only meaningful for the hierarchy that
/// created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(pub(crate) usize);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

/// A realized constraint in a view's constraint collection.
///
/// `constant` is the caller-facing offset (padding value, center offset or
/// fixed dimension); safe-area adjustments are applied at realization time
/// and never stored.
pub struct StoredConstraint {
    pub identifier: String,
    pub anchor: Anchor,
    pub constant: f64,
    handle: kasuari::Constraint,
}

struct View {
    kind: String,
    parent: Option<ViewId>,
    children: Vec<ViewId>,
    /// Presented frame; target frames live in the solver.
    frame: Rect,
    /// While true the view's frame is suggested into the solver instead of
    /// being constraint-driven. Attaching a view turns this off.
    translates_frame: bool,
    safe_area: Insets,
    intrinsic_size: Option<Size>,
    constraints: Vec<StoredConstraint>,
}

/// Tree of views plus the constraint engine that lays them out.
///
/// Single-threaded by construction: every operation takes `&mut self` and
/// nothing blocks. Animated settles are driven cooperatively through
/// [`advance`](ViewHierarchy::advance).
pub struct ViewHierarchy {
    views: Vec<View>,
    solver: FrameSolver,
    animator: Animator,
    config: EngineConfig,
}

impl ViewHierarchy {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            views: Vec::new(),
            solver: FrameSolver::new(),
            animator: Animator::new(),
            config,
        }
    }

    /// Create a detached view of the given kind.
    ///
    /// The kind is the view's type name for identifier purposes; two views of
    /// the same kind under one parent collide on identifiers.
    pub fn create_view(&mut self, kind: impl Into<String>) -> ViewId {
        let id = ViewId(self.views.len());
        self.views.push(View {
            kind: kind.into(),
            parent: None,
            children: Vec::new(),
            frame: Rect::zero(),
            translates_frame: true,
            safe_area: Insets::zero(),
            intrinsic_size: None,
            constraints: Vec::new(),
        });
        id
    }

    /// Create a root view with a fixed frame and the configured safe area
    pub fn add_root(&mut self, kind: impl Into<String>, frame: Rect) -> ViewId {
        let view = self.create_view(kind);
        self.views[view.0].safe_area = self.config.safe_area;
        self.set_frame(view, frame);
        view
    }

    pub fn kind(&self, view: ViewId) -> &str {
        &self.views[view.0].kind
    }

    pub fn parent(&self, view: ViewId) -> Option<ViewId> {
        self.views[view.0].parent
    }

    pub fn children(&self, view: ViewId) -> &[ViewId] {
        &self.views[view.0].children
    }

    /// The view's presented frame
    pub fn frame(&self, view: ViewId) -> Rect {
        self.views[view.0].frame
    }

    /// The view's constraint collection (dimension constraints only; edge and
    /// center constraints live in the parent's collection)
    pub fn constraints(&self, view: ViewId) -> &[StoredConstraint] {
        &self.views[view.0].constraints
    }

    /// Set a view's frame directly.
    ///
    /// Only meaningful while the view translates its frame into the solver
    /// (roots, or views not yet attached); constraint-driven views get their
    /// frames from layout passes.
    pub fn set_frame(&mut self, view: ViewId, frame: Rect) {
        self.views[view.0].frame = frame;
        if self.views[view.0].translates_frame {
            let suggestions = [
                (Property::X, frame.x),
                (Property::Y, frame.y),
                (Property::Width, frame.width),
                (Property::Height, frame.height),
            ];
            for (property, value) in suggestions {
                if let Err(e) = self.solver.suggest(view, property, value, Strength::STRONG) {
                    warn!("unable to anchor frame of {view}: {e}");
                }
            }
            self.layout_if_needed();
        }
    }

    /// Set the safe-area insets carved out of this view's content area when
    /// it acts as a parent. All-positive, one inset per side.
    pub fn set_safe_area(&mut self, view: ViewId, insets: Insets) {
        self.views[view.0].safe_area = insets;
    }

    /// Declare the size this view's content wants.
    ///
    /// Fed to the solver as weak suggestions, so it yields to any explicit
    /// constraint but rescues dimensions nothing else determines.
    pub fn set_intrinsic_size(&mut self, view: ViewId, size: Size) {
        self.views[view.0].intrinsic_size = Some(size);
        if !self.views[view.0].translates_frame {
            self.suggest_intrinsic(view);
            self.layout_if_needed();
        }
    }

    fn suggest_intrinsic(&mut self, view: ViewId) {
        if let Some(size) = self.views[view.0].intrinsic_size {
            let suggestions = [
                (Property::Width, size.width),
                (Property::Height, size.height),
            ];
            for (property, value) in suggestions {
                if let Err(e) = self.solver.suggest(view, property, value, Strength::WEAK) {
                    warn!("unable to suggest intrinsic size of {view}: {e}");
                }
            }
        }
    }

    /// Insert `view` into `parent` and activate the constraint set resolved
    /// from the snap combination.
    ///
    /// Frame translation is disabled for the view, every realized constraint
    /// is tagged with its `<kind>_<anchor>` identifier, and the whole set is
    /// activated in one pass. A constraint the engine cannot satisfy is
    /// reported through the log sink and skipped; the call itself never
    /// fails.
    ///
    /// Calling this twice for the same view does not deduplicate: the second
    /// set piles onto the first, and conflicting constants surface as engine
    /// fault reports.
    pub fn attach(
        &mut self,
        view: ViewId,
        parent: ViewId,
        edges: SnapEdges,
        padding: Insets,
        size: Size,
    ) {
        self.reparent(view, parent);
        self.views[view.0].translates_frame = false;
        if let Err(e) = self.solver.clear_edits(view) {
            warn!("unable to release frame anchors of {view}: {e}");
        }
        self.suggest_intrinsic(view);

        let kind = self.views[view.0].kind.clone();
        let safe_area = self.views[parent.0].safe_area;
        for spec in resolve(edges, padding, size, &kind) {
            self.activate(view, parent, safe_area, spec);
        }
        self.layout_if_needed();
        debug!("attached {kind} ({view}) to {} snapping {edges}", parent);
    }

    fn reparent(&mut self, view: ViewId, parent: ViewId) {
        if let Some(old_parent) = self.views[view.0].parent {
            self.views[old_parent.0].children.retain(|child| *child != view);
        }
        self.views[view.0].parent = Some(parent);
        self.views[parent.0].children.push(view);
    }

    fn activate(&mut self, view: ViewId, parent: ViewId, safe_area: Insets, spec: ConstraintSpec) {
        let realized = match spec.reference {
            Some(reference) => self.solver.relate(
                view,
                spec.anchor,
                parent,
                reference,
                safe_adjustment(safe_area, reference) + spec.constant,
            ),
            None => {
                // A zero size component means "not constrained by this call":
                // the dimension is left to other constraints or to intrinsic
                // content, so no constraint is realized or stored for it.
                if spec.constant == 0.0 {
                    return;
                }
                self.solver.fix(view, spec.anchor, spec.constant)
            }
        };
        match realized {
            Ok(handle) => {
                let owner = if spec.anchor.is_dimension() { view } else { parent };
                self.views[owner.0].constraints.push(StoredConstraint {
                    identifier: spec.identifier,
                    anchor: spec.anchor,
                    constant: spec.constant,
                    handle,
                });
            }
            Err(e) => warn!("unable to activate `{}`: {e}", spec.identifier),
        }
    }

    /// Change the padding at one side of an attached view.
    ///
    /// The constraint is looked up by `<kind>_<side>` in the parent's
    /// collection. A view without a parent is a silent no-op; a missing
    /// identifier emits a diagnostic and leaves every constraint untouched
    /// (the completion is not invoked in that case). With no settings given
    /// the configured defaults apply; a zero duration applies the change in
    /// the same pass and fires the completion immediately after it.
    pub fn set_padding(
        &mut self,
        side: Side,
        view: ViewId,
        new_value: f64,
        animation: Option<AnimationSettings>,
        completion: Option<Completion>,
    ) {
        let Some(parent) = self.views[view.0].parent else {
            return;
        };
        let identifier = identifier(&self.views[view.0].kind, side.anchor());
        self.mutate_constant(parent, view, &identifier, new_value, animation, completion);
    }

    /// Change the width or height constraint of an attached view.
    ///
    /// Same protocol as [`set_padding`](ViewHierarchy::set_padding), except
    /// the identifier is `<kind>_<dimension>` and the search runs over the
    /// view's own constraint collection, since dimension constraints are
    /// owned by the view rather than its parent.
    pub fn set_dimension(
        &mut self,
        dimension: Dimension,
        view: ViewId,
        new_value: f64,
        animation: Option<AnimationSettings>,
        completion: Option<Completion>,
    ) {
        if self.views[view.0].parent.is_none() {
            return;
        }
        let identifier = identifier(&self.views[view.0].kind, dimension.anchor());
        self.mutate_constant(view, view, &identifier, new_value, animation, completion);
    }

    /// Swap the constant of the constraint tagged `identifier` in `owner`'s
    /// collection, then run a layout pass.
    fn mutate_constant(
        &mut self,
        owner: ViewId,
        view: ViewId,
        identifier: &str,
        new_value: f64,
        animation: Option<AnimationSettings>,
        completion: Option<Completion>,
    ) {
        let Some(index) = self.views[owner.0]
            .constraints
            .iter()
            .position(|constraint| constraint.identifier == identifier)
        else {
            warn!("no constraint found for identifier `{identifier}`");
            return;
        };

        let anchor = self.views[owner.0].constraints[index].anchor;
        let handle = self.views[owner.0].constraints[index].handle.clone();
        if let Err(e) = self.solver.unrealize(&handle) {
            warn!("unable to deactivate `{identifier}`: {e}");
            return;
        }

        // Constants are immutable inside the solver, so mutation re-realizes
        // the constraint with the same anchors and the new constant.
        let realized = if anchor.is_dimension() {
            self.solver.fix(view, anchor, new_value)
        } else {
            let safe_area = self.views[owner.0].safe_area;
            self.solver.relate(
                view,
                anchor,
                owner,
                anchor,
                safe_adjustment(safe_area, anchor) + new_value,
            )
        };
        match realized {
            Ok(handle) => {
                let stored = &mut self.views[owner.0].constraints[index];
                stored.handle = handle;
                stored.constant = new_value;
            }
            Err(e) => {
                warn!("unable to reactivate `{identifier}`: {e}");
                self.views[owner.0].constraints.remove(index);
            }
        }

        self.run_layout_pass(animation, completion);
    }

    /// Solve and apply frames immediately, with no animation
    pub fn layout_if_needed(&mut self) {
        self.solver.refresh();
        self.apply_solved_frames();
    }

    fn apply_solved_frames(&mut self) {
        for index in 0..self.views.len() {
            if self.views[index].translates_frame || self.views[index].parent.is_none() {
                continue;
            }
            self.views[index].frame = self.solver.frame(ViewId(index));
        }
    }

    fn run_layout_pass(&mut self, animation: Option<AnimationSettings>, completion: Option<Completion>) {
        let settings = animation.unwrap_or(self.config.default_animation);
        self.solver.refresh();

        if !settings.animates() {
            self.apply_solved_frames();
            if let Some(completion) = completion {
                completion();
            }
            return;
        }

        let mut transition = Transition::new(settings, completion);
        for index in 0..self.views.len() {
            if self.views[index].translates_frame || self.views[index].parent.is_none() {
                continue;
            }
            let view = ViewId(index);
            let current = self.views[index].frame;
            let target = self.solver.frame(view);
            if !current.approx_eq(&target, 1e-9) {
                transition.push_frame(view, current, target);
            }
        }
        self.animator.begin(transition);
    }

    /// Step in-flight transitions by `dt`, updating presented frames and
    /// firing completions that became due
    pub fn advance(&mut self, dt: Duration) {
        let (updates, completions) = self.animator.advance(dt.as_secs_f64());
        for (view, frame) in updates {
            self.views[view.0].frame = frame;
        }
        for completion in completions {
            completion();
        }
    }

    /// Whether any animated transition is still in flight
    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }
}

impl Default for ViewHierarchy {
    fn default() -> Self {
        Self::new()
    }
}

/// Offset that moves a parent anchor onto the edge of its safe content area
fn safe_adjustment(safe_area: Insets, anchor: Anchor) -> f64 {
    match anchor {
        Anchor::Top => safe_area.top,
        Anchor::Left => safe_area.left,
        Anchor::Right => -safe_area.right,
        Anchor::Bottom => -safe_area.bottom,
        Anchor::CenterX => (safe_area.left - safe_area.right) / 2.0,
        Anchor::CenterY => (safe_area.top - safe_area.bottom) / 2.0,
        Anchor::Width | Anchor::Height => 0.0,
    }
}
