//! Constraint-based view layout
//!
//! This module resolves symbolic snap combinations into constraint sets and
//! realizes them against a Cassowary-backed view hierarchy, producing frames
//! for every attached view.

pub mod hierarchy;
pub mod resolver;
pub mod snap;
pub mod solver;
pub mod types;

pub use hierarchy::{StoredConstraint, ViewHierarchy, ViewId};
pub use resolver::{resolve, ConstraintSpec};
pub use snap::{identifier, Anchor, Dimension, Side, SnapEdges};
pub use solver::SolverError;
pub use types::{Insets, Point, Rect, Size};
