//! Constraint solver integration for frame computation
//!
//! Wraps the kasuari Cassowary solver, translating view anchors into solver
//! expressions and keeping the realized constraint handles so a constant can
//! later be swapped without re-deriving the whole system. Frames for views
//! that are not constraint-driven are anchored through edit-variable
//! suggestions.

use std::collections::{HashMap, HashSet};

use kasuari::{
    Constraint, Expression, Solver as KasuariSolver, Strength, Variable as KasuariVariable,
    WeightedRelation::*,
};
use thiserror::Error;

use super::hierarchy::ViewId;
use super::snap::Anchor;
use super::types::Rect;

/// Base solver properties of a view. Centers and trailing edges are derived
/// expressions over these four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    X,
    Y,
    Width,
    Height,
}

impl Property {
    pub const ALL: [Property; 4] = [
        Property::X,
        Property::Y,
        Property::Width,
        Property::Height,
    ];
}

/// A variable in the constraint system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct VarKey {
    view: ViewId,
    property: Property,
}

/// Errors from the constraint solver
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("unsatisfiable constraint: {description}")]
    Unsatisfiable { description: String },

    #[error("duplicate constraint: {description}")]
    Duplicate { description: String },

    #[error("internal solver error: {0}")]
    Internal(String),
}

/// Wrapper around the kasuari solver, keyed by (view, property)
pub struct FrameSolver {
    solver: KasuariSolver,
    variables: HashMap<VarKey, KasuariVariable>,
    values: HashMap<KasuariVariable, f64>,
    edits: HashSet<KasuariVariable>,
}

impl FrameSolver {
    pub fn new() -> Self {
        Self {
            solver: KasuariSolver::new(),
            variables: HashMap::new(),
            values: HashMap::new(),
            edits: HashSet::new(),
        }
    }

    fn base_var(&mut self, view: ViewId, property: Property) -> KasuariVariable {
        let key = VarKey { view, property };
        if let Some(&var) = self.variables.get(&key) {
            var
        } else {
            let var = KasuariVariable::new();
            self.variables.insert(key, var);
            var
        }
    }

    /// Build the solver expression for a view anchor
    fn expression(&mut self, view: ViewId, anchor: Anchor) -> Expression {
        match anchor {
            Anchor::Left => self.base_var(view, Property::X).into(),
            Anchor::Top => self.base_var(view, Property::Y).into(),
            Anchor::Width => self.base_var(view, Property::Width).into(),
            Anchor::Height => self.base_var(view, Property::Height).into(),
            Anchor::Right => {
                let x = self.base_var(view, Property::X);
                let width = self.base_var(view, Property::Width);
                x + width
            }
            Anchor::Bottom => {
                let y = self.base_var(view, Property::Y);
                let height = self.base_var(view, Property::Height);
                y + height
            }
            Anchor::CenterX => {
                let x = self.base_var(view, Property::X);
                let width = self.base_var(view, Property::Width);
                x + width * 0.5
            }
            Anchor::CenterY => {
                let y = self.base_var(view, Property::Y);
                let height = self.base_var(view, Property::Height);
                y + height * 0.5
            }
        }
    }

    fn convert_add_error(e: kasuari::AddConstraintError, description: &str) -> SolverError {
        match e {
            kasuari::AddConstraintError::UnsatisfiableConstraint => SolverError::Unsatisfiable {
                description: description.to_string(),
            },
            kasuari::AddConstraintError::DuplicateConstraint => SolverError::Duplicate {
                description: description.to_string(),
            },
            kasuari::AddConstraintError::InternalSolverError(msg) => {
                SolverError::Internal(format!("{description}: {msg}"))
            }
        }
    }

    /// Activate `view.anchor = reference.reference_anchor + constant`.
    ///
    /// Returns the realized constraint handle so the caller can later remove
    /// it when the constant changes.
    pub fn relate(
        &mut self,
        view: ViewId,
        anchor: Anchor,
        reference: ViewId,
        reference_anchor: Anchor,
        constant: f64,
    ) -> Result<Constraint, SolverError> {
        let lhs = self.expression(view, anchor);
        let rhs = self.expression(reference, reference_anchor);
        let constraint: Constraint = lhs | EQ(Strength::REQUIRED) | rhs + constant;

        let description = format!("{view}.{anchor} = {reference}.{reference_anchor} + {constant}");
        self.solver
            .add_constraint(constraint.clone())
            .map_err(|e| Self::convert_add_error(e, &description))?;
        Ok(constraint)
    }

    /// Activate `view.anchor = constant` (fixed dimensions)
    pub fn fix(
        &mut self,
        view: ViewId,
        anchor: Anchor,
        constant: f64,
    ) -> Result<Constraint, SolverError> {
        let lhs = self.expression(view, anchor);
        let constraint: Constraint = lhs | EQ(Strength::REQUIRED) | constant;

        let description = format!("{view}.{anchor} = {constant}");
        self.solver
            .add_constraint(constraint.clone())
            .map_err(|e| Self::convert_add_error(e, &description))?;
        Ok(constraint)
    }

    /// Deactivate a previously realized constraint
    pub fn unrealize(&mut self, constraint: &Constraint) -> Result<(), SolverError> {
        self.solver
            .remove_constraint(constraint)
            .map_err(|e| SolverError::Internal(format!("failed to remove constraint: {e}")))
    }

    /// Suggest a value for a base property through an edit variable.
    ///
    /// The edit variable is registered on first use with the given strength;
    /// later suggestions reuse it.
    pub fn suggest(
        &mut self,
        view: ViewId,
        property: Property,
        value: f64,
        strength: Strength,
    ) -> Result<(), SolverError> {
        let var = self.base_var(view, property);
        if !self.edits.contains(&var) {
            self.solver
                .add_edit_variable(var, strength)
                .map_err(|e| SolverError::Internal(format!("failed to add edit variable: {e}")))?;
            self.edits.insert(var);
        }
        self.solver
            .suggest_value(var, value)
            .map_err(|e| SolverError::Internal(format!("failed to suggest value: {e}")))
    }

    /// Drop all edit variables registered for a view's base properties.
    ///
    /// Called when a view moves from frame-translation to constraint-driven
    /// layout, so stale suggestions stop competing with real constraints.
    pub fn clear_edits(&mut self, view: ViewId) -> Result<(), SolverError> {
        for property in Property::ALL {
            let key = VarKey { view, property };
            if let Some(&var) = self.variables.get(&key) {
                if self.edits.remove(&var) {
                    self.solver.remove_edit_variable(var).map_err(|e| {
                        SolverError::Internal(format!("failed to remove edit variable: {e}"))
                    })?;
                }
            }
        }
        Ok(())
    }

    /// Pull changed variable values out of the solver
    pub fn refresh(&mut self) {
        for (variable, value) in self.solver.fetch_changes() {
            self.values.insert(*variable, *value);
        }
    }

    /// Current value of a base property (0.0 when never solved)
    pub fn value(&self, view: ViewId, property: Property) -> f64 {
        self.variables
            .get(&VarKey { view, property })
            .and_then(|var| self.values.get(var))
            .copied()
            .unwrap_or(0.0)
    }

    /// Current solved frame of a view
    pub fn frame(&self, view: ViewId) -> Rect {
        Rect::new(
            self.value(view, Property::X),
            self.value(view, Property::Y),
            self.value(view, Property::Width),
            self.value(view, Property::Height),
        )
    }
}

impl Default for FrameSolver {
    fn default() -> Self {
        Self::new()
    }
}
