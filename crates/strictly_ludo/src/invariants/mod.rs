//! Properties that hold for every reachable [`GameState`].
//!
//! Each invariant is a zero-sized type implementing [`Invariant`], so a
//! group of them can be checked in one call through [`InvariantSet`].

pub mod coin_occupancy;
pub mod path_symmetry;
pub mod terminal_state;

pub use coin_occupancy::CoinOccupancyInvariant;
pub use path_symmetry::PathSymmetryInvariant;
pub use terminal_state::TerminalStateInvariant;

use crate::state::GameState;
use derive_more::Display;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks the property.
    fn holds(state: &S) -> bool;

    /// Human-readable statement of the property.
    fn description() -> &'static str;
}

/// An invariant that did not hold.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Statement of the violated property.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a violation record.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariants checked together.
pub trait InvariantSet<S> {
    /// Checks every member, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

/// Every Ludo invariant.
pub type LudoInvariants = (
    CoinOccupancyInvariant,
    PathSymmetryInvariant,
    TerminalStateInvariant,
);

/// Checks [`LudoInvariants`] and joins the failures into one message.
pub fn violations_of(state: &GameState) -> Option<String> {
    LudoInvariants::check_all(state).err().map(|violations| {
        violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    })
}
