//! Consistency checks for the packed state word.
//!
//! Every word the engine produces passes these checks. Words arriving from
//! outside (load, serde, `TryFrom<u32>`) are rejected when one fails, and
//! debug builds re-check the word after every move.

/// A property of a state word, checked when a word is loaded.
pub trait Invariant<S> {
    /// Whether `state` has the property.
    fn holds(state: &S) -> bool;

    /// Message reported in [`MalformedStateError`](crate::MalformedStateError)
    /// when the property is missing.
    fn description() -> &'static str;
}

/// One failed check, carried into the load error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Message of the failed check.
    pub description: String,
}

impl InvariantViolation {
    /// Wraps a failed check's message.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several checks run as one, collecting every failure.
///
/// Implemented for tuples of two to six invariants.
pub trait InvariantSet<S> {
    /// Runs each check in tuple order; the error lists all that failed.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);
impl_invariant_set!(I1, I2, I3, I4, I5, I6);

pub mod balanced_occupancy;
pub mod exclusive_occupancy;
pub mod flags_consistent;
pub mod turn_consistent;
pub mod undecided;
pub mod union_consistent;

pub use balanced_occupancy::BalancedOccupancyInvariant;
pub use exclusive_occupancy::ExclusiveOccupancyInvariant;
pub use flags_consistent::FlagsConsistentInvariant;
pub use turn_consistent::TurnConsistentInvariant;
pub use undecided::UndecidedInvariant;
pub use union_consistent::UnionConsistentInvariant;

/// Every check a loadable word must pass.
pub type StateInvariants = (
    ExclusiveOccupancyInvariant,
    UnionConsistentInvariant,
    FlagsConsistentInvariant,
    BalancedOccupancyInvariant,
    TurnConsistentInvariant,
    UndecidedInvariant,
);
