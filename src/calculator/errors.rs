use std::fmt;

use crate::calculator::flags::GatedOperation;

/// Errors the engine can surface. Both are deterministic given the register
/// values; there is no I/O in the core so nothing is retryable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CalcError {
    /// A gated operation was invoked while its legality flag was false,
    /// or a digit outside 0..=9 was appended. The caller is contractually
    /// supposed to consult the flags first, so this is an integration
    /// defect. The operation is aborted with state unchanged.
    PreconditionViolation(String),
    /// An exponent or root index could not be converted to a machine
    /// integer even though the legality flag passed. Unreachable for
    /// BigNatural, where the flag and the conversion are the same
    /// predicate, but defined for any conforming backing.
    RangeViolation(String),
}
impl CalcError {
    pub fn precondition_for(gate: GatedOperation) -> CalcError {
        CalcError::PreconditionViolation(format!(
            "{:?} invoked while its legality flag is false", gate
        ))
    }
    pub fn bad_digit(digit: u8) -> CalcError {
        CalcError::PreconditionViolation(format!(
            "append_digit invoked with digit {} (must be < 10)", digit
        ))
    }
    pub fn unconvertible(gate: GatedOperation) -> CalcError {
        CalcError::RangeViolation(format!(
            "{:?} index does not fit a machine integer", gate
        ))
    }
}
impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::PreconditionViolation(message) => {
                write!(f, "precondition violation: {}", message)
            }
            CalcError::RangeViolation(message) => {
                write!(f, "range violation: {}", message)
            }
        }
    }
}
impl std::error::Error for CalcError {}
