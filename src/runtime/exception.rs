use super::unit::Unit;

use thiserror::Error;

/// Errors raised by value arithmetic and conversion.
///
/// An operation on two values whose units cannot be reconciled is *not* an
/// error: it resolves to a symbolic [`Expression`](super::Expression). Only
/// the conditions below surface as failures.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum UnitError {
    /// `rhs` cannot be converted into `lhs`, although `lhs` converts into `rhs`
    /// when `reverse_compatible` is set.
    #[error("incompatible units: cannot convert {rhs} to {lhs}")]
    IncompatibleUnits {
        lhs: Unit,
        rhs: Unit,
        reverse_compatible: bool,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("no conversion from {from} to {to}")]
    MissingConversion { from: Unit, to: Unit },

    #[error("unsupported operand: {0}")]
    UnsupportedOperand(&'static str),

    #[error("unknown unit '{0}'")]
    UnknownUnit(String),
}

impl UnitError {
    /// Whether the failed operation would succeed with its operands swapped.
    pub fn is_reverse_compatible(&self) -> bool {
        matches!(
            self,
            UnitError::IncompatibleUnits {
                reverse_compatible: true,
                ..
            }
        )
    }
}

pub type UnitResult<T> = Result<T, UnitError>;
