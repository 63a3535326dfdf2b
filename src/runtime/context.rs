use super::conversion::{Affine, ConversionTable, CONVERSIONS};
use super::exception::{UnitError, UnitResult};
use super::unit::Unit;
use super::value::{BinOp, Expression, Term, Value};

/// What to do when the right operand cannot be converted into the left
/// operand's unit but the opposite conversion exists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReversePolicy {
    /// Keep the combination as a symbolic expression.
    #[default]
    Symbolic,
    /// Fail with a reverse-compatible [`UnitError::IncompatibleUnits`].
    Error,
    /// Retry commutative operators with the operands swapped; fail otherwise.
    Swap,
}

/// Runtime configuration for arithmetic and display.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuntimeConfig {
    /// Behavior for reverse-only conversions.
    pub reverse_policy: ReversePolicy,
    /// Number of decimal places to display for magnitudes.
    /// If `None`, the number is automatically formatted.
    pub decimal_places: Option<usize>,
}

/// How a binary operation on two values is resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Resolution {
    /// At least one operand is unitless; the result carries `unit`.
    Absorb(Option<Unit>),
    /// Both operands share `unit`.
    SameUnit(Unit),
    /// The right operand is converted from `from` into the left operand's `to`.
    Convert { from: Unit, to: Unit, affine: Affine },
    /// Only the left operand converts into the right operand's unit.
    ReverseOnly { from: Unit, to: Unit, affine: Affine },
    /// No numeric result exists.
    Symbolic,
}

/// The coercion engine: decides and performs binary arithmetic on values.
#[derive(Clone, Debug)]
pub struct Context<'t> {
    pub config: RuntimeConfig,
    table: &'t ConversionTable,
}

impl Context<'static> {
    pub fn new() -> Self {
        Self::with_table(&CONVERSIONS)
    }
}

impl Default for Context<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> Context<'t> {
    pub fn with_table(table: &'t ConversionTable) -> Self {
        Self {
            config: RuntimeConfig::default(),
            table,
        }
    }

    pub fn with_config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn table(&self) -> &'t ConversionTable {
        self.table
    }

    /// Decides how `lhs op rhs` resolves without performing it.
    pub fn resolve(&self, op: BinOp, lhs: &Value, rhs: &Value) -> Resolution {
        match (lhs.unit(), rhs.unit()) {
            (None, unit) | (unit, None) => Resolution::Absorb(unit),
            // no dimensional composition: a product or quotient of two units is never numeric
            (Some(_), Some(_)) if op.is_multiplicative() => Resolution::Symbolic,
            (Some(a), Some(b)) if a == b => Resolution::SameUnit(a),
            (Some(a), Some(b)) => {
                if let Some(affine) = self.table.get(b, a) {
                    Resolution::Convert {
                        from: b,
                        to: a,
                        affine,
                    }
                } else if let Some(affine) = self.table.get(a, b) {
                    Resolution::ReverseOnly {
                        from: a,
                        to: b,
                        affine,
                    }
                } else {
                    Resolution::Symbolic
                }
            }
        }
    }

    /// Evaluates `lhs op rhs`.
    ///
    /// Operand order is kept as given: the right operand is always converted
    /// into the left operand's unit, and a unitless operand adopts the unit of
    /// the other side without changing its position.
    pub fn apply(
        &self,
        op: BinOp,
        lhs: impl Into<Value>,
        rhs: impl Into<Value>,
    ) -> UnitResult<Term> {
        let (lhs, rhs) = (lhs.into(), rhs.into());
        match self.resolve(op, &lhs, &rhs) {
            Resolution::Absorb(unit) => numeric(op, lhs.magnitude(), rhs.magnitude(), unit),
            Resolution::SameUnit(unit) => {
                numeric(op, lhs.magnitude(), rhs.magnitude(), Some(unit))
            }
            Resolution::Convert { to, affine, .. } => {
                numeric(op, lhs.magnitude(), affine.apply(rhs.magnitude()), Some(to))
            }
            Resolution::ReverseOnly { from, to, affine } => match self.config.reverse_policy {
                ReversePolicy::Symbolic => Ok(Expression::new(op, lhs, rhs).into()),
                ReversePolicy::Swap if op.is_commutative() => {
                    numeric(op, rhs.magnitude(), affine.apply(lhs.magnitude()), Some(to))
                }
                ReversePolicy::Swap | ReversePolicy::Error => Err(UnitError::IncompatibleUnits {
                    lhs: from,
                    rhs: to,
                    reverse_compatible: true,
                }),
            },
            Resolution::Symbolic => Ok(Expression::new(op, lhs, rhs).into()),
        }
    }

    /// Evaluates `lhs op rhs` for terms; symbolic terms cannot be operands.
    pub fn apply_terms(&self, op: BinOp, lhs: Term, rhs: Term) -> UnitResult<Term> {
        self.apply(op, Value::try_from(lhs)?, Value::try_from(rhs)?)
    }

    /// Converts `value` into `unit`. A unitless value is tagged as is.
    pub fn convert(&self, value: Value, unit: Unit) -> UnitResult<Value> {
        match value.unit() {
            None => Ok(unit.of(value.magnitude())),
            Some(from) => self
                .table
                .convert(value.magnitude(), from, unit)
                .map(|magnitude| unit.of(magnitude))
                .ok_or(UnitError::MissingConversion { from, to: unit }),
        }
    }
}

fn numeric(op: BinOp, lhs: f64, rhs: f64, unit: Option<Unit>) -> UnitResult<Term> {
    if op == BinOp::Div && rhs == 0.0 {
        return Err(UnitError::DivisionByZero);
    }
    Ok(Value::new(op.apply(lhs, rhs), unit).into())
}
