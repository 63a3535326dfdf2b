use super::super::exception::{UnitError, UnitResult};
use super::super::unit::Unit;
use super::super::{Context, RuntimeConfig};

use crate::print::ansi::{NUMBER, RESET};
use crate::print::PrettyPrint;

use std::fmt;

// MARK: Value

/// A magnitude with an optional unit tag.
///
/// A value without a unit is a bare number and adopts the unit of whatever it
/// is combined with. Every operation returns a new value; the unit of an
/// existing value never changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Value {
    magnitude: f64,
    unit: Option<Unit>,
}

impl Value {
    pub const fn new(magnitude: f64, unit: Option<Unit>) -> Self {
        Self { magnitude, unit }
    }

    pub const fn bare(magnitude: f64) -> Self {
        Self::new(magnitude, None)
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn unit(&self) -> Option<Unit> {
        self.unit
    }

    pub fn is_unitless(&self) -> bool {
        self.unit.is_none()
    }

    pub fn with_magnitude(self, magnitude: f64) -> Self {
        Self::new(magnitude, self.unit)
    }

    /// Converts this value into `unit` using the built-in conversion table.
    ///
    /// A unitless value is tagged with `unit` as is.
    pub fn convert_to(&self, unit: Unit) -> UnitResult<Value> {
        Context::new().convert(*self, unit)
    }

    pub fn to_mil(&self) -> UnitResult<Value> {
        self.convert_to(Unit::Mil)
    }

    pub fn to_inch(&self) -> UnitResult<Value> {
        self.convert_to(Unit::Inch)
    }

    pub fn to_mm(&self) -> UnitResult<Value> {
        self.convert_to(Unit::Millimeter)
    }

    pub fn to_cm(&self) -> UnitResult<Value> {
        self.convert_to(Unit::Centimeter)
    }

    pub fn to_deg_c(&self) -> UnitResult<Value> {
        self.convert_to(Unit::Celsius)
    }

    pub fn to_deg_f(&self) -> UnitResult<Value> {
        self.convert_to(Unit::Fahrenheit)
    }

    pub fn to_deg_k(&self) -> UnitResult<Value> {
        self.convert_to(Unit::Kelvin)
    }

    //

    pub fn pos(self) -> Self {
        self
    }

    pub fn abs(self) -> Self {
        self.with_magnitude(self.magnitude.abs())
    }

    /// Two's complement bitwise negation, `-m - 1`. Only integral magnitudes
    /// have a complement.
    pub fn bit_not(self) -> UnitResult<Self> {
        if self.magnitude.fract() != 0.0 || !self.magnitude.is_finite() {
            return Err(UnitError::UnsupportedOperand("complement of a non-integral value"));
        }
        Ok(self.with_magnitude(-self.magnitude - 1.0))
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::bare(0.0)
    }
}

impl From<f64> for Value {
    fn from(magnitude: f64) -> Self {
        Self::bare(magnitude)
    }
}

impl From<i32> for Value {
    fn from(magnitude: i32) -> Self {
        Self::bare(f64::from(magnitude))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Some(unit) => write!(f, "{} {}", self.magnitude, unit),
            None => write!(f, "{}", self.magnitude),
        }
    }
}

impl PrettyPrint<RuntimeConfig> for Value {
    fn pretty_print<Output: std::io::Write>(
        &self,
        out: &mut Output,
        config: &RuntimeConfig,
        level: usize,
    ) -> std::io::Result<()> {
        match config.decimal_places {
            Some(places) => write!(out, "{NUMBER}{:.*}{RESET}", places, self.magnitude)?,
            None => write!(out, "{NUMBER}{}{RESET}", self.magnitude)?,
        }
        if let Some(unit) = &self.unit {
            write!(out, " ")?;
            unit.pretty_print(out, config, level)?;
        }
        Ok(())
    }
}

// MARK: Factories

/// Tags `magnitude` with `unit`.
pub fn make(unit: Unit, magnitude: f64) -> Value {
    unit.of(magnitude)
}

pub fn mil(magnitude: f64) -> Value {
    Unit::Mil.of(magnitude)
}

pub fn inch(magnitude: f64) -> Value {
    Unit::Inch.of(magnitude)
}

pub fn mm(magnitude: f64) -> Value {
    Unit::Millimeter.of(magnitude)
}

pub fn cm(magnitude: f64) -> Value {
    Unit::Centimeter.of(magnitude)
}

pub fn deg_c(magnitude: f64) -> Value {
    Unit::Celsius.of(magnitude)
}

pub fn deg_f(magnitude: f64) -> Value {
    Unit::Fahrenheit.of(magnitude)
}

pub fn deg_k(magnitude: f64) -> Value {
    Unit::Kelvin.of(magnitude)
}
