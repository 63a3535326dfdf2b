use super::exception::UnitError;
use super::value::Value;

use crate::print::ansi::{RESET, UNIT};
use crate::print::PrettyPrint;

use phf::phf_map;
use std::fmt;
use std::str::FromStr;

/// The family a unit belongs to. Conversions only exist within a family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    Length,
    Temperature,
}

impl Family {
    pub fn units(self) -> &'static [Unit] {
        match self {
            Family::Length => &[Unit::Mil, Unit::Inch, Unit::Millimeter, Unit::Centimeter],
            Family::Temperature => &[Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Family::Length => "length",
            Family::Temperature => "temperature",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A built-in measurement unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    Mil,
    Inch,
    Millimeter,
    Centimeter,
    Celsius,
    Fahrenheit,
    Kelvin,
}

static SYMBOLS: phf::Map<&'static str, Unit> = phf_map! {
    "mil" => Unit::Mil,
    "mils" => Unit::Mil,
    "in" => Unit::Inch,
    "inch" => Unit::Inch,
    "inches" => Unit::Inch,
    "mm" => Unit::Millimeter,
    "cm" => Unit::Centimeter,
    "degC" => Unit::Celsius,
    "C" => Unit::Celsius,
    "degF" => Unit::Fahrenheit,
    "F" => Unit::Fahrenheit,
    "degK" => Unit::Kelvin,
    "K" => Unit::Kelvin,
};

impl Unit {
    pub const ALL: [Unit; 7] = [
        Unit::Mil,
        Unit::Inch,
        Unit::Millimeter,
        Unit::Centimeter,
        Unit::Celsius,
        Unit::Fahrenheit,
        Unit::Kelvin,
    ];

    pub fn family(self) -> Family {
        match self {
            Unit::Mil | Unit::Inch | Unit::Millimeter | Unit::Centimeter => Family::Length,
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => Family::Temperature,
        }
    }

    /// The canonical symbol used when rendering values.
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Mil => "mil",
            Unit::Inch => "in",
            Unit::Millimeter => "mm",
            Unit::Centimeter => "cm",
            Unit::Celsius => "degC",
            Unit::Fahrenheit => "degF",
            Unit::Kelvin => "degK",
        }
    }

    /// Looks up a unit by its symbol or one of its aliases.
    pub fn from_symbol(symbol: &str) -> Option<Unit> {
        SYMBOLS.get(symbol).copied()
    }

    pub fn is_compatible_with(self, other: Unit) -> bool {
        self.family() == other.family()
    }

    /// Tags `magnitude` with this unit.
    pub fn of(self, magnitude: f64) -> Value {
        Value::new(magnitude, Some(self))
    }

    pub fn one(self) -> Value {
        self.of(1.0)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::from_symbol(s.trim()).ok_or_else(|| UnitError::UnknownUnit(s.to_owned()))
    }
}

impl<Ctx> PrettyPrint<Ctx> for Unit {
    fn pretty_print<Output: std::io::Write>(
        &self,
        out: &mut Output,
        _ctx: &Ctx,
        _level: usize,
    ) -> std::io::Result<()> {
        write!(out, "{UNIT}{}{RESET}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_are_disjoint() {
        for unit in Family::Length.units() {
            assert_eq!(unit.family(), Family::Length);
            assert!(!Family::Temperature.units().contains(unit));
        }
        for unit in Family::Temperature.units() {
            assert_eq!(unit.family(), Family::Temperature);
        }
        assert_eq!(
            Family::Length.units().len() + Family::Temperature.units().len(),
            Unit::ALL.len()
        );
    }

    #[test]
    fn symbols_round_trip() {
        for unit in Unit::ALL {
            assert_eq!(unit.symbol().parse::<Unit>().unwrap(), unit);
        }
    }

    #[test]
    fn aliases() {
        assert_eq!("inch".parse::<Unit>().unwrap(), Unit::Inch);
        assert_eq!("K".parse::<Unit>().unwrap(), Unit::Kelvin);
        assert!(matches!(
            "furlong".parse::<Unit>(),
            Err(UnitError::UnknownUnit(name)) if name == "furlong"
        ));
    }

    #[test]
    fn compatibility_follows_family() {
        assert!(Unit::Mil.is_compatible_with(Unit::Centimeter));
        assert!(Unit::Celsius.is_compatible_with(Unit::Kelvin));
        assert!(!Unit::Inch.is_compatible_with(Unit::Fahrenheit));
    }
}
