use super::unit::{Family, Unit};

use static_init::dynamic;
use std::collections::HashMap;
use std::fmt;

/// The process-wide table of built-in conversions.
#[dynamic]
pub static CONVERSIONS: ConversionTable = ConversionTable::builtin();

/// An affine transform `x * scale + offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine {
    pub scale: f64,
    pub offset: f64,
}

impl Affine {
    pub const IDENTITY: Affine = Affine::new(1.0, 0.0);

    pub const fn new(scale: f64, offset: f64) -> Self {
        Self { scale, offset }
    }

    pub const fn scale(scale: f64) -> Self {
        Self::new(scale, 0.0)
    }

    pub fn apply(&self, x: f64) -> f64 {
        x * self.scale + self.offset
    }

    pub fn is_linear(&self) -> bool {
        self.offset == 0.0
    }
}

impl fmt::Display for Affine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_linear() {
            write!(f, "x * {}", self.scale)
        } else if self.offset < 0.0 {
            write!(f, "x * {} - {}", self.scale, -self.offset)
        } else {
            write!(f, "x * {} + {}", self.scale, self.offset)
        }
    }
}

/// A mapping from ordered `(from, to)` unit pairs to the transform converting
/// a magnitude in `from` into `to`. A missing pair means no conversion exists.
#[derive(Clone, Debug, Default)]
pub struct ConversionTable {
    entries: HashMap<(Unit, Unit), Affine>,
}

impl ConversionTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in table covering every ordered pair within each family.
    pub fn builtin() -> Self {
        use Unit::*;

        let c_to_f = 9.0 / 5.0;
        let f_to_c = 5.0 / 9.0;

        #[rustfmt::skip]
        let rows: [(Unit, Unit, Affine); 25] = [
            (Mil, Mil, Affine::IDENTITY),
            (Mil, Inch, Affine::scale(0.001)),
            (Mil, Millimeter, Affine::scale(0.0254)),
            (Mil, Centimeter, Affine::scale(0.00254)),

            (Inch, Mil, Affine::scale(1000.0)),
            (Inch, Inch, Affine::IDENTITY),
            (Inch, Millimeter, Affine::scale(25.4)),
            (Inch, Centimeter, Affine::scale(2.54)),

            (Millimeter, Mil, Affine::scale(1.0 / 0.0254)),
            (Millimeter, Inch, Affine::scale(1.0 / 25.4)),
            (Millimeter, Millimeter, Affine::IDENTITY),
            (Millimeter, Centimeter, Affine::scale(0.1)),

            (Centimeter, Mil, Affine::scale(1.0 / 0.00254)),
            (Centimeter, Inch, Affine::scale(1.0 / 2.54)),
            (Centimeter, Millimeter, Affine::scale(10.0)),
            (Centimeter, Centimeter, Affine::IDENTITY),

            (Celsius, Celsius, Affine::IDENTITY),
            (Celsius, Fahrenheit, Affine::new(c_to_f, 32.0)),
            (Celsius, Kelvin, Affine::new(1.0, 273.15)),

            (Fahrenheit, Celsius, Affine::new(f_to_c, -32.0 * f_to_c)),
            (Fahrenheit, Fahrenheit, Affine::IDENTITY),
            (Fahrenheit, Kelvin, Affine::new(f_to_c, 273.15 - 32.0 * f_to_c)),

            (Kelvin, Celsius, Affine::new(1.0, -273.15)),
            (Kelvin, Fahrenheit, Affine::new(c_to_f, 32.0 - 273.15 * c_to_f)),
            (Kelvin, Kelvin, Affine::IDENTITY),
        ];

        rows.into_iter()
            .fold(Self::empty(), |table, (from, to, affine)| {
                table.with(from, to, affine)
            })
    }

    pub fn with(mut self, from: Unit, to: Unit, affine: Affine) -> Self {
        self.insert(from, to, affine);
        self
    }

    pub fn insert(&mut self, from: Unit, to: Unit, affine: Affine) {
        self.entries.insert((from, to), affine);
    }

    pub fn get(&self, from: Unit, to: Unit) -> Option<Affine> {
        self.entries.get(&(from, to)).copied()
    }

    pub fn contains(&self, from: Unit, to: Unit) -> bool {
        self.entries.contains_key(&(from, to))
    }

    /// Converts `magnitude` from `from` into `to`, if a conversion exists.
    pub fn convert(&self, magnitude: f64, from: Unit, to: Unit) -> Option<f64> {
        self.get(from, to).map(|affine| affine.apply(magnitude))
    }

    /// All entries whose units both belong to `family`, ordered by unit.
    pub fn family_entries(&self, family: Family) -> Vec<(Unit, Unit, Affine)> {
        let mut entries = self
            .entries
            .iter()
            .filter(|((from, to), _)| from.family() == family && to.family() == family)
            .map(|(&(from, to), &affine)| (from, to, affine))
            .collect::<Vec<_>>();
        entries.sort_by_key(|&(from, to, _)| (from, to));
        entries
    }
}
