//! Unit-aware scalar arithmetic.
//!
//! Values carry an optional unit from two fixed families (length and
//! temperature). Binary operators convert the right operand into the left
//! operand's unit when a conversion exists, and otherwise keep the combination
//! as a symbolic [`Expression`].
//!
//! ```
//! use unitvar::{inch, mil, Term};
//!
//! let sum = (inch(2.0) + mil(1000.0)).unwrap();
//! assert_eq!(sum, Term::Value(inch(3.0)));
//! ```

pub mod diag;
pub mod driver;
pub mod print;
pub mod runtime;

pub use runtime::{
    cm, deg_c, deg_f, deg_k, inch, make, mil, mm, BinOp, Context, Expression, Family,
    ReversePolicy, RuntimeConfig, Term, Unit, UnitError, UnitResult, Value, CONVERSIONS,
};
