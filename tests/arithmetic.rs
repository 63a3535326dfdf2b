//! Arithmetic behavior of unit-tagged values through the public operators.

use unitvar::*;

use approx::assert_abs_diff_eq;

fn value(term: UnitResult<Term>) -> Value {
    term.unwrap().into_value().expect("expected a value")
}

#[test]
fn same_unit_addition() {
    assert_eq!(value(mil(2.0) + mil(2.0)), mil(4.0));
}

#[test]
fn cross_unit_addition_uses_left_unit() {
    assert_eq!(value(inch(2.0) + mil(1000.0)), inch(3.0));

    let v = value(mil(1000.0) + inch(2.0));
    assert_eq!(v.unit(), Some(Unit::Mil));
    assert_abs_diff_eq!(v.magnitude(), 3000.0, epsilon = 1e-9);
}

#[test]
fn mixed_subtraction_carries_left_unit() {
    let v = value(cm(1.0) - mm(1.0));
    assert_eq!(v.unit(), Some(Unit::Centimeter));
    assert_abs_diff_eq!(v.to_mm().unwrap().magnitude(), 9.0, epsilon = 1e-12);

    let v = value(mm(1.0) - cm(1.0));
    assert_eq!(v.unit(), Some(Unit::Millimeter));
    assert_abs_diff_eq!(v.magnitude(), -9.0, epsilon = 1e-12);
}

#[test]
fn tagged_product_is_symbolic() {
    let term = (cm(2.0) * cm(3.0)).unwrap();
    assert!(term.is_symbolic());
    assert_eq!(term.to_string(), "(2 cm * 3 cm)");

    let term = (inch(6.0) / mil(2.0)).unwrap();
    assert_eq!(term.to_string(), "(6 in / 2 mil)");
}

#[test]
fn cross_family_is_symbolic_not_error() {
    let term = (cm(2.0) + deg_c(2.0)).unwrap();
    assert_eq!(term.to_string(), "(2 cm + 2 degC)");

    let expr = term.as_expr().unwrap();
    assert_eq!(expr.op(), BinOp::Add);
    assert_eq!(expr.lhs(), &Term::Value(cm(2.0)));
    assert_eq!(expr.rhs(), &Term::Value(deg_c(2.0)));
}

#[test]
fn cross_family_stays_symbolic_under_error_policy() {
    let ctx = Context::new().with_config(RuntimeConfig {
        reverse_policy: ReversePolicy::Error,
        ..RuntimeConfig::default()
    });
    let term = ctx.apply(BinOp::Sub, deg_f(1.0), inch(1.0)).unwrap();
    assert_eq!(term.to_string(), "(1 degF - 1 in)");
}

#[test]
fn division_by_bare_zero_is_an_error() {
    assert_eq!(cm(4.0) / 0.0, Err(UnitError::DivisionByZero));
    assert_eq!(deg_k(4.0) / Value::bare(0.0), Err(UnitError::DivisionByZero));
}

#[test]
fn unitless_absorption_both_orders() {
    assert_eq!(value(5.0 + mil(2.0)), mil(7.0));
    assert_eq!(value(mil(2.0) + 5.0), mil(7.0));
    assert_eq!(value(5.0 - mil(2.0)), mil(3.0));
    assert_eq!(value(mil(2.0) - 5.0), mil(-3.0));
    assert_eq!(value(3.0 * cm(2.0)), cm(6.0));
    assert_eq!(value(cm(2.0) / 4.0), cm(0.5));
    assert_eq!(value(8.0 / cm(2.0)), cm(4.0));
}

#[test]
fn bare_values_stay_bare() {
    assert_eq!(value(Value::bare(2.0) * Value::bare(3.0)), Value::bare(6.0));
    assert_eq!(value(Value::bare(2.0) + 1.0), Value::bare(3.0));
}

#[test]
fn temperature_addition_converts_affinely() {
    let v = value(deg_c(0.0) + deg_k(273.15));
    assert_eq!(v.unit(), Some(Unit::Celsius));
    assert_abs_diff_eq!(v.magnitude(), 0.0, epsilon = 1e-9);

    let v = value(deg_f(0.0) + deg_c(0.0));
    assert_eq!(v.unit(), Some(Unit::Fahrenheit));
    assert_abs_diff_eq!(v.magnitude(), 32.0, epsilon = 1e-9);
}

#[test]
fn operands_are_not_modified() {
    let a = inch(1.0);
    let b = mil(500.0);
    let _ = a + b;
    assert_eq!(a, inch(1.0));
    assert_eq!(b, mil(500.0));
}

#[test]
fn factories() {
    assert_eq!(make(Unit::Centimeter, 2.0), cm(2.0));
    assert_eq!(Unit::Kelvin.one(), deg_k(1.0));
    assert_eq!(Unit::Fahrenheit.of(3.0).to_string(), "3 degF");
}

#[test]
fn unary_operators_keep_unit() {
    assert_eq!(-inch(2.0), inch(-2.0));
    assert_eq!(inch(-2.0).abs(), inch(2.0));
    assert_eq!(inch(-2.0).pos(), inch(-2.0));
    assert_eq!(inch(2.0).bit_not(), Ok(inch(-3.0)));
}
