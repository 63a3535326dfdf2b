use super::context::Context;
use super::exception::UnitResult;
use super::value::{BinOp, Term, Value};

use std::ops::{Add, Div, Mul, Neg, Sub};

// Every binary operator, including the forms with a bare number on the left,
// goes through `Context::apply` with the operands in written order.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:expr) => {
        impl $trait<Value> for Value {
            type Output = UnitResult<Term>;

            fn $method(self, rhs: Value) -> Self::Output {
                Context::new().apply($op, self, rhs)
            }
        }

        impl_binary_op!($trait, $method, $op, f64);
        impl_binary_op!($trait, $method, $op, i32);
    };
    ($trait:ident, $method:ident, $op:expr, $num:ty) => {
        impl $trait<$num> for Value {
            type Output = UnitResult<Term>;

            fn $method(self, rhs: $num) -> Self::Output {
                Context::new().apply($op, self, rhs)
            }
        }

        impl $trait<Value> for $num {
            type Output = UnitResult<Term>;

            fn $method(self, rhs: Value) -> Self::Output {
                Context::new().apply($op, self, rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, BinOp::Add);
impl_binary_op!(Sub, sub, BinOp::Sub);
impl_binary_op!(Mul, mul, BinOp::Mul);
impl_binary_op!(Div, div, BinOp::Div);

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Self::Output {
        self.with_magnitude(-self.magnitude())
    }
}
