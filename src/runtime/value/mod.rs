mod expr;
mod value;

pub use expr::*;
pub use value::*;
