mod context;
mod conversion;
mod exception;
mod operator;
mod unit;
pub mod value;

pub use context::*;
pub use conversion::*;
pub use exception::*;
pub use unit::*;
pub use value::*;
