mod error;
mod printer;

pub use error::*;
pub use printer::*;
