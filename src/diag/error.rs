use super::printer::{PrettyPrinter, Printer};
use crate::runtime::UnitError;

use std::io;

/// An error diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub message: String,
    pub notes: Vec<String>,
}

impl Error {
    pub fn new(message: String) -> Self {
        Self {
            message,
            notes: vec![],
        }
    }

    pub fn with_note(mut self, note: String) -> Self {
        self.notes.push(note);
        self
    }

    pub fn write<Out, Print>(&self, out: &mut Out, printer: &Print) -> io::Result<()>
    where
        Out: io::Write,
        Print: Printer,
    {
        printer.write(out, self)
    }

    pub fn print_stderr(&self, color: bool) -> io::Result<()> {
        self.write(&mut io::stderr(), &PrettyPrinter::new(color))
    }
}

/// A trait for types that can be converted into an error diagnostic.
pub trait IntoError: Sized {
    fn into_error(self) -> Error;
}

impl IntoError for UnitError {
    fn into_error(self) -> Error {
        let err = Error::new(self.to_string());
        match self {
            UnitError::IncompatibleUnits {
                lhs,
                rhs,
                reverse_compatible: true,
            } => err.with_note(format!(
                "{lhs} converts to {rhs}; try swapping the operands"
            )),
            UnitError::IncompatibleUnits { lhs, rhs, .. } => {
                err.with_note(format!("{lhs} and {rhs} belong to different unit families"))
            }
            UnitError::MissingConversion { from, to } if from.is_compatible_with(to) => {
                err.with_note(format!("the conversion table has no {from} -> {to} entry"))
            }
            UnitError::MissingConversion { from, to } => err.with_note(format!(
                "{from} is a {} unit, {to} is a {} unit",
                from.family(),
                to.family()
            )),
            UnitError::UnknownUnit(_) => {
                err.with_note("known units: mil, in, mm, cm, degC, degF, degK".to_owned())
            }
            UnitError::DivisionByZero | UnitError::UnsupportedOperand(_) => err,
        }
    }
}

impl IntoError for io::Error {
    fn into_error(self) -> Error {
        Error::new(format!("i/o error: {self}"))
    }
}
