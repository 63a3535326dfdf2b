use super::Error;
use crate::print::ansi::{BOLD, RED, RESET, StripAnsi};

use std::io;

/// A trait for diagnostic printers.
pub trait Printer {
    fn write<Out: io::Write>(&self, out: &mut Out, diag: &Error) -> io::Result<()>;
}

/// A diagnostic printer that pretty-prints diagnostics, optionally with colors.
#[derive(Clone)]
pub struct PrettyPrinter {
    color: bool,
}

impl PrettyPrinter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn write_colored<Out: io::Write>(&self, out: &mut Out, diag: &Error) -> io::Result<()> {
        writeln!(out, "{RED}{BOLD}error:{RESET} {RED}{}{RESET}", diag.message)?;
        for note in &diag.notes {
            writeln!(out, "  {BOLD}note:{RESET} {}", note)?;
        }
        Ok(())
    }
}

impl Printer for PrettyPrinter {
    fn write<Out: io::Write>(&self, out: &mut Out, diag: &Error) -> io::Result<()> {
        if self.color {
            self.write_colored(out, diag)
        } else {
            self.write_colored(&mut StripAnsi::new(out), diag)
        }
    }
}
