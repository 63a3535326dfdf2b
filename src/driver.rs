use crate::diag::{Error, IntoError};
use crate::print::ansi::{GREEN, RESET, StripAnsi, YELLOW};
use crate::print::PrettyPrint;
use crate::runtime::{BinOp, Context, Family, Resolution, RuntimeConfig, Term, Unit, Value};

use log::{debug, trace};
use std::io;

/// A request from the command line.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Convert {
        magnitude: f64,
        from: Unit,
        to: Unit,
    },
    Calc {
        op: BinOp,
        lhs: Value,
        rhs: Value,
    },
    Table {
        family: Family,
    },
}

pub fn new_context(config: RuntimeConfig) -> Context<'static> {
    Context::new().with_config(config)
}

/// Runs `command`, writing its result to `out`.
pub fn run<Out: io::Write>(
    ctx: &Context,
    command: Command,
    out: &mut Out,
    color: bool,
) -> Result<(), Error> {
    if color {
        execute(ctx, command, out)
    } else {
        execute(ctx, command, &mut StripAnsi::new(out))
    }
}

fn execute<Out: io::Write>(ctx: &Context, command: Command, out: &mut Out) -> Result<(), Error> {
    match command {
        Command::Convert {
            magnitude,
            from,
            to,
        } => {
            let value = convert(ctx, from.of(magnitude), to)?;
            write_result(out, ctx, &Term::Value(value)).map_err(IntoError::into_error)
        }
        Command::Calc { op, lhs, rhs } => {
            let term = calc(ctx, op, lhs, rhs)?;
            write_result(out, ctx, &term).map_err(IntoError::into_error)
        }
        Command::Table { family } => {
            write_table(out, ctx, family).map_err(IntoError::into_error)
        }
    }
}

pub fn convert(ctx: &Context, value: Value, to: Unit) -> Result<Value, Error> {
    trace!("convert {} -> {}", value, to);
    ctx.convert(value, to).map_err(IntoError::into_error)
}

pub fn calc(ctx: &Context, op: BinOp, lhs: Value, rhs: Value) -> Result<Term, Error> {
    match ctx.resolve(op, &lhs, &rhs) {
        Resolution::Absorb(unit) => debug!(
            "{lhs} {op} {rhs}: unitless operand absorbed into {}",
            unit.map_or("no unit", Unit::symbol)
        ),
        Resolution::SameUnit(unit) => debug!("{lhs} {op} {rhs}: same unit {unit}"),
        Resolution::Convert { from, to, affine } => {
            debug!("{lhs} {op} {rhs}: converting {from} to {to}");
            trace!("{from} -> {to}: {affine}");
        }
        Resolution::ReverseOnly { from, to, .. } => debug!(
            "{lhs} {op} {rhs}: only {from} -> {to} exists, policy {:?}",
            ctx.config.reverse_policy
        ),
        Resolution::Symbolic => debug!("{lhs} {op} {rhs}: no conversion, keeping symbolic"),
    }
    ctx.apply(op, lhs, rhs).map_err(IntoError::into_error)
}

fn write_result<Out: io::Write>(out: &mut Out, ctx: &Context, term: &Term) -> io::Result<()> {
    match term {
        Term::Value(_) => write!(out, "{GREEN}RESULT:{RESET} ")?,
        Term::Expr(_) => write!(out, "{YELLOW}SYMBOLIC:{RESET} ")?,
    }
    term.pretty_print(out, &ctx.config, 0)?;
    writeln!(out)
}

fn write_table<Out: io::Write>(out: &mut Out, ctx: &Context, family: Family) -> io::Result<()> {
    for (from, to, affine) in ctx.table().family_entries(family) {
        write!(out, "{:>5} -> {:<5} ", from.symbol(), to.symbol())?;
        writeln!(out, "{affine}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{cm, deg_c, inch, mil};

    fn run_plain(command: Command) -> Result<String, Error> {
        let ctx = new_context(RuntimeConfig::default());
        let mut out = Vec::new();
        run(&ctx, command, &mut out, false)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn calc_prints_value() {
        let out = run_plain(Command::Calc {
            op: BinOp::Add,
            lhs: inch(2.0),
            rhs: mil(1000.0),
        })
        .unwrap();
        assert_eq!(out, "RESULT: 3 in\n");
    }

    #[test]
    fn calc_prints_symbolic() {
        let out = run_plain(Command::Calc {
            op: BinOp::Add,
            lhs: cm(2.0),
            rhs: deg_c(2.0),
        })
        .unwrap();
        assert_eq!(out, "SYMBOLIC: (2 cm + 2 degC)\n");
    }

    #[test]
    fn calc_reports_division_by_zero() {
        let err = run_plain(Command::Calc {
            op: BinOp::Div,
            lhs: cm(2.0),
            rhs: Value::bare(0.0),
        })
        .unwrap_err();
        assert_eq!(err.message, "division by zero");
    }

    #[test]
    fn convert_with_decimals() {
        let ctx = new_context(RuntimeConfig {
            decimal_places: Some(2),
            ..RuntimeConfig::default()
        });
        let mut out = Vec::new();
        run(
            &ctx,
            Command::Convert {
                magnitude: 0.0,
                from: Unit::Celsius,
                to: Unit::Fahrenheit,
            },
            &mut out,
            false,
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "RESULT: 32.00 degF\n");
    }

    #[test]
    fn convert_across_families_fails() {
        let err = run_plain(Command::Convert {
            magnitude: 1.0,
            from: Unit::Inch,
            to: Unit::Kelvin,
        })
        .unwrap_err();
        assert_eq!(err.message, "no conversion from in to degK");
    }

    #[test]
    fn table_lists_family() {
        let out = run_plain(Command::Table {
            family: Family::Temperature,
        })
        .unwrap();
        assert_eq!(out.lines().count(), 9);
        assert!(out.contains(" degC -> degK  x * 1 + 273.15"));
    }
}
