use unitvar::diag::IntoError;
use unitvar::driver::{self, Command};
use unitvar::{BinOp, Family, ReversePolicy, RuntimeConfig, Unit, Value};

use atty::Stream;
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;

#[derive(Parser, Debug)]
#[command(author, version, about = "Unit-aware arithmetic", long_about = None)]
struct Args {
    #[arg(short, long, global = true, help = "Enable debug logging")]
    debug: bool,

    #[arg(long, global = true, help = "Disable colored output")]
    no_color: bool,

    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = ReverseArg::Symbolic,
        help = "Behavior when only the reverse conversion exists"
    )]
    reverse: ReverseArg,

    #[arg(long, global = true, help = "Number of decimal places to display")]
    decimals: Option<usize>,

    #[command(subcommand)]
    command: CommandArg,
}

#[derive(Subcommand, Debug)]
enum CommandArg {
    /// Convert a magnitude between two units
    Convert {
        #[arg(allow_negative_numbers = true)]
        magnitude: f64,
        from: Unit,
        to: Unit,
    },
    /// Apply a binary operator to two operands
    Calc {
        #[arg(allow_negative_numbers = true)]
        lhs: f64,
        #[arg(value_enum)]
        op: OpArg,
        #[arg(allow_negative_numbers = true)]
        rhs: f64,
        #[arg(long, help = "Unit of the left operand")]
        lhs_unit: Option<Unit>,
        #[arg(long, help = "Unit of the right operand")]
        rhs_unit: Option<Unit>,
    },
    /// Print the conversion table for a unit family
    Table {
        #[arg(value_enum)]
        family: FamilyArg,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OpArg {
    #[value(alias = "+")]
    Add,
    #[value(alias = "-")]
    Sub,
    #[value(aliases = ["x", "*"])]
    Mul,
    #[value(alias = "/")]
    Div,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ReverseArg {
    Symbolic,
    Error,
    Swap,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FamilyArg {
    Length,
    Temperature,
}

impl From<OpArg> for BinOp {
    fn from(op: OpArg) -> Self {
        match op {
            OpArg::Add => BinOp::Add,
            OpArg::Sub => BinOp::Sub,
            OpArg::Mul => BinOp::Mul,
            OpArg::Div => BinOp::Div,
        }
    }
}

impl From<ReverseArg> for ReversePolicy {
    fn from(policy: ReverseArg) -> Self {
        match policy {
            ReverseArg::Symbolic => ReversePolicy::Symbolic,
            ReverseArg::Error => ReversePolicy::Error,
            ReverseArg::Swap => ReversePolicy::Swap,
        }
    }
}

impl From<FamilyArg> for Family {
    fn from(family: FamilyArg) -> Self {
        match family {
            FamilyArg::Length => Family::Length,
            FamilyArg::Temperature => Family::Temperature,
        }
    }
}

impl From<CommandArg> for Command {
    fn from(command: CommandArg) -> Self {
        match command {
            CommandArg::Convert {
                magnitude,
                from,
                to,
            } => Command::Convert {
                magnitude,
                from,
                to,
            },
            CommandArg::Calc {
                lhs,
                op,
                rhs,
                lhs_unit,
                rhs_unit,
            } => Command::Calc {
                op: op.into(),
                lhs: Value::new(lhs, lhs_unit),
                rhs: Value::new(rhs, rhs_unit),
            },
            CommandArg::Table { family } => Command::Table {
                family: family.into(),
            },
        }
    }
}

fn main() {
    let args = Args::parse();

    let env = if args.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("error")
    };
    env_logger::Builder::from_env(env).init();

    let color = !args.no_color && atty::is(Stream::Stdout);
    let ctx = driver::new_context(RuntimeConfig {
        reverse_policy: args.reverse.into(),
        decimal_places: args.decimals,
    });

    let mut stdout = std::io::stdout().lock();
    if let Err(err) = driver::run(&ctx, args.command.into(), &mut stdout, color) {
        let color = !args.no_color && atty::is(Stream::Stderr);
        if let Err(io_err) = err.print_stderr(color) {
            eprintln!("{}", io_err.into_error().message);
        }
        std::process::exit(1);
    }
}
