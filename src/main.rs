use std::process::ExitCode;

use clap::Parser;
use mixfrac::{DEFAULT_PRECISION, Precedence, SolveOptions, selftest, solve_with};
use tracing::error;

/// mixfrac solves arithmetic on fractions and mixed numbers, such as
/// `1/2 * 3_3/4`, and prints the result as a mixed number.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate with conventional precedence (`*` and `/` before `+` and `-`,
    /// left to right) instead of the legacy split order.
    #[arg(short, long)]
    standard_precedence: bool,

    /// Absolute precision used when turning the result into a fraction.
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: f64,

    /// The expression to solve, or `test` to run the built-in self-test.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

/// Initializes the tracing subscriber. Logs go to stderr so that stdout only
/// carries results; `RUST_LOG` overrides the default level.
fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mixfrac=warn"));

    tracing_subscriber::registry().with(fmt::layer().with_target(false)
                                                    .without_time()
                                                    .with_writer(std::io::stderr))
                                  .with(filter)
                                  .init();
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    let Some(expression) = args.expression else {
        println!("Enter your fraction operation string...");
        return ExitCode::SUCCESS;
    };

    if expression == "test" {
        return match selftest::run() {
            Ok(count) => {
                println!("All tests passed! ({count} checks)");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    let precedence = if args.standard_precedence {
        Precedence::Standard
    } else {
        Precedence::Legacy
    };
    let options = SolveOptions { precedence,
                                 precision: args.precision };

    match solve_with(&expression, &options) {
        Ok(result) => {
            println!("{result}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            error!(%expression, "failed to solve expression");
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
