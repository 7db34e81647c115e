use std::io::Write;

use clap::Parser;
use jsnames_cli::args::CliArgs;
use jsnames_cli::driver::{self, EXIT_FAILURE, format_diagnostics};

fn main() {
    // No-op unless JSNAMES_LOG or RUST_LOG is set.
    jsnames_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let result = match driver::run(&args) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(EXIT_FAILURE);
        }
    };

    if !result.diagnostics.is_empty() {
        eprint!("{}", format_diagnostics(&result.diagnostics, &result.source));
    } else if args.out.is_none() {
        let mut stdout = std::io::stdout().lock();
        if let Err(err) = stdout.write_all(result.output.as_bytes()) {
            eprintln!("error: failed to write output: {err}");
            std::process::exit(EXIT_FAILURE);
        }
    }

    std::process::exit(result.exit_code());
}
