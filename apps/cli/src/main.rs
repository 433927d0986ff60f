mod commands;
mod core;
mod ui;

use clap::Parser;
use commands::vendor::VendorCommand;
use std::process::ExitCode;
use vendorize::domain::Boundary;

use crate::core::error::CliError;

#[derive(Parser)]
#[command(name = "vendorize")]
#[command(about = "Copy a Go package's external dependencies into a local vendor tree", long_about = None)]
struct Cli {
    #[command(flatten)]
    vendor: VendorCommand,

    /// More diagnostics (-v lists copied packages, -vv shows the walk)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    // The project boundary is fixed here, before anything can move the cwd.
    let boundary = match Boundary::capture() {
        Ok(b) => b,
        Err(e) => {
            CliError::Io(e).render();
            return ExitCode::FAILURE;
        }
    };

    let cli = Cli::parse();
    crate::core::logging::init(cli.verbose, cli.quiet);

    match cli.vendor.execute(boundary) {
        Ok(report) => {
            if !cli.quiet {
                ui::summary(&report);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            e.render();
            ExitCode::FAILURE
        }
    }
}
