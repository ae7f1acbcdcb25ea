use clap::Parser;
use license_count::args::Args;
use license_count::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose, args.quiet);

    match license_count::run(args) {
        Ok(total) => {
            log::info!("Total number of licenses required: {total}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error encountered {e}");
            ExitCode::FAILURE
        }
    }
}
