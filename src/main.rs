mod cli;

use cli::Args;
use line_reverser::application::factories::{ReporterFactory, ReporterType};
use line_reverser::application::use_cases::ReverseFileUseCase;
use line_reverser::config::{discover_config, load_config_from_path, ConfigFile};
use line_reverser::ports::inbound::LineReversalPort;
use line_reverser::shared::error::ExitCode;
use line_reverser::shared::Result;
use std::process;

fn main() {
    let args = match Args::parse_args() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version arrive here too and go to stdout
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }

    process::exit(ExitCode::Success.as_i32());
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(args)?;
    let request = args.to_request(config.as_ref())?;

    let reporter = ReporterFactory::create(ReporterType::from_quiet(args.quiet));
    let use_case = ReverseFileUseCase::new(reporter);
    use_case.execute(request)?;

    Ok(())
}

/// An explicit `--config` must exist; the default location is optional.
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match args.config.as_deref() {
        Some(path) => load_config_from_path(path).map(Some),
        None => discover_config(&std::env::current_dir()?),
    }
}
