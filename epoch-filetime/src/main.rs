use std::io;
use std::process::ExitCode;

use epoch_filetime::{format_and_report, EpochConverter};

fn init_logging() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

fn main() -> ExitCode {
	init_logging();
	let result = EpochConverter::host().convert_epoch();
	let status = format_and_report(result, &mut io::stdout().lock(), &mut io::stderr().lock());
	ExitCode::from(status)
}
