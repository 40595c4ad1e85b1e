use std::process::{Command, Output};

use regex::Regex;

const EXPECTED: &str = "High: 0x019db1de\nLow: 0xd53e8000\n";

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_epoch-filetime"))
		.args(args)
		.env_remove("RUST_LOG")
		.output()
		.unwrap()
}

#[test]
fn test_prints_epoch_filetime() {
	let output = run(&[]);
	assert_eq!(output.status.code(), Some(0));
	assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED);
	assert!(output.stderr.is_empty());
}

#[test]
fn test_output_shape() {
	let shape = Regex::new(r"\AHigh: 0x[0-9a-f]{8}\nLow: 0x[0-9a-f]{8}\n\z").unwrap();
	let stdout = String::from_utf8(run(&[]).stdout).unwrap();
	assert!(shape.is_match(&stdout), "{:?}", stdout);
}

#[test]
fn test_deterministic() {
	assert_eq!(run(&[]).stdout, run(&[]).stdout);
}

#[test]
fn test_ignores_arguments() {
	let plain = run(&[]);
	let cases: [&[&str]; 3] = [&["--help"], &["-x", "1601"], &["--", "garbage", "more"]];
	for args in cases {
		let output = run(args);
		assert_eq!(output.status.code(), plain.status.code(), "{:?}", args);
		assert_eq!(output.stdout, plain.stdout, "{:?}", args);
	}
}
