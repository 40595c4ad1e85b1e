use std::io::Write;

use crate::{ConversionError, TickTimestamp};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

const FAILURE_MESSAGE: &str = "Error getting the epoch filetime.";

/// Prints a conversion result and returns the process exit status.
///
/// On success both words go to `out` as 8 zero-padded lowercase hex digits and
/// [`EXIT_SUCCESS`] is returned. On failure a single line goes to `err`, nothing is written to
/// `out`, and [`EXIT_FAILURE`] is returned. Write errors on either stream are ignored.
#[allow(unused_must_use)]
pub fn format_and_report(
	result: Result<TickTimestamp, ConversionError>,
	out: &mut impl Write,
	err: &mut impl Write,
) -> u8 {
	match result {
		Ok(ticks) => {
			write!(out, "High: 0x{:08x}\nLow: 0x{:08x}\n", ticks.high(), ticks.low());
			out.flush();
			EXIT_SUCCESS
		}
		Err(_) => {
			writeln!(err, "{}", FAILURE_MESSAGE);
			err.flush();
			EXIT_FAILURE
		}
	}
}
