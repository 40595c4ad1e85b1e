use std::time::Duration;

use crate::{CalendarDate, ConversionError, TickTimestamp};

/// Seconds between 1601-01-01 and 1970-01-01.
pub const FILETIME_OFFSET: Duration = Duration::from_secs(11644473600);

/// [`FILETIME_OFFSET`] in 100-nanosecond ticks.
pub const POSIX_EPOCH_TICKS: u64 = FILETIME_OFFSET.as_secs() * 10_000_000;

/// Turns a civil date into ticks since 1601-01-01 UTC.
///
/// Implementations must reject dates they cannot represent rather than return a partial result.
pub trait CivilToTicks {
	fn civil_to_ticks(&self, date: &CalendarDate) -> Result<TickTimestamp, ConversionError>;
}

impl<T: CivilToTicks + ?Sized> CivilToTicks for &T {
	fn civil_to_ticks(&self, date: &CalendarDate) -> Result<TickTimestamp, ConversionError> {
		(**self).civil_to_ticks(date)
	}
}
