#[cfg(windows)]
use winapi::shared::minwindef::FILETIME;

/// Number of 100-nanosecond intervals since 1601-01-01T00:00:00 UTC.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TickTimestamp(u64);

impl TickTimestamp {
	pub const fn new(ticks: u64) -> Self {
		Self(ticks)
	}

	pub const fn from_words(high: u32, low: u32) -> Self {
		Self((high as u64) << 32 | low as u64)
	}

	pub const fn as_u64(self) -> u64 {
		self.0
	}

	/// Upper 32 bits.
	pub const fn high(self) -> u32 {
		(self.0 >> 32) as u32
	}

	/// Lower 32 bits.
	pub const fn low(self) -> u32 {
		self.0 as u32
	}
}

impl From<u64> for TickTimestamp {
	fn from(ticks: u64) -> Self {
		Self(ticks)
	}
}

impl From<TickTimestamp> for u64 {
	fn from(ticks: TickTimestamp) -> Self {
		ticks.0
	}
}

#[cfg(windows)]
impl From<FILETIME> for TickTimestamp {
	fn from(time: FILETIME) -> Self {
		Self::from_words(time.dwHighDateTime, time.dwLowDateTime)
	}
}

#[cfg(windows)]
impl From<TickTimestamp> for FILETIME {
	fn from(ticks: TickTimestamp) -> Self {
		FILETIME {
			dwLowDateTime: ticks.low(),
			dwHighDateTime: ticks.high(),
		}
	}
}
