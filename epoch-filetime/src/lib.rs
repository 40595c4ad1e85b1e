//! FILETIME representation of the POSIX epoch.
//!
//! Windows stores timestamps as [FILETIME]: a 64-bit count of 100-nanosecond intervals since
//! 1601-01-01 UTC, split into a high and a low 32-bit word. This crate asks the host for the
//! FILETIME of 1970-01-01 UTC, which is the offset needed to turn a FILETIME into a POSIX time.
//!
//! On Windows the conversion is done by `SystemTimeToFileTime`. Other hosts have no such
//! facility, so [`GregorianConverter`] computes the same value from the proleptic Gregorian
//! calendar.
//!
//! [FILETIME]: https://learn.microsoft.com/en-us/windows/win32/api/minwinbase/ns-minwinbase-filetime


mod data;
mod error;
mod gregorian;
mod report;
mod to_file_time;
#[cfg(windows)]
mod win32;

pub use data::*;
pub use error::ConversionError;
pub use gregorian::GregorianConverter;
pub use report::{format_and_report, EXIT_FAILURE, EXIT_SUCCESS};
pub use to_file_time::{CivilToTicks, FILETIME_OFFSET, POSIX_EPOCH_TICKS};
#[cfg(windows)]
pub use win32::Win32Converter;

/// Converter backed by the host's own calendar facility.
#[cfg(windows)]
pub type HostConverter = Win32Converter;

/// Converter backed by the host's own calendar facility.
#[cfg(not(windows))]
pub type HostConverter = GregorianConverter;

/// Holds the POSIX epoch and converts it with a [`CivilToTicks`] implementation.
#[derive(Debug, Default, Clone)]
pub struct EpochConverter<C = HostConverter> {
	converter: C,
}

impl EpochConverter {
	pub fn host() -> Self {
		Self::default()
	}
}

impl<C: CivilToTicks> EpochConverter<C> {
	pub fn new(converter: C) -> Self {
		Self { converter }
	}

	pub fn date(&self) -> CalendarDate {
		POSIX_EPOCH
	}

	/// Converts `date` with the wrapped converter.
	pub fn convert(&self, date: CalendarDate) -> Result<TickTimestamp, ConversionError> {
		match self.converter.civil_to_ticks(&date) {
			Ok(ticks) => {
				log::debug!("{} is {} ticks ({:#010x}:{:#010x})", date, ticks.as_u64(), ticks.high(), ticks.low());
				Ok(ticks)
			}
			Err(e) => {
				log::debug!("{} not converted: {}", date, e);
				Err(e)
			}
		}
	}

	/// Converts the POSIX epoch.
	pub fn convert_epoch(&self) -> Result<TickTimestamp, ConversionError> {
		self.convert(self.date())
	}
}

/// Converts `date` with the host converter.
pub fn convert(date: CalendarDate) -> Result<TickTimestamp, ConversionError> {
	EpochConverter::host().convert(date)
}
