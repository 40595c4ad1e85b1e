use winapi::shared::minwindef::{FALSE, FILETIME};
use winapi::um::minwinbase::SYSTEMTIME;
use winapi::um::timezoneapi::SystemTimeToFileTime;

use crate::{CalendarDate, CivilToTicks, ConversionError, TickTimestamp};

/// Conversion through `SystemTimeToFileTime`.
#[derive(Debug, Default, Copy, Clone)]
pub struct Win32Converter;

impl From<&CalendarDate> for SYSTEMTIME {
	fn from(date: &CalendarDate) -> Self {
		SYSTEMTIME {
			wYear: date.year,
			wMonth: date.month,
			wDayOfWeek: date.day_of_week,
			wDay: date.day,
			wHour: date.hour,
			wMinute: date.minute,
			wSecond: date.second,
			wMilliseconds: date.millisecond,
		}
	}
}

impl CivilToTicks for Win32Converter {
	fn civil_to_ticks(&self, date: &CalendarDate) -> Result<TickTimestamp, ConversionError> {
		let system_time = SYSTEMTIME::from(date);
		let mut file_time = FILETIME {
			dwLowDateTime: 0,
			dwHighDateTime: 0,
		};
		if unsafe { SystemTimeToFileTime(&system_time, &mut file_time) } == FALSE {
			Err(ConversionError::PlatformRejected)
		} else {
			Ok(file_time.into())
		}
	}
}
