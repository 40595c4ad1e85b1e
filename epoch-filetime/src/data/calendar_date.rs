use std::fmt::{self, Display, Formatter};

/// A civil date and time in UTC, laid out like Win32's `SYSTEMTIME`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct CalendarDate {
	pub year: u16,
	/// 1 to 12.
	pub month: u16,
	/// Not used by the conversion and may hold any value.
	pub day_of_week: u16,
	/// 1 to 31.
	pub day: u16,
	pub hour: u16,
	pub minute: u16,
	pub second: u16,
	pub millisecond: u16,
}

impl CalendarDate {
	pub const fn new(year: u16, month: u16, day: u16) -> Self {
		Self {
			year,
			month,
			day_of_week: 0,
			day,
			hour: 0,
			minute: 0,
			second: 0,
			millisecond: 0,
		}
	}

	pub const fn with_time(self, hour: u16, minute: u16, second: u16, millisecond: u16) -> Self {
		Self { hour, minute, second, millisecond, ..self }
	}
}

/// 1970-01-01T00:00:00.000 UTC.
pub const POSIX_EPOCH: CalendarDate = CalendarDate::new(1970, 1, 1);

impl Display for CalendarDate {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(
			f,
			"{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
			self.year, self.month, self.day, self.hour, self.minute, self.second, self.millisecond,
		)
	}
}
