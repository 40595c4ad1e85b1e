use crate::{CalendarDate, CivilToTicks, ConversionError, TickTimestamp};

const TICKS_PER_MILLISECOND: u64 = 10_000;
const TICKS_PER_SECOND: u64 = 1000 * TICKS_PER_MILLISECOND;
const SECONDS_PER_DAY: u64 = 86_400;

/// Days from 0000-03-01 to 1601-01-01 in the proleptic Gregorian calendar.
const DAYS_TO_1601: u64 = 584_694;

// Same range as SystemTimeToFileTime.
const MIN_YEAR: u16 = 1601;
const MAX_YEAR: u16 = 30827;

/// Proleptic Gregorian calendar arithmetic, for hosts without a native facility.
///
/// Accepts exactly the dates `SystemTimeToFileTime` accepts.
#[derive(Debug, Default, Copy, Clone)]
pub struct GregorianConverter;

fn is_leap_year(year: u16) -> bool {
	year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(year: u16, month: u16) -> u16 {
	match month {
		4 | 6 | 9 | 11 => 30,
		2 if is_leap_year(year) => 29,
		2 => 28,
		_ => 31,
	}
}

fn validate(date: &CalendarDate) -> Result<(), ConversionError> {
	let valid = (MIN_YEAR..=MAX_YEAR).contains(&date.year)
		&& (1..=12).contains(&date.month)
		&& date.day >= 1
		&& date.day <= days_in_month(date.year, date.month)
		&& date.hour < 24
		&& date.minute < 60
		&& date.second < 60
		&& date.millisecond < 1000;
	if valid { Ok(()) } else { Err(ConversionError::PlatformRejected) }
}

/// Days since 1601-01-01, counting years from March so the leap day is last.
fn days_since_1601(year: u16, month: u16, day: u16) -> u64 {
	let (year, month, day) = (year as u64, month as u64, day as u64);
	let year = if month <= 2 { year - 1 } else { year };
	let era = year / 400;
	let year_of_era = year - era * 400;
	let month_from_march = (month + 9) % 12;
	let day_of_year = (153 * month_from_march + 2) / 5 + day - 1;
	let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
	era * 146_097 + day_of_era - DAYS_TO_1601
}

impl CivilToTicks for GregorianConverter {
	fn civil_to_ticks(&self, date: &CalendarDate) -> Result<TickTimestamp, ConversionError> {
		validate(date)?;
		let days = days_since_1601(date.year, date.month, date.day);
		let seconds = days * SECONDS_PER_DAY
			+ date.hour as u64 * 3600
			+ date.minute as u64 * 60
			+ date.second as u64;
		Ok(TickTimestamp::new(
			seconds * TICKS_PER_SECOND + date.millisecond as u64 * TICKS_PER_MILLISECOND,
		))
	}
}
