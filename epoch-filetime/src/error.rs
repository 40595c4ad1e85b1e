/// Error returned when a calendar date cannot be turned into ticks.
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum ConversionError {
	/// The calendar facility refused the date. The underlying cause is not reported.
	#[error("host calendar conversion rejected the date")]
	PlatformRejected,
}
