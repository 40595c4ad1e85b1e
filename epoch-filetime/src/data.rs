mod calendar_date;
mod tick_timestamp;

pub use calendar_date::*;
pub use tick_timestamp::*;
