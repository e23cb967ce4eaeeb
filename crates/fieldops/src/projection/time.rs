use chrono::{NaiveTime, Timelike};

/// Sort value used for time strings that do not parse. One past 11:59 PM, so
/// malformed entries land after every valid slot.
pub const END_OF_DAY: u32 = 24 * 60;

/// Parse a 12-hour clock string such as `"09:00 AM"` into minutes since midnight.
pub fn parse_time_to_minutes(value: &str) -> Option<u32> {
    NaiveTime::parse_from_str(value.trim(), "%I:%M %p")
        .ok()
        .map(|t| t.hour() * 60 + t.minute())
}

pub fn sort_minutes(value: &str) -> u32 {
    parse_time_to_minutes(value).unwrap_or(END_OF_DAY)
}
