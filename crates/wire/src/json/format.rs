//! Text layouts for date-times and time spans

use chrono::{Duration, Timelike};
use jsonlite_core::{Timestamp, UtcOffset};

/// Sub-second digits kept, in 100ns ticks
const FRACTION_DIGITS: usize = 7;

/// Format a timestamp as `yyyy-MM-ddTHH:mm:ss[.fffffff][offset]`
///
/// The fraction is trimmed of trailing zeros and omitted when zero. The offset
/// is `Z` for UTC, `+hh:mm`/`-hh:mm` for fixed offsets and empty when unknown.
pub fn format_timestamp(ts: &Timestamp) -> String {
    let mut out = ts.wall_clock.format("%Y-%m-%dT%H:%M:%S").to_string();

    let ticks = (ts.wall_clock.nanosecond() % 1_000_000_000) / 100;
    if ticks > 0 {
        let fraction = format!("{:0width$}", ticks, width = FRACTION_DIGITS);
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }

    match ts.offset {
        UtcOffset::Utc => out.push('Z'),
        UtcOffset::Fixed(offset) => {
            let seconds = offset.local_minus_utc();
            let sign = if seconds < 0 { '-' } else { '+' };
            let seconds = seconds.abs();
            out.push_str(&format!(
                "{}{:02}:{:02}",
                sign,
                seconds / 3600,
                (seconds % 3600) / 60
            ));
        }
        UtcOffset::Unspecified => {}
    }
    out
}

/// Format a time span as `<days>:<minutes>:<seconds>`
///
/// Minutes and seconds are the components within the hour and minute, not
/// totals, and the hours component is not written at all: 1 day 2 hours
/// 30 minutes 15 seconds becomes `1:30:15`. Negative spans carry the sign on
/// each non-zero component.
pub fn format_time_span(span: &Duration) -> String {
    let days = span.num_days();
    let minutes = span.num_minutes() % 60;
    let seconds = span.num_seconds() % 60;
    format!("{}:{}:{}", days, minutes, seconds)
}
