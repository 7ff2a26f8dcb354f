//! Humanized durations for the relative-age display.

use chrono::Duration;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Buckets a duration into its largest whole unit (seconds, minutes, hours
/// or days). Negative durations (future timestamps, clock skew) clamp to
/// zero seconds.
pub fn humanize(delta: Duration) -> String {
    let secs = delta.num_seconds().max(0);
    let (value, unit) = if secs < MINUTE {
        (secs, "second")
    } else if secs < HOUR {
        (secs / MINUTE, "minute")
    } else if secs < DAY {
        (secs / HOUR, "hour")
    } else {
        (secs / DAY, "day")
    };

    if value == 1 {
        format!("1 {unit}")
    } else {
        format!("{value} {unit}s")
    }
}
