//! Settlement date/period conversion
//!
//! Market accounting runs on half-hour settlement periods counted from
//! midnight local (Europe/London) wall time, so long and short days have 50
//! and 46 periods. Conversion does the arithmetic in wall time and only
//! then resolves to UTC, which is how the numbering behaves across DST
//! changes.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Europe::London;

/// UTC instant at which a settlement period starts.
pub fn settlement_period_start(date: NaiveDate, period: i32) -> DateTime<Utc> {
    let wall = date.and_time(NaiveTime::MIN) + Duration::minutes(30 * (i64::from(period) - 1));

    match London.from_local_datetime(&wall) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        // Clocks going back: the wall time occurs twice, take the earlier
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        // Clocks going forward: the wall time is skipped, roll past the gap
        LocalResult::None => London
            .from_local_datetime(&(wall + Duration::hours(1)))
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|| Utc.from_utc_datetime(&wall)),
    }
}
