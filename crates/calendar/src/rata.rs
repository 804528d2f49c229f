//! Rata-die conversions between (year, month, day) triples and day counts.
//!
//! Day numbers count whole days since 1970-01-01 (day 0), which keeps the
//! weekday derivation a simple modulus. The conversions are the standard
//! era-based Gregorian algorithms and are exact over the full `i32` year
//! range used by [`crate::CalendarDate`].

/// Days since 1970-01-01 for a proleptic Gregorian (year, month, day).
///
/// Assumes the triple is already validated.
pub(crate) fn day_number_from_ymd(year: i32, month: u8, day: u8) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = (i64::from(month) + 9) % 12;
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`day_number_from_ymd`].
pub(crate) fn ymd_from_day_number(days: i64) -> (i32, u8, u8) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if month <= 2 { y + 1 } else { y };
    (year as i32, month as u8, day as u8)
}
