//! Shared physical constants and time-scale conversions.

/// Astronomical unit in kilometres
pub const AU_KM: f64 = 149_597_870.7;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Days per Julian year
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Julian date of the J2000.0 epoch (2000-01-01T12:00:00)
pub const J2000_JD: f64 = 2_451_545.0;

/// First Julian day number of the Gregorian calendar (1582-10-15)
const GREGORIAN_REFORM_JDN: i64 = 2_299_161;

/// TNT-equivalent energy of one megaton, in joules
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Days elapsed since J2000 for a Julian date.
pub fn julian_date_to_j2000_days(julian_date: f64) -> f64 {
    julian_date - J2000_JD
}

/// Julian date for a number of days since J2000.
pub fn j2000_days_to_julian_date(days: f64) -> f64 {
    J2000_JD + days
}

/// Calendar date of a Julian day number.
///
/// Day numbers before the Gregorian reform map onto the Julian calendar.
fn calendar_date(jdn: i64) -> (i64, u32, u32) {
    let a = if jdn >= GREGORIAN_REFORM_JDN {
        let alpha = ((jdn as f64 - 1_867_216.25) / 36_524.25).floor() as i64;
        jdn + 1 + alpha - alpha.div_euclid(4)
    } else {
        jdn
    };
    let b = a + 1524;
    let c = ((b as f64 - 122.1) / 365.25).floor() as i64;
    let d = (365.25 * c as f64).floor() as i64;
    let e = ((b - d) as f64 / 30.6001).floor() as i64;

    let day = b - d - (30.6001 * e as f64).floor() as i64;
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };
    (year, month as u32, day as u32)
}

/// Format seconds since J2000 as `YYYY-MM-DD HH:MM:SS TT`, rounded to the second.
pub fn j2000_seconds_to_date_string(j2000_seconds: f64) -> String {
    // Julian days start at noon
    let since_midnight = j2000_seconds.round() as i64 + SECONDS_PER_DAY as i64 / 2;
    let jdn = J2000_JD as i64 + since_midnight.div_euclid(SECONDS_PER_DAY as i64);
    let time_of_day = since_midnight.rem_euclid(SECONDS_PER_DAY as i64);

    let (year, month, day) = calendar_date(jdn);
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02} TT",
        year,
        month,
        day,
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60
    )
}
