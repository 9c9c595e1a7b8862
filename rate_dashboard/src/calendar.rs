//! Persian (Solar Hijri) calendar conversion.
//!
//! What this module provides:
//! - [`to_jalali`]: Convert a Gregorian calendar date to its Jalali
//!   equivalent, the calendar the chart labels are rendered in.
//!
//! Notes:
//! - The conversion is pure integer arithmetic over the standard 33-year
//!   cycle break table, so identical inputs always produce identical
//!   outputs (the labels are golden-testable).
//! - Division and remainder below truncate toward zero; the break-table
//!   algorithm is defined in those terms and Rust's integer operators
//!   already behave that way.
//! - Supported Jalali years are `-61..3178`, i.e. Gregorian 560..3798.
//!   Dates outside that window produce an error and callers choose a
//!   fallback rendering.

use anyhow::bail;
use chrono::{Datelike, NaiveDate};

/// A date in the Persian (Solar Hijri) calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JalaliDate {
    pub year: i32,
    /// 1-based month (1 = Farvardin).
    pub month: u32,
    /// 1-based day of month.
    pub day: u32,
}

/// First Jalali years of the irregular 33-year leap cycles.
const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// Converts a Gregorian date to the Jalali calendar.
pub fn to_jalali(date: NaiveDate) -> anyhow::Result<JalaliDate> {
    let jdn = gregorian_to_jdn(date.year(), date.month() as i32, date.day() as i32);
    jdn_to_jalali(jdn)
}

/// Leap-cycle bookkeeping for one Jalali year: (years since the last leap
/// year, day of March the year starts on).
fn jal_cal(jy: i32) -> anyhow::Result<(i32, i32)> {
    if jy < BREAKS[0] || jy >= BREAKS[BREAKS.len() - 1] {
        bail!("Jalali year {jy} is outside the supported range");
    }

    let gy = jy + 621;
    let mut leap_j = -14;
    let mut jp = BREAKS[0];
    let mut jump = 0;

    for &jm in &BREAKS[1..] {
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += jump / 33 * 8 + jump % 33 / 4;
        jp = jm;
    }

    let mut n = jy - jp;
    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    let leap_g = gy / 4 - (gy / 100 + 1) * 3 / 4 - 150;
    let march = 20 + leap_j - leap_g;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    Ok((leap, march))
}

/// Julian day number of a Gregorian calendar date.
fn gregorian_to_jdn(gy: i32, gm: i32, gd: i32) -> i32 {
    let d = (gy + (gm - 8) / 6 + 100100) * 1461 / 4 + (153 * ((gm + 9) % 12) + 2) / 5 + gd
        - 34840408;
    d - (gy + 100100 + (gm - 8) / 6) / 100 * 3 / 4 + 752
}

/// Gregorian calendar date of a Julian day number.
fn jdn_to_gregorian(jdn: i32) -> (i32, i32, i32) {
    let mut j = 4 * jdn + 139361631;
    j += (4 * jdn + 183187720) / 146097 * 3 / 4 * 4 - 3908;
    let i = j % 1461 / 4 * 5 + 308;
    let gd = i % 153 / 5 + 1;
    let gm = i / 153 % 12 + 1;
    let gy = j / 1461 - 100100 + (8 - gm) / 6;
    (gy, gm, gd)
}

/// Jalali calendar date of a Julian day number.
fn jdn_to_jalali(jdn: i32) -> anyhow::Result<JalaliDate> {
    let (gy, _, _) = jdn_to_gregorian(jdn);
    let mut jy = gy - 621;
    let (leap, march) = jal_cal(jy)?;
    let first_of_year = gregorian_to_jdn(gy, 3, march);

    let mut k = jdn - first_of_year;
    if k >= 0 {
        if k <= 185 {
            // The first six 31-day months.
            return Ok(JalaliDate {
                year: jy,
                month: (1 + k / 31) as u32,
                day: (k % 31 + 1) as u32,
            });
        }
        k -= 186;
    } else {
        // Before Nowruz: the tail of the previous Jalali year.
        jy -= 1;
        k += 179;
        if leap == 1 {
            k += 1;
        }
    }

    Ok(JalaliDate {
        year: jy,
        month: (7 + k / 30) as u32,
        day: (k % 30 + 1) as u32,
    })
}
