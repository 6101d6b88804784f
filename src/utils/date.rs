use anyhow::{Result, bail};
use std::str::FromStr;

/// UTC datetime without timezone complexity
///
/// Field order (year, month, day, hour, minute, second) makes the derived
/// `Ord` chronological, which is what collection sorting relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse from "YYYY-MM-DD" or "YYYY-MM-DDTHH:MM:SSZ" format.
    ///
    /// Anything else, including calendar-invalid dates, is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let (date, time) = match s.split_once('T') {
            Some((date, time)) => (date, Some(time.strip_suffix('Z')?)),
            None => (s, None),
        };

        let mut fields = date.splitn(3, '-');
        let year = field(fields.next()?, 4)?;
        let month = field(fields.next()?, 2)?;
        let day = field(fields.next()?, 2)?;

        let (hour, minute, second) = match time {
            Some(time) => {
                let mut fields = time.splitn(3, ':');
                (
                    field(fields.next()?, 2)?,
                    field(fields.next()?, 2)?,
                    field(fields.next()?, 2)?,
                )
            }
            None => (0, 0, 0),
        };

        let dt = Self::new(year, month, day, hour, minute, second);
        dt.validate().ok()?;
        Some(dt)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=12).contains(&self.month) {
            bail!("month out of range: {}", self.month);
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            bail!("day out of range: {}", self.day);
        }
        if self.hour > 23 {
            bail!("hour out of range: {}", self.hour);
        }
        if self.minute > 59 {
            bail!("minute out of range: {}", self.minute);
        }
        if self.second > 59 {
            bail!("second out of range: {}", self.second);
        }

        Ok(())
    }

    /// Human-readable "DD Mon YYYY" form, the shape templates show under
    /// post titles
    pub fn to_readable(self) -> String {
        const MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];

        format!(
            "{:02} {} {:04}",
            self.day,
            MONTHS[(self.month - 1) as usize],
            self.year
        )
    }
}

/// Parse a fixed-width all-digit field
#[inline]
fn field<T: FromStr>(s: &str, width: usize) -> Option<T> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

// Callers validate the month range first
fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}
