/* Copyright 2025 Bruce Merry
 *
 * This program is free software: you can redistribute it and/or modify it
 * under the terms of the GNU General Public License as published by the Free
 * Software Foundation, either version 3 of the License, or (at your option)
 * any later version.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT
 * ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
 * FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for
 * more details.
 *
 * You should have received a copy of the GNU General Public License along
 * with this program. If not, see <https://www.gnu.org/licenses/>.
 */

//! Calendar dates and the day count used as the time axis of the model.

use chrono::naive::NaiveDate;
use chrono::Datelike;
use std::fmt::{Display, Formatter};

use crate::error::DomainError;

pub const FIRST_YEAR: i32 = 1801;
pub const LAST_YEAR: i32 = 2099;

// Days before the start of each month, plus the length of the year
const CUMULATIVE_DAYS: [u32; 13] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];
const CUMULATIVE_DAYS_LEAP: [u32; 13] =
    [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366];

/// A Gregorian date between 1801 and 2099 inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DomainError> {
        if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
            return Err(DomainError::YearOutOfRange(year));
        }
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(DomainError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Days since 2000 Jan 0.0 (1999-12-31 0h UT) at 0h UT on this date.
    ///
    /// Uses integer arithmetic that ignores the Gregorian century rule, so
    /// it treats 1900 as a leap year: dates before 1900-03-01 come out one
    /// day late. The solar model tolerates that.
    pub fn days_since_2000_jan_0(&self) -> f64 {
        let y = self.year as i64;
        let m = self.month as i64;
        let d = self.day as i64;
        (367 * y - 7 * (y + (m + 9) / 12) / 4 + 275 * m / 9 + d - 730530) as f64
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Day of the year, starting from 1 on 1 January.
    pub fn day_of_year(&self) -> u32 {
        let table = if self.is_leap_year() {
            &CUMULATIVE_DAYS_LEAP
        } else {
            &CUMULATIVE_DAYS
        };
        table[(self.month - 1) as usize] + self.day
    }

    pub fn days_in_year(&self) -> u32 {
        if self.is_leap_year() { 366 } else { 365 }
    }

    pub fn naive(&self) -> NaiveDate {
        // Validated on construction
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).unwrap_or_default()
    }

    /// The following day, if it is still within the supported range.
    pub fn succ(&self) -> Result<Self, DomainError> {
        match self.naive().succ_opt() {
            Some(next) => Self::try_from(next),
            None => Err(DomainError::YearOutOfRange(self.year + 1)),
        }
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = DomainError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(date.year(), date.month(), date.day())
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}
