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

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Input that lies outside the domain of the solar model.
///
/// Sun always above or below the horizon is not an error; see
/// [`crate::riseset::RiseSet`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// The model is only valid for 1801 to 2099.
    YearOutOfRange(i32),
    /// Not a real calendar date.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Non-finite, or at/beyond a pole.
    InvalidLatitude(f64),
    /// Non-finite.
    InvalidLongitude(f64),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YearOutOfRange(year) => {
                write!(f, "year {year} is outside the supported range 1801-2099")
            }
            Self::InvalidDate { year, month, day } => {
                write!(f, "{year:04}-{month:02}-{day:02} is not a valid date")
            }
            Self::InvalidLatitude(lat) => write!(f, "invalid latitude: {lat}"),
            Self::InvalidLongitude(lon) => write!(f, "invalid longitude: {lon}"),
        }
    }
}

impl Error for DomainError {}
