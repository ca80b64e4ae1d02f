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

//! Sidereal time, in degrees.

use crate::angle::revolution;
use crate::orbit::{MEAN_ANOMALY_EPOCH, MEAN_ANOMALY_RATE, PERIHELION_EPOCH, PERIHELION_RATE};

/// Greenwich mean sidereal time "at 0h UT", generalised to any instant.
///
/// This is defined as GMST - UT, so it creeps forward by about four
/// minutes a day and GMST at any time of day is simply GMST0 + UT. Ignoring
/// aberration it equals the Sun's mean longitude plus 180 degrees.
pub fn gmst0(d: f64) -> f64 {
    revolution(
        180.0
            + MEAN_ANOMALY_EPOCH
            + PERIHELION_EPOCH
            + (MEAN_ANOMALY_RATE + PERIHELION_RATE) * d,
    )
}

/// Local sidereal time at an east-positive longitude.
///
/// `d` must carry the time of day as its fractional part.
pub fn local_sidereal_time(d: f64, longitude: f64) -> f64 {
    revolution(gmst0(d) + 180.0 + longitude)
}
