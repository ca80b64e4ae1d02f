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

//! Sunrise, sunset and twilight times from a closed-form solar ephemeris.
//!
//! Valid for 1801 to 2099, to within a minute or two. Times are hours UT
//! as real numbers; there is no time zone handling.

pub mod altitude;
pub mod angle;
pub mod calendar;
pub mod config;
pub mod daylength;
pub mod error;
pub mod events;
pub mod flux;
pub mod location;
pub mod orbit;
pub mod riseset;
pub mod sidereal;
