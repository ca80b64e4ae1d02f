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

//! Length of the day, without working out clock times.
//!
//! Only latitude really matters here; longitude just shifts the instant
//! at which the Sun's declination is sampled.

use crate::angle::sind;
use crate::calendar::CalendarDate;
use crate::location::Location;
use crate::orbit::{obliquity, sun_position};
use crate::riseset::{cos_hour_angle, diurnal_arc, Arc, Threshold};

/// Hours, in [0, 24], for which the Sun is above `threshold` on `date`.
pub fn day_length(date: &CalendarDate, location: &Location, threshold: Threshold) -> f64 {
    let d = date.days_since_2000_jan_0() + 0.5 - location.longitude() / 360.0;
    let sun = sun_position(d);

    // Declination from the ecliptic longitude, skipping right ascension
    let sin_dec = sind(obliquity(d)) * sind(sun.longitude);
    let cos_dec = (1.0 - sin_dec * sin_dec).sqrt();

    let altitude = threshold.centre_altitude(sun.distance);
    let cost = cos_hour_angle(altitude, location.latitude(), sin_dec, cos_dec);
    match diurnal_arc(cost) {
        Arc::AlwaysBelow => 0.0,
        Arc::AlwaysAbove => 24.0,
        Arc::Crossing(h) => 2.0 / 15.0 * h,
    }
}

/// Sunrise to sunset
pub fn daylight_length(date: &CalendarDate, location: &Location) -> f64 {
    day_length(date, location, Threshold::RISE_SET)
}

/// Civil dawn to civil dusk
pub fn civil_twilight_length(date: &CalendarDate, location: &Location) -> f64 {
    day_length(date, location, Threshold::CIVIL_TWILIGHT)
}

/// Nautical dawn to nautical dusk
pub fn nautical_twilight_length(date: &CalendarDate, location: &Location) -> f64 {
    day_length(date, location, Threshold::NAUTICAL_TWILIGHT)
}

/// Astronomical dawn to astronomical dusk
pub fn astronomical_twilight_length(date: &CalendarDate, location: &Location) -> f64 {
    day_length(date, location, Threshold::ASTRONOMICAL_TWILIGHT)
}
