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

use crate::calendar::CalendarDate;
use crate::error::DomainError;
use crate::location::check_latitude;
use crate::orbit::sun_ra_dec;

/// Altitude of the Sun at its highest on `date`, in degrees.
///
/// No refraction is applied and the declination is taken at 0h UT. In the
/// tropics and south of them, where the Sun culminates to the north, the
/// altitude is measured from the north horizon instead (180 - a). Polar
/// night gives 0.
pub fn solar_altitude(date: &CalendarDate, latitude: f64) -> Result<f64, DomainError> {
    let latitude = check_latitude(latitude)?;
    let dec = sun_ra_dec(date.days_since_2000_jan_0()).declination;
    let altitude = 90.0 - latitude + dec;
    Ok(if altitude > 90.0 {
        180.0 - altitude
    } else if altitude < 0.0 {
        0.0
    } else {
        altitude
    })
}
