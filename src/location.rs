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

use crate::error::DomainError;

/// Observer position on the Earth's surface, in degrees.
///
/// Latitude is north-positive and strictly between the poles (the hour
/// angle divides by its cosine). Longitude is east-positive; any finite
/// value is accepted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !latitude.is_finite() || latitude.abs() >= 90.0 {
            return Err(DomainError::InvalidLatitude(latitude));
        }
        if !longitude.is_finite() {
            return Err(DomainError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Check a latitude for models that do not divide by its cosine.
pub(crate) fn check_latitude(latitude: f64) -> Result<f64, DomainError> {
    if latitude.is_finite() {
        Ok(latitude)
    } else {
        Err(DomainError::InvalidLatitude(latitude))
    }
}
