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

//! Trigonometry in degrees, and reduction of angles to a single revolution.
//!
//! The reductions use floor rather than truncation so that negative inputs
//! land in the same range as positive ones.

pub fn sind(x: f64) -> f64 {
    x.to_radians().sin()
}

pub fn cosd(x: f64) -> f64 {
    x.to_radians().cos()
}

/// Arc cosine in degrees. Callers must keep `x` within [-1, 1].
pub fn acosd(x: f64) -> f64 {
    x.acos().to_degrees()
}

pub fn atan2d(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

/// Reduce an angle to [0, 360)
pub fn revolution(x: f64) -> f64 {
    let r = x - 360.0 * (x / 360.0).floor();
    // A tiny negative x rounds up to exactly 360
    if r >= 360.0 { r - 360.0 } else { r }
}

/// Reduce an angle to (-180, 180]
pub fn rev180(x: f64) -> f64 {
    let r = x - 360.0 * (x / 360.0 + 0.5).floor();
    if r <= -180.0 { r + 360.0 } else { r }
}
