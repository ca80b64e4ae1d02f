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

//! Position of the Sun from low-order mean orbital elements
//!
//! This is a deliberately simple model that ignores:
//! - the ecliptic latitude of the Sun (always close to zero)
//! - precession/nutation
//! - aberration and light travel time
//! - the Moon
//!
//! and it only takes a single correction step towards solving Kepler's
//! equation. It is good to a minute or two of rise/set time between 1801
//! and 2099.
//!
//! All arguments named `d` are days since 2000 Jan 0.0 UT (see
//! [`crate::calendar::CalendarDate::days_since_2000_jan_0`]).

// Lots of variables from external equations don't have snake case
#![allow(non_snake_case)]

use std::ops::{Index, Mul};
use std::slice::SliceIndex;

use crate::angle::{atan2d, cosd, revolution, sind};

// Mean anomaly and argument of perihelion, at d = 0 and per day
pub(crate) const MEAN_ANOMALY_EPOCH: f64 = 356.0470;
pub(crate) const MEAN_ANOMALY_RATE: f64 = 0.9856002585;
pub(crate) const PERIHELION_EPOCH: f64 = 282.9404;
pub(crate) const PERIHELION_RATE: f64 = 4.70935e-5;

#[derive(PartialEq, Default, Copy, Clone, Debug)]
struct Vector([f64; 3]);

impl<I: SliceIndex<[f64]>> Index<I> for Vector {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.0[index]
    }
}

impl Vector {
    fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }
}

fn dot(a: &Vector, b: &Vector) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| x * y)
        .fold(0.0, |x, y| x + y)
}

#[derive(PartialEq, Default, Copy, Clone, Debug)]
struct Matrix([[f64; 3]; 3]);

impl Mul<Vector> for Matrix {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Self::Output {
        Vector(self.0.map(|x| dot(&Vector(x), &rhs)))
    }
}

/// Rotate around the X axis, by an angle in degrees
fn Rx(r: f64) -> Matrix {
    let (s, c) = r.to_radians().sin_cos();
    Matrix([[1.0, 0.0, 0.0], [0.0, c, s], [0.0, -s, c]])
}

/// Ecliptic longitude (degrees, [0, 360)) and distance of the Sun.
///
/// Distance is in units of the semi-major axis, so close to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EclipticPosition {
    pub longitude: f64,
    pub distance: f64,
}

/// Equatorial coordinates of the Sun.
///
/// Right ascension comes straight from atan2 and so lies in (-180, 180];
/// reduce it before comparing against sidereal time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Equatorial {
    pub right_ascension: f64,
    pub declination: f64,
    pub distance: f64,
}

/// Obliquity of the ecliptic in degrees
pub fn obliquity(d: f64) -> f64 {
    23.4393 - 3.563e-7 * d
}

/// Mean anomaly of the Sun in degrees, in [0, 360)
pub fn mean_anomaly(d: f64) -> f64 {
    revolution(MEAN_ANOMALY_EPOCH + MEAN_ANOMALY_RATE * d)
}

pub fn sun_position(d: f64) -> EclipticPosition {
    let M = mean_anomaly(d);
    let w = PERIHELION_EPOCH + PERIHELION_RATE * d;
    let e = 0.016709 - 1.151e-9 * d;

    // One step towards the eccentric anomaly, not iterated to convergence
    let E = M + e.to_degrees() * sind(M) * (1.0 + e * cosd(M));
    let x = cosd(E) - e;
    let y = (1.0 - e * e).sqrt() * sind(E);
    let r = x.hypot(y);
    let v = atan2d(y, x);
    EclipticPosition {
        longitude: revolution(v + w),
        distance: r,
    }
}

pub fn sun_ra_dec(d: f64) -> Equatorial {
    let EclipticPosition {
        longitude,
        distance,
    } = sun_position(d);
    // Ecliptic rectangular coordinates (the Sun stays in the ecliptic)
    let r_ecl = Vector([distance * cosd(longitude), distance * sind(longitude), 0.0]);
    let r_eq = Rx(-obliquity(d)) * r_ecl;
    Equatorial {
        right_ascension: atan2d(r_eq[1], r_eq[0]),
        declination: atan2d(r_eq[2], r_eq[0].hypot(r_eq[1])),
        distance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    // Local noon at Edinburgh, 2008-10-31
    const D: f64 = 3226.5;

    #[test]
    fn ecliptic_position() {
        let pos = sun_position(D);
        assert_abs_diff_eq!(pos.longitude, 217.44358408989282, epsilon = 1e-6);
        assert_abs_diff_eq!(pos.distance, 0.9928818858814829, epsilon = 1e-9);
    }

    #[test]
    fn equatorial_position() {
        let eq = sun_ra_dec(D);
        assert_abs_diff_eq!(eq.right_ascension, -144.9088671235646, epsilon = 1e-6);
        assert_abs_diff_eq!(eq.declination, -13.994540301453064, epsilon = 1e-6);
        assert_abs_diff_eq!(eq.distance, 0.9928818858814829, epsilon = 1e-9);
    }

    #[test]
    fn rotation_matches_direct_formula() {
        for d in [-70000.0, -1234.5, 0.0, 3226.5, 36000.25] {
            let pos = sun_position(d);
            let obl = obliquity(d);
            let y = pos.distance * sind(pos.longitude);
            let x = pos.distance * cosd(pos.longitude);
            let eq = sun_ra_dec(d);
            assert_abs_diff_eq!(eq.right_ascension, atan2d(y * cosd(obl), x), epsilon = 1e-9);
            assert_abs_diff_eq!(
                eq.declination,
                atan2d(y * sind(obl), x.hypot(y * cosd(obl))),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn declination_bounded_by_obliquity() {
        let mut d = -72683.0;
        while d < 36525.0 {
            let eq = sun_ra_dec(d);
            assert!(eq.declination.abs() <= obliquity(d) + 1e-9);
            assert!(eq.distance > 0.98 && eq.distance < 1.02);
            d += 37.3;
        }
    }

    #[test]
    fn solstice_and_equinox() {
        // 2010-06-21 and 2010-03-20 at noon
        let june = sun_ra_dec(3825.5);
        assert_abs_diff_eq!(june.declination, 23.44, epsilon = 0.05);
        let march = sun_ra_dec(3732.5);
        assert!(march.declination.abs() < 0.5);
    }

    #[test]
    fn mean_anomaly_range() {
        for d in [-72683.0, -0.5, 0.0, 1e4, 36525.0] {
            let m = mean_anomaly(d);
            assert!((0.0..360.0).contains(&m));
        }
    }
}
