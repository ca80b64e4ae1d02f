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

//! Empirical estimate of the peak solar flux reaching the ground.
//!
//! This comes from a numerical weather prediction model rather than from
//! the orbital model elsewhere in the crate: it has its own declination
//! approximation and Fourier fits, driven by the day of the year.

use std::f64::consts::PI;

use crate::angle::{cosd, sind};
use crate::calendar::CalendarDate;
use crate::error::DomainError;
use crate::location::check_latitude;

/// Solar constant, W/m²
const SOLAR_CONSTANT: f64 = 1367.0;

/// Equation of time fit in minutes: constant, then (sin, cos) per harmonic
const EOT_CONSTANT: f64 = 0.002733;
const EOT_HARMONICS: [(f64, f64); 4] = [
    (-7.3430, 0.55190),
    (-9.4700, -3.02000),
    (-0.3289, -0.07581),
    (-0.1935, -0.12450),
];

/// Attenuation polynomial, highest power first
const ATTENUATION: [f64; 5] = [-1.56e-12, 5.972e-9, -8.364e-6, 5.183e-3, -0.435];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EquationOfTime {
    /// Equation of time as an hour angle, in radians
    pub correction: f64,
    /// Solar constant corrected for the Earth-Sun distance, W/m²
    pub solar_constant: f64,
    /// sin(lat)·sin(dec) and cos(lat)·cos(dec)
    pub declination_terms: (f64, f64),
}

/// Ratio of the solar constant at `alpha` (radians through the year) to its
/// mean, from the square of the inverse distance
pub fn solar_constant_factor(alpha: f64) -> f64 {
    let denom = 1.0
        - 9.464e-4 * alpha.sin()
        - 0.01671 * alpha.cos()
        - 1.489e-4 * (2.0 * alpha).cos()
        - 2.917e-5 * (3.0 * alpha).sin()
        - 3.438e-4 * (4.0 * alpha).cos();
    1.0 / (denom * denom)
}

pub fn equation_of_time(date: &CalendarDate, latitude: f64) -> Result<EquationOfTime, DomainError> {
    let latitude = check_latitude(latitude)?;
    let day = date.day_of_year() as f64;
    let step = 2.0 * PI / date.days_in_year() as f64;
    let alpha = day * step;

    let solar_constant = solar_constant_factor(alpha) * SOLAR_CONSTANT;
    let dec = 0.412 * ((day + 10.0) * step - PI).cos();
    let declination_terms = (sind(latitude) * dec.sin(), cosd(latitude) * dec.cos());

    let minutes = EOT_HARMONICS
        .iter()
        .enumerate()
        .fold(EOT_CONSTANT, |acc, (i, (s, c))| {
            let k = (i + 1) as f64;
            acc + s * (k * alpha).sin() + c * (k * alpha).cos()
        });
    Ok(EquationOfTime {
        correction: (minutes * 15.0 / 60.0).to_radians(),
        solar_constant,
        declination_terms,
    })
}

/// Largest solar flux expected to reach the ground on `date`, in W/m².
pub fn max_solar_flux(date: &CalendarDate, latitude: f64) -> Result<f64, DomainError> {
    let eot = equation_of_time(date, latitude)?;
    let (a, b) = eot.declination_terms;
    let flux = (a + b) * eot.solar_constant;
    // Sun below the horizon at noon
    if flux < 0.0 {
        return Ok(0.0);
    }
    let coeff = ATTENUATION.iter().fold(0.0, |acc, c| acc * flux + c);
    let ground = flux * coeff;
    Ok(if ground > 0.0 { ground } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn equation_of_time_reference() {
        let eot = equation_of_time(&date(2004, 1, 30), 46.2).unwrap();
        assert_abs_diff_eq!(eot.correction, -0.05781494767492673, epsilon = 1e-9);
        assert_abs_diff_eq!(eot.solar_constant, 1408.8166507929361, epsilon = 1e-6);
        assert_abs_diff_eq!(eot.declination_terms.0, -0.22609627901103505, epsilon = 1e-9);
        assert_abs_diff_eq!(eot.declination_terms.1, 0.6573065460564708, epsilon = 1e-9);
    }

    #[test]
    fn equation_of_time_june() {
        let eot = equation_of_time(&date(2010, 6, 21), 46.2).unwrap();
        assert_abs_diff_eq!(eot.correction, -0.006134070510101354, epsilon = 1e-9);
        assert_abs_diff_eq!(eot.solar_constant, 1324.660588937781, epsilon = 1e-6);
    }

    #[test]
    fn solar_constant_peaks_near_perihelion() {
        assert!(solar_constant_factor(0.0) > 1.03);
        assert!(solar_constant_factor(PI) < 0.97);
    }

    #[test]
    fn flux_reference() {
        assert_abs_diff_eq!(
            max_solar_flux(&date(2004, 1, 30), 46.2).unwrap(),
            457.65216112498314,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            max_solar_flux(&date(2004, 6, 30), 46.2).unwrap(),
            1009.3481044750441,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            max_solar_flux(&date(2010, 6, 21), -46.2).unwrap(),
            315.06101014888077,
            epsilon = 1e-6
        );
    }

    #[test]
    fn flux_clamped_in_polar_night() {
        let flux = max_solar_flux(&date(2004, 12, 21), 80.0).unwrap();
        assert_eq!(flux, 0.0);
        assert!(flux.is_sign_positive());
    }

    #[test]
    fn rejects_non_finite_latitude() {
        assert_eq!(
            max_solar_flux(&date(2004, 1, 30), f64::INFINITY),
            Err(DomainError::InvalidLatitude(f64::INFINITY))
        );
    }
}
