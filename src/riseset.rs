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

//! Times at which the Sun crosses a given altitude: rise/set and the
//! various flavours of twilight.
//!
//! All times are hours UT on the requested date, and may fall outside
//! [0, 24) when the local day straddles midnight UT.

use serde::Deserialize;

use crate::angle::{acosd, cosd, rev180, sind};
use crate::calendar::CalendarDate;
use crate::location::Location;
use crate::orbit::sun_ra_dec;
use crate::sidereal::local_sidereal_time;

/// Apparent radius of the Sun in degrees, at unit distance
const SUN_RADIUS: f64 = 0.2666;

/// The altitude the Sun has to cross.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Threshold {
    /// Degrees above the horizon (negative for below)
    pub altitude: f64,
    /// Whether the altitude applies to the upper limb rather than the centre
    pub upper_limb: bool,
}

impl Threshold {
    /// Upper limb 35 arcminutes below the horizon, which allows for refraction.
    pub const RISE_SET: Self = Self {
        altitude: -35.0 / 60.0,
        upper_limb: true,
    };
    pub const CIVIL_TWILIGHT: Self = Self {
        altitude: -6.0,
        upper_limb: false,
    };
    pub const NAUTICAL_TWILIGHT: Self = Self {
        altitude: -12.0,
        upper_limb: false,
    };
    pub const ASTRONOMICAL_TWILIGHT: Self = Self {
        altitude: -18.0,
        upper_limb: false,
    };

    /// Altitude that the centre of the Sun must reach, at a given distance
    pub fn centre_altitude(&self, distance: f64) -> f64 {
        if self.upper_limb {
            self.altitude - SUN_RADIUS / distance
        } else {
            self.altitude
        }
    }
}

/// Cosine of the hour angle at which the Sun is at `altitude`.
///
/// Values outside [-1, 1] mean the Sun never gets there.
pub(crate) fn cos_hour_angle(altitude: f64, latitude: f64, sin_dec: f64, cos_dec: f64) -> f64 {
    (sind(altitude) - sind(latitude) * sin_dec) / (cosd(latitude) * cos_dec)
}

pub(crate) enum Arc {
    AlwaysBelow,
    AlwaysAbove,
    /// Half the diurnal arc, in degrees of hour angle
    Crossing(f64),
}

pub(crate) fn diurnal_arc(cos_hour_angle: f64) -> Arc {
    if cos_hour_angle >= 1.0 {
        Arc::AlwaysBelow
    } else if cos_hour_angle <= -1.0 {
        Arc::AlwaysAbove
    } else {
        Arc::Crossing(acosd(cos_hour_angle))
    }
}

/// Outcome of solving for the crossings on one day.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RiseSet {
    /// The Sun crosses the threshold going up at `rise` and down at `set`.
    Crossing { rise: f64, set: f64 },
    /// The Sun stays above the threshold all day.
    AlwaysAbove { transit: f64 },
    /// The Sun stays below the threshold all day.
    AlwaysBelow { transit: f64 },
}

impl RiseSet {
    /// Time at which the Sun crosses the meridian
    pub fn transit(&self) -> f64 {
        match *self {
            Self::Crossing { rise, set } => 0.5 * (rise + set),
            Self::AlwaysAbove { transit } | Self::AlwaysBelow { transit } => transit,
        }
    }

    pub fn crossing(&self) -> Option<(f64, f64)> {
        match *self {
            Self::Crossing { rise, set } => Some((rise, set)),
            _ => None,
        }
    }

    /// Rise and set times with the degenerate cases folded in: a full
    /// 24 hours centred on transit when always above, and both equal to
    /// transit when always below.
    pub fn hours(&self) -> (f64, f64) {
        match *self {
            Self::Crossing { rise, set } => (rise, set),
            Self::AlwaysAbove { transit } => (transit - 12.0, transit + 12.0),
            Self::AlwaysBelow { transit } => (transit, transit),
        }
    }

    /// Move a real crossing earlier/later by `margin` hours on each side
    fn widen(self, margin: f64) -> Self {
        match self {
            Self::Crossing { rise, set } => Self::Crossing {
                rise: rise - margin,
                set: set + margin,
            },
            other => other,
        }
    }
}

/// The kinds of event times that can be requested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phenomenon {
    #[default]
    #[serde(alias = "sunRiseSet")]
    RiseSet,
    #[serde(alias = "civilTwilight")]
    CivilTwilight,
    #[serde(alias = "nauticalTwilight")]
    NauticalTwilight,
    #[serde(alias = "astronomicalTwilight")]
    AstronomicalTwilight,
    /// First launch 30 minutes before sunrise, last landing 30 minutes
    /// after sunset
    #[serde(alias = "aviationTime")]
    Aviation,
    /// Sunrise to sunset, and sunset to the next sunrise, as periods
    #[serde(alias = "dayNightTime")]
    DayNight,
}

impl Phenomenon {
    pub fn threshold(self) -> Threshold {
        match self {
            Self::RiseSet | Self::Aviation | Self::DayNight => Threshold::RISE_SET,
            Self::CivilTwilight => Threshold::CIVIL_TWILIGHT,
            Self::NauticalTwilight => Threshold::NAUTICAL_TWILIGHT,
            Self::AstronomicalTwilight => Threshold::ASTRONOMICAL_TWILIGHT,
        }
    }

    /// Hours added before the rise and after the set
    pub fn margin(self) -> f64 {
        match self {
            Self::Aviation => 0.5,
            _ => 0.0,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::RiseSet => "Sunrise and Sunset times",
            Self::CivilTwilight => "Civil dawn and dusk times",
            Self::NauticalTwilight => "Nautical dawn and dusk times",
            Self::AstronomicalTwilight => "Astronomical dawn and dusk times",
            Self::Aviation => "First launch and last landing times",
            Self::DayNight => "Daytime and Nighttime",
        }
    }

    /// Summaries for the start and end events
    pub fn labels(self) -> (&'static str, &'static str) {
        match self {
            Self::RiseSet => ("Sunrise", "Sunset"),
            Self::CivilTwilight => ("Civil dawn", "Civil dusk"),
            Self::NauticalTwilight => ("Nautical dawn", "Nautical dusk"),
            Self::AstronomicalTwilight => ("Astronomical dawn", "Astronomical dusk"),
            Self::Aviation => ("First launch", "Last landing"),
            Self::DayNight => ("Daytime", "Nighttime"),
        }
    }
}

/// Find when the Sun crosses `threshold` on `date`.
///
/// The Sun's position is evaluated once, at local mean noon, so the
/// result is the crossing either side of that noon.
pub fn solve(date: &CalendarDate, location: &Location, threshold: Threshold) -> RiseSet {
    let lon = location.longitude();
    let lat = location.latitude();
    let d = date.days_since_2000_jan_0() + 0.5 - lon / 360.0;
    let sidtime = local_sidereal_time(d, lon);
    let sun = sun_ra_dec(d);

    let transit = 12.0 - rev180(sidtime - sun.right_ascension) / 15.0;
    let altitude = threshold.centre_altitude(sun.distance);
    let cost = cos_hour_angle(
        altitude,
        lat,
        sind(sun.declination),
        cosd(sun.declination),
    );
    match diurnal_arc(cost) {
        Arc::AlwaysBelow => RiseSet::AlwaysBelow { transit },
        Arc::AlwaysAbove => RiseSet::AlwaysAbove { transit },
        Arc::Crossing(h) => {
            let t = h / 15.0;
            RiseSet::Crossing {
                rise: transit - t,
                set: transit + t,
            }
        }
    }
}

/// Event times for one of the named phenomena.
pub fn sun_times(date: &CalendarDate, location: &Location, phenomenon: Phenomenon) -> RiseSet {
    solve(date, location, phenomenon.threshold()).widen(phenomenon.margin())
}

pub fn sun_rise_set(date: &CalendarDate, location: &Location) -> RiseSet {
    sun_times(date, location, Phenomenon::RiseSet)
}

pub fn civil_twilight(date: &CalendarDate, location: &Location) -> RiseSet {
    sun_times(date, location, Phenomenon::CivilTwilight)
}

pub fn nautical_twilight(date: &CalendarDate, location: &Location) -> RiseSet {
    sun_times(date, location, Phenomenon::NauticalTwilight)
}

pub fn astronomical_twilight(date: &CalendarDate, location: &Location) -> RiseSet {
    sun_times(date, location, Phenomenon::AstronomicalTwilight)
}

pub fn aviation_time(date: &CalendarDate, location: &Location) -> RiseSet {
    sun_times(date, location, Phenomenon::Aviation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn edinburgh() -> (CalendarDate, Location) {
        (
            CalendarDate::new(2008, 10, 31).unwrap(),
            Location::new(55.946124, -3.191528).unwrap(),
        )
    }

    fn assert_crossing(result: RiseSet, rise: f64, set: f64) {
        let (r, s) = result
            .crossing()
            .unwrap_or_else(|| panic!("expected a crossing, got {result:?}"));
        assert_abs_diff_eq!(r, rise, epsilon = 1e-6);
        assert_abs_diff_eq!(s, set, epsilon = 1e-6);
    }

    #[test]
    fn edinburgh_reference() {
        let (date, loc) = edinburgh();
        assert_crossing(sun_rise_set(&date, &loc), 7.30667966879062, 16.57254501861994);
    }

    #[test]
    fn edinburgh_twilights() {
        let (date, loc) = edinburgh();
        assert_crossing(civil_twilight(&date, &loc), 6.650568260761303, 17.22865642664926);
        assert_crossing(nautical_twilight(&date, &loc), 5.918649349761194, 17.96057533764937);
        assert_crossing(
            astronomical_twilight(&date, &loc),
            5.202294949495937,
            18.676929737914627,
        );
    }

    #[test]
    fn aviation_adds_half_an_hour() {
        let (date, loc) = edinburgh();
        assert_crossing(aviation_time(&date, &loc), 6.80667966879062, 17.07254501861994);
    }

    #[test]
    fn twilight_ordering() {
        let (date, loc) = edinburgh();
        let (sunrise, sunset) = sun_rise_set(&date, &loc).hours();
        let (civil_dawn, civil_dusk) = civil_twilight(&date, &loc).hours();
        let (nautical_dawn, nautical_dusk) = nautical_twilight(&date, &loc).hours();
        let (astro_dawn, astro_dusk) = astronomical_twilight(&date, &loc).hours();
        assert!(astro_dawn <= nautical_dawn);
        assert!(nautical_dawn <= civil_dawn);
        assert!(civil_dawn <= sunrise);
        assert!(sunset <= civil_dusk);
        assert!(civil_dusk <= nautical_dusk);
        assert!(nautical_dusk <= astro_dusk);
    }

    #[test]
    fn midnight_sun() {
        let date = CalendarDate::new(2010, 6, 21).unwrap();
        let loc = Location::new(80.0, 0.0).unwrap();
        let result = sun_rise_set(&date, &loc);
        assert!(matches!(result, RiseSet::AlwaysAbove { .. }));
        assert_abs_diff_eq!(result.transit(), 12.02939975792437, epsilon = 1e-6);
        let (rise, set) = result.hours();
        assert_abs_diff_eq!(rise, 0.029399757924370107, epsilon = 1e-6);
        assert_abs_diff_eq!(set, 24.02939975792437, epsilon = 1e-6);
        assert_eq!(result.crossing(), None);
    }

    #[test]
    fn polar_night() {
        let date = CalendarDate::new(2010, 12, 21).unwrap();
        let loc = Location::new(80.0, 0.0).unwrap();
        let result = sun_rise_set(&date, &loc);
        assert!(matches!(result, RiseSet::AlwaysBelow { .. }));
        let (rise, set) = result.hours();
        assert_eq!(rise, set);
        assert_abs_diff_eq!(rise, 11.967376197112534, epsilon = 1e-6);
    }

    #[test]
    fn aviation_leaves_degenerate_days_alone() {
        let date = CalendarDate::new(2010, 12, 21).unwrap();
        let loc = Location::new(80.0, 0.0).unwrap();
        assert_eq!(aviation_time(&date, &loc), sun_rise_set(&date, &loc));
    }

    #[test]
    fn southern_and_eastern() {
        let rio = Location::new(-22.9, -43.2).unwrap();
        let date = CalendarDate::new(2010, 1, 15).unwrap();
        assert_crossing(sun_rise_set(&date, &rio), 8.345907541621024, 21.728974885845908);

        // Sunrise in Tokyo happens on the previous UT day
        let tokyo = Location::new(35.7, 139.7).unwrap();
        let date = CalendarDate::new(2010, 6, 21).unwrap();
        assert_crossing(sun_rise_set(&date, &tokyo), -4.575274704561441, 10.004591339187996);
    }

    #[test]
    fn repeatable() {
        let (date, loc) = edinburgh();
        for phenomenon in [
            Phenomenon::RiseSet,
            Phenomenon::CivilTwilight,
            Phenomenon::Aviation,
        ] {
            let a = sun_times(&date, &loc, phenomenon);
            let b = sun_times(&date, &loc, phenomenon);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn transit_is_midpoint() {
        let (date, loc) = edinburgh();
        let result = sun_rise_set(&date, &loc);
        assert_abs_diff_eq!(result.transit(), 11.93961234370528, epsilon = 1e-6);
    }

    #[test]
    fn upper_limb_correction() {
        assert_abs_diff_eq!(
            Threshold::RISE_SET.centre_altitude(1.0),
            -35.0 / 60.0 - 0.2666
        );
        assert_eq!(Threshold::CIVIL_TWILIGHT.centre_altitude(0.98), -6.0);
    }

    #[test]
    fn phenomenon_thresholds() {
        assert_eq!(Phenomenon::default(), Phenomenon::RiseSet);
        assert_eq!(Phenomenon::DayNight.threshold(), Threshold::RISE_SET);
        assert_eq!(Phenomenon::Aviation.threshold(), Threshold::RISE_SET);
        assert_eq!(Phenomenon::NauticalTwilight.threshold().altitude, -12.0);
        assert_eq!(Phenomenon::Aviation.margin(), 0.5);
        assert_eq!(Phenomenon::CivilTwilight.margin(), 0.0);
        assert_eq!(Phenomenon::Aviation.labels(), ("First launch", "Last landing"));
    }

    #[test]
    fn phenomenon_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            kind: Phenomenon,
        }
        let parse = |s: &str| toml::from_str::<Wrapper>(s).map(|w| w.kind);
        assert_eq!(parse(r#"kind = "civil-twilight""#).unwrap(), Phenomenon::CivilTwilight);
        assert_eq!(parse(r#"kind = "day-night""#).unwrap(), Phenomenon::DayNight);
        assert_eq!(parse(r#"kind = "aviationTime""#).unwrap(), Phenomenon::Aviation);
        assert_eq!(parse(r#"kind = "sunRiseSet""#).unwrap(), Phenomenon::RiseSet);
        assert!(parse(r#"kind = "moonrise""#).is_err());
    }
}
