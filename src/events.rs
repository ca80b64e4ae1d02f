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

//! Turn fractional UT hours into timestamped events over a range of days.

use chrono::naive::NaiveTime;
use chrono::{DateTime, Duration, Utc};
use log::{debug, info};

use crate::calendar::CalendarDate;
use crate::error::DomainError;
use crate::location::Location;
use crate::riseset::{sun_times, Phenomenon};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub summary: &'static str,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Event {
    fn instant(summary: &'static str, time: DateTime<Utc>) -> Self {
        Self {
            summary,
            start: time,
            end: time,
        }
    }
}

/// Convert hours UT relative to midnight starting `date` to a timestamp.
///
/// Rounds to the nearest second. Hours outside [0, 24) land on the
/// neighbouring days.
pub fn hours_to_datetime(date: &CalendarDate, hours: f64) -> DateTime<Utc> {
    let midnight = date.naive().and_time(NaiveTime::default()).and_utc();
    midnight + Duration::seconds((hours * 3600.0).round() as i64)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Calendar {
    pub name: String,
    pub events: Vec<Event>,
}

impl Calendar {
    /// Events for `days` consecutive days starting at `first`.
    ///
    /// Days on which the Sun never crosses the threshold produce no events.
    /// For [`Phenomenon::DayNight`] each night runs until just before the
    /// following day's sunrise, so the day after the range must also be
    /// within the supported years.
    pub fn generate(
        location: &Location,
        phenomenon: Phenomenon,
        first: CalendarDate,
        days: u32,
    ) -> Result<Self, DomainError> {
        let (start_label, end_label) = phenomenon.labels();
        let mut events = Vec::new();
        let mut date = first;
        for i in 0..days {
            if i > 0 {
                date = date.succ()?;
            }
            let times = sun_times(&date, location, phenomenon);
            let Some((rise, set)) = times.crossing() else {
                debug!("No {} on {date}: {times:?}", start_label.to_lowercase());
                continue;
            };
            let rise = hours_to_datetime(&date, rise);
            let set = hours_to_datetime(&date, set);
            if phenomenon == Phenomenon::DayNight {
                let one_second = Duration::seconds(1);
                events.push(Event {
                    summary: start_label,
                    start: rise,
                    end: set - one_second,
                });
                let next = date.succ()?;
                match sun_times(&next, location, phenomenon).crossing() {
                    Some((next_rise, _)) => events.push(Event {
                        summary: end_label,
                        start: set,
                        end: hours_to_datetime(&next, next_rise) - one_second,
                    }),
                    None => debug!("Night after {date} does not end on {next}"),
                }
            } else {
                events.push(Event::instant(start_label, rise));
                events.push(Event::instant(end_label, set));
            }
        }

        let name = format!(
            "{} for {:.6}N, {:.6}E",
            phenomenon.title(),
            location.latitude(),
            location.longitude()
        );
        info!("Generated {} events for {name} from {first}", events.len());
        Ok(Self { name, events })
    }
}
