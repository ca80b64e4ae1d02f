/* Copyright 2023, 2025 Bruce Merry
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

use serde::Deserialize;
use std::time::Duration;

use crate::riseset::Phenomenon;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    #[serde(default)]
    pub kind: Phenomenon,
    /// How far before today the calendar starts
    #[serde(default = "lookback_default", with = "humantime_serde")]
    pub lookback: Duration,
    #[serde(default = "span_default", with = "humantime_serde")]
    pub span: Duration,
}

fn lookback_default() -> Duration {
    Duration::from_secs(30 * 86400)
}

fn span_default() -> Duration {
    Duration::from_secs(365 * 86400)
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            kind: Phenomenon::default(),
            lookback: lookback_default(),
            span: span_default(),
        }
    }
}

impl CalendarConfig {
    /// Number of whole days covered by `span`
    pub fn days(&self) -> u32 {
        (self.span.as_secs() / 86400).try_into().unwrap_or(u32::MAX)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub location: LocationConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
}
