/* Copyright 2023-2025 Bruce Merry
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

use chrono::naive::NaiveDate;
use chrono::Utc;
use clap::Parser;
use log::info;
use std::path::PathBuf;

use suncal::calendar::CalendarDate;
use suncal::config::Config;
use suncal::events::Calendar;
use suncal::location::Location;

#[derive(Parser)]
#[clap(author, version)]
struct Args {
    #[clap()]
    config_file: PathBuf,
    /// First day to list [default: today minus the configured lookback]
    #[clap(long)]
    start: Option<NaiveDate>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let config: Config = toml::from_str(&std::fs::read_to_string(args.config_file)?)?;
    let location = Location::new(config.location.latitude, config.location.longitude)?;

    let start = match args.start {
        Some(start) => start,
        None => Utc::now().date_naive() - chrono::Duration::from_std(config.calendar.lookback)?,
    };
    let start = CalendarDate::try_from(start)?;
    let days = config.calendar.days();
    info!("Listing {:?} for {days} days from {start}", config.calendar.kind);

    let calendar = Calendar::generate(&location, config.calendar.kind, start, days)?;
    println!("{}", calendar.name);
    for event in &calendar.events {
        println!(
            "{}\t{}\t{}",
            event.start.to_rfc3339(),
            event.end.to_rfc3339(),
            event.summary
        );
    }
    Ok(())
}
