// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Command-line boundary for the `eci-to-ecef` binary.
//!
//! clap collects the raw positional values; counting and numeric parsing
//! happen here so that the two boundary failures map onto
//! [`Error::InvalidArgumentCount`] and [`Error::NonNumericArgument`].

use std::io::{self, Write};
use std::str::FromStr;

use clap::{ArgAction, Parser};
use tracing::Level;

use crate::civil::CivilInstant;
use crate::error::{Error, Result};
use crate::frame::Vector3;

/// Positional value names, in order.
pub const FIELDS: [&str; 9] = [
    "year", "month", "day", "hour", "minute", "second", "eci_x_km", "eci_y_km", "eci_z_km",
];

/// Usage line shown when the positional count is wrong.
pub const USAGE: &str =
    "eci-to-ecef year month day hour minute second eci_x_km eci_y_km eci_z_km";

/// Message shown when a positional value is not a number.
pub const NON_NUMERIC: &str = "Error: year, month, day, hour, minute, second, eci_x_km, \
                               eci_y_km, eci_z_km must be numeric.";

#[derive(Debug, Parser)]
#[command(
    name = "eci-to-ecef",
    version,
    about = "Convert an ECI position (km) to ECEF at a civil date and time",
    override_usage = "eci-to-ecef [OPTIONS] year month day hour minute second eci_x_km eci_y_km eci_z_km"
)]
pub struct Args {
    /// year month day hour minute second eci_x_km eci_y_km eci_z_km
    #[arg(value_name = "VALUE", num_args = 0.., allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Validated inputs of one conversion.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Inputs {
    pub instant: CivilInstant,
    pub eci: Vector3,
}

impl Args {
    /// Check the count, then parse every value.
    pub fn inputs(&self) -> Result<Inputs> {
        let values: &[String; 9] = self
            .values
            .as_slice()
            .try_into()
            .map_err(|_| Error::InvalidArgumentCount {
                found: self.values.len(),
            })?;

        let instant = CivilInstant::new(
            parse(values, 0)?,
            parse(values, 1)?,
            parse(values, 2)?,
            parse(values, 3)?,
            parse(values, 4)?,
            parse(values, 5)?,
        );
        let eci = Vector3::new(
            parse(values, 6)?,
            parse(values, 7)?,
            parse(values, 8)?,
        );
        Ok(Inputs { instant, eci })
    }

    /// Maximum level for the stderr subscriber.
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn parse<T: FromStr>(values: &[String; 9], index: usize) -> Result<T> {
    let raw = &values[index];
    raw.trim()
        .parse()
        .map_err(|_| Error::NonNumericArgument {
            name: FIELDS[index],
            value: raw.clone(),
        })
}

/// Text shown to the user for a boundary error.
pub fn user_message(err: &Error) -> String {
    match err {
        Error::InvalidArgumentCount { .. } => USAGE.to_owned(),
        Error::NonNumericArgument { .. } => NON_NUMERIC.to_owned(),
        other => other.to_string(),
    }
}

/// Shortest round-trip decimal of `value`, with lowercase `nan`, `inf`,
/// `-inf` and a signed exponent of at least two digits (`1e-05`, `1.5e+16`).
///
/// `{:?}` already switches to exponent form below 1e-4 and from 1e16 on, the
/// same thresholds, so only the exponent and special values are respelled.
pub fn format_component(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    let debug = format!("{value:?}");
    match debug.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => debug,
    }
}

/// Write the ECEF components one per line.
pub fn write_ecef<W: Write>(out: &mut W, ecef: &Vector3) -> io::Result<()> {
    writeln!(out, "{}", format_component(ecef.x))?;
    writeln!(out, "{}", format_component(ecef.y))?;
    writeln!(out, "{}", format_component(ecef.z))?;
    out.flush()
}
