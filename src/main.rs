// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use std::process::ExitCode;

use clap::Parser;
use eci_ecef::cli::{self, Args};

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // stdout carries only the three ECEF components.
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();

    let inputs = match args.inputs() {
        Ok(inputs) => inputs,
        Err(err) => {
            tracing::debug!(%err, "rejected command line");
            eprintln!("{}", cli::user_message(&err));
            return Ok(ExitCode::from(2));
        }
    };

    let conversion = eci_ecef::convert(&inputs.instant, inputs.eci);
    tracing::info!(
        instant = %inputs.instant,
        julian_date = conversion.julian_date.value(),
        gmst_deg = conversion.gmst.degrees(),
        "converted"
    );

    cli::write_ecef(&mut std::io::stdout().lock(), &conversion.ecef)?;
    Ok(ExitCode::SUCCESS)
}
