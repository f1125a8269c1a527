// qnetsim: discrete-event simulator for queueing networks of service stations
// Copyright (C) 2026
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

//! Command-line surface, per spec §6: `qnetsim <network-file> [<seed>]`.

use std::path::PathBuf;

use clap::Parser;

/// Run a queueing network simulation from a network description file.
#[derive(Debug, Parser)]
#[clap(name = "qnetsim")]
pub struct Cli {
    /// Path to the network description file.
    pub network_file: PathBuf,

    /// Seed for the random number generator. If omitted, one is derived
    /// from wall-clock time.
    pub seed: Option<u64>,
}

impl Cli {
    /// Resolve the effective seed: the one given on the command line, or
    /// one derived from wall-clock time if none was supplied.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(seed_from_wall_clock)
    }
}

fn seed_from_wall_clock() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
