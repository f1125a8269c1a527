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

//! Errors surfaced while setting up a run: reading the network file,
//! parsing its contents, and validating the network it describes.
//! None of these can occur once `exec()` starts (see spec §7) — the
//! kernel's own invariant violations are fatal panics, not `Result`s.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong before a simulation starts running.
#[derive(Error, Debug)]
pub enum SimError {
    /// The network file could not be opened or read.
    #[error("could not read network file {path:?}: {source}")]
    Io {
        /// The file that failed to open.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The network file's contents were malformed: a missing field, a
    /// token that didn't parse as a number, or an unexpected end of
    /// input.
    #[error("malformed network file {path:?}: {reason}")]
    Format {
        /// The file that failed to parse.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },
    /// The file parsed, but described an invalid network: a bad kind
    /// value, an out-of-range station index, a non-positive time, etc.
    #[error("invalid network described by {path:?}: {source}")]
    Domain {
        /// The file that described the invalid network.
        path: PathBuf,
        /// The validation failure.
        #[source]
        source: qnetsim_core::error::NetworkError,
    },
}
