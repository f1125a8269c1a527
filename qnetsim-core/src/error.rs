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

//! Errors raised while building a [`crate::network::Network`].
//!
//! The kernel's `exec()` loop itself has no recoverable error path: an
//! invariant violation (e.g. decrementing a station's queue below zero)
//! is a programming bug and panics instead of returning a `Result`.

use thiserror::Error;

/// Errors that can occur while assembling a station or wiring an arc
/// before a simulation run starts.
#[derive(Error, Debug, PartialEq)]
pub enum NetworkError {
    /// A station kind value outside of `{External, Internal}` was supplied.
    #[error("station kind must be 0 (external) or 1 (internal), got {0}")]
    InvalidKind(i64),
    /// A station was declared with zero capacity.
    #[error("station {0:?} has capacity 0, which can never serve anyone")]
    ZeroCapacity(String),
    /// A station's mean interarrival or service time was not positive.
    #[error("station {0:?} has a non-positive time parameter: {1}")]
    NonPositiveTime(String, f64),
    /// An arc referenced a station index that does not exist.
    #[error("arc references station index {0}, but the network only has {1} stations")]
    StationIndexOutOfRange(usize, usize),
    /// An arc's routing probability was outside of `[0, 1]`.
    #[error("arc from {0} to {1} has probability {2}, outside of [0, 1]")]
    InvalidProbability(usize, usize, f64),
    /// The simulation horizon (`final_time`) was negative.
    #[error("final_time must be non-negative, got {0}")]
    NegativeFinalTime(f64),
}
