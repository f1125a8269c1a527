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

//! # qnetsim-core
//!
//! The discrete-event simulation kernel for a queueing network of
//! service stations: the event scheduler, the event transition rules,
//! the event-record pool, and the seeded random stream that drives
//! them.
//!
//! ## Main concepts
//!
//! A [`network::Network`] owns a sequence of [`station::Station`]s.
//! A [`driver::Simulation`] owns the network, a [`pool::EventPool`] of
//! reusable event records, a [`queue::PendingQueue`] of not-yet-fired
//! events, and a [`rng::SimRng`]. Call [`driver::Simulation::new`] to
//! place initial clients and schedule the first external arrivals, then
//! [`driver::Simulation::exec`] to run the simulation to its horizon,
//! and [`driver::Simulation::report`] to collect the final statistics.
//!
//! Everything that isn't the simulation kernel itself — parsing a
//! network description file, writing a Graphviz DOT file, formatting
//! the report as text, and the command-line wrapper — lives in the
//! `qnetsim` crate that depends on this one.

pub mod driver;
pub mod error;
pub mod event;
pub mod network;
pub mod pool;
pub mod prelude;
pub mod queue;
pub mod rng;
pub mod station;

#[cfg(test)]
mod tests;
