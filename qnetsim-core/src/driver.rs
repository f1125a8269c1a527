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

//! The simulation driver: seeds the RNG, places initial clients,
//! schedules the initial external arrivals, runs the main loop, and
//! reports final statistics.
//!
//! Parsing the network description and formatting the report as text
//! are deliberately kept out of this crate (see spec §1) — those are
//! straightforward I/O concerns owned by the `qnetsim` binary crate.
//! `Simulation::report` only assembles the numbers; turning them into a
//! printable block is the caller's job.

use log::trace;

use crate::{
    event::{self, Kind},
    network::Network,
    pool::EventPool,
    queue::PendingQueue,
    rng::SimRng,
    station::Kind as StationKind,
};

/// Seeds the driver, places initial clients, and runs the event loop.
#[derive(Debug)]
pub struct Simulation {
    seed: u64,
    rng: SimRng,
    current_time: f64,
    final_time: f64,
    network: Network,
    pool: EventPool,
    queue: PendingQueue,
}

/// Per-station figures gathered at the end of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct StationReport {
    /// The station's label.
    pub label: String,
    /// Customers that arrived (external, internal, or placed at t=0).
    pub arrived: u64,
    /// Customers whose service completed.
    pub served: u64,
    /// Number in service at the moment the run ended.
    pub in_service: u64,
    /// Number still queued at the moment the run ended.
    pub queue_len: u64,
    /// Running maximum queue length observed.
    pub max_queue: u64,
    /// Initial clients placed at this station at t=0.
    pub init_queue: u64,
    /// `total_wait_time / arrived` — average wait per customer.
    pub avg_wait: f64,
    /// `total_wait_time / final_time` — average queue length over time.
    pub avg_queue_len: f64,
    /// Total time spent with nobody in service.
    pub empty_time: f64,
    /// `pond_use / final_time` — average server occupancy over time.
    pub avg_occupancy: f64,
}

/// The figures gathered at the end of a run: the seed and horizon used,
/// plus a [`StationReport`] per station in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// The seed the run was driven with.
    pub seed: u64,
    /// The configured simulation horizon.
    pub final_time: f64,
    /// Per-station figures, in declaration order.
    pub stations: Vec<StationReport>,
}

impl Simulation {
    /// Build a driver over `network`, placing `initial_clients` at t=0
    /// round-robin starting at station 0, and scheduling one
    /// `ExternalArrival` per external station. `seed` drives every
    /// random draw made during the run.
    pub fn new(mut network: Network, final_time: f64, initial_clients: u64, seed: u64) -> Self {
        let mut rng = SimRng::new(seed);
        let mut pool = EventPool::new();
        let mut queue = PendingQueue::new();

        let n = network.len();
        if n > 0 {
            for i in 0..initial_clients {
                let station_id = (i as usize) % n;
                let station = network.station_mut(station_id);
                station.inc_queue();
                station.stats_mut().init_queue += 1;
                station.stats_mut().arrived += 1;
            }
        }

        let external: Vec<_> = network.external_stations().collect();
        for station_id in external {
            let mean = network.station(station_id).mean_interarrival();
            let time = rng.exp(mean);
            let id = pool.acquire(Kind::ExternalArrival);
            pool.set(id, event::Event { time, station: station_id, kind: Kind::ExternalArrival });
            queue.insert(id, time);
        }

        Self {
            seed,
            rng,
            current_time: 0.0,
            final_time,
            network,
            pool,
            queue,
        }
    }

    /// Current simulation time. Equals the time of the last popped
    /// event once `exec()` has run.
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Read-only access to the network, e.g. for a caller that wants to
    /// inspect stations mid-run (tests do this to check invariants).
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Run the main loop: pop the earliest event, perform its
    /// transition, and repeat until the popped event's time reaches
    /// `final_time`. Afterwards, account the tail interval
    /// `[current_time, final_time)` against each station's final
    /// occupancy, matching spec §4.5.
    pub fn exec(&mut self) {
        let mut current = self.queue.pop_earliest();
        if let Some(id) = current {
            self.current_time = self.pool.get(id).time;
        }

        while let Some(id) = current {
            if self.current_time >= self.final_time {
                self.pool.release(id);
                break;
            }

            trace!(
                "t={:.6} station={} kind={:?}",
                self.current_time,
                self.pool.get(id).station,
                self.pool.get(id).kind
            );

            let released = event::perform(
                id,
                self.current_time,
                &mut self.network,
                &mut self.pool,
                &mut self.queue,
                &mut self.rng,
            );
            if let Some(r) = released {
                self.pool.release(r);
            }

            current = self.queue.pop_earliest();
            if let Some(next_id) = current {
                self.current_time = self.pool.get(next_id).time;
            }
        }

        let final_time = self.final_time;
        let current_time = self.current_time;
        for station in self.network.stations_mut() {
            let delta = final_time - current_time;
            if station.in_service() == 0 {
                station.stats_mut().empty_time += delta;
            } else {
                let in_service = station.in_service();
                station.stats_mut().pond_use += in_service as f64 * delta;
            }
            let queue_len = station.queue_len();
            station.stats_mut().total_wait_time += queue_len as f64 * delta;
        }
    }

    /// Drain any events still pending (only possible if `exec()` was
    /// never called, or was interrupted) back into the pool. Kept
    /// separate from `exec()` so callers can assert the pool invariant
    /// (spec §8 property 6) after a run.
    pub fn drain(&mut self) {
        self.queue.clear(&mut self.pool);
    }

    /// Number of event records ever allocated by this run's pool.
    pub fn allocated_events(&self) -> usize {
        self.pool.allocated()
    }

    /// Number of event records currently idle in the pool's free-lists.
    pub fn idle_events(&self) -> usize {
        self.pool.idle()
    }

    /// Assemble the final report. Does not mutate anything; call after
    /// `exec()` has returned.
    pub fn report(&self) -> Report {
        let stations = self
            .network
            .stations()
            .map(|s| {
                let stats = s.stats();
                let avg_wait = if stats.arrived > 0 {
                    stats.total_wait_time / stats.arrived as f64
                } else {
                    0.0
                };
                let avg_queue_len = if self.final_time > 0.0 {
                    stats.total_wait_time / self.final_time
                } else {
                    0.0
                };
                let avg_occupancy = if self.final_time > 0.0 {
                    stats.pond_use / self.final_time
                } else {
                    0.0
                };
                StationReport {
                    label: s.label().to_string(),
                    arrived: stats.arrived,
                    served: stats.served,
                    in_service: s.in_service(),
                    queue_len: s.queue_len(),
                    max_queue: stats.max_queue,
                    init_queue: stats.init_queue,
                    avg_wait,
                    avg_queue_len,
                    empty_time: stats.empty_time,
                    avg_occupancy,
                }
            })
            .collect();

        Report {
            seed: self.seed,
            final_time: self.final_time,
            stations,
        }
    }

    /// Expose the station kind, used by the DOT writer in the `qnetsim`
    /// binary crate without re-deriving it from the parsed description.
    pub fn station_kind(&self, id: crate::station::StationId) -> StationKind {
        self.network.station(id).kind()
    }
}
