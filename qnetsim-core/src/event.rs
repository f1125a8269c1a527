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

//! Event records and the transition rules that drive the simulation.
//!
//! The original source modeled events as a virtual-dispatch hierarchy
//! (`Event -> Arrival -> {External, Internal}`, `Event -> Walkout`). Here
//! that collapses into a single tagged [`Kind`] over a uniform [`Event`]
//! shape, with one dispatch function ([`perform`]) whose match arms
//! implement each transition. The shared "arrival" prologue that the
//! original expressed through subclassing is the local [`arrival`]
//! helper, called by both arrival arms.

use crate::{network::Network, pool::EventPool, queue::PendingQueue, rng::SimRng, station::StationId};

/// Identity of an event record inside an [`EventPool`]'s arena. Never
/// dereferenced directly by callers outside this crate; it is only ever
/// looked up through the pool.
pub type EventId = usize;

/// Which transition an event record fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// An arrival generated by a station's own external stream.
    ExternalArrival,
    /// An arrival routed in from another station's walkout.
    InternalArrival,
    /// A service completion.
    Walkout,
}

impl Kind {
    /// All three variants, used to size/iterate the pool's free-lists.
    pub const ALL: [Kind; 3] = [Kind::ExternalArrival, Kind::InternalArrival, Kind::Walkout];
}

/// A scheduled event: the time it fires, the station it fires at, and
/// which transition to run. Layout is uniform across variants so a
/// record can be reused in place (see [`crate::pool::EventPool`]).
#[derive(Debug, Clone, Copy)]
pub struct Event {
    /// Simulation time at which this event will fire.
    pub time: f64,
    /// The station this event targets.
    pub station: StationId,
    /// Which transition to run on firing.
    pub kind: Kind,
}

/// Shared base transition, applied before any variant-specific logic,
/// for every event kind: accounts the `[prev_event_time, current_time)`
/// interval against the target station's queue-wait and server-use
/// integrals.
fn base_transition(station: &mut crate::station::Station, current_time: f64) {
    let dt = current_time - station.stats().prev_event_time;
    let queue_len = station.queue_len();
    let in_service = station.in_service();
    let stats = station.stats_mut();
    stats.total_wait_time += queue_len as f64 * dt;
    stats.pond_use += in_service as f64 * dt;
}

/// Shared "arrival" transition for both `ExternalArrival` and
/// `InternalArrival`: accounts the arrival, either queues the customer
/// or puts it into service (scheduling its walkout), and stamps
/// `prev_event_time`.
fn arrival(
    station_id: StationId,
    current_time: f64,
    network: &mut Network,
    pool: &mut EventPool,
    queue: &mut PendingQueue,
    rng: &mut SimRng,
) {
    let station = network.station_mut(station_id);
    base_transition(station, current_time);

    station.stats_mut().arrived += 1;

    if station.is_full() {
        station.inc_queue();
        let queue_len = station.queue_len();
        let stats = station.stats_mut();
        stats.max_queue = stats.max_queue.max(queue_len);
    } else {
        if station.in_service() == 0 {
            let prev = station.stats().prev_event_time;
            station.stats_mut().empty_time += current_time - prev;
        }
        let walkout_time = current_time + rng.exp(station.mean_service());
        let walkout_id = pool.acquire(Kind::Walkout);
        pool.set(walkout_id, Event { time: walkout_time, station: station_id, kind: Kind::Walkout });
        queue.insert(walkout_id, walkout_time);
        station.inc_use();
    }

    station.stats_mut().prev_event_time = current_time;
}

/// Run the transition for event `id`, scheduling any follow-on events
/// into `queue` and/or returning records to `pool`. Returns the id of
/// the record that should be released back to the pool's free-list by
/// the caller's main loop, if any (an event that reuses itself in place
/// is re-armed here and must NOT be released).
pub fn perform(
    id: EventId,
    current_time: f64,
    network: &mut Network,
    pool: &mut EventPool,
    queue: &mut PendingQueue,
    rng: &mut SimRng,
) -> Option<EventId> {
    let event = pool.get(id);
    let station_id = event.station;
    let kind = event.kind;

    match kind {
        Kind::ExternalArrival => {
            arrival(station_id, current_time, network, pool, queue, rng);
            let station = network.station(station_id);
            let next_time = current_time + rng.exp(station.mean_interarrival());
            pool.set(id, Event { time: next_time, station: station_id, kind: Kind::ExternalArrival });
            queue.insert(id, next_time);
            None
        }
        Kind::InternalArrival => {
            arrival(station_id, current_time, network, pool, queue, rng);
            Some(id)
        }
        Kind::Walkout => {
            let station = network.station_mut(station_id);
            base_transition(station, current_time);

            let u = rng.uniform01();
            let target = station.pick_target(u);

            if let Some(target_station) = target {
                let internal_id = pool.acquire(Kind::InternalArrival);
                pool.set(
                    internal_id,
                    Event { time: current_time, station: target_station, kind: Kind::InternalArrival },
                );
                queue.insert(internal_id, current_time);
            }

            let station = network.station_mut(station_id);
            station.stats_mut().served += 1;

            let released = if station.queue_len() > 0 {
                station.dec_queue();
                let next_time = current_time + rng.exp(station.mean_service());
                pool.set(id, Event { time: next_time, station: station_id, kind: Kind::Walkout });
                queue.insert(id, next_time);
                None
            } else {
                station.dec_use();
                Some(id)
            };

            station.stats_mut().prev_event_time = current_time;
            released
        }
    }
}
