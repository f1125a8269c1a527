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

//! A single service resource (station) in the network.

/// Stable identity of a station: its index within
/// [`crate::network::Network::stations`]. Events reference stations by
/// this index rather than by pointer, so the station vector can grow
/// without invalidating anything already scheduled.
pub type StationId = usize;

/// Whether a station admits its own external arrival stream, or only
/// receives work routed in from other stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Emits its own arrival stream, drawn from `Exp(mean_interarrival)`.
    External,
    /// Receives work only via routing from another station's walkout.
    Internal,
}

/// A directed arc to a successor station, carrying the probability that
/// a departing customer is routed there.
#[derive(Debug, Clone, Copy)]
pub struct Target {
    /// The successor station.
    pub station: StationId,
    /// Probability of routing to `station`.
    pub probability: f64,
}

/// Running accumulators for a station, updated on every event that
/// touches it. None of these are reset during a run; `report()` reads
/// them once at the very end.
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    /// Number of customers that have arrived (external, internal, or
    /// placed as initial clients).
    pub arrived: u64,
    /// Number of customers whose service has completed (walkouts).
    pub served: u64,
    /// Sum, over every accounted sub-interval, of `queue_len * dt`.
    pub total_wait_time: f64,
    /// Sum, over every accounted sub-interval, of `in_service * dt`.
    pub pond_use: f64,
    /// Total time during which `in_service == 0`.
    pub empty_time: f64,
    /// Timestamp of the last event accounted at this station.
    pub prev_event_time: f64,
    /// Number of initial customers placed at this station at t=0.
    pub init_queue: u64,
    /// Running maximum of `queue_len` observed.
    pub max_queue: u64,
}

/// A service resource: capacity, queue, routing table, and counters.
#[derive(Debug, Clone)]
pub struct Station {
    label: String,
    kind: Kind,
    mean_interarrival: f64,
    mean_service: f64,
    capacity: u64,
    in_service: u64,
    queue_len: u64,
    targets: Vec<Target>,
    stats: Statistics,
}

impl Station {
    /// Build a new, empty station. `mean_interarrival` is only ever read
    /// when `kind == Kind::External`.
    pub fn new(label: impl Into<String>, kind: Kind, mean_interarrival: f64, mean_service: f64, capacity: u64) -> Self {
        Self {
            label: label.into(),
            kind,
            mean_interarrival,
            mean_service,
            capacity,
            in_service: 0,
            queue_len: 0,
            targets: Vec::new(),
            stats: Statistics::default(),
        }
    }

    /// The station's opaque label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// External or Internal.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Mean of the external inter-arrival distribution. Only meaningful
    /// for `Kind::External` stations.
    pub fn mean_interarrival(&self) -> f64 {
        self.mean_interarrival
    }

    /// Mean of the service-time distribution.
    pub fn mean_service(&self) -> f64 {
        self.mean_service
    }

    /// Maximum concurrent services.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Number currently being served, in `[0, capacity]`.
    pub fn in_service(&self) -> u64 {
        self.in_service
    }

    /// Number of work items waiting.
    pub fn queue_len(&self) -> u64 {
        self.queue_len
    }

    /// The station's outgoing routing arcs, sorted ascending by
    /// probability.
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Read-only access to this station's accumulators.
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Mutable access to this station's accumulators, used by the event
    /// transitions and by the end-of-run fixup in
    /// [`crate::driver::Simulation::exec`].
    pub fn stats_mut(&mut self) -> &mut Statistics {
        &mut self.stats
    }

    /// `true` iff the station is serving at capacity.
    pub fn is_full(&self) -> bool {
        self.in_service == self.capacity
    }

    /// Increment the number in service. Panics if that would exceed
    /// capacity — a programming-invariant violation, not a recoverable
    /// error (see spec §7).
    pub fn inc_use(&mut self) {
        assert!(
            self.in_service < self.capacity,
            "station {:?}: inc_use would exceed capacity {}",
            self.label,
            self.capacity
        );
        self.in_service += 1;
    }

    /// Decrement the number in service. Panics on underflow.
    pub fn dec_use(&mut self) {
        assert!(
            self.in_service > 0,
            "station {:?}: dec_use underflow (in_service already 0)",
            self.label
        );
        self.in_service -= 1;
    }

    /// Increment the queue length. Panics on overflow (practically
    /// unreachable given `u64`, kept for symmetry with `dec_queue`).
    pub fn inc_queue(&mut self) {
        self.queue_len = self
            .queue_len
            .checked_add(1)
            .expect("station queue length overflowed u64");
    }

    /// Decrement the queue length. Panics on underflow.
    pub fn dec_queue(&mut self) {
        assert!(
            self.queue_len > 0,
            "station {:?}: dec_queue underflow (queue_len already 0)",
            self.label
        );
        self.queue_len -= 1;
    }

    /// Add an outgoing arc to `station` with routing probability `p`,
    /// keeping `targets` sorted ascending by probability (stable: ties
    /// keep insertion order).
    pub fn add_target(&mut self, station: StationId, p: f64) {
        let pos = self
            .targets
            .iter()
            .position(|t| t.probability > p)
            .unwrap_or(self.targets.len());
        self.targets.insert(pos, Target { station, probability: p });
    }

    /// Pick a successor given a uniform draw `u` in `[0, 1)`, using the
    /// conventional cumulative-distribution rule: walk the
    /// ascending-probability arcs accumulating their probabilities, and
    /// return the first whose cumulative upper bound exceeds `u`.
    /// Returns `None` if `u` falls in the residual mass (the customer
    /// leaves the system).
    ///
    /// Spec note: the original C++ source compared `u` directly against
    /// each arc's *individual* probability rather than a running sum,
    /// which does not implement "route to target i with probability
    /// p_i" for anything but the first arc. The spec requires the
    /// conventional cumulative sampler implemented here and flags the
    /// original behavior as a defect, not a semantics to reproduce.
    pub fn pick_target(&self, u: f64) -> Option<StationId> {
        let mut cumulative = 0.0;
        for t in &self.targets {
            cumulative += t.probability;
            if u < cumulative {
                return Some(t.station);
            }
        }
        None
    }
}
