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

//! The queueing network: an ordered sequence of stations with stable
//! addresses for the duration of a run. Events reference stations by
//! index (a [`StationId`]) rather than by pointer — the original source
//! used a doubly-linked list of stations to keep pointers stable as the
//! list grew; indexing into a `Vec` gives the same stability with none
//! of the bookkeeping.

use crate::{
    error::NetworkError,
    station::{Kind, Station, StationId},
};

/// An ordered collection of stations and their routing arcs.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: Vec<Station>,
}

impl Network {
    /// An empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station, returning its stable index.
    pub fn add_station(
        &mut self,
        label: impl Into<String>,
        kind: Kind,
        mean_interarrival: f64,
        mean_service: f64,
        capacity: u64,
    ) -> Result<StationId, NetworkError> {
        let label = label.into();
        if capacity == 0 {
            return Err(NetworkError::ZeroCapacity(label));
        }
        if mean_service <= 0.0 {
            return Err(NetworkError::NonPositiveTime(label, mean_service));
        }
        if kind == Kind::External && mean_interarrival <= 0.0 {
            return Err(NetworkError::NonPositiveTime(label, mean_interarrival));
        }
        let id = self.stations.len();
        self.stations
            .push(Station::new(label, kind, mean_interarrival, mean_service, capacity));
        Ok(id)
    }

    /// Add a routing arc `source -> target` with probability `p`.
    pub fn add_arc(&mut self, source: StationId, target: StationId, p: f64) -> Result<(), NetworkError> {
        let n = self.stations.len();
        if source >= n {
            return Err(NetworkError::StationIndexOutOfRange(source, n));
        }
        if target >= n {
            return Err(NetworkError::StationIndexOutOfRange(target, n));
        }
        if !(0.0..=1.0).contains(&p) {
            return Err(NetworkError::InvalidProbability(source, target, p));
        }
        self.stations[source].add_target(target, p);
        Ok(())
    }

    /// Number of stations in the network.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// `true` iff the network has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Immutable access to a station by index.
    pub fn station(&self, id: StationId) -> &Station {
        &self.stations[id]
    }

    /// Mutable access to a station by index.
    pub fn station_mut(&mut self, id: StationId) -> &mut Station {
        &mut self.stations[id]
    }

    /// Iterate over all stations in declaration order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    /// Iterate over all stations in declaration order, mutably.
    pub fn stations_mut(&mut self) -> impl Iterator<Item = &mut Station> {
        self.stations.iter_mut()
    }

    /// Indices of every station with `kind == Kind::External`, in
    /// declaration order.
    pub fn external_stations(&self) -> impl Iterator<Item = StationId> + '_ {
        self.stations
            .iter()
            .enumerate()
            .filter(|(_, s)| s.kind() == Kind::External)
            .map(|(id, _)| id)
    }
}
