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

//! The event-record pool: an arena of [`Event`] slots plus three
//! per-[`Kind`] LIFO free-lists, so a long run settles into a fixed
//! number of live records instead of allocating one per event.
//!
//! The original source made this pool a process-wide singleton reached
//! through global `NEW_EVENT`/`STORE_EVENT` macros. Here it is just a
//! field of [`crate::driver::Simulation`], threaded explicitly into
//! every transition — this keeps the kernel usable with multiple
//! concurrent simulators (e.g. in tests) and avoids hidden global state.

use crate::event::{Event, EventId, Kind};

/// Arena of event records plus three independent free-lists, keyed by
/// [`Kind`].
#[derive(Debug, Default)]
pub struct EventPool {
    arena: Vec<Event>,
    free: [Vec<EventId>; 3],
}

fn slot(kind: Kind) -> usize {
    match kind {
        Kind::ExternalArrival => 0,
        Kind::InternalArrival => 1,
        Kind::Walkout => 2,
    }
}

impl EventPool {
    /// An empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Obtain a record of the given kind: reuse one from its free-list
    /// if available, otherwise allocate a fresh slot in the arena. The
    /// returned record's fields are not yet meaningful; the caller must
    /// [`EventPool::set`] them before the id is inserted into the
    /// pending-event set.
    pub fn acquire(&mut self, kind: Kind) -> EventId {
        if let Some(id) = self.free[slot(kind)].pop() {
            return id;
        }
        let id = self.arena.len();
        self.arena.push(Event { time: 0.0, station: 0, kind });
        id
    }

    /// Overwrite the record at `id` in place.
    pub fn set(&mut self, id: EventId, event: Event) {
        self.arena[id] = event;
    }

    /// Read the record at `id`.
    pub fn get(&self, id: EventId) -> Event {
        self.arena[id]
    }

    /// Return `id` to the free-list matching its own recorded kind.
    pub fn release(&mut self, id: EventId) {
        let kind = self.arena[id].kind;
        self.free[slot(kind)].push(id);
    }

    /// Total number of record slots ever allocated (live + idle). Used
    /// by tests asserting the pool invariant in spec §8 property 6.
    pub fn allocated(&self) -> usize {
        self.arena.len()
    }

    /// Total number of records currently sitting idle across all three
    /// free-lists.
    pub fn idle(&self) -> usize {
        self.free.iter().map(Vec::len).sum()
    }
}
