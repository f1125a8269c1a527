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

//! The seeded pseudorandom stream used to draw inter-arrival and service
//! times, and to pick a routing target at a [`crate::event::Walkout`]
//! transition.

use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::{Distribution, Exp};

/// Wraps a seeded RNG so that two simulations with the same seed draw
/// the exact same sequence of values, regardless of how many stations
/// or events are involved (everything is drawn from one stream, in the
/// order the kernel asks for it).
#[derive(Debug, Clone)]
pub struct SimRng {
    inner: StdRng,
}

impl SimRng {
    /// Create a new stream seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a sample from an exponential distribution with the given
    /// mean (not rate). `mean` must be strictly positive.
    pub fn exp(&mut self, mean: f64) -> f64 {
        debug_assert!(mean > 0.0, "exponential mean must be positive");
        Exp::new(1.0 / mean)
            .expect("exponential rate must be finite and positive")
            .sample(&mut self.inner)
    }

    /// Draw a uniform sample in `[0, 1)`, used to pick a routing target.
    pub fn uniform01(&mut self) -> f64 {
        self.inner.gen_range(0.0..1.0)
    }
}
