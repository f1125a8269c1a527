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

//! Formats a [`qnetsim_core::driver::Report`] as the free-form text
//! block described in spec §4.5. The kernel only assembles the numbers;
//! turning them into readable text is this module's entire job.

use std::fmt::Write as _;

use qnetsim_core::driver::Report;

/// Render `report` as the text block printed to stdout at the end of a
/// run.
pub fn render(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "seed: {}", report.seed);
    let _ = writeln!(out, "final_time: {:.6}", report.final_time);
    let _ = writeln!(out);

    for station in &report.stations {
        let _ = writeln!(out, "station {}", station.label);
        let _ = writeln!(out, "  arrived:       {}", station.arrived);
        let _ = writeln!(out, "  served:        {}", station.served);
        let _ = writeln!(out, "  in_service:    {}", station.in_service);
        let _ = writeln!(out, "  queue_len:     {}", station.queue_len);
        let _ = writeln!(out, "  max_queue:     {}", station.max_queue);
        let _ = writeln!(out, "  init_queue:    {}", station.init_queue);
        let _ = writeln!(out, "  avg_wait:      {:.6}", station.avg_wait);
        let _ = writeln!(out, "  avg_queue_len: {:.6}", station.avg_queue_len);
        let _ = writeln!(out, "  empty_time:    {:.6}", station.empty_time);
        let _ = writeln!(out, "  avg_occupancy: {:.6}", station.avg_occupancy);
        let _ = writeln!(out);
    }

    out
}
