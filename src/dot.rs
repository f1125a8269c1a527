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

//! Renders the network topology as a Graphviz DOT digraph, per spec §6:
//! one vertex per station, one edge per routing arc.

use std::fmt::Write as _;

use qnetsim_core::{driver::Simulation, station::Kind};

/// Render `sim`'s network as a DOT digraph. Written after a successful
/// run, never on a setup failure (spec §7).
pub fn render(sim: &Simulation) -> String {
    let network = sim.network();
    let mut out = String::new();
    let _ = writeln!(out, "digraph network {{");
    let _ = writeln!(out, "    rankdir=LR;");

    for (id, station) in network.stations().enumerate() {
        let kind_label = match station.kind() {
            Kind::External => format!(
                "external\\nmean_interarrival={:.3}\\nmean_service={:.3}\\ncapacity={}",
                station.mean_interarrival(),
                station.mean_service(),
                station.capacity()
            ),
            Kind::Internal => format!(
                "internal\\nmean_service={:.3}\\ncapacity={}",
                station.mean_service(),
                station.capacity()
            ),
        };
        let _ = writeln!(
            out,
            "    s{id} [label=\"{}\\n{kind_label}\"];",
            escape(station.label())
        );
    }

    for (id, station) in network.stations().enumerate() {
        for target in station.targets() {
            let _ = writeln!(
                out,
                "    s{id} -> s{} [label=\"{:.3}\"];",
                target.station, target.probability
            );
        }
    }

    let _ = writeln!(out, "}}");
    out
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use qnetsim_core::prelude::*;

    #[test]
    fn renders_one_vertex_per_station_and_one_edge_per_arc() {
        let mut net = Network::new();
        let a = net.add_station("A", Kind::External, 1.0, 0.5, 1).unwrap();
        let b = net.add_station("B", Kind::Internal, 0.0, 0.5, 1).unwrap();
        net.add_arc(a, b, 1.0).unwrap();

        let sim = Simulation::new(net, 10.0, 0, 1);
        let dot = render(&sim);

        assert!(dot.starts_with("digraph network {"));
        assert!(dot.contains("s0 [label=\"A"));
        assert!(dot.contains("s1 [label=\"B"));
        assert!(dot.contains("s0 -> s1 [label=\"1.000\"];"));
    }

    #[test]
    fn escapes_quotes_and_backslashes_in_labels() {
        assert_eq!(escape(r#"a"b\c"#), r#"a\"b\\c"#);
    }
}
