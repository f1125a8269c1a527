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

//! Reads the plain-text network description format from spec §6:
//!
//! ```text
//! final_time  initial_clients
//! num_stations
//! label  kind  [mean_interarrival]  mean_service  capacity   (x num_stations)
//! num_arcs
//! source_index  target_index  probability                    (x num_arcs)
//! ```
//!
//! The file is read as a flat whitespace-delimited token stream rather
//! than line-by-line, following the original C++ reader's tolerance for
//! a record spanning more than one physical line; blank lines carry no
//! meaning either way.

use std::path::{Path, PathBuf};

use qnetsim_core::{error::NetworkError, network::Network, station::Kind};

use crate::error::SimError;

struct Tokens<'a> {
    path: PathBuf,
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(path: &Path, content: &'a str) -> Self {
        Self {
            path: path.to_path_buf(),
            inner: content.split_whitespace(),
        }
    }

    fn next_str(&mut self, field: &str) -> Result<&'a str, SimError> {
        self.inner.next().ok_or_else(|| SimError::Format {
            path: self.path.clone(),
            reason: format!("expected {field}, but the input ended"),
        })
    }

    fn next_f64(&mut self, field: &str) -> Result<f64, SimError> {
        let tok = self.next_str(field)?;
        tok.parse::<f64>().map_err(|_| SimError::Format {
            path: self.path.clone(),
            reason: format!("expected {field} to be a number, got {tok:?}"),
        })
    }

    fn next_u64(&mut self, field: &str) -> Result<u64, SimError> {
        let tok = self.next_str(field)?;
        tok.parse::<u64>().map_err(|_| SimError::Format {
            path: self.path.clone(),
            reason: format!("expected {field} to be a non-negative integer, got {tok:?}"),
        })
    }

    fn next_usize(&mut self, field: &str) -> Result<usize, SimError> {
        let tok = self.next_str(field)?;
        tok.parse::<usize>().map_err(|_| SimError::Format {
            path: self.path.clone(),
            reason: format!("expected {field} to be a non-negative integer, got {tok:?}"),
        })
    }
}

/// Parse the network description at `path`, returning the assembled
/// network, the configured horizon, and the initial client count.
pub fn parse_network_file(path: &Path) -> Result<(Network, f64, u64), SimError> {
    let content = std::fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut tokens = Tokens::new(path, &content);

    let final_time = tokens.next_f64("final_time")?;
    if final_time < 0.0 {
        return Err(SimError::Domain {
            path: path.to_path_buf(),
            source: NetworkError::NegativeFinalTime(final_time),
        });
    }
    let initial_clients = tokens.next_u64("initial_clients")?;

    let num_stations = tokens.next_usize("num_stations")?;
    let mut network = Network::new();
    for i in 0..num_stations {
        let label = tokens.next_str("station label")?.to_string();
        let kind_value = tokens.next_u64("station kind")?;
        let kind = match kind_value {
            0 => Kind::External,
            1 => Kind::Internal,
            other => {
                return Err(SimError::Domain {
                    path: path.to_path_buf(),
                    source: NetworkError::InvalidKind(other as i64),
                })
            }
        };
        let mean_interarrival = if kind == Kind::External {
            tokens.next_f64("mean_interarrival")?
        } else {
            0.0
        };
        let mean_service = tokens.next_f64("mean_service")?;
        let capacity = tokens.next_u64("capacity")?;

        network
            .add_station(label, kind, mean_interarrival, mean_service, capacity)
            .map_err(|source| SimError::Domain {
                path: path.to_path_buf(),
                source,
            })?;
    }

    let num_arcs = tokens.next_usize("num_arcs")?;
    for _ in 0..num_arcs {
        let source = tokens.next_usize("arc source_index")?;
        let target = tokens.next_usize("arc target_index")?;
        let probability = tokens.next_f64("arc probability")?;
        network
            .add_arc(source, target, probability)
            .map_err(|source_err| SimError::Domain {
                path: path.to_path_buf(),
                source: source_err,
            })?;
    }

    Ok((network, final_time, initial_clients))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use qnetsim_core::station::Kind;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_fixture(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn parses_a_well_formed_two_station_network() {
        let file = write_fixture(
            "500.0 0
             2
             A 0 1.0 0.5 1
             B 1   0.4 2
             1
             0 1 1.0",
        );
        let (network, final_time, initial_clients) = parse_network_file(file.path()).unwrap();
        assert_eq!(final_time, 500.0);
        assert_eq!(initial_clients, 0);
        assert_eq!(network.len(), 2);
        assert_eq!(network.station(0).kind(), Kind::External);
        assert_eq!(network.station(1).kind(), Kind::Internal);
        assert_eq!(network.station(0).targets()[0].station, 1);
    }

    #[test]
    fn tolerates_a_record_split_across_several_lines() {
        let file = write_fixture(
            "10.0
             3
             1
             A
             0
             1.0
             0.5
             1
             0",
        );
        let (network, final_time, initial_clients) = parse_network_file(file.path()).unwrap();
        assert_eq!(final_time, 10.0);
        assert_eq!(initial_clients, 3);
        assert_eq!(network.len(), 1);
    }

    #[test]
    fn missing_field_is_a_format_error() {
        let file = write_fixture("10.0 0\n1\nA 0 1.0 0.5");
        let err = parse_network_file(file.path()).unwrap_err();
        assert!(matches!(err, SimError::Format { .. }));
    }

    #[test]
    fn unknown_kind_value_is_a_domain_error() {
        let file = write_fixture("10.0 0\n1\nA 2 1.0 0.5 1\n0");
        let err = parse_network_file(file.path()).unwrap_err();
        assert!(matches!(err, SimError::Domain { .. }));
    }

    #[test]
    fn negative_final_time_is_a_domain_error() {
        let file = write_fixture("-1.0 0\n1\nA 1 0.5 1\n0");
        let err = parse_network_file(file.path()).unwrap_err();
        assert!(matches!(err, SimError::Domain { .. }));
    }

    #[test]
    fn zero_capacity_is_a_domain_error() {
        let file = write_fixture("10.0 0\n1\nA 1 0.5 0\n0");
        let err = parse_network_file(file.path()).unwrap_err();
        assert!(matches!(err, SimError::Domain { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = parse_network_file(Path::new("/no/such/file/here.net")).unwrap_err();
        assert!(matches!(err, SimError::Io { .. }));
    }
}
