//! Reader for `t i j` contact edge lists: one undirected contact per line,
//! three whitespace-separated numeric fields.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use hyperlap_core::errors::{HyperlapResult, InputError};
use hyperlap_core::models::{NodeId, Timestamp};
use serde::{Deserialize, Serialize};

/// One timestamped undirected contact between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactEvent {
    pub t: Timestamp,
    pub i: NodeId,
    pub j: NodeId,
}

impl ContactEvent {
    pub fn new(t: f64, i: u64, j: u64) -> Self {
        Self {
            t: Timestamp(t),
            i: NodeId(i),
            j: NodeId(j),
        }
    }
}

/// Parse a single record. `line_no` is 1-based and only used for errors.
pub fn parse_line(line: &str, line_no: usize) -> Result<ContactEvent, InputError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(InputError::Parse {
            line: line_no,
            reason: format!("expected 3 fields, found {}", fields.len()),
        });
    }

    let t: f64 = fields[0].parse().map_err(|_| InputError::Parse {
        line: line_no,
        reason: format!("non-numeric timestamp {:?}", fields[0]),
    })?;
    if !t.is_finite() {
        return Err(InputError::Parse {
            line: line_no,
            reason: format!("non-finite timestamp {:?}", fields[0]),
        });
    }

    Ok(ContactEvent {
        t: Timestamp::from(t),
        i: parse_node(fields[1], line_no)?,
        j: parse_node(fields[2], line_no)?,
    })
}

/// Node labels are integers, possibly written as `7.0`.
fn parse_node(field: &str, line_no: usize) -> Result<NodeId, InputError> {
    if let Ok(label) = field.parse::<u64>() {
        return Ok(NodeId(label));
    }
    match field.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u64::MAX as f64 => {
            Ok(NodeId(v as u64))
        }
        Ok(_) => Err(InputError::Parse {
            line: line_no,
            reason: format!("node label {field:?} is not a non-negative integer"),
        }),
        Err(_) => Err(InputError::Parse {
            line: line_no,
            reason: format!("non-numeric node label {field:?}"),
        }),
    }
}

/// Read every record from `reader`. Fails on the first malformed line.
pub fn read_events<R: BufRead>(reader: R) -> HyperlapResult<Vec<ContactEvent>> {
    let mut events = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        events.push(parse_line(&line, idx + 1)?);
    }
    Ok(events)
}

/// Read every record from the file at `path`.
pub fn read_file(path: &Path) -> HyperlapResult<Vec<ContactEvent>> {
    let file = File::open(path)?;
    read_events(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_and_float_fields() {
        let event = parse_line("20 1 2", 1).unwrap();
        assert_eq!(event, ContactEvent::new(20.0, 1, 2));

        let event = parse_line("  40.0\t3.0   4 ", 1).unwrap();
        assert_eq!(event, ContactEvent::new(40.0, 3, 4));
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = parse_line("20 1", 4).unwrap_err();
        assert!(matches!(err, InputError::Parse { line: 4, .. }));
        assert!(parse_line("20 1 2 3", 1).is_err());
        assert!(parse_line("", 1).is_err());
    }

    #[test]
    fn rejects_non_numeric_and_fractional_labels() {
        assert!(parse_line("x 1 2", 1).is_err());
        assert!(parse_line("20 a 2", 1).is_err());
        assert!(parse_line("20 1.5 2", 1).is_err());
        assert!(parse_line("20 -1 2", 1).is_err());
        assert!(parse_line("inf 1 2", 1).is_err());
    }

    #[test]
    fn read_events_stops_at_first_bad_line() {
        let input = "0 1 2\n30 2 3\nbroken\n70 1 3\n";
        let err = read_events(input.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn read_events_preserves_arrival_order() {
        let input = "0 1 2\n30 2 3\n70 1 3\n";
        let events = read_events(input.as_bytes()).unwrap();
        let times: Vec<f64> = events.iter().map(|e| e.t.value()).collect();
        assert_eq!(times, vec![0.0, 30.0, 70.0]);
    }
}
