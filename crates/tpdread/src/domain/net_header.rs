//! Net cardinality header
//!
//! The `.grg` companion file carries a single line of four unsigned integers:
//! subnet, place, group and transition counts, in that order. Only the place
//! count drives decoding; the other fields are descriptive metadata. The
//! legacy reader scanned this line with no error checking; here a malformed
//! line is an explicit [`GrgFormatError`].

use crate::constants::NET_HEADER_FIELDS;
use std::path::PathBuf;
use thiserror::Error;

/// Net cardinalities parsed from a `.grg` header line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NetHeader {
    /// Number of subnets
    pub subnets: u32,
    /// Number of places (one `.tpd` record each, in file order)
    pub places: u32,
    /// Number of transition groups
    pub groups: u32,
    /// Number of transitions
    pub transitions: u32,
}

impl NetHeader {
    /// Parse a header line of exactly four whitespace-separated unsigned
    /// integers.
    pub fn parse(line: &str) -> Result<Self, GrgFormatError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != NET_HEADER_FIELDS {
            return Err(GrgFormatError::FieldCount {
                found: fields.len(),
            });
        }

        const FIELD_NAMES: [&str; NET_HEADER_FIELDS] =
            ["subnets", "places", "groups", "transitions"];
        let mut values = [0u32; NET_HEADER_FIELDS];
        for (i, raw) in fields.iter().enumerate() {
            values[i] = raw.parse().map_err(|_| GrgFormatError::InvalidField {
                field: FIELD_NAMES[i],
                value: raw.to_string(),
            })?;
        }

        Ok(Self {
            subnets: values[0],
            places: values[1],
            groups: values[2],
            transitions: values[3],
        })
    }
}

/// Net header file errors
#[derive(Debug, Error)]
pub enum GrgFormatError {
    /// Header file missing or unreadable
    #[error("can't open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Header file is empty
    #[error("net header line is missing")]
    MissingHeaderLine,
    /// Wrong number of fields on the header line
    #[error("net header: expected {NET_HEADER_FIELDS} fields, found {found}")]
    FieldCount { found: usize },
    /// A field did not parse as an unsigned integer
    #[error("net header: invalid {field} count '{value}'")]
    InvalidField { field: &'static str, value: String },
    /// I/O error while reading the header line
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_line() {
        let header = NetHeader::parse("1 12 3 9\n").unwrap();
        assert_eq!(
            header,
            NetHeader {
                subnets: 1,
                places: 12,
                groups: 3,
                transitions: 9,
            }
        );
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        let header = NetHeader::parse("  1\t12  3 9  ").unwrap();
        assert_eq!(header.places, 12);
    }

    #[test]
    fn test_parse_field_count_mismatch() {
        let result = NetHeader::parse("1 12 3");
        assert!(matches!(
            result,
            Err(GrgFormatError::FieldCount { found: 3 })
        ));
    }

    #[test]
    fn test_parse_invalid_field() {
        let result = NetHeader::parse("1 twelve 3 9");
        assert!(matches!(
            result,
            Err(GrgFormatError::InvalidField {
                field: "places",
                ..
            })
        ));
    }

    #[test]
    fn test_parse_rejects_negative_counts() {
        let result = NetHeader::parse("1 -12 3 9");
        assert!(matches!(result, Err(GrgFormatError::InvalidField { .. })));
    }
}
