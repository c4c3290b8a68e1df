//! Net header file I/O
//!
//! This module reads the `.grg` companion file holding the net cardinalities.

use crate::constants::GRG_FILE_EXTENSION;
use crate::domain::net_header::{GrgFormatError, NetHeader};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Get the header file path for a net name
///
/// Format: `{net_name}.grg`
pub fn grg_path(net_name: impl AsRef<Path>) -> PathBuf {
    let mut path = net_name.as_ref().as_os_str().to_owned();
    path.push(".");
    path.push(GRG_FILE_EXTENSION);
    PathBuf::from(path)
}

/// Load and parse the net header
///
/// Opens `{path}`, reads the single header line, and closes the file before
/// returning. Open failure carries the offending path.
pub fn load_net_header(path: impl AsRef<Path>) -> Result<NetHeader, GrgFormatError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| GrgFormatError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut line = String::new();
    let read = BufReader::new(file).read_line(&mut line)?;
    if read == 0 {
        return Err(GrgFormatError::MissingHeaderLine);
    }

    NetHeader::parse(&line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_grg_path() {
        assert_eq!(grg_path("model"), PathBuf::from("model.grg"));
        assert_eq!(grg_path("nets/m1.v2"), PathBuf::from("nets/m1.v2.grg"));
    }

    #[test]
    fn test_load_net_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("net.grg");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "1 3 2 4").unwrap();

        let header = load_net_header(&path).unwrap();
        assert_eq!(header.places, 3);
        assert_eq!(header.transitions, 4);
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.grg");

        let result = load_net_header(&path);
        match result {
            Err(GrgFormatError::Open { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Open error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("net.grg");
        File::create(&path).unwrap();

        let result = load_net_header(&path);
        assert!(matches!(result, Err(GrgFormatError::MissingHeaderLine)));
    }
}
