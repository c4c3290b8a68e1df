//! Expectation queries over a net's distribution files
//!
//! This module implements the end-to-end read: load the `.grg` header for the
//! place count, then make one forward pass over the `.tpd` stream, reducing
//! records as they are decoded. The pass stops at the requested place's
//! record; querying all places reads the file to the end. Both files are
//! opened and closed within the query, on every return path.

use crate::domain::distribution::PlaceStats;
use crate::domain::net_header::GrgFormatError;
use crate::infra::grg_io::{grg_path, load_net_header};
use crate::infra::tpd_io::{TpdFormatError, TpdReader, tpd_path};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Expectation query errors
#[derive(Debug, Error)]
pub enum AverageError {
    /// Distribution file missing or unreadable
    #[error("can't open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Net header file failed to open or parse
    #[error(transparent)]
    Header(#[from] GrgFormatError),
    /// Distribution stream failed to decode
    #[error(transparent)]
    Distribution(#[from] TpdFormatError),
    /// Requested place index is 0 or beyond the net's place count. The
    /// legacy reader answered 0.0 here, indistinguishable from a genuine
    /// zero expectation.
    #[error("place {place} not found: net has {places} places")]
    PlaceNotFound { place: usize, places: u32 },
}

fn open_distributions(net_name: &Path) -> Result<(u32, TpdReader<BufReader<File>>), AverageError> {
    let header = load_net_header(grg_path(net_name))?;

    // opened only once the header is known good
    let path = tpd_path(net_name);
    let file = File::open(&path).map_err(|source| AverageError::Open { path, source })?;

    let reader = TpdReader::new(BufReader::new(file), header.places as usize);
    Ok((header.places, reader))
}

/// Compute the firing-delay expectation of one place.
///
/// `place` is 1-based, following the record order of the `.tpd` file. The
/// pass over the stream ends at that place's record; records after it are
/// never read.
pub fn average_for_place(
    net_name: impl AsRef<Path>,
    place: usize,
) -> Result<PlaceStats, AverageError> {
    let (places, mut records) = open_distributions(net_name.as_ref())?;
    if place == 0 || place > places as usize {
        return Err(AverageError::PlaceNotFound { place, places });
    }

    for result in &mut records {
        let stats = result?;
        if stats.place == place {
            return Ok(stats);
        }
    }

    // unreachable while the reader yields exactly `places` records, but the
    // bound check above is the contract
    Err(AverageError::PlaceNotFound { place, places })
}

/// Compute the firing-delay expectation of every place, in place order
pub fn average_all_places(net_name: impl AsRef<Path>) -> Result<Vec<PlaceStats>, AverageError> {
    let (_, records) = open_distributions(net_name.as_ref())?;
    let stats = records.collect::<Result<Vec<_>, _>>()?;
    Ok(stats)
}
