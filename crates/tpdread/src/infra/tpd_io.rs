//! Timed-place distribution file I/O
//!
//! This module provides the streaming reader for `.tpd` files and the write
//! side used to produce them. A `.tpd` file is a bare concatenation of one
//! variable-length record per place: two f64 bounds followed by the
//! bounds-derived number of f64 probability masses. There are no separators,
//! lengths, or checksums, so the file can only be read sequentially, front to
//! back, reconstructing each record boundary from its decoded bounds.

use crate::constants::TPD_FILE_EXTENSION;
use crate::domain::codec::FileByteOrder;
use crate::domain::distribution::{
    DistributionRecord, ExpectationAccumulator, PlaceStats, count_masses,
};
use byteorder::{ReadBytesExt, WriteBytesExt};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Get the distribution file path for a net name
///
/// Format: `{net_name}.tpd`
pub fn tpd_path(net_name: impl AsRef<Path>) -> PathBuf {
    let mut path = net_name.as_ref().as_os_str().to_owned();
    path.push(".");
    path.push(TPD_FILE_EXTENSION);
    PathBuf::from(path)
}

/// Distribution file errors
#[derive(Debug, Error)]
pub enum TpdFormatError {
    /// The stream ended inside a record. The legacy reader fabricated byte
    /// values from the EOF sentinel here; this reader reports the place whose
    /// record was cut short instead.
    #[error("distribution stream truncated in record for place {place}")]
    Truncated { place: usize },
    /// I/O error other than end-of-stream
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Streaming reader over the per-place records of a `.tpd` stream.
///
/// Yields one [`PlaceStats`] per record, in place order, reducing each record
/// to its expectation as the masses are decoded. At most one record is active
/// at a time and the stream is never rewound, so memory stays O(1) in the
/// place count. Iteration stops after the number of places declared by the
/// net header, or at the first error.
pub struct TpdReader<R: Read> {
    reader: R,
    places: usize,
    next_place: usize,
}

impl<R: Read> TpdReader<R> {
    /// Wrap a byte stream holding `places` records
    pub fn new(reader: R, places: usize) -> Self {
        Self {
            reader,
            places,
            next_place: 1,
        }
    }

    /// 1-based index of the record the next call will decode
    pub fn next_place(&self) -> usize {
        self.next_place
    }

    fn read_double(&mut self) -> Result<f64, TpdFormatError> {
        self.reader
            .read_f64::<FileByteOrder>()
            .map_err(|e| match e.kind() {
                io::ErrorKind::UnexpectedEof => TpdFormatError::Truncated {
                    place: self.next_place,
                },
                _ => TpdFormatError::Io(e),
            })
    }

    fn read_record_stats(&mut self) -> Result<PlaceStats, TpdFormatError> {
        let min_time = self.read_double()?;
        let max_time = self.read_double()?;

        let mut acc = ExpectationAccumulator::new();
        for j in 0..count_masses(min_time, max_time) {
            acc.add_mass(j, self.read_double()?);
        }

        let stats = acc.into_stats(self.next_place);
        self.next_place += 1;
        Ok(stats)
    }
}

impl<R: Read> Iterator for TpdReader<R> {
    type Item = Result<PlaceStats, TpdFormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_place > self.places {
            return None;
        }
        match self.read_record_stats() {
            Ok(stats) => Some(Ok(stats)),
            Err(e) => {
                // stop after the first error
                self.next_place = self.places + 1;
                Some(Err(e))
            }
        }
    }
}

/// Write one record in wire layout: bounds, then the masses in offset order.
///
/// The record's mass count is derived from its bounds on read-back, so
/// `record.masses.len()` must equal
/// `count_masses(record.min_time, record.max_time)` for the file to decode
/// as written.
pub fn write_record(writer: &mut impl Write, record: &DistributionRecord) -> io::Result<()> {
    writer.write_f64::<FileByteOrder>(record.min_time)?;
    writer.write_f64::<FileByteOrder>(record.max_time)?;
    for &mass in &record.masses {
        writer.write_f64::<FileByteOrder>(mass)?;
    }
    Ok(())
}

/// Save a full distribution file, one record per place in place order
pub fn save_distributions(
    path: impl AsRef<Path>,
    records: &[DistributionRecord],
) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for record in records {
        write_record(&mut writer, record)?;
    }

    writer.flush()
}
