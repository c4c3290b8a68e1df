//! Binary double codec
//!
//! Every value in a `.tpd` file is a 64-bit float serialized as its raw bit
//! pattern, eight bytes, no length prefix or tag. The documented layout is
//! little-endian; the `native-byte-order` feature switches to the host order
//! for byte-compatibility with files written by the legacy tool on
//! big-endian machines. NaN and infinity pass through as opaque bit patterns.

use crate::constants::DOUBLE_SIZE;
use byteorder::ByteOrder;

#[cfg(not(feature = "native-byte-order"))]
pub type FileByteOrder = byteorder::LittleEndian;

#[cfg(feature = "native-byte-order")]
pub type FileByteOrder = byteorder::NativeEndian;

/// Serialize a double into its on-disk byte pattern
pub fn encode_double(value: f64) -> [u8; DOUBLE_SIZE] {
    let mut buf = [0u8; DOUBLE_SIZE];
    FileByteOrder::write_f64(&mut buf, value);
    buf
}

/// Reinterpret an on-disk byte pattern as a double
pub fn decode_double(bytes: &[u8; DOUBLE_SIZE]) -> f64 {
    FileByteOrder::read_f64(bytes)
}
