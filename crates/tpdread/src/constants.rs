//! File format constants shared by the `.grg` and `.tpd` readers.

// =============================================================================
// File format
// =============================================================================

/// Byte size of one serialized double in a `.tpd` record
pub const DOUBLE_SIZE: usize = 8;

/// Extension of the net cardinality header file
pub const GRG_FILE_EXTENSION: &str = "grg";

/// Extension of the timed-place distribution file
pub const TPD_FILE_EXTENSION: &str = "tpd";

// =============================================================================
// Header layout
// =============================================================================

/// Number of integer fields on the `.grg` header line
pub const NET_HEADER_FIELDS: usize = 4;
