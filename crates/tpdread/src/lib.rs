//! tpdread - Reader for GreatSPN-style timed-place distribution files
//!
//! This crate provides functionality to:
//! - Parse `.grg` net cardinality headers (subnets, places, groups, transitions)
//! - Stream-decode `.tpd` firing-time distribution records, one per place
//! - Reduce each place's discrete distribution to its expectation (mean delay)

pub mod constants;
pub mod domain;
pub mod infra;
pub mod app;

// Re-export commonly used types
pub use app::average::{AverageError, average_all_places, average_for_place};
pub use domain::distribution::{DistributionRecord, PlaceStats};
pub use domain::net_header::NetHeader;
