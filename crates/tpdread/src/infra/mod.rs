//! Infrastructure layer - File I/O
//!
//! This module handles the on-disk `.grg` and `.tpd` files.

pub mod grg_io;
pub mod tpd_io;
