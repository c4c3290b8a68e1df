//! Domain layer - Pure computational logic
//!
//! This module contains the wire codec and reduction algorithms without I/O
//! dependencies.

pub mod codec;
pub mod distribution;
pub mod net_header;
