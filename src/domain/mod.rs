//! Domain types used throughout the correction pipeline.
//!
//! This module defines:
//!
//! - the out-of-domain handling policy (`OutOfRange`)
//! - the correction configuration (`DeredConfig`)

pub mod types;

pub use types::*;
