//! # Integration Tests
//!
//! Record-level scenarios for the ENR entry layer.

pub mod enr_entries;
