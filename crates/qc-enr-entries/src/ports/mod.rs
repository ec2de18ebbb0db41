//! # Ports Layer - Hexagonal Architecture Boundaries
//!
//! This crate only has driven ports: the record container that owns the
//! encoded values, and the source of its configuration.

pub mod outbound;

pub use outbound::{ConfigProvider, RecordStore};
